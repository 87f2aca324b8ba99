// MIT/Apache2 License

use clipdemo::{CanvasOp, ClipDemoView, Config, Recorder, Result};

fn main() -> Result {
    env_logger::init();

    // run each mode through a 200x200 layout and dump the commands it issues
    for code in 0..6 {
        let mut view = ClipDemoView::new(Some(&Config {
            clip_type: Some(code),
        }));
        let (width, height) = view.measure(
            clipdemo::MeasureSpec::exactly(200),
            clipdemo::MeasureSpec::exactly(200),
            1.0,
        );
        view.layout(0, 0, width, height);

        let mut recorder = Recorder::new();
        view.draw_background(&mut recorder)?;
        view.draw(&mut recorder)?;

        println!("== clipType {} ({:?})", code, view.mode());
        for op in recorder.ops() {
            match op {
                CanvasOp::ClipPath { points } => println!("   ClipPath ({} vertices)", points.len()),
                op => println!("   {:?}", op),
            }
        }
    }

    Ok(())
}
