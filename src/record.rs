// MIT/Apache2 License

use crate::{
    canvas::{Canvas, ClipOp},
    color::Color,
    fill::FillStyle,
    geometry::Rect,
    paths::path_points,
    Error,
};
use lyon_geom::{Angle, Point, Transform};
use lyon_path::Path;
use std::mem;

/// A single canvas command, with its data flattened into plain geometry.
///
/// Clip paths are stored as their outline vertices rather than as path objects, so recorded commands can be
/// inspected and compared directly.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasOp {
    Save,
    Restore,
    Translate { dx: f32, dy: f32 },
    Rotate { angle: Angle<f32> },
    ClipRect { rect: Rect, op: ClipOp },
    ClipPath { points: Vec<Point<f32>> },
    FillRect { rect: Rect, style: FillStyle },
    FillColor { color: Color },
    FillPaint { style: FillStyle },
}

/// A `Canvas` that records every command applied to it.
///
/// All drawing backend chains terminate somewhere; this one terminates in a command list. Alongside the list it
/// tracks the live transform and the save stack, so callers can map points through the recorded state and
/// verify that no transform leaks out of a drawing pass.
#[derive(Debug)]
pub struct Recorder {
    ops: Vec<CanvasOp>,
    transform: Transform<f32>,
    saved: Vec<Transform<f32>>,
}

impl Recorder {
    /// Create an empty recorder with an identity transform.
    #[inline]
    pub fn new() -> Self {
        Recorder {
            ops: Vec::new(),
            transform: Transform::identity(),
            saved: Vec::new(),
        }
    }

    /// The commands recorded so far, in application order.
    #[inline]
    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    /// Take the recorded commands, leaving the recorder empty but keeping its transform state.
    #[inline]
    pub fn take_ops(&mut self) -> Vec<CanvasOp> {
        mem::take(&mut self.ops)
    }

    /// The transform currently in effect.
    #[inline]
    pub fn transform(&self) -> Transform<f32> {
        self.transform
    }

    /// How many saved states are on the stack.
    #[inline]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}

impl Default for Recorder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for Recorder {
    fn save(&mut self) -> crate::Result {
        self.saved.push(self.transform);
        self.ops.push(CanvasOp::Save);
        Ok(())
    }

    fn restore(&mut self) -> crate::Result {
        match self.saved.pop() {
            Some(transform) => {
                self.transform = transform;
                self.ops.push(CanvasOp::Restore);
                Ok(())
            }
            None => Err(Error::RestoreUnderflow),
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) -> crate::Result {
        self.transform = Transform::translation(dx, dy).then(&self.transform);
        self.ops.push(CanvasOp::Translate { dx, dy });
        Ok(())
    }

    fn rotate(&mut self, angle: Angle<f32>) -> crate::Result {
        self.transform = Transform::rotation(angle).then(&self.transform);
        self.ops.push(CanvasOp::Rotate { angle });
        Ok(())
    }

    fn clip_rect(&mut self, rect: Rect, op: ClipOp) -> crate::Result {
        self.ops.push(CanvasOp::ClipRect { rect, op });
        Ok(())
    }

    fn clip_path(&mut self, path: &Path) -> crate::Result {
        self.ops.push(CanvasOp::ClipPath {
            points: path_points(path),
        });
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, style: &FillStyle) -> crate::Result {
        self.ops.push(CanvasOp::FillRect {
            rect,
            style: *style,
        });
        Ok(())
    }

    fn fill_color(&mut self, color: Color) -> crate::Result {
        self.ops.push(CanvasOp::FillColor { color });
        Ok(())
    }

    fn fill_paint(&mut self, style: &FillStyle) -> crate::Result {
        self.ops.push(CanvasOp::FillPaint { style: *style });
        Ok(())
    }
}

/// Replay recorded commands onto another canvas.
///
/// Flattened clip paths come back as polygon clips, which is lossless for the polygonal clips this crate
/// produces and a faithful flattening for the curved ones.
pub fn replay<C: Canvas + ?Sized>(ops: &[CanvasOp], canvas: &mut C) -> crate::Result {
    for op in ops {
        match op {
            CanvasOp::Save => canvas.save()?,
            CanvasOp::Restore => canvas.restore()?,
            CanvasOp::Translate { dx, dy } => canvas.translate(*dx, *dy)?,
            CanvasOp::Rotate { angle } => canvas.rotate(*angle)?,
            CanvasOp::ClipRect { rect, op } => canvas.clip_rect(*rect, *op)?,
            CanvasOp::ClipPath { points } => {
                let mut builder = Path::builder();
                let mut iter = points.iter().copied();
                if let Some(first) = iter.next() {
                    builder.begin(first);
                    for pt in iter {
                        builder.line_to(pt);
                    }
                    builder.close();
                }
                canvas.clip_path(&builder.build())?;
            }
            CanvasOp::FillRect { rect, style } => canvas.fill_rect(*rect, style)?,
            CanvasOp::FillColor { color } => canvas.fill_color(*color)?,
            CanvasOp::FillPaint { style } => canvas.fill_paint(style)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use lyon_geom::point;

    #[test]
    fn test_restore_underflow() {
        let mut recorder = Recorder::new();
        assert!(matches!(recorder.restore(), Err(Error::RestoreUnderflow)));
        assert!(recorder.ops().is_empty());
    }

    #[test]
    fn test_save_restore_reverts_transform() {
        let mut recorder = Recorder::new();
        recorder.save().unwrap();
        recorder.translate(10.0, 5.0).unwrap();
        recorder.rotate(Angle::degrees(90.0)).unwrap();
        recorder.restore().unwrap();

        assert_eq!(recorder.depth(), 0);
        let probe = point(3.0, 4.0);
        assert_eq!(recorder.transform().transform_point(probe), probe);
    }

    #[test]
    fn test_translate_then_rotate_composes_locally() {
        // the rotation happens inside the translated frame
        let mut recorder = Recorder::new();
        recorder.translate(50.0, 0.0).unwrap();
        recorder.rotate(Angle::degrees(90.0)).unwrap();

        let mapped = recorder.transform().transform_point(point(10.0, 0.0));
        assert_relative_eq!(mapped.x, 50.0, epsilon = 1e-4);
        assert_relative_eq!(mapped.y, 10.0, epsilon = 1e-4);
    }

    #[test]
    fn test_replay_reproduces_ops() {
        let mut recorder = Recorder::new();
        recorder.save().unwrap();
        recorder.translate(1.0, 2.0).unwrap();
        recorder
            .clip_rect(Rect::from_size(10, 10), ClipOp::Intersect)
            .unwrap();
        recorder.fill_color(Color::WHITE).unwrap();
        recorder.restore().unwrap();

        let mut copy = Recorder::new();
        replay(recorder.ops(), &mut copy).unwrap();
        assert_eq!(recorder.ops(), copy.ops());
    }
}
