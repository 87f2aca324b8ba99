// MIT/Apache2 License

use crate::{
    canvas::{with_save, Canvas, ClipOp},
    color::Color,
    fill::FillStyle,
    geometry::Rect,
    measure::{dip_to_px, MeasureSpec, DESIRED_SIZE_DIP},
    mode::ClipMode,
    paths::{arrow_points, circle_geometry, circle_path, polygon_path},
};
use lyon_geom::Angle;

/// Configuration attributes read once at construction.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Config {
    /// The `clipType` attribute: a code in `0..=5` selecting a [`ClipMode`].
    pub clip_type: Option<i32>,
}

/// A rectangular drawable surface that renders one of six fixed clip-and-fill demonstrations.
///
/// The host drives the whole lifecycle: it measures the view with [`measure`](ClipDemoView::measure), assigns
/// bounds with [`layout`](ClipDemoView::layout), and asks for a repaint with [`draw`](ClipDemoView::draw),
/// supplying whatever [`Canvas`] it renders with. The view keeps no state beyond its bounds, its mode, and two
/// fixed colors; every repaint derives its geometry from scratch.
#[derive(Debug)]
pub struct ClipDemoView {
    bounds: Rect,
    mode: ClipMode,
    fill: FillStyle,
    background: Color,
}

impl ClipDemoView {
    /// Create a view from optional configuration. A missing configuration, a missing `clipType`, or an
    /// unknown code all select [`ClipMode::NoClip`].
    pub fn new(config: Option<&Config>) -> Self {
        let mode = config
            .and_then(|config| config.clip_type)
            .map(ClipMode::from_code)
            .unwrap_or_default();
        Self::with_mode(mode)
    }

    /// Create a view rendering the given mode.
    pub fn with_mode(mode: ClipMode) -> Self {
        ClipDemoView {
            bounds: Rect::default(),
            mode,
            fill: FillStyle::solid(Color::WHITE),
            background: Color::TRANSLUCENT_RED,
        }
    }

    /// The mode this view renders. Fixed for the lifetime of the view.
    #[inline]
    pub fn mode(&self) -> ClipMode {
        self.mode
    }

    /// The bounds assigned by the last [`layout`](ClipDemoView::layout) call.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The translucent background the host paints beneath the clipped drawing, which makes the clipped-away
    /// area visible.
    #[inline]
    pub fn background(&self) -> Color {
        self.background
    }

    /// Resolve the measurement constraints against a desired square of [`DESIRED_SIZE_DIP`] units, converted
    /// to pixels at the given display density. Each axis resolves independently.
    pub fn measure(
        &self,
        width_spec: MeasureSpec,
        height_spec: MeasureSpec,
        density: f32,
    ) -> (i32, i32) {
        let desired = dip_to_px(DESIRED_SIZE_DIP, density);
        (width_spec.resolve(desired), height_spec.resolve(desired))
    }

    /// Store the assigned bounds, rebased to a (0, 0) origin in local drawing space.
    pub fn layout(&mut self, left: i32, top: i32, right: i32, bottom: i32) {
        self.bounds = Rect::from_size(right - left, bottom - top);
    }

    /// Fill the bounds with the background color. On platforms where the host owns the background this runs
    /// before [`draw`](ClipDemoView::draw); a bundled host should do the same.
    pub fn draw_background(&self, canvas: &mut dyn Canvas) -> crate::Result {
        canvas.fill_rect(
            self.bounds,
            &FillStyle {
                color: self.background,
                anti_alias: false,
            },
        )
    }

    /// Render the demonstration for the configured mode.
    ///
    /// Every mode leaves the canvas transform and clip exactly as it found them.
    pub fn draw(&self, canvas: &mut dyn Canvas) -> crate::Result {
        log::trace!("drawing {:?} into {:?}", self.mode, self.bounds);
        match self.mode {
            ClipMode::NoClip => self.draw_no_clip(canvas),
            ClipMode::Rect => self.draw_clip_rect(canvas),
            ClipMode::RectRotated => self.draw_clip_rect_rotated(canvas),
            ClipMode::RectRotatedTranslated => self.draw_clip_rect_rotated_translated(canvas),
            ClipMode::PathPolygon => self.draw_clip_polygon(canvas),
            ClipMode::PathCircle => self.draw_clip_circle(canvas),
        }
    }

    fn draw_no_clip(&self, canvas: &mut dyn Canvas) -> crate::Result {
        canvas.fill_rect(self.bounds, &self.fill)
    }

    fn draw_clip_rect(&self, canvas: &mut dyn Canvas) -> crate::Result {
        with_save(canvas, |canvas| {
            let dx = self.bounds.width() >> 2;
            let dy = self.bounds.height() >> 2;
            let inset = self.bounds.inset(dx, dy);
            canvas.clip_rect(inset, ClipOp::Replace)?;
            canvas.fill_rect(inset, &self.fill)
        })
    }

    fn draw_clip_rect_rotated(&self, canvas: &mut dyn Canvas) -> crate::Result {
        with_save(canvas, |canvas| {
            let side = self.bounds.min_side();
            canvas.rotate(Angle::degrees(45.0))?;
            // don't draw outside bounds
            canvas.clip_rect(Rect::from_size(side, side), ClipOp::Intersect)?;
            canvas.fill_rect(self.bounds, &self.fill)
        })
    }

    fn draw_clip_rect_rotated_translated(&self, canvas: &mut dyn Canvas) -> crate::Result {
        with_save(canvas, |canvas| {
            let angle: Angle<f32> = Angle::degrees(45.0);
            let side = (self.bounds.min_side() as f32 * angle.radians.cos()) as i32;
            canvas.translate((self.bounds.width() >> 1) as f32, 0.0)?;
            canvas.rotate(angle)?;
            // don't draw outside bounds
            canvas.clip_rect(Rect::from_size(side, side), ClipOp::Intersect)?;
            canvas.fill_rect(self.bounds, &self.fill)
        })
    }

    fn draw_clip_polygon(&self, canvas: &mut dyn Canvas) -> crate::Result {
        with_save(canvas, |canvas| {
            let corners = arrow_points(self.bounds.width(), self.bounds.height());
            canvas.clip_path(&polygon_path(&corners))?;
            // this branch floods a bare white rather than the view's paint
            canvas.fill_color(Color::WHITE)
        })
    }

    fn draw_clip_circle(&self, canvas: &mut dyn Canvas) -> crate::Result {
        with_save(canvas, |canvas| {
            let (center, radius) = circle_geometry(self.bounds.width(), self.bounds.height());
            canvas.clip_path(&circle_path(center, radius as f32))?;
            canvas.fill_paint(&self.fill)
        })
    }
}

impl Default for ClipDemoView {
    /// A view in [`ClipMode::NoClip`] with empty bounds.
    fn default() -> Self {
        Self::new(None)
    }
}
