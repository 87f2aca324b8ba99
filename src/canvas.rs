// MIT/Apache2 License

use crate::{color::Color, fill::FillStyle, geometry::Rect};
use lyon_geom::Angle;
use lyon_path::Path;

/// How a clip shape combines with the clip region already in effect.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClipOp {
    /// Set the clip region to exactly the given shape.
    Replace,
    /// Restrict the clip region to its overlap with the given shape.
    Intersect,
}

/// A drawing context which clip-and-fill commands can be applied to.
///
/// Transform commands compose the way 2D canvases compose them: each command applies to subsequent local
/// coordinates first, so a `translate` followed by a `rotate` rotates within the translated frame.
pub trait Canvas {
    /// Push the current transform and clip onto the state stack.
    fn save(&mut self) -> crate::Result;
    /// Pop the state stack, restoring the transform and clip saved by the matching `save`.
    fn restore(&mut self) -> crate::Result;

    /// Shift subsequent drawing by (`dx`, `dy`).
    fn translate(&mut self, dx: f32, dy: f32) -> crate::Result;
    /// Rotate subsequent drawing about the current origin.
    fn rotate(&mut self, angle: Angle<f32>) -> crate::Result;

    /// Combine a rectangle with the current clip region.
    fn clip_rect(&mut self, rect: Rect, op: ClipOp) -> crate::Result;
    /// Intersect the current clip region with the interior of a path.
    fn clip_path(&mut self, path: &Path) -> crate::Result;

    /// Fill a rectangle with the given style.
    fn fill_rect(&mut self, rect: Rect, style: &FillStyle) -> crate::Result;
    /// Flood the entire clipped surface with a bare color.
    fn fill_color(&mut self, color: Color) -> crate::Result;
    /// Flood the entire clipped surface with a paint style.
    fn fill_paint(&mut self, style: &FillStyle) -> crate::Result;
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn save(&mut self) -> crate::Result {
        C::save(self)
    }

    fn restore(&mut self) -> crate::Result {
        C::restore(self)
    }

    fn translate(&mut self, dx: f32, dy: f32) -> crate::Result {
        C::translate(self, dx, dy)
    }

    fn rotate(&mut self, angle: Angle<f32>) -> crate::Result {
        C::rotate(self, angle)
    }

    fn clip_rect(&mut self, rect: Rect, op: ClipOp) -> crate::Result {
        C::clip_rect(self, rect, op)
    }

    fn clip_path(&mut self, path: &Path) -> crate::Result {
        C::clip_path(self, path)
    }

    fn fill_rect(&mut self, rect: Rect, style: &FillStyle) -> crate::Result {
        C::fill_rect(self, rect, style)
    }

    fn fill_color(&mut self, color: Color) -> crate::Result {
        C::fill_color(self, color)
    }

    fn fill_paint(&mut self, style: &FillStyle) -> crate::Result {
        C::fill_paint(self, style)
    }
}

/// Run `f` between a save/restore pair.
///
/// The restore runs whether or not `f` succeeds, so transform and clip state cannot leak out of the block.
#[inline]
pub fn with_save<C: Canvas + ?Sized, T>(
    canvas: &mut C,
    f: impl FnOnce(&mut C) -> crate::Result<T>,
) -> crate::Result<T> {
    canvas.save()?;
    let result = f(canvas);
    let restored = canvas.restore();
    let value = result?;
    restored?;
    Ok(value)
}
