// MIT/Apache2 License

use crate::color::Color;

/// Defines how filled shapes are painted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FillStyle {
    /// The solid color filled shapes are painted with.
    pub color: Color,
    /// Whether shape edges are anti-aliased.
    pub anti_alias: bool,
}

impl FillStyle {
    /// An anti-aliased solid fill in the given color.
    #[inline]
    pub fn solid(color: Color) -> Self {
        Self {
            color,
            anti_alias: true,
        }
    }
}

impl Default for FillStyle {
    /// An anti-aliased solid white fill.
    #[inline]
    fn default() -> Self {
        Self::solid(Color::WHITE)
    }
}
