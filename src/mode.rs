// MIT/Apache2 License

/// Which clip demonstration a view renders.
///
/// The set is closed: a view picks its mode once at construction and never changes it. Configuration codes
/// outside of the known range fall back to [`ClipMode::NoClip`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClipMode {
    /// Fill the full bounds with no clip applied.
    NoClip,
    /// Replace the clip with the bounds inset by a quarter of each side, then fill the inset rectangle.
    Rect,
    /// Rotate 45° about the origin, intersect the clip with the square of the shorter side, then fill the
    /// unrotated bounds.
    RectRotated,
    /// Translate to the horizontal midpoint, rotate 45°, intersect the clip with a square scaled by cos 45°,
    /// then fill the unrotated bounds.
    RectRotatedTranslated,
    /// Intersect the clip with a seven-vertex arrow polygon, then flood white.
    PathPolygon,
    /// Intersect the clip with a circle of three quarters of the shorter side, then flood the fill style.
    PathCircle,
}

impl Default for ClipMode {
    #[inline]
    fn default() -> Self {
        ClipMode::NoClip
    }
}

impl ClipMode {
    /// Map a `clipType` configuration code to a mode. Unknown codes fall back to `NoClip`.
    #[inline]
    pub fn from_code(code: i32) -> ClipMode {
        match code {
            0 => ClipMode::NoClip,
            1 => ClipMode::Rect,
            2 => ClipMode::RectRotated,
            3 => ClipMode::RectRotatedTranslated,
            4 => ClipMode::PathPolygon,
            5 => ClipMode::PathCircle,
            other => {
                log::warn!("Unknown clipType code {}, falling back to NoClip", other);
                ClipMode::NoClip
            }
        }
    }

    /// The `clipType` configuration code for this mode.
    #[inline]
    pub fn code(self) -> i32 {
        match self {
            ClipMode::NoClip => 0,
            ClipMode::Rect => 1,
            ClipMode::RectRotated => 2,
            ClipMode::RectRotatedTranslated => 3,
            ClipMode::PathPolygon => 4,
            ClipMode::PathCircle => 5,
        }
    }

    /// All six modes, in configuration-code order.
    pub const ALL: [ClipMode; 6] = [
        ClipMode::NoClip,
        ClipMode::Rect,
        ClipMode::RectRotated,
        ClipMode::RectRotatedTranslated,
        ClipMode::PathPolygon,
        ClipMode::PathCircle,
    ];
}
