// MIT/Apache2 License

use std::cmp;

/// The desired footprint of a view along one axis, in density-independent units.
pub const DESIRED_SIZE_DIP: f32 = 100.0;

/// How a measurement constraint binds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpecMode {
    /// The host has decided the exact size for this axis.
    Exactly,
    /// The view may take any size up to the given limit.
    AtMost,
    /// The view may take any size it wants.
    Unspecified,
}

/// A single-axis measurement constraint handed down by the host layout system.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MeasureSpec {
    /// How the `size` field binds.
    pub mode: SpecMode,
    /// The size the constraint carries. Meaningless for `Unspecified`.
    pub size: i32,
}

impl MeasureSpec {
    /// A constraint fixing the axis to exactly `size` pixels.
    #[inline]
    pub fn exactly(size: i32) -> Self {
        Self {
            mode: SpecMode::Exactly,
            size,
        }
    }

    /// A constraint capping the axis at `size` pixels.
    #[inline]
    pub fn at_most(size: i32) -> Self {
        Self {
            mode: SpecMode::AtMost,
            size,
        }
    }

    /// An unconstrained axis.
    #[inline]
    pub fn unspecified() -> Self {
        Self {
            mode: SpecMode::Unspecified,
            size: 0,
        }
    }

    /// Resolve this constraint against a desired size.
    #[inline]
    #[must_use]
    pub fn resolve(self, desired: i32) -> i32 {
        match self.mode {
            SpecMode::Exactly => self.size,
            SpecMode::AtMost => cmp::min(desired, self.size),
            SpecMode::Unspecified => desired,
        }
    }
}

/// Convert density-independent units to physical pixels, truncating toward zero.
#[inline]
#[must_use]
pub fn dip_to_px(dip: f32, density: f32) -> i32 {
    (dip * density) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(MeasureSpec::exactly(50).resolve(100), 50);
        assert_eq!(MeasureSpec::exactly(500).resolve(100), 500);
        assert_eq!(MeasureSpec::at_most(30).resolve(100), 30);
        assert_eq!(MeasureSpec::at_most(300).resolve(100), 100);
        assert_eq!(MeasureSpec::unspecified().resolve(100), 100);
    }

    #[test]
    fn test_dip_to_px() {
        assert_eq!(dip_to_px(100.0, 1.0), 100);
        assert_eq!(dip_to_px(100.0, 2.0), 200);
        // fractional densities truncate
        assert_eq!(dip_to_px(100.0, 1.505), 150);
    }
}
