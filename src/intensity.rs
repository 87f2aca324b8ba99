// MIT/Apache2 License

use ordered_float::NotNan;

/// A color channel value, ranging from zero to one. This type is essentially a wrapper around an `f32`, but
/// with two invariants:
///
/// * The inner value will always be between `0.0` and `1.0`.
/// * The inner value will never be `NaN`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Intensity {
    inner: NotNan<f32>,
}

impl Intensity {
    /// Create a new `Intensity`, without checking the inner value.
    ///
    /// # Safety
    ///
    /// Behavior is undefined if `inner` is not a number, or outside of the range [0, 1].
    #[inline]
    pub const unsafe fn new_unchecked(inner: f32) -> Self {
        Self {
            inner: unsafe { NotNan::unchecked_new(inner) },
        }
    }

    /// Create a new `Intensity`. If the inner value does not meet the invariants mentioned above, this function
    /// returns `None`.
    #[inline]
    pub fn new(inner: f32) -> Option<Self> {
        if inner.is_nan() || inner < 0.0 || inner > 1.0 {
            None
        } else {
            Some(Self {
                inner: unsafe { NotNan::unchecked_new(inner) },
            })
        }
    }

    /// Get the inner value of the `Intensity`.
    #[inline]
    pub fn into_inner(self) -> f32 {
        self.inner.into_inner()
    }

    /// Clamp this value to a `u8`.
    #[inline]
    pub fn clamp_u8(self) -> u8 {
        (self.into_inner() * f32::from(u8::MAX)) as u8
    }
}

impl From<Intensity> for f32 {
    #[inline]
    fn from(i: Intensity) -> f32 {
        i.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(Intensity::new(0.0).is_some());
        assert!(Intensity::new(1.0).is_some());
        assert!(Intensity::new(-0.1).is_none());
        assert!(Intensity::new(1.1).is_none());
        assert!(Intensity::new(f32::NAN).is_none());
    }

    #[test]
    fn test_clamp_u8() {
        assert_eq!(Intensity::new(1.0).unwrap().clamp_u8(), 255);
        assert_eq!(Intensity::new(0.0).unwrap().clamp_u8(), 0);
    }
}
