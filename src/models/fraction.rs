//! Unit-interval values (opacity, image darkness).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A finite `f64` in `[0, 1]`.
///
/// Decoding is strict: out-of-range or non-finite numbers are rejected, so an
/// imported style never has its values silently coerced. Editor input goes
/// through [`Fraction::clamped`] instead.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Fraction(f64);

impl Fraction {
    /// Fully transparent / no darkening.
    pub const ZERO: Self = Self(0.0);
    /// Fully opaque.
    pub const ONE: Self = Self(1.0);

    /// Creates a fraction, rejecting values outside `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns a message when the value is NaN, infinite or out of range.
    pub fn new(value: f64) -> Result<Self, String> {
        if !value.is_finite() {
            return Err(format!("{value} is not a finite number"));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(format!("{value} is outside the range 0..1"));
        }
        Ok(Self(value))
    }

    /// Creates a fraction, clamping into `[0, 1]`. NaN becomes 0.
    #[must_use]
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            Self::ZERO
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// Returns the inner value.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Fraction {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Fraction> for f64 {
    fn from(value: Fraction) -> Self {
        value.0
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_bounds() {
        assert_eq!(Fraction::new(0.0).unwrap(), Fraction::ZERO);
        assert_eq!(Fraction::new(1.0).unwrap(), Fraction::ONE);
        assert!((Fraction::new(0.42).unwrap().get() - 0.42).abs() < f64::EPSILON);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Fraction::new(-0.01).is_err());
        assert!(Fraction::new(1.5).is_err());
        assert!(Fraction::new(f64::NAN).is_err());
        assert!(Fraction::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_clamped() {
        assert_eq!(Fraction::clamped(-3.0), Fraction::ZERO);
        assert_eq!(Fraction::clamped(7.0), Fraction::ONE);
        assert_eq!(Fraction::clamped(f64::NAN), Fraction::ZERO);
    }

    #[test]
    fn test_serde_is_strict() {
        let f: Fraction = serde_json::from_str("0.8").unwrap();
        assert!((f.get() - 0.8).abs() < f64::EPSILON);
        assert_eq!(serde_json::from_str::<Fraction>("1").unwrap(), Fraction::ONE);
        assert!(serde_json::from_str::<Fraction>("1.2").is_err());
        assert!(serde_json::from_str::<Fraction>("\"0.5\"").is_err());
        assert_eq!(serde_json::to_string(&Fraction::clamped(0.25)).unwrap(), "0.25");
    }
}
