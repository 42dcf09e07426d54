//! RGB color handling with hex parsing and alpha composition.

#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Fraction;

/// RGB color value with hex string representation.
///
/// Style files carry colors as `"#rrggbb"` strings, so the serde
/// representation goes through [`RgbColor::from_hex`] and [`RgbColor::to_hex`].
/// A value of this type is therefore always a valid hex color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use gridpost::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a lowercase hex string in the format "#rrggbb".
    ///
    /// # Examples
    ///
    /// ```
    /// use gridpost::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080ff");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Combines the color with an opacity into an 8-digit `#rrggbbaa` string.
    ///
    /// The alpha byte is `round(opacity * 255)`, written as two lowercase,
    /// zero-padded hex digits after the six color digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridpost::models::{Fraction, RgbColor};
    ///
    /// let white = RgbColor::new(255, 255, 255);
    /// assert_eq!(white.with_alpha(Fraction::clamped(0.5)), "#ffffff80");
    /// assert_eq!(white.with_alpha(Fraction::ZERO), "#ffffff00");
    /// ```
    #[must_use]
    pub fn with_alpha(&self, opacity: Fraction) -> String {
        format!("{}{:02x}", self.to_hex(), alpha_byte(opacity))
    }
}

/// Alpha channel byte for an opacity: `round(opacity * 255)`.
#[must_use]
pub fn alpha_byte(opacity: Fraction) -> u8 {
    (opacity.get() * 255.0).round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is white (#ffffff).
    fn default() -> Self {
        Self::WHITE
    }
}

impl TryFrom<String> for RgbColor {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::from_hex(&value).map_err(|e| format!("{e:#}"))
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        let color = RgbColor::from_hex("#FF0000").unwrap();
        assert_eq!(color, RgbColor::new(255, 0, 0));

        let color = RgbColor::from_hex("00FF00").unwrap();
        assert_eq!(color, RgbColor::new(0, 255, 0));

        let color = RgbColor::from_hex("#0000ff").unwrap();
        assert_eq!(color, RgbColor::new(0, 0, 255));

        let color = RgbColor::from_hex("  #FFFFFF  ").unwrap();
        assert_eq!(color, RgbColor::new(255, 255, 255));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#FFF").is_err());
        assert!(RgbColor::from_hex("#FFFFFFF").is_err());
        assert!(RgbColor::from_hex("GGGGGG").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#").is_err());
        assert!(RgbColor::from_hex("#ééé").is_err());
        assert!(RgbColor::from_hex("#+f+f+f").is_err());
        assert!(RgbColor::from_hex("+1+2+3").is_err());
        assert!(RgbColor::from_hex("#-1-2-3").is_err());
    }

    #[test]
    fn test_to_hex_is_lowercase() {
        assert_eq!(RgbColor::new(255, 0, 0).to_hex(), "#ff0000");
        assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080ff");
        assert_eq!(RgbColor::new(0, 0, 0).to_hex(), "#000000");
    }

    #[test]
    fn test_with_alpha_rounding() {
        let c = RgbColor::new(0x12, 0xab, 0xef);
        assert_eq!(c.with_alpha(Fraction::ONE), "#12abefff");
        assert_eq!(c.with_alpha(Fraction::ZERO), "#12abef00");
        // 0.5 * 255 = 127.5 rounds up
        assert_eq!(c.with_alpha(Fraction::clamped(0.5)), "#12abef80");
        // 0.9 * 255 = 229.5 rounds up to 230 = 0xe6
        assert_eq!(c.with_alpha(Fraction::clamped(0.9)), "#12abefe6");
        // 0.02 * 255 = 5.1 -> 5, zero padded
        assert_eq!(c.with_alpha(Fraction::clamped(0.02)), "#12abef05");
    }

    #[test]
    fn test_with_alpha_shape_for_all_percentages() {
        let c = RgbColor::new(1, 2, 3);
        for step in 0..=100 {
            let opacity = Fraction::clamped(f64::from(step) / 100.0);
            let out = c.with_alpha(opacity);
            let digits = out.strip_prefix('#').unwrap();
            assert_eq!(digits.len(), 8, "{out}");
            assert!(digits.chars().all(|ch| ch.is_ascii_hexdigit() && !ch.is_ascii_uppercase()));
            let expected = (opacity.get() * 255.0).round() as u8;
            assert_eq!(u8::from_str_radix(&digits[6..], 16).unwrap(), expected);
        }
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&RgbColor::new(255, 0, 0)).unwrap();
        assert_eq!(json, "\"#ff0000\"");

        let parsed: RgbColor = serde_json::from_str("\"#00FF00\"").unwrap();
        assert_eq!(parsed, RgbColor::new(0, 255, 0));

        assert!(serde_json::from_str::<RgbColor>("\"red\"").is_err());
        assert!(serde_json::from_str::<RgbColor>("12").is_err());
    }

    #[test]
    fn test_default() {
        assert_eq!(RgbColor::default(), RgbColor::new(255, 255, 255));
    }
}
