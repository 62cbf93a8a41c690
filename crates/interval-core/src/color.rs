//! Color representation and parsing.

use serde::{Deserialize, Serialize};

/// RGBA color with values in the range [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component [0.0, 1.0]
    pub r: f32,
    /// Green component [0.0, 1.0]
    pub g: f32,
    /// Blue component [0.0, 1.0]
    pub b: f32,
    /// Alpha component [0.0, 1.0]
    pub a: f32,
}

impl Color {
    /// Create a new color, clamping values to [0.0, 1.0].
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create an opaque color from RGB values.
    #[must_use]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create a color from a packed `0xAARRGGBB` integer.
    ///
    /// This is the layout mobile toolkits use for color attributes, so
    /// `0xFF00_3AFD` is an opaque blue.
    #[must_use]
    pub fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    /// Pack into a `0xAARRGGBB` integer.
    #[must_use]
    pub fn to_argb(&self) -> u32 {
        u32::from_be_bytes([
            Self::channel(self.a),
            Self::channel(self.r),
            Self::channel(self.g),
            Self::channel(self.b),
        ])
    }

    /// Parse a hex color string (e.g., "#ff0000" or "ff0000").
    ///
    /// Supports 6-character RGB and 8-character RGBA formats.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(ColorParseError::InvalidHex);
        }

        let byte = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map(|v| f32::from(v) / 255.0)
                .map_err(|_| ColorParseError::InvalidHex)
        };

        match hex.len() {
            6 => Ok(Self::rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
            8 => Ok(Self::new(byte(0..2)?, byte(2..4)?, byte(4..6)?, byte(6..8)?)),
            _ => Err(ColorParseError::InvalidLength),
        }
    }

    /// Convert to hex string (RGB only).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            Self::channel(self.r),
            Self::channel(self.g),
            Self::channel(self.b)
        )
    }

    /// Linear interpolation between two colors.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::new(
            (other.r - self.r).mul_add(t, self.r),
            (other.g - self.g).mul_add(t, self.g),
            (other.b - self.b).mul_add(t, self.b),
            (other.a - self.a).mul_add(t, self.a),
        )
    }

    fn channel(v: f32) -> u8 {
        (v * 255.0).round() as u8
    }

    // Common colors
    /// Black color
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    /// White color
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    /// Mid gray (`#888888`)
    pub const GRAY: Self = Self {
        r: 136.0 / 255.0,
        g: 136.0 / 255.0,
        b: 136.0 / 255.0,
        a: 1.0,
    };
    /// Transparent color
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Invalid hex characters
    InvalidHex,
    /// Invalid string length
    InvalidLength,
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHex => write!(f, "invalid hex characters"),
            Self::InvalidLength => write!(f, "invalid hex string length (expected 6 or 8)"),
        }
    }
}

impl std::error::Error for ColorParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#929292").unwrap();
        assert_eq!(c.to_hex(), "#929292");
        assert_eq!(c.a, 1.0);

        let c = Color::from_hex("003AFD").unwrap();
        assert_eq!(c.r, 0.0);
        assert_eq!(c.b, 253.0 / 255.0);
        assert_eq!(c.to_hex(), "#003afd");
    }

    #[test]
    fn test_color_from_hex_with_alpha() {
        let c = Color::from_hex("#ff000080").unwrap();
        assert_eq!(c.r, 1.0);
        assert!((c.a - 0.502).abs() < 0.01);
    }

    #[test]
    fn test_color_from_hex_invalid() {
        assert_eq!(Color::from_hex("#gg0000"), Err(ColorParseError::InvalidHex));
        assert_eq!(Color::from_hex("#ff"), Err(ColorParseError::InvalidLength));
        assert_eq!(Color::from_hex("ééé"), Err(ColorParseError::InvalidHex));
    }

    #[test]
    fn test_color_from_argb() {
        let c = Color::from_argb(0xFF00_3AFD);
        assert_eq!(c, Color::from_hex("#003afd").unwrap());
        assert_eq!(Color::from_argb(0xFFFF_FFFF), Color::WHITE);
        assert_eq!(Color::from_argb(0x0000_0000), Color::TRANSPARENT);
    }

    #[test]
    fn test_color_gray_is_888888() {
        assert_eq!(Color::GRAY.to_hex(), "#888888");
        assert_eq!(Color::GRAY.to_argb(), 0xFF88_8888);
    }

    #[test]
    fn test_color_lerp_midpoint() {
        let mid = Color::BLACK.lerp(&Color::WHITE, 0.5);
        assert!((mid.r - 0.5).abs() < 0.001);
        assert!((mid.a - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_color_parse_error_display() {
        assert_eq!(
            ColorParseError::InvalidLength.to_string(),
            "invalid hex string length (expected 6 or 8)"
        );
    }

    proptest! {
        #[test]
        fn prop_argb_roundtrip(argb in any::<u32>()) {
            prop_assert_eq!(Color::from_argb(argb).to_argb(), argb);
        }

        #[test]
        fn prop_color_clamps_to_valid_range(r in -1.0f32..2.0, g in -1.0f32..2.0, b in -1.0f32..2.0) {
            let c = Color::rgb(r, g, b);
            prop_assert!((0.0..=1.0).contains(&c.r));
            prop_assert!((0.0..=1.0).contains(&c.g));
            prop_assert!((0.0..=1.0).contains(&c.b));
        }
    }
}
