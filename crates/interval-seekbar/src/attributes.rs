//! Construction-time configuration.
//!
//! [`SeekBarAttributes`] mirrors the attribute set a host layout file can
//! carry. Every field is optional; missing fields keep their defaults.
//!
//! ```yaml
//! handle_radius: 12        # dp, scaled by density
//! left_progress: 10
//! right_progress: 90
//! background_color: "#929292"
//! progress_color: 0xFF003AFD
//! ```

use crate::style::{SeekBarStyle, DEFAULT_LEFT_PROGRESS, DEFAULT_RIGHT_PROGRESS};
use interval_core::{Color, ColorParseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or resolving attributes.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed YAML document.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Malformed TOML document.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A color attribute could not be parsed.
    #[error("invalid color for `{field}`: {source}")]
    InvalidColor {
        field: &'static str,
        #[source]
        source: ColorParseError,
    },

    /// Display density must be a positive, finite scale factor.
    #[error("invalid density {0}: must be positive and finite")]
    InvalidDensity(f32),
}

/// A color as written in configuration.
///
/// Strings use `#RRGGBB` or `#RRGGBBAA`; integers are packed `0xAARRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    /// Packed `0xAARRGGBB`
    Argb(u32),
    /// Hex string
    Hex(String),
}

impl ColorValue {
    /// Parse into a [`Color`].
    pub fn to_color(&self) -> Result<Color, ColorParseError> {
        match self {
            Self::Argb(argb) => Ok(Color::from_argb(*argb)),
            Self::Hex(hex) => Color::from_hex(hex),
        }
    }
}

impl From<Color> for ColorValue {
    fn from(color: Color) -> Self {
        Self::Argb(color.to_argb())
    }
}

/// Optional style and progress attributes supplied at construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeekBarAttributes {
    /// Handle color
    pub handle_color: Option<ColorValue>,
    /// Handle radius in density-independent units
    pub handle_radius: Option<f32>,
    /// Track stroke width in density-independent units
    pub line_width: Option<f32>,
    /// Initial left progress
    pub left_progress: Option<i32>,
    /// Initial right progress
    pub right_progress: Option<i32>,
    /// Horizontal margin in density-independent units
    pub horizontal_margin: Option<f32>,
    /// Vertical margin in density-independent units
    pub vertical_margin: Option<f32>,
    /// Unselected track color
    pub background_color: Option<ColorValue>,
    /// Selected interval color
    pub progress_color: Option<ColorValue>,
}

/// Attributes resolved against defaults and display density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedAttributes {
    /// Pixel style
    pub style: SeekBarStyle,
    /// Initial left progress
    pub left_progress: i32,
    /// Initial right progress
    pub right_progress: i32,
}

impl SeekBarAttributes {
    /// Parse attributes from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Parse attributes from a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Fill in defaults and convert dimensions to pixels.
    ///
    /// Supplied dimensions are multiplied by `density`; defaults are already
    /// in pixels and are used as-is. Progress values are taken verbatim.
    pub fn resolve(&self, density: f32) -> Result<ResolvedAttributes, ConfigError> {
        if !(density.is_finite() && density > 0.0) {
            return Err(ConfigError::InvalidDensity(density));
        }

        let defaults = SeekBarStyle::default();
        let dimension = |value: Option<f32>, default: f32| value.map_or(default, |v| v * density);
        let color = |field: &'static str, value: Option<&ColorValue>, default: Color| {
            value.map_or(Ok(default), |v| {
                v.to_color()
                    .map_err(|source| ConfigError::InvalidColor { field, source })
            })
        };

        let style = SeekBarStyle {
            handle_color: color(
                "handle_color",
                self.handle_color.as_ref(),
                defaults.handle_color,
            )?,
            handle_radius: dimension(self.handle_radius, defaults.handle_radius),
            line_width: dimension(self.line_width, defaults.line_width),
            horizontal_margin: dimension(self.horizontal_margin, defaults.horizontal_margin),
            vertical_margin: dimension(self.vertical_margin, defaults.vertical_margin),
            background_color: color(
                "background_color",
                self.background_color.as_ref(),
                defaults.background_color,
            )?,
            progress_color: color(
                "progress_color",
                self.progress_color.as_ref(),
                defaults.progress_color,
            )?,
        };

        Ok(ResolvedAttributes {
            style,
            left_progress: self.left_progress.unwrap_or(DEFAULT_LEFT_PROGRESS),
            right_progress: self.right_progress.unwrap_or(DEFAULT_RIGHT_PROGRESS),
        })
    }
}
