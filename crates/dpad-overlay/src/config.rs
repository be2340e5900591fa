//! Overlay configuration.
//!
//! Every field has a default, so a configuration file only needs to name
//! what it changes:
//!
//! ```toml
//! font_size = 32.0
//! edge_border = 16.0
//! text_color = 0xFFFFFF00
//!
//! [captions]
//! up = "W"
//! down = "S"
//! left = "A"
//! right = "D"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use dpad_overlay_core::logging::targets;
use dpad_overlay_core::{dpad_info, dpad_warn};
use dpad_overlay_render::{Color, FontWeight, RenderResult, Stroke, TextAlign, TextStyle};

/// Errors raised while loading or validating a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or has mistyped fields.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be written out as TOML.
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A field is out of range.
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Caption text for each region. An empty string shows nothing; a missing
/// key keeps the role name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Captions {
    pub up: String,
    pub down: String,
    pub left: String,
    pub right: String,
}

impl Default for Captions {
    fn default() -> Self {
        Self {
            up: "UP".into(),
            down: "DOWN".into(),
            left: "LEFT".into(),
            right: "RIGHT".into(),
        }
    }
}

impl Captions {
    /// Captions in [`Direction::ALL`](crate::Direction::ALL) order.
    pub fn as_array(&self) -> [&str; 4] {
        [&self.up, &self.down, &self.left, &self.right].map(String::as_str)
    }
}

/// Tunable parameters of the overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DPadConfig {
    /// Caption font size in pixels.
    pub font_size: f32,
    /// Margin from the widget edge and vertical growth of hit boxes.
    pub edge_border: f32,
    /// Extra tolerance around hit boxes when testing a touch-down.
    pub touch_slop: f32,
    /// Padding added to the measured caption width and line spacing.
    pub metric_padding: f32,
    /// Width of the box outlines.
    pub stroke_width: f32,
    /// Draw captions in bold.
    pub bold: bool,
    /// Caption color as `0xAARRGGBB`.
    pub text_color: u32,
    /// Outline color as `0xAARRGGBB`.
    pub outline_color: u32,
    /// The caption used to size every region.
    pub widest_caption: String,
    pub captions: Captions,
}

impl Default for DPadConfig {
    fn default() -> Self {
        Self {
            font_size: 40.0,
            edge_border: 20.0,
            touch_slop: 2.0,
            metric_padding: 4.0,
            stroke_width: 2.0,
            bold: true,
            text_color: 0xFFFF_FFFF,
            outline_color: 0xFFFF_FFFF,
            widest_caption: "RIGHT".into(),
            captions: Captions::default(),
        }
    }
}

impl DPadConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        dpad_info!(targets::CONFIG, path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Serialize to TOML text.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check that every numeric field is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(invalid("font_size", "must be greater than zero", self.font_size));
        }
        for (field, value) in [
            ("edge_border", self.edge_border),
            ("touch_slop", self.touch_slop),
            ("metric_padding", self.metric_padding),
            ("stroke_width", self.stroke_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, "must not be negative", value));
            }
        }
        Ok(())
    }

    /// The style captions are drawn and measured with.
    pub fn text_style(&self) -> RenderResult<TextStyle> {
        TextStyle::try_new(self.font_size)?;
        Ok(self.unchecked_text_style())
    }

    /// The stroke box outlines are drawn with.
    pub fn outline_stroke(&self) -> RenderResult<Stroke> {
        Stroke::try_new(self.outline_color(), self.stroke_width)
    }

    pub(crate) fn unchecked_text_style(&self) -> TextStyle {
        let weight = if self.bold {
            FontWeight::Bold
        } else {
            FontWeight::Normal
        };
        TextStyle {
            font_size: self.font_size,
            color: Color::from_argb_u32(self.text_color),
            align: TextAlign::Center,
            weight,
            anti_alias: true,
        }
    }

    pub(crate) fn unchecked_outline(&self) -> Stroke {
        Stroke::new(self.outline_color(), self.stroke_width)
    }

    fn outline_color(&self) -> Color {
        Color::from_argb_u32(self.outline_color)
    }
}

fn invalid(field: &'static str, reason: &str, value: f32) -> ConfigError {
    dpad_warn!(targets::CONFIG, field, value, reason, "rejected configuration value");
    ConfigError::Invalid {
        field,
        reason: format!("{reason} (got {value})"),
    }
}
