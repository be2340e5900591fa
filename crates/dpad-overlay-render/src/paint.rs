//! Paint styles for stroking shapes and drawing text.

use crate::error::{RenderError, RenderResult};
use crate::types::Color;

/// Stroke style options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

impl Stroke {
    /// Create a new stroke with the given color and width.
    #[inline]
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Create a stroke, rejecting negative or non-finite widths.
    pub fn try_new(color: Color, width: f32) -> RenderResult<Self> {
        if !width.is_finite() || width < 0.0 {
            return Err(RenderError::InvalidStrokeWidth(width));
        }
        Ok(Self::new(color, width))
    }
}

/// Horizontal alignment of text relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// The anchor is the left edge of the text.
    #[default]
    Left,
    /// The anchor is the horizontal center of the text.
    Center,
    /// The anchor is the right edge of the text.
    Right,
}

/// Font weight used for text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Style used to draw and measure a run of text.
///
/// Text is positioned by its baseline: the `y` coordinate passed to
/// [`Renderer::draw_text`](crate::Renderer::draw_text) is where glyphs sit,
/// and ascenders extend above it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub font_size: f32,
    /// Glyph color.
    pub color: Color,
    /// Horizontal alignment around the anchor.
    pub align: TextAlign,
    /// Font weight.
    pub weight: FontWeight,
    /// Whether glyph edges are anti-aliased.
    pub anti_alias: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            color: Color::BLACK,
            align: TextAlign::Left,
            weight: FontWeight::Normal,
            anti_alias: true,
        }
    }
}

impl TextStyle {
    /// Create a text style with the given font size, rejecting sizes that
    /// are not strictly positive.
    pub fn try_new(font_size: f32) -> RenderResult<Self> {
        if !font_size.is_finite() || font_size <= 0.0 {
            return Err(RenderError::InvalidFontSize(font_size));
        }
        Ok(Self {
            font_size,
            ..Default::default()
        })
    }

    /// Set the color (builder pattern).
    #[inline]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the alignment (builder pattern).
    #[inline]
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Set the weight (builder pattern).
    #[inline]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Set anti-aliasing (builder pattern).
    #[inline]
    pub fn with_anti_alias(mut self, anti_alias: bool) -> Self {
        self.anti_alias = anti_alias;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_style_builder() {
        let style = TextStyle::try_new(40.0)
            .unwrap()
            .with_color(Color::WHITE)
            .with_align(TextAlign::Center)
            .with_weight(FontWeight::Bold);
        assert_eq!(style.font_size, 40.0);
        assert_eq!(style.color, Color::WHITE);
        assert_eq!(style.align, TextAlign::Center);
        assert_eq!(style.weight, FontWeight::Bold);
        assert!(style.anti_alias);
    }

    #[test]
    fn test_invalid_font_size() {
        assert!(matches!(
            TextStyle::try_new(0.0),
            Err(RenderError::InvalidFontSize(_))
        ));
        assert!(TextStyle::try_new(f32::NAN).is_err());
    }

    #[test]
    fn test_invalid_stroke_width() {
        assert!(Stroke::try_new(Color::WHITE, 2.0).is_ok());
        assert!(Stroke::try_new(Color::WHITE, 0.0).is_ok());
        assert!(matches!(
            Stroke::try_new(Color::WHITE, -1.0),
            Err(RenderError::InvalidStrokeWidth(_))
        ));
    }
}
