//! Core renderer trait defining the drawing interface the overlay consumes.
//!
//! The overlay does not own a drawing backend. Hosts hand it something that
//! implements [`Renderer`] for the duration of a single paint call; the
//! overlay never retains it.

use crate::paint::{Stroke, TextStyle};
use crate::types::{Point, Rect};

/// The 2D drawing trait.
///
/// Implementations wrap whatever canvas the host toolkit provides.
///
/// # Example
///
/// ```ignore
/// let style = TextStyle::try_new(40.0)?.with_align(TextAlign::Center);
/// let bounds = renderer.measure_text("RIGHT", &style);
/// renderer.draw_text("UP", Point::new(90.0, 50.0), &style);
/// renderer.stroke_rect(Rect::new(75.0, 0.0, 30.0, 70.0), &Stroke::new(Color::WHITE, 2.0));
/// ```
pub trait Renderer {
    // =========================================================================
    // Drawing
    // =========================================================================

    /// Draw a run of text.
    ///
    /// `origin.y` is the baseline; `origin.x` is interpreted according to the
    /// style's [`TextAlign`](crate::TextAlign).
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle);

    /// Stroke the outline of a rectangle.
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke);

    // =========================================================================
    // Text Metrics
    // =========================================================================

    /// Measure the ink bounds of a run of text drawn left-aligned with its
    /// baseline at `y = 0`. The returned rectangle's top is therefore
    /// negative for glyphs with ascenders.
    fn measure_text(&self, text: &str, style: &TextStyle) -> Rect;

    /// The recommended distance between consecutive baselines for the style.
    fn line_spacing(&self, style: &TextStyle) -> f32;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        (**self).draw_text(text, origin, style);
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        (**self).stroke_rect(rect, stroke);
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> Rect {
        (**self).measure_text(text, style)
    }

    fn line_spacing(&self, style: &TextStyle) -> f32 {
        (**self).line_spacing(style)
    }
}
