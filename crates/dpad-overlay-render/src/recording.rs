//! Headless renderer that records draw commands.
//!
//! [`RecordingRenderer`] implements [`Renderer`] without a backing surface.
//! Text is measured with fixed glyph metrics, so layouts computed against it
//! are exact and reproducible. It is used for tests and for hosts that want to
//! inspect what the overlay would draw before forwarding it to a real canvas.

use crate::paint::{Stroke, TextStyle};
use crate::renderer::Renderer;
use crate::types::{Point, Rect};

/// Fixed text metrics in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphMetrics {
    /// Horizontal advance of every glyph.
    pub advance: f32,
    /// Ink height above the baseline.
    pub ascent: f32,
    /// Distance between consecutive baselines.
    pub line_spacing: f32,
}

impl GlyphMetrics {
    /// Create metrics from explicit pixel values.
    pub const fn new(advance: f32, ascent: f32, line_spacing: f32) -> Self {
        Self {
            advance,
            ascent,
            line_spacing,
        }
    }

    /// Typical proportions of a sans-serif face at the given size.
    pub fn for_font_size(font_size: f32) -> Self {
        Self {
            advance: font_size * 0.6,
            ascent: font_size * 0.7,
            line_spacing: font_size * 1.2,
        }
    }
}

/// A recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A `draw_text` call.
    Text {
        text: String,
        origin: Point,
        style: TextStyle,
    },
    /// A `stroke_rect` call.
    StrokeRect { rect: Rect, stroke: Stroke },
}

/// A renderer that records every call instead of rasterizing.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    /// Fixed metrics, or `None` to derive them from each style's font size.
    metrics: Option<GlyphMetrics>,
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    /// Create a recorder whose metrics scale with the font size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recorder that measures every style with the same metrics.
    pub fn with_metrics(metrics: GlyphMetrics) -> Self {
        Self {
            metrics: Some(metrics),
            commands: Vec::new(),
        }
    }

    fn metrics_for(&self, style: &TextStyle) -> GlyphMetrics {
        self.metrics
            .unwrap_or_else(|| GlyphMetrics::for_font_size(style.font_size))
    }

    /// All commands recorded so far, in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Remove and return all recorded commands.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Discard all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// The text runs drawn so far, with their anchor points.
    pub fn texts(&self) -> Vec<(&str, Point)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, origin, .. } => Some((text.as_str(), *origin)),
                DrawCommand::StrokeRect { .. } => None,
            })
            .collect()
    }

    /// The rectangles stroked so far.
    pub fn stroked_rects(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::StrokeRect { rect, .. } => Some(*rect),
                DrawCommand::Text { .. } => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        tracing::trace!(target: "dpad_overlay_render::recording", text, x = origin.x, y = origin.y, "draw_text");
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            origin,
            style: *style,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        tracing::trace!(target: "dpad_overlay_render::recording", ?rect, "stroke_rect");
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            stroke: *stroke,
        });
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> Rect {
        let metrics = self.metrics_for(style);
        let width = text.chars().count() as f32 * metrics.advance;
        let height = if text.is_empty() { 0.0 } else { metrics.ascent };
        Rect::new(0.0, -height, width, height)
    }

    fn line_spacing(&self, style: &TextStyle) -> f32 {
        self.metrics_for(style).line_spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn test_measure_with_fixed_metrics() {
        let renderer = RecordingRenderer::with_metrics(GlyphMetrics::new(13.0, 20.0, 36.0));
        let style = TextStyle::default();

        let bounds = renderer.measure_text("XX", &style);
        assert_eq!(bounds, Rect::new(0.0, -20.0, 26.0, 20.0));
        assert_eq!(renderer.line_spacing(&style), 36.0);
        assert_eq!(renderer.measure_text("", &style).height(), 0.0);
    }

    #[test]
    fn test_measure_scales_with_font_size() {
        let renderer = RecordingRenderer::new();
        let small = TextStyle::try_new(10.0).unwrap();
        let large = TextStyle::try_new(20.0).unwrap();

        let a = renderer.measure_text("RIGHT", &small);
        let b = renderer.measure_text("RIGHT", &large);
        assert!(b.width() > a.width());
        assert!(renderer.line_spacing(&large) > renderer.line_spacing(&small));
    }

    #[test]
    fn test_records_commands_in_order() {
        let mut renderer = RecordingRenderer::new();
        let style = TextStyle::default();
        let stroke = Stroke::new(Color::WHITE, 2.0);

        renderer.draw_text("UP", Point::new(1.0, 2.0), &style);
        renderer.stroke_rect(Rect::new(0.0, 0.0, 5.0, 5.0), &stroke);

        assert_eq!(renderer.commands().len(), 2);
        assert_eq!(renderer.texts(), vec![("UP", Point::new(1.0, 2.0))]);
        assert_eq!(renderer.stroked_rects(), vec![Rect::new(0.0, 0.0, 5.0, 5.0)]);

        let taken = renderer.take_commands();
        assert_eq!(taken.len(), 2);
        assert!(renderer.commands().is_empty());
    }

    #[test]
    fn test_renderer_through_mut_reference() {
        fn draw(mut r: impl Renderer) {
            r.draw_text("DOWN", Point::ZERO, &TextStyle::default());
        }

        let mut renderer = RecordingRenderer::new();
        draw(&mut renderer);
        assert_eq!(renderer.texts().len(), 1);
    }
}
