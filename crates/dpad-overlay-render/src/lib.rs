//! Drawing interface and geometry for dpad-overlay.
//!
//! This crate defines what the overlay needs from a host canvas and the
//! geometry it computes with:
//!
//! - [`Renderer`]: draw text, stroke rectangles, measure text
//! - [`Transform2D`]: affine transforms with inversion, for mapping input
//!   coordinates into widget-local space
//! - [`Point`], [`Size`], [`Rect`], [`Insets`], [`Color`]: basic value types
//! - [`RecordingRenderer`]: a headless renderer for tests and inspection
//!
//! # Using the Renderer
//!
//! ```
//! use dpad_overlay_render::{
//!     Color, Point, RecordingRenderer, Rect, Renderer, Stroke, TextAlign, TextStyle,
//! };
//!
//! let mut renderer = RecordingRenderer::new();
//! let style = TextStyle::try_new(40.0).unwrap().with_align(TextAlign::Center);
//!
//! renderer.draw_text("UP", Point::new(90.0, 50.0), &style);
//! renderer.stroke_rect(Rect::new(75.0, 0.0, 30.0, 70.0), &Stroke::new(Color::WHITE, 2.0));
//!
//! assert_eq!(renderer.commands().len(), 2);
//! ```

mod error;
mod paint;
mod recording;
mod renderer;
mod transform;
mod types;

pub use error::{RenderError, RenderResult};
pub use paint::{FontWeight, Stroke, TextAlign, TextStyle};
pub use recording::{DrawCommand, GlyphMetrics, RecordingRenderer};
pub use renderer::Renderer;
pub use transform::Transform2D;
pub use types::{Color, Insets, Point, Rect, Size};
