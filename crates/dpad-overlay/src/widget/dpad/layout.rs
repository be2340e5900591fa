//! Placement of the four regions and their hit boxes.
//!
//! Only the UP anchor is free. DOWN sits two rows below it, LEFT and RIGHT
//! one row below and one caption width to either side:
//!
//! ```text
//!            UP
//!     LEFT        RIGHT
//!           DOWN
//! ```
//!
//! A "row" is one line height plus the edge border.

use std::ops::Index;

use dpad_overlay_render::{Point, Rect, Renderer, TextStyle};

use super::button::Direction;

/// Text-derived sizes that drive placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    /// Width reserved for a caption, padding included.
    pub text_width: f32,
    /// Ink height of a caption.
    pub text_height: f32,
    /// Baseline-to-baseline distance, padding included.
    pub line_height: f32,
    /// Margin from the widget edge, also used as vertical box growth.
    pub edge_border: f32,
}

impl LayoutMetrics {
    /// Create metrics from explicit values.
    pub const fn new(text_width: f32, text_height: f32, line_height: f32, edge_border: f32) -> Self {
        Self {
            text_width,
            text_height,
            line_height,
            edge_border,
        }
    }

    /// Measure `widest_caption` with the caption style.
    ///
    /// `padding` is added to the measured width and to the line spacing so
    /// captions never touch their box edge.
    pub fn measure<R: Renderer + ?Sized>(
        renderer: &R,
        style: &TextStyle,
        widest_caption: &str,
        padding: f32,
        edge_border: f32,
    ) -> Self {
        let bounds = renderer.measure_text(widest_caption, style);
        Self {
            text_width: bounds.width() + padding,
            text_height: bounds.height(),
            line_height: renderer.line_spacing(style) + padding,
            edge_border,
        }
    }

    /// Vertical distance between UP and the LEFT/RIGHT row.
    #[inline]
    pub fn row_step(&self) -> f32 {
        self.line_height + self.edge_border
    }

    /// Where UP goes when it has never been placed.
    pub fn default_anchor(&self) -> Point {
        let b = self.edge_border;
        Point::new(3.0 * b + self.text_width, b + 0.75 * self.line_height)
    }
}

/// Anchor points of all four regions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    points: [Point; 4],
}

impl Placement {
    /// Iterate in [`Direction::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, Point)> + '_ {
        Direction::ALL.into_iter().zip(self.points.iter().copied())
    }
}

impl Index<Direction> for Placement {
    type Output = Point;

    fn index(&self, direction: Direction) -> &Point {
        &self.points[direction.index()]
    }
}

/// Compute every anchor from the UP anchor.
///
/// `up` is the current UP position, or `None` to use the default anchor.
pub fn layout_positions(up: Option<Point>, metrics: &LayoutMetrics) -> Placement {
    let up = up.unwrap_or_else(|| metrics.default_anchor());
    let row = metrics.row_step();
    let tw = metrics.text_width;

    Placement {
        points: [
            up,
            up.offset(0.0, 2.0 * row),
            up.offset(-tw, row),
            up.offset(tw, row),
        ],
    }
}

/// The hit box for a caption anchored at `position`.
///
/// The caption's ink spans `textHeight` above the baseline and `textWidth`
/// centered on `position.x`; the box extends a further `edge_border` above
/// and below.
pub fn button_bounds(position: Point, metrics: &LayoutMetrics) -> Rect {
    let tw = metrics.text_width;
    Rect::from_ltrb(
        position.x,
        position.y - metrics.text_height,
        position.x + tw,
        position.y,
    )
    .inflate_xy(0.0, metrics.edge_border)
    .offset(-tw / 2.0, 0.0)
}
