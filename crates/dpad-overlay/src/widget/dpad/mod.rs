//! The directional-pad overlay widget.
//!
//! [`DPadWidget`] draws four captions (UP, DOWN, LEFT, RIGHT) arranged in a
//! cross, each inside a stroked box. Touching a box sends a press and a
//! release of the matching d-pad key to the registered [`KeyEventTarget`] and
//! starts a drag; dragging moves the whole cross.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use dpad_overlay::prelude::*;
//!
//! let keys = Arc::new(Signal::<DirectionKeyEvent>::new());
//! keys.connect(|event| game.on_key(event.key.code(), event.action));
//!
//! let mut dpad = DPadWidget::new();
//! dpad.set_key_target(keys.clone());
//!
//! // In the host's draw callback:
//! dpad.paint(&mut canvas);
//!
//! // In the host's touch callback:
//! if dpad.handle_pointer(event) && dpad.take_repaint_request() {
//!     window.request_redraw();
//! }
//! ```

mod button;
mod dispatch;
mod layout;
mod state;

use std::fmt;
use std::sync::Arc;

use dpad_overlay_core::logging::{span_names, targets};
use dpad_overlay_core::{PerfSpan, Signal, dpad_debug, dpad_info, dpad_trace, dpad_warn};
use dpad_overlay_render::{Insets, Point, Rect, Renderer, Stroke, TextStyle, Transform2D};

pub use button::{ButtonSet, Direction, DirectionButton};
pub use dispatch::KeyEventTarget;
pub use layout::{LayoutMetrics, Placement, button_bounds, layout_positions};
pub use state::{DragState, TouchState};

use crate::config::DPadConfig;
use crate::error::Result;
use crate::widget::events::{PointerAction, PointerEvent};

/// A draggable four-way directional pad drawn over a game view.
pub struct DPadWidget {
    buttons: ButtonSet,
    state: TouchState,
    /// Metrics of the last paint; `None` until the first paint.
    metrics: Option<LayoutMetrics>,

    text_style: TextStyle,
    outline: Stroke,
    widest_caption: String,
    metric_padding: f32,
    edge_border: f32,
    touch_slop: f32,

    view_transform: Transform2D,
    padding: Insets,

    key_target: Option<Arc<dyn KeyEventTarget>>,
    needs_repaint: bool,

    /// Emitted when a touch-down lands on a region.
    pub tapped: Signal<Direction>,
}

impl Default for DPadWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl DPadWidget {
    /// Create a widget with the default configuration.
    pub fn new() -> Self {
        let config = DPadConfig::default();
        let (text_style, outline) = (config.unchecked_text_style(), config.unchecked_outline());
        Self::from_parts(&config, text_style, outline)
    }

    /// Create a widget from a configuration, validating it first.
    pub fn with_config(config: DPadConfig) -> Result<Self> {
        config.validate()?;
        let text_style = config.text_style()?;
        let outline = config.outline_stroke()?;
        Ok(Self::from_parts(&config, text_style, outline))
    }

    /// Create a widget from a TOML configuration file.
    pub fn from_config_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config = DPadConfig::load(path)?;
        Self::with_config(config)
    }

    fn from_parts(config: &DPadConfig, text_style: TextStyle, outline: Stroke) -> Self {
        let mut widget = Self {
            buttons: ButtonSet::default(),
            state: TouchState::Idle,
            metrics: None,
            text_style,
            outline,
            widest_caption: config.widest_caption.clone(),
            metric_padding: config.metric_padding,
            edge_border: config.edge_border,
            touch_slop: config.touch_slop,
            view_transform: Transform2D::IDENTITY,
            padding: Insets::ZERO,
            key_target: None,
            needs_repaint: true,
            tapped: Signal::new(),
        };
        let [up, down, left, right] = config.captions.as_array();
        widget.set_captions(Some(up), Some(down), Some(left), Some(right));
        widget
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Replace all four captions.
    ///
    /// `None` shows an empty caption. Every position and box is forgotten, so
    /// the next paint places the pad at its default location.
    pub fn set_captions(
        &mut self,
        up: Option<&str>,
        down: Option<&str>,
        left: Option<&str>,
        right: Option<&str>,
    ) {
        for (direction, caption) in Direction::ALL.into_iter().zip([up, down, left, right]) {
            let button = &mut self.buttons[direction];
            button.set_caption(caption);
            button.invalidate();
        }
        dpad_info!(
            targets::LAYOUT,
            up = self.buttons[Direction::Up].caption(),
            down = self.buttons[Direction::Down].caption(),
            left = self.buttons[Direction::Left].caption(),
            right = self.buttons[Direction::Right].caption(),
            "captions set"
        );
        self.request_repaint();
    }

    /// Set the transform from widget-local to view coordinates.
    pub fn set_view_transform(&mut self, transform: Transform2D) {
        self.view_transform = transform;
    }

    /// The current view transform.
    pub fn view_transform(&self) -> Transform2D {
        self.view_transform
    }

    /// Set the host view's padding. Pointer positions are offset by the
    /// left and top insets before the view transform is undone.
    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    /// Register the receiver of tap key events, replacing any previous one.
    pub fn set_key_target(&mut self, target: Arc<dyn KeyEventTarget>) {
        self.key_target = Some(target);
    }

    /// Remove the key event receiver.
    pub fn clear_key_target(&mut self) {
        self.key_target = None;
    }

    // =========================================================================
    // State
    // =========================================================================

    /// The four buttons.
    pub fn buttons(&self) -> &ButtonSet {
        &self.buttons
    }

    /// One button.
    pub fn button(&self, direction: Direction) -> &DirectionButton {
        &self.buttons[direction]
    }

    /// The pointer state machine.
    pub fn touch_state(&self) -> &TouchState {
        &self.state
    }

    /// Metrics computed by the last paint.
    pub fn metrics(&self) -> Option<LayoutMetrics> {
        self.metrics
    }

    /// Whether the widget asked to be redrawn.
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Return and clear the repaint request.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }

    fn request_repaint(&mut self) {
        self.needs_repaint = true;
    }

    // =========================================================================
    // Painting
    // =========================================================================

    /// Lay out and draw the pad.
    ///
    /// Draws each caption centered on its anchor and strokes its box.
    /// Painting twice without intervening input draws the same thing.
    pub fn paint<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        let _perf = PerfSpan::new(span_names::PAINT);

        let metrics = LayoutMetrics::measure(
            &*renderer,
            &self.text_style,
            &self.widest_caption,
            self.metric_padding,
            self.edge_border,
        );
        self.metrics = Some(metrics);

        self.apply_layout(&metrics);
        self.refresh_bounds(&metrics);

        for (_, button) in self.buttons.iter() {
            let (Some(position), Some(rect)) = (button.position(), button.bounding_box()) else {
                continue;
            };
            renderer.draw_text(button.caption(), position, &self.text_style);
            renderer.stroke_rect(rect, &self.outline);
        }

        self.needs_repaint = false;
    }

    fn apply_layout(&mut self, metrics: &LayoutMetrics) {
        let placement = layout_positions(self.buttons[Direction::Up].position(), metrics);
        for (direction, position) in placement.iter() {
            dpad_debug!(
                targets::LAYOUT,
                %direction,
                x = position.x,
                y = position.y,
                "placed"
            );
            self.buttons[direction].set_position(position);
        }
    }

    /// Rebuild every stale box from its button's position.
    fn refresh_bounds(&mut self, metrics: &LayoutMetrics) {
        for (_, button) in self.buttons.iter_mut() {
            if button.bounding_box().is_none()
                && let Some(position) = button.position()
            {
                button.set_bounding_box(button_bounds(position, metrics));
            }
        }
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Map a raw view position into widget-local coordinates.
    ///
    /// Padding is removed first, then the view transform is undone. A
    /// singular transform is treated as the identity.
    pub fn map_to_local(&self, raw: Point) -> Point {
        let unpadded = raw.offset(-self.padding.left, -self.padding.top);
        self.view_transform
            .inverse_or_identity()
            .transform_point(unpadded)
    }

    /// The region under a local point, using each box grown by the touch
    /// slop. Regions are tried in [`Direction::ALL`] order and the first
    /// match wins.
    ///
    /// A box invalidated by a drag is derived from its button's current
    /// position and the metrics of the last paint.
    pub fn hit_test(&self, local: Point) -> Option<Direction> {
        self.buttons.iter().find_map(|(direction, button)| {
            self.current_bounds(button)
                .filter(|rect| rect.inflate(self.touch_slop).contains(local))
                .map(|_| direction)
        })
    }

    fn current_bounds(&self, button: &DirectionButton) -> Option<Rect> {
        button.bounding_box().or_else(|| {
            let position = button.position()?;
            let metrics = self.metrics.as_ref()?;
            Some(button_bounds(position, metrics))
        })
    }

    /// Feed one pointer event to the widget.
    ///
    /// Returns `false` only for [`PointerAction::Other`], which the host
    /// should handle itself.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        if event.action == PointerAction::Other {
            return false;
        }

        let _perf = PerfSpan::new(span_names::POINTER);
        let local = self.map_to_local(event.position);
        dpad_trace!(
            targets::TOUCH,
            action = ?event.action,
            raw_x = event.position.x,
            raw_y = event.position.y,
            x = local.x,
            y = local.y,
            "pointer event"
        );

        match event.action {
            PointerAction::Down => self.on_pointer_down(local),
            PointerAction::Move => self.on_pointer_move(local),
            PointerAction::Up => self.on_pointer_up(local),
            PointerAction::Cancel => self.on_pointer_cancel(),
            PointerAction::Other => {}
        }
        true
    }

    fn on_pointer_down(&mut self, local: Point) {
        if let TouchState::Dragging(drag) = self.state {
            dpad_warn!(
                targets::TOUCH,
                direction = %drag.direction,
                "pointer down while already dragging; restarting"
            );
            self.state = TouchState::Idle;
        }

        if let Some(metrics) = self.metrics {
            self.refresh_bounds(&metrics);
        }

        let Some(direction) = self.hit_test(local) else {
            dpad_debug!(targets::TOUCH, x = local.x, y = local.y, "pointer down missed every region");
            return;
        };

        dpad_info!(targets::TOUCH, %direction, "region hit");
        dispatch::dispatch_tap(self.key_target.as_deref(), direction);
        self.tapped.emit(direction);

        let anchor_origin = self.buttons[Direction::Up]
            .position()
            .or_else(|| self.metrics.map(|m| m.default_anchor()))
            .unwrap_or(Point::ZERO);
        self.state = TouchState::Dragging(DragState {
            direction,
            touch_down: local,
            anchor_origin,
        });
        self.request_repaint();
    }

    fn on_pointer_move(&mut self, local: Point) {
        let TouchState::Dragging(drag) = self.state else {
            return;
        };
        let anchor = drag.anchor_for(local);
        dpad_trace!(targets::TOUCH, x = anchor.x, y = anchor.y, "anchor moved");
        self.buttons[Direction::Up].set_position(anchor);
        self.request_repaint();
    }

    fn on_pointer_up(&mut self, local: Point) {
        let TouchState::Dragging(drag) = self.state else {
            return;
        };
        self.state = TouchState::Idle;

        // The offset is reported but the anchor already tracks the pointer.
        let offset = drag.offset_to(local);
        dpad_info!(
            targets::TOUCH,
            direction = %drag.direction,
            dx = offset.x,
            dy = offset.y,
            "drag finished"
        );
        self.request_repaint();
    }

    fn on_pointer_cancel(&mut self) {
        if let TouchState::Dragging(drag) = self.state {
            dpad_debug!(targets::TOUCH, direction = %drag.direction, "drag cancelled");
            self.state = TouchState::Idle;
        }
    }
}

impl fmt::Debug for DPadWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DPadWidget")
            .field("buttons", &self.buttons)
            .field("state", &self.state)
            .field("metrics", &self.metrics)
            .field("view_transform", &self.view_transform)
            .field("padding", &self.padding)
            .field("has_key_target", &self.key_target.is_some())
            .field("needs_repaint", &self.needs_repaint)
            .finish_non_exhaustive()
    }
}
