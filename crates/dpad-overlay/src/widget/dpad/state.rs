//! Drag state of the overlay.

use dpad_overlay_render::Point;

use super::button::Direction;

/// An in-progress drag that started on a region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// The region the drag started on.
    pub direction: Direction,
    /// Local pointer position at touch-down.
    pub touch_down: Point,
    /// UP's anchor at touch-down.
    pub anchor_origin: Point,
}

impl DragState {
    /// The anchor for a pointer now at `current`.
    #[inline]
    pub fn anchor_for(&self, current: Point) -> Point {
        self.anchor_origin + (current - self.touch_down)
    }

    /// Total pointer displacement since touch-down.
    #[inline]
    pub fn offset_to(&self, current: Point) -> Point {
        current - self.touch_down
    }
}

/// Pointer state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TouchState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A region was hit and the pointer is still down.
    Dragging(DragState),
}

impl TouchState {
    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self, TouchState::Dragging(_))
    }

    /// The active drag, if any.
    pub fn drag(&self) -> Option<&DragState> {
        match self {
            TouchState::Idle => None,
            TouchState::Dragging(drag) => Some(drag),
        }
    }
}
