//! Touch input handling and conversion from platform events.
//!
//! This module translates winit touch events into the overlay's
//! [`PointerEvent`]s. The overlay follows a single pointer at a time: the
//! first finger down becomes the primary pointer, and every other finger is
//! reported as [`PointerAction::Other`] until the primary one lifts.
//!
//! # Usage
//!
//! ```ignore
//! use dpad_overlay::widget::touch::TouchInputHandler;
//!
//! let mut handler = TouchInputHandler::new();
//!
//! // When receiving a winit touch event:
//! let event = handler.handle_touch(touch);
//! if dpad.handle_pointer(event) {
//!     window.request_redraw();
//! }
//! ```

use winit::event::{Touch, TouchPhase as WinitTouchPhase};

use dpad_overlay_core::dpad_trace;
use dpad_overlay_core::logging::targets;
use dpad_overlay_render::Point;

use super::events::{PointerAction, PointerEvent};

/// Converts a winit TouchPhase to the pointer action of a primary pointer.
pub fn from_winit_touch_phase(phase: WinitTouchPhase) -> PointerAction {
    match phase {
        WinitTouchPhase::Started => PointerAction::Down,
        WinitTouchPhase::Moved => PointerAction::Move,
        WinitTouchPhase::Ended => PointerAction::Up,
        WinitTouchPhase::Cancelled => PointerAction::Cancel,
    }
}

/// The pointer currently followed by the handler.
#[derive(Debug, Clone, Copy)]
struct PrimaryTouch {
    /// Touch ID.
    id: u64,
    /// Last known position in window coordinates.
    position: Point,
}

/// Handler for touch input that tracks the primary pointer.
#[derive(Debug, Default)]
pub struct TouchInputHandler {
    primary: Option<PrimaryTouch>,
}

impl TouchInputHandler {
    /// Creates a new touch input handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// The ID of the primary touch, if a finger is down.
    pub fn primary_id(&self) -> Option<u64> {
        self.primary.map(|t| t.id)
    }

    /// The last known position of the primary touch.
    pub fn primary_position(&self) -> Option<Point> {
        self.primary.map(|t| t.position)
    }

    /// Handles a touch event from winit.
    ///
    /// Returns the pointer event to feed to the widget. Touches other than
    /// the primary one come back as [`PointerAction::Other`].
    pub fn handle_touch(&mut self, touch: Touch) -> PointerEvent {
        let position = Point::new(touch.location.x as f32, touch.location.y as f32);

        let action = match (self.primary, touch.phase) {
            (None, WinitTouchPhase::Started) => {
                self.primary = Some(PrimaryTouch {
                    id: touch.id,
                    position,
                });
                PointerAction::Down
            }
            (Some(primary), phase) if primary.id == touch.id => {
                match phase {
                    WinitTouchPhase::Ended | WinitTouchPhase::Cancelled => self.primary = None,
                    WinitTouchPhase::Started | WinitTouchPhase::Moved => {
                        self.primary = Some(PrimaryTouch {
                            id: touch.id,
                            position,
                        });
                    }
                }
                from_winit_touch_phase(phase)
            }
            _ => PointerAction::Other,
        };

        dpad_trace!(
            targets::TOUCH,
            id = touch.id,
            phase = ?touch.phase,
            ?action,
            "converted touch"
        );

        PointerEvent::new(action, position)
    }

    /// Resets the handler state, forgetting the primary touch.
    pub fn reset(&mut self) {
        self.primary = None;
    }
}
