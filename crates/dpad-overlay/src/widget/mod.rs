//! Widget layer of dpad-overlay.
//!
//! - [`events`]: pointer input and synthetic key output types
//! - [`touch`]: conversion of winit touch events into pointer events
//! - [`dpad`]: the overlay widget, its layout and its drag state machine

pub mod dpad;
pub mod events;
pub mod touch;

pub use dpad::{
    ButtonSet, DPadWidget, Direction, DirectionButton, DragState, KeyEventTarget, LayoutMetrics,
    Placement, TouchState, button_bounds, layout_positions,
};
pub use events::{DirectionKeyEvent, KeyAction, KeyCode, PointerAction, PointerEvent};
pub use touch::TouchInputHandler;
