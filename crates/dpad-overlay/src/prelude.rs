//! Prelude module for dpad-overlay.
//!
//! ```ignore
//! use dpad_overlay::prelude::*;
//! ```

// ============================================================================
// Signals
// ============================================================================

pub use crate::{ConnectionId, Signal};

// ============================================================================
// Widget
// ============================================================================

pub use crate::widget::{
    DPadWidget, Direction, DirectionKeyEvent, KeyAction, KeyCode, KeyEventTarget, PointerAction,
    PointerEvent, TouchInputHandler, TouchState,
};

// ============================================================================
// Configuration and Errors
// ============================================================================

pub use crate::config::DPadConfig;
pub use crate::error::DPadError;

// ============================================================================
// Rendering
// ============================================================================

pub use crate::render::{Color, Insets, Point, Rect, RecordingRenderer, Renderer, Transform2D};
