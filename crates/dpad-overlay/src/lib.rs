//! dpad-overlay - a draggable virtual directional pad for touchscreen games.
//!
//! The overlay draws four labeled regions (UP, DOWN, LEFT, RIGHT) over a game
//! view. Tapping a region sends a press and a release of the matching d-pad
//! key to a registered target; dragging any region moves the whole pad.
//!
//! The host supplies the canvas through [`render::Renderer`] and forwards
//! pointer input as [`PointerEvent`]s (or winit touches through
//! [`TouchInputHandler`]).
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use dpad_overlay::prelude::*;
//!
//! let keys = Arc::new(Signal::<DirectionKeyEvent>::new());
//! keys.connect(|event| println!("key {} {:?}", event.key.code(), event.action));
//!
//! let mut dpad = DPadWidget::new();
//! dpad.set_key_target(keys.clone());
//!
//! let mut canvas = RecordingRenderer::new();
//! dpad.paint(&mut canvas);
//!
//! let up = dpad.button(Direction::Up).position().unwrap();
//! assert!(dpad.handle_pointer(PointerEvent::down(up.x, up.y - 1.0)));
//! assert!(dpad.touch_state().is_dragging());
//! ```

pub use dpad_overlay_core::*;

/// Drawing interface and geometry.
pub mod render {
    pub use dpad_overlay_render::*;
}

pub mod config;
pub mod error;
pub mod prelude;
pub mod widget;

pub use config::{Captions, ConfigError, DPadConfig};
pub use error::{DPadError, Result};
pub use widget::{
    DPadWidget, Direction, DirectionKeyEvent, KeyAction, KeyCode, KeyEventTarget, PointerAction,
    PointerEvent, TouchInputHandler,
};
