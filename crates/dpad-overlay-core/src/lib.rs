//! Core systems for dpad-overlay.
//!
//! This crate provides the small foundation the overlay widget is built on:
//!
//! - **Logging**: `tracing` targets, span names and convenience macros
//! - **Signal/Slot System**: Type-safe notification of connected callbacks
//!
//! # Signal/Slot Example
//!
//! ```
//! use dpad_overlay_core::Signal;
//!
//! // Create a signal that notifies when a direction is tapped
//! let tapped = Signal::<&'static str>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = tapped.connect(|name| {
//!     println!("Tapped: {}", name);
//! });
//!
//! // Emit the signal
//! tapped.emit("UP");
//!
//! // Disconnect when done
//! tapped.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
