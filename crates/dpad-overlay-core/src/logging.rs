//! Logging facilities for dpad-overlay.
//!
//! dpad-overlay uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Every log line emitted by the widget carries one of the [`targets`], so a
//! filter such as `RUST_LOG=dpad_overlay::touch=debug` isolates pointer
//! handling from layout chatter.

/// Span names used throughout dpad-overlay for tracing.
pub mod span_names {
    /// One full draw pass of the overlay.
    pub const PAINT: &str = "dpad_overlay::paint";
    /// Processing of a single pointer event.
    pub const POINTER: &str = "dpad_overlay::pointer";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "dpad_overlay_core";
    /// Button placement and bounding boxes.
    pub const LAYOUT: &str = "dpad_overlay::layout";
    /// Pointer handling and the drag state machine.
    pub const TOUCH: &str = "dpad_overlay::touch";
    /// Synthetic key events sent to the registered target.
    pub const DISPATCH: &str = "dpad_overlay::dispatch";
    /// Configuration loading.
    pub const CONFIG: &str = "dpad_overlay::config";
    /// Signal/slot system.
    pub const SIGNAL: &str = "dpad_overlay_core::signal";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "dpad_overlay::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns.
///
/// These are thin wrappers around the `tracing` macros that take the target
/// as their first argument, so call sites read `dpad_debug!(targets::LAYOUT, ...)`.
#[macro_export]
macro_rules! dpad_trace {
    ($target:expr, $($arg:tt)*) => {
        tracing::trace!(target: $target, $($arg)*)
    };
}

#[macro_export]
macro_rules! dpad_debug {
    ($target:expr, $($arg:tt)*) => {
        tracing::debug!(target: $target, $($arg)*)
    };
}

#[macro_export]
macro_rules! dpad_info {
    ($target:expr, $($arg:tt)*) => {
        tracing::info!(target: $target, $($arg)*)
    };
}

#[macro_export]
macro_rules! dpad_warn {
    ($target:expr, $($arg:tt)*) => {
        tracing::warn!(target: $target, $($arg)*)
    };
}

#[macro_export]
macro_rules! dpad_error {
    ($target:expr, $($arg:tt)*) => {
        tracing::error!(target: $target, $($arg)*)
    };
}
