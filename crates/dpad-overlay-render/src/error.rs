//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur while building drawing styles.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Font sizes must be finite and strictly positive.
    #[error("invalid font size: {0}")]
    InvalidFontSize(f32),

    /// Stroke widths must be finite and non-negative.
    #[error("invalid stroke width: {0}")]
    InvalidStrokeWidth(f32),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
