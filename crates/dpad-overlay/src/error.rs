//! Error types for dpad-overlay.
//!
//! Pointer handling and painting never fail. Errors only arise at the edges,
//! when a configuration is loaded or a style is built from it.

use thiserror::Error;

use dpad_overlay_render::RenderError;

use crate::config::ConfigError;

/// The error type for fallible dpad-overlay operations.
#[derive(Error, Debug)]
pub enum DPadError {
    /// Loading or validating a configuration failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A drawing style could not be built.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// A specialized Result type for dpad-overlay operations.
pub type Result<T> = std::result::Result<T, DPadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let err: DPadError = ConfigError::Invalid {
            field: "font_size",
            reason: "must be greater than zero".into(),
        }
        .into();
        assert!(matches!(err, DPadError::Config(_)));
        assert!(err.to_string().contains("font_size"));
    }

    #[test]
    fn test_render_error_converts() {
        let err: DPadError = RenderError::InvalidFontSize(-1.0).into();
        assert_eq!(err.to_string(), "invalid font size: -1");
    }
}
