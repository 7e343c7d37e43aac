//! Error types for Receita interactions.

use thiserror::Error;

/// Result type for Receita operations.
pub type Result<T> = std::result::Result<T, ReceitaError>;

/// Errors that can occur while driving the page controllers.
///
/// None of these are fatal: every caller recovers at the point of failure
/// (placeholder text, fallback copy, fallback panel, or ignoring a lost focus
/// target).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReceitaError {
    #[error("No recipe record for '{0}'")]
    RecipeMissing(String),

    #[error("Recipe record '{id}' is malformed: {reason}")]
    RecipeMalformed { id: String, reason: String },

    #[error("Browser capability unavailable: {0}")]
    CapabilityUnavailable(&'static str),

    #[error("Browser capability rejected the request: {0}")]
    CapabilityRejected(String),

    #[error("Focus target is no longer focusable")]
    FocusLost,

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ReceitaError {
    fn from(e: serde_json::Error) -> Self {
        ReceitaError::Config(e.to_string())
    }
}
