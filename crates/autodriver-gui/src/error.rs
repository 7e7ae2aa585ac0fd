//! Semantic error types for workbench operations.
//!
//! These errors are domain-focused, not HTTP-focused. Adapters map
//! `GuiError` to their specific error types (`HttpError`, `CliError`).

use std::fmt;

use autodriver_core::{CoreError, TransitionError};

/// Semantic errors for workbench backend operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuiError {
    /// Request validation failed (400-ish).
    ValidationFailed(String),

    /// Operation conflicts with current state (409-ish).
    Conflict(String),

    /// Unexpected internal error.
    Internal(String),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
            Self::Conflict(msg) => write!(f, "conflict: {msg}"),
            Self::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl std::error::Error for GuiError {}

// ============================================================================
// Conversions from core errors
// ============================================================================

impl From<CoreError> for GuiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => Self::ValidationFailed(msg),
            CoreError::Settings(e) => Self::ValidationFailed(e.to_string()),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<TransitionError> for GuiError {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::AlreadyLoading => Self::Conflict(err.to_string()),
            TransitionError::NotLoading(_) => Self::Internal(err.to_string()),
        }
    }
}
