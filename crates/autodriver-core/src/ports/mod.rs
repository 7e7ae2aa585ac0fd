//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No HTTP client types in any signature
//! - Vendor-specific wire shapes stay in the adapter crate
//! - Adapters map their internal errors to [`BuildPortError`] at the boundary

pub mod driver_build;

use thiserror::Error;

pub use driver_build::{BuildPortError, BuildPortResult, DriverBuildPort};

/// Core error type for semantic domain errors.
///
/// Adapters should map this to their own error types (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Settings validation error.
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// External service error.
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<BuildPortError> for CoreError {
    fn from(err: BuildPortError) -> Self {
        match err {
            BuildPortError::MissingApiKey | BuildPortError::Configuration { .. } => {
                Self::Configuration(err.to_string())
            }
            _ => Self::ExternalService(err.to_string()),
        }
    }
}
