//! Port for the external service that performs a driver build.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{BuildRequest, BuildResult};

/// Errors from driver build port operations.
///
/// These are domain-level errors; transport and JSON errors are mapped to
/// these by the adapter.
#[derive(Debug, Error)]
pub enum BuildPortError {
    /// No API key configured; nothing was sent.
    #[error("API_KEY not found in environment variables")]
    MissingApiKey,

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The service rejected the request.
    #[error("AI service returned status {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message reported by the service
        message: String,
    },

    /// The service replied without any usable text.
    #[error("No response from AI")]
    EmptyResponse,

    /// The reply could not be parsed into a build result.
    #[error("Invalid AI response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

impl BuildPortError {
    /// Message shown to the user in the terminal panel.
    ///
    /// A missing key is reported as-is; every other failure gets a hint to
    /// check the key and retry, followed by the diagnostic.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingApiKey => self.to_string(),
            other => format!(
                "Failed to compile and analyze driver. Please check your API key and try again.\n{other}"
            ),
        }
    }
}

/// Result type alias for driver build port operations.
pub type BuildPortResult<T> = Result<T, BuildPortError>;

/// Port trait for the service that compiles, analyzes and fixes a driver.
///
/// # Design
///
/// - One call per invocation: implementations must not retry or cache
/// - Must fail with [`BuildPortError::MissingApiKey`] before any network
///   traffic when no key is configured
/// - The returned result has already been validated against the schema
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DriverBuildPort: Send + Sync {
    /// Perform one build for the request.
    async fn generate(&self, request: &BuildRequest) -> BuildPortResult<BuildResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BuildPortError::Api {
            status: 403,
            message: "API key not valid".to_string(),
        };
        assert!(err.to_string().contains("403"));
        assert!(err.to_string().contains("API key not valid"));
    }

    #[test]
    fn test_user_message_for_missing_key() {
        assert_eq!(
            BuildPortError::MissingApiKey.user_message(),
            "API_KEY not found in environment variables"
        );
    }

    #[test]
    fn test_user_message_includes_diagnostic() {
        let msg = BuildPortError::InvalidResponse {
            message: "missing field `makefile`".to_string(),
        }
        .user_message();
        assert!(msg.starts_with("Failed to compile and analyze driver."));
        assert!(msg.contains("missing field `makefile`"));
    }
}
