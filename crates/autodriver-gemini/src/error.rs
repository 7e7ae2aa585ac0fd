//! Internal error types for Gemini operations.
//!
//! These errors are mapped to core port errors at the boundary (see
//! `port.rs`).

use thiserror::Error;

/// Result type alias for Gemini operations.
pub type GeminiResult<T> = Result<T, GeminiError>;

/// Errors related to Gemini API operations.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// No API key configured.
    #[error("API_KEY not found in environment variables")]
    MissingApiKey,

    /// API request failed with an HTTP error status.
    #[error("Gemini API request failed with status {status}: {message}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// Message from the error envelope, or the raw body
        message: String,
    },

    /// The reply contained no candidate text.
    #[error("No response from AI{}", reason.as_ref().map(|r| format!(" ({r})")).unwrap_or_default())]
    EmptyResponse {
        /// Block or finish reason reported by the API, if any
        reason: Option<String>,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_request_failed_error_message() {
        let error = GeminiError::ApiRequestFailed {
            status: 400,
            message: "API key not valid. Please pass a valid API key.".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("400"));
        assert!(msg.contains("API key not valid"));
    }

    #[test]
    fn test_empty_response_error_message() {
        assert_eq!(
            GeminiError::EmptyResponse { reason: None }.to_string(),
            "No response from AI"
        );
        assert_eq!(
            GeminiError::EmptyResponse {
                reason: Some("SAFETY".to_string())
            }
            .to_string(),
            "No response from AI (SAFETY)"
        );
    }

    #[test]
    fn test_missing_key_message() {
        assert!(GeminiError::MissingApiKey.to_string().contains("API_KEY"));
    }
}
