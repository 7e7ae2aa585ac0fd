//! Port trait implementation for `GeminiClient`.
//!
//! Implements the core-owned `DriverBuildPort` trait, converting internal
//! Gemini errors and reply text into core types.

use async_trait::async_trait;
use autodriver_core::{
    BuildPortError, BuildPortResult, BuildRequest, BuildResult, DriverBuildPort, ParseError,
    build_prompt, parse_build_result,
};

use crate::client::GeminiClient;
use crate::error::GeminiError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `GeminiError` to core `BuildPortError`.
fn map_error(err: GeminiError) -> BuildPortError {
    match err {
        GeminiError::MissingApiKey => BuildPortError::MissingApiKey,
        GeminiError::ApiRequestFailed { status, message } => {
            BuildPortError::Api { status, message }
        }
        GeminiError::EmptyResponse { .. } => BuildPortError::EmptyResponse,
        GeminiError::Network(e) => BuildPortError::Network {
            message: e.to_string(),
        },
        GeminiError::InvalidUrl(e) => BuildPortError::Configuration {
            message: e.to_string(),
        },
        GeminiError::JsonParse(e) => BuildPortError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

fn map_parse_error(err: ParseError) -> BuildPortError {
    match err {
        ParseError::Empty => BuildPortError::EmptyResponse,
        other => BuildPortError::InvalidResponse {
            message: other.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> DriverBuildPort for GeminiClient<B> {
    async fn generate(&self, request: &BuildRequest) -> BuildPortResult<BuildResult> {
        let prompt = build_prompt(request);
        let text = self.generate_text(&prompt).await.map_err(map_error)?;

        parse_build_result(&text).map_err(|err| {
            tracing::warn!(
                target: "autodriver.parse",
                error = %err,
                reply_bytes = text.len(),
                "Could not decode build result"
            );
            map_parse_error(err)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{test_config, text_reply};
    use crate::http::testing::{CannedReply, FakeBackend};
    use autodriver_core::{BuildStatus, Severity};

    const REPLY: &str = r#"```json
{
  "status": "failed",
  "makefile": "obj-m += my_driver.o\n",
  "simulatedOutput": "my_driver.c:12: error: 'len' undeclared",
  "optimizedSource": "int len = 0;",
  "issues": [
    {"severity": "error", "line": 12, "message": "'len' undeclared", "suggestion": "Declare len"},
    {"severity": "warning", "line": 3, "message": "unused include", "suggestion": "Remove it"}
  ]
}
```"#;

    #[tokio::test]
    async fn test_generate_parses_fenced_reply() {
        let backend = FakeBackend::new().with_reply(text_reply(REPLY));
        let client = GeminiClient::with_backend(test_config(Some("key")), backend.clone());

        let result = client.generate(&BuildRequest::sample()).await.unwrap();

        assert_eq!(result.status, BuildStatus::Failed);
        assert_eq!(result.issues.len(), 2);
        assert_eq!(result.issues[0].severity, Severity::Error);
        assert_eq!(result.optimized_source.as_deref(), Some("int len = 0;"));

        let calls = backend.calls();
        assert_eq!(calls.len(), 1);
        let prompt = calls[0].body["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(prompt.contains("x86_64"));
        assert!(prompt.contains("6.6"));
    }

    #[tokio::test]
    async fn test_missing_key_maps_without_calls() {
        let backend = FakeBackend::new().with_reply(text_reply(REPLY));
        let client = GeminiClient::with_backend(test_config(None), backend.clone());

        let err = client.generate(&BuildRequest::sample()).await.unwrap_err();

        assert!(matches!(err, BuildPortError::MissingApiKey));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_api_error_maps_status_and_message() {
        let backend = FakeBackend::new().with_reply(CannedReply::Status {
            status: 400,
            body: r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#
                .to_string(),
        });
        let client = GeminiClient::with_backend(test_config(Some("bad")), backend);

        match client.generate(&BuildRequest::sample()).await {
            Err(BuildPortError::Api { status, message }) => {
                assert_eq!(status, 400);
                assert!(message.contains("API key not valid"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_reply_is_invalid_response() {
        let backend = FakeBackend::new().with_reply(text_reply("I cannot compile this."));
        let client = GeminiClient::with_backend(test_config(Some("key")), backend);

        let err = client.generate(&BuildRequest::sample()).await.unwrap_err();
        assert!(matches!(err, BuildPortError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn test_schema_mismatch_is_invalid_response() {
        let backend = FakeBackend::new().with_reply(text_reply(r#"{"status": "success"}"#));
        let client = GeminiClient::with_backend(test_config(Some("key")), backend);

        match client.generate(&BuildRequest::sample()).await {
            Err(BuildPortError::InvalidResponse { message }) => {
                assert!(message.contains("schema"));
            }
            other => panic!("expected InvalidResponse, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fence_only_reply_is_empty() {
        let backend = FakeBackend::new().with_reply(text_reply("```json\n```"));
        let client = GeminiClient::with_backend(test_config(Some("key")), backend);

        let err = client.generate(&BuildRequest::sample()).await.unwrap_err();
        assert!(matches!(err, BuildPortError::EmptyResponse));
    }

    #[test]
    fn test_map_error_network_variants() {
        let err = map_error(GeminiError::InvalidUrl(url::ParseError::EmptyHost));
        assert!(matches!(err, BuildPortError::Configuration { .. }));

        let err = map_error(GeminiError::EmptyResponse {
            reason: Some("MAX_TOKENS".to_string()),
        });
        assert!(matches!(err, BuildPortError::EmptyResponse));
    }
}
