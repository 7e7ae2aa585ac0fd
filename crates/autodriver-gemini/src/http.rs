//! HTTP backend abstraction for the Gemini API.
//!
//! The client is generic over [`HttpBackend`] so tests can swap the network
//! for canned replies. The production backend performs exactly one request
//! per call; failed calls are reported, never retried.

use crate::error::{GeminiError, GeminiResult};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use crate::models::ApiErrorEnvelope;

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can POST JSON and decode a JSON reply.
///
/// This is an implementation detail - external code should use the
/// `DriverBuildPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// POST `body` to `url` authenticated with `api_key` and decode the reply.
    async fn post_json<B, T>(&self, url: &Url, api_key: &str, body: &B) -> GeminiResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend.
    pub fn new(timeout: Duration, user_agent: &str) -> GeminiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn post_json<B, T>(&self, url: &Url, api_key: &str, body: &B) -> GeminiResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let response = self
            .client
            .post(url.as_str())
            .header(API_KEY_HEADER, api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(GeminiError::ApiRequestFailed {
                status: status.as_u16(),
                message: ApiErrorEnvelope::message_from_body(&text),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reqwest_backend_creation() {
        let backend = ReqwestBackend::new(Duration::from_secs(5), "autodriver-test");
        assert!(backend.is_ok());
    }

    #[tokio::test]
    async fn test_fake_backend_records_calls() {
        let backend = FakeBackend::new().with_reply(CannedReply::Json(json!({"ok": true})));
        let url = Url::parse("https://example.com/v1beta/models/m:generateContent").unwrap();

        let reply: serde_json::Value = backend
            .post_json(&url, "key", &json!({"hello": "world"}))
            .await
            .unwrap();

        assert_eq!(reply["ok"], true);
        let calls = backend.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].api_key, "key");
        assert_eq!(calls[0].body["hello"], "world");
    }

    #[tokio::test]
    async fn test_fake_backend_status_reply() {
        let backend = FakeBackend::new().with_reply(CannedReply::Status {
            status: 429,
            body: r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#
                .to_string(),
        });
        let url = Url::parse("https://example.com/x").unwrap();

        let result: GeminiResult<serde_json::Value> = backend.post_json(&url, "k", &json!({})).await;
        match result {
            Err(GeminiError::ApiRequestFailed { status, message }) => {
                assert_eq!(status, 429);
                assert!(message.contains("Quota exceeded"));
            }
            other => panic!("expected ApiRequestFailed, got {other:?}"),
        }
    }
}
