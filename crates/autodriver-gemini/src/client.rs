//! Gemini client for schema-constrained text generation.

use std::time::Instant;

use autodriver_core::response_schema;
use url::Url;

use crate::config::GeminiClientConfig;
use crate::error::{GeminiError, GeminiResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{GeminiConfig, GenerateContentRequest, GenerateContentResponse};

// ============================================================================
// Type Aliases
// ============================================================================

/// Default Gemini client using the reqwest HTTP backend.
pub type DefaultGeminiClient = GeminiClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the Gemini `generateContent` endpoint.
///
/// Generic over an HTTP backend for testing. Use [`DefaultGeminiClient`] in
/// production code.
pub struct GeminiClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: GeminiConfig,
}

impl DefaultGeminiClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL or model produce an invalid endpoint,
    /// or if the HTTP client cannot be constructed.
    pub fn new(config: &GeminiClientConfig) -> GeminiResult<Self> {
        let internal_config = to_internal_config(config)?;
        let backend = ReqwestBackend::new(config.timeout, &config.user_agent)?;
        Ok(Self {
            backend,
            config: internal_config,
        })
    }
}

impl<B: HttpBackend> GeminiClient<B> {
    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: GeminiConfig, backend: B) -> Self {
        Self { backend, config }
    }

    /// The resolved `generateContent` endpoint.
    pub fn endpoint_url(&self) -> &Url {
        &self.config.endpoint
    }

    /// Send `prompt` with the build response schema and return the answer text.
    ///
    /// Fails with [`GeminiError::MissingApiKey`] before touching the backend
    /// when no key is configured.
    pub(crate) async fn generate_text(&self, prompt: &str) -> GeminiResult<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(GeminiError::MissingApiKey)?;

        let request =
            GenerateContentRequest::json_prompt(prompt, response_schema(), self.config.thinking_budget);

        let started = Instant::now();
        let response: GenerateContentResponse = self
            .backend
            .post_json(&self.config.endpoint, api_key, &request)
            .await?;

        tracing::debug!(
            target: "autodriver.gemini",
            elapsed_ms = started.elapsed().as_millis(),
            candidates = response.candidates.len(),
            "generateContent returned"
        );

        response.text().ok_or_else(|| GeminiError::EmptyResponse {
            reason: response.empty_reason(),
        })
    }
}

/// Resolve the public config into the internal one.
fn to_internal_config(config: &GeminiClientConfig) -> GeminiResult<GeminiConfig> {
    Ok(GeminiConfig {
        endpoint: endpoint_for(&config.base_url, &config.model)?,
        api_key: config.api_key.clone(),
        thinking_budget: config.thinking_budget,
    })
}

/// `{base}/models/{model}:generateContent`
fn endpoint_for(base_url: &str, model: &str) -> GeminiResult<Url> {
    let base = base_url.trim_end_matches('/');
    let model = model.trim().trim_start_matches("models/");
    Ok(Url::parse(&format!("{base}/models/{model}:generateContent"))?)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::http::testing::{CannedReply, FakeBackend};
    use serde_json::json;

    pub fn test_config(api_key: Option<&str>) -> GeminiConfig {
        GeminiConfig {
            endpoint: endpoint_for("https://example.test/v1beta", "gemini-3-pro-preview").unwrap(),
            api_key: api_key.map(ToString::to_string),
            thinking_budget: Some(4096),
        }
    }

    pub fn text_reply(text: &str) -> CannedReply {
        CannedReply::Json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]},
                "finishReason": "STOP"
            }]
        }))
    }

    #[test]
    fn test_endpoint_for() {
        let url = endpoint_for(
            "https://generativelanguage.googleapis.com/v1beta/",
            "gemini-3-pro-preview",
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-pro-preview:generateContent"
        );

        let prefixed = endpoint_for("http://localhost:1234", "models/gemini-2.5-pro").unwrap();
        assert!(prefixed.as_str().ends_with("/models/gemini-2.5-pro:generateContent"));
    }

    #[test]
    fn test_invalid_base_url() {
        let config = GeminiClientConfig::new().with_base_url("not a url");
        assert!(matches!(
            DefaultGeminiClient::new(&config),
            Err(GeminiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_default_client_creation() {
        let client = DefaultGeminiClient::new(&GeminiClientConfig::new()).unwrap();
        assert!(client.endpoint_url().as_str().contains("gemini-3-pro-preview"));
    }

    #[tokio::test]
    async fn test_missing_key_sends_nothing() {
        let backend = FakeBackend::new().with_reply(text_reply("{}"));
        let client = GeminiClient::with_backend(test_config(None), backend.clone());

        let result = client.generate_text("prompt").await;

        assert!(matches!(result, Err(GeminiError::MissingApiKey)));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_blank_key_counts_as_missing() {
        let backend = FakeBackend::new();
        let client = GeminiClient::with_backend(test_config(Some("   ")), backend.clone());

        assert!(matches!(
            client.generate_text("prompt").await,
            Err(GeminiError::MissingApiKey)
        ));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_generate_text_sends_schema_and_key() {
        let backend = FakeBackend::new().with_reply(text_reply("{\"status\":\"success\"}"));
        let client = GeminiClient::with_backend(test_config(Some("abc")), backend.clone());

        let text = client.generate_text("compile this").await.unwrap();
        assert_eq!(text, "{\"status\":\"success\"}");

        let calls = backend.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].api_key, "abc");
        assert!(calls[0].url.ends_with(":generateContent"));
        assert_eq!(calls[0].body["contents"][0]["parts"][0]["text"], "compile this");
        assert_eq!(
            calls[0].body["generationConfig"]["responseSchema"]["required"],
            json!(["status", "makefile", "simulatedOutput", "issues"])
        );
    }

    #[tokio::test]
    async fn test_empty_candidates() {
        let backend = FakeBackend::new().with_reply(CannedReply::Json(json!({
            "candidates": [],
            "promptFeedback": {"blockReason": "SAFETY"}
        })));
        let client = GeminiClient::with_backend(test_config(Some("abc")), backend);

        match client.generate_text("p").await {
            Err(GeminiError::EmptyResponse { reason }) => {
                assert_eq!(reason.as_deref(), Some("SAFETY"));
            }
            other => panic!("expected EmptyResponse, got {other:?}"),
        }
    }
}
