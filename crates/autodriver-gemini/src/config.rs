//! Public configuration for the Gemini client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config is derived from this.

use std::time::Duration;

use autodriver_core::{DEFAULT_MODEL, DEFAULT_THINKING_BUDGET, Settings};

/// Default base URL of the Generative Language API.
pub(crate) const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuration for the Gemini client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use autodriver_gemini::GeminiClientConfig;
/// use std::time::Duration;
///
/// let config = GeminiClientConfig::new()
///     .with_model("gemini-2.5-pro")
///     .with_timeout(Duration::from_secs(120))
///     .with_api_key("secret");
/// ```
#[derive(Clone)]
pub struct GeminiClientConfig {
    /// Base URL for the API, without the `/models/...` suffix
    pub(crate) base_url: String,
    /// Model identifier
    pub(crate) model: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// API key; builds fail without sending anything when absent
    pub(crate) api_key: Option<String>,
    /// Thinking token budget; `None` leaves thinking at the model default
    pub(crate) thinking_budget: Option<u32>,
}

// Hand-written so the key never ends up in logs.
impl std::fmt::Debug for GeminiClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClientConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("thinking_budget", &self.thinking_budget)
            .finish()
    }
}

impl Default for GeminiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            user_agent: concat!("autodriver-gemini/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(300),
            api_key: None,
            thinking_budget: Some(DEFAULT_THINKING_BUDGET),
        }
    }
}

impl GeminiClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a configuration from application settings.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        let budget = settings.effective_thinking_budget();
        Self::new()
            .with_model(settings.effective_model())
            .with_timeout(settings.effective_request_timeout())
            .with_thinking_budget((budget > 0).then_some(budget))
    }

    /// Set the base URL for the API.
    ///
    /// Defaults to `https://generativelanguage.googleapis.com/v1beta`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 300 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the API key.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set an optional API key.
    #[must_use]
    pub fn with_optional_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key;
        self
    }

    /// Set the thinking budget; `None` omits the thinking config entirely.
    #[must_use]
    pub const fn with_thinking_budget(mut self, budget: Option<u32>) -> Self {
        self.thinking_budget = budget;
        self
    }

    /// Whether an API key is configured.
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
