//! Settings domain types and validation.
//!
//! Settings are read from the environment (and a `.env` file loaded by the
//! binaries) at startup; nothing is persisted.

use serde::{Deserialize, Serialize};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

/// Thinking token budget requested for code analysis.
pub const DEFAULT_THINKING_BUDGET: u32 = 4096;

/// Default port for the browser workbench.
pub const DEFAULT_WEB_PORT: u16 = 8787;

/// Default request timeout, generous because thinking models are slow.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "API_KEY";

/// Fallback environment variable holding the API key.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Application settings structure.
///
/// All fields are optional to support partial updates and graceful defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Model identifier sent with every request.
    pub model: Option<String>,

    /// Thinking token budget; `0` disables thinking.
    pub thinking_budget: Option<u32>,

    /// Timeout for the outbound call in seconds.
    pub request_timeout_secs: Option<u64>,

    /// Compiler flags pre-filled into new workbenches.
    pub default_extra_flags: Option<String>,

    /// Port for the browser workbench.
    pub web_port: Option<u16>,
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            model: Some(DEFAULT_MODEL.to_string()),
            thinking_budget: Some(DEFAULT_THINKING_BUDGET),
            request_timeout_secs: Some(DEFAULT_REQUEST_TIMEOUT_SECS),
            default_extra_flags: Some(crate::DEFAULT_EXTRA_FLAGS.to_string()),
            web_port: Some(DEFAULT_WEB_PORT),
        }
    }

    /// Get the effective model (with default fallback).
    #[must_use]
    pub fn effective_model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// Get the effective thinking budget (with default fallback).
    #[must_use]
    pub fn effective_thinking_budget(&self) -> u32 {
        self.thinking_budget.unwrap_or(DEFAULT_THINKING_BUDGET)
    }

    /// Get the effective request timeout (with default fallback).
    #[must_use]
    pub fn effective_request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    /// Get the effective default flags (with default fallback).
    #[must_use]
    pub fn effective_extra_flags(&self) -> &str {
        self.default_extra_flags
            .as_deref()
            .unwrap_or(crate::DEFAULT_EXTRA_FLAGS)
    }

    /// Get the effective web port (with default fallback).
    #[must_use]
    pub fn effective_web_port(&self) -> u16 {
        self.web_port.unwrap_or(DEFAULT_WEB_PORT)
    }

    /// Merge another settings into this one, only updating fields that are Some.
    pub fn merge(&mut self, other: &SettingsUpdate) {
        if let Some(ref model) = other.model {
            self.model.clone_from(model);
        }
        if let Some(ref budget) = other.thinking_budget {
            self.thinking_budget = *budget;
        }
        if let Some(ref timeout) = other.request_timeout_secs {
            self.request_timeout_secs = *timeout;
        }
        if let Some(ref flags) = other.default_extra_flags {
            self.default_extra_flags.clone_from(flags);
        }
        if let Some(ref port) = other.web_port {
            self.web_port = *port;
        }
    }
}

/// Partial settings update.
///
/// Each field is `Option<Option<T>>`:
/// - `None` = don't change this field
/// - `Some(None)` = set field to None/null
/// - `Some(Some(value))` = set field to value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub model: Option<Option<String>>,
    pub thinking_budget: Option<Option<u32>>,
    pub request_timeout_secs: Option<Option<u64>>,
    pub default_extra_flags: Option<Option<String>>,
    pub web_port: Option<Option<u16>>,
}

impl SettingsUpdate {
    /// Read overrides from `AUTODRIVER_*` environment variables.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through an arbitrary key lookup.
    ///
    /// Unset and blank values leave the field unchanged.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Ok(Self {
            model: get("AUTODRIVER_MODEL").map(Some),
            thinking_budget: get("AUTODRIVER_THINKING_BUDGET")
                .map(|v| parse_env("AUTODRIVER_THINKING_BUDGET", &v))
                .transpose()?
                .map(Some),
            request_timeout_secs: get("AUTODRIVER_TIMEOUT_SECS")
                .map(|v| parse_env("AUTODRIVER_TIMEOUT_SECS", &v))
                .transpose()?
                .map(Some),
            default_extra_flags: get("AUTODRIVER_EXTRA_FLAGS").map(Some),
            web_port: get("AUTODRIVER_PORT")
                .map(|v| parse_env("AUTODRIVER_PORT", &v))
                .transpose()?
                .map(Some),
        })
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, SettingsError> {
    value.parse().map_err(|_| SettingsError::InvalidEnvValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Read the API key from `API_KEY`, falling back to `GEMINI_API_KEY`.
///
/// Blank values count as absent.
pub fn api_key_from_env() -> Option<String> {
    api_key_from_lookup(|key| std::env::var(key).ok())
}

/// Resolve the API key through an arbitrary key lookup.
///
/// `API_KEY` wins when both are set. A blank `API_KEY` falls through to
/// `GEMINI_API_KEY`.
pub fn api_key_from_lookup<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    [API_KEY_ENV, GEMINI_API_KEY_ENV]
        .into_iter()
        .filter_map(|key| lookup(key))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("Model identifier cannot be empty")]
    EmptyModel,

    #[error("Thinking budget must be at most 32768 tokens, got {0}")]
    InvalidThinkingBudget(u32),

    #[error("Request timeout must be between 1 and 3600 seconds, got {0}")]
    InvalidTimeout(u64),

    #[error("Port should be >= 1024 (privileged ports require root), got {0}")]
    InvalidPort(u16),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidEnvValue { key: String, value: String },
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if let Some(ref model) = settings.model {
        if model.trim().is_empty() {
            return Err(SettingsError::EmptyModel);
        }
    }

    if let Some(budget) = settings.thinking_budget {
        if budget > 32_768 {
            return Err(SettingsError::InvalidThinkingBudget(budget));
        }
    }

    if let Some(timeout) = settings.request_timeout_secs {
        if !(1..=3600).contains(&timeout) {
            return Err(SettingsError::InvalidTimeout(timeout));
        }
    }

    if let Some(port) = settings.web_port {
        if port < 1024 {
            return Err(SettingsError::InvalidPort(port));
        }
    }

    Ok(())
}
