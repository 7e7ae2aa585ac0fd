//! CLI bootstrap - the composition root.
//!
//! Settings come from defaults, then `AUTODRIVER_*` environment variables
//! (a `.env` file is loaded by `main`), then command-line overrides. The
//! Gemini client is the only concrete adapter wired here.

use std::sync::Arc;

use anyhow::Result;
use autodriver_core::{Settings, SettingsUpdate, api_key_from_env, validate_settings};
use autodriver_gemini::{DefaultGeminiClient, GeminiClientConfig};
use autodriver_gui::{GuiDeps, WorkbenchBackend};

use crate::error::CliError;

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "AUTODRIVER_BASE_URL";

/// Resolved configuration for one CLI invocation.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub settings: Settings,
    pub gemini: GeminiClientConfig,
}

impl CliConfig {
    /// Load settings from the environment and apply the `--model` override.
    pub fn load(model_override: Option<&str>) -> Result<Self, CliError> {
        let update = SettingsUpdate::from_env()?;
        Self::from_parts(
            &update,
            model_override,
            api_key_from_env(),
            std::env::var(BASE_URL_ENV).ok(),
        )
    }

    /// Assemble a config from already-read inputs.
    pub fn from_parts(
        update: &SettingsUpdate,
        model_override: Option<&str>,
        api_key: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self, CliError> {
        let mut settings = Settings::with_defaults();
        settings.merge(update);
        if let Some(model) = model_override {
            settings.model = Some(model.to_string());
        }
        validate_settings(&settings)?;

        let mut gemini = GeminiClientConfig::from_settings(&settings).with_optional_api_key(api_key);
        if let Some(base_url) = base_url.filter(|url| !url.trim().is_empty()) {
            gemini = gemini.with_base_url(base_url.trim());
        }

        Ok(Self { settings, gemini })
    }
}

/// Fully composed context for commands that run builds.
pub struct CliContext {
    pub backend: Arc<WorkbenchBackend>,
}

/// Wire the Gemini client into a workbench backend.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    if !config.gemini.has_api_key() {
        tracing::warn!(
            target: "autodriver.build",
            "No API key configured (set API_KEY or GEMINI_API_KEY)"
        );
    }

    let client = DefaultGeminiClient::new(&config.gemini)
        .map_err(|e| CliError::Config(format!("failed to construct Gemini client: {e}")))?;

    let deps = GuiDeps::new(Arc::new(client), &config.settings);
    Ok(CliContext {
        backend: Arc::new(WorkbenchBackend::new(deps)),
    })
}
