//! Composition root for the web server.
//!
//! Wires the Gemini adapter into the workbench backend and starts the
//! listener. Tests build an [`AxumContext`] directly from a fake port.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use autodriver_core::{DEFAULT_WEB_PORT, DriverBuildPort, Settings};
use autodriver_gemini::{DefaultGeminiClient, GeminiClientConfig};
use autodriver_gui::{GuiDeps, WorkbenchBackend};
use tokio::net::TcpListener;

/// CORS configuration for the API routes.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow any origin (local development).
    #[default]
    AllowAll,
    /// Allow only the listed origins.
    AllowOrigins(Vec<String>),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
    pub settings: Settings,
    pub gemini: GeminiClientConfig,
}

impl ServerConfig {
    /// Loopback on the default port with default settings and no API key.
    pub fn with_defaults() -> Self {
        Self::from_settings(Settings::with_defaults())
    }

    /// Derive the port and Gemini config from settings.
    pub fn from_settings(settings: Settings) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: settings.web_port.unwrap_or(DEFAULT_WEB_PORT),
            cors: CorsConfig::default(),
            gemini: GeminiClientConfig::from_settings(&settings),
            settings,
        }
    }

    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn with_gemini(mut self, gemini: GeminiClientConfig) -> Self {
        self.gemini = gemini;
        self
    }

    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Everything the handlers need.
pub struct AxumContext {
    pub gui: Arc<WorkbenchBackend>,
}

impl AxumContext {
    /// Build a context around an arbitrary build port.
    pub fn from_port(port: Arc<dyn DriverBuildPort>, settings: &Settings) -> Self {
        Self {
            gui: Arc::new(WorkbenchBackend::new(GuiDeps::new(port, settings))),
        }
    }
}

/// Build the production context: Gemini client behind the workbench backend.
pub fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    if !config.gemini.has_api_key() {
        tracing::warn!(
            target: "autodriver.build",
            "No API key configured; every build will fail until API_KEY is set"
        );
    }

    let client = DefaultGeminiClient::new(&config.gemini)
        .context("failed to construct Gemini client")?;
    tracing::debug!(
        target: "autodriver.gemini",
        endpoint = %client.endpoint_url(),
        "Gemini client ready"
    );

    Ok(AxumContext::from_port(Arc::new(client), &config.settings))
}

/// Start the web server and serve until the process is stopped.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config)?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", config.host, config.port))?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("autodriver workbench listening on http://{addr}");
    println!("AutoDriver AI workbench: http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
