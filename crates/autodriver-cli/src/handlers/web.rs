//! Web command handler.

use anyhow::Result;
use autodriver_axum::{ServerConfig, start_server};

use crate::bootstrap::CliConfig;

/// Build the server config from the resolved CLI config and flags.
///
/// An empty origin list keeps the permissive CORS default.
pub fn server_config(
    config: &CliConfig,
    host: &str,
    port: Option<u16>,
    allow_origins: Vec<String>,
) -> ServerConfig {
    let mut server = ServerConfig::from_settings(config.settings.clone())
        .with_gemini(config.gemini.clone())
        .with_host(host);
    if let Some(port) = port {
        server = server.with_port(port);
    }
    if !allow_origins.is_empty() {
        server = server.with_allowed_origins(allow_origins);
    }
    server
}

/// Serve the browser workbench until the process is stopped.
pub async fn execute(
    config: &CliConfig,
    host: &str,
    port: Option<u16>,
    allow_origins: Vec<String>,
) -> Result<()> {
    start_server(server_config(config, host, port, allow_origins)).await
}
