//! Route definitions and router construction.
//!
//! Handlers delegate to the shared `WorkbenchBackend` facade.

use axum::Router;
use axum::routing::{get, post, put};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// JSON API routes, nested under `/api` by [`create_router`].
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/options", get(handlers::workbench::options))
        .route("/workbench", get(handlers::workbench::view))
        .route(
            "/workbench/inputs",
            put(handlers::workbench::update_inputs),
        )
        .route("/build", post(handlers::workbench::build))
        .route("/schema", get(handlers::workbench::schema))
}

/// Create the application router.
///
/// - `/` serves the workbench page (GET) and accepts its form (POST)
/// - `/api/*` serves the JSON API with CORS
/// - `/health` returns `OK`
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/", get(handlers::page::index).post(handlers::page::submit))
        .route("/health", get(health_check))
        .nest("/api", api_routes().layer(cors))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub(crate) async fn health_check() -> &'static str {
    "OK"
}
