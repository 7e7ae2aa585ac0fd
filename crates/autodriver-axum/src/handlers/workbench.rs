//! Workbench JSON API handlers.

use axum::Json;
use axum::extract::State;
use serde_json::Value;

use autodriver_gui::{InputUpdate, WorkbenchOptions, WorkbenchView};

use crate::error::HttpError;
use crate::state::AppState;

/// Architecture and kernel selector values.
pub async fn options(State(state): State<AppState>) -> Json<WorkbenchOptions> {
    Json(state.gui.options())
}

/// Current rendered workbench.
pub async fn view(State(state): State<AppState>) -> Json<WorkbenchView> {
    Json(state.gui.view().await)
}

/// Partial input update.
pub async fn update_inputs(
    State(state): State<AppState>,
    Json(update): Json<InputUpdate>,
) -> Result<Json<WorkbenchView>, HttpError> {
    Ok(Json(state.gui.update_inputs(update).await?))
}

/// Run a build; the optional body is applied to the inputs first.
pub async fn build(
    State(state): State<AppState>,
    update: Option<Json<InputUpdate>>,
) -> Result<Json<WorkbenchView>, HttpError> {
    let update = update.map(|Json(update)| update).filter(|u| !u.is_empty());
    Ok(Json(state.gui.build(update).await?))
}

/// The response schema sent with every build.
pub async fn schema() -> Json<Value> {
    Json(autodriver_core::response_schema())
}
