//! Workbench page handlers.

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use serde::Deserialize;

use autodriver_core::{KernelVersion, TargetArch};
use autodriver_gui::{GuiError, InputUpdate};

use crate::error::HttpError;
use crate::page::render_page;
use crate::state::AppState;

/// Fields posted by the workbench form.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildForm {
    pub sdk_header: Option<String>,
    pub driver_source: Option<String>,
    pub arch: Option<String>,
    pub kernel: Option<String>,
    pub extra_flags: Option<String>,
}

impl TryFrom<BuildForm> for InputUpdate {
    type Error = HttpError;

    fn try_from(form: BuildForm) -> Result<Self, Self::Error> {
        Ok(Self {
            // Browsers submit textareas with CRLF line endings.
            sdk_header: form.sdk_header.map(|s| s.replace("\r\n", "\n")),
            driver_source: form.driver_source.map(|s| s.replace("\r\n", "\n")),
            arch: form
                .arch
                .as_deref()
                .map(str::parse::<TargetArch>)
                .transpose()?,
            kernel: form
                .kernel
                .as_deref()
                .map(str::parse::<KernelVersion>)
                .transpose()?,
            extra_flags: form.extra_flags,
        })
    }
}

/// Render the current workbench.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let view = state.gui.view().await;
    Html(render_page(&view, &state.gui.options(), None))
}

/// Apply the posted inputs, run a build and render the result.
///
/// A submit while another build is running re-renders the in-flight state
/// with a notice and `409 Conflict`.
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<BuildForm>,
) -> Result<(StatusCode, Html<String>), HttpError> {
    let update = InputUpdate::try_from(form)?;
    let options = state.gui.options();

    match state.gui.build(Some(update)).await {
        Ok(view) => Ok((StatusCode::OK, Html(render_page(&view, &options, None)))),
        Err(GuiError::Conflict(msg)) => {
            let view = state.gui.view().await;
            Ok((
                StatusCode::CONFLICT,
                Html(render_page(&view, &options, Some(&msg))),
            ))
        }
        Err(other) => Err(other.into()),
    }
}
