//! Shared workbench backend facade for autodriver adapters.
//!
//! This crate provides `WorkbenchBackend`, the orchestration layer that both
//! the web server and the CLI delegate to, so the two surfaces show the same
//! panels for the same build.
//!
//! # Architecture
//!
//! ```text
//! Adapters:   autodriver-axum    autodriver-cli
//!                    ↓                 ↓
//! Facade:            └─ autodriver-gui ┘
//!                     WorkbenchBackend
//!                            ↓
//! Core:               autodriver-core
//! ```
//!
//! # Rules
//!
//! 1. **No adapter dependencies** - Must not depend on axum, clap, etc.
//! 2. **Pure orchestration** - The build port is injected via `GuiDeps`
//! 3. **Semantic errors** - Returns `GuiError`, adapters map to their error types

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tokio_test as _;

mod backend;
mod deps;
mod error;
pub mod types;
pub mod view;
mod workbench;

// Primary exports
pub use backend::WorkbenchBackend;
pub use deps::GuiDeps;
pub use error::GuiError;
pub use types::{BuildSummary, InputUpdate, OptionEntry, WorkbenchOptions, WorkbenchSnapshot};
pub use view::{
    AnalysisPanel, EditorPanel, Indicator, InputsView, IssueRow, TerminalPanel, Tone,
    WorkbenchView,
};
pub use workbench::Workbench;
