//! CLI-specific error types and mappings.
//!
//! Maps core and workbench errors to exit codes and user-facing messages.

use autodriver_core::{CoreError, SettingsError};
use autodriver_gui::GuiError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The build ran and reported a failed status.
    #[error("build failed")]
    BuildFailed,

    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error, or a build that reported `failed`
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::BuildFailed | Self::Core(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }

    /// Wrap an IO error with the path it concerns.
    pub fn io(path: &std::path::Path, err: &std::io::Error) -> Self {
        Self::Io(format!("{}: {err}", path.display()))
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Settings(settings_err) => Self::Config(settings_err.to_string()),
            CoreError::Validation(msg) => Self::Arguments(msg),
            CoreError::Configuration(msg) => Self::Config(msg),
            CoreError::ExternalService(msg) => Self::Core(format!("External service: {msg}")),
            CoreError::Internal(msg) => Self::Core(msg),
        }
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<GuiError> for CliError {
    fn from(err: GuiError) -> Self {
        match err {
            GuiError::ValidationFailed(msg) => Self::Arguments(msg),
            GuiError::Conflict(msg) | GuiError::Internal(msg) => Self::Core(msg),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
