//! Gemini client for autodriver.
//!
//! Implements [`autodriver_core::DriverBuildPort`] on top of the Gemini
//! `generateContent` REST endpoint, sending the build prompt together with
//! the response schema so the reply can be decoded deterministically.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type alias - DefaultGeminiClient is meant to be used
// through the DriverBuildPort trait, not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultGeminiClient;

// Configuration
pub use config::GeminiClientConfig;

// Errors
pub use error::GeminiError;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
