//! Parsing of the model's reply into a [`BuildResult`].
//!
//! The reply is requested as schema-constrained JSON, but models still
//! occasionally wrap it in markdown code fences. Fences are stripped before
//! decoding; everything else must match the schema exactly.

use serde_json::error::Category;
use thiserror::Error;

use crate::domain::BuildResult;

/// Why a reply could not be turned into a [`BuildResult`].
#[derive(Debug, Error)]
pub enum ParseError {
    /// Nothing left after stripping fences and whitespace.
    #[error("No response from AI")]
    Empty,

    /// The reply is not valid JSON.
    #[error("Malformed JSON in AI response: {0}")]
    Malformed(#[source] serde_json::Error),

    /// Valid JSON that does not match the response schema.
    #[error("AI response does not match the expected schema: {0}")]
    SchemaMismatch(#[source] serde_json::Error),
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => Self::SchemaMismatch(err),
            Category::Syntax | Category::Eof | Category::Io => Self::Malformed(err),
        }
    }
}

/// Remove markdown code fences from a reply.
///
/// Drops every "```json" marker, then every remaining "```", then trims.
/// Applying it twice gives the same result as applying it once.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Decode a model reply into a [`BuildResult`].
///
/// An `optimizedSource` consisting only of whitespace is treated as absent.
pub fn parse_build_result(text: &str) -> Result<BuildResult, ParseError> {
    let cleaned = strip_code_fences(text);
    if cleaned.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut result: BuildResult = serde_json::from_str(&cleaned)?;
    if result
        .optimized_source
        .as_deref()
        .is_some_and(|source| source.trim().is_empty())
    {
        result.optimized_source = None;
    }

    tracing::debug!(
        target: "autodriver.parse",
        status = %result.status,
        issues = result.issues.len(),
        has_fix = result.optimized_source.is_some(),
        "Parsed build result"
    );

    Ok(result)
}
