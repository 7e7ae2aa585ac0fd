//! Schema command handler.

use anyhow::Result;
use autodriver_core::response_schema;

/// Print the response schema sent with every build request.
pub fn execute() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&response_schema())?);
    Ok(())
}
