//! Response schema constraining the model's reply.
//!
//! Uses the `OpenAPI` subset understood by the Gemini `responseSchema`
//! field (upper-case type names). The shape matches [`crate::BuildResult`].

use serde_json::{Value, json};

/// Fields the model must always return.
pub const REQUIRED_FIELDS: [&str; 4] = ["status", "makefile", "simulatedOutput", "issues"];

/// Schema descriptor for a [`crate::BuildResult`].
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "status": { "type": "STRING", "enum": ["success", "failed"] },
            "makefile": {
                "type": "STRING",
                "description": "The complete content of the generated Makefile"
            },
            "simulatedOutput": {
                "type": "STRING",
                "description": "Simulated terminal output of the make command (gcc/ld)"
            },
            "optimizedSource": {
                "type": "STRING",
                "description": "The corrected driver source code if errors were found"
            },
            "issues": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "severity": { "type": "STRING", "enum": ["error", "warning", "info"] },
                        "line": { "type": "INTEGER" },
                        "message": { "type": "STRING" },
                        "suggestion": { "type": "STRING" }
                    },
                    "required": ["severity", "line", "message", "suggestion"]
                }
            }
        },
        "required": REQUIRED_FIELDS
    })
}
