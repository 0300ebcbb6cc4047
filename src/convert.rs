//! Argument extraction helpers for the tool dispatch boundary.
//!
//! MCP tool calls arrive as loosely-typed JSON objects; these helpers pull
//! typed values out before anything reaches the query engine.

use serde_json::{Map, Value as JsonValue};

use crate::error::{McpError, Result};

/// Get a required string argument.
pub fn get_string_arg(args: &Map<String, JsonValue>, name: &str) -> Result<String> {
    args.get(name)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| McpError::MissingArg(name.to_string()))
}

/// Get an optional string argument.
pub fn get_optional_string(args: &Map<String, JsonValue>, name: &str) -> Option<String> {
    args.get(name).and_then(|v| v.as_str()).map(|s| s.to_string())
}

/// Get an optional boolean argument.
pub fn get_optional_bool(args: &Map<String, JsonValue>, name: &str) -> Option<bool> {
    args.get(name).and_then(|v| v.as_bool())
}

/// Get an optional f64 argument.
pub fn get_optional_f64(args: &Map<String, JsonValue>, name: &str) -> Option<f64> {
    args.get(name).and_then(|v| v.as_f64())
}

/// Get a required array-of-strings argument.
pub fn get_string_array_arg(args: &Map<String, JsonValue>, name: &str) -> Result<Vec<String>> {
    let arr = args
        .get(name)
        .and_then(|v| v.as_array())
        .ok_or_else(|| McpError::MissingArg(name.to_string()))?;

    arr.iter()
        .map(|v| {
            v.as_str().map(|s| s.to_string()).ok_or_else(|| McpError::InvalidArg {
                name: name.to_string(),
                reason: "Expected an array of strings".to_string(),
            })
        })
        .collect()
}
