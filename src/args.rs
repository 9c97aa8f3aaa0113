//! Helpers for extracting typed values from tool call arguments.

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

/// Get a required object argument.
pub fn get_object_arg(args: &Map<String, JsonValue>, name: &str) -> Result<JsonValue> {
    match args.get(name) {
        Some(value @ JsonValue::Object(_)) => Ok(value.clone()),
        Some(_) => Err(McpError::InvalidArg {
            name: name.to_string(),
            reason: "Expected an object".to_string(),
        }),
        None => Err(McpError::MissingArg(name.to_string())),
    }
}

/// Get an optional object argument, treating explicit null as absent.
pub fn get_optional_object(
    args: &Map<String, JsonValue>,
    name: &str,
) -> Result<Option<Map<String, JsonValue>>> {
    match args.get(name) {
        Some(JsonValue::Object(map)) => Ok(Some(map.clone())),
        Some(JsonValue::Null) | None => Ok(None),
        Some(_) => Err(McpError::InvalidArg {
            name: name.to_string(),
            reason: "Expected an object".to_string(),
        }),
    }
}

/// Get a required array argument.
pub fn get_array_arg(args: &Map<String, JsonValue>, name: &str) -> Result<Vec<JsonValue>> {
    args.get(name)
        .and_then(|v| v.as_array())
        .cloned()
        .ok_or_else(|| McpError::MissingArg(name.to_string()))
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
                reason: "Expected array of strings".to_string(),
            })
        })
        .collect()
}
