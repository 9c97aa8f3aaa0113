//! Tool result envelopes.
//!
//! Every tool call returns a [`ToolResult`]: a list of content blocks plus an
//! optional `isError` flag. Successful calls carry one `resource` block whose
//! text is the JSON payload relayed from Searchcraft; failures carry one
//! `text` block with a leading failure glyph. Callers must treat the absence
//! of `isError` as success.

use chrono::Utc;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::ToolError;

/// An embedded resource inside a content block.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceContents {
    /// Synthetic `searchcraft://` identifier, unique per call.
    pub uri: String,
    /// Always `application/json`.
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    /// JSON-serialized payload.
    pub text: String,
}

/// One content block of a tool result.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    /// Plain diagnostic or narrative text.
    Text {
        /// The text.
        text: String,
    },
    /// A structured JSON resource.
    Resource {
        /// The embedded resource.
        resource: ResourceContents,
    },
}

impl ContentBlock {
    /// A plain text block.
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text { text: text.into() }
    }

    /// A JSON resource block with a synthesized `searchcraft://` URI.
    pub fn resource(kind: &str, segments: &[&str], text: impl Into<String>) -> Self {
        ContentBlock::Resource {
            resource: ResourceContents {
                uri: resource_uri(kind, segments),
                mime_type: "application/json".to_string(),
                text: text.into(),
            },
        }
    }
}

/// The value returned to the MCP client for one tool call.
#[derive(Debug, Clone, Serialize)]
pub struct ToolResult {
    /// Content blocks, in presentation order.
    pub content: Vec<ContentBlock>,
    /// Present and true only on failure.
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

impl ToolResult {
    /// A successful result from arbitrary content blocks.
    pub fn new(content: Vec<ContentBlock>) -> Self {
        Self {
            content,
            is_error: None,
        }
    }

    /// A successful result carrying one JSON resource block.
    ///
    /// The payload is pretty-printed; an empty (null) payload is replaced by
    /// a small confirmation object so the client always receives valid JSON.
    pub fn success(kind: &str, segments: &[&str], payload: &JsonValue, operation: &str) -> Self {
        let payload = if payload.is_null() {
            serde_json::json!({ "message": format!("{} completed successfully", operation) })
        } else {
            payload.clone()
        };
        let text = serde_json::to_string_pretty(&payload).unwrap_or_else(|_| "null".to_string());
        Self::new(vec![ContentBlock::resource(kind, segments, text)])
    }

    /// An error result: one text block with the failure marker, `isError` set.
    pub fn error(message: impl std::fmt::Display) -> Self {
        Self {
            content: vec![ContentBlock::text(format!("❌ Error: {}", message))],
            is_error: Some(true),
        }
    }

    /// Whether this result reports a failure.
    pub fn is_error(&self) -> bool {
        self.is_error.unwrap_or(false)
    }
}

/// Map a tool failure to its error envelope.
///
/// Missing configuration surfaces as-is (it already names the variable);
/// everything else is prefixed with the operation description.
pub fn failure(operation: &str, err: &ToolError) -> ToolResult {
    match err {
        ToolError::MissingConfig(_) => ToolResult::error(err),
        _ => ToolResult::error(format!("Failed to {}: {}", operation, err)),
    }
}

/// Synthesize a `searchcraft://<kind>/<segments...>/<epoch-millis>` URI.
///
/// Timestamped in whole milliseconds; concurrent identical calls within the
/// same millisecond produce the same URI.
pub fn resource_uri(kind: &str, segments: &[&str]) -> String {
    let mut uri = format!("searchcraft://{}", kind);
    for segment in segments {
        uri.push('/');
        uri.push_str(segment);
    }
    uri.push('/');
    uri.push_str(&Utc::now().timestamp_millis().to_string());
    uri
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let result = ToolResult::success("key-details", &["abc"], &json!({"id": "abc"}), "get key details");
        assert!(!result.is_error());

        let wire = serde_json::to_value(&result).unwrap();
        assert!(wire.get("isError").is_none());
        let blocks = wire["content"].as_array().unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0]["type"], "resource");
        let resource = &blocks[0]["resource"];
        assert_eq!(resource["mimeType"], "application/json");
        assert!(resource["uri"]
            .as_str()
            .unwrap()
            .starts_with("searchcraft://key-details/abc/"));
        assert_eq!(
            resource["text"].as_str().unwrap(),
            serde_json::to_string_pretty(&json!({"id": "abc"})).unwrap()
        );
    }

    #[test]
    fn test_null_payload_substitutes_confirmation() {
        let result = ToolResult::success("index-deleted", &["movies"], &JsonValue::Null, "delete index");
        let wire = serde_json::to_value(&result).unwrap();
        let text = wire["content"][0]["resource"]["text"].as_str().unwrap();
        let payload: JsonValue = serde_json::from_str(text).unwrap();
        assert_eq!(payload["message"], "delete index completed successfully");
    }

    #[test]
    fn test_error_envelope_shape() {
        let result = ToolResult::error("Failed to delete index: HTTP 404: Not Found gone");
        assert!(result.is_error());

        let wire = serde_json::to_value(&result).unwrap();
        assert_eq!(wire["isError"], true);
        assert_eq!(
            wire["content"][0]["text"],
            "❌ Error: Failed to delete index: HTTP 404: Not Found gone"
        );
    }

    #[test]
    fn test_failure_keeps_missing_config_message_bare() {
        let result = failure("create index", &ToolError::MissingConfig("ADMIN_KEY"));
        let wire = serde_json::to_value(&result).unwrap();
        assert_eq!(
            wire["content"][0]["text"],
            "❌ Error: ADMIN_KEY environment variable is required"
        );
    }

    #[test]
    fn test_failure_prefixes_remote_errors_with_operation() {
        let err = ToolError::RemoteService {
            status: 404,
            status_text: "Not Found".to_string(),
            body: "not found".to_string(),
        };
        let result = failure("get key details", &err);
        let text = match &result.content[0] {
            ContentBlock::Text { text } => text.clone(),
            _ => panic!("expected text block"),
        };
        assert!(text.contains("Failed to get key details"));
        assert!(text.contains("not found"));
    }

    #[test]
    fn test_resource_uri_joins_segments() {
        let uri = resource_uri("document", &["movies", "42"]);
        assert!(uri.starts_with("searchcraft://document/movies/42/"));
        let millis: i64 = uri.rsplit('/').next().unwrap().parse().unwrap();
        assert!(millis > 0);
    }
}
