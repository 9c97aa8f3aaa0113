//! Tool registry and category definitions.
//!
//! Provides the infrastructure for registering and dispatching MCP tools.
//! Every tool is a thin composition over the shared [`SearchcraftClient`]:
//! resolve configuration, build a URL, issue the call, wrap the outcome.

pub mod auth;
pub mod documents;
pub mod federation;
pub mod index;
pub mod measure;
pub mod search;
pub mod status;
pub mod stopwords;
pub mod synonyms;

use std::future::Future;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::client::SearchcraftClient;
use crate::config::Config;
use crate::envelope::{self, ToolResult};
use crate::error::{McpError, Result, ToolError};

/// A tool definition for the MCP tools/list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDef {
    /// Tool name (e.g., "create_index")
    pub name: String,
    /// Tool description
    pub description: String,
    /// JSON Schema for the input parameters
    #[serde(rename = "inputSchema")]
    pub input_schema: JsonValue,
}

impl ToolDef {
    /// Create a new tool definition.
    pub fn new(name: &str, description: &str, input_schema: JsonValue) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            input_schema,
        }
    }
}

/// Shared state handed to every tool call.
pub struct ToolContext {
    /// Connection settings, resolved once at startup.
    pub config: Config,
    /// Shared HTTP client.
    pub client: SearchcraftClient,
}

impl ToolContext {
    /// Create a context from resolved configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: SearchcraftClient::new(),
        }
    }
}

/// Run an operation body, converting any [`ToolError`] into an error envelope.
///
/// This is the single point where the recoverable failure taxonomy turns
/// into user-visible output; nothing below it re-throws.
pub(crate) async fn run<F>(operation: &str, body: F) -> ToolResult
where
    F: Future<Output = std::result::Result<ToolResult, ToolError>>,
{
    match body.await {
        Ok(result) => result,
        Err(err) => envelope::failure(operation, &err),
    }
}

/// Registry of all available tools.
pub struct ToolRegistry {
    tools: Vec<ToolDef>,
}

impl ToolRegistry {
    /// Create a new registry with all tools registered.
    pub fn new() -> Self {
        let mut tools = Vec::new();

        // Register all tool categories
        tools.extend(index::tools());
        tools.extend(documents::tools());
        tools.extend(auth::tools());
        tools.extend(federation::tools());
        tools.extend(stopwords::tools());
        tools.extend(synonyms::tools());
        tools.extend(measure::tools());
        tools.extend(search::tools());
        tools.extend(status::tools());

        Self { tools }
    }

    /// Get all tool definitions.
    pub fn tools(&self) -> &[ToolDef] {
        &self.tools
    }

    /// Dispatch a tool call to the appropriate handler.
    pub async fn dispatch(
        &self,
        ctx: &ToolContext,
        name: &str,
        args: Map<String, JsonValue>,
    ) -> Result<ToolResult> {
        tracing::debug!(tool = name, "tool call");

        match name {
            "create_index" | "update_index" | "patch_index" | "delete_index"
            | "list_all_indexes" | "get_index_schema" | "get_index_stats"
            | "get_all_index_stats" => index::dispatch(ctx, name, args).await,

            "add_documents" | "get_document_by_id" | "delete_document_by_id"
            | "delete_documents_by_field" | "delete_documents_by_query" => {
                documents::dispatch(ctx, name, args).await
            }

            "create_key" | "update_key" | "delete_key" | "delete_all_keys" | "list_all_keys"
            | "get_key_details" | "get_application_keys" | "get_federation_keys"
            | "get_organization_keys" => auth::dispatch(ctx, name, args).await,

            "create_federation" | "update_federation" | "delete_federation"
            | "list_all_federations" | "get_federation_details" | "get_federation_stats"
            | "get_organization_federations" => federation::dispatch(ctx, name, args).await,

            "add_stopwords" | "delete_stopwords" | "delete_all_stopwords"
            | "get_index_stopwords" => stopwords::dispatch(ctx, name, args).await,

            "add_synonyms" | "delete_synonyms" | "delete_all_synonyms"
            | "get_index_synonyms" => synonyms::dispatch(ctx, name, args).await,

            "get_measure_summary" | "get_measure_conversion" => {
                measure::dispatch(ctx, name, args).await
            }

            "get_search_results" | "get-preliminary-search-data" | "get_search_index_schema" => {
                search::dispatch(ctx, name, args).await
            }

            "get_searchcraft_status" => status::dispatch(ctx, name, args).await,

            _ => Err(McpError::UnknownTool(name.to_string())),
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper macro for creating JSON Schema for tool input parameters.
#[macro_export]
macro_rules! schema {
    // Object with required and optional properties
    (object {
        required: { $($req_name:literal : $req_type:tt),* $(,)? },
        optional: { $($opt_name:literal : $opt_type:tt),* $(,)? }
    }) => {{
        let mut required = Vec::new();
        $(required.push($req_name);)*

        let mut props = serde_json::Map::new();
        $(props.insert($req_name.to_string(), schema!(@type $req_type));)*
        $(props.insert($opt_name.to_string(), schema!(@type $opt_type));)*

        serde_json::json!({
            "type": "object",
            "properties": props,
            "required": required
        })
    }};

    // Object with only required properties
    (object {
        required: { $($req_name:literal : $req_type:tt),* $(,)? }
    }) => {{
        let mut required = Vec::new();
        $(required.push($req_name);)*

        let mut props = serde_json::Map::new();
        $(props.insert($req_name.to_string(), schema!(@type $req_type));)*

        serde_json::json!({
            "type": "object",
            "properties": props,
            "required": required
        })
    }};

    // Object with only optional properties
    (object {
        optional: { $($opt_name:literal : $opt_type:tt),* $(,)? }
    }) => {{
        let mut props = serde_json::Map::new();
        $(props.insert($opt_name.to_string(), schema!(@type $opt_type));)*

        serde_json::json!({
            "type": "object",
            "properties": props,
            "required": []
        })
    }};

    // Empty object (no parameters)
    (object {}) => {{
        serde_json::json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }};

    // Type mappings
    (@type string) => { serde_json::json!({"type": "string"}) };
    (@type number) => { serde_json::json!({"type": "number"}) };
    (@type integer) => { serde_json::json!({"type": "integer"}) };
    (@type boolean) => { serde_json::json!({"type": "boolean"}) };
    (@type object) => { serde_json::json!({"type": "object"}) };
    (@type any) => { serde_json::json!({}) };
    (@type array_string) => { serde_json::json!({"type": "array", "items": {"type": "string"}}) };
    (@type array_object) => { serde_json::json!({"type": "array", "items": {"type": "object"}}) };
}
