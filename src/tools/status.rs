//! Service health check tool.
//!
//! Tools: get_searchcraft_status

use serde_json::{Map, Value as JsonValue};

use crate::envelope::{ContentBlock, ToolResult};
use crate::error::{McpError, Result};
use crate::schema;
use crate::tools::{run, ToolContext, ToolDef};

/// Get the status tool definition.
pub fn tools() -> Vec<ToolDef> {
    vec![ToolDef::new(
        "get_searchcraft_status",
        "Get the current status of the Searchcraft search service.",
        schema!(object {}),
    )]
}

/// Dispatch a status tool call.
pub async fn dispatch(
    ctx: &ToolContext,
    name: &str,
    _args: Map<String, JsonValue>,
) -> Result<ToolResult> {
    match name {
        // The healthcheck endpoint is unauthenticated; its body is relayed
        // verbatim as plain text.
        "get_searchcraft_status" => Ok(run("get Searchcraft status", async {
            let base = ctx.config.endpoint()?;
            let body = ctx
                .client
                .get_text(&format!("{}/healthcheck", base), None)
                .await?;
            Ok(ToolResult::new(vec![ContentBlock::text(body)]))
        })
        .await),

        _ => Err(McpError::UnknownTool(name.to_string())),
    }
}
