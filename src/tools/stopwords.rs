//! Stopword management tools.
//!
//! Tools: add_stopwords, delete_stopwords, delete_all_stopwords,
//!        get_index_stopwords
//!
//! Stopwords are tokens excluded from indexing/matching for relevance
//! tuning. All calls use the admin key.

use reqwest::Method;
use serde_json::{Map, Value as JsonValue};

use crate::args::{get_string_arg, get_string_array_arg};
use crate::envelope::ToolResult;
use crate::error::{McpError, Result};
use crate::schema;
use crate::tools::{run, ToolContext, ToolDef};

/// Get all stopword tool definitions.
pub fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new(
            "add_stopwords",
            "Add custom stopwords to an index. These are filtered out of queries in addition to \
             the language defaults.",
            schema!(object {
                required: { "index_name": string, "stopwords": array_string }
            }),
        ),
        ToolDef::new(
            "delete_stopwords",
            "Delete specific custom stopwords from an index.",
            schema!(object {
                required: { "index_name": string, "stopwords": array_string }
            }),
        ),
        ToolDef::new(
            "delete_all_stopwords",
            "Delete all custom stopwords from an index. Language-default stopwords are not \
             affected.",
            schema!(object {
                required: { "index_name": string }
            }),
        ),
        ToolDef::new(
            "get_index_stopwords",
            "Get all stopwords configured for an index.",
            schema!(object {
                required: { "index_name": string }
            }),
        ),
    ]
}

/// Dispatch a stopword tool call.
pub async fn dispatch(
    ctx: &ToolContext,
    name: &str,
    args: Map<String, JsonValue>,
) -> Result<ToolResult> {
    match name {
        "add_stopwords" => {
            let index_name = get_string_arg(&args, "index_name")?;
            let stopwords = serde_json::to_value(get_string_array_arg(&args, "stopwords")?)
                .map_err(McpError::from)?;

            Ok(run("add stopwords", async {
                let base = ctx.config.endpoint()?;
                let admin_key = ctx.config.admin_key()?;
                let payload = ctx
                    .client
                    .request(
                        Method::POST,
                        &format!("{}/index/{}/stopwords", base, index_name),
                        admin_key,
                        Some(&stopwords),
                    )
                    .await?;
                Ok(ToolResult::success(
                    "stopwords-added",
                    &[&index_name],
                    &payload,
                    "add stopwords",
                ))
            })
            .await)
        }

        "delete_stopwords" => {
            let index_name = get_string_arg(&args, "index_name")?;
            let stopwords = serde_json::to_value(get_string_array_arg(&args, "stopwords")?)
                .map_err(McpError::from)?;

            Ok(run("delete stopwords", async {
                let base = ctx.config.endpoint()?;
                let admin_key = ctx.config.admin_key()?;
                let payload = ctx
                    .client
                    .request(
                        Method::DELETE,
                        &format!("{}/index/{}/stopwords", base, index_name),
                        admin_key,
                        Some(&stopwords),
                    )
                    .await?;
                Ok(ToolResult::success(
                    "stopwords-deleted",
                    &[&index_name],
                    &payload,
                    "delete stopwords",
                ))
            })
            .await)
        }

        "delete_all_stopwords" => {
            let index_name = get_string_arg(&args, "index_name")?;

            Ok(run("delete all stopwords", async {
                let base = ctx.config.endpoint()?;
                let admin_key = ctx.config.admin_key()?;
                let payload = ctx
                    .client
                    .request(
                        Method::DELETE,
                        &format!("{}/index/{}/stopwords/all", base, index_name),
                        admin_key,
                        None,
                    )
                    .await?;
                Ok(ToolResult::success(
                    "all-stopwords-deleted",
                    &[&index_name],
                    &payload,
                    "delete all stopwords",
                ))
            })
            .await)
        }

        "get_index_stopwords" => {
            let index_name = get_string_arg(&args, "index_name")?;

            Ok(run("get index stopwords", async {
                let base = ctx.config.endpoint()?;
                let admin_key = ctx.config.admin_key()?;
                let payload = ctx
                    .client
                    .request(
                        Method::GET,
                        &format!("{}/index/{}/stopwords", base, index_name),
                        admin_key,
                        None,
                    )
                    .await?;
                Ok(ToolResult::success(
                    "index-stopwords",
                    &[&index_name],
                    &payload,
                    "get index stopwords",
                ))
            })
            .await)
        }

        _ => Err(McpError::UnknownTool(name.to_string())),
    }
}
