//! Synonym management tools.
//!
//! Tools: add_synonyms, delete_synonyms, delete_all_synonyms,
//!        get_index_synonyms
//!
//! A synonym mapping is a base word plus alternates that resolve to it
//! during fuzzy matching only. All calls use the admin key.

use serde_json::{Map, Value as JsonValue};

use reqwest::Method;

use crate::args::{get_array_arg, get_string_arg, get_string_array_arg};
use crate::envelope::ToolResult;
use crate::error::{McpError, Result};
use crate::schema;
use crate::tools::{run, ToolContext, ToolDef};

/// Get all synonym tool definitions.
pub fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new(
            "add_synonyms",
            "Add synonym mappings to an index. Each mapping has a base_word and the synonyms \
             that resolve to it during fuzzy queries. Synonyms do not apply to exact matches.",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "index_name": {
                        "type": "string",
                        "description": "The name of the index to add synonyms to"
                    },
                    "synonyms": {
                        "type": "array",
                        "description": "The synonym mappings to add",
                        "items": {
                            "type": "object",
                            "properties": {
                                "base_word": {
                                    "type": "string",
                                    "description": "The base word that the given synonyms will resolve to during fuzzy queries"
                                },
                                "synonyms": {
                                    "type": "array",
                                    "items": {"type": "string"},
                                    "description": "An array of synonyms that resolve to the base word during fuzzy queries"
                                }
                            },
                            "required": ["base_word", "synonyms"]
                        }
                    }
                },
                "required": ["index_name", "synonyms"]
            }),
        ),
        ToolDef::new(
            "delete_synonyms",
            "Delete the synonym mappings for specific base words from an index.",
            schema!(object {
                required: { "index_name": string, "base_words": array_string }
            }),
        ),
        ToolDef::new(
            "delete_all_synonyms",
            "Delete all synonym mappings from an index.",
            schema!(object {
                required: { "index_name": string }
            }),
        ),
        ToolDef::new(
            "get_index_synonyms",
            "Get all synonym mappings configured for an index.",
            schema!(object {
                required: { "index_name": string }
            }),
        ),
    ]
}

/// Dispatch a synonym tool call.
pub async fn dispatch(
    ctx: &ToolContext,
    name: &str,
    args: Map<String, JsonValue>,
) -> Result<ToolResult> {
    match name {
        "add_synonyms" => {
            let index_name = get_string_arg(&args, "index_name")?;
            let synonyms = JsonValue::Array(get_array_arg(&args, "synonyms")?);

            Ok(run("add synonyms", async {
                let base = ctx.config.endpoint()?;
                let admin_key = ctx.config.admin_key()?;
                let payload = ctx
                    .client
                    .request(
                        Method::POST,
                        &format!("{}/index/{}/synonyms", base, index_name),
                        admin_key,
                        Some(&synonyms),
                    )
                    .await?;
                Ok(ToolResult::success(
                    "synonyms-added",
                    &[&index_name],
                    &payload,
                    "add synonyms",
                ))
            })
            .await)
        }

        "delete_synonyms" => {
            let index_name = get_string_arg(&args, "index_name")?;
            let base_words = serde_json::to_value(get_string_array_arg(&args, "base_words")?)
                .map_err(McpError::from)?;

            Ok(run("delete synonyms", async {
                let base = ctx.config.endpoint()?;
                let admin_key = ctx.config.admin_key()?;
                let payload = ctx
                    .client
                    .request(
                        Method::DELETE,
                        &format!("{}/index/{}/synonyms", base, index_name),
                        admin_key,
                        Some(&base_words),
                    )
                    .await?;
                Ok(ToolResult::success(
                    "synonyms-deleted",
                    &[&index_name],
                    &payload,
                    "delete synonyms",
                ))
            })
            .await)
        }

        "delete_all_synonyms" => {
            let index_name = get_string_arg(&args, "index_name")?;

            Ok(run("delete all synonyms", async {
                let base = ctx.config.endpoint()?;
                let admin_key = ctx.config.admin_key()?;
                let payload = ctx
                    .client
                    .request(
                        Method::DELETE,
                        &format!("{}/index/{}/synonyms/all", base, index_name),
                        admin_key,
                        None,
                    )
                    .await?;
                Ok(ToolResult::success(
                    "all-synonyms-deleted",
                    &[&index_name],
                    &payload,
                    "delete all synonyms",
                ))
            })
            .await)
        }

        "get_index_synonyms" => {
            let index_name = get_string_arg(&args, "index_name")?;

            Ok(run("get index synonyms", async {
                let base = ctx.config.endpoint()?;
                let admin_key = ctx.config.admin_key()?;
                let payload = ctx
                    .client
                    .request(
                        Method::GET,
                        &format!("{}/index/{}/synonyms", base, index_name),
                        admin_key,
                        None,
                    )
                    .await?;
                Ok(ToolResult::success(
                    "index-synonyms",
                    &[&index_name],
                    &payload,
                    "get index synonyms",
                ))
            })
            .await)
        }

        _ => Err(McpError::UnknownTool(name.to_string())),
    }
}
