//! Index schema management tools.
//!
//! Tools: create_index, update_index, patch_index, delete_index,
//!        list_all_indexes, get_index_schema, get_index_stats,
//!        get_all_index_stats
//!
//! All calls use the admin key.

use reqwest::Method;
use serde_json::{Map, Value as JsonValue};

use crate::args::{get_object_arg, get_string_arg};
use crate::envelope::ToolResult;
use crate::error::{McpError, Result};
use crate::schema;
use crate::tools::{run, ToolContext, ToolDef};

fn index_schema_properties() -> JsonValue {
    serde_json::json!({
        "name": {
            "type": "string",
            "description": "The name of the index (should be URL friendly - no spaces or special characters)"
        },
        "search_fields": {
            "type": "array",
            "items": {"type": "string"},
            "description": "Array of default text field names to search against when no specific field is specified"
        },
        "fields": {
            "type": "object",
            "description": "Field definitions for the index; values describe type (text, datetime, bool, f64, u64, i64, facet) and storage flags"
        },
        "language": {
            "type": "string",
            "description": "Two letter ISO 639 language code (e.g., 'en') for stemming and stop word filtering"
        },
        "enable_language_stemming": {
            "type": "boolean",
            "description": "Whether to enable language specific stemming algorithm (requires language code)"
        },
        "weight_multipliers": {
            "type": "object",
            "description": "Weight multipliers for search fields (0.0 - 10.0) - gives more/less importance to specific fields"
        },
        "auto_commit_delay": {
            "type": "number",
            "description": "Auto commit delay in seconds - time to wait since last ingestion request before automatically committing"
        },
        "exclude_stop_words": {
            "type": "boolean",
            "description": "Whether to exclude stop words when performing searches"
        },
        "time_decay_field": {
            "type": "string",
            "description": "Field name for exponential temporal decay function on relevancy scoring (must be a datetime field marked as fast and indexed)"
        }
    })
}

/// Get all index tool definitions.
pub fn tools() -> Vec<ToolDef> {
    let full_schema = serde_json::json!({
        "type": "object",
        "description": "The complete index schema definition",
        "properties": {
            "index": {
                "type": "object",
                "properties": index_schema_properties(),
                "required": ["name", "search_fields", "fields"]
            }
        },
        "required": ["index"]
    });

    let patch_schema = serde_json::json!({
        "type": "object",
        "description": "The partial updates to apply to the index",
        "properties": index_schema_properties()
    });

    vec![
        ToolDef::new(
            "create_index",
            "Create a new index with the specified schema. This will empty the index if it \
             already exists.",
            serde_json::json!({
                "type": "object",
                "properties": { "index_schema": full_schema.clone() },
                "required": ["index_schema"]
            }),
        ),
        ToolDef::new(
            "update_index",
            "Replace the schema of an existing index. This will empty the index.",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "index_name": {"type": "string", "description": "The name of the index to update"},
                    "index_schema": full_schema
                },
                "required": ["index_name", "index_schema"]
            }),
        ),
        ToolDef::new(
            "patch_index",
            "Make partial configuration changes to an index schema (search_fields, \
             weight_multipliers, etc.).",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "index_name": {"type": "string", "description": "The name of the index to patch"},
                    "updates": patch_schema
                },
                "required": ["index_name", "updates"]
            }),
        ),
        ToolDef::new(
            "delete_index",
            "Delete an index and all of its documents. This cannot be undone.",
            schema!(object {
                required: { "index_name": string }
            }),
        ),
        ToolDef::new(
            "list_all_indexes",
            "Get a list of all indexes in the Searchcraft instance.",
            schema!(object {}),
        ),
        ToolDef::new(
            "get_index_schema",
            "Get the schema definition of a specific index.",
            schema!(object {
                required: { "index_name": string }
            }),
        ),
        ToolDef::new(
            "get_index_stats",
            "Get statistics for a specific index (document count, size, etc.).",
            schema!(object {
                required: { "index_name": string }
            }),
        ),
        ToolDef::new(
            "get_all_index_stats",
            "Get statistics for every index in the Searchcraft instance.",
            schema!(object {}),
        ),
    ]
}

/// Dispatch an index tool call.
pub async fn dispatch(
    ctx: &ToolContext,
    name: &str,
    args: Map<String, JsonValue>,
) -> Result<ToolResult> {
    match name {
        "create_index" => {
            let index_schema = get_object_arg(&args, "index_schema")?;
            let index_name = index_schema
                .get("index")
                .and_then(|i| i.get("name"))
                .and_then(|n| n.as_str())
                .ok_or_else(|| McpError::InvalidArg {
                    name: "index_schema".to_string(),
                    reason: "index.name is required".to_string(),
                })?
                .to_string();

            Ok(run("create index", async {
                let base = ctx.config.endpoint()?;
                let admin_key = ctx.config.admin_key()?;
                let payload = ctx
                    .client
                    .request(Method::POST, &format!("{}/index", base), admin_key, Some(&index_schema))
                    .await?;
                Ok(ToolResult::success("index-created", &[&index_name], &payload, "create index"))
            })
            .await)
        }

        "update_index" => {
            let index_name = get_string_arg(&args, "index_name")?;
            let index_schema = get_object_arg(&args, "index_schema")?;

            Ok(run("update index", async {
                let base = ctx.config.endpoint()?;
                let admin_key = ctx.config.admin_key()?;
                let payload = ctx
                    .client
                    .request(
                        Method::PUT,
                        &format!("{}/index/{}", base, index_name),
                        admin_key,
                        Some(&index_schema),
                    )
                    .await?;
                Ok(ToolResult::success("index-updated", &[&index_name], &payload, "update index"))
            })
            .await)
        }

        "patch_index" => {
            let index_name = get_string_arg(&args, "index_name")?;
            let updates = get_object_arg(&args, "updates")?;

            Ok(run("patch index", async {
                let base = ctx.config.endpoint()?;
                let admin_key = ctx.config.admin_key()?;
                let payload = ctx
                    .client
                    .request(
                        Method::PATCH,
                        &format!("{}/index/{}", base, index_name),
                        admin_key,
                        Some(&updates),
                    )
                    .await?;
                Ok(ToolResult::success("index-patched", &[&index_name], &payload, "patch index"))
            })
            .await)
        }

        "delete_index" => {
            let index_name = get_string_arg(&args, "index_name")?;

            Ok(run("delete index", async {
                let base = ctx.config.endpoint()?;
                let admin_key = ctx.config.admin_key()?;
                let payload = ctx
                    .client
                    .request(Method::DELETE, &format!("{}/index/{}", base, index_name), admin_key, None)
                    .await?;
                Ok(ToolResult::success("index-deleted", &[&index_name], &payload, "delete index"))
            })
            .await)
        }

        "list_all_indexes" => Ok(run("list indexes", async {
            let base = ctx.config.endpoint()?;
            let admin_key = ctx.config.admin_key()?;
            let payload = ctx
                .client
                .request(Method::GET, &format!("{}/index", base), admin_key, None)
                .await?;
            Ok(ToolResult::success("indexes", &[], &payload, "list indexes"))
        })
        .await),

        "get_index_schema" => {
            let index_name = get_string_arg(&args, "index_name")?;

            Ok(run("get index schema", async {
                let base = ctx.config.endpoint()?;
                let admin_key = ctx.config.admin_key()?;
                let payload = ctx
                    .client
                    .request(Method::GET, &format!("{}/index/{}", base, index_name), admin_key, None)
                    .await?;
                Ok(ToolResult::success(
                    "index-schema",
                    &[&index_name],
                    &payload,
                    "get index schema",
                ))
            })
            .await)
        }

        "get_index_stats" => {
            let index_name = get_string_arg(&args, "index_name")?;

            Ok(run("get index stats", async {
                let base = ctx.config.endpoint()?;
                let admin_key = ctx.config.admin_key()?;
                let payload = ctx
                    .client
                    .request(
                        Method::GET,
                        &format!("{}/index/{}/stats", base, index_name),
                        admin_key,
                        None,
                    )
                    .await?;
                Ok(ToolResult::success("index-stats", &[&index_name], &payload, "get index stats"))
            })
            .await)
        }

        "get_all_index_stats" => Ok(run("get index stats", async {
            let base = ctx.config.endpoint()?;
            let admin_key = ctx.config.admin_key()?;
            let payload = ctx
                .client
                .request(Method::GET, &format!("{}/index/stats", base), admin_key, None)
                .await?;
            Ok(ToolResult::success("index-stats", &[], &payload, "get index stats"))
        })
        .await),

        _ => Err(McpError::UnknownTool(name.to_string())),
    }
}
