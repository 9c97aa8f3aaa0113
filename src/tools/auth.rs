//! Authentication key management tools.
//!
//! Tools: create_key, update_key, delete_key, delete_all_keys, list_all_keys,
//!        get_key_details, get_application_keys, get_federation_keys,
//!        get_organization_keys
//!
//! All calls hit the `/auth` surface and require the admin key.

use reqwest::Method;
use serde_json::{Map, Value as JsonValue};

use crate::args::{get_object_arg, get_string_arg};
use crate::envelope::ToolResult;
use crate::error::{McpError, Result};
use crate::schema;
use crate::tools::{run, ToolContext, ToolDef};

/// Get all authentication tool definitions.
pub fn tools() -> Vec<ToolDef> {
    let key_schema = serde_json::json!({
        "type": "object",
        "description": "The key definition",
        "properties": {
            "name": {"type": "string", "description": "Name of this key"},
            "allowed_indexes": {
                "type": "array",
                "items": {"type": "string"},
                "description": "Array of index names this key can access"
            },
            "permissions": {
                "type": "integer",
                "enum": [1, 15, 63],
                "description": "Permission level: 1=read, 15=ingest, 63=admin"
            },
            "status": {
                "type": "string",
                "enum": ["active", "inactive"],
                "description": "Key status"
            },
            "organization_id": {"type": "number", "description": "Organization ID (optional)"},
            "organization_name": {"type": "string", "description": "Organization name (optional)"},
            "application_id": {"type": "number", "description": "Application ID (optional)"},
            "application_name": {"type": "string", "description": "Application name (optional)"},
            "federation_name": {
                "type": "string",
                "description": "Federation name (optional, only for read keys associated with a federation)"
            }
        },
        "required": ["name", "allowed_indexes", "permissions", "status"]
    });

    vec![
        ToolDef::new(
            "create_key",
            "Create a new authentication key with the specified permissions and index access.",
            serde_json::json!({
                "type": "object",
                "properties": { "key_data": key_schema },
                "required": ["key_data"]
            }),
        ),
        ToolDef::new(
            "update_key",
            "Update the details of an existing authentication key.",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "key": {"type": "string", "description": "The key value to update"},
                    "key_data": key_schema
                },
                "required": ["key", "key_data"]
            }),
        ),
        ToolDef::new(
            "delete_key",
            "Delete a specific authentication key.",
            schema!(object {
                required: { "key": string }
            }),
        ),
        ToolDef::new(
            "delete_all_keys",
            "Delete all authentication keys on the Searchcraft instance. This cannot be undone.",
            schema!(object {}),
        ),
        ToolDef::new(
            "list_all_keys",
            "Get a list of all authentication keys on the Searchcraft instance.",
            schema!(object {}),
        ),
        ToolDef::new(
            "get_key_details",
            "Get the details of a specific authentication key.",
            schema!(object {
                required: { "key": string }
            }),
        ),
        ToolDef::new(
            "get_application_keys",
            "Get all authentication keys associated with a specific application.",
            schema!(object {
                required: { "application_id": string }
            }),
        ),
        ToolDef::new(
            "get_federation_keys",
            "Get all authentication keys associated with a specific federation.",
            schema!(object {
                required: { "federation_name": string }
            }),
        ),
        ToolDef::new(
            "get_organization_keys",
            "Get all authentication keys associated with a specific organization.",
            schema!(object {
                required: { "organization_id": string }
            }),
        ),
    ]
}

/// Dispatch an authentication tool call.
pub async fn dispatch(
    ctx: &ToolContext,
    name: &str,
    args: Map<String, JsonValue>,
) -> Result<ToolResult> {
    match name {
        "create_key" => {
            let key_data = get_object_arg(&args, "key_data")?;
            let key_name = key_data
                .get("name")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();

            Ok(run("create key", async {
                let base = ctx.config.endpoint()?;
                let admin_key = ctx.config.admin_key()?;
                let payload = ctx
                    .client
                    .request(Method::POST, &format!("{}/auth/key", base), admin_key, Some(&key_data))
                    .await?;
                Ok(ToolResult::success("key-created", &[&key_name], &payload, "create key"))
            })
            .await)
        }

        "update_key" => {
            let key = get_string_arg(&args, "key")?;
            let key_data = get_object_arg(&args, "key_data")?;

            Ok(run("update key", async {
                let base = ctx.config.endpoint()?;
                let admin_key = ctx.config.admin_key()?;
                let payload = ctx
                    .client
                    .request(
                        Method::POST,
                        &format!("{}/auth/key/{}", base, key),
                        admin_key,
                        Some(&key_data),
                    )
                    .await?;
                Ok(ToolResult::success("key-updated", &[&key], &payload, "update key"))
            })
            .await)
        }

        "delete_key" => {
            let key = get_string_arg(&args, "key")?;

            Ok(run("delete key", async {
                let base = ctx.config.endpoint()?;
                let admin_key = ctx.config.admin_key()?;
                let payload = ctx
                    .client
                    .request(Method::DELETE, &format!("{}/auth/key/{}", base, key), admin_key, None)
                    .await?;
                Ok(ToolResult::success("key-deleted", &[&key], &payload, "delete key"))
            })
            .await)
        }

        "delete_all_keys" => Ok(run("delete all keys", async {
            let base = ctx.config.endpoint()?;
            let admin_key = ctx.config.admin_key()?;
            let payload = ctx
                .client
                .request(Method::DELETE, &format!("{}/auth/key", base), admin_key, None)
                .await?;
            Ok(ToolResult::success("all-keys-deleted", &[], &payload, "delete all keys"))
        })
        .await),

        "list_all_keys" => Ok(run("list all keys", async {
            let base = ctx.config.endpoint()?;
            let admin_key = ctx.config.admin_key()?;
            let payload = ctx
                .client
                .request(Method::GET, &format!("{}/auth/key", base), admin_key, None)
                .await?;
            Ok(ToolResult::success("all-keys", &[], &payload, "list all keys"))
        })
        .await),

        "get_key_details" => {
            let key = get_string_arg(&args, "key")?;

            Ok(run("get key details", async {
                let base = ctx.config.endpoint()?;
                let admin_key = ctx.config.admin_key()?;
                let payload = ctx
                    .client
                    .request(Method::GET, &format!("{}/auth/key/{}", base, key), admin_key, None)
                    .await?;
                Ok(ToolResult::success("key-details", &[&key], &payload, "get key details"))
            })
            .await)
        }

        "get_application_keys" => {
            let application_id = get_string_arg(&args, "application_id")?;

            Ok(run("get application keys", async {
                let base = ctx.config.endpoint()?;
                let admin_key = ctx.config.admin_key()?;
                let payload = ctx
                    .client
                    .request(
                        Method::GET,
                        &format!("{}/auth/application/{}", base, application_id),
                        admin_key,
                        None,
                    )
                    .await?;
                Ok(ToolResult::success(
                    "application-keys",
                    &[&application_id],
                    &payload,
                    "get application keys",
                ))
            })
            .await)
        }

        "get_federation_keys" => {
            let federation_name = get_string_arg(&args, "federation_name")?;

            Ok(run("get federation keys", async {
                let base = ctx.config.endpoint()?;
                let admin_key = ctx.config.admin_key()?;
                let payload = ctx
                    .client
                    .request(
                        Method::GET,
                        &format!("{}/auth/federation/{}", base, federation_name),
                        admin_key,
                        None,
                    )
                    .await?;
                Ok(ToolResult::success(
                    "federation-keys",
                    &[&federation_name],
                    &payload,
                    "get federation keys",
                ))
            })
            .await)
        }

        "get_organization_keys" => {
            let organization_id = get_string_arg(&args, "organization_id")?;

            Ok(run("get organization keys", async {
                let base = ctx.config.endpoint()?;
                let admin_key = ctx.config.admin_key()?;
                let payload = ctx
                    .client
                    .request(
                        Method::GET,
                        &format!("{}/auth/organization/{}", base, organization_id),
                        admin_key,
                        None,
                    )
                    .await?;
                Ok(ToolResult::success(
                    "organization-keys",
                    &[&organization_id],
                    &payload,
                    "get organization keys",
                ))
            })
            .await)
        }

        _ => Err(McpError::UnknownTool(name.to_string())),
    }
}
