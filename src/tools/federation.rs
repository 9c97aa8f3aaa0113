//! Federation management tools.
//!
//! Tools: create_federation, update_federation, delete_federation,
//!        list_all_federations, get_federation_details, get_federation_stats,
//!        get_organization_federations
//!
//! A federation groups multiple indexes into one logical search target.
//! All calls use the admin key.

use reqwest::Method;
use serde_json::{Map, Value as JsonValue};

use crate::args::{get_object_arg, get_string_arg};
use crate::envelope::ToolResult;
use crate::error::{McpError, Result};
use crate::schema;
use crate::tools::{run, ToolContext, ToolDef};

/// Get all federation tool definitions.
pub fn tools() -> Vec<ToolDef> {
    let federation_schema = serde_json::json!({
        "type": "object",
        "description": "The federation definition",
        "properties": {
            "name": {"type": "string", "description": "Name of the federation"},
            "friendly_name": {"type": "string", "description": "Human readable federation name"},
            "index_names": {
                "type": "array",
                "items": {"type": "string"},
                "description": "Names of the indexes grouped by this federation"
            },
            "organization_id": {"type": "number", "description": "Owning organization ID"}
        },
        "required": ["name", "index_names"]
    });

    vec![
        ToolDef::new(
            "create_federation",
            "Create a new federation grouping one or more indexes into a single search target.",
            serde_json::json!({
                "type": "object",
                "properties": { "federation_data": federation_schema.clone() },
                "required": ["federation_data"]
            }),
        ),
        ToolDef::new(
            "update_federation",
            "Replace the definition of an existing federation.",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "federation_name": {"type": "string", "description": "The name of the federation to update"},
                    "federation_data": federation_schema
                },
                "required": ["federation_name", "federation_data"]
            }),
        ),
        ToolDef::new(
            "delete_federation",
            "Delete a federation. The underlying indexes are not affected.",
            schema!(object {
                required: { "federation_name": string }
            }),
        ),
        ToolDef::new(
            "list_all_federations",
            "Get a list of all federations in the Searchcraft instance.",
            schema!(object {}),
        ),
        ToolDef::new(
            "get_federation_details",
            "Get the details of a specific federation.",
            schema!(object {
                required: { "federation_name": string }
            }),
        ),
        ToolDef::new(
            "get_federation_stats",
            "Get statistics for a specific federation.",
            schema!(object {
                required: { "federation_name": string }
            }),
        ),
        ToolDef::new(
            "get_organization_federations",
            "Get all federations belonging to a specific organization.",
            schema!(object {
                required: { "organization_id": string }
            }),
        ),
    ]
}

/// Dispatch a federation tool call.
pub async fn dispatch(
    ctx: &ToolContext,
    name: &str,
    args: Map<String, JsonValue>,
) -> Result<ToolResult> {
    match name {
        "create_federation" => {
            let federation_data = get_object_arg(&args, "federation_data")?;
            let federation_name = federation_data
                .get("name")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();

            Ok(run("create federation", async {
                let base = ctx.config.endpoint()?;
                let admin_key = ctx.config.admin_key()?;
                let payload = ctx
                    .client
                    .request(
                        Method::POST,
                        &format!("{}/federation", base),
                        admin_key,
                        Some(&federation_data),
                    )
                    .await?;
                Ok(ToolResult::success(
                    "federation-created",
                    &[&federation_name],
                    &payload,
                    "create federation",
                ))
            })
            .await)
        }

        "update_federation" => {
            let federation_name = get_string_arg(&args, "federation_name")?;
            let federation_data = get_object_arg(&args, "federation_data")?;

            Ok(run("update federation", async {
                let base = ctx.config.endpoint()?;
                let admin_key = ctx.config.admin_key()?;
                let payload = ctx
                    .client
                    .request(
                        Method::PUT,
                        &format!("{}/federation/{}", base, federation_name),
                        admin_key,
                        Some(&federation_data),
                    )
                    .await?;
                Ok(ToolResult::success(
                    "federation-updated",
                    &[&federation_name],
                    &payload,
                    "update federation",
                ))
            })
            .await)
        }

        "delete_federation" => {
            let federation_name = get_string_arg(&args, "federation_name")?;

            Ok(run("delete federation", async {
                let base = ctx.config.endpoint()?;
                let admin_key = ctx.config.admin_key()?;
                let payload = ctx
                    .client
                    .request(
                        Method::DELETE,
                        &format!("{}/federation/{}", base, federation_name),
                        admin_key,
                        None,
                    )
                    .await?;
                Ok(ToolResult::success(
                    "federation-deleted",
                    &[&federation_name],
                    &payload,
                    "delete federation",
                ))
            })
            .await)
        }

        "list_all_federations" => Ok(run("list federations", async {
            let base = ctx.config.endpoint()?;
            let admin_key = ctx.config.admin_key()?;
            let payload = ctx
                .client
                .request(Method::GET, &format!("{}/federation", base), admin_key, None)
                .await?;
            Ok(ToolResult::success("federations", &[], &payload, "list federations"))
        })
        .await),

        "get_federation_details" => {
            let federation_name = get_string_arg(&args, "federation_name")?;

            Ok(run("get federation details", async {
                let base = ctx.config.endpoint()?;
                let admin_key = ctx.config.admin_key()?;
                let payload = ctx
                    .client
                    .request(
                        Method::GET,
                        &format!("{}/federation/{}", base, federation_name),
                        admin_key,
                        None,
                    )
                    .await?;
                Ok(ToolResult::success(
                    "federation-details",
                    &[&federation_name],
                    &payload,
                    "get federation details",
                ))
            })
            .await)
        }

        "get_federation_stats" => {
            let federation_name = get_string_arg(&args, "federation_name")?;

            Ok(run("get federation stats", async {
                let base = ctx.config.endpoint()?;
                let admin_key = ctx.config.admin_key()?;
                let payload = ctx
                    .client
                    .request(
                        Method::GET,
                        &format!("{}/federation/{}/stats", base, federation_name),
                        admin_key,
                        None,
                    )
                    .await?;
                Ok(ToolResult::success(
                    "federation-stats",
                    &[&federation_name],
                    &payload,
                    "get federation stats",
                ))
            })
            .await)
        }

        "get_organization_federations" => {
            let organization_id = get_string_arg(&args, "organization_id")?;

            Ok(run("get organization federations", async {
                let base = ctx.config.endpoint()?;
                let admin_key = ctx.config.admin_key()?;
                let payload = ctx
                    .client
                    .request(
                        Method::GET,
                        &format!("{}/federation/organization/{}", base, organization_id),
                        admin_key,
                        None,
                    )
                    .await?;
                Ok(ToolResult::success(
                    "organization-federations",
                    &[&organization_id],
                    &payload,
                    "get organization federations",
                ))
            })
            .await)
        }

        _ => Err(McpError::UnknownTool(name.to_string())),
    }
}
