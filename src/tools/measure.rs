//! Usage measurement dashboard tools.
//!
//! Tools: get_measure_summary, get_measure_conversion
//!
//! Both read the `/measure/dashboard` surface with the admin key; the
//! optional `query_params` object is URL-encoded into the query string.

use reqwest::Method;
use serde_json::{Map, Value as JsonValue};
use url::form_urlencoded;

use crate::args::get_optional_object;
use crate::envelope::ToolResult;
use crate::error::{McpError, Result};
use crate::tools::{run, ToolContext, ToolDef};

fn measure_params_schema() -> JsonValue {
    serde_json::json!({
        "type": "object",
        "properties": {
            "query_params": {
                "type": "object",
                "description": "Query parameters for filtering and pagination",
                "properties": {
                    "organization_id": {"type": "string", "description": "Organization ID to filter by"},
                    "application_id": {"type": "string", "description": "Application ID to filter by"},
                    "index_names": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "An array of index names to filter by"
                    },
                    "user_id": {"type": "string", "description": "User ID to filter by"},
                    "session_id": {"type": "string", "description": "Session ID to filter by"},
                    "event_name": {"type": "string", "description": "Event name to filter by"},
                    "date_start": {"type": "integer", "description": "Start date as Unix timestamp"},
                    "date_end": {"type": "integer", "description": "End date as Unix timestamp"},
                    "granularity": {
                        "type": "string",
                        "enum": ["minutes", "hours", "days", "weeks", "months", "years"],
                        "description": "Time granularity for aggregating results"
                    },
                    "rpp": {"type": "integer", "description": "Results per page (pagination)"},
                    "page": {"type": "integer", "description": "Page number (pagination)"}
                },
                "required": ["organization_id"]
            }
        },
        "required": []
    })
}

/// Get all measurement tool definitions.
pub fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new(
            "get_measure_summary",
            "Get measurement summary data with optional filtering and aggregation parameters.",
            measure_params_schema(),
        ),
        ToolDef::new(
            "get_measure_conversion",
            "Get measurement conversion data with optional filtering and aggregation parameters.",
            measure_params_schema(),
        ),
    ]
}

/// Render one query-string value. Arrays join their elements with `|`,
/// everything else uses its plain string form.
fn param_value(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Array(items) => items
            .iter()
            .map(|item| match item {
                JsonValue::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join("|"),
        other => other.to_string(),
    }
}

/// Append `query_params` entries to the endpoint, skipping null values.
fn with_query_string(endpoint: String, params: Option<&Map<String, JsonValue>>) -> String {
    let params = match params {
        Some(p) if !p.is_empty() => p,
        _ => return endpoint,
    };

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        if value.is_null() {
            continue;
        }
        serializer.append_pair(key, &param_value(value));
    }
    format!("{}?{}", endpoint, serializer.finish())
}

/// Dispatch a measurement tool call.
pub async fn dispatch(
    ctx: &ToolContext,
    name: &str,
    args: Map<String, JsonValue>,
) -> Result<ToolResult> {
    let (path, kind, operation) = match name {
        "get_measure_summary" => ("summary", "measure-summary", "get measure summary"),
        "get_measure_conversion" => ("conversion", "measure-conversion", "get measure conversion"),
        _ => return Err(McpError::UnknownTool(name.to_string())),
    };

    let query_params = get_optional_object(&args, "query_params")?;

    Ok(run(operation, async {
        let base = ctx.config.endpoint()?;
        let admin_key = ctx.config.admin_key()?;

        let endpoint = with_query_string(
            format!("{}/measure/dashboard/{}", base, path),
            query_params.as_ref(),
        );

        let payload = ctx.client.request(Method::GET, &endpoint, admin_key, None).await?;
        Ok(ToolResult::success(kind, &[], &payload, operation))
    })
    .await)
}
