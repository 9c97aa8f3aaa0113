//! Document ingestion and lookup tools.
//!
//! Tools: add_documents, get_document_by_id, delete_document_by_id,
//!        delete_documents_by_field, delete_documents_by_query
//!
//! All calls use the ingest key. `add_documents` issues two sequential
//! requests: the ingestion itself and an explicit commit against the sibling
//! endpoint, with the same payload on both and no rollback on partial
//! failure. Only the commit's result is surfaced.

use reqwest::Method;
use serde_json::{Map, Value as JsonValue};

use crate::args::{get_array_arg, get_object_arg, get_string_arg};
use crate::envelope::ToolResult;
use crate::error::{McpError, Result};
use crate::schema;
use crate::tools::{run, ToolContext, ToolDef};

/// Get all document tool definitions.
pub fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new(
            "add_documents",
            "Add one or multiple documents to an index. Documents should be provided as an array \
             of JSON objects. Each document should have the schema specified by the corresponding \
             index's schema.",
            schema!(object {
                required: { "index_name": string, "documents": array_object }
            }),
        ),
        ToolDef::new(
            "get_document_by_id",
            "Get a single document from an index by its internal document id.",
            schema!(object {
                required: { "index_name": string, "document_id": string }
            }),
        ),
        ToolDef::new(
            "delete_document_by_id",
            "Delete a single document from an index by its internal document id.",
            schema!(object {
                required: { "index_name": string, "document_id": string }
            }),
        ),
        ToolDef::new(
            "delete_documents_by_field",
            "Delete documents from an index that match the given field values \
             (e.g., {id: '12345'} or {title: 'example'}).",
            schema!(object {
                required: { "index_name": string, "field_match": object }
            }),
        ),
        ToolDef::new(
            "delete_documents_by_query",
            "Delete documents from an index that match the given query criteria.",
            schema!(object {
                required: { "index_name": string, "query": object }
            }),
        ),
    ]
}

/// Dispatch a document tool call.
pub async fn dispatch(
    ctx: &ToolContext,
    name: &str,
    args: Map<String, JsonValue>,
) -> Result<ToolResult> {
    match name {
        "add_documents" => {
            let index_name = get_string_arg(&args, "index_name")?;
            let documents = JsonValue::Array(get_array_arg(&args, "documents")?);

            Ok(run("add documents", async {
                let base = ctx.config.endpoint()?;
                let ingest_key = ctx.config.ingest_key()?;

                ctx.client
                    .request(
                        Method::POST,
                        &format!("{}/index/{}/documents", base, index_name),
                        ingest_key,
                        Some(&documents),
                    )
                    .await?;

                // The service buffers ingested documents until an explicit
                // commit. The upstream API accepts the same payload on the
                // commit call; only the commit result is relayed.
                let commit = ctx
                    .client
                    .request(
                        Method::POST,
                        &format!("{}/index/{}/commit", base, index_name),
                        ingest_key,
                        Some(&documents),
                    )
                    .await?;

                Ok(ToolResult::success(
                    "documents-added",
                    &[&index_name],
                    &commit,
                    "add documents",
                ))
            })
            .await)
        }

        "get_document_by_id" => {
            let index_name = get_string_arg(&args, "index_name")?;
            let document_id = get_string_arg(&args, "document_id")?;

            Ok(run("get document", async {
                let base = ctx.config.endpoint()?;
                let ingest_key = ctx.config.ingest_key()?;
                let payload = ctx
                    .client
                    .request(
                        Method::GET,
                        &format!("{}/index/{}/documents/{}", base, index_name, document_id),
                        ingest_key,
                        None,
                    )
                    .await?;
                Ok(ToolResult::success(
                    "document",
                    &[&index_name, &document_id],
                    &payload,
                    "get document",
                ))
            })
            .await)
        }

        "delete_document_by_id" => {
            let index_name = get_string_arg(&args, "index_name")?;
            let document_id = get_string_arg(&args, "document_id")?;

            Ok(run("delete document", async {
                let base = ctx.config.endpoint()?;
                let ingest_key = ctx.config.ingest_key()?;
                let payload = ctx
                    .client
                    .request(
                        Method::DELETE,
                        &format!("{}/index/{}/documents/{}", base, index_name, document_id),
                        ingest_key,
                        None,
                    )
                    .await?;
                Ok(ToolResult::success(
                    "document-deleted",
                    &[&index_name, &document_id],
                    &payload,
                    "delete document",
                ))
            })
            .await)
        }

        "delete_documents_by_field" => {
            let index_name = get_string_arg(&args, "index_name")?;
            let field_match = get_object_arg(&args, "field_match")?;

            Ok(run("delete documents by field", async {
                let base = ctx.config.endpoint()?;
                let ingest_key = ctx.config.ingest_key()?;
                let payload = ctx
                    .client
                    .request(
                        Method::DELETE,
                        &format!("{}/index/{}/documents", base, index_name),
                        ingest_key,
                        Some(&field_match),
                    )
                    .await?;
                Ok(ToolResult::success(
                    "documents-deleted-by-field",
                    &[&index_name],
                    &payload,
                    "delete documents by field",
                ))
            })
            .await)
        }

        "delete_documents_by_query" => {
            let index_name = get_string_arg(&args, "index_name")?;
            let query = get_object_arg(&args, "query")?;

            Ok(run("delete documents by query", async {
                let base = ctx.config.endpoint()?;
                let ingest_key = ctx.config.ingest_key()?;
                let payload = ctx
                    .client
                    .request(
                        Method::DELETE,
                        &format!("{}/index/{}/documents/query", base, index_name),
                        ingest_key,
                        Some(&query),
                    )
                    .await?;
                Ok(ToolResult::success(
                    "documents-deleted-by-query",
                    &[&index_name],
                    &payload,
                    "delete documents by query",
                ))
            })
            .await)
        }

        _ => Err(McpError::UnknownTool(name.to_string())),
    }
}
