//! Full-text search tools.
//!
//! Tools: get_search_results, get-preliminary-search-data,
//!        get_search_index_schema
//!
//! `get_search_results` is the one structurally different operation: the
//! read key comes from the caller, the target resolves from configuration
//! (federation wins over index), the body is built by the query builder,
//! and only the `hits` array of the response is relayed.
//!
//! The two schema-preview tools are aliases sharing one handler, kept for
//! compatibility with clients configured against either name. One of them
//! is kebab-cased; that spelling is part of the public surface.

use serde_json::{Map, Value as JsonValue};

use crate::args::get_optional_string;
use crate::envelope::{ContentBlock, ToolResult};
use crate::error::{McpError, Result, ToolError};
use crate::query::{build_search_query, SearchClause, SearchCriteria, SearchQuery};
use crate::schema;
use crate::tools::{run, ToolContext, ToolDef};

const NO_FACETS_NOTE: &str = "There are no facet types associated with this index. \
    Do not include facetFilters with your search.";

const PRELIM_DONE_NOTE: &str = "The preliminary search data has been retrieved. This data \
    represents schema fields and facets for constructing search queries. You can now begin \
    querying for search results.";

const PRELIM_DESCRIPTION: &str = "Gets the schema fields and facet information for the search \
    index in order to understand available fields and facet information for constructing a \
    search query.";

/// Get all search tool definitions.
pub fn tools() -> Vec<ToolDef> {
    let date_range_filters = serde_json::json!({
        "type": "array",
        "description": "The schema field date ranges to use to filter the search results by. \
            Only schema fields of type datetime can have date filters applied to them.",
        "items": {
            "type": "object",
            "properties": {
                "schemaFieldName": {
                    "type": "string",
                    "description": "The schema field to use for filtering the search results by. \
                        Must be one of the type: datetime schema fields defined in the index."
                },
                "startDate": {
                    "type": "string",
                    "description": "The starting date to include search results. This is a date string."
                },
                "endDate": {
                    "type": "string",
                    "description": "The ending date to include search results from. This is a date string."
                }
            },
            "required": ["schemaFieldName", "startDate", "endDate"]
        }
    });

    let facet_filters = serde_json::json!({
        "type": "array",
        "description": "Represents a collection of groupings of facet paths that search results \
            should be returned from. Each grouping corresponds to a schema field of type: facet.",
        "items": {
            "type": "object",
            "properties": {
                "schemaFieldName": {
                    "type": "string",
                    "description": "The schema field to use for filtering by facet. Must be one \
                        of the type: facet schema fields defined in the index."
                },
                "facetPaths": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "The individual facet paths to include. Path strings must \
                        include a beginning / value. Example: /sports"
                }
            },
            "required": ["schemaFieldName", "facetPaths"]
        }
    });

    vec![
        ToolDef::new(
            "get_search_results",
            "Performs a search query using the Searchcraft API with support for fuzzy/exact \
             matching, facets, and date ranges.",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "fuzzyKeywordsThatCanOptionallyAppear": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "A list of keywords that are fuzzy-matched against \
                            document data. A document is considered to be a match when ANY of \
                            these values are found in the document."
                    },
                    "fuzzyKeywordsThatMustAppear": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "A list of keywords that are fuzzy-matched against \
                            document data. A document is considered to be a match only when ALL \
                            of these values are found in the document."
                    },
                    "exactSearchTermsThatCanOptionallyAppear": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "A list of exact search terms or phrases to search for in \
                            document data. A document is considered to be a match when ANY of \
                            these values are found in the document."
                    },
                    "exactSearchTermsThatMustAppear": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "A list of exact search terms or phrases to search for in \
                            document data. A document is considered to be a match only when ALL \
                            of these values are found in the document."
                    },
                    "dateRangeFilters": date_range_filters,
                    "facetFilters": facet_filters,
                    "index": {
                        "type": "string",
                        "description": "The name of the index to get search data on."
                    },
                    "readKey": {
                        "type": "string",
                        "description": "A read key for this index."
                    }
                },
                "required": [
                    "fuzzyKeywordsThatCanOptionallyAppear",
                    "fuzzyKeywordsThatMustAppear",
                    "exactSearchTermsThatCanOptionallyAppear",
                    "exactSearchTermsThatMustAppear",
                    "index",
                    "readKey"
                ]
            }),
        ),
        ToolDef::new("get-preliminary-search-data", PRELIM_DESCRIPTION, schema!(object {})),
        ToolDef::new("get_search_index_schema", PRELIM_DESCRIPTION, schema!(object {})),
    ]
}

/// Dispatch a search tool call.
pub async fn dispatch(
    ctx: &ToolContext,
    name: &str,
    args: Map<String, JsonValue>,
) -> Result<ToolResult> {
    match name {
        "get_search_results" => get_search_results(ctx, args).await,
        "get-preliminary-search-data" | "get_search_index_schema" => {
            Ok(run("get preliminary search data", preliminary_search_data(ctx)).await)
        }
        _ => Err(McpError::UnknownTool(name.to_string())),
    }
}

async fn get_search_results(ctx: &ToolContext, args: Map<String, JsonValue>) -> Result<ToolResult> {
    let read_key = get_optional_string(&args, "readKey").filter(|k| !k.is_empty());
    let index = get_optional_string(&args, "index").filter(|i| !i.is_empty());

    let criteria: SearchCriteria =
        serde_json::from_value(JsonValue::Object(args)).map_err(|e| McpError::InvalidArg {
            name: "search criteria".to_string(),
            reason: e.to_string(),
        })?;

    let base = match ctx.config.endpoint() {
        Ok(base) => base.to_string(),
        Err(err) => return Ok(ToolResult::error(err)),
    };

    let read_key = match read_key {
        Some(key) => key,
        None => return Ok(ToolResult::error(ToolError::MissingConfig("READ_KEY"))),
    };

    // Federation takes precedence over a caller-supplied index.
    let endpoint = if let Some(federation) = ctx.config.federation_name.as_deref() {
        format!("{}/federation/{}/search", base, federation)
    } else if let Some(index) = index {
        format!("{}/index/{}/search", base, index)
    } else {
        return Ok(ToolResult::error(
            "Either FEDERATION_NAME or INDEX_NAME environment variable must be set",
        ));
    };

    let query = build_search_query(&criteria, ctx.config.result_limit);

    match ctx.client.search(&endpoint, &read_key, &query).await {
        Ok(response) => {
            let hits = serde_json::to_string(&response.data.hits)
                .unwrap_or_else(|_| "[]".to_string());
            Ok(ToolResult::new(vec![ContentBlock::resource(
                "search-results",
                &[],
                hits,
            )]))
        }
        Err(err) => Ok(ToolResult {
            content: vec![ContentBlock::text(format!(
                "❌ Searchcraft search failed: {}",
                err
            ))],
            is_error: Some(true),
        }),
    }
}

/// Fetch the index schema and probe top-level facets with a match-all query.
async fn preliminary_search_data(ctx: &ToolContext) -> std::result::Result<ToolResult, ToolError> {
    let base = ctx.config.endpoint()?.to_string();
    let read_key = ctx.config.read_key()?;
    let index = ctx.config.index_name()?;
    let ingest_key = ctx.config.ingest_key.clone().unwrap_or_default();

    // Relayed verbatim; the schema shape is the service's business.
    let schema_text = ctx
        .client
        .get_text(&format!("{}/index/{}", base, index), Some(&ingest_key))
        .await?;

    let probe = SearchQuery::new(vec![SearchClause::exact(None, "*")], Some(1));
    let response = ctx
        .client
        .search(&format!("{}/index/{}/search", base, index), read_key, &probe)
        .await?;

    let mut content = vec![ContentBlock::resource("schema-fields", &[], schema_text)];

    match response.data.facets {
        Some(facets) if !facets.is_null() => {
            let text = serde_json::to_string(&facets).unwrap_or_else(|_| "[]".to_string());
            content.push(ContentBlock::resource("facets", &[], text));
        }
        _ => content.push(ContentBlock::text(NO_FACETS_NOTE)),
    }

    content.push(ContentBlock::text(PRELIM_DONE_NOTE));

    Ok(ToolResult::new(content))
}
