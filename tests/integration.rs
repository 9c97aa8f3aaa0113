//! Integration tests for the MCP server.
//!
//! Outbound Searchcraft calls are mocked with wiremock; every test drives a
//! tool through the registry exactly as the JSON-RPC layer would.

use serde_json::{json, Map, Value as JsonValue};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use searchcraft_mcp::{Config, ToolContext, ToolRegistry};

/// Create a tool context pointing at the given mock server, with all three
/// credential tiers configured.
fn test_context(endpoint: &str) -> ToolContext {
    ToolContext::new(Config {
        endpoint_url: Some(endpoint.to_string()),
        admin_key: Some("admin-key".to_string()),
        ingest_key: Some("ingest-key".to_string()),
        read_key: Some("read-key".to_string()),
        ..Config::default()
    })
}

/// Dispatch a tool call and return the serialized tool result.
async fn call_tool(ctx: &ToolContext, name: &str, args: JsonValue) -> JsonValue {
    let args_map: Map<String, JsonValue> = match args {
        JsonValue::Object(m) => m,
        _ => Map::new(),
    };
    let registry = ToolRegistry::new();
    let result = registry
        .dispatch(ctx, name, args_map)
        .await
        .unwrap_or_else(|e| panic!("Tool {} failed at the protocol level: {}", name, e));
    serde_json::to_value(&result).expect("tool result should serialize")
}

fn first_text(result: &JsonValue) -> &str {
    result["content"][0]["text"].as_str().expect("text block")
}

fn first_resource(result: &JsonValue) -> &JsonValue {
    &result["content"][0]["resource"]
}

fn is_error(result: &JsonValue) -> bool {
    result.get("isError").and_then(|v| v.as_bool()).unwrap_or(false)
}

// =============================================================================
// Registry
// =============================================================================

#[tokio::test]
async fn test_registry_lists_all_tools() {
    let registry = ToolRegistry::new();
    let names: Vec<&str> = registry.tools().iter().map(|t| t.name.as_str()).collect();

    assert_eq!(names.len(), 43);
    for expected in [
        "create_index",
        "add_documents",
        "create_key",
        "create_federation",
        "add_stopwords",
        "add_synonyms",
        "get_measure_summary",
        "get_search_results",
        // The original server published this alias kebab-cased.
        "get-preliminary-search-data",
        "get_search_index_schema",
        "delete_document_by_id",
        "get_searchcraft_status",
    ] {
        assert!(names.contains(&expected), "missing tool {}", expected);
    }

    // Names are unique
    let mut deduped = names.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), names.len());
}

#[tokio::test]
async fn test_every_listed_tool_dispatches() {
    // A context with no configuration: every tool must still resolve to a
    // handler (missing config is an envelope error, never UnknownTool).
    let ctx = ToolContext::new(Config::default());
    let registry = ToolRegistry::new();

    for tool in registry.tools() {
        let result = registry.dispatch(&ctx, &tool.name, Map::new()).await;
        match result {
            Ok(_) => {}
            Err(searchcraft_mcp::McpError::UnknownTool(name)) => {
                panic!("listed tool {} is not routed", name)
            }
            // Missing required arguments are fine here.
            Err(_) => {}
        }
    }
}

#[tokio::test]
async fn test_unknown_tool_is_protocol_error() {
    let ctx = ToolContext::new(Config::default());
    let registry = ToolRegistry::new();
    let err = registry
        .dispatch(&ctx, "no_such_tool", Map::new())
        .await
        .expect_err("unknown tool should not dispatch");
    assert!(matches!(err, searchcraft_mcp::McpError::UnknownTool(_)));
}

// =============================================================================
// Configuration preconditions
// =============================================================================

#[tokio::test]
async fn test_missing_admin_key_makes_no_http_call() {
    let server = MockServer::start().await;
    let ctx = ToolContext::new(Config {
        endpoint_url: Some(server.uri()),
        ..Config::default()
    });

    let result = call_tool(&ctx, "list_all_keys", json!({})).await;
    assert!(is_error(&result));
    assert!(first_text(&result).contains("ADMIN_KEY"));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty(), "no outbound call may be attempted");
}

#[tokio::test]
async fn test_missing_endpoint_url_named_in_error() {
    let ctx = ToolContext::new(Config::default());

    let result = call_tool(&ctx, "delete_index", json!({"index_name": "movies"})).await;
    assert!(is_error(&result));
    assert_eq!(
        first_text(&result),
        "❌ Error: ENDPOINT_URL environment variable is required"
    );
}

#[tokio::test]
async fn test_missing_ingest_key_named_for_document_tools() {
    let ctx = ToolContext::new(Config {
        endpoint_url: Some("http://localhost:1".to_string()),
        admin_key: Some("admin-key".to_string()),
        ..Config::default()
    });

    let result = call_tool(
        &ctx,
        "get_document_by_id",
        json!({"index_name": "movies", "document_id": "42"}),
    )
    .await;
    assert!(is_error(&result));
    assert!(first_text(&result).contains("INGEST_KEY"));
}

// =============================================================================
// Envelope mapping
// =============================================================================

#[tokio::test]
async fn test_success_envelope_shape_for_get_key_details() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/key/abc"))
        .and(header("Authorization", "admin-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "abc"})))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = test_context(&server.uri());
    let result = call_tool(&ctx, "get_key_details", json!({"key": "abc"})).await;

    assert!(!is_error(&result));
    let blocks = result["content"].as_array().unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0]["type"], "resource");

    let resource = first_resource(&result);
    assert_eq!(resource["mimeType"], "application/json");
    assert!(resource["uri"]
        .as_str()
        .unwrap()
        .starts_with("searchcraft://key-details/abc/"));
    assert_eq!(
        resource["text"].as_str().unwrap(),
        serde_json::to_string_pretty(&json!({"id": "abc"})).unwrap()
    );
}

#[tokio::test]
async fn test_http_failure_maps_to_error_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/key/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let ctx = test_context(&server.uri());
    let result = call_tool(&ctx, "get_key_details", json!({"key": "missing"})).await;

    assert!(is_error(&result));
    let text = first_text(&result);
    assert!(text.contains("Failed to get key details"), "got: {}", text);
    assert!(text.contains("not found"), "got: {}", text);
    assert!(text.contains("404"), "got: {}", text);
}

#[tokio::test]
async fn test_empty_body_substitutes_confirmation_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/index/movies"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let ctx = test_context(&server.uri());
    let result = call_tool(&ctx, "delete_index", json!({"index_name": "movies"})).await;

    assert!(!is_error(&result));
    let payload: JsonValue =
        serde_json::from_str(first_resource(&result)["text"].as_str().unwrap()).unwrap();
    assert_eq!(payload["message"], "delete index completed successfully");
}

#[tokio::test]
async fn test_malformed_json_body_is_not_swallowed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/index"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let ctx = test_context(&server.uri());
    let result = call_tool(&ctx, "list_all_indexes", json!({})).await;

    assert!(is_error(&result));
    assert!(first_text(&result).contains("malformed response body"));
}

#[tokio::test]
async fn test_transport_failure_maps_to_error_envelope() {
    // Nothing listens on this port.
    let ctx = test_context("http://127.0.0.1:9");

    let result = call_tool(&ctx, "list_all_indexes", json!({})).await;
    assert!(is_error(&result));
    assert!(first_text(&result).starts_with("❌ Error: Failed to list indexes:"));
}

#[tokio::test]
async fn test_repeated_read_yields_equal_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/index"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"name": "movies"}, {"name": "shows"}])),
        )
        .mount(&server)
        .await;

    let ctx = test_context(&server.uri());
    let first = call_tool(&ctx, "list_all_indexes", json!({})).await;
    let second = call_tool(&ctx, "list_all_indexes", json!({})).await;

    // Payload-equal; only the timestamped uri may differ.
    assert_eq!(
        first_resource(&first)["text"],
        first_resource(&second)["text"]
    );
}

// =============================================================================
// Document ingestion
// =============================================================================

#[tokio::test]
async fn test_add_documents_posts_then_commits() {
    let server = MockServer::start().await;
    let documents = json!([{"title": "Alien"}, {"title": "Arrival"}]);

    Mock::given(method("POST"))
        .and(path("/index/movies/documents"))
        .and(header("Authorization", "ingest-key"))
        .and(body_json(&documents))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accepted": 2})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/index/movies/commit"))
        .and(body_json(&documents))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"committed": true})))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = test_context(&server.uri());
    let result = call_tool(
        &ctx,
        "add_documents",
        json!({"index_name": "movies", "documents": documents}),
    )
    .await;

    assert!(!is_error(&result));
    let resource = first_resource(&result);
    assert!(resource["uri"]
        .as_str()
        .unwrap()
        .starts_with("searchcraft://documents-added/movies/"));

    // Only the commit result is surfaced.
    let payload: JsonValue = serde_json::from_str(resource["text"].as_str().unwrap()).unwrap();
    assert_eq!(payload, json!({"committed": true}));
}

#[tokio::test]
async fn test_add_documents_commit_failure_surfaces_as_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/index/movies/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accepted": 1})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/index/movies/commit"))
        .respond_with(ResponseTemplate::new(500).set_body_string("commit failed"))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = test_context(&server.uri());
    let result = call_tool(
        &ctx,
        "add_documents",
        json!({"index_name": "movies", "documents": [{"title": "Alien"}]}),
    )
    .await;

    // The add step succeeded server-side, but the overall operation must
    // still report failure.
    assert!(is_error(&result));
    let text = first_text(&result);
    assert!(text.contains("Failed to add documents"), "got: {}", text);
    assert!(text.contains("commit failed"), "got: {}", text);
}

#[tokio::test]
async fn test_delete_document_by_id_uses_singular_tool_name() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/index/movies/documents/42"))
        .and(header("Authorization", "ingest-key"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = test_context(&server.uri());
    let result = call_tool(
        &ctx,
        "delete_document_by_id",
        json!({"index_name": "movies", "document_id": "42"}),
    )
    .await;

    assert!(!is_error(&result));
    assert!(first_resource(&result)["uri"]
        .as_str()
        .unwrap()
        .starts_with("searchcraft://document-deleted/movies/42/"));
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_sends_built_query_and_relays_hits() {
    let server = MockServer::start().await;
    let expected_body = json!({
        "query": [
            {"occur": "should", "fuzzy": {"ctx": "alien"}},
            {"occur": "must", "exact": {"ctx": "sci-fi"}},
            {"occur": "must", "exact": {"ctx": "genre: IN [/scifi /horror]"}}
        ],
        "limit": 4
    });
    let hits = json!([{"doc": {"title": "Alien"}, "document_id": "1", "score": 1.5}]);

    Mock::given(method("POST"))
        .and(path("/index/movies/search"))
        .and(header("Authorization", "caller-read-key"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "data": {"hits": hits, "count": 1, "time_taken": 2}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = test_context(&server.uri());
    let result = call_tool(
        &ctx,
        "get_search_results",
        json!({
            "fuzzyKeywordsThatCanOptionallyAppear": ["alien"],
            "fuzzyKeywordsThatMustAppear": [],
            "exactSearchTermsThatCanOptionallyAppear": [],
            "exactSearchTermsThatMustAppear": ["sci-fi"],
            "facetFilters": [{"schemaFieldName": "genre", "facetPaths": ["/scifi", "/horror"]}],
            "index": "movies",
            "readKey": "caller-read-key"
        }),
    )
    .await;

    assert!(!is_error(&result));
    let resource = first_resource(&result);
    assert!(resource["uri"]
        .as_str()
        .unwrap()
        .starts_with("searchcraft://search-results/"));

    // Hits are relayed alone, compact.
    let payload: JsonValue = serde_json::from_str(resource["text"].as_str().unwrap()).unwrap();
    assert_eq!(payload, hits);
}

#[tokio::test]
async fn test_search_accepts_date_only_range_strings() {
    let server = MockServer::start().await;
    let expected_body = json!({
        "query": [
            {"occur": "must", "exact": {"ctx": "released:[2024-01-01T00:00:00.000Z TO 2024-12-31T00:00:00.000Z]"}}
        ],
        "limit": 4
    });

    Mock::given(method("POST"))
        .and(path("/index/movies/search"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "data": {"hits": [], "count": 0, "time_taken": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = test_context(&server.uri());
    let result = call_tool(
        &ctx,
        "get_search_results",
        json!({
            "fuzzyKeywordsThatCanOptionallyAppear": [],
            "fuzzyKeywordsThatMustAppear": [],
            "exactSearchTermsThatCanOptionallyAppear": [],
            "exactSearchTermsThatMustAppear": [],
            "dateRangeFilters": [{
                "schemaFieldName": "released",
                "startDate": "2024-01-01",
                "endDate": "2024-12-31"
            }],
            "index": "movies",
            "readKey": "read-key"
        }),
    )
    .await;

    assert!(!is_error(&result));
}

#[tokio::test]
async fn test_search_federation_takes_precedence_over_index() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/federation/all-media/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "data": {"hits": [], "count": 0, "time_taken": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = Config {
        endpoint_url: Some(server.uri()),
        federation_name: Some("all-media".to_string()),
        ..Config::default()
    };
    config.read_key = Some("read-key".to_string());
    let ctx = ToolContext::new(config);

    let result = call_tool(
        &ctx,
        "get_search_results",
        json!({
            "fuzzyKeywordsThatCanOptionallyAppear": [],
            "fuzzyKeywordsThatMustAppear": [],
            "exactSearchTermsThatCanOptionallyAppear": [],
            "exactSearchTermsThatMustAppear": [],
            "index": "movies",
            "readKey": "read-key"
        }),
    )
    .await;

    assert!(!is_error(&result));
}

#[tokio::test]
async fn test_search_without_read_key_is_config_error() {
    let server = MockServer::start().await;
    let ctx = ToolContext::new(Config {
        endpoint_url: Some(server.uri()),
        ..Config::default()
    });

    let result = call_tool(
        &ctx,
        "get_search_results",
        json!({
            "fuzzyKeywordsThatCanOptionallyAppear": [],
            "fuzzyKeywordsThatMustAppear": [],
            "exactSearchTermsThatCanOptionallyAppear": [],
            "exactSearchTermsThatMustAppear": [],
            "index": "movies",
            "readKey": ""
        }),
    )
    .await;

    assert!(is_error(&result));
    assert_eq!(
        first_text(&result),
        "❌ Error: READ_KEY environment variable is required"
    );
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_failure_uses_search_error_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/index/movies/search"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;

    let ctx = test_context(&server.uri());
    let result = call_tool(
        &ctx,
        "get_search_results",
        json!({
            "fuzzyKeywordsThatCanOptionallyAppear": [],
            "fuzzyKeywordsThatMustAppear": [],
            "exactSearchTermsThatCanOptionallyAppear": [],
            "exactSearchTermsThatMustAppear": [],
            "index": "movies",
            "readKey": "read-key"
        }),
    )
    .await;

    assert!(is_error(&result));
    let text = first_text(&result);
    assert!(text.starts_with("❌ Searchcraft search failed:"), "got: {}", text);
    assert!(text.contains("forbidden"), "got: {}", text);
}

// =============================================================================
// Preliminary search data
// =============================================================================

#[tokio::test]
async fn test_preliminary_search_data_with_facets() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/index/movies"))
        .and(header("Authorization", "ingest-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"fields": {"title": "text"}}"#),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/index/movies/search"))
        .and(body_json(json!({"query": [{"exact": {"ctx": "*"}}], "limit": 1})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "data": {"hits": [], "count": 0, "time_taken": 1, "facets": [{"genre": {"/scifi": 3}}]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = ToolContext::new(Config {
        endpoint_url: Some(server.uri()),
        ingest_key: Some("ingest-key".to_string()),
        read_key: Some("read-key".to_string()),
        index_name: Some("movies".to_string()),
        ..Config::default()
    });
    let result = call_tool(&ctx, "get-preliminary-search-data", json!({})).await;

    assert!(!is_error(&result));
    let blocks = result["content"].as_array().unwrap();
    assert_eq!(blocks.len(), 3);
    assert!(blocks[0]["resource"]["uri"]
        .as_str()
        .unwrap()
        .starts_with("searchcraft://schema-fields/"));
    assert!(blocks[1]["resource"]["uri"]
        .as_str()
        .unwrap()
        .starts_with("searchcraft://facets/"));
    assert!(blocks[2]["text"]
        .as_str()
        .unwrap()
        .contains("preliminary search data has been retrieved"));
}

#[tokio::test]
async fn test_preliminary_search_data_without_facets() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/index/movies"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/index/movies/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "data": {"hits": [], "count": 0, "time_taken": 1}
        })))
        .mount(&server)
        .await;

    let ctx = ToolContext::new(Config {
        endpoint_url: Some(server.uri()),
        ingest_key: Some("ingest-key".to_string()),
        read_key: Some("read-key".to_string()),
        index_name: Some("movies".to_string()),
        ..Config::default()
    });

    // Both alias names share the handler.
    for tool in ["get-preliminary-search-data", "get_search_index_schema"] {
        let result = call_tool(&ctx, tool, json!({})).await;
        assert!(!is_error(&result));
        let blocks = result["content"].as_array().unwrap();
        assert_eq!(blocks.len(), 3);
        assert!(blocks[1]["text"]
            .as_str()
            .unwrap()
            .contains("no facet types"));
    }
}

// =============================================================================
// Measurements & status
// =============================================================================

#[tokio::test]
async fn test_measure_summary_encodes_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/measure/dashboard/summary"))
        .and(query_param("organization_id", "org1"))
        .and(query_param("index_names", "movies|shows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"events": []})))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = test_context(&server.uri());
    let result = call_tool(
        &ctx,
        "get_measure_summary",
        json!({"query_params": {"organization_id": "org1", "index_names": ["movies", "shows"]}}),
    )
    .await;

    assert!(!is_error(&result));
    assert!(first_resource(&result)["uri"]
        .as_str()
        .unwrap()
        .starts_with("searchcraft://measure-summary/"));
}

#[tokio::test]
async fn test_status_relays_healthcheck_body_as_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/healthcheck"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"ok"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = test_context(&server.uri());
    let result = call_tool(&ctx, "get_searchcraft_status", json!({})).await;

    assert!(!is_error(&result));
    assert_eq!(result["content"][0]["type"], "text");
    assert_eq!(first_text(&result), r#"{"status":"ok"}"#);
}

// =============================================================================
// Stopwords & synonyms
// =============================================================================

#[tokio::test]
async fn test_add_stopwords_posts_word_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/index/movies/stopwords"))
        .and(header("Authorization", "admin-key"))
        .and(body_json(json!(["the", "a"])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = test_context(&server.uri());
    let result = call_tool(
        &ctx,
        "add_stopwords",
        json!({"index_name": "movies", "stopwords": ["the", "a"]}),
    )
    .await;

    assert!(!is_error(&result));
    assert!(first_resource(&result)["uri"]
        .as_str()
        .unwrap()
        .starts_with("searchcraft://stopwords-added/movies/"));
}

#[tokio::test]
async fn test_delete_all_synonyms_hits_all_path() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/index/movies/synonyms/all"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = test_context(&server.uri());
    let result = call_tool(&ctx, "delete_all_synonyms", json!({"index_name": "movies"})).await;

    assert!(!is_error(&result));
    assert!(first_resource(&result)["uri"]
        .as_str()
        .unwrap()
        .starts_with("searchcraft://all-synonyms-deleted/movies/"));
}

// =============================================================================
// Federations
// =============================================================================

#[tokio::test]
async fn test_create_federation_posts_definition() {
    let server = MockServer::start().await;
    let federation = json!({"name": "all-media", "index_names": ["movies", "shows"]});

    Mock::given(method("POST"))
        .and(path("/federation"))
        .and(body_json(&federation))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "all-media"})))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = test_context(&server.uri());
    let result = call_tool(&ctx, "create_federation", json!({"federation_data": federation})).await;

    assert!(!is_error(&result));
    assert!(first_resource(&result)["uri"]
        .as_str()
        .unwrap()
        .starts_with("searchcraft://federation-created/all-media/"));
}

#[tokio::test]
async fn test_trailing_slash_endpoint_is_normalized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/federation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = test_context(&format!("{}/", server.uri()));
    let result = call_tool(&ctx, "list_all_federations", json!({})).await;
    assert!(!is_error(&result));
}
