//! Outbound HTTP dispatch to the Searchcraft API.
//!
//! One request per call, no retries, platform-default timeouts. The
//! `Authorization` header carries the raw key with no scheme prefix; this is
//! the wire format the service expects.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::error::ToolError;
use crate::query::SearchQuery;

/// A parsed search response.
///
/// Only the fields the tools relay are modeled; hits stay opaque JSON since
/// their shape depends on the index schema.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// The response payload.
    pub data: SearchData,
}

/// Payload of a search response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchData {
    /// Matching documents.
    #[serde(default)]
    pub hits: Vec<JsonValue>,
    /// Facet aggregation counts, when the index defines facet fields.
    #[serde(default)]
    pub facets: Option<JsonValue>,
}

/// HTTP client for the Searchcraft API.
#[derive(Debug, Clone, Default)]
pub struct SearchcraftClient {
    http: reqwest::Client,
}

impl SearchcraftClient {
    /// Create a client with a fresh connection pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue one request and relay the JSON response.
    ///
    /// Returns `Null` for an empty 2xx body. Non-2xx becomes
    /// [`ToolError::RemoteService`] carrying the status and raw body; a 2xx
    /// body that fails to parse as JSON becomes
    /// [`ToolError::MalformedResponse`].
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        auth_key: &str,
        body: Option<&JsonValue>,
    ) -> Result<JsonValue, ToolError> {
        let mut request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, auth_key);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ToolError::RemoteService {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body: text,
            });
        }

        if text.is_empty() {
            return Ok(JsonValue::Null);
        }
        serde_json::from_str(&text).map_err(|e| ToolError::MalformedResponse(e.to_string()))
    }

    /// Issue a search query and parse the typed response.
    ///
    /// Unlike [`SearchcraftClient::request`], a 2xx JSON body is mandatory.
    pub async fn search(
        &self,
        url: &str,
        read_key: &str,
        query: &SearchQuery,
    ) -> Result<SearchResponse, ToolError> {
        tracing::debug!(query = %serde_json::to_string(query).unwrap_or_default(), "search request");

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, read_key)
            .json(query)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ToolError::RemoteService {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| ToolError::MalformedResponse(e.to_string()))
    }

    /// Fetch a URL and relay the raw body text without parsing it.
    ///
    /// Used where the tool forwards the service's response verbatim
    /// (health check, schema preview).
    pub async fn get_text(&self, url: &str, auth_key: Option<&str>) -> Result<String, ToolError> {
        let mut request = self.http.get(url);
        if let Some(key) = auth_key {
            request = request.header(AUTHORIZATION, key);
        }
        Ok(request.send().await?.text().await?)
    }
}
