//! Runtime configuration for the Searchcraft connection.
//!
//! Resolved from the process environment once at startup and passed by
//! reference into every tool call, so tests can substitute their own values.

use crate::error::ToolError;

/// Default cap on returned search hits when the caller does not override it.
pub const DEFAULT_RESULT_LIMIT: u64 = 4;

/// Searchcraft connection settings.
///
/// Every field except `result_limit` is optional here; each tool checks the
/// values it actually needs and reports the missing variable by name without
/// attempting a network call.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Searchcraft API (`ENDPOINT_URL`).
    pub endpoint_url: Option<String>,
    /// Admin-tier key (`ADMIN_KEY`): key/federation/index/stopword/synonym management.
    pub admin_key: Option<String>,
    /// Ingest-tier key (`INGEST_KEY`): document mutation and lookup.
    pub ingest_key: Option<String>,
    /// Read-tier key (`READ_KEY`): schema preview queries.
    pub read_key: Option<String>,
    /// Default federation to search (`FEDERATION_NAME`). Wins over `index_name`.
    pub federation_name: Option<String>,
    /// Default index to search (`INDEX_NAME`).
    pub index_name: Option<String>,
    /// Search hit cap applied when a query does not specify one
    /// (`SEARCH_RESULT_LIMIT`, defaults to [`DEFAULT_RESULT_LIMIT`]).
    pub result_limit: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint_url: None,
            admin_key: None,
            ingest_key: None,
            read_key: None,
            federation_name: None,
            index_name: None,
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

impl Config {
    /// Resolve the configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            endpoint_url: non_empty("ENDPOINT_URL"),
            admin_key: non_empty("ADMIN_KEY"),
            ingest_key: non_empty("INGEST_KEY"),
            read_key: non_empty("READ_KEY"),
            federation_name: non_empty("FEDERATION_NAME"),
            index_name: non_empty("INDEX_NAME"),
            result_limit: non_empty("SEARCH_RESULT_LIMIT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_RESULT_LIMIT),
        }
    }

    /// Base endpoint with any trailing slash stripped, ready for path concatenation.
    pub fn endpoint(&self) -> std::result::Result<&str, ToolError> {
        self.endpoint_url
            .as_deref()
            .map(|url| url.strip_suffix('/').unwrap_or(url))
            .ok_or(ToolError::MissingConfig("ENDPOINT_URL"))
    }

    /// The admin-tier key, or the error naming `ADMIN_KEY`.
    pub fn admin_key(&self) -> std::result::Result<&str, ToolError> {
        self.admin_key
            .as_deref()
            .ok_or(ToolError::MissingConfig("ADMIN_KEY"))
    }

    /// The ingest-tier key, or the error naming `INGEST_KEY`.
    pub fn ingest_key(&self) -> std::result::Result<&str, ToolError> {
        self.ingest_key
            .as_deref()
            .ok_or(ToolError::MissingConfig("INGEST_KEY"))
    }

    /// The read-tier key, or the error naming `READ_KEY`.
    pub fn read_key(&self) -> std::result::Result<&str, ToolError> {
        self.read_key
            .as_deref()
            .ok_or(ToolError::MissingConfig("READ_KEY"))
    }

    /// The configured default index, or the error naming `INDEX_NAME`.
    pub fn index_name(&self) -> std::result::Result<&str, ToolError> {
        self.index_name
            .as_deref()
            .ok_or(ToolError::MissingConfig("INDEX_NAME"))
    }
}
