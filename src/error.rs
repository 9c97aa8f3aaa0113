//! Error types for the MCP server.
//!
//! Two layers: [`McpError`] covers JSON-RPC protocol failures (unknown tool,
//! bad arguments) and maps to RPC error codes. [`ToolError`] covers failures
//! of the outbound Searchcraft call itself; it never escapes a tool call and
//! is instead rendered into an error envelope with `isError: true`.

use serde::{Deserialize, Serialize};

/// MCP protocol-level errors.
#[derive(Debug, Clone, thiserror::Error, Serialize, Deserialize)]
pub enum McpError {
    /// Unknown tool requested.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// Missing required argument.
    #[error("missing required argument: {0}")]
    MissingArg(String),

    /// Invalid argument value.
    #[error("invalid argument '{name}': {reason}")]
    InvalidArg {
        /// Argument name
        name: String,
        /// Reason why it's invalid
        reason: String,
    },

    /// JSON-RPC protocol error.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for McpError {
    fn from(err: std::io::Error) -> Self {
        McpError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for McpError {
    fn from(err: serde_json::Error) -> Self {
        McpError::Protocol(format!("JSON error: {}", err))
    }
}

/// JSON-RPC error codes.
pub mod rpc_codes {
    /// Parse error - Invalid JSON was received.
    pub const PARSE_ERROR: i32 = -32700;
    /// Invalid Request - The JSON sent is not a valid Request object.
    pub const INVALID_REQUEST: i32 = -32600;
    /// Method not found - The method does not exist / is not available.
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid params - Invalid method parameter(s).
    pub const INVALID_PARAMS: i32 = -32602;
    /// Internal error - Internal JSON-RPC error.
    pub const INTERNAL_ERROR: i32 = -32603;
}

impl McpError {
    /// Convert to JSON-RPC error code.
    pub fn rpc_code(&self) -> i32 {
        match self {
            McpError::UnknownTool(_) => rpc_codes::METHOD_NOT_FOUND,
            McpError::MissingArg(_) | McpError::InvalidArg { .. } => rpc_codes::INVALID_PARAMS,
            McpError::Protocol(_) => rpc_codes::INVALID_REQUEST,
            _ => rpc_codes::INTERNAL_ERROR,
        }
    }
}

/// Result type for MCP protocol operations.
pub type Result<T> = std::result::Result<T, McpError>;

/// Failures of a single Searchcraft API call.
///
/// All variants are recoverable: the tool handler converts them into an
/// error envelope and the server keeps running.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ToolError {
    /// A required configuration value is absent. No network call is made.
    #[error("{0} environment variable is required")]
    MissingConfig(&'static str),

    /// The service answered with a non-2xx status.
    #[error("HTTP {status}: {status_text} {body}")]
    RemoteService {
        /// HTTP status code
        status: u16,
        /// Canonical status text (e.g. "Not Found")
        status_text: String,
        /// Raw response body, relayed for diagnosis
        body: String,
    },

    /// Network-level failure (DNS, connection refused, timeout).
    #[error("{0}")]
    Transport(String),

    /// A 2xx response whose body is not valid JSON when JSON was expected.
    #[error("malformed response body: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for ToolError {
    fn from(err: reqwest::Error) -> Self {
        ToolError::Transport(err.to_string())
    }
}
