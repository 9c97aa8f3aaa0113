//! # searchcraft-mcp
//!
//! MCP (Model Context Protocol) server for the Searchcraft search service.
//!
//! This crate exposes Searchcraft administration and query operations as MCP
//! tools for AI agents. It implements the MCP protocol over stdin/stdout
//! using JSON-RPC 2.0 and forwards each tool call to the Searchcraft REST
//! API.
//!
//! ## Features
//!
//! - **Index management**: create, update, patch, delete, list, stats
//! - **Document ingestion**: add (with explicit commit), lookup, delete by
//!   id/field/query
//! - **Key, federation, stopword, and synonym management**
//! - **Full-text search**: fuzzy/exact keyword clauses, facet filters, and
//!   date-range filters composed into the Searchcraft query format
//! - **Usage measurements and health check**
//!
//! ## Usage
//!
//! The server is typically run as an executable and configured in AI tools
//! like Claude Desktop:
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "searchcraft": {
//!       "command": "/path/to/searchcraft-mcp",
//!       "env": {
//!         "ENDPOINT_URL": "http://localhost:8000",
//!         "ADMIN_KEY": "...",
//!         "INGEST_KEY": "...",
//!         "READ_KEY": "...",
//!         "INDEX_NAME": "my-index"
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! ## Library Usage
//!
//! For testing or embedding, you can use the library API:
//!
//! ```no_run
//! use searchcraft_mcp::{Config, McpServer, ToolContext};
//!
//! # async fn example() {
//! let context = ToolContext::new(Config::from_env());
//! let mut server = McpServer::new(context);
//!
//! // Run the server (reads from stdin, writes to stdout)
//! // server.run().await.expect("Server error");
//! # }
//! ```

#![warn(missing_docs)]

mod args;
mod client;
mod config;
mod envelope;
mod error;
mod query;
mod server;
mod tools;

pub use client::{SearchcraftClient, SearchData, SearchResponse};
pub use config::{Config, DEFAULT_RESULT_LIMIT};
pub use envelope::{failure, resource_uri, ContentBlock, ResourceContents, ToolResult};
pub use error::{McpError, Result, ToolError};
pub use query::{
    build_search_query, DateRangeFilter, FacetFilterGroup, MatchContext, Occur, SearchClause,
    SearchCriteria, SearchQuery, SortDirection,
};
pub use server::{JsonRpcRequest, JsonRpcResponse, McpServer};
pub use tools::{ToolContext, ToolDef, ToolRegistry};
