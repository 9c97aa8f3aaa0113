//! MCP server for the Searchcraft search service.
//!
//! Run with the Searchcraft connection configured via environment variables
//! (`ENDPOINT_URL`, `ADMIN_KEY`, `INGEST_KEY`, `READ_KEY`, ...).

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod args;
mod client;
mod config;
mod envelope;
mod error;
mod query;
mod server;
mod tools;

use config::Config;
use server::McpServer;
use tools::ToolContext;

/// MCP server for the Searchcraft search service.
///
/// Exposes Searchcraft administration and query operations as MCP tools for
/// AI agents. Communicates via JSON-RPC 2.0 over stdin/stdout and forwards
/// each call to the Searchcraft REST API.
#[derive(Parser)]
#[command(name = "searchcraft-mcp")]
#[command(version, about, long_about = None)]
struct Args {
    /// Enable debug logging to stderr.
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Set up logging. Stdout carries the protocol, so logs go to stderr.
    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env()
                    .add_directive("searchcraft_mcp=debug".parse().unwrap()),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    // Resolve configuration once; individual tools report what they miss.
    let config = Config::from_env();
    if config.endpoint_url.is_none() {
        eprintln!("Warning: ENDPOINT_URL is not set; every tool call will fail until it is");
    }

    let context = ToolContext::new(config);
    let mut server = McpServer::new(context);

    // Run the server
    if let Err(e) = server.run().await {
        eprintln!("Error: Server error: {}", e);
        std::process::exit(1);
    }
}
