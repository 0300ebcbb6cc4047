//! Binary entry point: load the catalog and serve MCP over stdio.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use game_items_mcp::{Catalog, McpServer};

#[derive(Parser)]
#[command(name = "game-items-mcp", version, about = "MCP server for a static game item catalog")]
struct Args {
    /// Path to the items JSON file
    #[arg(long, default_value = "items.json")]
    items: PathBuf,

    /// Log level when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> game_items_mcp::Result<()> {
    let args = Args::parse();

    // Stdout is the protocol channel; everything else goes to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let catalog = Catalog::load(&args.items);
    tracing::info!(
        items = catalog.len(),
        path = %args.items.display(),
        "game items MCP server running on stdio"
    );

    let server = McpServer::new(catalog);
    server.run().await
}
