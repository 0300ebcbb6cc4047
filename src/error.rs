//! Error types for the MCP server.

use thiserror::Error;

/// Errors produced while handling MCP requests.
#[derive(Debug, Error)]
pub enum McpError {
    /// The requested item id does not exist in the catalog.
    ///
    /// Only `get_crafting_chain` surfaces this as an error; the other
    /// id-keyed tools report a miss as a plain "not found" text reply.
    #[error("Item {0} not found")]
    ItemNotFound(String),

    /// A required tool argument was missing.
    #[error("Missing required argument: {0}")]
    MissingArg(String),

    /// A tool argument had the wrong type or an unusable value.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArg {
        /// Argument name
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// The tool name is not registered.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// I/O error on the stdio transport.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, McpError>;
