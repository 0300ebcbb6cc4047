//! # game-items-mcp
//!
//! MCP (Model Context Protocol) server for a static game item catalog.
//!
//! This crate exposes a read-only database of game items — crafting recipes,
//! rarities, values, recycling yields — as tools for AI agents. It implements
//! the MCP protocol over stdin/stdout using JSON-RPC 2.0.
//!
//! ## 8 Query Tools
//!
//! `search_items`, `get_item`, `get_recipe`, `get_crafting_chain`,
//! `get_items_by_type`, `get_items_by_rarity`, `get_recycling_value`,
//! `compare_items`
//!
//! The catalog is loaded once from a JSON file at startup and never mutated;
//! every tool is a pure query over it.
//!
//! ## Usage
//!
//! The server is typically run as an executable and configured in AI tools
//! like Claude Desktop:
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "game-items": {
//!       "command": "/path/to/game-items-mcp",
//!       "args": ["--items", "/path/to/items.json"]
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
//! use game_items_mcp::{Catalog, McpServer};
//! use std::path::Path;
//!
//! let catalog = Catalog::load(Path::new("items.json"));
//! let server = McpServer::new(catalog);
//!
//! // Run the server (reads from stdin, writes to stdout)
//! // server.run().await.expect("Server error");
//! ```

#![warn(missing_docs)]

mod catalog;
mod convert;
mod error;
mod model;
pub mod query;
mod server;
mod tools;

pub use catalog::Catalog;
pub use error::{McpError, Result};
pub use model::{EffectEntry, Ingredients, Item, LocalizedText};
pub use server::{JsonRpcRequest, JsonRpcResponse, McpServer};
pub use tools::{ToolDef, ToolRegistry};
