//! Tool registry and dispatch.
//!
//! Exposes the 8 catalog query tools. Each submodule contributes its tool
//! definitions and a dispatch function; the registry stitches them together
//! for the MCP `tools/list` and `tools/call` methods.
//!
//! Dispatch produces the final response *text*: pretty-printed JSON for
//! hits, a short human-readable string for soft misses. Hard failures
//! (unknown crafting-chain root, bad arguments, unknown tool) propagate as
//! [`McpError`](crate::error::McpError) and the server turns them into an
//! error-flagged response.

pub(crate) mod recipes;
pub(crate) mod search;
pub(crate) mod stats;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::catalog::Catalog;
use crate::error::{McpError, Result};

/// A tool definition for the MCP tools/list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDef {
    /// Tool name (e.g., "search_items")
    pub name: String,
    /// Tool description
    pub description: String,
    /// JSON Schema for the input parameters
    #[serde(rename = "inputSchema")]
    pub input_schema: JsonValue,
}

impl ToolDef {
    /// Create a new tool definition.
    pub fn new(name: &str, description: &str, input_schema: JsonValue) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            input_schema,
        }
    }
}

/// Registry of available MCP tools.
pub struct ToolRegistry {
    tools: Vec<ToolDef>,
}

impl ToolRegistry {
    /// Create the registry with all 8 catalog query tools.
    pub fn new() -> Self {
        let mut tools = Vec::new();
        tools.extend(search::tools());
        tools.extend(recipes::tools());
        tools.extend(stats::tools());
        Self { tools }
    }

    /// Get all tool definitions.
    pub fn tools(&self) -> &[ToolDef] {
        &self.tools
    }

    /// Dispatch a tool call, returning the response text.
    pub fn dispatch(
        &self,
        catalog: &Catalog,
        name: &str,
        args: Map<String, JsonValue>,
    ) -> Result<String> {
        match name {
            "search_items" | "get_item" => search::dispatch(catalog, name, args),
            "get_recipe" | "get_crafting_chain" => recipes::dispatch(catalog, name, args),
            "get_items_by_type" | "get_items_by_rarity" | "get_recycling_value"
            | "compare_items" => stats::dispatch(catalog, name, args),
            _ => Err(McpError::UnknownTool(name.to_string())),
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Pretty-print a serializable query result for the response body.
pub(crate) fn pretty<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Helper macro for creating JSON Schema for tool input parameters.
#[macro_export]
macro_rules! schema {
    // Object with required and optional properties
    (object {
        required: { $($req_name:literal : $req_type:tt),* $(,)? },
        optional: { $($opt_name:literal : $opt_type:tt),* $(,)? }
    }) => {{
        let mut required = Vec::new();
        $(required.push($req_name);)*

        let mut props = serde_json::Map::new();
        $(props.insert($req_name.to_string(), schema!(@type $req_type));)*
        $(props.insert($opt_name.to_string(), schema!(@type $opt_type));)*

        serde_json::json!({
            "type": "object",
            "properties": props,
            "required": required
        })
    }};

    // Object with only required properties
    (object {
        required: { $($req_name:literal : $req_type:tt),* $(,)? }
    }) => {{
        let mut required = Vec::new();
        $(required.push($req_name);)*

        let mut props = serde_json::Map::new();
        $(props.insert($req_name.to_string(), schema!(@type $req_type));)*

        serde_json::json!({
            "type": "object",
            "properties": props,
            "required": required
        })
    }};

    // Object with only optional properties
    (object {
        optional: { $($opt_name:literal : $opt_type:tt),* $(,)? }
    }) => {{
        let mut props = serde_json::Map::new();
        $(props.insert($opt_name.to_string(), schema!(@type $opt_type));)*

        serde_json::json!({
            "type": "object",
            "properties": props,
            "required": []
        })
    }};

    // Empty object (no parameters)
    (object {}) => {{
        serde_json::json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }};

    // Type mappings
    (@type string) => { serde_json::json!({"type": "string"}) };
    (@type number) => { serde_json::json!({"type": "number"}) };
    (@type boolean) => { serde_json::json!({"type": "boolean"}) };
    (@type array_string) => { serde_json::json!({"type": "array", "items": {"type": "string"}}) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_lists_all_eight_tools() {
        let registry = ToolRegistry::new();
        let names: Vec<&str> = registry.tools().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "search_items",
                "get_item",
                "get_recipe",
                "get_crafting_chain",
                "get_items_by_type",
                "get_items_by_rarity",
                "get_recycling_value",
                "compare_items",
            ]
        );
    }

    #[test]
    fn unknown_tool_is_rejected() {
        let registry = ToolRegistry::new();
        let catalog = Catalog::new(Vec::new());
        let err = registry
            .dispatch(&catalog, "drop_tables", Map::new())
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown tool: drop_tables");
    }

    #[test]
    fn schema_macro_shapes() {
        let s = schema!(object {
            required: { "itemId": string },
            optional: { "language": string }
        });
        assert_eq!(s["required"], serde_json::json!(["itemId"]));
        assert_eq!(s["properties"]["language"]["type"], "string");

        let empty = schema!(object {});
        assert_eq!(empty["required"], serde_json::json!([]));
    }
}
