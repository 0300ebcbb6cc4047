//! Search and lookup tools.
//!
//! Tools: search_items, get_item

use serde_json::{Map, Value as JsonValue};

use crate::catalog::Catalog;
use crate::convert::{get_optional_bool, get_optional_f64, get_optional_string, get_string_arg};
use crate::error::{McpError, Result};
use crate::query::{self, SearchFilter};
use crate::schema;
use crate::tools::{pretty, ToolDef};

/// Get the search tool definitions.
pub fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new(
            "search_items",
            "Search for items in the game database with various filters. All filters are \
             optional and combined with AND: name (partial match, case-insensitive), type and \
             rarity (exact match, case-insensitive), craftable, minValue/maxValue (inclusive). \
             Returns the matching items in catalog order.",
            schema!(object {
                optional: {
                    "name": string,
                    "type": string,
                    "rarity": string,
                    "craftable": boolean,
                    "minValue": number,
                    "maxValue": number,
                    "language": string
                }
            }),
        ),
        ToolDef::new(
            "get_item",
            "Get detailed information about a specific item by ID (e.g., 'adrenaline_shot'). \
             Returns the full item record with all localizations.",
            schema!(object {
                required: { "itemId": string },
                optional: { "language": string }
            }),
        ),
    ]
}

/// Dispatch a search tool call.
pub fn dispatch(catalog: &Catalog, name: &str, args: Map<String, JsonValue>) -> Result<String> {
    match name {
        "search_items" => {
            let filter = SearchFilter {
                name: get_optional_string(&args, "name"),
                kind: get_optional_string(&args, "type"),
                rarity: get_optional_string(&args, "rarity"),
                craftable: get_optional_bool(&args, "craftable"),
                min_value: get_optional_f64(&args, "minValue"),
                max_value: get_optional_f64(&args, "maxValue"),
                language: get_optional_string(&args, "language"),
            };
            pretty(&query::search(catalog, &filter))
        }

        "get_item" => {
            let item_id = get_string_arg(&args, "itemId")?;
            // language is accepted for interface symmetry; the full item with
            // all localizations is returned either way.
            let _language = get_optional_string(&args, "language");
            match query::get_item(catalog, &item_id) {
                Some(item) => pretty(item),
                None => Ok("Item not found".to_string()),
            }
        }

        _ => Err(McpError::UnknownTool(name.to_string())),
    }
}
