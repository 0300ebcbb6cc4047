//! Grouping, recycling and comparison tools.
//!
//! Tools: get_items_by_type, get_items_by_rarity, get_recycling_value, compare_items

use serde_json::{Map, Value as JsonValue};

use crate::catalog::Catalog;
use crate::convert::{get_string_arg, get_string_array_arg};
use crate::error::{McpError, Result};
use crate::query;
use crate::schema;
use crate::tools::{pretty, ToolDef};

/// Get the stats tool definitions.
pub fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new(
            "get_items_by_type",
            "Get all items grouped by their type. Group keys are the raw type strings; items \
             keep catalog order within each group.",
            schema!(object {}),
        ),
        ToolDef::new(
            "get_items_by_rarity",
            "Get all items grouped by their rarity.",
            schema!(object {}),
        ),
        ToolDef::new(
            "get_recycling_value",
            "Get what materials an item recycles or salvages into, with the combined material \
             count across both yield maps.",
            schema!(object {
                required: { "itemId": string }
            }),
        ),
        ToolDef::new(
            "compare_items",
            "Compare multiple items side by side (value, weight, stack size, craftability). \
             Unknown ids are skipped; results follow catalog order.",
            schema!(object {
                required: { "itemIds": array_string }
            }),
        ),
    ]
}

/// Dispatch a stats tool call.
pub fn dispatch(catalog: &Catalog, name: &str, args: Map<String, JsonValue>) -> Result<String> {
    match name {
        "get_items_by_type" => pretty(&query::group_by_kind(catalog)),

        "get_items_by_rarity" => pretty(&query::group_by_rarity(catalog)),

        "get_recycling_value" => {
            let item_id = get_string_arg(&args, "itemId")?;
            match query::recycling_value(catalog, &item_id) {
                Some(view) => pretty(&view),
                None => Ok("Item not found".to_string()),
            }
        }

        "compare_items" => {
            let item_ids = get_string_array_arg(&args, "itemIds")?;
            pretty(&query::compare_items(catalog, &item_ids))
        }

        _ => Err(McpError::UnknownTool(name.to_string())),
    }
}
