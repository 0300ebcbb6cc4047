//! Crafting tools.
//!
//! Tools: get_recipe, get_crafting_chain

use serde_json::{Map, Value as JsonValue};

use crate::catalog::Catalog;
use crate::convert::get_string_arg;
use crate::error::{McpError, Result};
use crate::query;
use crate::schema;
use crate::tools::{pretty, ToolDef};

/// Get the crafting tool definitions.
pub fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new(
            "get_recipe",
            "Get the crafting recipe for an item including ingredients and craft bench. \
             Ingredient names are resolved against the catalog; unknown ingredient ids fall \
             back to the raw id.",
            schema!(object {
                required: { "itemId": string }
            }),
        ),
        ToolDef::new(
            "get_crafting_chain",
            "Get the full crafting chain showing all materials needed recursively. Each entry \
             carries its depth below the crafted item and the cumulative quantity demanded \
             along the path that first reached it.",
            schema!(object {
                required: { "itemId": string }
            }),
        ),
    ]
}

/// Dispatch a crafting tool call.
pub fn dispatch(catalog: &Catalog, name: &str, args: Map<String, JsonValue>) -> Result<String> {
    match name {
        "get_recipe" => {
            let item_id = get_string_arg(&args, "itemId")?;
            match query::get_recipe(catalog, &item_id) {
                Some(recipe) => pretty(&recipe),
                None => Ok("No recipe found for this item".to_string()),
            }
        }

        "get_crafting_chain" => {
            let item_id = get_string_arg(&args, "itemId")?;
            let chain = query::crafting_chain(catalog, &item_id)?;
            pretty(&chain)
        }

        _ => Err(McpError::UnknownTool(name.to_string())),
    }
}
