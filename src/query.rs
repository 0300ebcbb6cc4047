//! Query engine.
//!
//! Every operation here is a pure function over a borrowed [`Catalog`]: no
//! caching, no mutation, results ordered by catalog load order. The views
//! returned borrow from the catalog and serialize straight into the shapes
//! the MCP tools emit.
//!
//! The only operation with any real machinery is [`crafting_chain`], which
//! expands nested recipes depth-first with a global visited set.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::{McpError, Result};
use crate::model::{Ingredients, Item};

/// Search criteria. All fields optional and AND-combined.
#[derive(Debug, Default, Clone)]
pub struct SearchFilter {
    /// Case-insensitive substring match against the localized name.
    pub name: Option<String>,
    /// Case-insensitive exact match against the item type.
    pub kind: Option<String>,
    /// Case-insensitive exact match against the rarity.
    pub rarity: Option<String>,
    /// `true` keeps only items with a non-empty recipe; `false` only items without.
    pub craftable: Option<bool>,
    /// Inclusive lower bound on value.
    pub min_value: Option<f64>,
    /// Inclusive upper bound on value.
    pub max_value: Option<f64>,
    /// Language the `name` filter is tested against. Defaults to "en".
    /// Does not filter on its own.
    pub language: Option<String>,
}

/// Filter the catalog. Result order is catalog order; an empty result is
/// not an error. Items lacking a localization for the requested language
/// are excluded from name-filtered results.
pub fn search<'a>(catalog: &'a Catalog, filter: &SearchFilter) -> Vec<&'a Item> {
    let language = filter.language.as_deref().unwrap_or("en");

    catalog
        .items()
        .iter()
        .filter(|item| {
            if let Some(name) = &filter.name {
                match item.name.get(language) {
                    Some(localized)
                        if localized.to_lowercase().contains(&name.to_lowercase()) => {}
                    _ => return false,
                }
            }
            if let Some(kind) = &filter.kind {
                if !item.kind.eq_ignore_ascii_case(kind) {
                    return false;
                }
            }
            if let Some(rarity) = &filter.rarity {
                if !item.rarity.eq_ignore_ascii_case(rarity) {
                    return false;
                }
            }
            if let Some(craftable) = filter.craftable {
                if item.is_craftable() != craftable {
                    return false;
                }
            }
            if let Some(min) = filter.min_value {
                if item.value < min {
                    return false;
                }
            }
            if let Some(max) = filter.max_value {
                if item.value > max {
                    return false;
                }
            }
            true
        })
        .collect()
}

/// Look up a single item by id.
pub fn get_item<'a>(catalog: &'a Catalog, id: &str) -> Option<&'a Item> {
    catalog.by_id(id)
}

/// One resolved recipe ingredient.
#[derive(Debug, Serialize)]
pub struct IngredientLine {
    /// Ingredient item id.
    pub id: String,
    /// English name of the ingredient, or the raw id when the reference dangles.
    pub name: String,
    /// Required quantity.
    pub quantity: f64,
}

/// A recipe with its ingredients resolved against the catalog.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeView<'a> {
    /// The craftable item.
    pub item: &'a Item,
    /// Ingredients in recipe key order.
    pub ingredients: Vec<IngredientLine>,
    /// Required crafting station, "unknown" when the item does not name one.
    pub craft_bench: &'a str,
}

/// Resolve an item's recipe. `None` when the item is unknown or has no
/// (non-empty) recipe.
pub fn get_recipe<'a>(catalog: &'a Catalog, id: &str) -> Option<RecipeView<'a>> {
    let item = catalog.by_id(id)?;
    let recipe = item.recipe.as_ref().filter(|r| !r.is_empty())?;

    let ingredients = recipe
        .iter()
        .map(|(ingredient_id, quantity)| IngredientLine {
            id: ingredient_id.clone(),
            name: catalog
                .by_id(ingredient_id)
                .map_or_else(|| ingredient_id.clone(), |i| i.name.en.clone()),
            quantity: *quantity,
        })
        .collect();

    Some(RecipeView {
        item,
        ingredients,
        craft_bench: item.craft_bench.as_deref().unwrap_or("unknown"),
    })
}

/// One step of a crafting chain.
#[derive(Debug, Serialize)]
pub struct ChainLink<'a> {
    /// Distance from the crafted item (root = 0).
    pub depth: usize,
    /// The material at this step.
    pub item: &'a Item,
    /// Cumulative quantity demanded along the path that first reached this item.
    pub quantity: f64,
}

/// An item together with its full recursive material expansion.
#[derive(Debug, Serialize)]
pub struct CraftingChain<'a> {
    /// The crafted item.
    pub item: &'a Item,
    /// Expansion in depth-first pre-order.
    pub chain: Vec<ChainLink<'a>>,
}

/// Expand an item's recipe recursively into every transitive material.
///
/// Depth-first pre-order from the root at depth 0, quantity 1. Quantities
/// multiply down the path, so a recipe needing 4 planks at 2 wood each
/// records wood with quantity 8. A single visited set spans the whole
/// traversal: an item reachable through two branches appears once, under
/// whichever branch reaches it first, with that branch's quantity. Totals
/// are therefore not additive across branches; downstream consumers rely on
/// the chain shape as-is, so the traversal keeps that behavior. Ingredient
/// ids missing from the catalog end their branch silently.
///
/// This is the one query that fails hard: an unknown root id is an
/// [`McpError::ItemNotFound`].
pub fn crafting_chain<'a>(catalog: &'a Catalog, id: &str) -> Result<CraftingChain<'a>> {
    let item = catalog
        .by_id(id)
        .ok_or_else(|| McpError::ItemNotFound(id.to_string()))?;

    let mut chain = Vec::new();
    let mut visited = HashSet::new();
    expand(catalog, id, 0, 1.0, &mut visited, &mut chain);

    Ok(CraftingChain { item, chain })
}

fn expand<'a>(
    catalog: &'a Catalog,
    id: &str,
    depth: usize,
    quantity: f64,
    visited: &mut HashSet<String>,
    chain: &mut Vec<ChainLink<'a>>,
) {
    // Cycle and diamond guard: each id is recorded at most once, at the
    // first visit. This also bounds the traversal by catalog size even when
    // the recipe graph has cycles.
    if !visited.insert(id.to_string()) {
        return;
    }

    let Some(item) = catalog.by_id(id) else {
        // Dangling reference: stop expanding this branch, not an error.
        return;
    };

    chain.push(ChainLink {
        depth,
        item,
        quantity,
    });

    if let Some(recipe) = &item.recipe {
        for (ingredient_id, ingredient_qty) in recipe {
            expand(
                catalog,
                ingredient_id,
                depth + 1,
                ingredient_qty * quantity,
                visited,
                chain,
            );
        }
    }
}

/// Group all items by their raw type string (case-sensitive). Group order is
/// first-encounter order; items keep catalog order within each group.
pub fn group_by_kind(catalog: &Catalog) -> IndexMap<&str, Vec<&Item>> {
    let mut groups: IndexMap<&str, Vec<&Item>> = IndexMap::new();
    for item in catalog.items() {
        groups.entry(item.kind.as_str()).or_default().push(item);
    }
    groups
}

/// Group all items by their raw rarity string (case-sensitive).
pub fn group_by_rarity(catalog: &Catalog) -> IndexMap<&str, Vec<&Item>> {
    let mut groups: IndexMap<&str, Vec<&Item>> = IndexMap::new();
    for item in catalog.items() {
        groups.entry(item.rarity.as_str()).or_default().push(item);
    }
    groups
}

/// Recycling and salvage yields for an item.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecyclingView<'a> {
    /// The item being recycled.
    pub item: &'a Item,
    /// Materials from recycling, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recycles_into: Option<&'a Ingredients>,
    /// Materials from salvaging, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salvages_into: Option<&'a Ingredients>,
    /// Sum of all yielded quantities. A material count, not a currency
    /// value; the field name is kept for compatibility with the data export.
    pub total_material_value: f64,
}

/// Yields for recycling or salvaging an item. `None` only when the item is
/// unknown; items with no yield data still produce a view with a zero total.
pub fn recycling_value<'a>(catalog: &'a Catalog, id: &str) -> Option<RecyclingView<'a>> {
    let item = catalog.by_id(id)?;

    let sum = |map: &Option<Ingredients>| -> f64 {
        map.as_ref().map_or(0.0, |m| m.values().sum())
    };
    let total = sum(&item.recycles_into) + sum(&item.salvages_into);

    Some(RecyclingView {
        item,
        recycles_into: item.recycles_into.as_ref(),
        salvages_into: item.salvages_into.as_ref(),
        total_material_value: total,
    })
}

/// Per-attribute comparison tables, keyed by item id.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonTable {
    /// Monetary value per item.
    pub value: IndexMap<String, f64>,
    /// Weight in kilograms per item.
    pub weight: IndexMap<String, f64>,
    /// Stack size per item.
    pub stack_size: IndexMap<String, u32>,
    /// Whether each item has a non-empty recipe.
    pub craftable: IndexMap<String, bool>,
}

/// Side-by-side comparison of the requested items.
#[derive(Debug, Serialize)]
pub struct Comparison<'a> {
    /// Matched items, in catalog order.
    pub items: Vec<&'a Item>,
    /// Parallel attribute tables keyed by item id.
    pub comparison: ComparisonTable,
}

/// Compare items by id. Ids with no catalog match are silently dropped, and
/// duplicates in the request do not duplicate output: the result is the
/// catalog filtered by membership in the requested set, in catalog order.
pub fn compare_items<'a>(catalog: &'a Catalog, ids: &[String]) -> Comparison<'a> {
    let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
    let items: Vec<&Item> = catalog
        .items()
        .iter()
        .filter(|item| wanted.contains(item.id.as_str()))
        .collect();

    let mut comparison = ComparisonTable {
        value: IndexMap::new(),
        weight: IndexMap::new(),
        stack_size: IndexMap::new(),
        craftable: IndexMap::new(),
    };
    for item in &items {
        comparison.value.insert(item.id.clone(), item.value);
        comparison.weight.insert(item.id.clone(), item.weight_kg);
        comparison.stack_size.insert(item.id.clone(), item.stack_size);
        comparison.craftable.insert(item.id.clone(), item.is_craftable());
    }

    Comparison { items, comparison }
}
