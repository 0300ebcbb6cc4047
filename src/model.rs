//! Catalog data model.
//!
//! Items deserialize from the same camelCase JSON the game data export uses,
//! and serialize back without reordering or renaming anything. All ingredient
//! maps are `IndexMap` so that JSON object order survives the round trip —
//! recipe key order is the authoritative expansion order for crafting chains.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ingredient map: item id to quantity.
///
/// Used for recipes as well as recycle/salvage yields.
pub type Ingredients = IndexMap<String, f64>;

/// A string localized into one or more languages. English is mandatory;
/// any other language codes ride along as extra keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedText {
    /// English text, always present.
    pub en: String,
    /// Additional language codes (e.g. "de", "fr") mapped to translations.
    #[serde(flatten)]
    pub other: IndexMap<String, String>,
}

impl LocalizedText {
    /// Text for a language code, or `None` when no such localization exists.
    pub fn get(&self, language: &str) -> Option<&str> {
        if language == "en" {
            Some(&self.en)
        } else {
            self.other.get(language).map(String::as_str)
        }
    }
}

impl From<&str> for LocalizedText {
    fn from(en: &str) -> Self {
        Self {
            en: en.to_string(),
            other: IndexMap::new(),
        }
    }
}

/// A single item effect: localized description plus a string-encoded value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectEntry {
    /// English description of the effect.
    pub en: String,
    /// Effect magnitude, string-encoded in the source data.
    pub value: String,
    /// Additional localizations of the description.
    #[serde(flatten)]
    pub other: IndexMap<String, String>,
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique id within the catalog (first match wins if the data violates this).
    pub id: String,
    /// Localized display name.
    pub name: LocalizedText,
    /// Localized description.
    pub description: LocalizedText,
    /// Free-form type category (e.g. "Quick Use").
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-form rarity (e.g. "Common", "Rare").
    pub rarity: String,
    /// Monetary value.
    pub value: f64,
    /// Weight in kilograms.
    pub weight_kg: f64,
    /// Maximum stack size.
    pub stack_size: u32,
    /// Image asset path, passed through unmodified.
    #[serde(default)]
    pub image_filename: String,
    /// Last-update timestamp, passed through unmodified.
    #[serde(default)]
    pub updated_at: String,
    /// Crafting recipe, when the item is craftable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<Ingredients>,
    /// Required crafting station; reported as "unknown" when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub craft_bench: Option<String>,
    /// Materials obtained from recycling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recycles_into: Option<Ingredients>,
    /// Materials obtained from salvaging.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salvages_into: Option<Ingredients>,
    /// Special effects keyed by effect name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<IndexMap<String, EffectEntry>>,
}

impl Item {
    /// Whether the item carries a non-empty recipe.
    pub fn is_craftable(&self) -> bool {
        self.recipe.as_ref().is_some_and(|r| !r.is_empty())
    }
}
