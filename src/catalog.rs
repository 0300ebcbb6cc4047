//! Catalog access.
//!
//! The catalog is the full item list, loaded once at startup and read-only
//! for the life of the process. It is constructed in `main` and handed to the
//! server explicitly; nothing in this crate caches it behind a global.

use std::path::Path;

use crate::model::Item;

/// The loaded item catalog. Immutable after construction.
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog from an already-loaded item list. Insertion order is
    /// preserved and becomes the canonical result order for every query.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Load the catalog from a JSON file.
    ///
    /// The file holds either an array of items or a single item object.
    /// Any failure (missing file, bad JSON) is logged and yields an empty
    /// catalog; every query degrades gracefully on an empty catalog, so a
    /// broken data file never takes the server down.
    pub fn load(path: &Path) -> Self {
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "failed to read items file");
                return Self::new(Vec::new());
            }
        };

        let parsed: serde_json::Value = match serde_json::from_str(&data) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "failed to parse items file");
                return Self::new(Vec::new());
            }
        };

        let items = if parsed.is_array() {
            serde_json::from_value::<Vec<Item>>(parsed)
        } else {
            serde_json::from_value::<Item>(parsed).map(|item| vec![item])
        };

        match items {
            Ok(items) => Self::new(items),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "items file did not match the item schema");
                Self::new(Vec::new())
            }
        }
    }

    /// All items in load order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Look up an item by id. Ids are expected to be unique; if the data
    /// file violates that, the first occurrence in load order wins.
    pub fn by_id(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
