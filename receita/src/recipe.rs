//! Recipe records embedded in the page, one per product.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{ReceitaError, Result};

/// Element id prefix of the JSON block holding a product's recipe.
pub const RECIPE_ELEMENT_PREFIX: &str = "recipe-";

/// The `{title, recipe}` pair shown in the modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecord {
    #[serde(default)]
    pub title: String,
    /// Plain text, `\n` separated
    pub recipe: String,
}

impl RecipeRecord {
    /// Parse a serialized record. A blank `recipe` counts as malformed.
    pub fn parse(id: &str, raw: &str) -> Result<Self> {
        let record: RecipeRecord =
            serde_json::from_str(raw).map_err(|e| ReceitaError::RecipeMalformed {
                id: id.to_string(),
                reason: e.to_string(),
            })?;
        if record.recipe.trim().is_empty() {
            return Err(ReceitaError::RecipeMalformed {
                id: id.to_string(),
                reason: "empty recipe text".to_string(),
            });
        }
        Ok(record)
    }

    /// The record's own title, or `fallback` (the card's visible name) when blank.
    pub fn display_title<'a>(&'a self, fallback: &'a str) -> &'a str {
        let title = self.title.trim();
        if title.is_empty() { fallback } else { title }
    }
}

/// Element id of the script block holding recipe `id`.
pub fn recipe_element_id(id: &str) -> String {
    format!("{}{}", RECIPE_ELEMENT_PREFIX, id)
}

/// Where serialized recipe records come from.
pub trait RecipeSource {
    /// Raw serialized record for `id`, if the page embeds one.
    fn raw_record(&self, id: &str) -> Option<String>;
}

/// Look up and parse the record for `id`, logging why when it is unusable.
pub fn resolve(source: &impl RecipeSource, id: &str) -> Result<RecipeRecord> {
    if id.trim().is_empty() {
        warn!("Product card has no recipe id");
        return Err(ReceitaError::RecipeMissing(id.to_string()));
    }
    let Some(raw) = source.raw_record(id) else {
        warn!("No recipe record embedded for '{}'", id);
        return Err(ReceitaError::RecipeMissing(id.to_string()));
    };
    RecipeRecord::parse(id, &raw).inspect_err(|e| warn!("Failed to parse recipe: {}", e))
}

/// In-memory recipe source keyed by recipe id.
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    records: HashMap<String, String>,
}

impl RecipeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a serialized record for `id`.
    pub fn insert_raw(&mut self, id: impl Into<String>, raw: impl Into<String>) {
        self.records.insert(id.into(), raw.into());
    }

    /// Register a record, serializing it the way the page embeds it.
    pub fn insert(&mut self, id: impl Into<String>, record: &RecipeRecord) -> Result<()> {
        let raw = serde_json::to_string(record)?;
        self.insert_raw(id, raw);
        Ok(())
    }
}

impl RecipeSource for RecipeCatalog {
    fn raw_record(&self, id: &str) -> Option<String> {
        self.records.get(id).cloned()
    }
}
