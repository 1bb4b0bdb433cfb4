use std::collections::BTreeMap;

use bigdecimal::BigDecimal;
use num_traits::Zero;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::seed;
use crate::domain::shared::value_objects::{Category, DEFAULT_ICON, Unit};

/// Sensible defaults for a known product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub unit: Unit,
    pub category: Category,
    pub icon: String,
    pub reference_price: BigDecimal,
}

/// Defaults resolved for a product name, whether or not it is in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDefaults {
    pub unit: Unit,
    pub category: Category,
    pub icon: String,
    pub reference_price: BigDecimal,
}

impl Default for ProductDefaults {
    fn default() -> Self {
        Self {
            unit: Unit::default(),
            category: Category::default(),
            icon: DEFAULT_ICON.to_string(),
            reference_price: BigDecimal::zero(),
        }
    }
}

impl From<&CatalogEntry> for ProductDefaults {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            unit: entry.unit,
            category: entry.category,
            icon: entry.icon.clone(),
            reference_price: entry.reference_price.clone(),
        }
    }
}

/// Lookup key for a product name: trimmed and lowercased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Read-only table of known products keyed by normalized name.
#[derive(Debug, Clone)]
pub struct CatalogTable {
    entries: BTreeMap<String, CatalogEntry>,
}

static STANDARD: Lazy<CatalogTable> = Lazy::new(|| CatalogTable::new(seed::entries()));

impl CatalogTable {
    /// Builds a table from externally supplied entries. Entry names are
    /// normalized; a later duplicate replaces an earlier one.
    pub fn new(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|mut entry| {
                entry.name = normalize_name(&entry.name);
                (entry.name.clone(), entry)
            })
            .collect();
        Self { entries }
    }

    /// The built-in product table.
    pub fn standard() -> &'static CatalogTable {
        &STANDARD
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(&normalize_name(name))
    }

    /// Defaults for `name`; unknown names get unit, other, the generic icon and no price.
    pub fn lookup(&self, name: &str) -> ProductDefaults {
        self.get(name).map(ProductDefaults::from).unwrap_or_default()
    }

    /// Every entry ordered by category, then name.
    pub fn list_all(&self) -> Vec<&CatalogEntry> {
        let mut all: Vec<&CatalogEntry> = self.entries.values().collect();
        all.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.name.cmp(&b.name)));
        all
    }

    pub fn list_by_category(&self, category: Category) -> Vec<&CatalogEntry> {
        self.list_all()
            .into_iter()
            .filter(|entry| entry.category == category)
            .collect()
    }

    /// Entries whose name contains `filter` (case-insensitive), optionally
    /// restricted to one category. A blank filter matches every name.
    pub fn search(&self, filter: &str, category: Option<Category>) -> Vec<&CatalogEntry> {
        let needle = normalize_name(filter);
        self.list_all()
            .into_iter()
            .filter(|entry| needle.is_empty() || entry.name.contains(&needle))
            .filter(|entry| category.is_none_or(|c| entry.category == c))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
