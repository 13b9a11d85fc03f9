//! Static item catalogs keyed by category.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;
use thiserror::Error;

use crate::directive::ItemTemplate;

const DEFAULT_CATALOG_DATA: &str = include_str!("../assets/data/catalog.json");

/// Category name mapped to its ordered item templates.
pub type CategoryItems = BTreeMap<String, Vec<ItemTemplate>>;

/// Errors raised while loading catalog or vocabulary assets.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("symbol {symbol:?} maps to an empty keyword")]
    EmptyKeyword { symbol: String },
    #[error("{section} catalog has an entry with an empty keyword")]
    EmptySection { section: &'static str },
}

/// Base, activity and climate item sets plus the always-included list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Catalog {
    #[serde(default)]
    pub base: CategoryItems,
    #[serde(default)]
    pub activities: BTreeMap<String, CategoryItems>,
    #[serde(default)]
    pub climates: BTreeMap<String, CategoryItems>,
    #[serde(default)]
    pub always_include: Vec<ItemTemplate>,
}

impl Catalog {
    /// Parse and validate catalog JSON.
    ///
    /// Every template is parsed into an [`ItemTemplate`] here, so a template that
    /// breaks the one-directive rule fails the whole load.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, a template is invalid, or an
    /// activity/climate entry has an empty keyword.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        if catalog.activities.keys().any(|k| k.trim().is_empty()) {
            return Err(CatalogError::EmptySection {
                section: "activity",
            });
        }
        if catalog.climates.keys().any(|k| k.trim().is_empty()) {
            return Err(CatalogError::EmptySection { section: "climate" });
        }
        Ok(catalog)
    }

    /// Load the catalog shipped with the crate.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_CATALOG_DATA).unwrap_or_else(|err| {
            log::error!("embedded catalog is invalid: {err}");
            Self::default()
        })
    }

    #[must_use]
    pub fn default_catalog() -> &'static Self {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(Self::load_from_static)
    }

    /// A keyword is a climate exactly when the climate catalog has an entry for it.
    #[must_use]
    pub fn is_climate(&self, keyword: &str) -> bool {
        self.climates.contains_key(keyword)
    }

    #[must_use]
    pub fn activity(&self, keyword: &str) -> Option<&CategoryItems> {
        self.activities.get(keyword)
    }

    #[must_use]
    pub fn climate(&self, keyword: &str) -> Option<&CategoryItems> {
        self.climates.get(keyword)
    }

    pub fn activity_keywords(&self) -> impl Iterator<Item = &str> {
        self.activities.keys().map(String::as_str)
    }

    pub fn climate_keywords(&self) -> impl Iterator<Item = &str> {
        self.climates.keys().map(String::as_str)
    }
}
