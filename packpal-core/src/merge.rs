//! Union of base, activity, climate and always-included item templates.
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::catalog::{Catalog, CategoryItems};
use crate::constants::MISC_CATEGORY;
use crate::directive::ItemTemplate;

/// Category name mapped to de-duplicated templates in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MergedCatalog {
    pub categories: BTreeMap<String, Vec<ItemTemplate>>,
}

impl MergedCatalog {
    /// Merge the catalog sections selected by `activities` and `climates`.
    ///
    /// Sources are applied base first, then activities, then climates, then the
    /// always-included list (into `Misc`). Keyword sets iterate in sorted order.
    /// Keywords without a catalog entry contribute nothing.
    #[must_use]
    pub fn build(
        catalog: &Catalog,
        activities: &BTreeSet<String>,
        climates: &BTreeSet<String>,
    ) -> Self {
        let mut merged = Self::default();
        merged.extend_from(&catalog.base);

        for keyword in activities {
            if let Some(items) = catalog.activity(keyword) {
                merged.extend_from(items);
            }
        }
        for keyword in climates {
            if let Some(items) = catalog.climate(keyword) {
                merged.extend_from(items);
            }
        }

        merged
            .categories
            .entry(MISC_CATEGORY.to_string())
            .or_default()
            .extend(catalog.always_include.iter().cloned());

        merged.dedup();
        log::debug!(
            "merged {} categories with {} items",
            merged.categories.len(),
            merged.item_count()
        );
        merged
    }

    fn extend_from(&mut self, items: &CategoryItems) {
        for (category, templates) in items {
            self.categories
                .entry(category.clone())
                .or_default()
                .extend(templates.iter().cloned());
        }
    }

    /// Drop later duplicates per category, keeping the first occurrence in place.
    fn dedup(&mut self) {
        for templates in self.categories.values_mut() {
            let mut seen = HashSet::with_capacity(templates.len());
            templates.retain(|template| seen.insert(template.clone()));
        }
    }

    #[must_use]
    pub fn get(&self, category: &str) -> Option<&[ItemTemplate]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}
