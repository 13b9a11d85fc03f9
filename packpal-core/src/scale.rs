//! Quantity scaling of merged templates by trip length.
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::directive::ItemTemplate;
use crate::merge::MergedCatalog;

/// A checklist line ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackedItem {
    pub name: String,
    pub quantity: Option<u32>,
    pub optional: bool,
}

impl PackedItem {
    #[must_use]
    pub fn from_template(template: &ItemTemplate, days: u32) -> Self {
        Self {
            name: template.name.clone(),
            quantity: template.directive.quantity(days),
            optional: template.directive.is_optional(),
        }
    }
}

impl fmt::Display for PackedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(quantity) = self.quantity {
            write!(f, " x{quantity}")?;
        }
        if self.optional {
            f.write_str(" (optional)")?;
        }
        Ok(())
    }
}

/// Category name mapped to printable items, order preserved from the merge.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ScaledCatalog {
    pub categories: BTreeMap<String, Vec<PackedItem>>,
}

impl ScaledCatalog {
    #[must_use]
    pub fn from_merged(merged: &MergedCatalog, days: u32) -> Self {
        let categories = merged
            .categories
            .iter()
            .map(|(category, templates)| {
                let items = templates
                    .iter()
                    .map(|template| PackedItem::from_template(template, days))
                    .collect();
                (category.clone(), items)
            })
            .collect();
        Self { categories }
    }

    /// Display strings for one category.
    #[must_use]
    pub fn lines(&self, category: &str) -> Vec<String> {
        self.categories
            .get(category)
            .map(|items| items.iter().map(ToString::to_string).collect())
            .unwrap_or_default()
    }
}
