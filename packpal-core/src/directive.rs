//! Item templates and the quantity directives embedded in catalog entries.
//!
//! Catalog assets spell a template as `"<name> (<directive>)"`, for example
//! `"T-shirt (per_2_days)"`. Templates are parsed once when a catalog is built
//! so the scaler works on [`Directive`] values instead of re-matching text.
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::sync::OnceLock;
use thiserror::Error;

fn directive_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\((per_day|per_([0-9]+)_days|fixed|optional)\)")
            .unwrap_or_else(|err| unreachable!("directive pattern is valid: {err}"))
    })
}

/// How many of an item to pack and how to label it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Directive {
    /// One per trip day.
    PerDay,
    /// One per started block of `n` days.
    PerDays(NonZeroU32),
    /// A single item, no quantity shown.
    #[default]
    Fixed,
    /// A single item labelled as optional.
    Optional,
}

impl Directive {
    /// Quantity to display for a trip of `days` days.
    ///
    /// `None` means the item is packed once and no count is printed.
    #[must_use]
    pub const fn quantity(self, days: u32) -> Option<u32> {
        match self {
            Self::PerDay => Some(days),
            Self::PerDays(n) => Some(days.div_ceil(n.get())),
            Self::Fixed | Self::Optional => None,
        }
    }

    #[must_use]
    pub const fn is_optional(self) -> bool {
        matches!(self, Self::Optional)
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PerDay => f.write_str("per_day"),
            Self::PerDays(n) => write!(f, "per_{n}_days"),
            Self::Fixed => f.write_str("fixed"),
            Self::Optional => f.write_str("optional"),
        }
    }
}

/// Errors raised when a catalog entry breaks the one-trailing-directive rule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectiveError {
    #[error("template {template:?} carries {count} directives, expected at most one")]
    Conflicting { template: String, count: usize },
    #[error("template {template:?} has a directive that is not at the end")]
    NotTrailing { template: String },
    #[error("template {template:?} has an interval that is not a positive integer")]
    InvalidInterval { template: String },
}

/// A catalog entry: display name plus exactly one directive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemTemplate {
    pub name: String,
    pub directive: Directive,
}

impl ItemTemplate {
    #[must_use]
    pub fn new(name: impl Into<String>, directive: Directive) -> Self {
        Self {
            name: name.into(),
            directive,
        }
    }

    /// Parse `"<name> (<directive>)"`.
    ///
    /// A template without any recognized directive is treated as [`Directive::Fixed`]
    /// and keeps its full text as the name.
    ///
    /// # Errors
    ///
    /// Returns an error if the template has more than one directive, a directive
    /// followed by further text, or a `per_0_days` interval.
    pub fn parse(template: &str) -> Result<Self, DirectiveError> {
        let pattern = directive_regex();
        let count = pattern.find_iter(template).count();
        if count > 1 {
            return Err(DirectiveError::Conflicting {
                template: template.to_string(),
                count,
            });
        }

        let Some(captures) = pattern.captures(template) else {
            return Ok(Self::new(template, Directive::Fixed));
        };
        let Some(whole) = captures.get(0) else {
            return Ok(Self::new(template, Directive::Fixed));
        };
        if !template[whole.end()..].trim().is_empty() {
            return Err(DirectiveError::NotTrailing {
                template: template.to_string(),
            });
        }

        let directive = match (captures.get(1).map(|m| m.as_str()), captures.get(2)) {
            (_, Some(interval)) => interval
                .as_str()
                .parse::<u32>()
                .ok()
                .and_then(NonZeroU32::new)
                .map(Directive::PerDays)
                .ok_or_else(|| DirectiveError::InvalidInterval {
                    template: template.to_string(),
                })?,
            (Some("per_day"), None) => Directive::PerDay,
            (Some("optional"), None) => Directive::Optional,
            _ => Directive::Fixed,
        };

        let name = template[..whole.start()].trim_end();
        Ok(Self::new(name, directive))
    }
}

impl fmt::Display for ItemTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.directive)
    }
}

impl TryFrom<String> for ItemTemplate {
    type Error = DirectiveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ItemTemplate> for String {
    fn from(template: ItemTemplate) -> Self {
        template.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn every(n: u32) -> Directive {
        Directive::PerDays(NonZeroU32::new(n).unwrap())
    }

    #[test]
    fn parses_each_directive() {
        assert_eq!(
            ItemTemplate::parse("Underwear (per_day)").unwrap(),
            ItemTemplate::new("Underwear", Directive::PerDay)
        );
        assert_eq!(
            ItemTemplate::parse("T-shirt (per_2_days)").unwrap(),
            ItemTemplate::new("T-shirt", every(2))
        );
        assert_eq!(
            ItemTemplate::parse("Toothbrush (fixed)").unwrap(),
            ItemTemplate::new("Toothbrush", Directive::Fixed)
        );
        assert_eq!(
            ItemTemplate::parse("Neck pillow (optional)").unwrap(),
            ItemTemplate::new("Neck pillow", Directive::Optional)
        );
    }

    #[test]
    fn missing_directive_defaults_to_fixed() {
        let template = ItemTemplate::parse("Headlamp").unwrap();
        assert_eq!(template.name, "Headlamp");
        assert_eq!(template.directive, Directive::Fixed);
    }

    #[test]
    fn names_containing_counts_are_kept_verbatim() {
        let template = ItemTemplate::parse("SD card x2 (fixed)").unwrap();
        assert_eq!(template.name, "SD card x2");
    }

    #[test]
    fn rejects_combined_directives() {
        let err = ItemTemplate::parse("Pillow (per_day) (optional)").unwrap_err();
        assert!(matches!(err, DirectiveError::Conflicting { count: 2, .. }));
    }

    #[test]
    fn rejects_directive_in_the_middle() {
        let err = ItemTemplate::parse("Socks (per_day) wool").unwrap_err();
        assert!(matches!(err, DirectiveError::NotTrailing { .. }));
    }

    #[test]
    fn rejects_zero_interval() {
        let err = ItemTemplate::parse("Shirt (per_0_days)").unwrap_err();
        assert!(matches!(err, DirectiveError::InvalidInterval { .. }));
    }

    #[test]
    fn quantities_follow_directive() {
        assert_eq!(Directive::PerDay.quantity(4), Some(4));
        assert_eq!(every(2).quantity(4), Some(2));
        assert_eq!(every(2).quantity(5), Some(3));
        assert_eq!(every(3).quantity(1), Some(1));
        assert_eq!(Directive::Fixed.quantity(9), None);
        assert_eq!(Directive::Optional.quantity(9), None);
    }

    #[test]
    fn display_matches_asset_spelling() {
        let template = ItemTemplate::new("Shorts", every(2));
        assert_eq!(template.to_string(), "Shorts (per_2_days)");
        let json = serde_json::to_string(&template).unwrap();
        assert_eq!(json, "\"Shorts (per_2_days)\"");
    }
}
