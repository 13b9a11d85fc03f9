//! Symbol table resolving emoji (and other shorthand) to canonical keywords.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::catalog::CatalogError;

const DEFAULT_VOCABULARY_DATA: &str = include_str!("../assets/data/vocabulary.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Vocabulary {
    #[serde(default)]
    pub symbols: BTreeMap<String, String>,
}

impl Vocabulary {
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or a symbol maps to an
    /// empty keyword.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let vocabulary: Self = serde_json::from_str(json)?;
        if let Some((symbol, _)) = vocabulary
            .symbols
            .iter()
            .find(|(_, keyword)| keyword.trim().is_empty())
        {
            return Err(CatalogError::EmptyKeyword {
                symbol: symbol.clone(),
            });
        }
        Ok(vocabulary)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_VOCABULARY_DATA).unwrap_or_else(|err| {
            log::error!("embedded vocabulary is invalid: {err}");
            Self::default()
        })
    }

    #[must_use]
    pub fn default_vocabulary() -> &'static Self {
        static VOCABULARY: OnceLock<Vocabulary> = OnceLock::new();
        VOCABULARY.get_or_init(Self::load_from_static)
    }

    #[must_use]
    pub fn lookup(&self, symbol: &str) -> Option<&str> {
        self.symbols.get(symbol).map(String::as_str)
    }

    /// Resolve a token to a keyword: verbatim lookup, then lowercase lookup,
    /// then the lowercased token itself.
    #[must_use]
    pub fn resolve(&self, token: &str) -> String {
        if let Some(keyword) = self.lookup(token) {
            return keyword.to_string();
        }
        let lowered = token.to_lowercase();
        self.lookup(&lowered).map_or(lowered, str::to_string)
    }

    /// Symbols that resolve to `keyword`, in table order.
    pub fn symbols_for<'a>(&'a self, keyword: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.symbols
            .iter()
            .filter(move |(_, kw)| kw.as_str() == keyword)
            .map(|(symbol, _)| symbol.as_str())
    }
}
