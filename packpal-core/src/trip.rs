//! Trip description parsing.
//!
//! A description is a loose list of tokens separated by whitespace or commas:
//! day markers (`4`, `4d`, `⏱️4`), emoji from the vocabulary, and plain words.
//! Parsing never fails; anything unrecognized becomes an inert activity keyword.
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::OnceLock;

use crate::catalog::Catalog;
use crate::constants::{
    ALARM_CLOCK_GLYPH, DEFAULT_TRIP_DAYS, MAX_TRIP_DAYS, MIN_TRIP_DAYS, STOPWATCH_GLYPH,
};
use crate::vocabulary::Vocabulary;

fn day_token_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[0-9]+[dD]?$")
            .unwrap_or_else(|err| unreachable!("day token pattern is valid: {err}"))
    })
}

fn digit_run_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"[0-9]+").unwrap_or_else(|err| unreachable!("digit pattern is valid: {err}"))
    })
}

/// Normalized trip: activity keywords, climate keywords and a clamped day count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    pub activities: BTreeSet<String>,
    pub climates: BTreeSet<String>,
    pub days: u32,
}

impl Default for TripRequest {
    fn default() -> Self {
        Self {
            activities: BTreeSet::new(),
            climates: BTreeSet::new(),
            days: DEFAULT_TRIP_DAYS,
        }
    }
}

/// How a single token was interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Days(u64),
    Activity(String),
    Climate(String),
}

impl TripRequest {
    /// Parse a raw description against a vocabulary and catalog.
    #[must_use]
    pub fn parse(raw: &str, vocabulary: &Vocabulary, catalog: &Catalog) -> Self {
        let mut request = Self::default();
        let mut days: Option<u64> = None;

        for token in split_tokens(raw) {
            match classify_token(token, vocabulary, catalog) {
                Token::Days(value) => days = Some(value),
                Token::Climate(keyword) => {
                    request.climates.insert(keyword);
                }
                Token::Activity(keyword) => {
                    if !catalog.activities.contains_key(&keyword) {
                        log::debug!("token {token:?} is not a known activity; keeping {keyword:?}");
                    }
                    request.activities.insert(keyword);
                }
            }
        }

        request.days = days.map_or(DEFAULT_TRIP_DAYS, clamp_days);
        request
    }

    /// Whether the request names any activity or climate.
    #[must_use]
    pub fn is_general(&self) -> bool {
        self.activities.is_empty() && self.climates.is_empty()
    }
}

/// Parse with the embedded vocabulary and catalog.
#[must_use]
pub fn parse_trip(raw: &str) -> TripRequest {
    TripRequest::parse(raw, Vocabulary::default_vocabulary(), Catalog::default_catalog())
}

/// Split on runs of whitespace and commas, dropping empty pieces.
pub fn split_tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}

/// Interpret one token. Day markers are checked before vocabulary lookup.
#[must_use]
pub fn classify_token(token: &str, vocabulary: &Vocabulary, catalog: &Catalog) -> Token {
    if day_token_regex().is_match(token) {
        return Token::Days(leading_number(token));
    }
    if token.contains([STOPWATCH_GLYPH, ALARM_CLOCK_GLYPH]) && digit_run_regex().is_match(token) {
        return Token::Days(leading_number(token));
    }

    let keyword = vocabulary.resolve(token);
    if catalog.is_climate(&keyword) {
        Token::Climate(keyword)
    } else {
        Token::Activity(keyword)
    }
}

/// First run of ASCII digits in `token`; runs too long for `u64` saturate.
fn leading_number(token: &str) -> u64 {
    digit_run_regex()
        .find(token)
        .map_or(0, |digits| digits.as_str().parse::<u64>().unwrap_or(u64::MAX))
}

/// Clamp a parsed day count into the supported trip range.
#[must_use]
pub fn clamp_days(value: u64) -> u32 {
    let clamped = value.clamp(u64::from(MIN_TRIP_DAYS), u64::from(MAX_TRIP_DAYS));
    u32::try_from(clamped).unwrap_or(MAX_TRIP_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(set: &BTreeSet<String>) -> Vec<&str> {
        set.iter().map(String::as_str).collect()
    }

    #[test]
    fn empty_input_uses_defaults() {
        assert_eq!(parse_trip(""), TripRequest::default());
        assert_eq!(parse_trip("   ,, "), TripRequest::default());
    }

    #[test]
    fn emoji_and_day_suffix() {
        let request = parse_trip("🏖️ 📸 3d");
        assert_eq!(keywords(&request.activities), ["beach", "photo"]);
        assert!(request.climates.is_empty());
        assert_eq!(request.days, 3);
    }

    #[test]
    fn words_and_climate_emoji() {
        let request = parse_trip("hiking ❄️ 4d");
        assert_eq!(keywords(&request.activities), ["hiking"]);
        assert_eq!(keywords(&request.climates), ["cold"]);
        assert_eq!(request.days, 4);
    }

    #[test]
    fn commas_separate_tokens() {
        let request = parse_trip("city,rain,,5D");
        assert_eq!(keywords(&request.activities), ["city"]);
        assert_eq!(keywords(&request.climates), ["rain"]);
        assert_eq!(request.days, 5);
    }

    #[test]
    fn last_day_token_wins() {
        assert_eq!(parse_trip("2d beach 7").days, 7);
        assert_eq!(parse_trip("⏰5 beach 9d ⏱️2").days, 2);
    }

    #[test]
    fn clock_glyph_tokens_carry_days() {
        assert_eq!(parse_trip("⏱️3").days, 3);
        assert_eq!(parse_trip("⏰12").days, 12);
        let request = parse_trip("⏰");
        assert_eq!(request.days, DEFAULT_TRIP_DAYS);
        assert_eq!(keywords(&request.activities), ["⏰"]);
    }

    #[test]
    fn days_are_clamped() {
        assert_eq!(parse_trip("0d").days, 1);
        assert_eq!(parse_trip("61").days, 60);
        assert_eq!(parse_trip("99999999999999999999999d").days, 60);
    }

    #[test]
    fn non_numeric_day_like_tokens_are_words() {
        let request = parse_trip("3days -2 x5");
        assert_eq!(keywords(&request.activities), ["-2", "3days", "x5"]);
        assert_eq!(request.days, DEFAULT_TRIP_DAYS);
    }

    #[test]
    fn unknown_words_are_lowercased_activities() {
        let request = parse_trip("Surfing 2d");
        assert_eq!(keywords(&request.activities), ["surfing"]);
        assert_eq!(request.days, 2);
    }

    #[test]
    fn classify_reports_each_kind() {
        let vocabulary = Vocabulary::default_vocabulary();
        let catalog = Catalog::default_catalog();
        assert_eq!(classify_token("4d", vocabulary, catalog), Token::Days(4));
        assert_eq!(
            classify_token("STORM", vocabulary, catalog),
            Token::Climate("storm".to_string())
        );
        assert_eq!(
            classify_token("🎣", vocabulary, catalog),
            Token::Activity("fishing".to_string())
        );
    }
}
