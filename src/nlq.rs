//! Natural-language query parsing
//!
//! Translates free-text queries like "palindromic single word entries
//! longer than 2" into a [`FilterSet`] by fixed pattern detection on the
//! lowercased text. Deliberately not a grammar: no negation, no
//! disjunction, no numeric words.

use crate::filter::FilterSet;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static MIN_LENGTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"longer than (\d+)").expect("valid pattern"));
static MAX_LENGTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"shorter than (\d+)").expect("valid pattern"));
static CONTAINS_CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"containing character ['"]?([a-zA-Z])['"]?"#).expect("valid pattern"));

/// A natural query together with the filters read out of it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: FilterSet,
}

/// Parse a free-text query into a filter set.
///
/// Returns `None` for an empty query. Text that matches none of the known
/// patterns parses to an empty filter set (every record matches). Each
/// pattern is detected independently; matched filters combine via AND when
/// later applied.
pub fn parse_natural_query(query: &str) -> Option<InterpretedQuery> {
    if query.is_empty() {
        return None;
    }

    let text = query.to_lowercase();
    let mut filters = FilterSet::default();

    if text.contains("palindrome") || text.contains("palindromic") {
        filters.is_palindrome = Some(true);
    }
    if text.contains("single word") {
        filters.word_count = Some(1);
    }
    if let Some(caps) = MIN_LENGTH.captures(&text) {
        filters.min_length = caps[1].parse().ok();
    }
    if let Some(caps) = MAX_LENGTH.captures(&text) {
        filters.max_length = caps[1].parse().ok();
    }
    if let Some(caps) = CONTAINS_CHAR.captures(&text) {
        filters.contains_character = caps[1].chars().next();
    }

    Some(InterpretedQuery {
        original: query.to_string(),
        parsed_filters: filters,
    })
}
