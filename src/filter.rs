//! Filter set and filter engine
//!
//! Raw query-string values are parsed into a strongly typed [`FilterSet`]
//! at the HTTP boundary; [`apply_filters`] then operates only on validated
//! types and cannot fail. All present predicates combine with logical AND.

use crate::error::{Error, Result};
use crate::strings::types::StringRecord;
use serde::Serialize;
use std::collections::HashMap;

/// A validated set of record predicates. Absent filters are absent, not
/// defaulted, and are omitted from serialized output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl FilterSet {
    /// Parse raw query parameters into a validated filter set.
    ///
    /// Unrecognized keys are ignored. `is_palindrome` treats the literal
    /// `"true"` as true and anything else as false. The numeric filters
    /// reject non-integer values, and `contains_character` requires exactly
    /// one code point.
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self> {
        let mut filters = Self::default();

        if let Some(raw) = params.get("is_palindrome") {
            filters.is_palindrome = Some(raw == "true");
        }
        if let Some(raw) = params.get("min_length") {
            filters.min_length = Some(parse_integer("min_length", raw)?);
        }
        if let Some(raw) = params.get("max_length") {
            filters.max_length = Some(parse_integer("max_length", raw)?);
        }
        if let Some(raw) = params.get("word_count") {
            filters.word_count = Some(parse_integer("word_count", raw)?);
        }
        if let Some(raw) = params.get("contains_character") {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => filters.contains_character = Some(ch),
                _ => {
                    return Err(Error::Validation(
                        "contains_character must be a single character".to_string(),
                    ))
                }
            }
        }

        Ok(filters)
    }

    /// Whether no predicate is present
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Both length bounds present and impossible to satisfy together.
    ///
    /// Only the natural-language path rejects this; directly supplied
    /// contradictory bounds just produce an empty result set.
    pub fn has_length_conflict(&self) -> bool {
        match (self.min_length, self.max_length) {
            (Some(min), Some(max)) => min > max,
            _ => false,
        }
    }
}

fn parse_integer(name: &str, raw: &str) -> Result<u64> {
    raw.parse::<u64>()
        .map_err(|_| Error::Validation(format!("{} must be an integer", name)))
}

/// Apply all present predicates to `records`, AND-composed.
///
/// Returns a new sequence preserving the relative order of the input; the
/// input itself is never mutated.
pub fn apply_filters(records: &[StringRecord], filters: &FilterSet) -> Vec<StringRecord> {
    records
        .iter()
        .filter(|r| {
            if let Some(want) = filters.is_palindrome {
                if r.properties.is_palindrome != want {
                    return false;
                }
            }
            if let Some(min) = filters.min_length {
                if r.properties.length < min {
                    return false;
                }
            }
            if let Some(max) = filters.max_length {
                if r.properties.length > max {
                    return false;
                }
            }
            if let Some(count) = filters.word_count {
                if r.properties.word_count != count {
                    return false;
                }
            }
            if let Some(ch) = filters.contains_character {
                if !r.properties.character_frequency_map.contains_key(&ch) {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}
