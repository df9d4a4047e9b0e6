//! Wire and storage types for string records
//!
//! Field names follow the persisted/wire format exactly (snake_case), so
//! these types serve both the HTTP responses and the JSON snapshot on disk.

use crate::filter::FilterSet;
use crate::nlq::InterpretedQuery;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Properties derived from a string's value, computed once at creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringProperties {
    /// Count of Unicode code points (not bytes)
    pub length: u64,
    /// Whether the lowercased code-point sequence equals its own reverse
    pub is_palindrome: bool,
    /// Count of distinct code points
    pub unique_characters: u64,
    /// Whitespace-delimited non-empty tokens
    pub word_count: u64,
    /// Same value as the record id
    pub sha256_hash: String,
    /// Distinct code point -> occurrence count
    pub character_frequency_map: HashMap<char, u64>,
}

/// A stored string with its content-addressed identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringRecord {
    /// SHA-256 hex digest of `value`; doubles as primary key
    pub id: String,
    /// The original text, exactly as submitted
    pub value: String,
    pub properties: StringProperties,
    /// Creation timestamp, fixed thereafter
    pub created_at: DateTime<Utc>,
}

/// Response envelope for `GET /strings`
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub filters_applied: FilterSet,
}

/// Response envelope for `GET /strings/natural`
#[derive(Debug, Serialize)]
pub struct NaturalListResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ApiErrorDetail,
}

/// API error detail
#[derive(Debug, Serialize)]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
}

impl ApiError {
    fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            error: ApiErrorDetail {
                code: code.to_string(),
                message: message.into(),
            },
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new("CONFLICT", message)
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new("UNPROCESSABLE", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer;

    #[test]
    fn test_record_serialization_round_trip() {
        let record = analyzer::analyze("level");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"value\":\"level\""));
        assert!(json.contains("\"is_palindrome\":true"));

        let parsed: StringRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_frequency_map_keys_are_single_char_strings() {
        let record = analyzer::analyze("aab");
        let json = serde_json::to_value(&record).unwrap();
        let map = &json["properties"]["character_frequency_map"];
        assert_eq!(map["a"], 2);
        assert_eq!(map["b"], 1);
    }

    #[test]
    fn test_created_at_is_rfc3339() {
        let record = analyzer::analyze("x");
        let json = serde_json::to_value(&record).unwrap();
        let ts = json["created_at"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(ts).is_ok());
    }

    #[test]
    fn test_api_error_not_found() {
        let err = ApiError::not_found("String does not exist in the system");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"code\":\"NOT_FOUND\""));
        assert!(json.contains("does not exist"));
    }

    #[test]
    fn test_api_error_conflict() {
        let err = ApiError::conflict("String already exists");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"code\":\"CONFLICT\""));
    }
}
