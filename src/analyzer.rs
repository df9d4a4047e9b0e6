//! String analysis
//!
//! Pure derivation of a [`StringRecord`] from raw text: content hash,
//! palindrome flag, word count, unique-character count, and the
//! character-frequency map. Everything except the `created_at` stamp is a
//! deterministic function of the input.

use crate::strings::types::{StringProperties, StringRecord};
use chrono::Utc;
use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// SHA-256 hex digest over the UTF-8 bytes of `value`.
///
/// This is the record's identity; callers use it to check for an existing
/// record before running the full analysis.
pub fn sha256_hex(value: &str) -> String {
    let digest = Sha256::digest(value.as_bytes());
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}

/// Analyze `value` into a content-addressed record with derived properties.
pub fn analyze(value: &str) -> StringRecord {
    let hash = sha256_hex(value);
    let frequency = character_frequency(value);

    StringRecord {
        id: hash.clone(),
        value: value.to_string(),
        properties: StringProperties {
            length: value.chars().count() as u64,
            is_palindrome: is_palindrome(value),
            unique_characters: frequency.len() as u64,
            word_count: word_count(value),
            sha256_hash: hash,
            character_frequency_map: frequency,
        },
        created_at: Utc::now(),
    }
}

/// Case-insensitive palindrome check over code points.
///
/// Punctuation and whitespace are significant: "race car" is not a
/// palindrome. The empty string is.
fn is_palindrome(value: &str) -> bool {
    let lowered: Vec<char> = value.to_lowercase().chars().collect();
    lowered.iter().eq(lowered.iter().rev())
}

/// Whitespace-delimited non-empty tokens. Empty or whitespace-only input
/// yields 0, never 1.
fn word_count(value: &str) -> u64 {
    value.split_whitespace().count() as u64
}

fn character_frequency(value: &str) -> HashMap<char, u64> {
    let mut map = HashMap::new();
    for ch in value.chars() {
        *map.entry(ch).or_insert(0) += 1;
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(sha256_hex("level"), sha256_hex("level"));
        assert_ne!(sha256_hex("level"), sha256_hex("Level"));
    }

    #[test]
    fn test_hash_known_vector() {
        // sha256("abc")
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_id_matches_properties_hash() {
        let record = analyze("hello world");
        assert_eq!(record.id, record.properties.sha256_hash);
        assert_eq!(record.id.len(), 64);
    }

    #[test]
    fn test_length_counts_code_points_not_bytes() {
        assert_eq!(analyze("héllo").properties.length, 5);
        assert_eq!(analyze("日本語").properties.length, 3);
        assert_eq!(analyze("").properties.length, 0);
    }

    #[test]
    fn test_palindrome_cases() {
        assert!(analyze("Racecar").properties.is_palindrome);
        assert!(!analyze("race car").properties.is_palindrome);
        assert!(analyze("").properties.is_palindrome);
        assert!(analyze("a").properties.is_palindrome);
        // punctuation is significant
        assert!(!analyze("A man, a plan").properties.is_palindrome);
    }

    #[test]
    fn test_word_count() {
        assert_eq!(analyze("").properties.word_count, 0);
        assert_eq!(analyze("   ").properties.word_count, 0);
        assert_eq!(analyze("a b  c").properties.word_count, 3);
        assert_eq!(analyze("single").properties.word_count, 1);
        assert_eq!(analyze("  padded  words  ").properties.word_count, 2);
    }

    #[test]
    fn test_character_frequency() {
        let props = analyze("aab").properties;
        assert_eq!(props.character_frequency_map.len(), 2);
        assert_eq!(props.character_frequency_map[&'a'], 2);
        assert_eq!(props.character_frequency_map[&'b'], 1);
    }

    #[test]
    fn test_unique_characters() {
        assert_eq!(analyze("aab").properties.unique_characters, 2);
        assert_eq!(analyze("abcabc").properties.unique_characters, 3);
        assert_eq!(analyze("").properties.unique_characters, 0);
    }

    #[test]
    fn test_analysis_is_stable_across_calls() {
        let a = analyze("stable");
        let b = analyze("stable");
        assert_eq!(a.id, b.id);
        assert_eq!(a.properties, b.properties);
    }
}
