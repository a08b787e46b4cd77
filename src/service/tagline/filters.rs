//! Candidate filtering: buzzword rejection, brand stripping, word window

use std::collections::HashSet;

use super::candidates::{normalize_whitespace, normalize_word};
use super::wordlists::BUZZWORDS;

/// Minimum words a candidate must keep to stay eligible
pub const MIN_WORDS: usize = 3;

/// Maximum words kept per candidate (longer phrases are truncated)
pub const MAX_WORDS: usize = 5;

/// Tokenize the free-form competitor list into lowercase brand tokens
pub fn brand_tokens(brand_list: &str) -> HashSet<String> {
    brand_list
        .split([',', ';'])
        .flat_map(str::split_whitespace)
        .map(normalize_word)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Apply buzzword rejection, brand stripping, and the word-count window
pub fn apply_filters(candidates: Vec<String>, brands: &HashSet<String>) -> Vec<String> {
    candidates
        .into_iter()
        .filter_map(|candidate| filter_candidate(candidate, brands))
        .collect()
}

fn filter_candidate(candidate: String, brands: &HashSet<String>) -> Option<String> {
    if contains_buzzword(&candidate) {
        tracing::debug!(candidate = %candidate, "Rejecting buzzword candidate");
        return None;
    }

    let stripped = strip_brand_words(&candidate, brands);
    if stripped.is_empty() {
        // Brand-only candidates are dropped, not padded
        tracing::debug!(candidate = %candidate, "Candidate emptied by brand stripping");
        return None;
    }

    let words: Vec<&str> = stripped.split_whitespace().collect();
    if words.len() < MIN_WORDS {
        return None;
    }
    if words.len() > MAX_WORDS {
        return Some(words[..MAX_WORDS].join(" "));
    }

    Some(stripped)
}

/// True if any word of the candidate matches the static buzzword table
fn contains_buzzword(candidate: &str) -> bool {
    candidate
        .split_whitespace()
        .map(normalize_word)
        .any(|word| BUZZWORDS.contains(&word.as_str()))
}

/// Remove every word matching a brand token, then re-clean whitespace
fn strip_brand_words(candidate: &str, brands: &HashSet<String>) -> String {
    if brands.is_empty() {
        return normalize_whitespace(candidate);
    }

    let kept: Vec<&str> = candidate
        .split_whitespace()
        .filter(|word| !brands.contains(&normalize_word(word)))
        .collect();

    normalize_whitespace(&kept.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_tokens_from_free_text() {
        let brands = brand_tokens("ACME, Globex Corp;  initech");
        assert!(brands.contains("acme"));
        assert!(brands.contains("globex"));
        assert!(brands.contains("corp"));
        assert!(brands.contains("initech"));
        assert_eq!(brands.len(), 4);
    }

    #[test]
    fn test_buzzword_candidate_rejected() {
        let out = apply_filters(
            vec!["The most innovative platform around".to_string()],
            &HashSet::new(),
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_brand_words_stripped_case_insensitively() {
        let brands = brand_tokens("ACME");
        let out = apply_filters(vec!["acme beats the market daily".to_string()], &brands);
        assert_eq!(out, vec!["beats the market daily"]);
    }

    #[test]
    fn test_brand_only_candidate_discarded() {
        let brands = brand_tokens("ACME Globex");
        let out = apply_filters(vec!["ACME Globex".to_string()], &brands);
        assert!(out.is_empty());
    }

    #[test]
    fn test_short_candidates_dropped() {
        let out = apply_filters(vec!["two words".to_string()], &HashSet::new());
        assert!(out.is_empty());
    }

    #[test]
    fn test_long_candidates_truncated_to_five_words() {
        let out = apply_filters(
            vec!["one two three four five six seven".to_string()],
            &HashSet::new(),
        );
        assert_eq!(out, vec!["one two three four five"]);
    }

    #[test]
    fn test_brand_strip_can_drop_below_minimum() {
        let brands = brand_tokens("ACME Globex");
        let out = apply_filters(vec!["ACME beats Globex daily".to_string()], &brands);
        // "beats daily" is only two words after stripping
        assert!(out.is_empty());
    }
}
