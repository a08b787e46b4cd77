//! Candidate scoring and selection
//!
//! Ranks filtered candidates and picks three. Selection strategies run in
//! priority order until the quota is filled: a strict word-disjoint pass, a
//! relaxed pass allowing overlap, then synthesized fallback phrases.

use std::collections::HashSet;

use super::candidates::normalize_word;
use super::wordlists::{EMOTION_WORDS, FALLBACK_TAGLINES};

/// Number of tagline phrases selected
pub const SELECTION_COUNT: usize = 3;

/// Length bias weight; keeps phrase length the dominant ranking signal
const LENGTH_WEIGHT: i32 = 10;

/// Ideal phrase length in words
const IDEAL_WORD_COUNT: i32 = 4;

/// Score a candidate: prefer four-word phrases, break ties on emotion words
fn score(candidate: &str) -> i32 {
    let words: Vec<String> = candidate.split_whitespace().map(normalize_word).collect();
    let word_count = words.len() as i32;
    let emotion_count = words
        .iter()
        .filter(|word| EMOTION_WORDS.contains(&word.as_str()))
        .count() as i32;

    -(word_count - IDEAL_WORD_COUNT).abs() * LENGTH_WEIGHT + emotion_count
}

/// Select up to three candidates, always returning exactly three phrases
pub fn select_taglines(candidates: Vec<String>) -> Vec<String> {
    let mut ranked = dedup_case_insensitive(candidates);
    // Stable sort keeps first-seen order for equal scores
    ranked.sort_by(|a, b| score(b).cmp(&score(a)));

    let mut selected = Vec::with_capacity(SELECTION_COUNT);
    let stages: &[fn(&[String], &mut Vec<String>)] =
        &[disjoint_pass, relaxed_pass, fallback_pass];

    for stage in stages {
        if selected.len() >= SELECTION_COUNT {
            break;
        }
        stage(&ranked, &mut selected);
    }

    selected
}

/// Dedup case-insensitively, preserving first-seen casing and order
fn dedup_case_insensitive(candidates: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut deduped = candidates;
    deduped.retain(|candidate| seen.insert(candidate.to_lowercase()));
    deduped
}

/// Greedy pass: accept a candidate only if it shares no word with the
/// already-accepted set
fn disjoint_pass(ranked: &[String], selected: &mut Vec<String>) {
    let mut used_words: HashSet<String> = selected
        .iter()
        .flat_map(|phrase| phrase.split_whitespace().map(normalize_word))
        .collect();

    for candidate in ranked {
        if selected.len() >= SELECTION_COUNT {
            return;
        }
        let words: Vec<String> = candidate.split_whitespace().map(normalize_word).collect();
        if words.iter().any(|word| used_words.contains(word)) {
            continue;
        }
        used_words.extend(words);
        selected.push(candidate.clone());
    }
}

/// Relaxed pass: fill remaining slots allowing word overlap, skipping exact
/// duplicates of already-selected phrases
fn relaxed_pass(ranked: &[String], selected: &mut Vec<String>) {
    for candidate in ranked {
        if selected.len() >= SELECTION_COUNT {
            return;
        }
        if selected
            .iter()
            .any(|chosen| chosen.eq_ignore_ascii_case(candidate))
        {
            continue;
        }
        selected.push(candidate.clone());
    }
}

/// Last resort: synthesized phrases, never adding the same phrase twice
fn fallback_pass(_ranked: &[String], selected: &mut Vec<String>) {
    for fallback in FALLBACK_TAGLINES {
        if selected.len() >= SELECTION_COUNT {
            return;
        }
        if selected
            .iter()
            .any(|chosen| chosen.eq_ignore_ascii_case(fallback))
        {
            continue;
        }
        selected.push((*fallback).to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_prefers_four_words() {
        assert!(score("one two three four") > score("one two three"));
        assert!(score("one two three four") > score("one two three four five"));
    }

    #[test]
    fn test_emotion_words_break_ties() {
        // Both are three words; "grow" and "win" are emotion words
        assert!(score("grow and win") > score("lift and carry"));
    }

    #[test]
    fn test_disjoint_selection_from_disjoint_pool() {
        let selected = select_taglines(vec![
            "Decide with daylight".to_string(),
            "Every acre accounted".to_string(),
            "Figures before footsteps".to_string(),
            "Signals over guesses".to_string(),
        ]);
        assert_eq!(selected.len(), 3);
        for (i, a) in selected.iter().enumerate() {
            for b in selected.iter().skip(i + 1) {
                let words_a: HashSet<String> =
                    a.split_whitespace().map(normalize_word).collect();
                assert!(
                    !b.split_whitespace().any(|w| words_a.contains(&normalize_word(w))),
                    "'{}' and '{}' share a word",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_overlapping_pool_falls_back_to_relaxed_pass() {
        // Every candidate shares "value"; strict pass can only take one
        let selected = select_taglines(vec![
            "grow real value daily".to_string(),
            "value beyond the price".to_string(),
            "honest value for builders".to_string(),
        ]);
        assert_eq!(selected.len(), 3);
        assert!(selected.contains(&"grow real value daily".to_string()));
    }

    #[test]
    fn test_dedup_keeps_first_seen_casing() {
        let selected = select_taglines(vec![
            "Grow Real Value Daily".to_string(),
            "grow real value daily".to_string(),
        ]);
        assert!(selected.contains(&"Grow Real Value Daily".to_string()));
        assert!(!selected.contains(&"grow real value daily".to_string()));
    }

    #[test]
    fn test_empty_pool_yields_fallbacks() {
        let selected = select_taglines(vec![]);
        assert_eq!(
            selected,
            vec![
                "grow your value".to_string(),
                "achieve your goals".to_string(),
                "own your story".to_string(),
            ]
        );
    }

    #[test]
    fn test_fallback_skips_already_selected_duplicate() {
        let selected = select_taglines(vec!["grow your value".to_string()]);
        assert_eq!(selected.len(), 3);
        let lowered: Vec<String> = selected.iter().map(|s| s.to_lowercase()).collect();
        let unique: HashSet<&String> = lowered.iter().collect();
        assert_eq!(unique.len(), 3);
    }
}
