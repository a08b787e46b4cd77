//! Candidate phrase extraction from raw model output
//!
//! Raw tagline replies arrive with no guaranteed structure: newlines, bullet
//! lists, numbering, separators of every kind. This module cuts the text into
//! cleaned candidate phrases in appearance order.

/// Characters that terminate one candidate and start the next
fn is_separator(c: char) -> bool {
    matches!(
        c,
        '•' | '●' | '▪' | '‣' | '·' | '*' | '|' | '/' | ';' | ',' | '—' | '–' | '.' | '!' | '?'
    )
}

/// Characters removed from within a candidate phrase
fn is_stripped(c: char) -> bool {
    matches!(
        c,
        '"' | '\'' | '“' | '”' | '‘' | '’' | '`' | '[' | ']' | '(' | ')' | '{' | '}' | '<' | '>'
            | '-'
    )
}

/// Split raw text into cleaned, non-empty candidate phrases
pub fn split_candidates(raw: &str) -> Vec<String> {
    let flattened = raw.replace(['\r', '\n'], " ");

    flattened
        .split(is_separator)
        .map(clean_fragment)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Strip quote/bracket/hyphen characters and collapse whitespace runs
fn clean_fragment(fragment: &str) -> String {
    let stripped: String = fragment.chars().filter(|c| !is_stripped(*c)).collect();
    normalize_whitespace(&stripped)
}

/// Collapse whitespace runs to single spaces and trim
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a word for set membership checks (lowercase, alphanumeric only)
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}
