//! Tokenization shared by the lexical index and the coverage verifier.
//!
//! A token is a whitespace-separated piece, lower-cased, with leading and
//! trailing punctuation trimmed, kept only if what remains is entirely
//! alphanumeric and longer than 2 characters.

use std::collections::BTreeSet;

/// Minimum token length (exclusive), in characters.
const MIN_TOKEN_CHARS: usize = 2;

/// Ordered token stream of `text`.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter_map(normalize_token)
        .collect()
}

/// Distinct tokens of `text`.
pub fn term_set(text: &str) -> BTreeSet<String> {
    tokenize(text).into_iter().collect()
}

/// Adjacent token pairs of `text`, joined by a single space.
pub fn bigram_set(text: &str) -> BTreeSet<String> {
    tokenize(text)
        .windows(2)
        .map(|pair| format!("{} {}", pair[0], pair[1]))
        .collect()
}

fn normalize_token(raw: &str) -> Option<String> {
    let trimmed = raw.trim_matches(|c: char| !c.is_alphanumeric());
    if trimmed.chars().count() > MIN_TOKEN_CHARS && trimmed.chars().all(char::is_alphanumeric) {
        Some(trimmed.to_string())
    } else {
        None
    }
}
