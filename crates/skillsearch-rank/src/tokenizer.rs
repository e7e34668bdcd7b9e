//! Query and document tokenization

use regex::Regex;
use std::sync::OnceLock;

static SEPARATOR_RE: OnceLock<Regex> = OnceLock::new();

/// Tokens shorter than this (in characters) are dropped.
pub const MIN_TOKEN_CHARS: usize = 3;

/// Split text into lower-cased word tokens.
///
/// Anything that is not a letter, digit or whitespace acts as a separator,
/// so `"Cyber-Punk_2077!!"` yields `["cyber", "punk", "2077"]`. Duplicates are
/// kept because term frequency matters for scoring.
pub fn tokenize(text: &str) -> Vec<String> {
    let re = SEPARATOR_RE.get_or_init(|| Regex::new(r"[^\p{L}\p{N}\s]").unwrap());
    let lowered = text.to_lowercase();
    re.replace_all(&lowered, " ")
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}
