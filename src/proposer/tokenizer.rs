use crate::partition::range::Range;

use regex::Regex;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z]+\b").expect("word pattern is valid"));

/// Lower-cased alphabetic words of `line`, in order, duplicates kept.
pub fn tokenize_line(line: &str) -> Vec<String> {
    WORD.find_iter(&line.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Keeps the tokens whose first letter lies in `range`, preserving order.
pub fn match_tokens(tokens: Vec<String>, range: &Range) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|token| range.contains(token))
        .collect()
}
