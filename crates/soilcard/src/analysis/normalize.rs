use std::sync::LazyLock;

use regex::Regex;

/// Only a bare `6,5`; a spaced comma separates list items.
static RE_COMMA_DECIMAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d),(\d)").unwrap());
static RE_DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s.\-:=()%/]").unwrap());
static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
/// At least one space around the dot, so already-joined decimals never match.
static RE_SPLIT_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d)(?: \. ?| ?\. )(\d)").unwrap());

/// Cleans recognized text before pattern matching.
///
/// Comma decimals become dots, characters outside the allow-list become
/// spaces, whitespace runs collapse, decimals split by stray spaces
/// (`6 . 8`) are rejoined, and the result is lowercased and trimmed.
/// Applying it twice gives the same string as applying it once.
pub fn normalize_text(raw: &str) -> String {
    let text = RE_COMMA_DECIMAL.replace_all(raw, "$1.$2");
    let text = RE_DISALLOWED.replace_all(&text, " ");
    let text = text.to_lowercase();
    let mut text = RE_WHITESPACE.replace_all(&text, " ").into_owned();

    // Matches can't overlap, so `6 . 8 . 9` needs a second pass for `8 . 9`.
    loop {
        let repaired = RE_SPLIT_DECIMAL.replace_all(&text, "$1.$2");
        if repaired == text {
            break;
        }
        text = repaired.into_owned();
    }

    text.trim().to_string()
}
