//! Request key derivation for declared field names (`maximumPrice` -> `maximum_price`).

use regex::Regex;
use std::sync::LazyLock;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("valid non-word pattern"));

static UNDERSCORE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_{2,}").expect("valid underscore pattern"));

/// Derives the snake-case request key for a declared field name.
///
/// Whitespace is trimmed, every character outside `[A-Za-z0-9_]` becomes `_`, an `_` is
/// inserted before each uppercase letter that follows a word character, underscore runs
/// collapse to one, and the result is lowercased. Applying it twice changes nothing.
pub fn field_key(name: &str) -> String {
    let name = NON_WORD.replace_all(name.trim(), "_");

    // After the replacement every character is a word character, so any uppercase
    // letter past the first position starts a new word.
    let mut split = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            split.push('_');
        }
        split.push(c);
    }

    UNDERSCORE_RUN.replace_all(&split, "_").to_ascii_lowercase()
}
