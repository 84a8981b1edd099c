use crate::vocabulary::END_OF_WORD;

/// Splits a word into single-character symbols followed by the `</w>` marker.
pub fn word_to_symbols(word: &str) -> Vec<String> {
    let mut symbols: Vec<String> = word.chars().map(|c| c.to_string()).collect();
    symbols.push(END_OF_WORD.to_string());
    symbols
}

/// Replaces every non-overlapping occurrence of `left, right` with `merged`.
///
/// The cursor jumps past each replacement, so a freshly merged symbol is never
/// matched again within the same pass.
pub fn merge_symbols(symbols: &[String], left: &str, right: &str, merged: &str) -> Vec<String> {
    let mut result = Vec::with_capacity(symbols.len());
    let mut i = 0;

    while i < symbols.len() {
        if i + 1 < symbols.len() && symbols[i] == left && symbols[i + 1] == right {
            result.push(merged.to_string());
            i += 2;
        } else {
            result.push(symbols[i].clone());
            i += 1;
        }
    }

    result
}
