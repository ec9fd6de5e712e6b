//! ASCII word normalization
//!
//! Classification is byte-oriented ASCII: non-ASCII letters are not
//! recognized as alphabetic and are stripped along with digits and symbols.
//!
//! Two deliberately different behaviors coexist, matching how the graph is
//! queried versus how it is built:
//!
//! - [`normalize`] deletes non-letters in place, so `don't` becomes `dont`.
//!   Used on query-side inputs (bridge endpoints, path endpoints).
//! - [`tokenize`] first replaces punctuation and line breaks with spaces and
//!   only then splits, so `don't` contributes the two tokens `don` and `t`.
//!   Used when ingesting text into the graph and for TF-IDF counting.

/// Normalize a single token: keep ASCII letters, lowercased; delete the rest.
///
/// Pure and total: never fails, may return an empty string, which callers
/// must treat as "not a word" and skip.
pub fn normalize(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Split raw text into normalized, non-empty tokens in document order.
///
/// Every ASCII punctuation character, newline, and carriage return becomes a
/// space before the whitespace split; each resulting token is then run
/// through [`normalize`] and empty results are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    let spaced: String = text
        .chars()
        .map(|c| {
            if c.is_ascii_punctuation() || c == '\n' || c == '\r' {
                ' '
            } else {
                c
            }
        })
        .collect();

    spaced
        .split_whitespace()
        .map(normalize)
        .filter(|word| !word.is_empty())
        .collect()
}
