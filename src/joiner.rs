//! Reassembles rewritten tokens into a single command line.

use crate::token::Token;

/// Join token texts in order with `separator` between them.
///
/// Empty tokens (from `""` or `''`) are skipped so no separator ever
/// doubles up, and surrounding whitespace is trimmed.
#[must_use]
pub fn join(tokens: &[Token], separator: &str) -> String {
    let texts: Vec<&str> = tokens
        .iter()
        .map(|t| t.text.as_str())
        .filter(|text| !text.is_empty())
        .collect();

    texts.join(separator).trim().to_string()
}
