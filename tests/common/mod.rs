#![allow(dead_code)]

use cmdclean::{TokenKind, clean, tokenize};

/// Assert that cleaning `input` produces exactly `expected`.
pub fn assert_clean(input: &str, expected: &str) {
    let output = clean(input);
    assert_eq!(
        output, expected,
        "clean mismatch:\n--- input ---\n{input}\n--- expected ---\n{expected}\n--- got ---\n{output}"
    );
}

/// Kinds and texts of the tokens lexed from `input`.
pub fn lexed(input: &str) -> Vec<(TokenKind, String)> {
    tokenize(input)
        .into_iter()
        .map(|t| (t.kind, t.text))
        .collect()
}
