//! Value rewriting passes applied to lexed tokens before they are joined.
//!
//! Two passes run per token, always in this order:
//!
//! 1. [`requote`] wraps the value of `-x=v` / `--flag=v` in quotes.
//! 2. [`escape`] prefixes shell metacharacters with a backslash,
//!    leaving existing backslash pairs untouched.

use crate::reader::Reader;
use crate::token::Token;

/// Characters the shell would otherwise interpret.
pub const METACHARACTERS: [char; 9] = ['!', '#', '<', '>', '(', ')', '|', '&', '*'];

#[must_use]
pub fn is_metachar(ch: char) -> bool {
    METACHARACTERS.contains(&ch)
}

/// Run both passes over every token, in sequence order.
pub fn rewrite(tokens: &mut [Token], quote: char) {
    for token in tokens {
        requote(token, quote);
        escape(token);
    }
}

/// Wrap everything after the first `=` of an assign token in `quote`.
///
/// Other kinds, and assign tokens without `=`, are left alone.
pub fn requote(token: &mut Token, quote: char) {
    if !token.kind.is_assign() {
        return;
    }
    if let Some((name, value)) = token.text.split_once('=') {
        token.text = format!("{name}={quote}{value}{quote}");
    }
}

pub fn escape(token: &mut Token) {
    token.text = escape_str(&token.text);
}

/// Backslash-escape metacharacters in `text`.
///
/// A backslash and the character after it are copied as a pair; a
/// trailing lone backslash is copied as is.
#[must_use]
pub fn escape_str(text: &str) -> String {
    let mut reader = Reader::new(text);
    let mut out = String::with_capacity(text.len());

    while let Some(ch) = reader.read() {
        if ch == '\\' {
            out.push(ch);
            if let Some(next) = reader.read() {
                out.push(next);
            }
            continue;
        }
        if is_metachar(ch) {
            out.push('\\');
        }
        out.push(ch);
    }

    out
}
