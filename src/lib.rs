//! Command-line cleaner.
//!
//! Splits a free-form command line into arguments and flags,
//! re-quotes inline option values, and escapes shell metacharacters
//! so the result can be handed to a shell as is.
//!
//! # Quick start
//!
//! ```
//! assert_eq!(cmdclean::clean("grep --color=auto file"), r#"grep --color="auto" file"#);
//! assert_eq!(cmdclean::clean("echo a && b"), r"echo a \&\& b");
//! ```
//!
//! ## Step by step
//!
//! ```
//! use cmdclean::{TokenKind, join, rewrite, tokenize};
//!
//! let mut tokens = tokenize("run -n='v'");
//! assert_eq!(tokens[1].kind, TokenKind::ShortOptAssign);
//! rewrite(&mut tokens, '"');
//! assert_eq!(join(&tokens, " "), r#"run -n="v""#);
//! ```
//!
//! ## Configured cleaner
//!
//! ```
//! use cmdclean::Cleaner;
//!
//! let cleaner = Cleaner::new().with_quote('\'')?.with_separator(" ");
//! assert_eq!(cleaner.clean("cmd --name=x"), "cmd --name='x'");
//! # Ok::<(), cmdclean::Error>(())
//! ```

#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod cleaner;
pub mod joiner;
pub mod lexer;
pub mod reader;
pub mod rewrite;
pub mod token;

pub use cleaner::Cleaner;
pub use joiner::join;
pub use lexer::{State, Step, tokenize, tokenize_with};
pub use reader::Reader;
pub use rewrite::{METACHARACTERS, escape, escape_str, requote, rewrite};
pub use token::{Token, TokenKind};

/// Errors from configuring a [`Cleaner`] or streaming lines through it.
///
/// Cleaning a string never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Re-quote character would break the quoted value.
    #[error("invalid quote character {0:?}: must not be whitespace or a backslash")]
    InvalidQuote(char),
    /// Reading input or writing output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Clean `input` with the default quote and separator.
#[must_use]
pub fn clean(input: &str) -> String {
    Cleaner::new().clean(input)
}
