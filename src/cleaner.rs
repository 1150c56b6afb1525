use std::io::{BufRead, Write};

use log::debug;

use crate::Error;
use crate::joiner::join;
use crate::lexer::{Step, tokenize_with};
use crate::rewrite::rewrite;

/// Cleaning configuration: re-quote character and join separator.
///
/// A `Cleaner` holds no state between calls; cleaning borrows it
/// immutably, so one value can be shared across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleaner {
    quote: char,
    separator: String,
}

impl Cleaner {
    pub const DEFAULT_QUOTE: char = '"';
    pub const DEFAULT_SEPARATOR: &'static str = " ";

    /// Create a cleaner with `"` quoting and single-space joins.
    #[must_use]
    pub fn new() -> Self {
        Self {
            quote: Self::DEFAULT_QUOTE,
            separator: Self::DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Use `quote` around re-quoted option values.
    ///
    /// Whitespace and backslash are rejected.
    pub fn with_quote(mut self, quote: char) -> Result<Self, Error> {
        if quote.is_whitespace() || quote == '\\' {
            return Err(Error::InvalidQuote(quote));
        }
        self.quote = quote;
        Ok(self)
    }

    /// Join tokens with `separator` instead of a single space.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    #[must_use]
    pub const fn quote(&self) -> char {
        self.quote
    }

    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Tokenize, re-quote, escape, and join `input`.
    #[must_use]
    pub fn clean(&self, input: &str) -> String {
        self.clean_with(input, |_| {})
    }

    /// Like [`Cleaner::clean`], reporting every lexer transition to `observer`.
    pub fn clean_with<F>(&self, input: &str, observer: F) -> String
    where
        F: FnMut(&Step),
    {
        let mut tokens = tokenize_with(input, observer);
        rewrite(&mut tokens, self.quote);
        join(&tokens, &self.separator)
    }

    /// Clean every line of `input` and write one cleaned line per input line.
    ///
    /// Returns the number of lines processed.
    pub fn clean_lines<R, W>(&self, input: R, mut output: W) -> Result<usize, Error>
    where
        R: BufRead,
        W: Write,
    {
        let mut count = 0;
        for line in input.lines() {
            let line = line?;
            let cleaned = self.clean(&line);
            debug!("clean event=line dirty={line:?} clean={cleaned:?}");
            writeln!(output, "{cleaned}")?;
            count += 1;
        }
        output.flush()?;
        Ok(count)
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cleaner = Cleaner::default();
        assert_eq!(cleaner.quote(), '"');
        assert_eq!(cleaner.separator(), " ");
    }

    #[test]
    fn custom_quote() {
        let cleaner = Cleaner::new().with_quote('\'').expect("valid quote");
        assert_eq!(cleaner.clean("run -n=v"), "run -n='v'");
    }

    #[test]
    fn rejects_bad_quote() {
        assert!(matches!(
            Cleaner::new().with_quote(' '),
            Err(Error::InvalidQuote(' '))
        ));
        assert!(matches!(
            Cleaner::new().with_quote('\\'),
            Err(Error::InvalidQuote('\\'))
        ));
    }

    #[test]
    fn custom_separator() {
        let cleaner = Cleaner::new().with_separator("\t");
        assert_eq!(cleaner.clean("a b c"), "a\tb\tc");
    }

    #[test]
    fn separator_only_between_tokens() {
        let cleaner = Cleaner::new().with_separator(",");
        assert_eq!(cleaner.clean("a b"), "a,b");
        assert_eq!(cleaner.clean("a '' b"), "a,b");
    }

    #[test]
    fn clean_with_observer() {
        let mut count = 0;
        let out = Cleaner::new().clean_with("ls -la", |_| count += 1);
        assert_eq!(out, "ls -la");
        assert_eq!(count, "ls -la ".chars().count());
    }

    #[test]
    fn lines() {
        let input = "echo a && b\ngrep --color=auto x\n\n";
        let mut out = Vec::new();
        let n = Cleaner::new()
            .clean_lines(input.as_bytes(), &mut out)
            .expect("clean lines");
        assert_eq!(n, 3);
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "echo a \\&\\& b\ngrep --color=\"auto\" x\n\n"
        );
    }
}
