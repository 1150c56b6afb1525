use std::fmt;

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Placeholder kind. The lexer never emits it.
    #[default]
    Unknown,
    /// Positional value, quoted or bare.
    Arg,
    /// Short flag without a value (`-x`).
    ShortOpt,
    /// Short flag with an inline value (`-x=v`).
    ShortOptAssign,
    /// Long flag without a value (`--flag`).
    LongOpt,
    /// Long flag with an inline value (`--flag=v`).
    LongOptAssign,
}

impl TokenKind {
    /// Whether the token carries an inline `=value`.
    #[must_use]
    pub const fn is_assign(self) -> bool {
        matches!(self, Self::ShortOptAssign | Self::LongOptAssign)
    }

    /// Stable lowercase name used in trace output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Arg => "arg",
            Self::ShortOpt => "short-opt",
            Self::ShortOptAssign => "short-opt-assign",
            Self::LongOpt => "long-opt",
            Self::LongOptAssign => "long-opt-assign",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single classified piece of a command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<token kind=\"{}\" text=\"{}\">", self.kind, self.text)
    }
}
