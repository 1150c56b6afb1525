use std::fmt;

use log::trace;

use crate::reader::Reader;
use crate::token::{Token, TokenKind};

/// Lexer state. Each variant names the shape consumed so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Between tokens.
    Start,
    /// `-`
    DashSeen,
    /// `-x`
    ShortOptName,
    /// `-x=`
    ShortOptEq,
    /// `-x="`
    ShortOptEqDquote,
    /// `-x='`
    ShortOptEqSquote,
    /// `--`
    DoubleDashSeen,
    /// `--flag`
    LongOptName,
    /// `--flag=`
    LongOptEq,
    /// `--flag="`
    LongOptEqDquote,
    /// `--flag='`
    LongOptEqSquote,
    /// Inside `"..."`.
    DquoteArg,
    /// Inside `'...'`.
    SquoteArg,
    /// Unquoted word.
    BareArg,
}

impl State {
    /// Stable lowercase name used in trace output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::DashSeen => "dash",
            Self::ShortOptName => "short-opt",
            Self::ShortOptEq => "short-opt-eq",
            Self::ShortOptEqDquote => "short-opt-eq-dquote",
            Self::ShortOptEqSquote => "short-opt-eq-squote",
            Self::DoubleDashSeen => "double-dash",
            Self::LongOptName => "long-opt",
            Self::LongOptEq => "long-opt-eq",
            Self::LongOptEqDquote => "long-opt-eq-dquote",
            Self::LongOptEqSquote => "long-opt-eq-squote",
            Self::DquoteArg => "dquote-arg",
            Self::SquoteArg => "squote-arg",
            Self::BareArg => "bare-arg",
        }
    }

    /// Whether whitespace is literal text in this state.
    #[must_use]
    pub const fn is_quoted(self) -> bool {
        matches!(
            self,
            Self::ShortOptEqDquote
                | Self::ShortOptEqSquote
                | Self::LongOptEqDquote
                | Self::LongOptEqSquote
                | Self::DquoteArg
                | Self::SquoteArg
        )
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One lexer transition, reported to the observer for every consumed
/// character.
///
/// The character after a backslash gets its own step with `from == to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub from: State,
    pub ch: char,
    pub to: State,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} -> {}", self.from, self.ch, self.to)
    }
}

/// Split a command line into classified tokens.
///
/// Quote delimiters are consumed, backslash pairs are kept verbatim,
/// and an unterminated quoted fragment is dropped.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    tokenize_with(input, |_| {})
}

/// Like [`tokenize`], reporting every transition to `observer`.
pub fn tokenize_with<F>(input: &str, mut observer: F) -> Vec<Token>
where
    F: FnMut(&Step),
{
    Lexer::new(input).run(&mut observer)
}

/// Unquoted whitespace ends a token.
fn is_blank(ch: char) -> bool {
    ch.is_whitespace()
}

struct Lexer {
    reader: Reader,
    /// Length of the real input; the character at this index is the
    /// synthetic trailing blank.
    limit: usize,
    state: State,
    buffer: String,
    tokens: Vec<Token>,
}

impl Lexer {
    fn new(input: &str) -> Self {
        let mut src = String::with_capacity(input.len() + 1);
        src.push_str(input);
        src.push(' ');
        let reader = Reader::new(&src);
        Self {
            limit: reader.len() - 1,
            reader,
            state: State::Start,
            buffer: String::new(),
            tokens: Vec::new(),
        }
    }

    fn run<F>(mut self, observer: &mut F) -> Vec<Token>
    where
        F: FnMut(&Step),
    {
        while let Some(ch) = self.reader.read() {
            let from = self.state;
            let mark = self.reader.position();
            self.step(ch);
            observer(&Step {
                from,
                ch,
                to: self.state,
            });
            // a backslash pair consumed its second character inside `step`
            if self.reader.position() > mark {
                if let Some(escaped) = self.reader.peek(-1) {
                    observer(&Step {
                        from: self.state,
                        ch: escaped,
                        to: self.state,
                    });
                }
            }
        }

        // Only a quoted state can outlive the synthetic blank.
        if self.state.is_quoted() {
            trace!(
                "lex event=drop state={} text={:?}",
                self.state, self.buffer
            );
        }

        self.tokens
    }

    fn step(&mut self, ch: char) {
        match self.state {
            State::Start => match ch {
                c if is_blank(c) => {}
                '-' => self.push_to(ch, State::DashSeen),
                '"' => self.state = State::DquoteArg,
                '\'' => self.state = State::SquoteArg,
                '\\' => self.escape_to(State::BareArg),
                c => self.push_to(c, State::BareArg),
            },
            State::DashSeen => match ch {
                c if is_blank(c) => self.emit(TokenKind::ShortOpt),
                '-' => self.push_to(ch, State::DoubleDashSeen),
                '\\' => self.escape_to(State::ShortOptName),
                c => self.push_to(c, State::ShortOptName),
            },
            State::ShortOptName => match ch {
                c if is_blank(c) => self.emit(TokenKind::ShortOpt),
                '=' => self.push_to(ch, State::ShortOptEq),
                '\\' => self.escape(),
                c => self.buffer.push(c),
            },
            State::ShortOptEq => self.assign_value(
                ch,
                TokenKind::ShortOptAssign,
                State::ShortOptEqDquote,
                State::ShortOptEqSquote,
            ),
            State::ShortOptEqDquote => self.quoted(ch, '"', TokenKind::ShortOptAssign),
            State::ShortOptEqSquote => self.quoted(ch, '\'', TokenKind::ShortOptAssign),
            State::DoubleDashSeen | State::LongOptName => match ch {
                c if is_blank(c) => self.emit(TokenKind::LongOpt),
                '=' => self.push_to(ch, State::LongOptEq),
                '\\' => self.escape_to(State::LongOptName),
                c => self.push_to(c, State::LongOptName),
            },
            State::LongOptEq => self.assign_value(
                ch,
                TokenKind::LongOptAssign,
                State::LongOptEqDquote,
                State::LongOptEqSquote,
            ),
            State::LongOptEqDquote => self.quoted(ch, '"', TokenKind::LongOptAssign),
            State::LongOptEqSquote => self.quoted(ch, '\'', TokenKind::LongOptAssign),
            State::DquoteArg => self.quoted(ch, '"', TokenKind::Arg),
            State::SquoteArg => self.quoted(ch, '\'', TokenKind::Arg),
            State::BareArg => match ch {
                c if is_blank(c) => self.emit(TokenKind::Arg),
                '\\' => self.escape(),
                c => self.buffer.push(c),
            },
        }
    }

    /// Value part of `-x=` / `--flag=`; a quote switches to the quoted variant.
    fn assign_value(&mut self, ch: char, kind: TokenKind, dquote: State, squote: State) {
        match ch {
            c if is_blank(c) => self.emit(kind),
            '"' => self.state = dquote,
            '\'' => self.state = squote,
            '\\' => self.escape(),
            c => self.buffer.push(c),
        }
    }

    /// Inside a quoted segment closed by `close`.
    fn quoted(&mut self, ch: char, close: char, kind: TokenKind) {
        match ch {
            '\\' => self.escape(),
            c if c == close => self.emit(kind),
            c if is_blank(c) => self.buffer.push(' '),
            c => self.buffer.push(c),
        }
    }

    fn push_to(&mut self, ch: char, next: State) {
        self.buffer.push(ch);
        self.state = next;
    }

    fn escape_to(&mut self, next: State) {
        self.escape();
        self.state = next;
    }

    /// Copy a backslash and the character after it verbatim, except
    /// that an escaped blank is stored as a space.
    ///
    /// The synthetic trailing blank is never consumed, so a backslash
    /// ending the input stays alone and the token is still flushed.
    fn escape(&mut self) {
        self.buffer.push('\\');
        if let Some(next) = self.reader.read() {
            if self.reader.position() > self.limit {
                self.reader.rewind();
            } else if is_blank(next) {
                self.buffer.push(' ');
            } else {
                self.buffer.push(next);
            }
        }
    }

    fn emit(&mut self, kind: TokenKind) {
        let text = std::mem::take(&mut self.buffer);
        trace!("lex event=emit kind={kind} text={text:?}");
        self.tokens.push(Token { kind, text });
        self.state = State::Start;
    }
}
