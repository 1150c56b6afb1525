//! Bounded character cursor used by the lexer and the escape pass.

/// Random-access cursor over the characters of a string.
///
/// End of input is reported as `None`; the cursor never moves past
/// the last character and never below zero.
#[derive(Debug, Clone)]
pub struct Reader {
    chars: Vec<char>,
    pos: usize,
}

impl Reader {
    #[must_use]
    pub fn new(src: &str) -> Self {
        Self {
            chars: src.chars().collect(),
            pos: 0,
        }
    }

    /// Character at `offset` from the cursor, without moving it.
    ///
    /// Negative offsets look behind. Anything outside the input is `None`.
    #[must_use]
    pub fn peek(&self, offset: isize) -> Option<char> {
        let idx = self.pos.checked_add_signed(offset)?;
        self.chars.get(idx).copied()
    }

    /// Return the current character and advance past it.
    pub fn read(&mut self) -> Option<char> {
        let ch = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        Some(ch)
    }

    /// Step back one character. Stays at 0 when already there.
    pub const fn rewind(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    #[must_use]
    pub const fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Number of characters in the input.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_until_end() {
        let mut r = Reader::new("ab");
        assert_eq!(r.read(), Some('a'));
        assert_eq!(r.read(), Some('b'));
        assert!(r.at_end());
        assert_eq!(r.read(), None);
        assert_eq!(r.position(), 2);
    }

    #[test]
    fn peek_ahead_and_behind() {
        let mut r = Reader::new("xyz");
        assert_eq!(r.peek(0), Some('x'));
        assert_eq!(r.peek(-1), None);
        r.read();
        assert_eq!(r.peek(-1), Some('x'));
        assert_eq!(r.peek(1), Some('z'));
        assert_eq!(r.peek(2), None);
    }

    #[test]
    fn rewind_clamps_at_zero() {
        let mut r = Reader::new("q");
        r.rewind();
        assert_eq!(r.position(), 0);
        r.read();
        r.rewind();
        assert_eq!(r.read(), Some('q'));
    }

    #[test]
    fn multibyte_chars() {
        let mut r = Reader::new("é!");
        assert_eq!(r.len(), 2);
        assert_eq!(r.read(), Some('é'));
        assert_eq!(r.read(), Some('!'));
    }

    #[test]
    fn empty_input() {
        let r = Reader::new("");
        assert!(r.is_empty());
        assert!(r.at_end());
        assert_eq!(r.peek(0), None);
    }
}
