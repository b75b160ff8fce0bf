//! Byte cursor for traversing source text.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while walking the input one byte at a time. It is the only place the
//! line counter is advanced: every `\n` consumed through the cursor counts,
//! whatever mode the lexer is in.

/// A cursor for traversing source bytes.
///
/// # Example
///
/// ```
/// use coolc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"let x");
///
/// assert_eq!(cursor.current(), Some(b'l'));
/// cursor.advance();
/// assert_eq!(cursor.current(), Some(b'e'));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source bytes being traversed.
    source: &'a [u8],

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
        }
    }

    /// Returns the byte at the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.peek(0)
    }

    /// Returns the byte `offset` positions ahead (0 = current).
    ///
    /// # Example
    ///
    /// ```
    /// use coolc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new(b"(*");
    /// assert_eq!(cursor.peek(0), Some(b'('));
    /// assert_eq!(cursor.peek(1), Some(b'*'));
    /// assert_eq!(cursor.peek(2), None);
    /// ```
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<u8> {
        self.source.get(self.position + offset).copied()
    }

    /// Consumes and returns the current byte.
    ///
    /// Counts a consumed `\n` as a new line. Returns `None` (and does nothing)
    /// when already at the end.
    #[inline]
    pub fn advance(&mut self) -> Option<u8> {
        let b = self.current()?;
        self.position += 1;
        if b == b'\n' {
            self.line += 1;
        }
        Some(b)
    }

    /// Advances the cursor by up to `count` bytes.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Consumes bytes while `predicate` holds.
    ///
    /// # Example
    ///
    /// ```
    /// use coolc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"12ab");
    /// cursor.eat_while(|b| b.is_ascii_digit());
    /// assert_eq!(cursor.current(), Some(b'a'));
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(u8) -> bool) {
        while let Some(b) = self.current() {
            if !predicate(b) {
                break;
            }
            self.advance();
        }
    }

    /// Returns true if the remaining input starts with `pattern`.
    #[inline]
    pub fn starts_with(&self, pattern: &[u8]) -> bool {
        self.remaining().starts_with(pattern)
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    ///
    /// # Example
    ///
    /// ```
    /// use coolc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"a\nb");
    /// assert_eq!(cursor.line(), 1);
    /// cursor.advance_n(2);
    /// assert_eq!(cursor.line(), 2);
    /// ```
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the bytes from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.source[start.min(self.position)..self.position]
    }

    /// Returns the source bytes from the current position to the end.
    pub fn remaining(&self) -> &'a [u8] {
        &self.source[self.position.min(self.source.len())..]
    }
}
