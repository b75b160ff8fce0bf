//! String literal lexing.
//!
//! A string literal is scanned in its own mode, one rule per step, into a
//! bounded [`StringBuffer`]. Escapes are stored in their two-character
//! source form (`\t` stays a backslash and a `t`).

use std::mem;

use crate::ascii::{display_byte, is_printable};
use crate::error::LexError;
use crate::mode::{ScanMode, ScanStep};
use crate::token::TokenKind;
use crate::Lexer;

/// Maximum number of characters a string literal may hold.
pub const MAX_STRING_LENGTH: usize = 1024;

/// Bytes that may follow a backslash to form an escape.
const ESCAPES: &[u8] = b"btnfr\"\\";

/// Bounded accumulator for string literal contents.
///
/// Every append is checked against [`MAX_STRING_LENGTH`]. Characters past
/// the limit are counted but not stored, so scanning can continue to the
/// closing quote while the literal is already known to be too long.
///
/// # Example
///
/// ```
/// use coolc_lex::{StringBuffer, MAX_STRING_LENGTH};
///
/// let mut buffer = StringBuffer::new();
/// for _ in 0..=MAX_STRING_LENGTH {
///     buffer.push(b'a');
/// }
/// assert!(buffer.is_overflowed());
/// assert_eq!(buffer.as_str().len(), MAX_STRING_LENGTH);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StringBuffer {
    text: String,
    len: usize,
}

impl StringBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self {
            text: String::with_capacity(MAX_STRING_LENGTH),
            len: 0,
        }
    }

    /// Appends one character, dropping it once the buffer is full.
    pub fn push(&mut self, b: u8) {
        if self.text.len() < MAX_STRING_LENGTH {
            self.text.push(char::from(b));
        }
        self.len += 1;
    }

    /// Appends an escape as backslash plus `b`.
    pub fn push_escape(&mut self, b: u8) {
        self.push(b'\\');
        self.push(b);
    }

    /// Number of characters appended, stored or not.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true once more than [`MAX_STRING_LENGTH`] characters were appended.
    pub fn is_overflowed(&self) -> bool {
        self.len > MAX_STRING_LENGTH
    }

    /// The stored contents.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
        self.len = 0;
    }

    /// Takes the stored contents, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        self.len = 0;
        mem::replace(&mut self.text, String::with_capacity(MAX_STRING_LENGTH))
    }
}

impl<'a> Lexer<'a> {
    /// Runs one string-mode rule.
    pub(crate) fn scan_string_step(&mut self) -> ScanStep {
        let Some(b) = self.cursor.current() else {
            let step = self.report_error(LexError::UnterminatedStringEof);
            self.leave_string();
            return step;
        };

        match b {
            b'"' => {
                self.cursor.advance();
                let overflowed = self.buffer.is_overflowed();
                let text = self.buffer.take();
                self.set_mode(ScanMode::Default);
                if overflowed {
                    self.report_error(LexError::StringTooLong)
                } else {
                    ScanStep::Token(self.make_token(TokenKind::StringLiteral, text))
                }
            },
            b'\n' => {
                // Reported on the line the string broke on.
                let step = self.report_error(LexError::UnterminatedStringNewline);
                self.cursor.advance();
                self.leave_string();
                step
            },
            b'\\' => {
                self.cursor.advance();
                match self.cursor.current() {
                    Some(e) if ESCAPES.contains(&e) => {
                        self.cursor.advance();
                        self.buffer.push_escape(e);
                    },
                    _ => self.buffer.push(b'\\'),
                }
                ScanStep::Skipped
            },
            _ if is_printable(b) => {
                let buffer = &mut self.buffer;
                self.cursor.eat_while(|c| {
                    let plain = is_printable(c) && c != b'"' && c != b'\\';
                    if plain {
                        buffer.push(c);
                    }
                    plain
                });
                ScanStep::Skipped
            },
            _ => {
                self.cursor.advance();
                let step = self.report_error(LexError::NonPrintableInString(display_byte(b)));
                self.leave_string();
                step
            },
        }
    }

    fn leave_string(&mut self) {
        self.buffer.clear();
        self.set_mode(ScanMode::Default);
    }
}
