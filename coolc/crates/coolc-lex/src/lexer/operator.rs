//! Operator and punctuation lexing.
//!
//! Operators and delimiters are matched against one ordered table. The
//! two-character entries come first, so `<=`, `<-` and `=>` always win over
//! their one-character prefixes.

use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Operators and delimiters in match order.
pub const OPERATORS: [(&str, TokenKind); 18] = [
    ("<=", TokenKind::LtEq),
    ("<-", TokenKind::Assign),
    ("=>", TokenKind::FatArrow),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Star),
    ("/", TokenKind::Slash),
    ("=", TokenKind::Eq),
    ("<", TokenKind::Lt),
    ("~", TokenKind::Tilde),
    ("{", TokenKind::LBrace),
    ("}", TokenKind::RBrace),
    ("(", TokenKind::LParen),
    (")", TokenKind::RParen),
    (";", TokenKind::Semicolon),
    (":", TokenKind::Colon),
    (",", TokenKind::Comma),
    (".", TokenKind::Dot),
];

impl<'a> Lexer<'a> {
    /// Lexes an operator or delimiter at the cursor.
    ///
    /// Returns `None` without consuming anything when no entry matches.
    pub(crate) fn lex_operator(&mut self) -> Option<Token> {
        let &(text, kind) = OPERATORS
            .iter()
            .find(|(text, _)| self.cursor.starts_with(text.as_bytes()))?;
        self.cursor.advance_n(text.len());
        Some(self.make_token(kind, text))
    }
}
