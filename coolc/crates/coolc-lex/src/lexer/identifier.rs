//! Identifier and keyword lexing.
//!
//! This module handles lexing of identifiers, type identifiers and keywords.

use crate::ascii::{ascii_text, is_ident_continue};
use crate::token::{classify_word, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier, type identifier or keyword.
    ///
    /// Reads the maximal run of `[A-Za-z0-9_]` starting at the current
    /// byte, then classifies it. The lexeme keeps its source casing even
    /// when it matches a keyword.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);

        let text = ascii_text(self.cursor.slice_from(self.token_start));
        self.make_token(classify_word(&text), text)
    }
}
