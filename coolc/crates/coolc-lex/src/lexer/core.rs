//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the mode dispatcher and the
//! default-mode rules.

use coolc_util::{DiagnosticBuilder, Handler, Span};
use tracing::{debug, trace};

use crate::ascii::{display_byte, is_digit, is_ident_start, is_whitespace};
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::mode::{ScanMode, ScanStep};
use crate::token::{Token, TokenKind};

use super::string::StringBuffer;

/// Lexer for the Cool programming language.
///
/// The lexer owns all scanning state: the cursor (and with it the line
/// counter), the current mode and the string accumulator. Two lexers never
/// share anything, so independent scans can run side by side as long as
/// each has its own [`Handler`].
pub struct Lexer<'a> {
    /// Byte cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Error handler for reporting lexical errors.
    pub(crate) handler: &'a mut Handler,

    /// Active scanning mode.
    pub(crate) mode: ScanMode,

    /// Accumulator for the string literal being scanned.
    pub(crate) buffer: StringBuffer,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    pub(crate) token_start_line: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        Self::from_bytes(source.as_bytes(), handler)
    }

    /// Creates a new lexer over raw bytes.
    ///
    /// Input does not have to be valid UTF-8; bytes outside ASCII are
    /// reported as illegal characters.
    pub fn from_bytes(source: &'a [u8], handler: &'a mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            mode: ScanMode::Default,
            buffer: StringBuffer::new(),
            token_start: 0,
            token_start_line: 1,
        }
    }

    /// Runs exactly one match in the current mode.
    ///
    /// Returns [`ScanStep::Eof`] only at end of input in default mode.
    /// End of input in any other mode is reported and the lexer falls back
    /// to default mode, so a following call returns `Eof`.
    pub fn scan_step(&mut self) -> ScanStep {
        match self.mode {
            ScanMode::Default => self.scan_default(),
            ScanMode::InString => self.scan_string_step(),
            ScanMode::InLineComment => self.scan_line_comment(),
            ScanMode::InBlockComment { depth } => self.scan_block_comment(depth),
        }
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            match self.scan_step() {
                ScanStep::Token(token) => return Some(token),
                ScanStep::Skipped => continue,
                ScanStep::Eof => return None,
            }
        }
    }

    /// Default-mode rules, tried in precedence order.
    fn scan_default(&mut self) -> ScanStep {
        self.mark_token_start();

        let Some(b) = self.cursor.current() else {
            return ScanStep::Eof;
        };

        if is_whitespace(b) {
            self.cursor.eat_while(is_whitespace);
            return ScanStep::Skipped;
        }

        if b == b'"' {
            self.cursor.advance();
            self.buffer.clear();
            self.set_mode(ScanMode::InString);
            return ScanStep::Skipped;
        }

        if self.cursor.starts_with(b"--") {
            self.cursor.advance_n(2);
            self.set_mode(ScanMode::InLineComment);
            return ScanStep::Skipped;
        }

        if self.cursor.starts_with(b"(*") {
            self.cursor.advance_n(2);
            self.set_mode(ScanMode::InBlockComment { depth: 1 });
            return ScanStep::Skipped;
        }

        if self.cursor.starts_with(b"*)") {
            self.cursor.advance_n(2);
            return self.report_error(LexError::UnmatchedCommentClose);
        }

        if is_ident_start(b) {
            return ScanStep::Token(self.lex_identifier());
        }

        if is_digit(b) {
            return ScanStep::Token(self.lex_number());
        }

        if let Some(token) = self.lex_operator() {
            return ScanStep::Token(token);
        }

        self.cursor.advance();
        self.report_error(LexError::IllegalCharacter(display_byte(b)))
    }

    /// Returns the active scanning mode.
    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub(crate) fn set_mode(&mut self, mode: ScanMode) {
        trace!(from = %self.mode, to = %mode, line = self.cursor.line(), "mode change");
        self.mode = mode;
    }

    fn mark_token_start(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
    }

    /// Builds a token that started at the last marked position.
    pub(crate) fn make_token(&self, kind: TokenKind, lexeme: impl Into<String>) -> Token {
        Token::new(kind, lexeme, self.token_start_line)
    }

    /// Reports a lexical error on the current line.
    ///
    /// Returns the `Unknown` token that replaces the offending text, or
    /// [`ScanStep::Skipped`] when the error suppresses its token.
    pub(crate) fn report_error(&mut self, error: LexError) -> ScanStep {
        let line = self.cursor.line();
        debug!(line, code = %error.code(), "{}", error);

        let span = Span::new(self.token_start, self.cursor.position(), line);
        DiagnosticBuilder::error(error.to_string())
            .code(error.code())
            .span(span)
            .emit(self.handler);

        match error.unknown_lexeme() {
            Some(lexeme) => ScanStep::Token(self.make_token(TokenKind::Unknown, lexeme)),
            None => ScanStep::Skipped,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coolc_util::DiagnosticCode;

    #[test]
    fn test_empty_input_is_eof() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("", &mut handler);
        assert_eq!(lexer.scan_step(), ScanStep::Eof);
        assert_eq!(lexer.scan_step(), ScanStep::Eof);
        drop(lexer);
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_whitespace_is_skipped() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new(" \t\r\x0B\x0C\n x", &mut handler);
        assert_eq!(lexer.scan_step(), ScanStep::Skipped);
        assert_eq!(
            lexer.scan_step(),
            ScanStep::Token(Token::new(TokenKind::Identifier, "x", 2))
        );
        assert_eq!(lexer.scan_step(), ScanStep::Eof);
    }

    #[test]
    fn test_mode_transitions() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("\"a\" -- c\n(* d *)", &mut handler);

        assert_eq!(lexer.scan_step(), ScanStep::Skipped);
        assert_eq!(lexer.mode(), ScanMode::InString);
        assert!(matches!(lexer.scan_step(), ScanStep::Skipped));
        assert!(matches!(lexer.scan_step(), ScanStep::Token(_)));
        assert_eq!(lexer.mode(), ScanMode::Default);

        lexer.scan_step(); // whitespace
        lexer.scan_step(); // --
        assert_eq!(lexer.mode(), ScanMode::InLineComment);
        lexer.scan_step();
        assert_eq!(lexer.mode(), ScanMode::Default);
        assert_eq!(lexer.line(), 2);

        lexer.scan_step(); // (*
        assert_eq!(lexer.mode(), ScanMode::InBlockComment { depth: 1 });
        while lexer.mode() != ScanMode::Default {
            lexer.scan_step();
        }
        assert_eq!(lexer.scan_step(), ScanStep::Eof);
    }

    #[test]
    fn test_illegal_character() {
        let mut handler = Handler::new();
        let tokens: Vec<Token> = Lexer::new("a @ b", &mut handler).collect();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1], Token::new(TokenKind::Unknown, "@", 1));
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.diagnostics()[0].message, "illegal character '@'");
        assert_eq!(
            handler.diagnostics()[0].code,
            Some(DiagnosticCode::E_LEX_ILLEGAL_CHAR)
        );
        assert_eq!(handler.diagnostics()[0].span, Span::new(2, 3, 1));
    }

    #[test]
    fn test_illegal_non_ascii_byte() {
        let mut handler = Handler::new();
        let tokens: Vec<Token> = Lexer::from_bytes(b"x\x80y", &mut handler).collect();
        assert_eq!(tokens[1].kind, TokenKind::Unknown);
        assert_eq!(tokens[1].lexeme, "\\x80");
        assert_eq!(tokens[2].lexeme, "y");
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_unmatched_comment_close() {
        let mut handler = Handler::new();
        let tokens: Vec<Token> = Lexer::new("x *) y", &mut handler).collect();
        assert_eq!(tokens[1], Token::new(TokenKind::Unknown, "*)", 1));
        assert_eq!(tokens.len(), 3);
        assert_eq!(
            handler.count_code(DiagnosticCode::E_LEX_UNMATCHED_COMMENT_CLOSE),
            1
        );
    }

    #[test]
    fn test_unknown_tokens_match_error_kind() {
        let cases: [(&str, Option<&str>); 6] = [
            ("#", Some("#")),
            ("*)", Some("*)")),
            ("\"abc", None),
            ("\"abc\n", None),
            ("\"a\x01\"", None),
            ("(* open", None),
        ];
        for (source, unknown) in cases {
            let mut handler = Handler::new();
            let tokens: Vec<Token> = Lexer::new(source, &mut handler)
                .filter(|t| t.kind == TokenKind::Unknown)
                .collect();
            let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
            assert_eq!(lexemes, unknown.into_iter().collect::<Vec<_>>(), "{:?}", source);
            assert!(handler.error_count() >= 1, "{:?}", source);
        }
    }

    #[test]
    fn test_star_alone_is_operator() {
        let mut handler = Handler::new();
        let kinds: Vec<TokenKind> = Lexer::new("a * b", &mut handler).map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Identifier, TokenKind::Star, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_token_lines() {
        let mut handler = Handler::new();
        let lines: Vec<u32> = Lexer::new("a\n\nb\nc", &mut handler).map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 3, 4]);
    }

    #[test]
    fn test_position_advances() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("ab cd", &mut handler);
        lexer.next_token();
        assert_eq!(lexer.position(), 2);
        lexer.next_token();
        assert_eq!(lexer.position(), 5);
    }
}
