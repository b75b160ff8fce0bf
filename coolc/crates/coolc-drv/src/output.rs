//! Token presentation.
//!
//! Everything here is pure formatting over a finished token list; the
//! lexer itself never prints.

use std::io::Write;

use coolc_lex::{Token, TokenKind};
use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Result;

/// Display label for a token kind.
///
/// # Example
///
/// ```
/// use coolc_drv::output::token_label;
/// use coolc_lex::TokenKind;
///
/// assert_eq!(token_label(TokenKind::Isvoid), "ISVOID");
/// assert_eq!(token_label(TokenKind::Assign), "ASSIGN");
/// assert_eq!(token_label(TokenKind::Plus), "'+'");
/// ```
pub fn token_label(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Class => "CLASS",
        TokenKind::Else => "ELSE",
        TokenKind::If => "IF",
        TokenKind::Fi => "FI",
        TokenKind::In => "IN",
        TokenKind::Inherits => "INHERITS",
        TokenKind::Let => "LET",
        TokenKind::Loop => "LOOP",
        TokenKind::Pool => "POOL",
        TokenKind::Then => "THEN",
        TokenKind::While => "WHILE",
        TokenKind::Case => "CASE",
        TokenKind::Esac => "ESAC",
        TokenKind::New => "NEW",
        TokenKind::Isvoid => "ISVOID",
        TokenKind::Not => "NOT",
        TokenKind::Of => "OF",
        TokenKind::Identifier => "OBJECTID",
        TokenKind::TypeIdentifier => "TYPEID",
        TokenKind::IntegerLiteral => "INT_CONST",
        TokenKind::StringLiteral => "STR_CONST",
        TokenKind::Plus => "'+'",
        TokenKind::Minus => "'-'",
        TokenKind::Star => "'*'",
        TokenKind::Slash => "'/'",
        TokenKind::Eq => "'='",
        TokenKind::Lt => "'<'",
        TokenKind::LtEq => "LE",
        TokenKind::Tilde => "'~'",
        TokenKind::Assign => "ASSIGN",
        TokenKind::LBrace => "'{'",
        TokenKind::RBrace => "'}'",
        TokenKind::LParen => "'('",
        TokenKind::RParen => "')'",
        TokenKind::Semicolon => "';'",
        TokenKind::Colon => "':'",
        TokenKind::Comma => "','",
        TokenKind::Dot => "'.'",
        TokenKind::FatArrow => "DARROW",
        TokenKind::Unknown => "ERROR",
    }
}

/// Formats one token as a text line (without the newline).
pub fn format_token(token: &Token) -> String {
    let label = token_label(token.kind);
    match token.kind {
        TokenKind::Identifier | TokenKind::TypeIdentifier | TokenKind::IntegerLiteral => {
            format!("#{} {} {}", token.line, label, token.lexeme)
        },
        TokenKind::StringLiteral | TokenKind::Unknown => {
            format!("#{} {} \"{}\"", token.line, label, token.lexeme)
        },
        _ => format!("#{} {}", token.line, label),
    }
}

/// Writes the text listing: a `#name` header then one line per token.
pub fn write_text<W: Write>(out: &mut W, name: &str, tokens: &[Token]) -> Result<()> {
    writeln!(out, "#name \"{}\"", name)?;
    for token in tokens {
        writeln!(out, "{}", format_token(token))?;
    }
    Ok(())
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    line: u32,
    kind: &'static str,
    lexeme: &'a str,
}

/// Writes the tokens as one pretty-printed JSON array.
pub fn write_json<W: Write>(out: &mut W, tokens: &[Token]) -> Result<()> {
    let records: Vec<TokenRecord<'_>> = tokens
        .iter()
        .map(|token| TokenRecord {
            line: token.line,
            kind: token_label(token.kind),
            lexeme: &token.lexeme,
        })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)?;
    Ok(())
}

/// Summary of one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of tokens produced.
    pub total: usize,
    /// Token count per label, in first-seen order.
    pub per_kind: IndexMap<&'static str, usize>,
    /// Number of lexical errors reported.
    pub errors: usize,
}

impl Stats {
    /// Tallies `tokens` by label.
    pub fn collect(tokens: &[Token], errors: usize) -> Self {
        let mut per_kind = IndexMap::new();
        for token in tokens {
            *per_kind.entry(token_label(token.kind)).or_insert(0) += 1;
        }
        Self {
            total: tokens.len(),
            per_kind,
            errors,
        }
    }

    /// Writes the summary, one count per line.
    pub fn write<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "tokens: {}", self.total)?;
        for (label, count) in &self.per_kind {
            writeln!(out, "  {:<10} {}", label, count)?;
        }
        writeln!(out, "errors: {}", self.errors)?;
        Ok(())
    }
}
