//! Scanner modes and the result of one scan step.

use std::fmt;

use crate::token::Token;

/// The scanning context the lexer is in.
///
/// Exactly one mode is active at a time. Only the nested-comment mode
/// carries extra state, so the depth lives inside the variant and cannot
/// be observed outside a block comment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScanMode {
    /// Between tokens.
    #[default]
    Default,
    /// Inside a `"` string literal.
    InString,
    /// Inside a `--` comment.
    InLineComment,
    /// Inside `(* ... *)` with the number of unclosed openers.
    InBlockComment {
        /// Nesting depth, always at least 1.
        depth: u32,
    },
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanMode::Default => f.write_str("default"),
            ScanMode::InString => f.write_str("string"),
            ScanMode::InLineComment => f.write_str("line comment"),
            ScanMode::InBlockComment { depth } => write!(f, "block comment (depth {})", depth),
        }
    }
}

/// Outcome of a single scan step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanStep {
    /// A token was produced.
    Token(Token),
    /// Input was consumed without producing a token.
    Skipped,
    /// End of input reached in default mode.
    Eof,
}
