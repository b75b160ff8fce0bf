//! Lexical error taxonomy.
//!
//! Every lexical error is non-fatal: it is reported through the
//! [`Handler`](coolc_util::Handler) and scanning resumes. Only
//! [`LexError::IllegalCharacter`] and [`LexError::UnmatchedCommentClose`]
//! come with an `Unknown` token; the others suppress the token of the
//! lexical unit they interrupt.

use coolc_util::DiagnosticCode;
use thiserror::Error;

/// Lexical analysis errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character no rule matches.
    #[error("illegal character '{0}'")]
    IllegalCharacter(String),

    /// A raw newline inside a string literal.
    #[error("unterminated string constant")]
    UnterminatedStringNewline,

    /// End of input inside a string literal.
    #[error("EOF in string constant")]
    UnterminatedStringEof,

    /// A string literal that outgrew the accumulator.
    #[error("string constant too long")]
    StringTooLong,

    /// A non-printable character inside a string literal.
    #[error("invalid character '{0}' in string constant")]
    NonPrintableInString(String),

    /// End of input inside a block comment.
    #[error("EOF in comment")]
    UnterminatedComment,

    /// `*)` with no open block comment.
    #[error("unmatched *)")]
    UnmatchedCommentClose,
}

impl LexError {
    /// Stable diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::IllegalCharacter(_) => DiagnosticCode::E_LEX_ILLEGAL_CHAR,
            LexError::UnterminatedStringNewline => DiagnosticCode::E_LEX_UNTERMINATED_STRING,
            LexError::UnterminatedStringEof => DiagnosticCode::E_LEX_EOF_IN_STRING,
            LexError::StringTooLong => DiagnosticCode::E_LEX_STRING_TOO_LONG,
            LexError::NonPrintableInString(_) => DiagnosticCode::E_LEX_NON_PRINTABLE_IN_STRING,
            LexError::UnterminatedComment => DiagnosticCode::E_LEX_EOF_IN_COMMENT,
            LexError::UnmatchedCommentClose => DiagnosticCode::E_LEX_UNMATCHED_COMMENT_CLOSE,
        }
    }

    /// Lexeme of the `Unknown` token reported in place of the offending
    /// text, or `None` when the error suppresses its token.
    pub fn unknown_lexeme(&self) -> Option<&str> {
        match self {
            LexError::IllegalCharacter(text) => Some(text),
            LexError::UnmatchedCommentClose => Some("*)"),
            _ => None,
        }
    }
}
