//! Diagnostic codes for categorizing errors.
//!
//! Codes follow the format `{prefix}{number}` with a 4-digit, zero padded
//! number. Lexical errors live in the `E01xx` block.
//!
//! # Examples
//!
//! ```
//! use coolc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEX_UNTERMINATED_STRING;
//! assert_eq!(code.number, 102);
//! assert_eq!(code.as_str(), "E0102");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" for error)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the full code string (e.g., "E0101")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXICAL ERROR CODES (E0101-E0199)
    // =========================================================================

    /// E0101: Character not matched by any lexical rule
    pub const E_LEX_ILLEGAL_CHAR: Self = Self::new("E", 101);
    /// E0102: Raw newline inside a string literal
    pub const E_LEX_UNTERMINATED_STRING: Self = Self::new("E", 102);
    /// E0103: End of input inside a string literal
    pub const E_LEX_EOF_IN_STRING: Self = Self::new("E", 103);
    /// E0104: String literal longer than the accumulator capacity
    pub const E_LEX_STRING_TOO_LONG: Self = Self::new("E", 104);
    /// E0105: Non-printable character inside a string literal
    pub const E_LEX_NON_PRINTABLE_IN_STRING: Self = Self::new("E", 105);
    /// E0106: End of input inside a block comment
    pub const E_LEX_EOF_IN_COMMENT: Self = Self::new("E", 106);
    /// E0107: Block comment close without a matching open
    pub const E_LEX_UNMATCHED_COMMENT_CLOSE: Self = Self::new("E", 107);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}
