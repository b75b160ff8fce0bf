//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::span::Span;

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use coolc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
/// use coolc_util::Span;
///
/// let diag = DiagnosticBuilder::error("EOF in comment")
///     .code(DiagnosticCode::E_LEX_EOF_IN_COMMENT)
///     .span(Span::point(12))
///     .build();
///
/// assert_eq!(diag.span.line, 12);
/// ```
#[derive(Clone, Debug)]
#[must_use = "a diagnostic builder does nothing until built or emitted"]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
}

impl DiagnosticBuilder {
    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Finish building and return the diagnostic
    pub fn build(self) -> Diagnostic {
        let mut diagnostic = Diagnostic::new(self.level, self.message, self.span);
        diagnostic.code = self.code;
        diagnostic
    }

    /// Build the diagnostic and hand it to `handler`
    pub fn emit(self, handler: &mut Handler) {
        handler.emit_diagnostic(self.build());
    }
}
