//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides types for creating, collecting and rendering
//! diagnostics. Producers build a [`Diagnostic`] (usually through
//! [`DiagnosticBuilder`]) and emit it into a [`Handler`]; the caller owns
//! the handler and inspects it once the phase is done.
//!
//! # Examples
//!
//! ```
//! use coolc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use coolc_util::Span;
//!
//! let mut handler = Handler::new();
//! DiagnosticBuilder::error("EOF in string constant")
//!     .code(DiagnosticCode::E_LEX_EOF_IN_STRING)
//!     .span(Span::point(2))
//!     .emit(&mut handler);
//!
//! if handler.has_errors() {
//!     for diag in handler.diagnostics() {
//!         eprintln!("{}", diag.render("main.cl", false));
//!     }
//! }
//! ```

mod builder;
mod codes;
mod level;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;
pub use level::{ColorConfig, Level};

use crate::span::Span;

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
        }
    }

    /// Render the diagnostic as a single line
    ///
    /// The format is `error[E0102]: <origin>:<line>: <message>`. When
    /// `color` is set the level name is wrapped in ANSI escapes.
    ///
    /// # Examples
    ///
    /// ```
    /// use coolc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
    /// use coolc_util::Span;
    ///
    /// let diag = DiagnosticBuilder::error("unterminated string constant")
    ///     .code(DiagnosticCode::E_LEX_UNTERMINATED_STRING)
    ///     .span(Span::point(4))
    ///     .build();
    /// assert_eq!(
    ///     diag.render("hello.cl", false),
    ///     "error[E0102]: hello.cl:4: unterminated string constant"
    /// );
    /// ```
    pub fn render(&self, origin: &str, color: bool) -> String {
        let mut header = self.level.name().to_string();
        if let Some(code) = self.code {
            header.push_str(&format!("[{}]", code));
        }
        if color {
            header = format!(
                "\x1b[{};{}m{}\x1b[0m",
                self.level.intensity(),
                self.level.color_code(),
                header
            );
        }

        format!("{}: {}:{}: {}", header, origin, self.span.line, self.message)
    }
}

/// Handler for collecting diagnostics
///
/// The `Handler` collects diagnostics in emission order and provides
/// methods for querying them once the phase is done.
///
/// Each handler is independent; two lexers scanning at the same time must
/// be given two handlers.
#[derive(Debug, Default)]
pub struct Handler {
    /// Collected diagnostics
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// Count the diagnostics carrying `code`
    pub fn count_code(&self, code: DiagnosticCode) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.code == Some(code))
            .count()
    }

    /// Get all diagnostics in emission order
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Remove and return all diagnostics
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}
