//! coolc-util - Core Utilities and Foundation Types
//!
//! This crate provides the small set of types every phase of the Cool
//! toolchain shares:
//!
//! - [`span`] - Source locations (byte range plus line)
//! - [`diagnostic`] - Severity levels, diagnostic codes, the fluent
//!   [`DiagnosticBuilder`] and the collecting [`Handler`]
//!
//! Phases never abort on user errors. They emit a [`Diagnostic`] into a
//! [`Handler`] owned by the caller and keep going. The caller decides,
//! once the phase is done, whether the collected errors are fatal.
//!
//! ```
//! use coolc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let mut handler = Handler::new();
//! DiagnosticBuilder::error("illegal character '#'")
//!     .code(DiagnosticCode::E_LEX_ILLEGAL_CHAR)
//!     .span(Span::point(3))
//!     .emit(&mut handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.diagnostics()[0].span.line, 3);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{ColorConfig, Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use span::Span;
