//! coolc-lex - Lexical Analyzer for the Cool Programming Language
//!
//! This crate provides the lexer (tokenizer) for Cool, a small
//! object-oriented teaching language. It transforms source text into a
//! stream of classified tokens and reports lexical errors without ever
//! stopping the scan.
//!
//! # Example Usage
//!
//! ```
//! use coolc_util::Handler;
//! use coolc_lex::{Lexer, TokenKind};
//!
//! let source = "class Main inherits IO { x : Int <- 42; };";
//! let mut handler = Handler::new();
//! let mut lexer = Lexer::new(source, &mut handler);
//!
//! // Get tokens one at a time
//! let first = lexer.next_token().unwrap();
//! assert_eq!(first.kind, TokenKind::Class);
//!
//! // Or iterate through the rest
//! let rest: Vec<_> = lexer.collect();
//! assert_eq!(rest.len(), 12);
//! assert!(!handler.has_errors());
//! ```
//!
//! # Scanner Modes
//!
//! The lexer is always in exactly one [`ScanMode`]:
//!
//! - **Default**: whitespace, names, integers, operators, delimiters
//! - **InString**: entered on `"`, accumulates into a bounded
//!   [`StringBuffer`]
//! - **InLineComment**: entered on `--`, left at the end of the line
//! - **InBlockComment**: entered on `(*`, nests, left when the depth
//!   returns to zero
//!
//! [`Lexer::scan_step`] runs one rule of the active mode and reports
//! whether it produced a token, consumed input silently, or hit the end
//! of input.
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `class`, `else`, `if`, `fi`, `in`, `inherits`, `let`, `loop`, `pool`,
//! `then`, `while`, `case`, `esac`, `new`, `isvoid`, `not`, `of`, matched
//! case-insensitively.
//!
//! ## Names
//!
//! Pattern `[A-Za-z_][A-Za-z0-9_]*`. An uppercase first letter makes a
//! type identifier; anything else is an object identifier.
//!
//! ## Literals
//!
//! - **Integer**: `0`, `42`, `007`
//! - **String**: `"hello"`, `"tab\there"` (escapes kept as written)
//!
//! ## Operators and Delimiters
//!
//! `+ - * / = < <= ~ <-` and `{ } ( ) ; : , . =>`
//!
//! # Errors
//!
//! Lexical errors are [`LexError`] values emitted into the
//! [`Handler`](coolc_util::Handler). Illegal characters and a stray `*)`
//! also yield a [`TokenKind::Unknown`] token; every other error drops the
//! unit it interrupted.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod ascii;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod mode;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::LexError;
pub use lexer::{Lexer, StringBuffer, MAX_STRING_LENGTH, OPERATORS};
pub use mode::{ScanMode, ScanStep};
pub use token::{classify_word, keyword_from_ident, Token, TokenKind, KEYWORDS};
