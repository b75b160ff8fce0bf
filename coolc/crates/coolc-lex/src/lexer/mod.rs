//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, mode dispatch and default-mode rules
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Integer literal lexing
//! - `string` - String literal mode and its bounded accumulator
//! - `operator` - Operator and punctuation lexing
//! - `comment` - Line and nested block comment modes

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
pub use operator::OPERATORS;
pub use string::{StringBuffer, MAX_STRING_LENGTH};
