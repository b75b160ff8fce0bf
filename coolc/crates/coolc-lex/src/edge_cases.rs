//! Edge case tests for coolc-lex
