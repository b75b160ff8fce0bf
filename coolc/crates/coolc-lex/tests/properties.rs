//! Property-based tests for the Cool lexer.

use coolc_lex::{Lexer, Token, TokenKind, KEYWORDS, MAX_STRING_LENGTH};
use coolc_util::{Diagnostic, DiagnosticCode, Handler};
use proptest::prelude::*;

fn lex(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut handler = Handler::new();
    let tokens = Lexer::new(source, &mut handler).collect();
    (tokens, handler.take())
}

fn lex_bytes(source: &[u8]) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut handler = Handler::new();
    let tokens = Lexer::from_bytes(source, &mut handler).collect();
    (tokens, handler.take())
}

/// Randomizes the case of each letter in `word` using `mask`.
fn mixed_case(word: &str, mask: u64) -> String {
    word.chars()
        .enumerate()
        .map(|(i, c)| {
            if mask >> (i % 64) & 1 == 1 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

#[test]
fn test_property_keyword_case_variants() {
    proptest!(|(index in 0..KEYWORDS.len(), mask in any::<u64>())| {
        let (word, kind) = KEYWORDS[index];
        let input = mixed_case(word, mask);
        let (tokens, errors) = lex(&input);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, kind);
        prop_assert_eq!(&tokens[0].lexeme, &input);
        prop_assert!(errors.is_empty());
    });
}

#[test]
fn test_property_identifiers() {
    proptest!(|(input in "[a-z_][a-zA-Z0-9_]{0,40}")| {
        prop_assume!(coolc_lex::keyword_from_ident(&input).is_none());
        let (tokens, _) = lex(&input);
        prop_assert_eq!(tokens, vec![Token::new(TokenKind::Identifier, input.clone(), 1)]);
    });
}

#[test]
fn test_property_type_identifiers() {
    proptest!(|(input in "[A-Z][a-zA-Z0-9_]{0,40}")| {
        prop_assume!(coolc_lex::keyword_from_ident(&input).is_none());
        let (tokens, _) = lex(&input);
        prop_assert_eq!(tokens, vec![Token::new(TokenKind::TypeIdentifier, input.clone(), 1)]);
    });
}

#[test]
fn test_property_two_char_operators_not_split() {
    proptest!(|(left in "[a-z]{1,5}", right in "[0-9]{1,5}", op in prop::sample::select(vec!["<=", "<-", "=>"]))| {
        let source = format!("{}{}{}", left, op, right);
        let (tokens, errors) = lex(&source);
        prop_assert_eq!(tokens.len(), 3);
        prop_assert_eq!(tokens[1].lexeme.as_str(), op);
        prop_assert!(errors.is_empty());
    });
}

#[test]
fn test_property_balanced_nested_comments() {
    proptest!(|(depth in 1usize..20, body in "[a-z \n]{0,20}")| {
        let source = format!("{}{}{}", "(* ".repeat(depth), body, " *)".repeat(depth));
        let (tokens, errors) = lex(&source);
        prop_assert!(tokens.is_empty());
        prop_assert!(errors.is_empty());
    });
}

#[test]
fn test_property_unbalanced_comment_single_error() {
    proptest!(|(depth in 2usize..20)| {
        let source = format!("{}x{}", "(* ".repeat(depth), " *)".repeat(depth - 1));
        let (tokens, errors) = lex(&source);
        prop_assert!(tokens.is_empty());
        prop_assert_eq!(errors.len(), 1);
        prop_assert_eq!(errors[0].code, Some(DiagnosticCode::E_LEX_EOF_IN_COMMENT));
    });
}

#[test]
fn test_string_escape_preserved() {
    let (tokens, errors) = lex(r#""ab\tc""#);
    assert_eq!(tokens, vec![Token::new(TokenKind::StringLiteral, r"ab\tc", 1)]);
    assert!(errors.is_empty());
}

#[test]
fn test_property_plain_strings() {
    proptest!(|(input in "[ !#-\\[\\]-~]{0,200}")| {
        let (tokens, errors) = lex(&format!("\"{}\"", input));
        prop_assert_eq!(tokens, vec![Token::new(TokenKind::StringLiteral, input.clone(), 1)]);
        prop_assert!(errors.is_empty());
    });
}

#[test]
fn test_property_newline_in_string() {
    proptest!(|(input in "[a-z ]{0,30}")| {
        let mut handler = Handler::new();
        let source = format!("\"{}\n", input);
        let mut lexer = Lexer::new(&source, &mut handler);
        prop_assert_eq!(lexer.next_token(), None);
        prop_assert_eq!(lexer.line(), 2);
        drop(lexer);
        prop_assert_eq!(handler.error_count(), 1);
        prop_assert_eq!(
            handler.diagnostics()[0].code,
            Some(DiagnosticCode::E_LEX_UNTERMINATED_STRING)
        );
    });
}

#[test]
fn test_string_length_boundary() {
    let (tokens, errors) = lex(&format!("\"{}\"", "a".repeat(MAX_STRING_LENGTH)));
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert!(errors.is_empty());

    let (tokens, errors) = lex(&format!("\"{}\"", "a".repeat(MAX_STRING_LENGTH + 1)));
    assert!(tokens.is_empty());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, Some(DiagnosticCode::E_LEX_STRING_TOO_LONG));
}

#[test]
fn test_property_oversized_strings_never_emit() {
    proptest!(|(extra in 1usize..200)| {
        let (tokens, errors) = lex(&format!("\"{}\" ok", "b".repeat(MAX_STRING_LENGTH + extra)));
        prop_assert_eq!(tokens, vec![Token::new(TokenKind::Identifier, "ok", 1)]);
        prop_assert_eq!(errors.len(), 1);
    });
}

#[test]
fn test_property_illegal_characters() {
    proptest!(|(c in prop::sample::select(vec!['@', '#', '$', '%', '^', '&', '!', '?', '[', ']', '|', '>', '`', '\'']))| {
        let source = format!("a{}b", c);
        let (tokens, errors) = lex(&source);
        prop_assert_eq!(tokens.len(), 3);
        prop_assert_eq!(tokens[1].kind, TokenKind::Unknown);
        prop_assert_eq!(tokens[1].lexeme.clone(), c.to_string());
        prop_assert_eq!(errors.len(), 1);
        prop_assert_eq!(errors[0].code, Some(DiagnosticCode::E_LEX_ILLEGAL_CHAR));
    });
}

#[test]
fn test_property_arbitrary_bytes_terminate() {
    proptest!(|(input in prop::collection::vec(any::<u8>(), 0..512))| {
        let (tokens, errors) = lex_bytes(&input);
        // Every step consumes at least one byte, so neither count can
        // exceed the input length.
        prop_assert!(tokens.len() <= input.len());
        prop_assert!(errors.len() <= input.len());
    });
}

#[test]
fn test_property_idempotent_rescans() {
    proptest!(|(input in prop::collection::vec(any::<u8>(), 0..256))| {
        let first = lex_bytes(&input);
        let second = lex_bytes(&input);
        prop_assert_eq!(first, second);
    });
}

#[test]
fn test_property_whitespace_ignored() {
    proptest!(|(ws in "[ \t\r\n\x0B\x0C]{0,50}")| {
        let source = format!("{}class{}", ws, ws);
        let (tokens, errors) = lex(&source);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Class);
        prop_assert_eq!(tokens[0].line as usize, 1 + ws.matches('\n').count());
        prop_assert!(errors.is_empty());
    });
}
