//! Integer literal lexing.

use crate::ascii::{ascii_text, is_digit};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an integer literal.
    ///
    /// Integers are a maximal run of decimal digits. The lexeme is the digit
    /// text; no numeric conversion happens here, so values of any length are
    /// accepted.
    pub(crate) fn lex_number(&mut self) -> Token {
        self.cursor.eat_while(is_digit);
        let text = ascii_text(self.cursor.slice_from(self.token_start));
        self.make_token(TokenKind::IntegerLiteral, text)
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind};
    use crate::Lexer;
    use coolc_util::Handler;

    fn lex_all(source: &str) -> Vec<Token> {
        let mut handler = Handler::new();
        Lexer::new(source, &mut handler).collect()
    }

    #[test]
    fn test_integer() {
        assert_eq!(
            lex_all("42"),
            vec![Token::new(TokenKind::IntegerLiteral, "42", 1)]
        );
    }

    #[test]
    fn test_leading_zeros_kept() {
        assert_eq!(lex_all("007")[0].lexeme, "007");
    }

    #[test]
    fn test_huge_integer_is_not_converted() {
        let digits = "9".repeat(64);
        let tokens = lex_all(&digits);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].lexeme, digits);
    }

    #[test]
    fn test_digits_then_letters_split() {
        let tokens = lex_all("12ab");
        assert_eq!(tokens[0], Token::new(TokenKind::IntegerLiteral, "12", 1));
        assert_eq!(tokens[1], Token::new(TokenKind::Identifier, "ab", 1));
    }

    #[test]
    fn test_no_float_syntax() {
        let kinds: Vec<TokenKind> = lex_all("3.14").into_iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::IntegerLiteral,
                TokenKind::Dot,
                TokenKind::IntegerLiteral
            ]
        );
    }
}
