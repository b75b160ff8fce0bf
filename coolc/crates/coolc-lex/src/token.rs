//! Token type definitions and keyword classification.
//!
//! A [`Token`] pairs a [`TokenKind`] with the lexeme it was built from and
//! the line it started on. Every matched lexeme gets exactly one kind.
//! Reserved words are matched case-insensitively and always win over the
//! identifier kinds.

use std::fmt;

/// The closed set of token categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    /// `class`
    Class,
    /// `else`
    Else,
    /// `if`
    If,
    /// `fi`
    Fi,
    /// `in`
    In,
    /// `inherits`
    Inherits,
    /// `let`
    Let,
    /// `loop`
    Loop,
    /// `pool`
    Pool,
    /// `then`
    Then,
    /// `while`
    While,
    /// `case`
    Case,
    /// `esac`
    Esac,
    /// `new`
    New,
    /// `isvoid`
    Isvoid,
    /// `not`
    Not,
    /// `of`
    Of,

    // Names and literals
    /// Name starting with a lowercase letter or underscore
    Identifier,
    /// Name starting with an uppercase letter
    TypeIdentifier,
    /// Run of decimal digits
    IntegerLiteral,
    /// Quoted string, escapes kept in their two-character form
    StringLiteral,

    // Operators
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `=`
    Eq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `~`
    Tilde,
    /// `<-`
    Assign,

    // Delimiters
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `=>`
    FatArrow,

    /// Illegal character or unmatched `*)`
    Unknown,
}

/// Reserved words, in lowercase.
pub const KEYWORDS: [(&str, TokenKind); 17] = [
    ("class", TokenKind::Class),
    ("else", TokenKind::Else),
    ("if", TokenKind::If),
    ("fi", TokenKind::Fi),
    ("in", TokenKind::In),
    ("inherits", TokenKind::Inherits),
    ("let", TokenKind::Let),
    ("loop", TokenKind::Loop),
    ("pool", TokenKind::Pool),
    ("then", TokenKind::Then),
    ("while", TokenKind::While),
    ("case", TokenKind::Case),
    ("esac", TokenKind::Esac),
    ("new", TokenKind::New),
    ("isvoid", TokenKind::Isvoid),
    ("not", TokenKind::Not),
    ("of", TokenKind::Of),
];

/// Looks a word up in the keyword table, ignoring ASCII case.
///
/// # Example
///
/// ```
/// use coolc_lex::token::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("class"), Some(TokenKind::Class));
/// assert_eq!(keyword_from_ident("ClAsS"), Some(TokenKind::Class));
/// assert_eq!(keyword_from_ident("classy"), None);
/// ```
pub fn keyword_from_ident(word: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(keyword, _)| keyword.eq_ignore_ascii_case(word))
        .map(|&(_, kind)| kind)
}

/// Classifies a word matched by `[A-Za-z_][A-Za-z0-9_]*`.
///
/// Keywords take precedence; otherwise an uppercase first letter makes a
/// type identifier and anything else a plain identifier.
///
/// # Example
///
/// ```
/// use coolc_lex::token::{classify_word, TokenKind};
///
/// assert_eq!(classify_word("WHILE"), TokenKind::While);
/// assert_eq!(classify_word("Main"), TokenKind::TypeIdentifier);
/// assert_eq!(classify_word("main"), TokenKind::Identifier);
/// assert_eq!(classify_word("_tmp"), TokenKind::Identifier);
/// ```
pub fn classify_word(word: &str) -> TokenKind {
    if let Some(kind) = keyword_from_ident(word) {
        return kind;
    }
    match word.as_bytes().first() {
        Some(b) if b.is_ascii_uppercase() => TokenKind::TypeIdentifier,
        _ => TokenKind::Identifier,
    }
}

/// A classified lexeme.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// Token category.
    pub kind: TokenKind,
    /// Source text, or the accumulated contents for string literals.
    pub lexeme: String,
    /// Line on which the token starts (1-based).
    pub line: u32,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) at line {}", self.kind, self.lexeme, self.line)
    }
}
