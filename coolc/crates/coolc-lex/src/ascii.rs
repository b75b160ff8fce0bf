//! ASCII character classes for the Cool lexer.
//!
//! Cool source is scanned byte by byte. Identifiers are ASCII only, and
//! everything outside the printable range is either whitespace or an
//! error, so these helpers work on `u8` rather than `char`.

/// Checks if a byte can start an identifier: `[A-Za-z_]`.
///
/// # Example
///
/// ```
/// use coolc_lex::ascii::is_ident_start;
///
/// assert!(is_ident_start(b'a'));
/// assert!(is_ident_start(b'Z'));
/// assert!(is_ident_start(b'_'));
/// assert!(!is_ident_start(b'1'));
/// assert!(!is_ident_start(0xCE)); // first byte of a UTF-8 'α'
/// ```
#[inline]
pub fn is_ident_start(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphabetic()
}

/// Checks if a byte can continue an identifier: `[A-Za-z0-9_]`.
///
/// # Example
///
/// ```
/// use coolc_lex::ascii::is_ident_continue;
///
/// assert!(is_ident_continue(b'a'));
/// assert!(is_ident_continue(b'7'));
/// assert!(is_ident_continue(b'_'));
/// assert!(!is_ident_continue(b'+'));
/// ```
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphanumeric()
}

/// Checks if a byte is a decimal digit.
#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Checks if a byte is whitespace between tokens.
///
/// Space, tab, carriage return, vertical tab, form feed and newline.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n' | 0x0B | 0x0C)
}

/// Checks if a byte is printable ASCII (0x20 through 0x7E).
///
/// # Example
///
/// ```
/// use coolc_lex::ascii::is_printable;
///
/// assert!(is_printable(b' '));
/// assert!(is_printable(b'~'));
/// assert!(!is_printable(b'\t'));
/// assert!(!is_printable(0x7F));
/// ```
#[inline]
pub fn is_printable(b: u8) -> bool {
    (0x20..=0x7E).contains(&b)
}

/// Renders a byte for lexemes and diagnostics.
///
/// Printable bytes render as themselves; anything else uses the escaped
/// form (`\t`, `\n`, `\x80`, ...).
///
/// # Example
///
/// ```
/// use coolc_lex::ascii::display_byte;
///
/// assert_eq!(display_byte(b'#'), "#");
/// assert_eq!(display_byte(b'\\'), "\\");
/// assert_eq!(display_byte(b'\t'), "\\t");
/// assert_eq!(display_byte(0x80), "\\x80");
/// ```
pub fn display_byte(b: u8) -> String {
    if is_printable(b) {
        char::from(b).to_string()
    } else {
        std::ascii::escape_default(b).to_string()
    }
}

/// Builds a `String` from bytes the lexer has already checked are ASCII.
pub(crate) fn ascii_text(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
