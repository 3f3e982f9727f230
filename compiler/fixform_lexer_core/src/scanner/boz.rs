//! Binary, octal and hexadecimal constants: `B'1010'`, `O"17"`, `Z'FF'`,
//! or with the radix letter after the closing quote, `'FF'Z`.
//!
//! Digits are only checked to be hexadecimal here. Whether they fit the
//! radix is decided when the literal is cooked.

use crate::{ScanCursor, ScanError, TokenKind};

const INCOMPLETE: ScanError = ScanError::Incomplete {
    kind: TokenKind::BozLiteral,
};

pub(super) fn scan_boz<C: ScanCursor + ?Sized>(cursor: &mut C) -> Result<TokenKind, ScanError> {
    let prefixed = is_radix_letter(cursor.lookahead());
    if prefixed {
        cursor.advance();
    }

    let quote = cursor.lookahead();
    if quote != '\'' && quote != '"' {
        return Err(if prefixed { INCOMPLETE } else { ScanError::NoMatch });
    }
    cursor.advance();

    if !cursor.lookahead().is_ascii_hexdigit() {
        return Err(INCOMPLETE);
    }
    while cursor.lookahead().is_ascii_hexdigit() {
        cursor.advance();
    }

    if cursor.lookahead() != quote {
        return Err(INCOMPLETE);
    }
    cursor.advance();

    if !prefixed {
        if !is_radix_letter(cursor.lookahead()) {
            return Err(INCOMPLETE);
        }
        cursor.advance();
    }

    cursor.mark_end();
    Ok(TokenKind::BozLiteral)
}

#[inline]
fn is_radix_letter(c: char) -> bool {
    matches!(c, 'B' | 'b' | 'O' | 'o' | 'Z' | 'z')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::test_support::{scan_with, Scanned};
    use pretty_assertions::assert_eq;

    fn boz(source: &str) -> Scanned {
        scan_with(source, |cursor| scan_boz(cursor))
    }

    #[test]
    fn prefixed_forms() {
        for source in ["B'1010'", "b\"1010\"", "O'777'", "Z'DEADbeef'", "z\"0\""] {
            let scanned = boz(source);
            assert_eq!(scanned.result, Ok(TokenKind::BozLiteral), "{source:?}");
            assert_eq!(scanned.text, source);
        }
    }

    #[test]
    fn suffixed_form_includes_the_radix_letter() {
        let scanned = boz("'1010'B, X");
        assert_eq!(scanned.result, Ok(TokenKind::BozLiteral));
        assert_eq!(scanned.text, "'1010'B");
        assert_eq!(scanned.rest, ", X");
    }

    #[test]
    fn quotes_must_match() {
        assert_eq!(boz("B'1010\"").result, Err(INCOMPLETE));
        assert_eq!(boz("'FF\"Z").result, Err(INCOMPLETE));
    }

    #[test]
    fn quoted_digits_without_radix_are_not_boz() {
        assert_eq!(boz("'1010'").result, Err(INCOMPLETE));
        assert_eq!(boz("'1010' B").result, Err(INCOMPLETE));
    }

    #[test]
    fn at_least_one_digit() {
        assert_eq!(boz("B''").result, Err(INCOMPLETE));
        assert_eq!(boz("Z'G'").result, Err(INCOMPLETE));
    }

    #[test]
    fn radix_letter_alone_is_incomplete() {
        // `B` consumed, then no quote: the host must fall back to an identifier.
        assert_eq!(boz("BX = 1").result, Err(INCOMPLETE));
    }

    #[test]
    fn anything_else_is_no_match() {
        let scanned = boz("X'1'");
        assert_eq!(scanned.result, Err(ScanError::NoMatch));
        assert!(scanned.span.is_empty());
    }
}
