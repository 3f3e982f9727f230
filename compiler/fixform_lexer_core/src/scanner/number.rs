//! Integer and real literals: `42`, `1.`, `.5`, `1. 5`, `6.02E+23`, `1D0`,
//! `3.14_8`, `42_int64`.
//!
//! The decimal point is the hard part. `1.EQ.2` must scan as the integer
//! `1` followed by the operator `.EQ.`, so a point directly followed by a
//! letter is read past but only becomes part of the token if digits or an
//! exponent follow. Blanks after the point are insignificant.
//!
//! A numeric token followed by junk keeps its valid prefix: `1D` is the
//! integer `1`, `5_` is the integer `5`.

use super::{is_blank, is_ident_char, skip_while};
use crate::{ScanCursor, ScanError, TokenKind};

pub(super) fn scan_number<C: ScanCursor + ?Sized>(
    cursor: &mut C,
) -> Result<TokenKind, ScanError> {
    let mut kind = TokenKind::IntegerLiteral;

    let whole = eat_digits(cursor);

    let mut point = false;
    if cursor.lookahead() == '.' {
        cursor.advance();
        point = true;
        skip_while(cursor, is_blank);
        if whole && !cursor.lookahead().is_alphanumeric() {
            cursor.mark_end();
            kind = TokenKind::FloatLiteral;
        }
    }

    let fraction = eat_digits(cursor);
    if point && fraction {
        kind = TokenKind::FloatLiteral;
    }

    if !whole && !fraction {
        return Err(if point {
            ScanError::Incomplete {
                kind: TokenKind::FloatLiteral,
            }
        } else {
            ScanError::NoMatch
        });
    }

    if is_exponent_letter(cursor.lookahead()) {
        cursor.advance();
        if matches!(cursor.lookahead(), '+' | '-') {
            cursor.advance();
        }
        if !eat_digits(cursor) {
            return Ok(kind);
        }
        kind = TokenKind::FloatLiteral;
    }

    if cursor.lookahead() == '_' {
        cursor.advance();
        if !cursor.lookahead().is_alphanumeric() {
            return Ok(kind);
        }
        while is_ident_char(cursor.lookahead()) {
            cursor.advance();
        }
        cursor.mark_end();
    }

    Ok(kind)
}

/// Consume a run of decimal digits into the token and mark its end.
///
/// Returns `false`, consuming nothing, if there is no digit here.
fn eat_digits<C: ScanCursor + ?Sized>(cursor: &mut C) -> bool {
    if !cursor.lookahead().is_ascii_digit() {
        return false;
    }
    while cursor.lookahead().is_ascii_digit() {
        cursor.advance();
    }
    cursor.mark_end();
    true
}

/// `E` for default precision, `D` for double precision.
#[inline]
fn is_exponent_letter(c: char) -> bool {
    matches!(c, 'D' | 'd' | 'E' | 'e')
}
