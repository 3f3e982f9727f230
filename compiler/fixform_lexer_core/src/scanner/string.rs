//! Character literals, `'...'` or `"..."`.
//!
//! A doubled delimiter stands for one delimiter character. A literal may
//! run across a line break when the next line carries a continuation
//! marker; the line break, the indent and the marker stay inside the token
//! and are removed when the literal is cooked.

use super::is_line_break;
use super::markers::scan_continuation;
use crate::{ScanCursor, ScanError, TokenKind};

pub(super) fn scan_string_literal<C: ScanCursor + ?Sized>(
    cursor: &mut C,
) -> Result<TokenKind, ScanError> {
    let quote = cursor.lookahead();
    if quote != '\'' && quote != '"' {
        return Err(ScanError::NoMatch);
    }
    cursor.advance();

    while !cursor.is_eof() {
        let c = cursor.lookahead();

        if is_line_break(c) {
            while !cursor.is_eof() && cursor.lookahead().is_whitespace() {
                cursor.advance();
            }
            // Without a marker the literal simply runs on.
            let _ = scan_continuation(cursor);
            continue;
        }

        cursor.advance();
        if c == quote {
            if cursor.lookahead() != quote {
                cursor.mark_end();
                return Ok(TokenKind::StringLiteral);
            }
            cursor.advance();
        }
    }

    Err(ScanError::UnterminatedString)
}
