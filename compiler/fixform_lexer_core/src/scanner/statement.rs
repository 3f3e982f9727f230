//! Statement termination.
//!
//! A statement ends at `;`, at end of input, at a line break, or at a
//! comment marker. A line break only ends the statement if the next
//! non-blank line does not carry a continuation marker, so continuation
//! detection lives here too.

use super::markers::{is_comment_marker, scan_continuation};
use super::skip_while;
use crate::{ScanCursor, ScanError, TokenKind};

pub(super) fn scan_end_of_statement<C: ScanCursor + ?Sized>(
    cursor: &mut C,
) -> Result<TokenKind, ScanError> {
    if cursor.is_eof() || cursor.lookahead() == ';' {
        cursor.skip();
        return Ok(TokenKind::EndOfStatement);
    }

    match cursor.lookahead() {
        '\r' => {
            cursor.skip();
            if cursor.lookahead() == '\n' {
                cursor.skip();
            }
        }
        '\n' => cursor.skip(),
        // The marker stays for the comment scanner.
        _ if is_comment_marker(cursor) => {}
        _ => return Err(ScanError::NoMatch),
    }

    // Blank lines between here and the next statement are trivia.
    skip_while(cursor, char::is_whitespace);

    if scan_continuation(cursor).is_ok() {
        return Ok(TokenKind::LineContinuation);
    }
    Ok(TokenKind::EndOfStatement)
}
