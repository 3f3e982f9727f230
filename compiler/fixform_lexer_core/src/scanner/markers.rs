//! Single-character markers whose meaning depends on the column.

use super::{is_blank, COMMENT_COLUMN, CONTINUATION_COLUMN};
use crate::{ScanCursor, ScanError, TokenKind};

/// `!` anywhere, or `c`, `C`, `*` in the first column.
pub(super) fn is_comment_marker<C: ScanCursor + ?Sized>(cursor: &C) -> bool {
    match cursor.lookahead() {
        '!' => true,
        'c' | 'C' | '*' => cursor.column() == COMMENT_COLUMN,
        _ => false,
    }
}

/// Emit the comment marker itself. The comment body is left to the grammar.
pub(super) fn scan_comment<C: ScanCursor + ?Sized>(cursor: &mut C) -> Result<TokenKind, ScanError> {
    if !is_comment_marker(cursor) {
        return Err(ScanError::NoMatch);
    }
    cursor.advance();
    cursor.mark_end();
    Ok(TokenKind::CommentMarker)
}

/// A non-blank character in column 6 continues the previous line.
///
/// The marker is skipped, so the token is zero-width and the marker belongs
/// to no token's text.
pub(super) fn scan_continuation<C: ScanCursor + ?Sized>(
    cursor: &mut C,
) -> Result<TokenKind, ScanError> {
    if cursor.column() != CONTINUATION_COLUMN || cursor.is_eof() || is_blank(cursor.lookahead()) {
        return Err(ScanError::NoMatch);
    }
    cursor.skip();
    Ok(TokenKind::LineContinuation)
}
