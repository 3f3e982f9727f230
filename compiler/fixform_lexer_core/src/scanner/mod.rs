//! Context-sensitive scanner for fixed-form source.
//!
//! The grammar engine calls [`scan`] whenever it reaches a position where
//! one of the external token kinds may appear. The dispatcher tries the
//! sub-scanners in a fixed priority order and returns the first match:
//!
//! 1. end of statement (only when requested), which also detects
//!    continuation lines
//! 2. comment marker
//! 3. continuation marker
//! 4. string literal (only when requested)
//! 5. number, then BOZ literal (only when a numeric kind is requested)
//!
//! # Failure and consumed input
//!
//! [`ScanCursor`] has no rollback. A sub-scanner that declines without
//! consuming input returns [`ScanError::NoMatch`] and the next one runs from
//! the same position. A sub-scanner that fails after consuming input returns
//! any other error, and the whole scan stops there: the host must treat the
//! cursor position as garbage and restore its own snapshot if it has one.

mod boz;
mod markers;
mod number;
mod statement;
mod string;

use crate::{ScanCursor, ScanError, TokenKind, ValidKinds};

/// Zero-based column of the continuation marker (column 6 on punched cards).
pub const CONTINUATION_COLUMN: u32 = 5;

/// Zero-based column where `c`, `C` and `*` start a comment line.
pub const COMMENT_COLUMN: u32 = 0;

/// Scan one token, reporting why nothing matched.
///
/// Blanks before the token are skipped in every case. On success the
/// cursor's token window holds the token; on failure its position is
/// unspecified.
pub fn try_scan<C: ScanCursor + ?Sized>(
    cursor: &mut C,
    valid: ValidKinds,
) -> Result<TokenKind, ScanError> {
    skip_while(cursor, is_blank);

    if valid.accepts(TokenKind::EndOfStatement) {
        if let Some(outcome) = attempt(statement::scan_end_of_statement(cursor)) {
            return outcome;
        }
    }

    // No statement to close: line breaks are just whitespace here.
    skip_while(cursor, char::is_whitespace);

    if let Some(outcome) = attempt(markers::scan_comment(cursor)) {
        return outcome;
    }
    if let Some(outcome) = attempt(markers::scan_continuation(cursor)) {
        return outcome;
    }

    if valid.accepts(TokenKind::StringLiteral) {
        if let Some(outcome) = attempt(string::scan_string_literal(cursor)) {
            return outcome;
        }
    }

    if valid.intersects(ValidKinds::NUMERIC) {
        if let Some(outcome) = attempt(number::scan_number(cursor)) {
            return outcome;
        }
        if let Some(outcome) = attempt(boz::scan_boz(cursor)) {
            return outcome;
        }
    }

    Err(ScanError::NoMatch)
}

/// Scan one token. `None` lets the host try its other alternatives.
#[inline]
pub fn scan<C: ScanCursor + ?Sized>(cursor: &mut C, valid: ValidKinds) -> Option<TokenKind> {
    try_scan(cursor, valid).ok()
}

/// Keep a sub-scanner's outcome unless it declined without consuming input.
#[inline]
fn attempt(outcome: Result<TokenKind, ScanError>) -> Option<Result<TokenKind, ScanError>> {
    match outcome {
        Err(ScanError::NoMatch) => None,
        decided => Some(decided),
    }
}

fn skip_while<C: ScanCursor + ?Sized>(cursor: &mut C, pred: impl Fn(char) -> bool) {
    while !cursor.is_eof() && pred(cursor.lookahead()) {
        cursor.skip();
    }
}

/// Horizontal blank: space or tab.
#[inline]
fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

#[inline]
fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Letters, digits and underscore: what may follow `_` in a kind parameter.
#[inline]
fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(test)]
mod tests;
