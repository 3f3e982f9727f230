//! Helpers for running one scanner call over a string.

use crate::{Cursor, ScanCursor, ScanError, SourceBuffer, Span, TokenKind, ValidKinds};

/// Outcome of one scanner call.
#[derive(Debug)]
pub(crate) struct Scanned {
    pub result: Result<TokenKind, ScanError>,
    pub span: Span,
    /// Source text of the token.
    pub text: String,
    /// Source left for the next call (meaningful on success only).
    pub rest: String,
}

/// Run `scanner` over `source`, starting `skip` characters in.
///
/// Starting mid-line keeps the columns honest for column-sensitive tests.
pub(crate) fn scan_from<F>(source: &str, skip: usize, scanner: F) -> Scanned
where
    F: FnOnce(&mut Cursor<'_>) -> Result<TokenKind, ScanError>,
{
    let buf = SourceBuffer::new(source);
    let mut cursor = buf.cursor();
    for _ in 0..skip {
        cursor.skip();
    }
    cursor.begin_token();
    let result = scanner(&mut cursor);
    let span = cursor.finish_token();
    Scanned {
        result,
        span,
        text: source[span.to_range()].to_string(),
        rest: source[span.end as usize..].to_string(),
    }
}

/// Run `scanner` over the whole of `source`.
pub(crate) fn scan_with<F>(source: &str, scanner: F) -> Scanned
where
    F: FnOnce(&mut Cursor<'_>) -> Result<TokenKind, ScanError>,
{
    scan_from(source, 0, scanner)
}

/// Run the full dispatcher once over `source`.
pub(crate) fn dispatch(source: &str, valid: ValidKinds) -> Scanned {
    dispatch_from(source, 0, valid)
}

/// Run the full dispatcher once, starting `skip` characters in.
pub(crate) fn dispatch_from(source: &str, skip: usize, valid: ValidKinds) -> Scanned {
    scan_from(source, skip, |cursor| super::try_scan(cursor, valid))
}
