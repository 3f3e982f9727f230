//! Owned source text laid out for the scanner, plus a line index.
//!
//! The bytes are followed by a NUL sentinel, so the cursor can look one
//! byte past the last character without a bounds check. The allocation is
//! padded with zeros up to a multiple of 64 bytes; the padding also covers
//! a truncated multi-byte lookahead at the very end.
//!
//! # Encoding Issues
//!
//! Construction records two things a driver may want to report:
//! - a leading UTF-8 BOM. The cursor starts after it, so column 0 of the
//!   first line is the first real character (a comment letter in column 1
//!   would otherwise be missed).
//! - NUL bytes inside the text. The cursor reads them as `'\0'` but keeps
//!   going; only the sentinel ends the input.
//!
//! `fixform_lexer` turns the NUL bytes into diagnostics.

use crate::{Cursor, Span};

/// Allocation granule for the padded buffer.
const PAD_TO: usize = 64;

/// U+FEFF encoded as UTF-8.
const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Source text followed by a NUL sentinel and zero padding.
///
/// ```text
/// bytes: [ text ........ | 0x00 | 0x00 ... ]
///          0             len      multiple of 64
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    bytes: Vec<u8>,
    /// Text length; `bytes[len]` is the sentinel.
    len: u32,
    /// Where the cursor starts: 3 after a BOM, else 0.
    start: u32,
    /// Offset of the first byte of each line, ascending.
    lines: Vec<u32>,
    issues: Vec<EncodingIssue>,
}

/// Something unusual about the bytes of the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    pub kind: EncodingIssueKind,
    /// Byte offset of the issue.
    pub pos: u32,
    /// Byte length of the offending sequence.
    pub len: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// Byte order mark at offset 0. Skipped; not an error.
    Utf8Bom,
    /// A NUL byte before the end of the text.
    InteriorNull,
}

impl SourceBuffer {
    /// Copy `source` into a padded, sentinel-terminated buffer.
    ///
    /// A source longer than `u32::MAX` bytes is cut off at that length.
    pub fn new(source: &str) -> Self {
        let text = source.as_bytes();
        let padded = (text.len() / PAD_TO + 1) * PAD_TO;
        let mut bytes = vec![0u8; padded];
        bytes[..text.len()].copy_from_slice(text);

        let (start, issues) = inspect_encoding(text);
        Self {
            bytes,
            len: u32::try_from(text.len()).unwrap_or(u32::MAX),
            start,
            lines: index_lines(text, start),
            issues,
        }
    }

    /// The source text as bytes, without sentinel or padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// The whole allocation: text, sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// A cursor at the first character (past a BOM, if any).
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.bytes, self.len, self.start)
    }

    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Source text covered by `span`.
    ///
    /// Spans produced by a [`Cursor`] always fall on character boundaries.
    /// Any other span, or one past the end, reads as empty.
    pub fn text(&self, span: Span) -> &str {
        self.as_bytes()
            .get(span.to_range())
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .unwrap_or_default()
    }

    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.issues
    }

    /// Number of lines. An empty source has one empty line.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// 1-based line and 1-based character column of byte offset `pos`.
    ///
    /// Offsets past the end clamp to the end; offsets inside a leading BOM
    /// clamp to the first character.
    pub fn line_col(&self, pos: u32) -> (u32, u32) {
        let pos = pos.clamp(self.start, self.len);
        // lines[0] == start <= pos, so at least one line qualifies.
        let line = self.lines.partition_point(|&first| first <= pos);
        let first = self.lines[line - 1];
        let prefix = &self.bytes[first as usize..pos as usize];
        let column = std::str::from_utf8(prefix).map_or(prefix.len(), |s| s.chars().count());
        (
            u32::try_from(line).unwrap_or(u32::MAX),
            u32::try_from(column + 1).unwrap_or(u32::MAX),
        )
    }
}

/// Find the BOM and any NUL bytes. Returns the cursor start offset.
fn inspect_encoding(text: &[u8]) -> (u32, Vec<EncodingIssue>) {
    let mut issues = Vec::new();
    let start = if text.starts_with(BOM) {
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        });
        3
    } else {
        0
    };
    issues.extend(
        memchr::memchr_iter(b'\0', text)
            .filter_map(|pos| u32::try_from(pos).ok())
            .map(|pos| EncodingIssue {
                kind: EncodingIssueKind::InteriorNull,
                pos,
                len: 1,
            }),
    );
    (start, issues)
}

/// Line start offsets. `\n`, `\r\n` and a lone `\r` each end a line, as in
/// the cursor's column tracking.
fn index_lines(text: &[u8], start: u32) -> Vec<u32> {
    let mut lines = vec![start];
    for pos in memchr::memchr2_iter(b'\n', b'\r', text) {
        let crlf = text[pos] == b'\r' && text.get(pos + 1) == Some(&b'\n');
        if crlf {
            continue;
        }
        if let Ok(next) = u32::try_from(pos + 1) {
            lines.push(next);
        }
    }
    lines
}
