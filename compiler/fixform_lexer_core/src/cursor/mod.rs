//! The cursor capability the scanner runs against, and a concrete cursor
//! over a [`SourceBuffer`](crate::SourceBuffer).
//!
//! The scanner never owns input. A host parsing engine hands it something
//! implementing [`ScanCursor`] for the duration of one scan call, and reads
//! the token boundary back from its own cursor afterwards.
//!
//! # Token window
//!
//! Characters are consumed in one of two ways: [`advance`] makes the
//! character part of the token, [`skip`] consumes it as trivia.
//! [`mark_end`] fixes the end of the token at the current position; a
//! scanner may keep reading past the mark to decide whether more input
//! belongs to the token, and everything after the last mark is handed back
//! to the host unconsumed.
//!
//! [`advance`]: ScanCursor::advance
//! [`skip`]: ScanCursor::skip
//! [`mark_end`]: ScanCursor::mark_end

use crate::Span;

/// Host-provided character access for one scan call.
///
/// # Contract
///
/// - `lookahead()` returns `'\0'` at end of input.
/// - `column()` counts characters since the start of the current physical
///   line, starting at 0.
/// - `advance()` and `skip()` are no-ops at end of input.
pub trait ScanCursor {
    /// The character under the cursor.
    fn lookahead(&self) -> char;

    /// Zero-based column of the character under the cursor.
    fn column(&self) -> u32;

    fn is_eof(&self) -> bool;

    /// Consume the current character as part of the token.
    fn advance(&mut self);

    /// Consume the current character without making it part of the token.
    fn skip(&mut self);

    /// End the token at the current position.
    fn mark_end(&mut self);
}

/// A position together with the column it sits at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Mark {
    pos: u32,
    column: u32,
}

/// Cursor over a sentinel-terminated UTF-8 buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`]: a host takes a snapshot before a scan and
/// restores it when the scan fails, which gives it the rollback the
/// [`ScanCursor`] contract does not require.
///
/// # Invariant
///
/// `buf[source_len] == 0x00`, followed by zero padding; `pos` always sits
/// on a character boundary at or before `source_len`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
    column: u32,
    /// Offset of the first `advance`d character of the current token.
    token_start: Option<u32>,
    /// Last `mark_end` of the current token.
    token_end: Option<Mark>,
}

/// Size assertion: the cursor is copied for every scan snapshot.
/// &[u8] = 16, 3 x u32 = 12, Option<u32> = 8, Option<Mark> = 12 => 48 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 56);

impl<'a> Cursor<'a> {
    /// Create a cursor at byte `start` (0, or 3 after a BOM).
    pub(crate) fn new(buf: &'a [u8], source_len: u32, start: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        debug_assert!(start <= source_len, "start must be within the source");
        Self {
            buf,
            pos: start,
            source_len,
            column: 0,
            token_start: None,
            token_end: None,
        }
    }

    /// The byte at the current position (`0x00` at EOF).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Decode the character at the current position.
    ///
    /// Returns `'\0'` at EOF and U+FFFD if the bytes are not valid UTF-8,
    /// which cannot happen for buffers built from `&str`.
    pub fn lookahead(&self) -> char {
        let lead = self.current();
        if lead.is_ascii() {
            return char::from(lead);
        }
        let start = self.pos as usize;
        let end = (start + utf8_char_width(lead) as usize).min(self.source_len as usize);
        std::str::from_utf8(&self.buf[start..end])
            .ok()
            .and_then(|text| text.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Returns `true` once every source byte has been consumed.
    ///
    /// Interior null bytes read as `'\0'` but are not EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Zero-based column of the current character.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Consume one character, keeping the column in step.
    ///
    /// `\n` and a `\r` not followed by `\n` end the line. Every other
    /// character, tab included, occupies one column.
    fn bump(&mut self) {
        if self.is_eof() {
            return;
        }
        let lead = self.current();
        self.pos = (self.pos + utf8_char_width(lead)).min(self.source_len);
        match lead {
            b'\n' => self.column = 0,
            b'\r' if self.current() != b'\n' => self.column = 0,
            _ => self.column += 1,
        }
    }

    /// Consume characters while `pred` holds, outside of any token.
    ///
    /// Used by hosts to lex the input the scanner declines.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_eof() && pred(self.lookahead()) {
            self.bump();
        }
    }

    /// Start a new token window at the current position.
    pub fn begin_token(&mut self) {
        self.token_start = None;
        self.token_end = None;
    }

    /// Close the token window and return its span.
    ///
    /// The cursor moves back to the last [`mark_end`](ScanCursor::mark_end)
    /// so that lookahead read past the token is scanned again by the next
    /// call. Without a mark the token ends at the current position. A token
    /// made only of skipped characters is zero-width at its end.
    pub fn finish_token(&mut self) -> Span {
        if let Some(mark) = self.token_end {
            self.pos = mark.pos;
            self.column = mark.column;
        }
        let end = self.pos;
        let start = self.token_start.map_or(end, |start| start.min(end));
        self.begin_token();
        Span::new(start, end)
    }
}

impl ScanCursor for Cursor<'_> {
    #[inline]
    fn lookahead(&self) -> char {
        Cursor::lookahead(self)
    }

    #[inline]
    fn column(&self) -> u32 {
        self.column
    }

    #[inline]
    fn is_eof(&self) -> bool {
        Cursor::is_eof(self)
    }

    fn advance(&mut self) {
        if self.token_start.is_none() && !self.is_eof() {
            self.token_start = Some(self.pos);
        }
        self.bump();
    }

    fn skip(&mut self) {
        self.bump();
    }

    fn mark_end(&mut self) {
        self.token_end = Some(Mark {
            pos: self.pos,
            column: self.column,
        });
    }
}

/// Returns the number of bytes in the UTF-8 character starting with `byte`.
///
/// - `0xC0..=0xDF`: 2 bytes
/// - `0xE0..=0xEF`: 3 bytes
/// - `0xF0..=0xF7`: 4 bytes
/// - Everything else (ASCII, continuation, invalid): 1 byte
#[inline]
pub fn utf8_char_width(byte: u8) -> u32 {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}
