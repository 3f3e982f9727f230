//! Whole-file tokenization driven through the scanner.
//!
//! A grammar engine calls the scanner with the token kinds acceptable at
//! its current parse state and lexes everything else itself. [`TokenStream`]
//! plays that part for a flat token dump: it asks the scanner first and,
//! when the scanner declines, rolls the cursor back and lexes a coarse host
//! token (a word, a dotted operator or a punctuation character).
//!
//! # Request policy
//!
//! - literal kinds: as configured in [`LexOptions`]
//! - end of statement: only while a statement is open
//! - comment and continuation markers: always (the scanner recognizes them
//!   regardless)
//!
//! After a comment marker the driver consumes the rest of the line as the
//! comment body. The scanner leaves comment text alone, and scanning it
//! would turn prose into tokens.

use fixform_lexer_core::{
    try_scan, Cursor, EncodingIssueKind, ScanCursor, ScanError, SourceBuffer, Span, TokenKind,
};
use tracing::{debug, trace};

use crate::cook::{boz_value, int_value, real_value, string_value};
use crate::{LexError, LexKind, LexOptions, LexToken, LiteralValue};

/// Iterator over the tokens of one source buffer.
///
/// Errors found along the way are collected and available through
/// [`errors`](Self::errors) or [`into_errors`](Self::into_errors) once the
/// stream is exhausted.
pub struct TokenStream<'src> {
    buf: &'src SourceBuffer,
    cursor: Cursor<'src>,
    options: LexOptions,
    /// A statement token has been produced since the last end of statement.
    statement_open: bool,
    /// The previous token was a comment marker; its body comes next.
    comment_pending: bool,
    errors: Vec<LexError>,
}

impl<'src> TokenStream<'src> {
    pub fn new(buf: &'src SourceBuffer, options: LexOptions) -> Self {
        let errors = buf
            .encoding_issues()
            .iter()
            .filter(|issue| issue.kind == EncodingIssueKind::InteriorNull)
            .map(|issue| LexError::interior_null(issue.pos))
            .collect();
        Self {
            buf,
            cursor: buf.cursor(),
            options,
            statement_open: false,
            comment_pending: false,
            errors,
        }
    }

    /// Errors recorded so far.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<LexError> {
        self.errors
    }

    /// Produce the next token, comments included.
    fn next_token(&mut self) -> Option<LexToken> {
        if std::mem::take(&mut self.comment_pending) {
            if let Some(body) = self.comment_body() {
                return Some(body);
            }
        }

        loop {
            let snapshot = self.cursor;
            self.cursor.begin_token();
            let valid = self.options.requested(self.statement_open);

            match try_scan(&mut self.cursor, valid) {
                Ok(kind) => {
                    let span = self.cursor.finish_token();
                    return Some(self.scanned(kind, span));
                }
                Err(ScanError::UnterminatedString) => {
                    // The scanner ran to the end of input looking for the quote.
                    let span = self.cursor.finish_token();
                    debug!(
                        start = span.start,
                        end = span.end,
                        "unterminated string literal"
                    );
                    self.errors.push(LexError::unterminated_string(span));
                    return Some(LexToken::new(LexKind::Error, span));
                }
                Err(err) => {
                    if err.is_no_match() {
                        trace!(pos = snapshot.pos(), "scanner declined");
                    } else {
                        debug!(pos = snapshot.pos(), %err, "scanner gave up; rolling back");
                    }
                    self.cursor = snapshot;
                    if let Some(token) = self.host_token() {
                        return Some(token);
                    }
                    if !self.statement_open {
                        return None;
                    }
                    // Whitespace the scanner does not skip stood before the
                    // line break or end of input; the statement ends there.
                }
            }
        }
    }

    // ─── Scanner tokens ───────────────────────────────────────────────────

    fn scanned(&mut self, kind: TokenKind, span: Span) -> LexToken {
        let mut token = LexToken::new(LexKind::Scanned(kind), span);
        match kind {
            TokenKind::EndOfStatement => self.statement_open = false,
            TokenKind::CommentMarker => self.comment_pending = true,
            TokenKind::LineContinuation => {}
            TokenKind::IntegerLiteral
            | TokenKind::FloatLiteral
            | TokenKind::BozLiteral
            | TokenKind::StringLiteral => token.value = self.cook(kind, span),
        }
        token
    }

    /// Cook a literal, recording an error if its value is unusable.
    fn cook(&mut self, kind: TokenKind, span: Span) -> Option<LiteralValue> {
        let text = self.buf.text(span);
        let cooked = match kind {
            TokenKind::IntegerLiteral => int_value(text).map(LiteralValue::Int),
            TokenKind::FloatLiteral => real_value(text).map(LiteralValue::Real),
            TokenKind::BozLiteral => boz_value(text).map(LiteralValue::Boz),
            TokenKind::StringLiteral => Ok(LiteralValue::Str(string_value(text))),
            _ => return None,
        };
        match cooked {
            Ok(value) => Some(value),
            Err(err) => {
                debug!(start = span.start, end = span.end, %err, "literal does not cook");
                self.errors.push(LexError::new(span, err));
                None
            }
        }
    }

    /// The text after a comment marker, up to the line break.
    fn comment_body(&mut self) -> Option<LexToken> {
        let start = self.cursor.pos();
        self.cursor.eat_while(|c| c != '\n' && c != '\r');
        let end = self.cursor.pos();
        (end > start).then(|| LexToken::new(LexKind::Comment, Span::new(start, end)))
    }

    // ─── Host tokens ──────────────────────────────────────────────────────

    /// Lex one token the scanner declined.
    ///
    /// `None` at end of input, and at a line break while a statement is
    /// open: the line break is the scanner's to resolve.
    fn host_token(&mut self) -> Option<LexToken> {
        let open = self.statement_open;
        self.cursor
            .eat_while(|c| c.is_whitespace() && !(open && is_line_break(c)));
        if self.cursor.is_eof() || is_line_break(self.cursor.lookahead()) {
            return None;
        }

        let start = self.cursor.pos();
        let c = self.cursor.lookahead();
        let kind = if is_word_char(c) {
            self.cursor.eat_while(is_word_char);
            LexKind::Word
        } else if c == '.' && self.dot_operator() {
            LexKind::DotOperator
        } else {
            self.cursor.skip();
            LexKind::Punct
        };
        Some(LexToken::new(kind, Span::new(start, self.cursor.pos())))
    }

    /// Consume `.` letters `.` (`.EQ.`, `.TRUE.`) if that is what follows.
    fn dot_operator(&mut self) -> bool {
        let mut probe = self.cursor;
        probe.skip();
        let letters = probe.pos();
        probe.eat_while(|c| c.is_ascii_alphabetic());
        if probe.pos() == letters || probe.lookahead() != '.' {
            return false;
        }
        probe.skip();
        self.cursor = probe;
        true
    }
}

impl Iterator for TokenStream<'_> {
    type Item = LexToken;

    fn next(&mut self) -> Option<LexToken> {
        loop {
            let token = self.next_token()?;
            if token.kind.opens_statement() {
                self.statement_open = true;
            }
            trace!(
                kind = %token.kind,
                start = token.span.start,
                end = token.span.end,
                "token"
            );
            if self.options.comments || !is_comment(token.kind) {
                return Some(token);
            }
        }
    }
}

fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Letters, digits, `_` and `$`.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn is_comment(kind: LexKind) -> bool {
    matches!(
        kind,
        LexKind::Comment | LexKind::Scanned(TokenKind::CommentMarker)
    )
}
