//! Diagnostics produced while tokenizing a file.
//!
//! Scanning itself never fails hard: an unterminated string still yields an
//! error token, and a literal that cannot be cooked keeps its token. Each
//! problem is recorded as a [`LexError`] with the span it covers and, where
//! there is an obvious fix, a one-line help text.

use fixform_lexer_core::Span;
use thiserror::Error;

/// A lexer error located in the source.
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
#[error("{kind}")]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// HOW to fix it, if there is an obvious way.
    pub help: Option<&'static str>,
}

/// What kind of lexer error occurred.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    // === String Errors ===
    /// End of input inside a character literal.
    #[error("unterminated string literal")]
    UnterminatedString,

    // === Numeric Errors ===
    /// A BOZ digit that the radix letter does not allow (`B'102'`).
    #[error("invalid digit `{digit}` in base-{radix} literal")]
    InvalidDigitForRadix { digit: char, radix: u8 },
    /// BOZ literal without a radix letter or without digits.
    #[error("malformed BOZ literal")]
    MalformedBoz,
    /// BOZ literal overflowed `u128`.
    #[error("BOZ literal does not fit in 128 bits")]
    BozOverflow,
    /// Integer literal overflowed `u64`.
    #[error("integer literal does not fit in 64 bits")]
    IntOverflow,
    /// Real literal could not be parsed.
    #[error("malformed real literal")]
    FloatParseError,

    // === Character Errors ===
    /// Null byte in the source.
    #[error("null byte in source")]
    InteriorNull,
}

impl LexErrorKind {
    /// One-line help for the error, if there is an obvious fix.
    pub const fn help(self) -> Option<&'static str> {
        match self {
            LexErrorKind::UnterminatedString => Some(
                "close the literal, or continue it with a marker in column 6 of the next line",
            ),
            LexErrorKind::InvalidDigitForRadix { radix: 2, .. } => {
                Some("binary literals (`B`) take only the digits 0 and 1")
            }
            LexErrorKind::InvalidDigitForRadix { radix: 8, .. } => {
                Some("octal literals (`O`) take only the digits 0 to 7")
            }
            LexErrorKind::IntOverflow => {
                Some("use a smaller value (maximum is 18446744073709551615)")
            }
            LexErrorKind::InteriorNull => Some("remove the null byte"),
            LexErrorKind::InvalidDigitForRadix { .. }
            | LexErrorKind::MalformedBoz
            | LexErrorKind::BozOverflow
            | LexErrorKind::FloatParseError => None,
        }
    }
}

impl LexError {
    #[cold]
    pub fn new(span: Span, kind: LexErrorKind) -> Self {
        Self {
            span,
            kind,
            help: kind.help(),
        }
    }

    /// Create an unterminated string error covering the rest of the input.
    #[cold]
    pub fn unterminated_string(span: Span) -> Self {
        Self::new(span, LexErrorKind::UnterminatedString)
    }

    /// Create an interior null error for the byte at `pos`.
    #[cold]
    pub fn interior_null(pos: u32) -> Self {
        Self::new(Span::new(pos, pos.saturating_add(1)), LexErrorKind::InteriorNull)
    }
}
