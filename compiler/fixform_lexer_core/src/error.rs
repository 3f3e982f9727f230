//! Why a scan produced no token.

use thiserror::Error;

use crate::TokenKind;

/// Failure of a sub-scanner or of a whole scan call.
///
/// None of these is fatal: the host decides whether a failed scan at a
/// given position is a syntax error. A numeric token followed by junk
/// (`1D`, `5_`) is not an error at all; the scanner keeps the valid prefix.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum ScanError {
    /// Preconditions not met. No input was consumed, so the next
    /// sub-scanner may try the same position.
    #[error("no token matched")]
    NoMatch,

    /// End of input inside a string literal.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A sub-scanner consumed input and then found it was not looking at a
    /// token of its kind. The cursor is past the start of the attempt and
    /// no other sub-scanner may run from there.
    #[error("incomplete {kind}")]
    Incomplete { kind: TokenKind },
}

impl ScanError {
    /// Returns `true` if the scanner declined without consuming input.
    pub const fn is_no_match(self) -> bool {
        matches!(self, ScanError::NoMatch)
    }
}
