//! What the driver asks the scanner for.

use fixform_lexer_core::ValidKinds;

/// Driver configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexOptions {
    /// Literal kinds requested from the scanner. Anything outside
    /// [`ValidKinds::LITERALS`] is ignored. Source the scanner is not asked
    /// to classify falls through to the driver's own word and punctuation
    /// tokens.
    pub literals: ValidKinds,
    /// Emit comment markers and comment bodies. Comments are consumed
    /// either way.
    pub comments: bool,
}

impl Default for LexOptions {
    fn default() -> Self {
        Self {
            literals: ValidKinds::LITERALS,
            comments: true,
        }
    }
}

impl LexOptions {
    /// Stop requesting string literals; quotes become punctuation.
    #[must_use]
    pub fn without_strings(mut self) -> Self {
        self.literals.remove(ValidKinds::STRING_LITERAL);
        self
    }

    /// Stop requesting numeric literals; digits become words.
    #[must_use]
    pub fn without_numbers(mut self) -> Self {
        self.literals.remove(ValidKinds::NUMERIC);
        self
    }

    #[must_use]
    pub fn without_comments(mut self) -> Self {
        self.comments = false;
        self
    }

    /// The kinds to request for the next token.
    ///
    /// End of statement is only requested while a statement is open: with
    /// nothing to close, a comment marker or the end of input would yield
    /// an empty end-of-statement again and again.
    pub fn requested(&self, statement_open: bool) -> ValidKinds {
        let mut valid = (self.literals & ValidKinds::LITERALS)
            | ValidKinds::LINE_CONTINUATION
            | ValidKinds::COMMENT_MARKER;
        valid.set(ValidKinds::END_OF_STATEMENT, statement_open);
        valid
    }
}
