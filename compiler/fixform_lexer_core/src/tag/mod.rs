//! Token kinds produced by the scanner and the set of kinds a host requests.
//!
//! The scanner only ever classifies the seven kinds below. Keywords,
//! identifiers and operators belong to the grammar engine, which tells the
//! scanner which of these kinds are acceptable through [`ValidKinds`].

use std::fmt;

use bitflags::bitflags;

/// Kind of a token recognized by the scanner.
///
/// The discriminants follow the order of the grammar's external token list,
/// so `kind as usize` indexes a tree-sitter style `valid_symbols` table.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// Fixed-form continuation marker in column 6 of a physical line.
    LineContinuation = 0,
    /// Integer literal, possibly with a kind parameter (`42`, `7_int8`).
    IntegerLiteral = 1,
    /// Real literal (`1.`, `.5`, `1.0D-3`, `3.14_8`).
    FloatLiteral = 2,
    /// Binary/octal/hex literal (`B'1010'`, `'7F'Z`).
    BozLiteral = 3,
    /// Character literal delimited by `'` or `"`.
    StringLiteral = 4,
    /// End of a logical statement (zero-width).
    EndOfStatement = 5,
    /// The single character opening a comment (`!`, or `c`/`C`/`*` in column 1).
    CommentMarker = 6,
}

impl TokenKind {
    /// All kinds in discriminant order.
    pub const ALL: [TokenKind; 7] = [
        TokenKind::LineContinuation,
        TokenKind::IntegerLiteral,
        TokenKind::FloatLiteral,
        TokenKind::BozLiteral,
        TokenKind::StringLiteral,
        TokenKind::EndOfStatement,
        TokenKind::CommentMarker,
    ];

    /// Look up a kind by its discriminant.
    pub fn from_index(index: usize) -> Option<TokenKind> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable name used in diagnostics and token dumps.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::LineContinuation => "line continuation",
            TokenKind::IntegerLiteral => "integer literal",
            TokenKind::FloatLiteral => "real literal",
            TokenKind::BozLiteral => "BOZ literal",
            TokenKind::StringLiteral => "string literal",
            TokenKind::EndOfStatement => "end of statement",
            TokenKind::CommentMarker => "comment marker",
        }
    }

    /// Returns `true` for the four literal kinds.
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntegerLiteral
                | TokenKind::FloatLiteral
                | TokenKind::BozLiteral
                | TokenKind::StringLiteral
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Token kinds the grammar accepts at the current parse position.
    ///
    /// Supplied fresh for every scan call. Bit `n` corresponds to the
    /// [`TokenKind`] with discriminant `n`.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ValidKinds: u8 {
        const LINE_CONTINUATION = 1 << 0;
        const INTEGER_LITERAL = 1 << 1;
        const FLOAT_LITERAL = 1 << 2;
        const BOZ_LITERAL = 1 << 3;
        const STRING_LITERAL = 1 << 4;
        const END_OF_STATEMENT = 1 << 5;
        const COMMENT_MARKER = 1 << 6;

        /// Kinds that gate the numeric and BOZ scanners.
        const NUMERIC = Self::INTEGER_LITERAL.bits()
            | Self::FLOAT_LITERAL.bits()
            | Self::BOZ_LITERAL.bits();
        /// Every literal kind.
        const LITERALS = Self::NUMERIC.bits() | Self::STRING_LITERAL.bits();
    }
}

impl ValidKinds {
    /// The single-bit set for `kind`.
    pub const fn of(kind: TokenKind) -> ValidKinds {
        ValidKinds::from_bits_retain(1 << kind as u8)
    }

    /// Returns `true` if `kind` is in the set.
    pub const fn accepts(self, kind: TokenKind) -> bool {
        self.contains(ValidKinds::of(kind))
    }

    /// Build a set from a `valid_symbols` table indexed by kind discriminant.
    ///
    /// Entries past the last kind are ignored; missing entries count as
    /// not valid.
    pub fn from_valid_symbols(valid: &[bool]) -> ValidKinds {
        valid
            .iter()
            .enumerate()
            .filter(|&(_, &is_valid)| is_valid)
            .filter_map(|(index, _)| TokenKind::from_index(index))
            .fold(ValidKinds::empty(), |set, kind| set | ValidKinds::of(kind))
    }
}

impl From<TokenKind> for ValidKinds {
    fn from(kind: TokenKind) -> Self {
        ValidKinds::of(kind)
    }
}
