//! Tokens produced by the driver.

use std::fmt;

use fixform_lexer_core::{Span, TokenKind};

/// Kind of a driver token.
///
/// The scanner's seven kinds are wrapped as they are. Everything else is
/// the driver's own coarse lexing of what the scanner declined; it stands in
/// for the grammar's keyword, identifier and operator tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexKind {
    /// A token recognized by the scanner.
    Scanned(TokenKind),
    /// Comment text after a comment marker, up to the end of the line.
    Comment,
    /// Letters, digits, `_` and `$` (`CALL`, `X1`, `DO10I`).
    Word,
    /// A dotted operator or logical constant (`.EQ.`, `.AND.`, `.TRUE.`).
    DotOperator,
    /// Any other single character.
    Punct,
    /// Input that could not be tokenized; an error is recorded for it.
    Error,
}

impl LexKind {
    pub const fn name(self) -> &'static str {
        match self {
            LexKind::Scanned(kind) => kind.name(),
            LexKind::Comment => "comment",
            LexKind::Word => "word",
            LexKind::DotOperator => "dotted operator",
            LexKind::Punct => "punctuation",
            LexKind::Error => "error",
        }
    }

    /// Returns `true` for tokens that belong to a statement.
    ///
    /// Markers, comments and statement ends do not open a statement.
    pub const fn opens_statement(self) -> bool {
        !matches!(
            self,
            LexKind::Scanned(
                TokenKind::EndOfStatement | TokenKind::LineContinuation | TokenKind::CommentMarker
            ) | LexKind::Comment
        )
    }
}

impl fmt::Display for LexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value of a cooked literal.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    Int(u64),
    Real(f64),
    Boz(u128),
    Str(String),
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Int(value) => write!(f, "{value}"),
            LiteralValue::Real(value) => write!(f, "{value:?}"),
            LiteralValue::Boz(value) => write!(f, "{value:#x}"),
            LiteralValue::Str(value) => write!(f, "{value:?}"),
        }
    }
}

/// A token with its location and, for literals that cooked cleanly, its
/// value.
#[derive(Clone, Debug, PartialEq)]
pub struct LexToken {
    pub kind: LexKind,
    pub span: Span,
    pub value: Option<LiteralValue>,
}

impl LexToken {
    pub fn new(kind: LexKind, span: Span) -> Self {
        Self {
            kind,
            span,
            value: None,
        }
    }

    /// Source text of the token. Empty for zero-width tokens.
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        source.get(self.span.to_range()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_slices_the_source() {
        let source = "      X = 1";
        let token = LexToken::new(LexKind::Word, Span::new(6, 7));
        assert_eq!(token.text(source), "X");
        let eos = LexToken::new(LexKind::Scanned(TokenKind::EndOfStatement), Span::point(11));
        assert_eq!(eos.text(source), "");
    }

    #[test]
    fn statement_openers() {
        assert!(LexKind::Word.opens_statement());
        assert!(LexKind::Scanned(TokenKind::StringLiteral).opens_statement());
        assert!(LexKind::Error.opens_statement());
        assert!(!LexKind::Comment.opens_statement());
        assert!(!LexKind::Scanned(TokenKind::LineContinuation).opens_statement());
        assert!(!LexKind::Scanned(TokenKind::CommentMarker).opens_statement());
    }

    #[test]
    fn display_names() {
        assert_eq!(LexKind::Scanned(TokenKind::FloatLiteral).to_string(), "real literal");
        assert_eq!(LexKind::DotOperator.to_string(), "dotted operator");
        assert_eq!(LiteralValue::Boz(255).to_string(), "0xff");
        assert_eq!(LiteralValue::Real(1.0).to_string(), "1.0");
        assert_eq!(LiteralValue::Str("it's".into()).to_string(), "\"it's\"");
    }
}
