use super::test_support::{dispatch, dispatch_from};
use super::*;
use crate::{SourceBuffer, Span};
use pretty_assertions::assert_eq;

/// What a grammar engine asks for right after an expression operand.
fn after_operand() -> ValidKinds {
    ValidKinds::END_OF_STATEMENT | ValidKinds::LINE_CONTINUATION | ValidKinds::COMMENT_MARKER
}

/// What a grammar engine asks for where an expression operand may start.
fn operand() -> ValidKinds {
    ValidKinds::LITERALS | ValidKinds::LINE_CONTINUATION | ValidKinds::COMMENT_MARKER
}

// === Ordering ===

#[test]
fn blanks_are_skipped_before_any_token() {
    let scanned = dispatch("   42", operand());
    assert_eq!(scanned.result, Ok(TokenKind::IntegerLiteral));
    assert_eq!(scanned.span, Span::new(3, 5));
}

#[test]
fn end_of_statement_on_semicolon() {
    let scanned = dispatch_from("      X = 1;Y = 2", 11, after_operand());
    assert_eq!(scanned.result, Ok(TokenKind::EndOfStatement));
    assert_eq!(scanned.text, "");
    assert_eq!(scanned.rest, "Y = 2");
}

#[test]
fn end_of_statement_at_end_of_input() {
    let scanned = dispatch("   ", after_operand());
    assert_eq!(scanned.result, Ok(TokenKind::EndOfStatement));
    assert_eq!(scanned.span, Span::point(3));
}

#[test]
fn line_breaks_are_whitespace_when_no_statement_is_open() {
    let scanned = dispatch("\n\n      42", operand());
    assert_eq!(scanned.result, Ok(TokenKind::IntegerLiteral));
    assert_eq!(scanned.text, "42");
}

#[test]
fn continuation_line_does_not_close_the_statement() {
    let source = "      X = 1\n     &  + 2";
    let scanned = dispatch_from(source, 11, ValidKinds::all());
    assert_eq!(scanned.result, Ok(TokenKind::LineContinuation));
    assert_eq!(scanned.text, "");
    assert_eq!(scanned.rest, "  + 2");
}

#[test]
fn continuation_marker_without_end_of_statement() {
    // A grammar engine inside an expression that spans the break.
    let source = "      X = 1 +\n     &2";
    let scanned = dispatch_from(source, 13, operand());
    assert_eq!(scanned.result, Ok(TokenKind::LineContinuation));
    assert_eq!(scanned.rest, "2");
}

#[test]
fn trailing_comment_closes_the_statement_first() {
    let source = "      X = 1 ! note";
    let scanned = dispatch_from(source, 11, after_operand());
    assert_eq!(scanned.result, Ok(TokenKind::EndOfStatement));
    assert_eq!(scanned.rest, "! note");

    let marker = dispatch_from(source, 12, ValidKinds::COMMENT_MARKER);
    assert_eq!(marker.result, Ok(TokenKind::CommentMarker));
    assert_eq!(marker.text, "!");
}

#[test]
fn comment_line_marker_is_one_character() {
    let scanned = dispatch("C this is a comment", ValidKinds::COMMENT_MARKER);
    assert_eq!(scanned.result, Ok(TokenKind::CommentMarker));
    assert_eq!(scanned.text, "C");
    assert_eq!(scanned.rest, " this is a comment");
}

#[test]
fn markers_are_recognized_even_when_not_requested() {
    assert_eq!(
        dispatch("* note", ValidKinds::empty()).result,
        Ok(TokenKind::CommentMarker)
    );
    assert_eq!(
        dispatch("     $X", ValidKinds::empty()).result,
        Ok(TokenKind::LineContinuation)
    );
}

// === Requested kinds ===

#[test]
fn string_only_when_requested() {
    let scanned = dispatch("'it''s'", ValidKinds::STRING_LITERAL);
    assert_eq!(scanned.result, Ok(TokenKind::StringLiteral));
    assert_eq!(scanned.text, "'it''s'");

    assert_eq!(
        dispatch("'it''s'", ValidKinds::empty()).result,
        Err(ScanError::NoMatch)
    );
}

#[test]
fn numbers_only_when_a_numeric_kind_is_requested() {
    assert_eq!(
        dispatch("42", ValidKinds::STRING_LITERAL).result,
        Err(ScanError::NoMatch)
    );
    // Any one numeric kind enables both numeric scanners.
    assert_eq!(
        dispatch("42", ValidKinds::BOZ_LITERAL).result,
        Ok(TokenKind::IntegerLiteral)
    );
    assert_eq!(
        dispatch("B'101'", ValidKinds::INTEGER_LITERAL).result,
        Ok(TokenKind::BozLiteral)
    );
}

#[test]
fn string_wins_over_suffixed_boz() {
    let scanned = dispatch("'1010'B", operand());
    assert_eq!(scanned.result, Ok(TokenKind::StringLiteral));
    assert_eq!(scanned.text, "'1010'");

    let scanned = dispatch("'1010'B", ValidKinds::NUMERIC);
    assert_eq!(scanned.result, Ok(TokenKind::BozLiteral));
    assert_eq!(scanned.text, "'1010'B");
}

// === Literal shapes ===

#[test]
fn numeric_literal_shapes() {
    let cases = [
        ("1.EQ.2", TokenKind::IntegerLiteral, "1"),
        ("1.0", TokenKind::FloatLiteral, "1.0"),
        ("1.", TokenKind::FloatLiteral, "1."),
        ("1D", TokenKind::IntegerLiteral, "1"),
        ("3.14_8", TokenKind::FloatLiteral, "3.14_8"),
        ("5_", TokenKind::IntegerLiteral, "5"),
        ("B'1010'", TokenKind::BozLiteral, "B'1010'"),
        ("'1010'B", TokenKind::BozLiteral, "'1010'B"),
    ];
    for (source, kind, text) in cases {
        let scanned = dispatch(source, ValidKinds::NUMERIC);
        assert_eq!(scanned.result, Ok(kind), "{source:?}");
        assert_eq!(scanned.text, text, "{source:?}");
    }
}

// === Failures ===

#[test]
fn nothing_to_scan() {
    assert_eq!(dispatch("X = 1", operand()).result, Err(ScanError::NoMatch));
    assert_eq!(dispatch("", operand()).result, Err(ScanError::NoMatch));
}

#[test]
fn unterminated_string_stops_the_scan() {
    let scanned = dispatch("'abc", ValidKinds::all());
    assert_eq!(scanned.result, Err(ScanError::UnterminatedString));
}

#[test]
fn failed_scanner_is_not_followed_by_another() {
    // `.EQ.` consumed a point, so the BOZ scanner must not run after it.
    assert_eq!(
        dispatch(".EQ.", ValidKinds::NUMERIC).result,
        Err(ScanError::Incomplete {
            kind: TokenKind::FloatLiteral
        })
    );
    assert_eq!(
        dispatch("'1010'", ValidKinds::NUMERIC).result,
        Err(ScanError::Incomplete {
            kind: TokenKind::BozLiteral
        })
    );
}

#[test]
fn scan_collapses_errors() {
    let buf = SourceBuffer::new("1.5 'abc");
    let mut cursor = buf.cursor();
    assert_eq!(scan(&mut cursor, operand()), Some(TokenKind::FloatLiteral));
    assert_eq!(cursor.finish_token(), Span::new(0, 3));
    assert_eq!(scan(&mut cursor, operand()), None);
}

#[test]
fn scan_through_a_trait_object() {
    let buf = SourceBuffer::new("  7");
    let mut cursor = buf.cursor();
    let dyn_cursor: &mut dyn ScanCursor = &mut cursor;
    assert_eq!(
        try_scan(dyn_cursor, ValidKinds::NUMERIC),
        Ok(TokenKind::IntegerLiteral)
    );
    assert_eq!(cursor.finish_token(), Span::new(2, 3));
}

// === Property Tests ===

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_dispatch {
    use crate::scanner::test_support::dispatch_from;
    use crate::{TokenKind, ValidKinds};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn tokens_stay_inside_the_scanned_region(
            source in "[ \\t\\n\\r;!cC*&'\"0-9.dDeE+_bBoOzZxX]{0,48}",
            skip in 0usize..48,
            bits in 0u8..128,
        ) {
            let skip = skip.min(source.len());
            let scanned = dispatch_from(&source, skip, ValidKinds::from_bits_truncate(bits));
            if scanned.result.is_ok() {
                prop_assert!(scanned.span.start as usize >= skip);
                prop_assert!(scanned.span.end as usize <= source.len());
                prop_assert_eq!(scanned.text.len(), scanned.span.len() as usize);
            }
        }

        #[test]
        fn unrequested_scan_yields_only_markers(
            source in "[ \\t\\nX=1!cC*&]{0,24}",
            skip in 0usize..24,
        ) {
            let skip = skip.min(source.len());
            if let Ok(kind) = dispatch_from(&source, skip, ValidKinds::empty()).result {
                prop_assert!(matches!(
                    kind,
                    TokenKind::CommentMarker | TokenKind::LineContinuation
                ));
            }
        }
    }
}
