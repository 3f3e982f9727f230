//! Literal cooking: from a literal's source text to its value.
//!
//! The scanner only finds where a literal ends. These functions take the
//! text of a scanned literal and produce its value, reporting problems the
//! scanner does not check for (digits outside the radix, overflow).
//!
//! - `string_value`: strip delimiters, collapse doubled delimiters, join
//!   continued lines
//! - `boz_value`: radix from the letter (`B` = 2, `O` = 8, `Z` = 16)
//! - `split_kind_param`: separate a kind parameter (`3.14_8`)
//! - `int_value` / `real_value`: numeric value, ignoring blanks and the
//!   kind parameter, with `D` accepted as an exponent letter

use std::iter::Peekable;
use std::str::Chars;

use fixform_lexer_core::CONTINUATION_COLUMN;

use crate::LexErrorKind;

/// Value of a character literal.
///
/// A line break inside the literal is dropped together with the indent of
/// the next line and, when it sits in the continuation column, the
/// continuation marker.
pub fn string_value(text: &str) -> String {
    let mut chars = text.chars();
    let Some(quote) = chars.next() else {
        return String::new();
    };
    let body = chars.as_str();
    let body = body.strip_suffix(quote).unwrap_or(body);

    let mut value = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\n' | '\r' => skip_line_join(&mut chars),
            c if c == quote => {
                // `''` inside the literal stands for one `'`.
                chars.next_if_eq(&quote);
                value.push(quote);
            }
            c => value.push(c),
        }
    }
    value
}

/// Skip the whitespace after a line break, then the continuation marker if
/// it is in the continuation column.
fn skip_line_join(chars: &mut Peekable<Chars<'_>>) {
    let mut column = 0;
    while let Some(c) = chars.next_if(|c| c.is_whitespace()) {
        column = if c == '\n' || c == '\r' { 0 } else { column + 1 };
    }
    if column == CONTINUATION_COLUMN {
        chars.next();
    }
}

/// Value of a BOZ literal, `B'1010'` or `'1010'B`.
///
/// # Errors
///
/// - [`LexErrorKind::MalformedBoz`] without a radix letter or digits
/// - [`LexErrorKind::InvalidDigitForRadix`] for a digit the radix does not
///   allow
/// - [`LexErrorKind::BozOverflow`] when the value needs more than 128 bits
pub fn boz_value(text: &str) -> Result<u128, LexErrorKind> {
    let (letter, quoted) = match text.chars().next() {
        Some(first) if first.is_ascii_alphabetic() => (first, &text[1..]),
        _ => match text.char_indices().next_back() {
            Some((last, letter)) => (letter, &text[..last]),
            None => return Err(LexErrorKind::MalformedBoz),
        },
    };
    let radix: u8 = match letter.to_ascii_uppercase() {
        'B' => 2,
        'O' => 8,
        'Z' => 16,
        _ => return Err(LexErrorKind::MalformedBoz),
    };
    let digits = quoted.trim_matches(|c| c == '\'' || c == '"');
    if digits.is_empty() {
        return Err(LexErrorKind::MalformedBoz);
    }

    let mut value: u128 = 0;
    for digit in digits.chars() {
        let d = digit
            .to_digit(u32::from(radix))
            .ok_or(LexErrorKind::InvalidDigitForRadix { digit, radix })?;
        value = value
            .checked_mul(u128::from(radix))
            .and_then(|v| v.checked_add(u128::from(d)))
            .ok_or(LexErrorKind::BozOverflow)?;
    }
    Ok(value)
}

/// Split a numeric literal into its body and kind parameter.
///
/// `3.14_8` gives `("3.14", Some("8"))`, `42` gives `("42", None)`.
pub fn split_kind_param(text: &str) -> (&str, Option<&str>) {
    match text.split_once('_') {
        Some((body, kind)) => (body, Some(kind)),
        None => (text, None),
    }
}

/// Value of an integer literal.
///
/// # Errors
///
/// [`LexErrorKind::IntOverflow`] when the value does not fit in `u64`.
pub fn int_value(text: &str) -> Result<u64, LexErrorKind> {
    let (body, _) = split_kind_param(text);
    let mut value: u64 = 0;
    for c in body.chars().filter(|&c| !is_blank(c)) {
        let digit = c
            .to_digit(10)
            .ok_or(LexErrorKind::InvalidDigitForRadix { digit: c, radix: 10 })?;
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or(LexErrorKind::IntOverflow)?;
    }
    Ok(value)
}

/// Value of a real literal.
///
/// # Errors
///
/// [`LexErrorKind::FloatParseError`] when the text is not a real literal.
pub fn real_value(text: &str) -> Result<f64, LexErrorKind> {
    let (body, _) = split_kind_param(text);
    let normalized: String = body
        .chars()
        .filter(|&c| !is_blank(c))
        .map(|c| match c {
            'D' | 'd' => 'e',
            c => c,
        })
        .collect();
    normalized
        .parse()
        .map_err(|_| LexErrorKind::FloatParseError)
}

#[inline]
fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}
