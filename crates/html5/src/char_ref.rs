//! Character-reference resolution.
//!
//! Implements "consume a character reference": numeric (`&#...;` / `&#x...;`)
//! and named (`&amp;` and friends) forms, with the attribute-context rules for
//! legacy references that lack a trailing semicolon. The cursor enters on the
//! `&`; on any failure it is reset there so the caller can emit the `&`
//! literally.
//!
//! A resolved reference is one or, rarely, two codepoints; callers append both
//! in order to the pending text or attribute buffer.

use crate::cursor::{REPLACEMENT_CHAR, Utf8Cursor, is_invalid_codepoint};
use crate::entities::{LONGEST_REFERENCE_NAME, lookup};
use crate::error::{ErrorDetail, ErrorKind, ErrorSink, ParseError};
use crate::span::Span;

/// The decoded codepoints of a character reference. `first` is `None` when no
/// reference was consumed; `second` is set only for the handful of named
/// references that expand to two codepoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct CharRef {
    pub(crate) first: Option<char>,
    pub(crate) second: Option<char>,
}

impl CharRef {
    const NONE: CharRef = CharRef {
        first: None,
        second: None,
    };

    fn single(c: char) -> CharRef {
        CharRef {
            first: Some(c),
            second: None,
        }
    }
}

/// Replacements for numeric references naming windows-1252 byte values (and
/// NUL/CR), per the HTML5 table. Every hit is a parse error.
fn numeric_replacement(codepoint: u32) -> Option<char> {
    Some(match codepoint {
        0x00 => '\u{FFFD}',
        0x0D => '\u{0D}',
        0x80 => '\u{20AC}',
        0x81 => '\u{81}',
        0x82 => '\u{201A}',
        0x83 => '\u{0192}',
        0x84 => '\u{201E}',
        0x85 => '\u{2026}',
        0x86 => '\u{2020}',
        0x87 => '\u{2021}',
        0x88 => '\u{02C6}',
        0x89 => '\u{2030}',
        0x8A => '\u{0160}',
        0x8B => '\u{2039}',
        0x8C => '\u{0152}',
        0x8D => '\u{8D}',
        0x8E => '\u{017D}',
        0x8F => '\u{8F}',
        0x90 => '\u{90}',
        0x91 => '\u{2018}',
        0x92 => '\u{2019}',
        0x93 => '\u{201C}',
        0x94 => '\u{201D}',
        0x95 => '\u{2022}',
        0x96 => '\u{2013}',
        0x97 => '\u{2014}',
        0x98 => '\u{02DC}',
        0x99 => '\u{2122}',
        0x9A => '\u{0161}',
        0x9B => '\u{203A}',
        0x9C => '\u{0153}',
        0x9D => '\u{9D}',
        0x9E => '\u{017E}',
        0x9F => '\u{0178}',
        _ => return None,
    })
}

fn add_char_ref_error(
    cursor: &Utf8Cursor<'_>,
    errors: &mut ErrorSink,
    kind: ErrorKind,
    detail: ErrorDetail,
) {
    errors.record(ParseError {
        kind,
        position: cursor.mark_position(),
        original_text: cursor.span_from_mark(),
        detail,
    });
}

/// Consumes a character reference at the cursor, which must sit on the `&`.
///
/// `additional_allowed_char` is the extra terminator for attribute-value
/// contexts (the closing quote, or `>` for unquoted values). Returns the
/// decoded codepoints and `false` if a parse error was recorded. When nothing
/// is consumed the cursor is back on the `&`.
pub(crate) fn consume_char_ref(
    cursor: &mut Utf8Cursor<'_>,
    additional_allowed_char: Option<char>,
    is_in_attribute: bool,
    errors: &mut ErrorSink,
) -> (CharRef, bool) {
    cursor.mark();
    debug_assert_eq!(cursor.current(), Some('&'));
    cursor.advance(errors);
    let c = cursor.current();
    if c.is_some() && c == additional_allowed_char {
        cursor.reset(errors);
        return (CharRef::NONE, true);
    }
    match c {
        Some('\t') | Some('\n') | Some('\x0C') | Some(' ') | Some('<') | Some('&') | None => {
            cursor.reset(errors);
            (CharRef::NONE, true)
        }
        Some('#') => consume_numeric_ref(cursor, errors),
        Some(_) => consume_named_ref(cursor, is_in_attribute, errors),
    }
}

fn consume_numeric_ref(cursor: &mut Utf8Cursor<'_>, errors: &mut ErrorSink) -> (CharRef, bool) {
    cursor.advance(errors); // past '#'
    let mut is_hex = false;
    if matches!(cursor.current(), Some('x') | Some('X')) {
        is_hex = true;
        cursor.advance(errors);
    }

    let base: u32 = if is_hex { 16 } else { 10 };
    let mut codepoint: u32 = 0;
    let mut seen_digit = false;
    while let Some(digit) = cursor.current().and_then(|c| c.to_digit(base)) {
        seen_digit = true;
        // Saturate instead of wrapping so absurdly long digit runs still land
        // in the out-of-range branch below.
        codepoint = codepoint.saturating_mul(base).saturating_add(digit);
        cursor.advance(errors);
    }
    if !seen_digit {
        add_char_ref_error(
            cursor,
            errors,
            ErrorKind::NumericCharRefNoDigits,
            ErrorDetail::Codepoint(0),
        );
        cursor.reset(errors);
        return (CharRef::NONE, false);
    }

    let mut status = true;
    if cursor.current() == Some(';') {
        cursor.advance(errors);
    } else {
        add_char_ref_error(
            cursor,
            errors,
            ErrorKind::NumericCharRefWithoutSemicolon,
            ErrorDetail::Codepoint(u64::from(codepoint)),
        );
        status = false;
    }

    if let Some(replacement) = numeric_replacement(codepoint) {
        add_char_ref_error(
            cursor,
            errors,
            ErrorKind::NumericCharRefInvalid,
            ErrorDetail::Codepoint(u64::from(codepoint)),
        );
        return (CharRef::single(replacement), false);
    }
    if (0xD800..=0xDFFF).contains(&codepoint) || codepoint > 0x10FFFF {
        add_char_ref_error(
            cursor,
            errors,
            ErrorKind::NumericCharRefInvalid,
            ErrorDetail::Codepoint(u64::from(codepoint)),
        );
        return (CharRef::single(REPLACEMENT_CHAR), false);
    }
    if is_invalid_codepoint(codepoint) {
        // Reported, but the codepoint is handed back anyway; the caller keeps
        // it in the document.
        add_char_ref_error(
            cursor,
            errors,
            ErrorKind::NumericCharRefInvalid,
            ErrorDetail::Codepoint(u64::from(codepoint)),
        );
        status = false;
    }
    let decoded = char::from_u32(codepoint).expect("surrogates and overflow rejected above");
    (CharRef::single(decoded), status)
}

fn consume_named_ref(
    cursor: &mut Utf8Cursor<'_>,
    is_in_attribute: bool,
    errors: &mut ErrorSink,
) -> (CharRef, bool) {
    // Reference names are pure ASCII, so candidate collection can look at the
    // raw bytes without touching the decoder.
    let source = cursor.source();
    let start = cursor.offset();
    let mut run = 0usize;
    while run < LONGEST_REFERENCE_NAME {
        match source.get(start + run) {
            Some(byte) if byte.is_ascii_alphanumeric() => run += 1,
            _ => break,
        }
    }
    let mut candidate_len = run;
    if source.get(start + run) == Some(&b';') && run < LONGEST_REFERENCE_NAME {
        candidate_len += 1;
    }
    let candidate = &source[start..start + candidate_len];

    // Longest-match: probe progressively shorter prefixes; the semicolon
    // form, being longer, wins over its legacy sibling automatically.
    let mut matched = None;
    for length in (1..=candidate_len).rev() {
        if let Some(entry) = lookup(&candidate[..length]) {
            matched = Some((entry, length));
            break;
        }
    }

    let Some((entry, length)) = matched else {
        if run > 0 && source.get(start + run) == Some(&b';') {
            // Looks like a reference but resolves to nothing.
            let text = Span::new(start, start + run + 1);
            errors.record(ParseError {
                kind: ErrorKind::NamedCharRefInvalid,
                position: cursor.mark_position(),
                original_text: Span::new(cursor.mark_position().offset, start + run + 1),
                detail: ErrorDetail::Text(text),
            });
            cursor.reset(errors);
            return (CharRef::NONE, false);
        }
        cursor.reset(errors);
        return (CharRef::NONE, true);
    };

    let has_semicolon = entry.name.ends_with(';');
    if is_in_attribute && !has_semicolon {
        // Historical rule: `&param` in `href=?foo&params=x` must stay literal
        // when the match runs straight into `=` or more alphanumerics.
        let next = source.get(start + length);
        if matches!(next, Some(b'=')) || matches!(next, Some(byte) if byte.is_ascii_alphanumeric())
        {
            cursor.reset(errors);
            return (CharRef::NONE, true);
        }
    }

    for _ in 0..length {
        cursor.advance(errors);
    }
    let result = CharRef {
        first: Some(entry.first),
        second: entry.second,
    };
    if has_semicolon {
        (result, true)
    } else {
        let text = Span::new(start, start + length);
        errors.record(ParseError {
            kind: ErrorKind::NamedCharRefWithoutSemicolon,
            position: cursor.mark_position(),
            original_text: cursor.span_from_mark(),
            detail: ErrorDetail::Text(text),
        });
        (result, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(input: &str, allowed: Option<char>, in_attribute: bool) -> (CharRef, bool, Vec<ErrorKind>, usize) {
        let mut errors = ErrorSink::new(None);
        let mut cursor = Utf8Cursor::new(input.as_bytes(), 8, &mut errors);
        let (char_ref, status) = consume_char_ref(&mut cursor, allowed, in_attribute, &mut errors);
        let offset = cursor.offset();
        let kinds = errors.into_errors().into_iter().map(|e| e.kind).collect();
        (char_ref, status, kinds, offset)
    }

    #[test]
    fn named_reference_with_semicolon_resolves_cleanly() {
        let (char_ref, status, kinds, offset) = resolve("&amp;x", None, false);
        assert_eq!(char_ref, CharRef::single('&'));
        assert!(status);
        assert!(kinds.is_empty());
        assert_eq!(offset, 5);
    }

    #[test]
    fn legacy_reference_without_semicolon_resolves_with_error() {
        let (char_ref, status, kinds, offset) = resolve("&amp x", None, false);
        assert_eq!(char_ref, CharRef::single('&'));
        assert!(!status);
        assert_eq!(kinds, vec![ErrorKind::NamedCharRefWithoutSemicolon]);
        assert_eq!(offset, 4);
    }

    #[test]
    fn longest_match_wins_over_legacy_prefix() {
        // `&notin;` must resolve as one reference, not as `&not` plus "in;".
        let (char_ref, status, _, offset) = resolve("&notin;", None, false);
        assert_eq!(char_ref, CharRef::single('\u{2209}'));
        assert!(status);
        assert_eq!(offset, 7);

        // With a non-matching tail, the legacy `&not` prefix is consumed.
        let (char_ref, status, kinds, offset) = resolve("&notavalidentity;", None, false);
        assert_eq!(char_ref, CharRef::single('\u{AC}'));
        assert!(!status);
        assert_eq!(kinds, vec![ErrorKind::NamedCharRefWithoutSemicolon]);
        assert_eq!(offset, 4);
    }

    #[test]
    fn two_codepoint_references_return_both() {
        let (char_ref, status, _, _) = resolve("&fjlig;", None, false);
        assert_eq!(char_ref.first, Some('f'));
        assert_eq!(char_ref.second, Some('j'));
        assert!(status);
    }

    #[test]
    fn unresolvable_name_with_semicolon_is_an_error_and_unconsumed() {
        let (char_ref, status, kinds, offset) = resolve("&xyzzy;", None, false);
        assert_eq!(char_ref, CharRef::NONE);
        assert!(!status);
        assert_eq!(kinds, vec![ErrorKind::NamedCharRefInvalid]);
        assert_eq!(offset, 0, "cursor must be back on the ampersand");
    }

    #[test]
    fn bare_ampersand_before_space_is_not_a_reference() {
        for input in ["& x", "&<b>", "&&amp;", "&"] {
            let (char_ref, status, kinds, offset) = resolve(input, None, false);
            assert_eq!(char_ref, CharRef::NONE, "input {input:?}");
            assert!(status);
            assert!(kinds.is_empty());
            assert_eq!(offset, 0);
        }
    }

    #[test]
    fn additional_allowed_char_suppresses_resolution() {
        let (char_ref, status, kinds, offset) = resolve("&\"", Some('"'), true);
        assert_eq!(char_ref, CharRef::NONE);
        assert!(status);
        assert!(kinds.is_empty());
        assert_eq!(offset, 0);
    }

    #[test]
    fn attribute_context_keeps_legacy_reference_literal_before_equals_or_alnum() {
        let (char_ref, status, kinds, offset) = resolve("&amp=x", None, true);
        assert_eq!(char_ref, CharRef::NONE);
        assert!(status);
        assert!(kinds.is_empty());
        assert_eq!(offset, 0);

        let (char_ref, ..) = resolve("&ampx", None, true);
        assert_eq!(char_ref, CharRef::NONE);

        // The terminated form still resolves inside attributes.
        let (char_ref, status, _, _) = resolve("&amp;x", None, true);
        assert_eq!(char_ref, CharRef::single('&'));
        assert!(status);
    }

    #[test]
    fn outside_attributes_legacy_reference_resolves_before_alnum() {
        let (char_ref, status, kinds, _) = resolve("&ampx", None, false);
        assert_eq!(char_ref, CharRef::single('&'));
        assert!(!status);
        assert_eq!(kinds, vec![ErrorKind::NamedCharRefWithoutSemicolon]);
    }

    #[test]
    fn decimal_and_hex_numeric_references_decode() {
        let (char_ref, status, _, offset) = resolve("&#65;", None, false);
        assert_eq!(char_ref, CharRef::single('A'));
        assert!(status);
        assert_eq!(offset, 5);

        let (char_ref, status, _, offset) = resolve("&#x1F642;", None, false);
        assert_eq!(char_ref, CharRef::single('\u{1F642}'));
        assert!(status);
        assert_eq!(offset, 9);

        let (char_ref, ..) = resolve("&#X41;", None, false);
        assert_eq!(char_ref, CharRef::single('A'));
    }

    #[test]
    fn numeric_reference_missing_semicolon_is_recoverable() {
        let (char_ref, status, kinds, offset) = resolve("&#65 ", None, false);
        assert_eq!(char_ref, CharRef::single('A'));
        assert!(!status);
        assert_eq!(kinds, vec![ErrorKind::NumericCharRefWithoutSemicolon]);
        assert_eq!(offset, 4, "the space is not consumed");
    }

    #[test]
    fn numeric_reference_without_digits_resets() {
        for input in ["&#;", "&#x;", "&#q", "&#"] {
            let (char_ref, status, kinds, offset) = resolve(input, None, false);
            assert_eq!(char_ref, CharRef::NONE, "input {input:?}");
            assert!(!status);
            assert_eq!(kinds, vec![ErrorKind::NumericCharRefNoDigits]);
            assert_eq!(offset, 0);
        }
    }

    #[test]
    fn windows_1252_range_maps_through_the_replacement_table() {
        let cases = [
            ("&#x80;", '\u{20AC}'),
            ("&#x82;", '\u{201A}'),
            ("&#x99;", '\u{2122}'),
            ("&#x9F;", '\u{0178}'),
            ("&#0;", '\u{FFFD}'),
            ("&#13;", '\u{0D}'),
        ];
        for (input, expected) in cases {
            let (char_ref, status, kinds, _) = resolve(input, None, false);
            assert_eq!(char_ref, CharRef::single(expected), "input {input:?}");
            assert!(!status);
            assert_eq!(kinds, vec![ErrorKind::NumericCharRefInvalid]);
        }
    }

    #[test]
    fn surrogates_and_out_of_range_values_become_replacement_chars() {
        for input in ["&#xD800;", "&#xDFFF;", "&#x110000;", "&#99999999999;"] {
            let (char_ref, status, kinds, _) = resolve(input, None, false);
            assert_eq!(char_ref, CharRef::single(REPLACEMENT_CHAR), "input {input:?}");
            assert!(!status);
            assert_eq!(kinds, vec![ErrorKind::NumericCharRefInvalid]);
        }
    }

    #[test]
    fn forbidden_codepoints_are_reported_but_returned() {
        let (char_ref, status, kinds, _) = resolve("&#1;", None, false);
        assert_eq!(char_ref, CharRef::single('\u{1}'));
        assert!(!status);
        assert_eq!(kinds, vec![ErrorKind::NumericCharRefInvalid]);

        let (char_ref, status, kinds, _) = resolve("&#xFDD0;", None, false);
        assert_eq!(char_ref, CharRef::single('\u{FDD0}'));
        assert!(!status);
        assert_eq!(kinds, vec![ErrorKind::NumericCharRefInvalid]);
    }

    #[test]
    fn error_positions_point_at_the_ampersand() {
        let mut errors = ErrorSink::new(None);
        let mut cursor = Utf8Cursor::new(b"ab&xyzzy;", 8, &mut errors);
        for _ in 0..2 {
            cursor.advance(&mut errors);
        }
        let _ = consume_char_ref(&mut cursor, None, false, &mut errors);
        let recorded = errors.into_errors();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].position.offset, 2);
        assert_eq!(recorded[0].position.column, 3);
        assert_eq!(recorded[0].detail, ErrorDetail::Text(Span::new(3, 9)));
    }
}
