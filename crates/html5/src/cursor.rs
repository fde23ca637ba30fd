//! UTF-8 input cursor.
//!
//! Decodes one scalar at a time from the raw input buffer, folds newlines, and
//! tracks (line, column, byte offset). Decoding runs a small DFA over
//! character classes; a rejected byte costs exactly one byte of input and
//! produces U+FFFD plus a diagnostic carrying the raw byte values.
//!
//! Invariants:
//! - The byte offset always names the first byte of the current character in
//!   the *original* buffer; CR/LF folding skips the LF byte without rewinding.
//! - Position updates happen on `advance`, based on the character being left,
//!   so the first character after a newline is at column 1 of the next line.
//! - `mark`/`reset` is a single slot; resetting re-decodes the marked
//!   character.

use crate::error::{ErrorDetail, ErrorKind, ErrorSink, ParseError};
use crate::span::{SourcePosition, Span};

pub(crate) const REPLACEMENT_CHAR: char = '\u{FFFD}';

const UTF8_ACCEPT: u8 = 0;
const UTF8_REJECT: u8 = 12;

// Bjoern Hoehrmann's DFA: 256 character-class bytes followed by the
// state-transition table. States are multiples of 12; 0 accepts, 12 rejects.
static UTF8_DFA: [u8; 364] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9,
    9, 9, 9, 9, 9, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 8, 8, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 10, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 4, 3, 3, 11, 6, 6, 6, 5, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8, 8,
    // Transition table.
    0, 12, 24, 36, 60, 96, 84, 12, 12, 12, 48, 72, 12, 12, 12, 12, 12, 12, 12, 12, 12, 12, 12,
    12, 12, 0, 12, 12, 12, 12, 12, 0, 12, 0, 12, 12, 12, 24, 12, 12, 12, 12, 12, 24, 12, 24, 12,
    12, 12, 12, 12, 12, 12, 12, 12, 24, 12, 12, 12, 12, 12, 24, 12, 12, 12, 12, 12, 12, 12, 24,
    12, 12, 12, 12, 12, 12, 12, 12, 12, 36, 12, 36, 12, 12, 12, 36, 12, 12, 12, 12, 12, 36, 12,
    36, 12, 12, 12, 36, 12, 12, 12, 12, 12, 12, 12, 12, 12, 12,
];

/// True for codepoints the HTML5 preprocessor treats as parse errors: most C0
/// controls, DEL and the C1 range, the FDD0..FDEF noncharacters, and the two
/// final codepoints of every plane.
pub(crate) fn is_invalid_codepoint(c: u32) -> bool {
    (0x1..=0x8).contains(&c)
        || c == 0xB
        || (0xE..=0x1F).contains(&c)
        || (0x7F..=0x9F).contains(&c)
        || (0xFDD0..=0xFDEF).contains(&c)
        || (c & 0xFFFF) == 0xFFFE
        || (c & 0xFFFF) == 0xFFFF
}

pub(crate) struct Utf8Cursor<'a> {
    source: &'a [u8],
    /// Decoded character under the cursor; `None` at end of input.
    current: Option<char>,
    /// Byte width consumed when the cursor advances past `current`.
    width: usize,
    pos: SourcePosition,
    mark_pos: SourcePosition,
    tab_stop: usize,
}

impl<'a> Utf8Cursor<'a> {
    pub(crate) fn new(source: &'a [u8], tab_stop: usize, errors: &mut ErrorSink) -> Self {
        let mut cursor = Self {
            source,
            current: None,
            width: 0,
            pos: SourcePosition::START,
            mark_pos: SourcePosition::START,
            tab_stop,
        };
        if !source.is_empty() {
            cursor.read_char(errors);
        }
        cursor
    }

    pub(crate) fn current(&self) -> Option<char> {
        self.current
    }

    pub(crate) fn position(&self) -> SourcePosition {
        self.pos
    }

    /// Byte offset of the first byte of the current character.
    pub(crate) fn offset(&self) -> usize {
        self.pos.offset
    }

    pub(crate) fn source(&self) -> &'a [u8] {
        self.source
    }

    /// Span of the bytes under the cursor (empty at end of input).
    pub(crate) fn current_span(&self) -> Span {
        Span::new(
            self.pos.offset,
            (self.pos.offset + self.width).min(self.source.len()),
        )
    }

    /// Moves past the current character, updating line/column from the
    /// character being left.
    pub(crate) fn advance(&mut self, errors: &mut ErrorSink) {
        self.pos.offset += self.width;
        match self.current {
            Some('\n') => {
                self.pos.line += 1;
                self.pos.column = 1;
            }
            Some('\t') => {
                self.pos.column = ((self.pos.column / self.tab_stop) + 1) * self.tab_stop;
            }
            Some(_) => self.pos.column += 1,
            None => {}
        }
        if self.pos.offset < self.source.len() {
            self.read_char(errors);
        } else {
            self.current = None;
            self.width = 0;
        }
    }

    /// Consumes `prefix` if the input starts with it here; advances only on a
    /// full match. Intended for ASCII keywords (`DOCTYPE`, `[CDATA[`, ...).
    pub(crate) fn maybe_consume_match(
        &mut self,
        prefix: &[u8],
        case_sensitive: bool,
        errors: &mut ErrorSink,
    ) -> bool {
        debug_assert!(prefix.iter().all(u8::is_ascii));
        let at = self.pos.offset;
        if at + prefix.len() > self.source.len() {
            return false;
        }
        let candidate = &self.source[at..at + prefix.len()];
        let matched = if case_sensitive {
            candidate == prefix
        } else {
            candidate.eq_ignore_ascii_case(prefix)
        };
        if matched {
            for _ in 0..prefix.len() {
                self.advance(errors);
            }
        }
        matched
    }

    /// Saves the current position into the single mark slot.
    pub(crate) fn mark(&mut self) {
        self.mark_pos = self.pos;
    }

    /// Rewinds to the mark and re-decodes the character there.
    pub(crate) fn reset(&mut self, errors: &mut ErrorSink) {
        self.pos = self.mark_pos;
        if self.pos.offset < self.source.len() {
            self.read_char(errors);
        } else {
            self.current = None;
            self.width = 0;
        }
    }

    pub(crate) fn mark_position(&self) -> SourcePosition {
        self.mark_pos
    }

    /// Source span from the mark up to (not including) the current character.
    pub(crate) fn span_from_mark(&self) -> Span {
        Span::new(self.mark_pos.offset, self.pos.offset)
    }

    fn record_decode_error(
        &mut self,
        errors: &mut ErrorSink,
        kind: ErrorKind,
        examined: usize,
    ) {
        #[cfg(any(test, feature = "debug-stats"))]
        log::trace!(
            target: "html5.cursor",
            "decode error {kind:?} at offset {} ({examined} bytes examined)",
            self.pos.offset
        );
        let start = self.pos.offset;
        let end = (start + examined).min(self.source.len());
        let mut raw: u64 = 0;
        for byte in &self.source[start..end] {
            raw = (raw << 8) | u64::from(*byte);
        }
        errors.record(ParseError {
            kind,
            position: self.pos,
            original_text: Span::new(start, end),
            detail: ErrorDetail::Codepoint(raw),
        });
    }

    /// Decodes the character at `pos.offset` into `current`/`width`.
    fn read_char(&mut self, errors: &mut ErrorSink) {
        let start = self.pos.offset;
        let bytes = &self.source[start..];
        debug_assert!(!bytes.is_empty());

        let mut state = UTF8_ACCEPT;
        let mut codepoint: u32 = 0;
        let mut examined = 0usize;
        let decoded = loop {
            if examined == bytes.len() {
                // End of input in the middle of a sequence: one replacement
                // character for the whole truncated tail.
                self.record_decode_error(errors, ErrorKind::Utf8Truncated, examined);
                self.width = examined;
                self.current = Some(REPLACEMENT_CHAR);
                return;
            }
            let byte = bytes[examined];
            let class = UTF8_DFA[byte as usize];
            codepoint = if state == UTF8_ACCEPT {
                (0xFFu32 >> u32::from(class)) & u32::from(byte)
            } else {
                (u32::from(byte) & 0x3F) | (codepoint << 6)
            };
            state = UTF8_DFA[256 + state as usize + class as usize];
            examined += 1;
            if state == UTF8_ACCEPT {
                break codepoint;
            }
            if state == UTF8_REJECT {
                // The offending byte costs exactly one byte of input.
                self.record_decode_error(errors, ErrorKind::Utf8Invalid, examined);
                self.width = 1;
                self.current = Some(REPLACEMENT_CHAR);
                return;
            }
        };

        self.width = examined;
        if is_invalid_codepoint(decoded) {
            self.record_decode_error(errors, ErrorKind::Utf8Invalid, examined);
            self.current = Some(REPLACEMENT_CHAR);
            return;
        }

        if decoded == u32::from('\r') {
            // Newline folding mandated by the HTML5 preprocessor. When the CR
            // is followed by LF we step over the CR byte so the cursor sits on
            // the LF; the true byte offset is preserved either way.
            let after = start + self.width;
            if self.source.get(after) == Some(&b'\n') {
                self.pos.offset += 1;
            }
            self.current = Some('\n');
            return;
        }

        self.current = Some(char::from_u32(decoded).expect("DFA only accepts scalar values"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor_over<'a>(source: &'a [u8]) -> (Utf8Cursor<'a>, ErrorSink) {
        let mut errors = ErrorSink::new(None);
        let cursor = Utf8Cursor::new(source, 8, &mut errors);
        (cursor, errors)
    }

    fn drain(cursor: &mut Utf8Cursor<'_>, errors: &mut ErrorSink) -> Vec<(char, usize, usize, usize)> {
        let mut out = Vec::new();
        while let Some(c) = cursor.current() {
            let pos = cursor.position();
            out.push((c, pos.line, pos.column, pos.offset));
            cursor.advance(errors);
        }
        out
    }

    #[test]
    fn ascii_positions_advance_by_one() {
        let (mut cursor, mut errors) = cursor_over(b"ab\ncd");
        let chars = drain(&mut cursor, &mut errors);
        assert_eq!(
            chars,
            vec![
                ('a', 1, 1, 0),
                ('b', 1, 2, 1),
                ('\n', 1, 3, 2),
                ('c', 2, 1, 3),
                ('d', 2, 2, 4),
            ]
        );
        assert_eq!(errors.total_recorded(), 0);
    }

    #[test]
    fn tab_advances_to_the_next_tab_stop() {
        let (mut cursor, mut errors) = cursor_over(b"a\tb");
        let chars = drain(&mut cursor, &mut errors);
        assert_eq!(chars, vec![('a', 1, 1, 0), ('\t', 1, 2, 1), ('b', 1, 8, 2)]);
    }

    #[test]
    fn crlf_folds_to_one_newline_preserving_offsets() {
        let (mut cursor, mut errors) = cursor_over(b"a\r\nb");
        let chars = drain(&mut cursor, &mut errors);
        // The cursor steps over the CR, so the newline sits on the LF byte and
        // the following character accounts for both bytes.
        assert_eq!(chars, vec![('a', 1, 1, 0), ('\n', 1, 2, 2), ('b', 2, 1, 3)]);
    }

    #[test]
    fn lone_cr_becomes_a_newline() {
        let (mut cursor, mut errors) = cursor_over(b"a\rb");
        let chars = drain(&mut cursor, &mut errors);
        assert_eq!(chars, vec![('a', 1, 1, 0), ('\n', 1, 2, 1), ('b', 2, 1, 2)]);
    }

    #[test]
    fn multibyte_scalars_decode_with_byte_accurate_offsets() {
        let (mut cursor, mut errors) = cursor_over("aé🙂".as_bytes());
        let chars = drain(&mut cursor, &mut errors);
        assert_eq!(chars, vec![('a', 1, 1, 0), ('é', 1, 2, 1), ('🙂', 1, 3, 3)]);
        assert_eq!(errors.total_recorded(), 0);
    }

    #[test]
    fn invalid_byte_costs_one_byte_and_reports_its_value() {
        // 0xC0 can never start a valid sequence; 0x80 is a stray continuation.
        let (mut cursor, mut errors) = cursor_over(b"a\xC0\x80b");
        let chars: Vec<char> = drain(&mut cursor, &mut errors)
            .into_iter()
            .map(|(c, ..)| c)
            .collect();
        assert_eq!(chars, vec!['a', REPLACEMENT_CHAR, REPLACEMENT_CHAR, 'b']);
        let errors = errors.into_errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].kind, ErrorKind::Utf8Invalid);
        assert_eq!(errors[0].detail, ErrorDetail::Codepoint(0xC0));
        assert_eq!(errors[1].detail, ErrorDetail::Codepoint(0x80));
    }

    #[test]
    fn truncated_sequence_yields_one_replacement() {
        // First two bytes of U+1F642 with the rest missing.
        let (mut cursor, mut errors) = cursor_over(b"a\xF0\x9F");
        let chars: Vec<char> = drain(&mut cursor, &mut errors)
            .into_iter()
            .map(|(c, ..)| c)
            .collect();
        assert_eq!(chars, vec!['a', REPLACEMENT_CHAR]);
        let errors = errors.into_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::Utf8Truncated);
        assert_eq!(errors[0].detail, ErrorDetail::Codepoint(0xF09F));
    }

    #[test]
    fn forbidden_codepoints_become_replacements() {
        // U+0001 (C0 control) and U+FDD0 (noncharacter); NUL passes through.
        let (mut cursor, mut errors) = cursor_over("\u{1}\u{0}\u{FDD0}".as_bytes());
        let chars: Vec<char> = drain(&mut cursor, &mut errors)
            .into_iter()
            .map(|(c, ..)| c)
            .collect();
        assert_eq!(chars, vec![REPLACEMENT_CHAR, '\0', REPLACEMENT_CHAR]);
        assert_eq!(errors.total_recorded(), 2);
    }

    #[test]
    fn mark_and_reset_restore_the_cursor() {
        let (mut cursor, mut errors) = cursor_over(b"abcdef");
        cursor.advance(&mut errors);
        cursor.mark();
        let marked = cursor.position();
        cursor.advance(&mut errors);
        cursor.advance(&mut errors);
        assert_eq!(cursor.current(), Some('d'));
        cursor.reset(&mut errors);
        assert_eq!(cursor.current(), Some('b'));
        assert_eq!(cursor.position(), marked);
        assert_eq!(cursor.mark_position(), marked);
    }

    #[test]
    fn lookahead_match_advances_only_on_success() {
        let (mut cursor, mut errors) = cursor_over(b"DOCTYPE html");
        assert!(!cursor.maybe_consume_match(b"doctypo", false, &mut errors));
        assert_eq!(cursor.offset(), 0);
        assert!(cursor.maybe_consume_match(b"doctype", false, &mut errors));
        assert_eq!(cursor.current(), Some(' '));
        assert_eq!(cursor.position().column, 8);
        assert!(!cursor.maybe_consume_match(b" html and more", true, &mut errors));
        assert!(cursor.maybe_consume_match(b" html", true, &mut errors));
        assert_eq!(cursor.current(), None);
    }
}
