//! The HTML5 tokenizer.
//!
//! A state machine that consumes the UTF-8 cursor one character at a time and
//! produces one token per [`Tokenizer::lex`] call. Tree construction drives
//! the tokenizer token by token and reaches back into it through
//! [`Tokenizer::set_state`] and [`Tokenizer::set_is_current_node_foreign`].
//!
//! Conventions in this file:
//! - `emit_*` methods fill in a finished token; a state handler that emits
//!   returns it immediately.
//! - `finish_*` methods move data from temporaries into tag/doctype state and
//!   run just before the accumulating state exits.
//! - Statement order inside a state: record parse errors, run `finish_*`
//!   calls, switch state (setting the reconsume flag if the spec says
//!   "reconsume"), manipulate buffers, emit.
//!
//! The temporary buffer does double duty: it accumulates comment/doctype text,
//! and for the "less-than sign" states it records characters that may need to
//! be re-emitted verbatim. Re-emission resets the cursor to the mark taken
//! when the buffer was cleared and walks the input again so every re-emitted
//! character carries its true source position.

mod states;
#[cfg(test)]
mod tests;

use crate::char_ref::consume_char_ref;
use crate::cursor::{REPLACEMENT_CHAR, Utf8Cursor};
use crate::error::{
    DuplicateAttrDetail, ErrorDetail, ErrorKind, ErrorSink, ParseError, TokenizerErrorState,
};
use crate::span::{SourcePosition, Span};
use crate::tag::Tag;
use crate::token::{
    Attribute, AttributeNamespace, DoctypeData, StartTagData, Token, TokenKind,
};
pub(crate) use states::TokenizerState;

/// Result of a single state handler invocation.
enum Step {
    /// A token is ready; the `bool` is false when its production involved a
    /// parse error.
    Emit(Token, bool),
    /// Keep lexing with the next input character.
    NextChar,
}

/// State needed to build up a tag token character by character.
struct TagState {
    /// Accumulates the pieces of the tag: first the name, then each attribute
    /// name and value in turn.
    buffer: String,
    /// Start of the original text corresponding to the buffer contents.
    original_text_start: usize,
    start_pos: SourcePosition,
    /// Computed when the tag-name state finishes so the buffer can be reused
    /// for attributes.
    tag: Tag,
    attributes: Vec<Attribute>,
    /// Set when a duplicate attribute name was seen; the value that follows is
    /// consumed but must not overwrite the original.
    drop_next_attr_value: bool,
    /// The attribute-value state that entered the character-reference state,
    /// switched back to on completion.
    attr_value_state: TokenizerState,
    /// The last start tag emitted, for "appropriate end tag" checks.
    last_start_tag: Option<Tag>,
    is_start_tag: bool,
    is_self_closing: bool,
}

pub(crate) struct Tokenizer<'a> {
    cursor: Utf8Cursor<'a>,
    state: TokenizerState,
    /// Set when the spec reads "reconsume the current input character".
    reconsume_current_input: bool,
    /// Toggled by tree construction; gates `<![CDATA[` recognition.
    is_current_node_foreign: bool,
    is_in_cdata: bool,
    /// Second codepoint of a two-codepoint character reference, emitted on the
    /// next `lex` call.
    buffered_emit_char: Option<char>,
    temporary_buffer: String,
    /// Byte index of the next character to re-emit from the temporary buffer;
    /// `None` when not re-emitting.
    temporary_buffer_emit: Option<usize>,
    /// Separate buffer for the script-data double-escape bookkeeping; the
    /// temporary buffer is busy flushing "<s" while this one grows "script".
    script_data_buffer: String,
    token_start: usize,
    token_start_pos: SourcePosition,
    tag_state: TagState,
    doctype_state: DoctypeData,
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn ensure_lowercase(c: char) -> char {
    c.to_ascii_lowercase()
}

impl<'a> Tokenizer<'a> {
    pub(crate) fn new(source: &'a [u8], tab_stop: usize, errors: &mut ErrorSink) -> Self {
        let cursor = Utf8Cursor::new(source, tab_stop, errors);
        let token_start_pos = cursor.position();
        Self {
            cursor,
            state: TokenizerState::Data,
            reconsume_current_input: false,
            is_current_node_foreign: false,
            is_in_cdata: false,
            buffered_emit_char: None,
            temporary_buffer: String::new(),
            temporary_buffer_emit: None,
            script_data_buffer: String::new(),
            token_start: 0,
            token_start_pos,
            tag_state: TagState {
                buffer: String::new(),
                original_text_start: 0,
                start_pos: SourcePosition::START,
                tag: Tag::Unknown,
                attributes: Vec::new(),
                drop_next_attr_value: false,
                attr_value_state: TokenizerState::Data,
                last_start_tag: None,
                is_start_tag: false,
                is_self_closing: false,
            },
            doctype_state: DoctypeData::default(),
        }
    }

    /// Forces the lexer state; used by tree construction after tags like
    /// `<script>`, `<textarea>` or `<plaintext>`.
    pub(crate) fn set_state(&mut self, state: TokenizerState) {
        self.state = state;
    }

    /// Tells the tokenizer whether the adjusted current node is foreign, which
    /// decides whether `<![CDATA[` opens a CDATA section.
    pub(crate) fn set_is_current_node_foreign(&mut self, is_foreign: bool) {
        #[cfg(any(test, feature = "debug-stats"))]
        if is_foreign != self.is_current_node_foreign {
            log::trace!(target: "html5.tokenizer", "is_current_node_foreign -> {is_foreign}");
        }
        self.is_current_node_foreign = is_foreign;
    }

    /// Produces the next token. The `bool` is false when producing the token
    /// involved a parse error; the error itself is already in the sink.
    ///
    /// Tokens must be handled immediately by the caller: several states emit
    /// multiple tokens for the same input region, so all lexer state lives in
    /// the struct and each call resumes exactly where the last one stopped.
    pub(crate) fn lex(&mut self, errors: &mut ErrorSink) -> (Token, bool) {
        if let Some(buffered) = self.buffered_emit_char.take() {
            // The second half of a two-codepoint character reference. The
            // input was already advanced past the reference, so the emit must
            // not advance again.
            self.reconsume_current_input = true;
            let token = self.emit_char(Some(buffered), errors);
            self.reconsume_current_input = false;
            return (token, true);
        }

        if let Some(token) = self.maybe_emit_from_temporary_buffer(errors) {
            return (token, true);
        }

        loop {
            debug_assert!(self.temporary_buffer_emit.is_none());
            debug_assert!(self.buffered_emit_char.is_none());
            let step = self.step(errors);
            let should_advance = !self.reconsume_current_input;
            self.reconsume_current_input = false;
            match step {
                Step::Emit(token, success) => {
                    #[cfg(any(test, feature = "debug-stats"))]
                    log::trace!(target: "html5.tokenizer", "emit {:?}", token.kind);
                    return (token, success);
                }
                Step::NextChar => {
                    if should_advance {
                        self.cursor.advance(errors);
                    }
                }
            }
        }
    }

    fn step(&mut self, errors: &mut ErrorSink) -> Step {
        let c = self.cursor.current();
        match self.state {
            TokenizerState::Data => self.handle_data(c, errors),
            TokenizerState::CharRefInData => self.handle_char_ref_in_data(errors),
            TokenizerState::Rcdata => self.handle_rcdata(c, errors),
            TokenizerState::CharRefInRcdata => self.handle_char_ref_in_rcdata(errors),
            TokenizerState::Rawtext => self.handle_rawtext(c, errors),
            TokenizerState::ScriptData => self.handle_script_data(c, errors),
            TokenizerState::Plaintext => self.handle_plaintext(c, errors),
            TokenizerState::TagOpen => self.handle_tag_open(c, errors),
            TokenizerState::EndTagOpen => self.handle_end_tag_open(c, errors),
            TokenizerState::TagName => self.handle_tag_name(c, errors),
            TokenizerState::RcdataLt => self.handle_rcdata_lt(c, errors),
            TokenizerState::RcdataEndTagOpen => self.handle_rcdata_end_tag_open(c, errors),
            TokenizerState::RcdataEndTagName => self.handle_rcdata_end_tag_name(c, errors),
            TokenizerState::RawtextLt => self.handle_rawtext_lt(c, errors),
            TokenizerState::RawtextEndTagOpen => self.handle_rawtext_end_tag_open(c, errors),
            TokenizerState::RawtextEndTagName => self.handle_rawtext_end_tag_name(c, errors),
            TokenizerState::ScriptDataLt => self.handle_script_data_lt(c, errors),
            TokenizerState::ScriptDataEndTagOpen => self.handle_script_end_tag_open(c, errors),
            TokenizerState::ScriptDataEndTagName => self.handle_script_end_tag_name(c, errors),
            TokenizerState::ScriptDataEscapedStart => self.handle_script_escaped_start(c, errors),
            TokenizerState::ScriptDataEscapedStartDash => {
                self.handle_script_escaped_start_dash(c, errors)
            }
            TokenizerState::ScriptDataEscaped => self.handle_script_escaped(c, errors),
            TokenizerState::ScriptDataEscapedDash => self.handle_script_escaped_dash(c, errors),
            TokenizerState::ScriptDataEscapedDashDash => {
                self.handle_script_escaped_dash_dash(c, errors)
            }
            TokenizerState::ScriptDataEscapedLt => self.handle_script_escaped_lt(c, errors),
            TokenizerState::ScriptDataEscapedEndTagOpen => {
                self.handle_script_escaped_end_tag_open(c, errors)
            }
            TokenizerState::ScriptDataEscapedEndTagName => {
                self.handle_script_escaped_end_tag_name(c, errors)
            }
            TokenizerState::ScriptDataDoubleEscapedStart => {
                self.handle_script_double_escaped_start(c, errors)
            }
            TokenizerState::ScriptDataDoubleEscaped => {
                self.handle_script_double_escaped(c, errors)
            }
            TokenizerState::ScriptDataDoubleEscapedDash => {
                self.handle_script_double_escaped_dash(c, errors)
            }
            TokenizerState::ScriptDataDoubleEscapedDashDash => {
                self.handle_script_double_escaped_dash_dash(c, errors)
            }
            TokenizerState::ScriptDataDoubleEscapedLt => {
                self.handle_script_double_escaped_lt(c, errors)
            }
            TokenizerState::ScriptDataDoubleEscapedEnd => {
                self.handle_script_double_escaped_end(c, errors)
            }
            TokenizerState::BeforeAttributeName => self.handle_before_attr_name(c, errors),
            TokenizerState::AttributeName => self.handle_attr_name(c, errors),
            TokenizerState::AfterAttributeName => self.handle_after_attr_name(c, errors),
            TokenizerState::BeforeAttributeValue => self.handle_before_attr_value(c, errors),
            TokenizerState::AttributeValueDoubleQuoted => {
                self.handle_attr_value_double_quoted(c, errors)
            }
            TokenizerState::AttributeValueSingleQuoted => {
                self.handle_attr_value_single_quoted(c, errors)
            }
            TokenizerState::AttributeValueUnquoted => self.handle_attr_value_unquoted(c, errors),
            TokenizerState::CharRefInAttributeValue => {
                self.handle_char_ref_in_attr_value(errors)
            }
            TokenizerState::AfterAttributeValueQuoted => {
                self.handle_after_attr_value_quoted(c, errors)
            }
            TokenizerState::SelfClosingStartTag => self.handle_self_closing_start_tag(c, errors),
            TokenizerState::BogusComment => self.handle_bogus_comment(c, errors),
            TokenizerState::MarkupDeclarationOpen => self.handle_markup_declaration(c, errors),
            TokenizerState::CommentStart => self.handle_comment_start(c, errors),
            TokenizerState::CommentStartDash => self.handle_comment_start_dash(c, errors),
            TokenizerState::Comment => self.handle_comment(c, errors),
            TokenizerState::CommentEndDash => self.handle_comment_end_dash(c, errors),
            TokenizerState::CommentEnd => self.handle_comment_end(c, errors),
            TokenizerState::CommentEndBang => self.handle_comment_end_bang(c, errors),
            TokenizerState::Doctype => self.handle_doctype(c, errors),
            TokenizerState::BeforeDoctypeName => self.handle_before_doctype_name(c, errors),
            TokenizerState::DoctypeName => self.handle_doctype_name(c, errors),
            TokenizerState::AfterDoctypeName => self.handle_after_doctype_name(c, errors),
            TokenizerState::AfterDoctypePublicKeyword => {
                self.handle_after_doctype_public_keyword(c, errors)
            }
            TokenizerState::BeforeDoctypePublicId => {
                self.handle_before_doctype_public_id(c, errors)
            }
            TokenizerState::DoctypePublicIdDoubleQuoted => {
                self.handle_doctype_public_id_quoted(c, '"', errors)
            }
            TokenizerState::DoctypePublicIdSingleQuoted => {
                self.handle_doctype_public_id_quoted(c, '\'', errors)
            }
            TokenizerState::AfterDoctypePublicId => self.handle_after_doctype_public_id(c, errors),
            TokenizerState::BetweenDoctypePublicSystemId => {
                self.handle_between_doctype_public_system_id(c, errors)
            }
            TokenizerState::AfterDoctypeSystemKeyword => {
                self.handle_after_doctype_system_keyword(c, errors)
            }
            TokenizerState::BeforeDoctypeSystemId => {
                self.handle_before_doctype_system_id(c, errors)
            }
            TokenizerState::DoctypeSystemIdDoubleQuoted => {
                self.handle_doctype_system_id_quoted(c, '"', errors)
            }
            TokenizerState::DoctypeSystemIdSingleQuoted => {
                self.handle_doctype_system_id_quoted(c, '\'', errors)
            }
            TokenizerState::AfterDoctypeSystemId => self.handle_after_doctype_system_id(c, errors),
            TokenizerState::BogusDoctype => self.handle_bogus_doctype(c, errors),
            TokenizerState::CdataSection => self.handle_cdata(c, errors),
        }
    }

    // ---------------------------------------------------------------------
    // Error recording.

    fn condensed_error_state(&self) -> TokenizerErrorState {
        use TokenizerState::*;
        match self.state {
            Data => TokenizerErrorState::Data,
            CharRefInData | CharRefInRcdata | CharRefInAttributeValue => {
                TokenizerErrorState::CharRef
            }
            Rcdata | RcdataLt | RcdataEndTagOpen | RcdataEndTagName => TokenizerErrorState::Rcdata,
            Rawtext | RawtextLt | RawtextEndTagOpen | RawtextEndTagName => {
                TokenizerErrorState::Rawtext
            }
            Plaintext => TokenizerErrorState::Plaintext,
            ScriptData | ScriptDataLt | ScriptDataEndTagOpen | ScriptDataEndTagName
            | ScriptDataEscapedStart | ScriptDataEscapedStartDash | ScriptDataEscaped
            | ScriptDataEscapedDash | ScriptDataEscapedDashDash | ScriptDataEscapedLt
            | ScriptDataEscapedEndTagOpen | ScriptDataEscapedEndTagName
            | ScriptDataDoubleEscapedStart | ScriptDataDoubleEscaped
            | ScriptDataDoubleEscapedDash | ScriptDataDoubleEscapedDashDash
            | ScriptDataDoubleEscapedLt | ScriptDataDoubleEscapedEnd => {
                TokenizerErrorState::Script
            }
            TagOpen | EndTagOpen | TagName | BeforeAttributeName => TokenizerErrorState::Tag,
            SelfClosingStartTag => TokenizerErrorState::SelfClosingTag,
            AttributeName | AfterAttributeName | BeforeAttributeValue => {
                TokenizerErrorState::AttrName
            }
            AttributeValueDoubleQuoted | AttributeValueSingleQuoted | AttributeValueUnquoted
            | AfterAttributeValueQuoted => TokenizerErrorState::AttrValue,
            BogusComment | CommentStart | CommentStartDash | Comment | CommentEndDash
            | CommentEnd | CommentEndBang => TokenizerErrorState::Comment,
            MarkupDeclarationOpen | Doctype | BeforeDoctypeName | DoctypeName
            | AfterDoctypeName | AfterDoctypePublicKeyword | BeforeDoctypePublicId
            | DoctypePublicIdDoubleQuoted | DoctypePublicIdSingleQuoted | AfterDoctypePublicId
            | BetweenDoctypePublicSystemId | AfterDoctypeSystemKeyword | BeforeDoctypeSystemId
            | DoctypeSystemIdDoubleQuoted | DoctypeSystemIdSingleQuoted | AfterDoctypeSystemId
            | BogusDoctype => TokenizerErrorState::Doctype,
            CdataSection => TokenizerErrorState::Cdata,
        }
    }

    fn add_parse_error(&mut self, kind: ErrorKind, errors: &mut ErrorSink) {
        errors.record(ParseError {
            kind,
            position: self.cursor.position(),
            original_text: self.cursor.current_span(),
            detail: ErrorDetail::Tokenizer {
                codepoint: self.cursor.current(),
                state: self.condensed_error_state(),
            },
        });
    }

    // ---------------------------------------------------------------------
    // Token assembly.

    fn reset_token_start(&mut self) {
        self.token_start = self.cursor.offset();
        self.token_start_pos = self.cursor.position();
    }

    /// Advances past the end of the token (unless reconsuming) and fills in
    /// its position and original text. Every emit goes through here, and the
    /// tokenizer returns to the caller immediately after, so the input can be
    /// advanced safely: the bottom-of-loop advance is bypassed.
    fn finish_token(&mut self, errors: &mut ErrorSink) -> (SourcePosition, Span) {
        if !self.reconsume_current_input {
            self.cursor.advance(errors);
        }
        let position = self.token_start_pos;
        let start = self.token_start;
        self.reset_token_start();
        let mut end = self.token_start;
        if end > start && self.cursor.source()[end - 1] == b'\r' {
            // The cursor steps over carriage returns, so the next token can
            // begin one byte past a \r that would otherwise be glued onto the
            // end of this token's original text.
            end -= 1;
        }
        (position, Span::new(start, end))
    }

    fn char_token_kind(&self, c: Option<char>) -> TokenKind {
        match c {
            Some(c) if self.is_in_cdata && c != '\0' => TokenKind::Cdata(c),
            Some('\t') | Some('\n') | Some('\r') | Some('\x0C') | Some(' ') => {
                TokenKind::Whitespace(c.expect("whitespace arm always has a char"))
            }
            Some('\0') => TokenKind::Null,
            Some(c) => TokenKind::Character(c),
            None => TokenKind::Eof,
        }
    }

    fn emit_char(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Token {
        let kind = self.char_token_kind(c);
        let (position, original_text) = self.finish_token(errors);
        Token {
            kind,
            position,
            original_text,
        }
    }

    fn emit_current_char(&mut self, errors: &mut ErrorSink) -> Step {
        let token = self.emit_char(self.cursor.current(), errors);
        Step::Emit(token, true)
    }

    /// Emits U+FFFD for a NUL byte and records the error.
    fn emit_replacement_char(&mut self, errors: &mut ErrorSink) -> Step {
        self.add_parse_error(ErrorKind::Utf8Null, errors);
        let token = self.emit_char(Some(REPLACEMENT_CHAR), errors);
        Step::Emit(token, false)
    }

    fn emit_eof(&mut self, errors: &mut ErrorSink) -> Step {
        let token = self.emit_char(None, errors);
        Step::Emit(token, true)
    }

    fn emit_doctype(&mut self, errors: &mut ErrorSink) -> Token {
        let data = std::mem::take(&mut self.doctype_state);
        let (position, original_text) = self.finish_token(errors);
        Token {
            kind: TokenKind::Doctype(data),
            position,
            original_text,
        }
    }

    fn emit_comment(&mut self, errors: &mut ErrorSink) -> Token {
        let text = self.finish_temporary_buffer();
        let (position, original_text) = self.finish_token(errors);
        Token {
            kind: TokenKind::Comment(text),
            position,
            original_text,
        }
    }

    fn emit_current_tag(&mut self, errors: &mut ErrorSink) -> Token {
        let kind = if self.tag_state.is_start_tag {
            self.tag_state.last_start_tag = Some(self.tag_state.tag);
            TokenKind::StartTag(StartTagData {
                tag: self.tag_state.tag,
                attributes: std::mem::take(&mut self.tag_state.attributes),
                is_self_closing: self.tag_state.is_self_closing,
            })
        } else {
            // End tags don't carry attributes; anything collected for broken
            // input like `</div</th>` is dropped here.
            self.tag_state.attributes.clear();
            TokenKind::EndTag(self.tag_state.tag)
        };
        self.tag_state.buffer.clear();
        let (position, original_text) = self.finish_token(errors);
        debug_assert!(original_text.len() >= 2);
        debug_assert_eq!(self.cursor.source()[original_text.start], b'<');
        debug_assert_eq!(self.cursor.source()[original_text.end - 1], b'>');
        Token {
            kind,
            position,
            original_text,
        }
    }

    /// Drops a tag that was started speculatively but will be emitted as
    /// character tokens instead.
    fn abandon_current_tag(&mut self) {
        self.tag_state.attributes.clear();
        self.tag_state.buffer.clear();
    }

    // ---------------------------------------------------------------------
    // Temporary buffer.

    /// Starts recording in the temporary buffer and marks the cursor so the
    /// recorded region can be re-emitted with correct positions. Call this on
    /// every transition into a "less-than sign" state, before appending the
    /// `<` itself.
    fn clear_temporary_buffer(&mut self) {
        debug_assert!(self.temporary_buffer_emit.is_none());
        self.cursor.mark();
        self.temporary_buffer.clear();
        // The spec models the script-data buffer as the same object, so it is
        // cleared in the same breath.
        self.script_data_buffer.clear();
    }

    fn append_temporary_buffer(&mut self, c: char) {
        self.temporary_buffer.push(c);
    }

    /// Side-effect free; referenced from assertions only.
    #[allow(dead_code, reason = "used by debug assertions in the state handlers")]
    fn temporary_buffer_equals(&self, text: &str) -> bool {
        self.temporary_buffer == text
    }

    fn finish_temporary_buffer(&mut self) -> String {
        let text = std::mem::take(&mut self.temporary_buffer);
        self.clear_temporary_buffer();
        text
    }

    /// Emits the next character of the temporary buffer, if a flush is in
    /// progress. The reconsume flag must never be observed by these emits
    /// (their characters were already advanced past once), but it must
    /// survive for the character that follows the buffer.
    fn maybe_emit_from_temporary_buffer(&mut self, errors: &mut ErrorSink) -> Option<Token> {
        let emit_index = self.temporary_buffer_emit?;
        if emit_index >= self.temporary_buffer.len() {
            self.temporary_buffer_emit = None;
            return None;
        }
        let c = self.temporary_buffer[emit_index..]
            .chars()
            .next()
            .expect("emit index sits on a character boundary");
        debug_assert_eq!(Some(c), self.cursor.current());
        let saved_reconsume_state = self.reconsume_current_input;
        self.reconsume_current_input = false;
        let token = self.emit_char(Some(c), errors);
        self.temporary_buffer_emit = Some(emit_index + c.len_utf8());
        self.reconsume_current_input = saved_reconsume_state;
        Some(token)
    }

    /// Rewinds the input to the start of the recorded region and begins
    /// flushing the temporary buffer one character token at a time.
    fn emit_temporary_buffer(&mut self, errors: &mut ErrorSink) -> Step {
        debug_assert!(!self.temporary_buffer.is_empty());
        self.cursor.reset(errors);
        self.temporary_buffer_emit = Some(0);
        let token = self
            .maybe_emit_from_temporary_buffer(errors)
            .expect("temporary buffer is non-empty");
        Step::Emit(token, true)
    }

    // ---------------------------------------------------------------------
    // Tag state.

    fn reset_tag_buffer_start_point(&mut self) {
        self.tag_state.original_text_start = self.cursor.offset();
        self.tag_state.start_pos = self.cursor.position();
    }

    fn initialize_tag_buffer(&mut self) {
        self.tag_state.buffer.clear();
        self.reset_tag_buffer_start_point();
    }

    fn start_new_tag(&mut self, is_start_tag: bool) {
        let c = self
            .cursor
            .current()
            .expect("tag starts are only recognized on alphabetic characters");
        debug_assert!(is_alpha(c));
        self.initialize_tag_buffer();
        self.tag_state.buffer.push(ensure_lowercase(c));
        debug_assert!(self.tag_state.attributes.is_empty());
        self.tag_state.drop_next_attr_value = false;
        self.tag_state.is_start_tag = is_start_tag;
        self.tag_state.is_self_closing = false;
    }

    /// Appends to the tag buffer; on the first character, optionally resets
    /// the buffer's source-start bookkeeping. Pass `false` only when the
    /// original text should include a character that does not land in the
    /// buffer (the opening quote of a quoted attribute value).
    fn append_tag_buffer(&mut self, c: char, reinitialize_position_on_first: bool) {
        if self.tag_state.buffer.is_empty() && reinitialize_position_on_first {
            self.reset_tag_buffer_start_point();
        }
        self.tag_state.buffer.push(c);
    }

    /// Original text span covered by the tag buffer, up to the cursor.
    fn tag_buffer_span(&self) -> Span {
        let start = self.tag_state.original_text_start;
        let mut end = self.cursor.offset();
        if end > start && self.cursor.source()[end - 1] == b'\r' {
            end -= 1;
        }
        Span::new(start, end)
    }

    fn reinitialize_tag_buffer(&mut self) {
        self.tag_state.buffer.clear();
        self.reset_tag_buffer_start_point();
    }

    fn finish_tag_name(&mut self) {
        self.tag_state.tag = Tag::from_name(self.tag_state.buffer.as_bytes());
        self.reinitialize_tag_buffer();
    }

    fn add_duplicate_attr_error(&mut self, original_index: usize, errors: &mut ErrorSink) {
        errors.record(ParseError {
            kind: ErrorKind::DuplicateAttr,
            position: self.tag_state.start_pos,
            original_text: self.tag_buffer_span(),
            detail: ErrorDetail::DuplicateAttr(DuplicateAttrDetail {
                name: self.tag_state.buffer.clone(),
                original_index,
                new_index: self.tag_state.attributes.len(),
            }),
        });
        self.reinitialize_tag_buffer();
    }

    /// Creates a new attribute from the tag buffer. The value starts out
    /// empty (boolean attributes stay that way) and is overwritten by
    /// `finish_attribute_value`. A duplicate name drops the attribute, flags
    /// the value for dropping too, and records a parse error.
    fn finish_attribute_name(&mut self, errors: &mut ErrorSink) -> bool {
        // May have been left set by a previous attribute without a value.
        self.tag_state.drop_next_attr_value = false;
        if let Some(original_index) = self
            .tag_state
            .attributes
            .iter()
            .position(|attribute| attribute.name == self.tag_state.buffer)
        {
            self.add_duplicate_attr_error(original_index, errors);
            self.tag_state.drop_next_attr_value = true;
            return false;
        }

        let original_name = self.tag_buffer_span();
        let name_start = self.tag_state.start_pos;
        let name_end = self.cursor.position();
        self.tag_state.attributes.push(Attribute {
            namespace: AttributeNamespace::None,
            name: self.tag_state.buffer.clone(),
            value: String::new(),
            original_name,
            original_value: original_name,
            name_start,
            name_end,
            value_start: name_start,
            value_end: name_end,
        });
        self.reinitialize_tag_buffer();
        true
    }

    /// Sets the most recent attribute's value from the tag buffer.
    fn finish_attribute_value(&mut self) {
        if self.tag_state.drop_next_attr_value {
            // Duplicate attribute name: the value was consumed but must not
            // overwrite the original occurrence.
            self.tag_state.drop_next_attr_value = false;
            self.reinitialize_tag_buffer();
            return;
        }
        let original_value = self.tag_buffer_span();
        let value_start = self.tag_state.start_pos;
        let value_end = self.cursor.position();
        let attribute = self
            .tag_state
            .attributes
            .last_mut()
            .expect("finish_attribute_value follows finish_attribute_name");
        attribute.value = self.tag_state.buffer.clone();
        attribute.original_value = original_value;
        attribute.value_start = value_start;
        attribute.value_end = value_end;
        self.reinitialize_tag_buffer();
    }

    /// True if the end tag being built matches the last start tag emitted.
    fn is_appropriate_end_tag(&self) -> bool {
        debug_assert!(!self.tag_state.is_start_tag);
        self.tag_state.last_start_tag.is_some()
            && self.tag_state.last_start_tag
                == Some(Tag::from_name(self.tag_state.buffer.as_bytes()))
    }

    // ---------------------------------------------------------------------
    // Character references.

    /// Runs the character-reference machinery for data/RCDATA contexts and
    /// emits the result (or a literal `&`).
    fn emit_char_ref(&mut self, errors: &mut ErrorSink) -> Step {
        let (char_ref, status) = consume_char_ref(&mut self.cursor, None, false, errors);
        let token = if let Some(first) = char_ref.first {
            // The reference machinery leaves the cursor on the character after
            // the reference; it must not be advanced past again.
            self.reconsume_current_input = true;
            let token = self.emit_char(Some(first), errors);
            self.buffered_emit_char = char_ref.second;
            token
        } else {
            self.emit_char(Some('&'), errors)
        };
        Step::Emit(token, status)
    }

    // ---------------------------------------------------------------------
    // State handlers.

    fn handle_data(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        match c {
            Some('&') => {
                self.state = TokenizerState::CharRefInData;
                // The reference machinery expects to sit on the `&` so it can
                // mark it and come back if the text is not a reference.
                self.reconsume_current_input = true;
                Step::NextChar
            }
            Some('<') => {
                self.state = TokenizerState::TagOpen;
                self.clear_temporary_buffer();
                self.append_temporary_buffer('<');
                Step::NextChar
            }
            Some('\0') => {
                self.add_parse_error(ErrorKind::Utf8Null, errors);
                let token = self.emit_char(c, errors);
                Step::Emit(token, false)
            }
            _ => self.emit_current_char(errors),
        }
    }

    fn handle_char_ref_in_data(&mut self, errors: &mut ErrorSink) -> Step {
        self.state = TokenizerState::Data;
        self.emit_char_ref(errors)
    }

    fn handle_rcdata(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        match c {
            Some('&') => {
                self.state = TokenizerState::CharRefInRcdata;
                self.reconsume_current_input = true;
                Step::NextChar
            }
            Some('<') => {
                self.state = TokenizerState::RcdataLt;
                self.clear_temporary_buffer();
                self.append_temporary_buffer('<');
                Step::NextChar
            }
            Some('\0') => self.emit_replacement_char(errors),
            None => self.emit_eof(errors),
            Some(_) => self.emit_current_char(errors),
        }
    }

    fn handle_char_ref_in_rcdata(&mut self, errors: &mut ErrorSink) -> Step {
        self.state = TokenizerState::Rcdata;
        self.emit_char_ref(errors)
    }

    fn handle_rawtext(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        match c {
            Some('<') => {
                self.state = TokenizerState::RawtextLt;
                self.clear_temporary_buffer();
                self.append_temporary_buffer('<');
                Step::NextChar
            }
            Some('\0') => self.emit_replacement_char(errors),
            None => self.emit_eof(errors),
            Some(_) => self.emit_current_char(errors),
        }
    }

    fn handle_script_data(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        match c {
            Some('<') => {
                self.state = TokenizerState::ScriptDataLt;
                self.clear_temporary_buffer();
                self.append_temporary_buffer('<');
                Step::NextChar
            }
            Some('\0') => self.emit_replacement_char(errors),
            None => self.emit_eof(errors),
            Some(_) => self.emit_current_char(errors),
        }
    }

    fn handle_plaintext(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        match c {
            Some('\0') => self.emit_replacement_char(errors),
            None => self.emit_eof(errors),
            Some(_) => self.emit_current_char(errors),
        }
    }

    fn handle_tag_open(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        debug_assert!(self.temporary_buffer_equals("<"));
        match c {
            Some('!') => {
                self.state = TokenizerState::MarkupDeclarationOpen;
                self.clear_temporary_buffer();
                Step::NextChar
            }
            Some('/') => {
                self.state = TokenizerState::EndTagOpen;
                self.append_temporary_buffer('/');
                Step::NextChar
            }
            Some('?') => {
                self.state = TokenizerState::BogusComment;
                self.clear_temporary_buffer();
                self.append_temporary_buffer('?');
                self.add_parse_error(ErrorKind::TagStartsWithQuestion, errors);
                Step::NextChar
            }
            Some(c) if is_alpha(c) => {
                self.state = TokenizerState::TagName;
                self.start_new_tag(true);
                Step::NextChar
            }
            _ => {
                self.add_parse_error(ErrorKind::TagInvalid, errors);
                self.state = TokenizerState::Data;
                match self.emit_temporary_buffer(errors) {
                    Step::Emit(token, _) => Step::Emit(token, false),
                    Step::NextChar => Step::NextChar,
                }
            }
        }
    }

    fn handle_end_tag_open(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        debug_assert!(self.temporary_buffer_equals("</"));
        match c {
            Some('>') => {
                self.add_parse_error(ErrorKind::CloseTagEmpty, errors);
                self.state = TokenizerState::Data;
                Step::NextChar
            }
            None => {
                self.add_parse_error(ErrorKind::CloseTagEof, errors);
                self.state = TokenizerState::Data;
                self.emit_temporary_buffer(errors)
            }
            Some(c) if is_alpha(c) => {
                self.state = TokenizerState::TagName;
                self.start_new_tag(false);
                Step::NextChar
            }
            Some(c) => {
                self.add_parse_error(ErrorKind::CloseTagInvalid, errors);
                self.state = TokenizerState::BogusComment;
                self.clear_temporary_buffer();
                self.append_temporary_buffer(c);
                Step::NextChar
            }
        }
    }

    fn handle_tag_name(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        match c {
            Some('\t') | Some('\n') | Some('\x0C') | Some(' ') => {
                self.finish_tag_name();
                self.state = TokenizerState::BeforeAttributeName;
                Step::NextChar
            }
            Some('/') => {
                self.finish_tag_name();
                self.state = TokenizerState::SelfClosingStartTag;
                Step::NextChar
            }
            Some('>') => {
                self.finish_tag_name();
                self.state = TokenizerState::Data;
                let token = self.emit_current_tag(errors);
                Step::Emit(token, true)
            }
            Some('\0') => {
                self.add_parse_error(ErrorKind::Utf8Null, errors);
                self.append_tag_buffer(REPLACEMENT_CHAR, true);
                Step::NextChar
            }
            None => {
                self.add_parse_error(ErrorKind::TagEof, errors);
                self.abandon_current_tag();
                self.state = TokenizerState::Data;
                Step::NextChar
            }
            Some(c) => {
                self.append_tag_buffer(ensure_lowercase(c), true);
                Step::NextChar
            }
        }
    }

    fn handle_rcdata_lt(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        debug_assert!(self.temporary_buffer_equals("<"));
        if c == Some('/') {
            self.state = TokenizerState::RcdataEndTagOpen;
            self.append_temporary_buffer('/');
            Step::NextChar
        } else {
            self.state = TokenizerState::Rcdata;
            self.reconsume_current_input = true;
            self.emit_temporary_buffer(errors)
        }
    }

    fn handle_rcdata_end_tag_open(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        debug_assert!(self.temporary_buffer_equals("</"));
        match c {
            Some(c) if is_alpha(c) => {
                self.state = TokenizerState::RcdataEndTagName;
                self.start_new_tag(false);
                self.append_temporary_buffer(c);
                Step::NextChar
            }
            _ => {
                self.state = TokenizerState::Rcdata;
                self.emit_temporary_buffer(errors)
            }
        }
    }

    fn handle_rcdata_end_tag_name(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        debug_assert!(self.temporary_buffer.len() >= 2);
        if let Some(c) = c {
            if is_alpha(c) {
                self.append_tag_buffer(ensure_lowercase(c), true);
                self.append_temporary_buffer(c);
                return Step::NextChar;
            }
        }
        if self.is_appropriate_end_tag() {
            match c {
                Some('\t') | Some('\n') | Some('\x0C') | Some(' ') => {
                    self.finish_tag_name();
                    self.state = TokenizerState::BeforeAttributeName;
                    return Step::NextChar;
                }
                Some('/') => {
                    self.finish_tag_name();
                    self.state = TokenizerState::SelfClosingStartTag;
                    return Step::NextChar;
                }
                Some('>') => {
                    self.finish_tag_name();
                    self.state = TokenizerState::Data;
                    let token = self.emit_current_tag(errors);
                    return Step::Emit(token, true);
                }
                _ => {}
            }
        }
        self.state = TokenizerState::Rcdata;
        self.abandon_current_tag();
        self.emit_temporary_buffer(errors)
    }

    fn handle_rawtext_lt(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        debug_assert!(self.temporary_buffer_equals("<"));
        if c == Some('/') {
            self.state = TokenizerState::RawtextEndTagOpen;
            self.append_temporary_buffer('/');
            Step::NextChar
        } else {
            self.state = TokenizerState::Rawtext;
            self.reconsume_current_input = true;
            self.emit_temporary_buffer(errors)
        }
    }

    fn handle_rawtext_end_tag_open(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        debug_assert!(self.temporary_buffer_equals("</"));
        match c {
            Some(c) if is_alpha(c) => {
                self.state = TokenizerState::RawtextEndTagName;
                self.start_new_tag(false);
                self.append_temporary_buffer(c);
                Step::NextChar
            }
            _ => {
                self.state = TokenizerState::Rawtext;
                self.emit_temporary_buffer(errors)
            }
        }
    }

    fn handle_rawtext_end_tag_name(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        debug_assert!(self.temporary_buffer.len() >= 2);
        if let Some(c) = c {
            if is_alpha(c) {
                self.append_tag_buffer(ensure_lowercase(c), true);
                self.append_temporary_buffer(c);
                return Step::NextChar;
            }
        }
        if self.is_appropriate_end_tag() {
            match c {
                Some('\t') | Some('\n') | Some('\x0C') | Some(' ') => {
                    self.finish_tag_name();
                    self.state = TokenizerState::BeforeAttributeName;
                    return Step::NextChar;
                }
                Some('/') => {
                    self.finish_tag_name();
                    self.state = TokenizerState::SelfClosingStartTag;
                    return Step::NextChar;
                }
                Some('>') => {
                    self.finish_tag_name();
                    self.state = TokenizerState::Data;
                    let token = self.emit_current_tag(errors);
                    return Step::Emit(token, true);
                }
                _ => {}
            }
        }
        self.state = TokenizerState::Rawtext;
        self.abandon_current_tag();
        self.emit_temporary_buffer(errors)
    }

    fn handle_script_data_lt(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        debug_assert!(self.temporary_buffer_equals("<"));
        match c {
            Some('/') => {
                self.state = TokenizerState::ScriptDataEndTagOpen;
                self.append_temporary_buffer('/');
                Step::NextChar
            }
            Some('!') => {
                self.state = TokenizerState::ScriptDataEscapedStart;
                self.append_temporary_buffer('!');
                self.emit_temporary_buffer(errors)
            }
            _ => {
                self.state = TokenizerState::ScriptData;
                self.reconsume_current_input = true;
                self.emit_temporary_buffer(errors)
            }
        }
    }

    fn handle_script_end_tag_open(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        debug_assert!(self.temporary_buffer_equals("</"));
        match c {
            Some(c) if is_alpha(c) => {
                self.state = TokenizerState::ScriptDataEndTagName;
                self.start_new_tag(false);
                self.append_temporary_buffer(c);
                Step::NextChar
            }
            _ => {
                self.state = TokenizerState::ScriptData;
                self.emit_temporary_buffer(errors)
            }
        }
    }

    fn handle_script_end_tag_name(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        debug_assert!(self.temporary_buffer.len() >= 2);
        if let Some(c) = c {
            if is_alpha(c) {
                self.append_tag_buffer(ensure_lowercase(c), true);
                self.append_temporary_buffer(c);
                return Step::NextChar;
            }
        }
        if self.is_appropriate_end_tag() {
            match c {
                Some('\t') | Some('\n') | Some('\x0C') | Some(' ') => {
                    self.finish_tag_name();
                    self.state = TokenizerState::BeforeAttributeName;
                    return Step::NextChar;
                }
                Some('/') => {
                    self.finish_tag_name();
                    self.state = TokenizerState::SelfClosingStartTag;
                    return Step::NextChar;
                }
                Some('>') => {
                    self.finish_tag_name();
                    self.state = TokenizerState::Data;
                    let token = self.emit_current_tag(errors);
                    return Step::Emit(token, true);
                }
                _ => {}
            }
        }
        self.state = TokenizerState::ScriptData;
        self.abandon_current_tag();
        self.emit_temporary_buffer(errors)
    }

    fn handle_script_escaped_start(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        if c == Some('-') {
            self.state = TokenizerState::ScriptDataEscapedStartDash;
            self.emit_current_char(errors)
        } else {
            self.state = TokenizerState::ScriptData;
            self.reconsume_current_input = true;
            Step::NextChar
        }
    }

    fn handle_script_escaped_start_dash(
        &mut self,
        c: Option<char>,
        errors: &mut ErrorSink,
    ) -> Step {
        if c == Some('-') {
            self.state = TokenizerState::ScriptDataEscapedDashDash;
            self.emit_current_char(errors)
        } else {
            self.state = TokenizerState::ScriptData;
            self.reconsume_current_input = true;
            Step::NextChar
        }
    }

    fn handle_script_escaped(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        match c {
            Some('-') => {
                self.state = TokenizerState::ScriptDataEscapedDash;
                self.emit_current_char(errors)
            }
            Some('<') => {
                self.state = TokenizerState::ScriptDataEscapedLt;
                self.clear_temporary_buffer();
                self.append_temporary_buffer('<');
                Step::NextChar
            }
            Some('\0') => self.emit_replacement_char(errors),
            None => {
                self.add_parse_error(ErrorKind::ScriptEof, errors);
                self.emit_eof(errors)
            }
            Some(_) => self.emit_current_char(errors),
        }
    }

    fn handle_script_escaped_dash(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        match c {
            Some('-') => {
                self.state = TokenizerState::ScriptDataEscapedDashDash;
                self.emit_current_char(errors)
            }
            Some('<') => {
                self.state = TokenizerState::ScriptDataEscapedLt;
                self.clear_temporary_buffer();
                self.append_temporary_buffer('<');
                Step::NextChar
            }
            Some('\0') => {
                self.state = TokenizerState::ScriptDataEscaped;
                self.emit_replacement_char(errors)
            }
            None => {
                self.add_parse_error(ErrorKind::ScriptEof, errors);
                self.state = TokenizerState::Data;
                Step::NextChar
            }
            Some(_) => {
                self.state = TokenizerState::ScriptDataEscaped;
                self.emit_current_char(errors)
            }
        }
    }

    fn handle_script_escaped_dash_dash(
        &mut self,
        c: Option<char>,
        errors: &mut ErrorSink,
    ) -> Step {
        match c {
            Some('-') => self.emit_current_char(errors),
            Some('<') => {
                self.state = TokenizerState::ScriptDataEscapedLt;
                self.clear_temporary_buffer();
                self.append_temporary_buffer('<');
                Step::NextChar
            }
            Some('>') => {
                self.state = TokenizerState::ScriptData;
                self.emit_current_char(errors)
            }
            Some('\0') => {
                self.state = TokenizerState::ScriptDataEscaped;
                self.emit_replacement_char(errors)
            }
            None => {
                self.add_parse_error(ErrorKind::ScriptEof, errors);
                self.state = TokenizerState::Data;
                Step::NextChar
            }
            Some(_) => {
                self.state = TokenizerState::ScriptDataEscaped;
                self.emit_current_char(errors)
            }
        }
    }

    fn handle_script_escaped_lt(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        debug_assert!(self.temporary_buffer_equals("<"));
        debug_assert!(self.script_data_buffer.is_empty());
        match c {
            Some('/') => {
                self.state = TokenizerState::ScriptDataEscapedEndTagOpen;
                self.append_temporary_buffer('/');
                Step::NextChar
            }
            Some(c) if is_alpha(c) => {
                self.state = TokenizerState::ScriptDataDoubleEscapedStart;
                self.append_temporary_buffer(c);
                self.script_data_buffer.push(ensure_lowercase(c));
                self.emit_temporary_buffer(errors)
            }
            _ => {
                self.state = TokenizerState::ScriptDataEscaped;
                self.emit_temporary_buffer(errors)
            }
        }
    }

    fn handle_script_escaped_end_tag_open(
        &mut self,
        c: Option<char>,
        errors: &mut ErrorSink,
    ) -> Step {
        debug_assert!(self.temporary_buffer_equals("</"));
        match c {
            Some(c) if is_alpha(c) => {
                self.state = TokenizerState::ScriptDataEscapedEndTagName;
                self.start_new_tag(false);
                self.append_temporary_buffer(c);
                Step::NextChar
            }
            _ => {
                self.state = TokenizerState::ScriptDataEscaped;
                self.emit_temporary_buffer(errors)
            }
        }
    }

    fn handle_script_escaped_end_tag_name(
        &mut self,
        c: Option<char>,
        errors: &mut ErrorSink,
    ) -> Step {
        debug_assert!(self.temporary_buffer.len() >= 2);
        if let Some(c) = c {
            if is_alpha(c) {
                self.append_tag_buffer(ensure_lowercase(c), true);
                self.append_temporary_buffer(c);
                return Step::NextChar;
            }
        }
        if self.is_appropriate_end_tag() {
            match c {
                Some('\t') | Some('\n') | Some('\x0C') | Some(' ') => {
                    self.finish_tag_name();
                    self.state = TokenizerState::BeforeAttributeName;
                    return Step::NextChar;
                }
                Some('/') => {
                    self.finish_tag_name();
                    self.state = TokenizerState::SelfClosingStartTag;
                    return Step::NextChar;
                }
                Some('>') => {
                    self.finish_tag_name();
                    self.state = TokenizerState::Data;
                    let token = self.emit_current_tag(errors);
                    return Step::Emit(token, true);
                }
                _ => {}
            }
        }
        self.state = TokenizerState::ScriptDataEscaped;
        self.abandon_current_tag();
        self.emit_temporary_buffer(errors)
    }

    fn handle_script_double_escaped_start(
        &mut self,
        c: Option<char>,
        errors: &mut ErrorSink,
    ) -> Step {
        match c {
            Some('\t') | Some('\n') | Some('\x0C') | Some(' ') | Some('/') | Some('>') => {
                self.state = if self.script_data_buffer == "script" {
                    TokenizerState::ScriptDataDoubleEscaped
                } else {
                    TokenizerState::ScriptDataEscaped
                };
                self.emit_current_char(errors)
            }
            Some(c) if is_alpha(c) => {
                self.script_data_buffer.push(ensure_lowercase(c));
                self.emit_current_char(errors)
            }
            _ => {
                self.state = TokenizerState::ScriptDataEscaped;
                self.reconsume_current_input = true;
                Step::NextChar
            }
        }
    }

    fn handle_script_double_escaped(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        match c {
            Some('-') => {
                self.state = TokenizerState::ScriptDataDoubleEscapedDash;
                self.emit_current_char(errors)
            }
            Some('<') => {
                self.state = TokenizerState::ScriptDataDoubleEscapedLt;
                self.emit_current_char(errors)
            }
            Some('\0') => self.emit_replacement_char(errors),
            None => {
                self.add_parse_error(ErrorKind::ScriptEof, errors);
                self.state = TokenizerState::Data;
                Step::NextChar
            }
            Some(_) => self.emit_current_char(errors),
        }
    }

    fn handle_script_double_escaped_dash(
        &mut self,
        c: Option<char>,
        errors: &mut ErrorSink,
    ) -> Step {
        match c {
            Some('-') => {
                self.state = TokenizerState::ScriptDataDoubleEscapedDashDash;
                self.emit_current_char(errors)
            }
            Some('<') => {
                self.state = TokenizerState::ScriptDataDoubleEscapedLt;
                self.emit_current_char(errors)
            }
            Some('\0') => {
                self.state = TokenizerState::ScriptDataDoubleEscaped;
                self.emit_replacement_char(errors)
            }
            None => {
                self.add_parse_error(ErrorKind::ScriptEof, errors);
                self.state = TokenizerState::Data;
                Step::NextChar
            }
            Some(_) => {
                self.state = TokenizerState::ScriptDataDoubleEscaped;
                self.emit_current_char(errors)
            }
        }
    }

    fn handle_script_double_escaped_dash_dash(
        &mut self,
        c: Option<char>,
        errors: &mut ErrorSink,
    ) -> Step {
        match c {
            Some('-') => self.emit_current_char(errors),
            Some('<') => {
                self.state = TokenizerState::ScriptDataDoubleEscapedLt;
                self.emit_current_char(errors)
            }
            Some('>') => {
                self.state = TokenizerState::ScriptData;
                self.emit_current_char(errors)
            }
            Some('\0') => {
                self.state = TokenizerState::ScriptDataDoubleEscaped;
                self.emit_replacement_char(errors)
            }
            None => {
                self.add_parse_error(ErrorKind::ScriptEof, errors);
                self.state = TokenizerState::Data;
                Step::NextChar
            }
            Some(_) => {
                self.state = TokenizerState::ScriptDataDoubleEscaped;
                self.emit_current_char(errors)
            }
        }
    }

    fn handle_script_double_escaped_lt(
        &mut self,
        c: Option<char>,
        errors: &mut ErrorSink,
    ) -> Step {
        if c == Some('/') {
            self.state = TokenizerState::ScriptDataDoubleEscapedEnd;
            self.script_data_buffer.clear();
            self.emit_current_char(errors)
        } else {
            self.state = TokenizerState::ScriptDataDoubleEscaped;
            self.reconsume_current_input = true;
            Step::NextChar
        }
    }

    fn handle_script_double_escaped_end(
        &mut self,
        c: Option<char>,
        errors: &mut ErrorSink,
    ) -> Step {
        match c {
            Some('\t') | Some('\n') | Some('\x0C') | Some(' ') | Some('/') | Some('>') => {
                self.state = if self.script_data_buffer == "script" {
                    TokenizerState::ScriptDataEscaped
                } else {
                    TokenizerState::ScriptDataDoubleEscaped
                };
                self.emit_current_char(errors)
            }
            Some(c) if is_alpha(c) => {
                self.script_data_buffer.push(ensure_lowercase(c));
                self.emit_current_char(errors)
            }
            _ => {
                self.state = TokenizerState::ScriptDataDoubleEscaped;
                self.reconsume_current_input = true;
                Step::NextChar
            }
        }
    }

    fn handle_before_attr_name(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        match c {
            Some('\t') | Some('\n') | Some('\x0C') | Some(' ') => Step::NextChar,
            Some('/') => {
                self.state = TokenizerState::SelfClosingStartTag;
                Step::NextChar
            }
            Some('>') => {
                self.state = TokenizerState::Data;
                let token = self.emit_current_tag(errors);
                Step::Emit(token, true)
            }
            Some('\0') => {
                self.add_parse_error(ErrorKind::Utf8Null, errors);
                self.state = TokenizerState::AttributeName;
                self.append_temporary_buffer(REPLACEMENT_CHAR);
                Step::NextChar
            }
            None => {
                self.add_parse_error(ErrorKind::AttrNameEof, errors);
                self.state = TokenizerState::Data;
                self.abandon_current_tag();
                Step::NextChar
            }
            Some(c) => {
                if matches!(c, '"' | '\'' | '<' | '=') {
                    self.add_parse_error(ErrorKind::AttrNameInvalid, errors);
                }
                self.state = TokenizerState::AttributeName;
                self.append_tag_buffer(ensure_lowercase(c), true);
                Step::NextChar
            }
        }
    }

    fn handle_attr_name(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        match c {
            Some('\t') | Some('\n') | Some('\x0C') | Some(' ') => {
                self.finish_attribute_name(errors);
                self.state = TokenizerState::AfterAttributeName;
                Step::NextChar
            }
            Some('/') => {
                self.finish_attribute_name(errors);
                self.state = TokenizerState::SelfClosingStartTag;
                Step::NextChar
            }
            Some('=') => {
                self.finish_attribute_name(errors);
                self.state = TokenizerState::BeforeAttributeValue;
                Step::NextChar
            }
            Some('>') => {
                self.finish_attribute_name(errors);
                self.state = TokenizerState::Data;
                let token = self.emit_current_tag(errors);
                Step::Emit(token, true)
            }
            Some('\0') => {
                self.add_parse_error(ErrorKind::Utf8Null, errors);
                self.append_tag_buffer(REPLACEMENT_CHAR, true);
                Step::NextChar
            }
            None => {
                self.state = TokenizerState::Data;
                self.abandon_current_tag();
                self.add_parse_error(ErrorKind::AttrNameEof, errors);
                Step::NextChar
            }
            Some(c) => {
                if matches!(c, '"' | '\'' | '<') {
                    self.add_parse_error(ErrorKind::AttrNameInvalid, errors);
                }
                self.append_tag_buffer(ensure_lowercase(c), true);
                Step::NextChar
            }
        }
    }

    fn handle_after_attr_name(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        match c {
            Some('\t') | Some('\n') | Some('\x0C') | Some(' ') => Step::NextChar,
            Some('/') => {
                self.state = TokenizerState::SelfClosingStartTag;
                Step::NextChar
            }
            Some('=') => {
                self.state = TokenizerState::BeforeAttributeValue;
                Step::NextChar
            }
            Some('>') => {
                self.state = TokenizerState::Data;
                let token = self.emit_current_tag(errors);
                Step::Emit(token, true)
            }
            Some('\0') => {
                self.add_parse_error(ErrorKind::Utf8Null, errors);
                self.state = TokenizerState::AttributeName;
                self.append_temporary_buffer(REPLACEMENT_CHAR);
                Step::NextChar
            }
            None => {
                self.add_parse_error(ErrorKind::AttrNameEof, errors);
                self.state = TokenizerState::Data;
                self.abandon_current_tag();
                Step::NextChar
            }
            Some(c) => {
                if matches!(c, '"' | '\'' | '<') {
                    self.add_parse_error(ErrorKind::AttrNameInvalid, errors);
                }
                self.state = TokenizerState::AttributeName;
                self.append_tag_buffer(ensure_lowercase(c), true);
                Step::NextChar
            }
        }
    }

    fn handle_before_attr_value(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        match c {
            Some('\t') | Some('\n') | Some('\x0C') | Some(' ') => Step::NextChar,
            Some('"') => {
                self.state = TokenizerState::AttributeValueDoubleQuoted;
                self.reset_tag_buffer_start_point();
                Step::NextChar
            }
            Some('&') => {
                self.state = TokenizerState::AttributeValueUnquoted;
                self.reconsume_current_input = true;
                Step::NextChar
            }
            Some('\'') => {
                self.state = TokenizerState::AttributeValueSingleQuoted;
                self.reset_tag_buffer_start_point();
                Step::NextChar
            }
            Some('\0') => {
                self.add_parse_error(ErrorKind::Utf8Null, errors);
                self.state = TokenizerState::AttributeValueUnquoted;
                self.append_tag_buffer(REPLACEMENT_CHAR, true);
                Step::NextChar
            }
            None => {
                self.add_parse_error(ErrorKind::AttrUnquotedEof, errors);
                self.state = TokenizerState::Data;
                self.abandon_current_tag();
                self.reconsume_current_input = true;
                Step::NextChar
            }
            Some('>') => {
                self.add_parse_error(ErrorKind::AttrUnquotedRightBracket, errors);
                self.state = TokenizerState::Data;
                let token = self.emit_current_tag(errors);
                Step::Emit(token, false)
            }
            Some(c) => {
                if matches!(c, '<' | '=' | '`') {
                    self.add_parse_error(ErrorKind::AttrUnquotedEquals, errors);
                }
                self.state = TokenizerState::AttributeValueUnquoted;
                self.append_tag_buffer(c, true);
                Step::NextChar
            }
        }
    }

    fn handle_attr_value_double_quoted(
        &mut self,
        c: Option<char>,
        errors: &mut ErrorSink,
    ) -> Step {
        match c {
            Some('"') => {
                self.state = TokenizerState::AfterAttributeValueQuoted;
                Step::NextChar
            }
            Some('&') => {
                self.tag_state.attr_value_state = self.state;
                self.state = TokenizerState::CharRefInAttributeValue;
                self.reconsume_current_input = true;
                Step::NextChar
            }
            Some('\0') => {
                self.add_parse_error(ErrorKind::Utf8Null, errors);
                self.append_tag_buffer(REPLACEMENT_CHAR, false);
                Step::NextChar
            }
            None => {
                self.add_parse_error(ErrorKind::AttrDoubleQuoteEof, errors);
                self.state = TokenizerState::Data;
                self.abandon_current_tag();
                self.reconsume_current_input = true;
                Step::NextChar
            }
            Some(c) => {
                self.append_tag_buffer(c, false);
                Step::NextChar
            }
        }
    }

    fn handle_attr_value_single_quoted(
        &mut self,
        c: Option<char>,
        errors: &mut ErrorSink,
    ) -> Step {
        match c {
            Some('\'') => {
                self.state = TokenizerState::AfterAttributeValueQuoted;
                Step::NextChar
            }
            Some('&') => {
                self.tag_state.attr_value_state = self.state;
                self.state = TokenizerState::CharRefInAttributeValue;
                self.reconsume_current_input = true;
                Step::NextChar
            }
            Some('\0') => {
                self.add_parse_error(ErrorKind::Utf8Null, errors);
                self.append_tag_buffer(REPLACEMENT_CHAR, false);
                Step::NextChar
            }
            None => {
                self.add_parse_error(ErrorKind::AttrSingleQuoteEof, errors);
                self.state = TokenizerState::Data;
                self.abandon_current_tag();
                self.reconsume_current_input = true;
                Step::NextChar
            }
            Some(c) => {
                self.append_tag_buffer(c, false);
                Step::NextChar
            }
        }
    }

    fn handle_attr_value_unquoted(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        match c {
            Some('\t') | Some('\n') | Some('\x0C') | Some(' ') => {
                self.state = TokenizerState::BeforeAttributeName;
                self.finish_attribute_value();
                Step::NextChar
            }
            Some('&') => {
                self.tag_state.attr_value_state = self.state;
                self.state = TokenizerState::CharRefInAttributeValue;
                self.reconsume_current_input = true;
                Step::NextChar
            }
            Some('>') => {
                self.state = TokenizerState::Data;
                self.finish_attribute_value();
                let token = self.emit_current_tag(errors);
                Step::Emit(token, true)
            }
            Some('\0') => {
                self.add_parse_error(ErrorKind::Utf8Null, errors);
                self.append_tag_buffer(REPLACEMENT_CHAR, true);
                Step::NextChar
            }
            None => {
                self.add_parse_error(ErrorKind::AttrUnquotedEof, errors);
                self.state = TokenizerState::Data;
                self.reconsume_current_input = true;
                self.abandon_current_tag();
                Step::NextChar
            }
            Some(c) => {
                if matches!(c, '<' | '=' | '"' | '\'' | '`') {
                    self.add_parse_error(ErrorKind::AttrUnquotedEquals, errors);
                }
                self.append_tag_buffer(c, true);
                Step::NextChar
            }
        }
    }

    fn handle_char_ref_in_attr_value(&mut self, errors: &mut ErrorSink) -> Step {
        let (allowed_char, is_unquoted) = match self.tag_state.attr_value_state {
            TokenizerState::AttributeValueDoubleQuoted => ('"', false),
            TokenizerState::AttributeValueSingleQuoted => ('\'', false),
            TokenizerState::AttributeValueUnquoted => ('>', true),
            state => unreachable!("char ref entered from non-attribute state {state:?}"),
        };
        // The status is deliberately ignored: the parse error lands in the
        // sink, but there is no clean way to signal failure from the middle of
        // a multi-state token.
        let (char_ref, _) = consume_char_ref(&mut self.cursor, Some(allowed_char), true, errors);
        if let Some(first) = char_ref.first {
            self.reconsume_current_input = true;
            self.append_tag_buffer(first, is_unquoted);
            if let Some(second) = char_ref.second {
                self.append_tag_buffer(second, is_unquoted);
            }
        } else {
            self.append_tag_buffer('&', is_unquoted);
        }
        self.state = self.tag_state.attr_value_state;
        Step::NextChar
    }

    fn handle_after_attr_value_quoted(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        self.finish_attribute_value();
        match c {
            Some('\t') | Some('\n') | Some('\x0C') | Some(' ') => {
                self.state = TokenizerState::BeforeAttributeName;
                Step::NextChar
            }
            Some('/') => {
                self.state = TokenizerState::SelfClosingStartTag;
                Step::NextChar
            }
            Some('>') => {
                self.state = TokenizerState::Data;
                let token = self.emit_current_tag(errors);
                Step::Emit(token, true)
            }
            None => {
                self.add_parse_error(ErrorKind::AttrAfterEof, errors);
                self.state = TokenizerState::Data;
                self.abandon_current_tag();
                self.reconsume_current_input = true;
                Step::NextChar
            }
            Some(_) => {
                self.add_parse_error(ErrorKind::AttrAfterInvalid, errors);
                self.state = TokenizerState::BeforeAttributeName;
                self.reconsume_current_input = true;
                Step::NextChar
            }
        }
    }

    fn handle_self_closing_start_tag(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        match c {
            Some('>') => {
                self.state = TokenizerState::Data;
                self.tag_state.is_self_closing = true;
                let token = self.emit_current_tag(errors);
                Step::Emit(token, true)
            }
            None => {
                self.add_parse_error(ErrorKind::SolidusEof, errors);
                self.state = TokenizerState::Data;
                self.abandon_current_tag();
                Step::NextChar
            }
            Some(_) => {
                self.add_parse_error(ErrorKind::SolidusInvalid, errors);
                self.state = TokenizerState::BeforeAttributeName;
                self.reconsume_current_input = true;
                Step::NextChar
            }
        }
    }

    fn handle_bogus_comment(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        // Bogus comments are consumed in a tight loop rather than one state
        // call per character; nothing observable depends on the distinction.
        let mut c = c;
        while c != Some('>') && c.is_some() {
            let appended = match c {
                Some('\0') => REPLACEMENT_CHAR,
                Some(c) => c,
                None => break,
            };
            self.append_temporary_buffer(appended);
            self.cursor.advance(errors);
            c = self.cursor.current();
        }
        self.state = TokenizerState::Data;
        let token = self.emit_comment(errors);
        Step::Emit(token, true)
    }

    fn handle_markup_declaration(&mut self, _c: Option<char>, errors: &mut ErrorSink) -> Step {
        if self.cursor.maybe_consume_match(b"--", true, errors) {
            self.state = TokenizerState::CommentStart;
            self.reconsume_current_input = true;
        } else if self.cursor.maybe_consume_match(b"DOCTYPE", false, errors) {
            self.state = TokenizerState::Doctype;
            self.reconsume_current_input = true;
        } else if self.is_current_node_foreign
            && self.cursor.maybe_consume_match(b"[CDATA[", true, errors)
        {
            self.state = TokenizerState::CdataSection;
            self.is_in_cdata = true;
            self.reconsume_current_input = true;
        } else {
            self.add_parse_error(ErrorKind::DashesOrDoctype, errors);
            self.state = TokenizerState::BogusComment;
            self.reconsume_current_input = true;
            self.clear_temporary_buffer();
        }
        Step::NextChar
    }

    fn handle_comment_start(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        match c {
            Some('-') => {
                self.state = TokenizerState::CommentStartDash;
                Step::NextChar
            }
            Some('\0') => {
                self.add_parse_error(ErrorKind::Utf8Null, errors);
                self.state = TokenizerState::Comment;
                self.append_temporary_buffer(REPLACEMENT_CHAR);
                Step::NextChar
            }
            Some('>') => {
                self.add_parse_error(ErrorKind::CommentInvalid, errors);
                self.state = TokenizerState::Data;
                let token = self.emit_comment(errors);
                Step::Emit(token, false)
            }
            None => {
                self.add_parse_error(ErrorKind::CommentEof, errors);
                self.state = TokenizerState::Data;
                let token = self.emit_comment(errors);
                Step::Emit(token, false)
            }
            Some(c) => {
                self.state = TokenizerState::Comment;
                self.append_temporary_buffer(c);
                Step::NextChar
            }
        }
    }

    fn handle_comment_start_dash(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        match c {
            Some('-') => {
                self.state = TokenizerState::CommentEnd;
                Step::NextChar
            }
            Some('\0') => {
                self.add_parse_error(ErrorKind::Utf8Null, errors);
                self.state = TokenizerState::Comment;
                self.append_temporary_buffer('-');
                self.append_temporary_buffer(REPLACEMENT_CHAR);
                Step::NextChar
            }
            Some('>') => {
                self.add_parse_error(ErrorKind::CommentInvalid, errors);
                self.state = TokenizerState::Data;
                let token = self.emit_comment(errors);
                Step::Emit(token, false)
            }
            None => {
                self.add_parse_error(ErrorKind::CommentEof, errors);
                self.state = TokenizerState::Data;
                let token = self.emit_comment(errors);
                Step::Emit(token, false)
            }
            Some(c) => {
                self.state = TokenizerState::Comment;
                self.append_temporary_buffer('-');
                self.append_temporary_buffer(c);
                Step::NextChar
            }
        }
    }

    fn handle_comment(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        match c {
            Some('-') => {
                self.state = TokenizerState::CommentEndDash;
                Step::NextChar
            }
            Some('\0') => {
                self.add_parse_error(ErrorKind::Utf8Null, errors);
                self.append_temporary_buffer(REPLACEMENT_CHAR);
                Step::NextChar
            }
            None => {
                self.add_parse_error(ErrorKind::CommentEof, errors);
                self.state = TokenizerState::Data;
                let token = self.emit_comment(errors);
                Step::Emit(token, false)
            }
            Some(c) => {
                self.append_temporary_buffer(c);
                Step::NextChar
            }
        }
    }

    fn handle_comment_end_dash(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        match c {
            Some('-') => {
                self.state = TokenizerState::CommentEnd;
                Step::NextChar
            }
            Some('\0') => {
                self.add_parse_error(ErrorKind::Utf8Null, errors);
                self.state = TokenizerState::Comment;
                self.append_temporary_buffer('-');
                self.append_temporary_buffer(REPLACEMENT_CHAR);
                Step::NextChar
            }
            None => {
                self.add_parse_error(ErrorKind::CommentEof, errors);
                self.state = TokenizerState::Data;
                let token = self.emit_comment(errors);
                Step::Emit(token, false)
            }
            Some(c) => {
                self.state = TokenizerState::Comment;
                self.append_temporary_buffer('-');
                self.append_temporary_buffer(c);
                Step::NextChar
            }
        }
    }

    fn handle_comment_end(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        match c {
            Some('>') => {
                self.state = TokenizerState::Data;
                let token = self.emit_comment(errors);
                Step::Emit(token, true)
            }
            Some('\0') => {
                self.add_parse_error(ErrorKind::Utf8Null, errors);
                self.state = TokenizerState::Comment;
                self.append_temporary_buffer('-');
                self.append_temporary_buffer('-');
                self.append_temporary_buffer(REPLACEMENT_CHAR);
                Step::NextChar
            }
            Some('!') => {
                self.add_parse_error(ErrorKind::CommentBangAfterDoubleDash, errors);
                self.state = TokenizerState::CommentEndBang;
                Step::NextChar
            }
            Some('-') => {
                self.add_parse_error(ErrorKind::CommentDashAfterDoubleDash, errors);
                self.append_temporary_buffer('-');
                Step::NextChar
            }
            None => {
                self.add_parse_error(ErrorKind::Utf8Null, errors);
                self.state = TokenizerState::Data;
                let token = self.emit_comment(errors);
                Step::Emit(token, false)
            }
            Some(c) => {
                self.add_parse_error(ErrorKind::CommentInvalid, errors);
                self.state = TokenizerState::Comment;
                self.append_temporary_buffer('-');
                self.append_temporary_buffer('-');
                self.append_temporary_buffer(c);
                Step::NextChar
            }
        }
    }

    fn handle_comment_end_bang(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        match c {
            Some('-') => {
                self.state = TokenizerState::CommentEndDash;
                self.append_temporary_buffer('-');
                self.append_temporary_buffer('-');
                self.append_temporary_buffer('!');
                Step::NextChar
            }
            Some('>') => {
                self.state = TokenizerState::Data;
                let token = self.emit_comment(errors);
                Step::Emit(token, true)
            }
            Some('\0') => {
                self.add_parse_error(ErrorKind::Utf8Null, errors);
                self.state = TokenizerState::Comment;
                self.append_temporary_buffer('-');
                self.append_temporary_buffer('-');
                self.append_temporary_buffer('!');
                self.append_temporary_buffer(REPLACEMENT_CHAR);
                Step::NextChar
            }
            None => {
                self.add_parse_error(ErrorKind::CommentEndBangEof, errors);
                self.state = TokenizerState::Data;
                let token = self.emit_comment(errors);
                Step::Emit(token, false)
            }
            Some(c) => {
                self.state = TokenizerState::Comment;
                self.append_temporary_buffer('-');
                self.append_temporary_buffer('-');
                self.append_temporary_buffer('!');
                self.append_temporary_buffer(c);
                Step::NextChar
            }
        }
    }

    fn handle_doctype(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        debug_assert!(self.temporary_buffer.is_empty());
        match c {
            Some('\t') | Some('\n') | Some('\x0C') | Some(' ') => {
                self.state = TokenizerState::BeforeDoctypeName;
                Step::NextChar
            }
            None => {
                self.add_parse_error(ErrorKind::DoctypeEof, errors);
                self.state = TokenizerState::Data;
                self.doctype_state.force_quirks = true;
                let token = self.emit_doctype(errors);
                Step::Emit(token, false)
            }
            Some(_) => {
                self.add_parse_error(ErrorKind::DoctypeSpace, errors);
                self.state = TokenizerState::BeforeDoctypeName;
                self.reconsume_current_input = true;
                self.doctype_state.force_quirks = true;
                Step::NextChar
            }
        }
    }

    fn handle_before_doctype_name(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        match c {
            Some('\t') | Some('\n') | Some('\x0C') | Some(' ') => Step::NextChar,
            Some('\0') => {
                self.add_parse_error(ErrorKind::Utf8Null, errors);
                self.state = TokenizerState::DoctypeName;
                self.doctype_state.force_quirks = true;
                self.append_temporary_buffer(REPLACEMENT_CHAR);
                Step::NextChar
            }
            Some('>') => {
                self.add_parse_error(ErrorKind::DoctypeRightBracket, errors);
                self.state = TokenizerState::Data;
                self.doctype_state.force_quirks = true;
                let token = self.emit_doctype(errors);
                Step::Emit(token, false)
            }
            None => {
                self.add_parse_error(ErrorKind::DoctypeEof, errors);
                self.state = TokenizerState::Data;
                self.doctype_state.force_quirks = true;
                let token = self.emit_doctype(errors);
                Step::Emit(token, false)
            }
            Some(c) => {
                self.state = TokenizerState::DoctypeName;
                self.doctype_state.force_quirks = false;
                self.append_temporary_buffer(ensure_lowercase(c));
                Step::NextChar
            }
        }
    }

    fn handle_doctype_name(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        match c {
            Some('\t') | Some('\n') | Some('\x0C') | Some(' ') => {
                self.state = TokenizerState::AfterDoctypeName;
                self.doctype_state.name = self.finish_temporary_buffer();
                Step::NextChar
            }
            Some('>') => {
                self.state = TokenizerState::Data;
                self.doctype_state.name = self.finish_temporary_buffer();
                let token = self.emit_doctype(errors);
                Step::Emit(token, true)
            }
            Some('\0') => {
                self.add_parse_error(ErrorKind::Utf8Null, errors);
                self.append_temporary_buffer(REPLACEMENT_CHAR);
                Step::NextChar
            }
            None => {
                self.add_parse_error(ErrorKind::DoctypeEof, errors);
                self.state = TokenizerState::Data;
                self.doctype_state.force_quirks = true;
                self.doctype_state.name = self.finish_temporary_buffer();
                let token = self.emit_doctype(errors);
                Step::Emit(token, false)
            }
            Some(c) => {
                self.doctype_state.force_quirks = false;
                self.append_temporary_buffer(ensure_lowercase(c));
                Step::NextChar
            }
        }
    }

    fn handle_after_doctype_name(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        match c {
            Some('\t') | Some('\n') | Some('\x0C') | Some(' ') => Step::NextChar,
            Some('>') => {
                self.state = TokenizerState::Data;
                let token = self.emit_doctype(errors);
                Step::Emit(token, true)
            }
            None => {
                self.add_parse_error(ErrorKind::DoctypeEof, errors);
                self.state = TokenizerState::Data;
                self.doctype_state.force_quirks = true;
                let token = self.emit_doctype(errors);
                Step::Emit(token, false)
            }
            Some(_) => {
                if self.cursor.maybe_consume_match(b"PUBLIC", false, errors) {
                    self.state = TokenizerState::AfterDoctypePublicKeyword;
                    self.reconsume_current_input = true;
                } else if self.cursor.maybe_consume_match(b"SYSTEM", false, errors) {
                    self.state = TokenizerState::AfterDoctypeSystemKeyword;
                    self.reconsume_current_input = true;
                } else {
                    self.add_parse_error(ErrorKind::DoctypeSpaceOrRightBracket, errors);
                    self.state = TokenizerState::BogusDoctype;
                    self.doctype_state.force_quirks = true;
                }
                Step::NextChar
            }
        }
    }

    fn handle_after_doctype_public_keyword(
        &mut self,
        c: Option<char>,
        errors: &mut ErrorSink,
    ) -> Step {
        match c {
            Some('\t') | Some('\n') | Some('\x0C') | Some(' ') => {
                self.state = TokenizerState::BeforeDoctypePublicId;
                Step::NextChar
            }
            Some('"') => {
                self.add_parse_error(ErrorKind::DoctypeInvalid, errors);
                debug_assert!(self.temporary_buffer_equals(""));
                self.state = TokenizerState::DoctypePublicIdDoubleQuoted;
                Step::NextChar
            }
            Some('\'') => {
                self.add_parse_error(ErrorKind::DoctypeInvalid, errors);
                debug_assert!(self.temporary_buffer_equals(""));
                self.state = TokenizerState::DoctypePublicIdSingleQuoted;
                Step::NextChar
            }
            Some('>') => {
                self.add_parse_error(ErrorKind::DoctypeRightBracket, errors);
                self.state = TokenizerState::Data;
                self.doctype_state.force_quirks = true;
                let token = self.emit_doctype(errors);
                Step::Emit(token, false)
            }
            None => {
                self.add_parse_error(ErrorKind::DoctypeEof, errors);
                self.state = TokenizerState::Data;
                self.doctype_state.force_quirks = true;
                let token = self.emit_doctype(errors);
                Step::Emit(token, false)
            }
            Some(_) => {
                self.add_parse_error(ErrorKind::DoctypeInvalid, errors);
                self.state = TokenizerState::BogusDoctype;
                self.doctype_state.force_quirks = true;
                let token = self.emit_doctype(errors);
                Step::Emit(token, false)
            }
        }
    }

    fn handle_before_doctype_public_id(
        &mut self,
        c: Option<char>,
        errors: &mut ErrorSink,
    ) -> Step {
        match c {
            Some('\t') | Some('\n') | Some('\x0C') | Some(' ') => Step::NextChar,
            Some('"') => {
                debug_assert!(self.temporary_buffer_equals(""));
                self.state = TokenizerState::DoctypePublicIdDoubleQuoted;
                Step::NextChar
            }
            Some('\'') => {
                debug_assert!(self.temporary_buffer_equals(""));
                self.state = TokenizerState::DoctypePublicIdSingleQuoted;
                Step::NextChar
            }
            Some('>') => {
                self.add_parse_error(ErrorKind::DoctypeEnd, errors);
                self.state = TokenizerState::Data;
                self.doctype_state.force_quirks = true;
                let token = self.emit_doctype(errors);
                Step::Emit(token, false)
            }
            None => {
                self.add_parse_error(ErrorKind::DoctypeEof, errors);
                self.state = TokenizerState::Data;
                self.doctype_state.force_quirks = true;
                let token = self.emit_doctype(errors);
                Step::Emit(token, false)
            }
            Some(_) => {
                self.add_parse_error(ErrorKind::DoctypeInvalid, errors);
                self.state = TokenizerState::BogusDoctype;
                self.doctype_state.force_quirks = true;
                let token = self.emit_doctype(errors);
                Step::Emit(token, false)
            }
        }
    }

    fn finish_doctype_public_id(&mut self) {
        self.doctype_state.public_identifier = self.finish_temporary_buffer();
        self.doctype_state.has_public_identifier = true;
    }

    fn finish_doctype_system_id(&mut self) {
        self.doctype_state.system_identifier = self.finish_temporary_buffer();
        self.doctype_state.has_system_identifier = true;
    }

    fn handle_doctype_public_id_quoted(
        &mut self,
        c: Option<char>,
        quote: char,
        errors: &mut ErrorSink,
    ) -> Step {
        match c {
            Some(c) if c == quote => {
                self.state = TokenizerState::AfterDoctypePublicId;
                self.finish_doctype_public_id();
                Step::NextChar
            }
            Some('\0') => {
                self.add_parse_error(ErrorKind::Utf8Null, errors);
                self.append_temporary_buffer(REPLACEMENT_CHAR);
                Step::NextChar
            }
            Some('>') => {
                self.add_parse_error(ErrorKind::DoctypeEnd, errors);
                self.state = TokenizerState::Data;
                self.doctype_state.force_quirks = true;
                self.finish_doctype_public_id();
                let token = self.emit_doctype(errors);
                Step::Emit(token, false)
            }
            None => {
                self.add_parse_error(ErrorKind::DoctypeEof, errors);
                self.state = TokenizerState::Data;
                self.doctype_state.force_quirks = true;
                self.finish_doctype_public_id();
                let token = self.emit_doctype(errors);
                Step::Emit(token, false)
            }
            Some(c) => {
                self.append_temporary_buffer(c);
                Step::NextChar
            }
        }
    }

    fn handle_after_doctype_public_id(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        match c {
            Some('\t') | Some('\n') | Some('\x0C') | Some(' ') => {
                self.state = TokenizerState::BetweenDoctypePublicSystemId;
                Step::NextChar
            }
            Some('>') => {
                self.state = TokenizerState::Data;
                let token = self.emit_doctype(errors);
                Step::Emit(token, true)
            }
            Some('"') => {
                self.add_parse_error(ErrorKind::DoctypeInvalid, errors);
                debug_assert!(self.temporary_buffer_equals(""));
                self.state = TokenizerState::DoctypeSystemIdDoubleQuoted;
                Step::NextChar
            }
            Some('\'') => {
                self.add_parse_error(ErrorKind::DoctypeInvalid, errors);
                debug_assert!(self.temporary_buffer_equals(""));
                self.state = TokenizerState::DoctypeSystemIdSingleQuoted;
                Step::NextChar
            }
            None => {
                self.add_parse_error(ErrorKind::DoctypeEof, errors);
                self.state = TokenizerState::Data;
                self.reconsume_current_input = true;
                self.doctype_state.force_quirks = true;
                let token = self.emit_doctype(errors);
                Step::Emit(token, false)
            }
            Some(_) => {
                self.add_parse_error(ErrorKind::DoctypeInvalid, errors);
                self.state = TokenizerState::BogusDoctype;
                self.doctype_state.force_quirks = true;
                Step::NextChar
            }
        }
    }

    fn handle_between_doctype_public_system_id(
        &mut self,
        c: Option<char>,
        errors: &mut ErrorSink,
    ) -> Step {
        match c {
            Some('\t') | Some('\n') | Some('\x0C') | Some(' ') => Step::NextChar,
            Some('>') => {
                self.state = TokenizerState::Data;
                let token = self.emit_doctype(errors);
                Step::Emit(token, true)
            }
            Some('"') => {
                debug_assert!(self.temporary_buffer_equals(""));
                self.state = TokenizerState::DoctypeSystemIdDoubleQuoted;
                Step::NextChar
            }
            Some('\'') => {
                debug_assert!(self.temporary_buffer_equals(""));
                self.state = TokenizerState::DoctypeSystemIdSingleQuoted;
                Step::NextChar
            }
            None => {
                self.add_parse_error(ErrorKind::DoctypeEof, errors);
                self.state = TokenizerState::Data;
                self.doctype_state.force_quirks = true;
                let token = self.emit_doctype(errors);
                Step::Emit(token, false)
            }
            Some(_) => {
                self.add_parse_error(ErrorKind::DoctypeInvalid, errors);
                self.state = TokenizerState::BogusDoctype;
                self.doctype_state.force_quirks = true;
                let token = self.emit_doctype(errors);
                Step::Emit(token, false)
            }
        }
    }

    fn handle_after_doctype_system_keyword(
        &mut self,
        c: Option<char>,
        errors: &mut ErrorSink,
    ) -> Step {
        match c {
            Some('\t') | Some('\n') | Some('\x0C') | Some(' ') => {
                self.state = TokenizerState::BeforeDoctypeSystemId;
                Step::NextChar
            }
            Some('"') => {
                self.add_parse_error(ErrorKind::DoctypeInvalid, errors);
                debug_assert!(self.temporary_buffer_equals(""));
                self.state = TokenizerState::DoctypeSystemIdDoubleQuoted;
                Step::NextChar
            }
            Some('\'') => {
                self.add_parse_error(ErrorKind::DoctypeInvalid, errors);
                debug_assert!(self.temporary_buffer_equals(""));
                self.state = TokenizerState::DoctypeSystemIdSingleQuoted;
                Step::NextChar
            }
            Some('>') => {
                self.add_parse_error(ErrorKind::DoctypeEnd, errors);
                self.state = TokenizerState::Data;
                self.doctype_state.force_quirks = true;
                let token = self.emit_doctype(errors);
                Step::Emit(token, false)
            }
            None => {
                self.add_parse_error(ErrorKind::DoctypeEof, errors);
                self.state = TokenizerState::Data;
                self.doctype_state.force_quirks = true;
                let token = self.emit_doctype(errors);
                Step::Emit(token, false)
            }
            Some(_) => {
                self.add_parse_error(ErrorKind::DoctypeInvalid, errors);
                self.state = TokenizerState::BogusDoctype;
                self.doctype_state.force_quirks = true;
                Step::NextChar
            }
        }
    }

    fn handle_before_doctype_system_id(
        &mut self,
        c: Option<char>,
        errors: &mut ErrorSink,
    ) -> Step {
        match c {
            Some('\t') | Some('\n') | Some('\x0C') | Some(' ') => Step::NextChar,
            Some('"') => {
                debug_assert!(self.temporary_buffer_equals(""));
                self.state = TokenizerState::DoctypeSystemIdDoubleQuoted;
                Step::NextChar
            }
            Some('\'') => {
                debug_assert!(self.temporary_buffer_equals(""));
                self.state = TokenizerState::DoctypeSystemIdSingleQuoted;
                Step::NextChar
            }
            Some('>') => {
                self.add_parse_error(ErrorKind::DoctypeEnd, errors);
                self.state = TokenizerState::Data;
                self.doctype_state.force_quirks = true;
                let token = self.emit_doctype(errors);
                Step::Emit(token, false)
            }
            None => {
                self.add_parse_error(ErrorKind::DoctypeEof, errors);
                self.state = TokenizerState::Data;
                self.doctype_state.force_quirks = true;
                let token = self.emit_doctype(errors);
                Step::Emit(token, false)
            }
            Some(_) => {
                self.add_parse_error(ErrorKind::DoctypeInvalid, errors);
                self.state = TokenizerState::BogusDoctype;
                self.doctype_state.force_quirks = true;
                Step::NextChar
            }
        }
    }

    fn handle_doctype_system_id_quoted(
        &mut self,
        c: Option<char>,
        quote: char,
        errors: &mut ErrorSink,
    ) -> Step {
        match c {
            Some(c) if c == quote => {
                self.state = TokenizerState::AfterDoctypeSystemId;
                self.finish_doctype_system_id();
                Step::NextChar
            }
            Some('\0') => {
                self.add_parse_error(ErrorKind::Utf8Null, errors);
                self.append_temporary_buffer(REPLACEMENT_CHAR);
                Step::NextChar
            }
            Some('>') => {
                self.add_parse_error(ErrorKind::DoctypeEnd, errors);
                self.state = TokenizerState::Data;
                self.doctype_state.force_quirks = true;
                self.finish_doctype_system_id();
                let token = self.emit_doctype(errors);
                Step::Emit(token, false)
            }
            None => {
                self.add_parse_error(ErrorKind::DoctypeEof, errors);
                self.state = TokenizerState::Data;
                self.doctype_state.force_quirks = true;
                self.finish_doctype_system_id();
                let token = self.emit_doctype(errors);
                Step::Emit(token, false)
            }
            Some(c) => {
                self.append_temporary_buffer(c);
                Step::NextChar
            }
        }
    }

    fn handle_after_doctype_system_id(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        match c {
            Some('\t') | Some('\n') | Some('\x0C') | Some(' ') => Step::NextChar,
            Some('>') => {
                self.state = TokenizerState::Data;
                let token = self.emit_doctype(errors);
                Step::Emit(token, true)
            }
            None => {
                self.add_parse_error(ErrorKind::DoctypeEof, errors);
                self.state = TokenizerState::Data;
                self.doctype_state.force_quirks = true;
                let token = self.emit_doctype(errors);
                Step::Emit(token, false)
            }
            Some(_) => {
                self.add_parse_error(ErrorKind::DoctypeInvalid, errors);
                self.state = TokenizerState::BogusDoctype;
                Step::NextChar
            }
        }
    }

    fn handle_bogus_doctype(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        if c == Some('>') || c.is_none() {
            self.state = TokenizerState::Data;
            let token = self.emit_doctype(errors);
            return Step::Emit(token, false);
        }
        Step::NextChar
    }

    fn handle_cdata(&mut self, c: Option<char>, errors: &mut ErrorSink) -> Step {
        if c.is_none() || self.cursor.maybe_consume_match(b"]]>", true, errors) {
            self.reconsume_current_input = true;
            // The "]]>" must not become part of the next token's original
            // text.
            self.reset_token_start();
            self.state = TokenizerState::Data;
            self.is_in_cdata = false;
            Step::NextChar
        } else {
            self.emit_current_char(errors)
        }
    }
}
