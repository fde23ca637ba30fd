//! Diagnostic records for decoding, tokenization, and tree construction.
//!
//! Every diagnostic is recoverable: parsing continues after each one, and the
//! records accumulate (up to the configured cap) in the output's error
//! sequence. Rendering into human-readable text is a client concern; a record
//! carries the position, the original-text span, and a typed payload so that
//! a client can build caret diagnostics against the input buffer.

use crate::span::{SourcePosition, Span};
use crate::tag::Tag;
use crate::token::TokenType;
use crate::tree_builder::InsertionMode;

/// The kind of error that occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Utf8Invalid,
    Utf8Truncated,
    Utf8Null,
    NumericCharRefNoDigits,
    NumericCharRefWithoutSemicolon,
    NumericCharRefInvalid,
    NamedCharRefWithoutSemicolon,
    NamedCharRefInvalid,
    TagStartsWithQuestion,
    TagEof,
    TagInvalid,
    CloseTagEmpty,
    CloseTagEof,
    CloseTagInvalid,
    ScriptEof,
    AttrNameEof,
    AttrNameInvalid,
    AttrDoubleQuoteEof,
    AttrSingleQuoteEof,
    AttrUnquotedEof,
    AttrUnquotedRightBracket,
    AttrUnquotedEquals,
    AttrAfterEof,
    AttrAfterInvalid,
    DuplicateAttr,
    SolidusEof,
    SolidusInvalid,
    DashesOrDoctype,
    CommentEof,
    CommentInvalid,
    CommentBangAfterDoubleDash,
    CommentDashAfterDoubleDash,
    CommentSpaceAfterDoubleDash,
    CommentEndBangEof,
    DoctypeEof,
    DoctypeInvalid,
    DoctypeSpace,
    DoctypeRightBracket,
    DoctypeSpaceOrRightBracket,
    DoctypeEnd,
    Parser,
    UnacknowledgedSelfClosingTag,
}

/// A condensed view of the tokenizer state machine, for diagnostics.
///
/// This folds the internal lexer states into a handful of categories that map
/// onto constructs users of HTML actually recognize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenizerErrorState {
    Data,
    CharRef,
    Rcdata,
    Rawtext,
    Plaintext,
    Script,
    Tag,
    SelfClosingTag,
    AttrName,
    AttrValue,
    MarkupDeclaration,
    Comment,
    Doctype,
    Cdata,
}

/// Extra data for duplicated attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateAttrDetail {
    /// The (lowercased) attribute name.
    pub name: String,
    /// 0-based index of the original occurrence within the attribute list.
    pub original_index: usize,
    /// 0-based index where the duplicate would have landed.
    pub new_index: usize,
}

/// Tree-construction context captured with a parser error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserErrorDetail {
    /// Type of the input token that triggered the error.
    pub input_type: TokenType,
    /// Tag of the input token; [`Tag::Unknown`] for non-tag tokens.
    pub input_tag: Tag,
    /// Insertion mode the tree constructor was in.
    pub insertion_mode: InsertionMode,
    /// Snapshot of the open-element tag stack, bottom first.
    pub tag_stack: Vec<Tag>,
}

/// Type-specific payload of a [`ParseError`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorDetail {
    /// Raw value for UTF-8 errors (the rejected bytes, big-endian packed) and
    /// numeric character reference errors (the out-of-range codepoint).
    Codepoint(u64),
    /// Offending codepoint plus the condensed state, for tokenizer errors.
    /// `None` means the error fired on end of input.
    Tokenizer {
        codepoint: Option<char>,
        state: TokenizerErrorState,
    },
    /// Source slice of the reference text, for named character references.
    Text(Span),
    /// Both occurrences of a duplicated attribute.
    DuplicateAttr(DuplicateAttrDetail),
    /// Tree-construction context.
    Parser(ParserErrorDetail),
    None,
}

/// A single diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ErrorKind,
    /// Where in the source the error occurred.
    pub position: SourcePosition,
    /// Span of the original text under the cursor when the error fired.
    pub original_text: Span,
    pub detail: ErrorDetail,
}

/// Collects diagnostics during a parse, enforcing the `max_errors` cap.
///
/// Once the cap is reached further records are dropped on the floor while
/// parsing continues, so a hopeless document cannot flood memory with
/// redundant diagnostics.
#[derive(Debug)]
pub(crate) struct ErrorSink {
    errors: Vec<ParseError>,
    max_errors: Option<usize>,
    total_recorded: usize,
}

impl ErrorSink {
    pub(crate) fn new(max_errors: Option<usize>) -> Self {
        Self {
            errors: Vec::new(),
            max_errors,
            total_recorded: 0,
        }
    }

    /// Records a diagnostic, dropping it silently when over the cap.
    pub(crate) fn record(&mut self, error: ParseError) {
        self.total_recorded += 1;
        if let Some(cap) = self.max_errors {
            if self.errors.len() >= cap {
                return;
            }
        }
        self.errors.push(error);
    }

    /// True if the cap allows storing another record. Callers that need to
    /// build an expensive payload (e.g. a tag-stack snapshot) check this
    /// first.
    pub(crate) fn will_store(&self) -> bool {
        match self.max_errors {
            Some(cap) => self.errors.len() < cap,
            None => true,
        }
    }

    /// Number of diagnostics seen, including any dropped over the cap.
    #[allow(dead_code, reason = "diagnostic accounting consumed by the test suites")]
    pub(crate) fn total_recorded(&self) -> usize {
        self.total_recorded
    }

    pub(crate) fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy(kind: ErrorKind) -> ParseError {
        ParseError {
            kind,
            position: SourcePosition::START,
            original_text: Span::EMPTY,
            detail: ErrorDetail::None,
        }
    }

    #[test]
    fn sink_caps_stored_errors_but_keeps_counting() {
        let mut sink = ErrorSink::new(Some(2));
        for _ in 0..5 {
            sink.record(dummy(ErrorKind::TagInvalid));
        }
        assert_eq!(sink.total_recorded(), 5);
        assert!(!sink.will_store());
        assert_eq!(sink.into_errors().len(), 2);
    }

    #[test]
    fn sink_without_cap_stores_everything() {
        let mut sink = ErrorSink::new(None);
        for _ in 0..100 {
            sink.record(dummy(ErrorKind::Parser));
        }
        assert!(sink.will_store());
        assert_eq!(sink.into_errors().len(), 100);
    }
}
