//! Token model shared by the tokenizer and the tree constructor.

use crate::span::{SourcePosition, Span};
use crate::tag::Tag;

/// Attribute namespaces. HTML special-cases XLink/XML/XMLNS attributes inside
/// foreign content; everything else is in the generic namespace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AttributeNamespace {
    #[default]
    None,
    Xlink,
    Xml,
    Xmlns,
}

/// A single attribute on a tag: a name-value pair plus source locations and
/// original-text spans.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub namespace: AttributeNamespace,
    /// Attribute name, ASCII-lowercased by the tokenizer before storage.
    pub name: String,
    /// Decoded value. Empty for boolean attributes.
    pub value: String,
    /// Original name text, in its source case.
    pub original_name: Span,
    /// Original value text, including any surrounding quotes.
    pub original_value: Span,
    pub name_start: SourcePosition,
    /// End of the name; not derivable from `value_start` because whitespace
    /// may surround the `=` sign.
    pub name_end: SourcePosition,
    pub value_start: SourcePosition,
    pub value_end: SourcePosition,
}

/// Case-insensitive attribute lookup, matching how HTML compares names.
pub fn get_attribute<'a>(attributes: &'a [Attribute], name: &str) -> Option<&'a Attribute> {
    attributes
        .iter()
        .find(|attribute| attribute.name.eq_ignore_ascii_case(name))
}

/// True if the named attribute exists and its value matches case-insensitively.
pub(crate) fn attribute_matches(attributes: &[Attribute], name: &str, value: &str) -> bool {
    get_attribute(attributes, name)
        .map(|attribute| attribute.value.eq_ignore_ascii_case(value))
        .unwrap_or(false)
}

/// Like [`attribute_matches`], but the value comparison is case-sensitive.
pub(crate) fn attribute_matches_case_sensitive(
    attributes: &[Attribute],
    name: &str,
    value: &str,
) -> bool {
    get_attribute(attributes, name)
        .map(|attribute| attribute.value == value)
        .unwrap_or(false)
}

/// Payload of a doctype token. Identifier presence is tracked separately from
/// the strings so a missing identifier and an empty one stay distinguishable;
/// quirks-mode computation needs the difference.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DoctypeData {
    pub name: String,
    pub public_identifier: String,
    pub system_identifier: String,
    pub force_quirks: bool,
    pub has_public_identifier: bool,
    pub has_system_identifier: bool,
}

/// Payload of a start-tag token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartTagData {
    pub tag: Tag,
    pub attributes: Vec<Attribute>,
    pub is_self_closing: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Doctype(DoctypeData),
    StartTag(StartTagData),
    EndTag(Tag),
    Comment(String),
    Character(char),
    /// A character token whose payload is whitespace (tab, LF, CR, FF, space).
    Whitespace(char),
    /// A NUL byte in the input; most insertion modes drop it with an error.
    Null,
    /// A character inside a `<![CDATA[...]]>` section.
    Cdata(char),
    Eof,
}

/// Discriminant-only view of a token, used in diagnostic payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenType {
    Doctype,
    StartTag,
    EndTag,
    Comment,
    Character,
    Whitespace,
    Null,
    Cdata,
    Eof,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Position of the first character of the token in the source.
    pub position: SourcePosition,
    /// Span of the token's original text in the source buffer.
    pub original_text: Span,
}

impl Token {
    pub fn token_type(&self) -> TokenType {
        match self.kind {
            TokenKind::Doctype(_) => TokenType::Doctype,
            TokenKind::StartTag(_) => TokenType::StartTag,
            TokenKind::EndTag(_) => TokenType::EndTag,
            TokenKind::Comment(_) => TokenType::Comment,
            TokenKind::Character(_) => TokenType::Character,
            TokenKind::Whitespace(_) => TokenType::Whitespace,
            TokenKind::Null => TokenType::Null,
            TokenKind::Cdata(_) => TokenType::Cdata,
            TokenKind::Eof => TokenType::Eof,
        }
    }

    /// The tag of a start-tag token, if this is one.
    pub fn start_tag(&self) -> Option<Tag> {
        match &self.kind {
            TokenKind::StartTag(data) => Some(data.tag),
            _ => None,
        }
    }

    /// The tag of an end-tag token, if this is one.
    pub fn end_tag(&self) -> Option<Tag> {
        match self.kind {
            TokenKind::EndTag(tag) => Some(tag),
            _ => None,
        }
    }

    /// The character payload of a character-class token.
    pub(crate) fn character(&self) -> Option<char> {
        match self.kind {
            TokenKind::Character(c) | TokenKind::Whitespace(c) | TokenKind::Cdata(c) => Some(c),
            TokenKind::Null => Some('\0'),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attribute(name: &str, value: &str) -> Attribute {
        Attribute {
            namespace: AttributeNamespace::None,
            name: name.to_string(),
            value: value.to_string(),
            original_name: Span::EMPTY,
            original_value: Span::EMPTY,
            name_start: SourcePosition::EMPTY,
            name_end: SourcePosition::EMPTY,
            value_start: SourcePosition::EMPTY,
            value_end: SourcePosition::EMPTY,
        }
    }

    #[test]
    fn attribute_lookup_is_name_case_insensitive() {
        let attributes = vec![attribute("class", "Box"), attribute("id", "main")];
        assert!(get_attribute(&attributes, "CLASS").is_some());
        assert!(get_attribute(&attributes, "missing").is_none());
    }

    #[test]
    fn value_matching_distinguishes_case_sensitivity() {
        let attributes = vec![attribute("type", "Hidden")];
        assert!(attribute_matches(&attributes, "type", "hidden"));
        assert!(!attribute_matches_case_sensitive(&attributes, "type", "hidden"));
        assert!(attribute_matches_case_sensitive(&attributes, "type", "Hidden"));
    }

    #[test]
    fn character_payload_covers_all_character_tokens() {
        let token = Token {
            kind: TokenKind::Null,
            position: SourcePosition::START,
            original_text: Span::EMPTY,
        };
        assert_eq!(token.character(), Some('\0'));
        assert_eq!(token.token_type(), TokenType::Null);
    }
}
