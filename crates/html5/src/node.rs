//! Parse-tree node model.
//!
//! Nodes live in the output's arena and refer to each other by [`NodeId`].
//! Children are owned id sequences; the parent link is a non-owning
//! back-reference paired with the node's index inside the parent's children.
//! The tree is immutable once parsing finishes.

use crate::arena::NodeId;
use crate::span::{SourcePosition, Span};
use crate::tag::Tag;
use crate::token::Attribute;

/// Document rendering mode derived from the doctype.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuirksMode {
    #[default]
    NoQuirks,
    Quirks,
    LimitedQuirks,
}

/// Element namespaces. HTML5 has no prefix syntax: anything below `<svg>` is
/// SVG, anything below `<math>` is MathML, everything else is HTML.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Namespace {
    #[default]
    Html,
    Svg,
    MathMl,
}

/// Bitset recording why the parser inserted a node.
///
/// Clients use these to spot implied structure (`<tbody>` insertion, implicit
/// end tags) or constructs rewritten by the parser (adoption agency moves,
/// foster parenting, `<image>`/`<isindex>` rewrites).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseFlags(u16);

impl ParseFlags {
    /// Both tags appeared in the source and nothing was reparented.
    pub const NORMAL: ParseFlags = ParseFlags(0);
    /// The start tag for this node did not appear in the document source.
    pub const BY_PARSER: ParseFlags = ParseFlags(1 << 0);
    /// The end tag for this node did not appear in the document source.
    pub const IMPLICIT_END_TAG: ParseFlags = ParseFlags(1 << 1);
    // Bit 2 belonged to a flag that has since been removed.
    /// Node implied by other tags (`<html>`, `<head>`, `<tbody>`, ...).
    pub const IMPLIED: ParseFlags = ParseFlags(1 << 3);
    /// Node converted from an end tag (`</p>` with no `<p>` open, `</br>`).
    pub const CONVERTED_FROM_END_TAG: ParseFlags = ParseFlags(1 << 4);
    /// Node produced by rewriting an `<isindex>` tag.
    pub const FROM_ISINDEX: ParseFlags = ParseFlags(1 << 5);
    /// `<image>` tag rewritten as `<img>`.
    pub const FROM_IMAGE: ParseFlags = ParseFlags(1 << 6);
    /// Clone made while reconstructing active formatting elements.
    pub const RECONSTRUCTED_FORMATTING_ELEMENT: ParseFlags = ParseFlags(1 << 7);
    /// Clone made by the adoption agency algorithm.
    pub const ADOPTION_AGENCY_CLONED: ParseFlags = ParseFlags(1 << 8);
    /// Node moved by the adoption agency algorithm.
    pub const ADOPTION_AGENCY_MOVED: ParseFlags = ParseFlags(1 << 9);
    /// Node foster-parented out of a table.
    pub const FOSTER_PARENTED: ParseFlags = ParseFlags(1 << 10);

    pub fn contains(self, other: ParseFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: ParseFlags) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: ParseFlags) {
        self.0 &= !other.0;
    }
}

impl std::ops::BitOr for ParseFlags {
    type Output = ParseFlags;

    fn bitor(self, other: ParseFlags) -> ParseFlags {
        ParseFlags(self.0 | other.0)
    }
}

/// Payload of the document node. Exactly one exists per parse.
#[derive(Clone, Debug, Default)]
pub struct Document {
    pub children: Vec<NodeId>,
    /// True if an explicit doctype token appeared, as opposed to being omitted.
    pub has_doctype: bool,
    pub name: String,
    pub public_identifier: String,
    pub system_identifier: String,
    pub quirks_mode: QuirksMode,
}

/// Payload of an element node.
#[derive(Clone, Debug)]
pub struct Element {
    pub tag: Tag,
    pub namespace: Namespace,
    /// Original start-tag text (`<div class=x>`); empty for parser-inserted
    /// elements.
    pub original_tag: Span,
    /// Original end-tag text; empty when the end tag was implied.
    pub original_end_tag: Span,
    pub start_pos: SourcePosition,
    pub end_pos: SourcePosition,
    /// Attributes in source order, first occurrence winning on duplicates.
    pub attributes: Vec<Attribute>,
    pub children: Vec<NodeId>,
}

/// Payload of text, CDATA, comment, and whitespace nodes.
#[derive(Clone, Debug)]
pub struct TextData {
    /// The decoded text, entities resolved. Comment delimiters excluded.
    pub text: String,
    /// Original text span, comment delimiters included. For text nodes this
    /// runs from the first to the last character that landed in the node, so
    /// it may cover intervening markup moved elsewhere by reparenting.
    pub original_text: Span,
    pub start_pos: SourcePosition,
}

#[derive(Clone, Debug)]
pub enum NodeKind {
    Document(Document),
    Element(Element),
    Text(TextData),
    /// Text node whose content is entirely whitespace.
    Whitespace(TextData),
    Cdata(TextData),
    Comment(TextData),
}

/// One node of the parse tree.
#[derive(Clone, Debug)]
pub struct Node {
    /// Back-reference to the parent; `None` for the document and for nodes
    /// temporarily detached during reparenting.
    pub parent: Option<NodeId>,
    /// This node's index inside its parent's children. Only meaningful while
    /// `parent` is set; `parent.children[index_within_parent]` is this node.
    pub index_within_parent: usize,
    pub parse_flags: ParseFlags,
    pub kind: NodeKind,
}

/// Sentinel for `index_within_parent` on detached nodes.
pub(crate) const DETACHED: usize = usize::MAX;

impl Node {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self {
            parent: None,
            index_within_parent: DETACHED,
            parse_flags: ParseFlags::NORMAL,
            kind,
        }
    }

    pub fn as_document(&self) -> Option<&Document> {
        match &self.kind {
            NodeKind::Document(document) => Some(document),
            _ => None,
        }
    }

    pub(crate) fn as_document_mut(&mut self) -> Option<&mut Document> {
        match &mut self.kind {
            NodeKind::Document(document) => Some(document),
            _ => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match &self.kind {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }

    pub(crate) fn as_element_mut(&mut self) -> Option<&mut Element> {
        match &mut self.kind {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextData> {
        match &self.kind {
            NodeKind::Text(text)
            | NodeKind::Whitespace(text)
            | NodeKind::Cdata(text)
            | NodeKind::Comment(text) => Some(text),
            _ => None,
        }
    }

    /// Children of a document or element node; `None` for leaf nodes.
    pub fn children(&self) -> Option<&[NodeId]> {
        match &self.kind {
            NodeKind::Document(document) => Some(&document.children),
            NodeKind::Element(element) => Some(&element.children),
            _ => None,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<NodeId>> {
        match &mut self.kind {
            NodeKind::Document(document) => Some(&mut document.children),
            NodeKind::Element(element) => Some(&mut element.children),
            _ => None,
        }
    }

    /// The element tag, or `None` for non-element nodes.
    pub fn tag(&self) -> Option<Tag> {
        self.as_element().map(|element| element.tag)
    }

    pub(crate) fn tag_is(&self, tag: Tag) -> bool {
        self.tag() == Some(tag)
    }

    pub(crate) fn tag_in(&self, tags: &[Tag]) -> bool {
        match self.tag() {
            Some(tag) => tags.contains(&tag),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flags_combine_and_query() {
        let mut flags = ParseFlags::NORMAL;
        assert!(!flags.contains(ParseFlags::BY_PARSER));
        flags.insert(ParseFlags::BY_PARSER | ParseFlags::IMPLIED);
        assert!(flags.contains(ParseFlags::BY_PARSER));
        assert!(flags.contains(ParseFlags::IMPLIED));
        assert!(!flags.contains(ParseFlags::FOSTER_PARENTED));
        flags.remove(ParseFlags::IMPLIED);
        assert!(!flags.contains(ParseFlags::IMPLIED));
        assert!(flags.contains(ParseFlags::BY_PARSER));
    }

    #[test]
    fn node_accessors_match_kinds() {
        let node = Node::new(NodeKind::Document(Document::default()));
        assert!(node.as_document().is_some());
        assert!(node.as_element().is_none());
        assert!(node.children().is_some());
        assert_eq!(node.tag(), None);
    }
}
