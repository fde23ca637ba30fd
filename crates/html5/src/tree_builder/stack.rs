//! The stack of open elements and the scope queries over it.
//!
//! Invariant: every entry is an element node, and entry `i` is an ancestor of
//! entry `i + 1` in the tree. The bottom entry is always the `<html>` root
//! once it exists; the top entry is the "current node".

use crate::arena::{NodeArena, NodeId};
use crate::tag::Tag;

/// The five flavors of "has an element in scope". Each flavor differs only in
/// the set of tags that close off the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ScopeKind {
    Default,
    ListItem,
    Button,
    Table,
    Select,
}

/// Boundary tags for the default scope: the generic "firewall" elements that
/// isolate their content from the rest of the document.
const DEFAULT_SCOPE_BOUNDARY: &[Tag] = &[
    Tag::Applet,
    Tag::Caption,
    Tag::Html,
    Tag::Table,
    Tag::Td,
    Tag::Th,
    Tag::Marquee,
    Tag::Object,
    Tag::Mi,
    Tag::Mo,
    Tag::Mn,
    Tag::Ms,
    Tag::Mtext,
    Tag::AnnotationXml,
    Tag::Foreignobject,
    Tag::Desc,
    Tag::Title,
];

fn blocks_scope(tag: Tag, kind: ScopeKind) -> bool {
    match kind {
        ScopeKind::Default => DEFAULT_SCOPE_BOUNDARY.contains(&tag),
        ScopeKind::ListItem => {
            DEFAULT_SCOPE_BOUNDARY.contains(&tag) || tag == Tag::Ol || tag == Tag::Ul
        }
        ScopeKind::Button => DEFAULT_SCOPE_BOUNDARY.contains(&tag) || tag == Tag::Button,
        ScopeKind::Table => tag == Tag::Html || tag == Tag::Table,
        // Select scope inverts the rule: everything except the two tags that
        // may legally sit between a <select> and its options is a boundary.
        ScopeKind::Select => !matches!(tag, Tag::Optgroup | Tag::Option),
    }
}

#[derive(Debug, Default)]
pub(crate) struct OpenElements {
    items: Vec<NodeId>,
}

impl OpenElements {
    pub(crate) fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub(crate) fn push(&mut self, node: NodeId) {
        self.items.push(node);
    }

    pub(crate) fn pop(&mut self) -> Option<NodeId> {
        self.items.pop()
    }

    /// The current node: the most recently opened element.
    pub(crate) fn current(&self) -> Option<NodeId> {
        self.items.last().copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn get(&self, index: usize) -> NodeId {
        self.items[index]
    }

    pub(crate) fn iter(&self) -> impl DoubleEndedIterator<Item = NodeId> + ExactSizeIterator + '_ {
        self.items.iter().copied()
    }

    pub(crate) fn position(&self, node: NodeId) -> Option<usize> {
        self.items.iter().position(|candidate| *candidate == node)
    }

    pub(crate) fn contains(&self, node: NodeId) -> bool {
        self.position(node).is_some()
    }

    pub(crate) fn remove(&mut self, node: NodeId) {
        if let Some(index) = self.position(node) {
            self.items.remove(index);
        }
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> NodeId {
        self.items.remove(index)
    }

    pub(crate) fn insert_at(&mut self, index: usize, node: NodeId) {
        self.items.insert(index, node);
    }

    pub(crate) fn replace_at(&mut self, index: usize, node: NodeId) {
        self.items[index] = node;
    }

    /// "Has an element in scope" for a single tag.
    pub(crate) fn has_tag_in_scope(&self, arena: &NodeArena, tag: Tag, kind: ScopeKind) -> bool {
        self.has_any_tag_in_scope(arena, &[tag], kind)
    }

    /// Like [`Self::has_tag_in_scope`] but for a set of candidate tags (the
    /// heading case).
    pub(crate) fn has_any_tag_in_scope(
        &self,
        arena: &NodeArena,
        tags: &[Tag],
        kind: ScopeKind,
    ) -> bool {
        for node in self.items.iter().rev() {
            let Some(tag) = arena[*node].tag() else {
                continue;
            };
            if tags.contains(&tag) {
                return true;
            }
            if blocks_scope(tag, kind) {
                return false;
            }
        }
        false
    }

    /// Scope check for a specific node rather than a tag name; used for the
    /// form-element pointer, which may refer to an element whose tag appears
    /// many times.
    pub(crate) fn has_node_in_scope(&self, arena: &NodeArena, node: NodeId) -> bool {
        for candidate in self.items.iter().rev() {
            if *candidate == node {
                return true;
            }
            let Some(tag) = arena[*candidate].tag() else {
                continue;
            };
            if blocks_scope(tag, ScopeKind::Default) {
                return false;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::NodeArena;
    use crate::node::{Element, Namespace, Node, NodeKind};
    use crate::span::{SourcePosition, Span};

    fn element(arena: &mut NodeArena, tag: Tag) -> NodeId {
        arena.push(Node::new(NodeKind::Element(Element {
            tag,
            namespace: Namespace::Html,
            original_tag: Span::EMPTY,
            original_end_tag: Span::EMPTY,
            start_pos: SourcePosition::EMPTY,
            end_pos: SourcePosition::EMPTY,
            attributes: Vec::new(),
            children: Vec::new(),
        })))
    }

    fn stack_of(arena: &mut NodeArena, tags: &[Tag]) -> OpenElements {
        let mut stack = OpenElements::new();
        for tag in tags {
            let node = element(arena, *tag);
            stack.push(node);
        }
        stack
    }

    #[test]
    fn default_scope_stops_at_table_boundaries() {
        let mut arena = NodeArena::new();
        let stack = stack_of(&mut arena, &[Tag::Html, Tag::P, Tag::Table]);
        assert!(!stack.has_tag_in_scope(&arena, Tag::P, ScopeKind::Default));

        let stack = stack_of(&mut arena, &[Tag::Html, Tag::Table, Tag::P]);
        assert!(stack.has_tag_in_scope(&arena, Tag::P, ScopeKind::Default));
    }

    #[test]
    fn button_and_list_item_scopes_add_their_boundaries() {
        let mut arena = NodeArena::new();
        let stack = stack_of(&mut arena, &[Tag::Html, Tag::P, Tag::Button]);
        assert!(stack.has_tag_in_scope(&arena, Tag::P, ScopeKind::Default));
        assert!(!stack.has_tag_in_scope(&arena, Tag::P, ScopeKind::Button));

        let stack = stack_of(&mut arena, &[Tag::Html, Tag::Li, Tag::Ul]);
        assert!(!stack.has_tag_in_scope(&arena, Tag::Li, ScopeKind::ListItem));
        assert!(stack.has_tag_in_scope(&arena, Tag::Li, ScopeKind::Default));
    }

    #[test]
    fn table_scope_sees_through_block_elements() {
        let mut arena = NodeArena::new();
        let stack = stack_of(&mut arena, &[Tag::Html, Tag::Table, Tag::Tbody, Tag::Tr]);
        assert!(stack.has_tag_in_scope(&arena, Tag::Tr, ScopeKind::Table));
        assert!(stack.has_tag_in_scope(&arena, Tag::Table, ScopeKind::Table));
        let stack = stack_of(&mut arena, &[Tag::Html, Tag::Table, Tag::Table]);
        assert!(stack.has_tag_in_scope(&arena, Tag::Table, ScopeKind::Table));
    }

    #[test]
    fn select_scope_blocks_on_anything_but_option_content() {
        let mut arena = NodeArena::new();
        let stack = stack_of(&mut arena, &[Tag::Html, Tag::Select, Tag::Optgroup, Tag::Option]);
        assert!(stack.has_tag_in_scope(&arena, Tag::Select, ScopeKind::Select));

        let stack = stack_of(&mut arena, &[Tag::Html, Tag::Select, Tag::Div]);
        assert!(!stack.has_tag_in_scope(&arena, Tag::Select, ScopeKind::Select));
    }

    #[test]
    fn node_scope_matches_identity_not_tag() {
        let mut arena = NodeArena::new();
        let mut stack = OpenElements::new();
        let html = element(&mut arena, Tag::Html);
        let first_form = element(&mut arena, Tag::Form);
        let second_form = element(&mut arena, Tag::Form);
        stack.push(html);
        stack.push(first_form);
        assert!(stack.has_node_in_scope(&arena, first_form));
        assert!(!stack.has_node_in_scope(&arena, second_form));
    }
}
