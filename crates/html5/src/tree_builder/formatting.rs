//! The list of active formatting elements.
//!
//! Entries are element references or markers; markers bound reconstruction
//! and the adoption agency's searches. Insertion applies the Noah's-Ark
//! clause: at most three identical entries (same tag, namespace, and
//! attribute list) may sit between the latest marker and the end of the list.

use crate::arena::{NodeArena, NodeId};
use crate::token::attribute_matches_case_sensitive;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FormattingEntry {
    /// Sentinel inserted when entering captions, cells, and the like.
    Marker,
    Element(NodeId),
}

impl FormattingEntry {
    pub(crate) fn node(self) -> Option<NodeId> {
        match self {
            FormattingEntry::Marker => None,
            FormattingEntry::Element(node) => Some(node),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ActiveFormattingElements {
    entries: Vec<FormattingEntry>,
}

/// True when both attribute lists contain exactly the same name/value pairs
/// (names case-insensitive, values case-sensitive, order ignored).
fn all_attributes_match(arena: &NodeArena, a: NodeId, b: NodeId) -> bool {
    let first = arena[a].as_element().expect("formatting entries are elements");
    let second = arena[b].as_element().expect("formatting entries are elements");
    if first.attributes.len() != second.attributes.len() {
        return false;
    }
    first.attributes.iter().all(|attribute| {
        attribute_matches_case_sensitive(&second.attributes, &attribute.name, &attribute.value)
    })
}

impl ActiveFormattingElements {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn entries(&self) -> &[FormattingEntry] {
        &self.entries
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn get(&self, index: usize) -> FormattingEntry {
        self.entries[index]
    }

    pub(crate) fn position_of(&self, node: NodeId) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| *entry == FormattingEntry::Element(node))
    }

    pub(crate) fn remove(&mut self, node: NodeId) {
        if let Some(index) = self.position_of(node) {
            self.entries.remove(index);
        }
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> FormattingEntry {
        self.entries.remove(index)
    }

    pub(crate) fn insert_at(&mut self, index: usize, entry: FormattingEntry) {
        self.entries.insert(index, entry);
    }

    pub(crate) fn replace_at(&mut self, index: usize, node: NodeId) {
        self.entries[index] = FormattingEntry::Element(node);
    }

    pub(crate) fn push_marker(&mut self) {
        self.entries.push(FormattingEntry::Marker);
    }

    /// Adds a formatting element, enforcing the Noah's-Ark clause: if three
    /// identical entries already sit below the latest marker, the earliest of
    /// them is removed first.
    pub(crate) fn add(&mut self, arena: &NodeArena, node: NodeId) {
        let mut identical = 0usize;
        let mut earliest_identical = self.entries.len();
        for (index, entry) in self.entries.iter().enumerate().rev() {
            let candidate = match entry {
                FormattingEntry::Marker => break,
                FormattingEntry::Element(candidate) => *candidate,
            };
            let lhs = arena[candidate].as_element().expect("formatting entry");
            let rhs = arena[node].as_element().expect("formatting entry");
            if lhs.tag == rhs.tag
                && lhs.namespace == rhs.namespace
                && all_attributes_match(arena, candidate, node)
            {
                identical += 1;
                earliest_identical = index;
            }
        }
        if identical >= 3 {
            self.entries.remove(earliest_identical);
        }
        self.entries.push(FormattingEntry::Element(node));
    }

    /// Pops entries up to and including the last marker.
    pub(crate) fn clear_to_last_marker(&mut self) {
        while let Some(entry) = self.entries.pop() {
            if entry == FormattingEntry::Marker {
                break;
            }
        }
    }

    /// The most recent `<a>` entry above the last marker, for the "in body"
    /// anchor clause.
    pub(crate) fn last_anchor_index(&self, arena: &NodeArena) -> Option<usize> {
        for (index, entry) in self.entries.iter().enumerate().rev() {
            match entry {
                FormattingEntry::Marker => return None,
                FormattingEntry::Element(node) => {
                    if arena[*node].tag_is(crate::tag::Tag::A) {
                        return Some(index);
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Element, Namespace, Node, NodeKind};
    use crate::span::{SourcePosition, Span};
    use crate::tag::Tag;
    use crate::token::{Attribute, AttributeNamespace};

    fn formatting_element(arena: &mut NodeArena, tag: Tag, class: Option<&str>) -> NodeId {
        let attributes = class
            .map(|value| {
                vec![Attribute {
                    namespace: AttributeNamespace::None,
                    name: "class".to_string(),
                    value: value.to_string(),
                    original_name: Span::EMPTY,
                    original_value: Span::EMPTY,
                    name_start: SourcePosition::EMPTY,
                    name_end: SourcePosition::EMPTY,
                    value_start: SourcePosition::EMPTY,
                    value_end: SourcePosition::EMPTY,
                }]
            })
            .unwrap_or_default();
        arena.push(Node::new(NodeKind::Element(Element {
            tag,
            namespace: Namespace::Html,
            original_tag: Span::EMPTY,
            original_end_tag: Span::EMPTY,
            start_pos: SourcePosition::EMPTY,
            end_pos: SourcePosition::EMPTY,
            attributes,
            children: Vec::new(),
        })))
    }

    #[test]
    fn noahs_ark_caps_identical_entries_at_three() {
        let mut arena = NodeArena::new();
        let mut list = ActiveFormattingElements::new();
        let mut nodes = Vec::new();
        for _ in 0..4 {
            let node = formatting_element(&mut arena, Tag::B, Some("x"));
            nodes.push(node);
            list.add(&arena, node);
        }
        assert_eq!(list.len(), 3);
        // The earliest identical entry is the one evicted.
        assert!(list.position_of(nodes[0]).is_none());
        assert!(list.position_of(nodes[3]).is_some());
    }

    #[test]
    fn differing_attributes_are_not_identical() {
        let mut arena = NodeArena::new();
        let mut list = ActiveFormattingElements::new();
        for class in ["x", "y", "z", "w"] {
            let node = formatting_element(&mut arena, Tag::B, Some(class));
            list.add(&arena, node);
        }
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn markers_bound_the_noahs_ark_search() {
        let mut arena = NodeArena::new();
        let mut list = ActiveFormattingElements::new();
        for _ in 0..3 {
            let node = formatting_element(&mut arena, Tag::I, None);
            list.add(&arena, node);
        }
        list.push_marker();
        let after_marker = formatting_element(&mut arena, Tag::I, None);
        list.add(&arena, after_marker);
        // All four elements survive: the marker hides the earlier three.
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn clear_to_last_marker_stops_at_the_marker() {
        let mut arena = NodeArena::new();
        let mut list = ActiveFormattingElements::new();
        let outer = formatting_element(&mut arena, Tag::B, None);
        list.add(&arena, outer);
        list.push_marker();
        let inner = formatting_element(&mut arena, Tag::I, None);
        list.add(&arena, inner);
        list.clear_to_last_marker();
        assert_eq!(list.len(), 1);
        assert!(list.position_of(outer).is_some());
    }

    #[test]
    fn anchor_lookup_stops_at_markers() {
        let mut arena = NodeArena::new();
        let mut list = ActiveFormattingElements::new();
        let anchor = formatting_element(&mut arena, Tag::A, None);
        list.add(&arena, anchor);
        assert_eq!(list.last_anchor_index(&arena), Some(0));
        list.push_marker();
        assert_eq!(list.last_anchor_index(&arena), None);
    }
}
