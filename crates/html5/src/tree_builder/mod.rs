//! Tree construction: the insertion-mode state machine.
//!
//! Consumes the tokenizer one token at a time and builds the document tree in
//! the arena, maintaining the stack of open elements, the list of active
//! formatting elements, and the element pointers. The constructor also drives
//! the tokenizer's context switches: generic raw-text elements force the lexer
//! state, and the foreign-content flag follows the current node's namespace.
//!
//! Invariants kept between tokens:
//! - `open_elements[i]` is an ancestor of `open_elements[i + 1]`.
//! - every non-marker formatting entry is in the open-element stack or was
//!   detached by the adoption agency.
//! - `arena[child].parent.children[arena[child].index_within_parent] == child`
//!   for every attached node.

mod doctype;
pub(crate) mod foreign;
mod formatting;
mod modes;
mod stack;
#[cfg(test)]
mod tests;

use crate::arena::{NodeArena, NodeId};
use crate::cursor::REPLACEMENT_CHAR;
use crate::error::{ErrorDetail, ErrorKind, ErrorSink, ParseError, ParserErrorDetail};
use crate::node::{
    Document, Element, Namespace, Node, NodeKind, ParseFlags, QuirksMode, TextData,
};
use crate::span::{SourcePosition, Span};
use crate::tag::{Tag, tag_name_span};
use crate::token::{
    Attribute, AttributeNamespace, Token, TokenKind, TokenType, attribute_matches, get_attribute,
};
use crate::tokenizer::{Tokenizer, TokenizerState};
use crate::ParseOptions;
use formatting::{ActiveFormattingElements, FormattingEntry};
pub use modes::InsertionMode;
use stack::{OpenElements, ScopeKind};

/// Readability constants for the tag_is/tag_in helpers.
const START_TAG: bool = true;
const END_TAG: bool = false;

fn tag_is(token: &Token, is_start: bool, tag: Tag) -> bool {
    if is_start {
        token.start_tag() == Some(tag)
    } else {
        token.end_tag() == Some(tag)
    }
}

fn tag_in(token: &Token, is_start: bool, tags: &[Tag]) -> bool {
    let candidate = if is_start {
        token.start_tag()
    } else {
        token.end_tag()
    };
    match candidate {
        Some(tag) => tags.contains(&tag),
        None => false,
    }
}

/// What kind of text node the pending character buffer will produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TextKind {
    Whitespace,
    Text,
    Cdata,
}

/// Pending character tokens, accumulated until a non-character token flushes
/// them into a single text node. This doubles as the "pending table character
/// tokens" list: in-table-text just flips foster parenting before the flush.
struct TextNodeBuffer {
    buffer: String,
    start_original_text: usize,
    start_position: SourcePosition,
    kind: TextKind,
}

/// The bits of the current token that helpers reach for after the token
/// itself has been partially consumed.
#[derive(Clone, Copy)]
struct CurrentToken {
    token_type: TokenType,
    end_tag: Option<Tag>,
    position: SourcePosition,
    original_text: Span,
}

pub(crate) struct TreeBuilder<'a> {
    source: &'a [u8],
    arena: NodeArena,
    document: NodeId,
    root: Option<NodeId>,
    insertion_mode: InsertionMode,
    original_insertion_mode: InsertionMode,
    open_elements: OpenElements,
    active_formatting: ActiveFormattingElements,
    head_element: Option<NodeId>,
    form_element: Option<NodeId>,
    reprocess_current_token: bool,
    self_closing_flag_acknowledged: bool,
    frameset_ok: bool,
    ignore_next_linefeed: bool,
    foster_parent_insertions: bool,
    text_node: TextNodeBuffer,
    current_token: CurrentToken,
    /// The spec treats `</body>` and `</html>` as always-implicit closes; these
    /// flags let the pop machinery tell an explicit close from a truly missing
    /// end tag.
    closed_body_tag: bool,
    closed_html_tag: bool,
}

/// Result of tree construction, handed to the output wrapper.
pub(crate) struct TreeOutput {
    pub(crate) arena: NodeArena,
    pub(crate) document: NodeId,
    pub(crate) root: Option<NodeId>,
}

/// Runs the full parse: lexes tokens and feeds them through tree construction
/// until EOF (or the first error, when so configured).
pub(crate) fn construct_tree(
    source: &[u8],
    options: &ParseOptions,
    errors: &mut ErrorSink,
) -> TreeOutput {
    let mut tokenizer = Tokenizer::new(source, options.tab_stop, errors);
    let mut builder = TreeBuilder::new(source);
    let mut has_error = false;
    let mut token: Option<Token> = None;

    loop {
        if builder.reprocess_current_token {
            builder.reprocess_current_token = false;
        } else {
            let is_foreign = builder.current_node().is_some_and(|node| {
                builder.arena[node]
                    .as_element()
                    .is_some_and(|element| element.namespace != Namespace::Html)
            });
            tokenizer.set_is_current_node_foreign(is_foreign);
            let (next, lex_ok) = tokenizer.lex(errors);
            has_error |= !lex_ok;
            token = Some(next);
        }
        let current = token.as_mut().expect("a token is always lexed before handling");

        #[cfg(any(test, feature = "debug-stats"))]
        log::trace!(
            target: "html5.tree_builder",
            "handling {:?} @{}:{} in {:?}",
            current.token_type(),
            current.position.line,
            current.position.column,
            builder.insertion_mode
        );

        builder.current_token = CurrentToken {
            token_type: current.token_type(),
            end_tag: current.end_tag(),
            position: current.position,
            original_text: current.original_text,
        };
        builder.self_closing_flag_acknowledged = !matches!(
            &current.kind,
            TokenKind::StartTag(data) if data.is_self_closing
        );

        has_error |= !builder.handle_token(current, &mut tokenizer, errors);

        if !builder.self_closing_flag_acknowledged {
            builder.add_parse_error_with_kind(
                current,
                ErrorKind::UnacknowledgedSelfClosingTag,
                errors,
            );
        }

        let at_eof = matches!(current.kind, TokenKind::Eof);
        if (at_eof && !builder.reprocess_current_token)
            || (options.stop_on_first_error && has_error)
        {
            break;
        }
    }

    builder.finish_parsing();
    TreeOutput {
        arena: builder.arena,
        document: builder.document,
        root: builder.root,
    }
}

impl<'a> TreeBuilder<'a> {
    fn new(source: &'a [u8]) -> Self {
        let mut arena = NodeArena::new();
        let mut document_node = Node::new(NodeKind::Document(Document::default()));
        document_node.parse_flags = ParseFlags::BY_PARSER;
        let document = arena.push(document_node);
        Self {
            source,
            arena,
            document,
            root: None,
            insertion_mode: InsertionMode::Initial,
            original_insertion_mode: InsertionMode::Initial,
            open_elements: OpenElements::new(),
            active_formatting: ActiveFormattingElements::new(),
            head_element: None,
            form_element: None,
            reprocess_current_token: false,
            self_closing_flag_acknowledged: true,
            frameset_ok: true,
            ignore_next_linefeed: false,
            foster_parent_insertions: false,
            text_node: TextNodeBuffer {
                buffer: String::new(),
                start_original_text: 0,
                start_position: SourcePosition::START,
                kind: TextKind::Whitespace,
            },
            current_token: CurrentToken {
                token_type: TokenType::Eof,
                end_tag: None,
                position: SourcePosition::START,
                original_text: Span::EMPTY,
            },
            closed_body_tag: false,
            closed_html_tag: false,
        }
    }

    /// The node at the top of the stack of open elements, or `None` before
    /// the root has been created.
    fn current_node(&self) -> Option<NodeId> {
        self.open_elements.current()
    }

    fn node_tag_is(&self, node: NodeId, tag: Tag) -> bool {
        self.arena[node].tag_is(tag)
    }

    fn node_tag_in(&self, node: NodeId, tags: &[Tag]) -> bool {
        self.arena[node].tag_in(tags)
    }

    fn set_insertion_mode(&mut self, mode: InsertionMode) {
        self.insertion_mode = mode;
    }

    fn set_frameset_not_ok(&mut self) {
        self.frameset_ok = false;
    }

    fn acknowledge_self_closing_tag(&mut self) {
        self.self_closing_flag_acknowledged = true;
    }

    // -----------------------------------------------------------------
    // Diagnostics.

    fn parser_error_detail(&self, token: &Token) -> ErrorDetail {
        let input_tag = token
            .start_tag()
            .or_else(|| token.end_tag())
            .unwrap_or(Tag::Unknown);
        ErrorDetail::Parser(ParserErrorDetail {
            input_type: token.token_type(),
            input_tag,
            insertion_mode: self.insertion_mode,
            tag_stack: self
                .open_elements
                .iter()
                .map(|node| self.arena[node].tag().unwrap_or(Tag::Unknown))
                .collect(),
        })
    }

    fn add_parse_error_with_kind(
        &mut self,
        token: &Token,
        kind: ErrorKind,
        errors: &mut ErrorSink,
    ) {
        // The stack snapshot is not free; skip building it when the sink is
        // over its cap and would drop the record anyway.
        let detail = if errors.will_store() {
            self.parser_error_detail(token)
        } else {
            ErrorDetail::None
        };
        errors.record(ParseError {
            kind,
            position: token.position,
            original_text: token.original_text,
            detail,
        });
    }

    fn add_parse_error(&mut self, token: &Token, errors: &mut ErrorSink) {
        self.add_parse_error_with_kind(token, ErrorKind::Parser, errors);
    }

    // -----------------------------------------------------------------
    // Node creation and tree surgery.

    fn create_node(&mut self, kind: NodeKind) -> NodeId {
        self.arena.push(Node::new(kind))
    }

    /// Creates a parser-inserted element in the HTML namespace.
    fn create_element(&mut self, tag: Tag) -> NodeId {
        self.create_node(NodeKind::Element(Element {
            tag,
            namespace: Namespace::Html,
            original_tag: Span::EMPTY,
            original_end_tag: Span::EMPTY,
            start_pos: self.current_token.position,
            end_pos: SourcePosition::EMPTY,
            attributes: Vec::new(),
            children: Vec::new(),
        }))
    }

    /// Constructs an element from a start-tag token, taking ownership of its
    /// attributes.
    fn create_element_from_token(&mut self, token: &mut Token, namespace: Namespace) -> NodeId {
        let TokenKind::StartTag(data) = &mut token.kind else {
            unreachable!("elements are only created from start tags");
        };
        debug_assert!(token.original_text.len() >= 2);
        debug_assert_eq!(self.source[token.original_text.start], b'<');
        debug_assert_eq!(self.source[token.original_text.end - 1], b'>');
        let attributes = std::mem::take(&mut data.attributes);
        self.create_node(NodeKind::Element(Element {
            tag: data.tag,
            namespace,
            original_tag: token.original_text,
            original_end_tag: Span::EMPTY,
            start_pos: token.position,
            end_pos: SourcePosition::EMPTY,
            attributes,
            children: Vec::new(),
        }))
    }

    /// Appends a node at the end of a parent's children, fixing up the parent
    /// and index back-references.
    fn append_node(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(self.arena[child].parent.is_none());
        let index = self.arena[parent]
            .children_mut()
            .expect("append target must be a document or element")
            .len();
        self.arena[parent]
            .children_mut()
            .expect("append target must be a document or element")
            .push(child);
        self.arena[child].parent = Some(parent);
        self.arena[child].index_within_parent = index;
    }

    /// Inserts a node at a specific index within a parent, shifting and
    /// re-indexing the later siblings.
    fn insert_node_at(&mut self, parent: NodeId, index: usize, child: NodeId) {
        debug_assert!(self.arena[child].parent.is_none());
        {
            let children = self.arena[parent]
                .children_mut()
                .expect("insert target must be an element");
            debug_assert!(index < children.len());
            children.insert(index, child);
        }
        self.arena[child].parent = Some(parent);
        self.arena[child].index_within_parent = index;
        self.reindex_children_from(parent, index + 1);
    }

    fn reindex_children_from(&mut self, parent: NodeId, from: usize) {
        let children: Vec<NodeId> = self.arena[parent]
            .children()
            .expect("reindex target has children")
            .to_vec();
        for (index, child) in children.into_iter().enumerate().skip(from) {
            self.arena[child].index_within_parent = index;
        }
    }

    fn remove_from_parent(&mut self, node: NodeId) {
        let Some(parent) = self.arena[node].parent else {
            // Freshly cloned nodes float free until the adoption agency
            // reattaches them.
            return;
        };
        let index = self.arena[node].index_within_parent;
        {
            let children = self.arena[parent]
                .children_mut()
                .expect("attached node's parent has children");
            debug_assert_eq!(children[index], node);
            children.remove(index);
        }
        self.arena[node].parent = None;
        self.arena[node].index_within_parent = crate::node::DETACHED;
        self.reindex_children_from(parent, index);
    }

    /// Redirects an out-of-place node to the appropriate sibling of the last
    /// table on the stack.
    fn foster_parent_element(&mut self, node: NodeId) {
        debug_assert!(self.open_elements.len() > 2);
        self.arena[node].parse_flags.insert(ParseFlags::FOSTER_PARENTED);
        let mut foster_parent = self.open_elements.get(0);
        debug_assert!(self.node_tag_is(foster_parent, Tag::Html));
        for index in (2..self.open_elements.len()).rev() {
            let table_element = self.open_elements.get(index);
            if self.node_tag_is(table_element, Tag::Table) {
                match self.arena[table_element].parent {
                    Some(parent) if self.arena[parent].as_element().is_some() => {
                        let insert_index = self.arena[table_element].index_within_parent;
                        self.insert_node_at(parent, insert_index, node);
                        return;
                    }
                    _ => {
                        // A table with no usable parent; fall back to the
                        // element just below it.
                        foster_parent = self.open_elements.get(index - 1);
                        break;
                    }
                }
            }
        }
        if self.arena[node].as_element().is_some() {
            self.open_elements.push(node);
        }
        self.append_node(foster_parent, node);
    }

    /// Flushes the pending character buffer into a text node.
    fn maybe_flush_text_node_buffer(&mut self) {
        if self.text_node.buffer.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.text_node.buffer);
        let start = self.text_node.start_original_text;
        let end = self.current_token.original_text.start.max(start);
        let data = TextData {
            text,
            original_text: Span::new(start, end),
            start_pos: self.text_node.start_position,
        };
        let kind = match self.text_node.kind {
            TextKind::Whitespace => NodeKind::Whitespace(data),
            TextKind::Text => NodeKind::Text(data),
            TextKind::Cdata => NodeKind::Cdata(data),
        };
        let text_node = self.create_node(kind);
        let current = self.current_node();
        let foster = self.foster_parent_insertions
            && current.is_some_and(|node| {
                self.node_tag_in(
                    node,
                    &[Tag::Table, Tag::Tbody, Tag::Tfoot, Tag::Thead, Tag::Tr],
                )
            });
        if foster {
            self.foster_parent_element(text_node);
        } else {
            let parent = if self.root.is_some() {
                current.expect("open elements are non-empty while the root exists")
            } else {
                self.document
            };
            self.append_node(parent, text_node);
        }
        self.text_node.kind = TextKind::Whitespace;
    }

    fn record_end_of_element(&mut self, node: NodeId) {
        let end_tag_text = if self.current_token.token_type == TokenType::EndTag {
            self.current_token.original_text
        } else {
            Span::EMPTY
        };
        let position = self.current_token.position;
        if let Some(element) = self.arena[node].as_element_mut() {
            element.end_pos = position;
            element.original_end_tag = end_tag_text;
        }
    }

    fn pop_current_node(&mut self) -> Option<NodeId> {
        self.maybe_flush_text_node_buffer();
        if !self.open_elements.is_empty() {
            debug_assert!(self.node_tag_is(self.open_elements.get(0), Tag::Html));
        }
        let current = self.open_elements.pop()?;
        let is_closed_body_or_html = (self.node_tag_is(current, Tag::Body)
            && self.closed_body_tag)
            || (self.node_tag_is(current, Tag::Html) && self.closed_html_tag);
        let matches_end_tag = self.current_token.token_type == TokenType::EndTag
            && self.current_token.end_tag == self.arena[current].tag();
        if !matches_end_tag && !is_closed_body_or_html {
            self.arena[current]
                .parse_flags
                .insert(ParseFlags::IMPLICIT_END_TAG);
        }
        if !is_closed_body_or_html {
            self.record_end_of_element(current);
        }
        Some(current)
    }

    fn append_comment_node(&mut self, parent: NodeId, token: &Token) {
        self.maybe_flush_text_node_buffer();
        let TokenKind::Comment(text) = &token.kind else {
            unreachable!("comment nodes come from comment tokens");
        };
        let comment = self.create_node(NodeKind::Comment(TextData {
            text: text.clone(),
            original_text: token.original_text,
            start_pos: token.position,
        }));
        self.append_node(parent, comment);
    }

    fn clear_stack_to_table_row_context(&mut self) {
        while !self.node_tag_in(
            self.current_node().expect("stack has html during table handling"),
            &[Tag::Html, Tag::Tr],
        ) {
            self.pop_current_node();
        }
    }

    fn clear_stack_to_table_context(&mut self) {
        while !self.node_tag_in(
            self.current_node().expect("stack has html during table handling"),
            &[Tag::Html, Tag::Table],
        ) {
            self.pop_current_node();
        }
    }

    fn clear_stack_to_table_body_context(&mut self) {
        while !self.node_tag_in(
            self.current_node().expect("stack has html during table handling"),
            &[Tag::Html, Tag::Tbody, Tag::Tfoot, Tag::Thead],
        ) {
            self.pop_current_node();
        }
    }

    /// Inserts an element at the current insertion point (or foster-parents
    /// it). `is_reconstructing` suppresses the text-buffer flush: character
    /// insertion reconstructs formatting elements *before* the character is
    /// buffered, and those clones must land ahead of the flush.
    fn insert_element(&mut self, node: NodeId, is_reconstructing: bool) {
        if !is_reconstructing {
            self.maybe_flush_text_node_buffer();
        }
        let current = self.current_node();
        if self.foster_parent_insertions
            && current.is_some_and(|current| {
                self.node_tag_in(
                    current,
                    &[Tag::Table, Tag::Tbody, Tag::Tfoot, Tag::Thead, Tag::Tr],
                )
            })
        {
            self.foster_parent_element(node);
            self.open_elements.push(node);
            return;
        }
        // The root insertion happens while the stack is still empty.
        let parent = if self.root.is_some() {
            current.expect("open elements are non-empty while the root exists")
        } else {
            self.document
        };
        self.append_node(parent, node);
        self.open_elements.push(node);
    }

    fn insert_element_from_token(&mut self, token: &mut Token) -> NodeId {
        let element = self.create_element_from_token(token, Namespace::Html);
        self.insert_element(element, false);
        element
    }

    fn insert_element_of_tag_type(&mut self, tag: Tag, reason: ParseFlags) -> NodeId {
        let element = self.create_element(tag);
        self.arena[element]
            .parse_flags
            .insert(ParseFlags::BY_PARSER | reason);
        self.insert_element(element, false);
        element
    }

    fn insert_foreign_element(
        &mut self,
        token: &mut Token,
        namespace: Namespace,
        errors: &mut ErrorSink,
    ) -> NodeId {
        let element = self.create_element_from_token(token, namespace);
        self.insert_element(element, false);
        let element_ref = self.arena[element]
            .as_element()
            .expect("foreign insertions are elements");
        let xmlns_is_wrong = get_attribute(&element_ref.attributes, "xmlns")
            .map(|attribute| attribute.value != foreign::legal_xmlns(namespace))
            .unwrap_or(false);
        let xlink_is_wrong = get_attribute(&element_ref.attributes, "xmlns:xlink")
            .map(|attribute| attribute.value != "http://www.w3.org/1999/xlink")
            .unwrap_or(false);
        if xmlns_is_wrong {
            self.add_parse_error(token, errors);
        }
        if xlink_is_wrong {
            self.add_parse_error(token, errors);
        }
        element
    }

    fn insert_text_token(&mut self, token: &Token) {
        let c = token
            .character()
            .expect("only character-class tokens are inserted as text");
        if self.text_node.buffer.is_empty() {
            self.text_node.start_original_text = token.original_text.start;
            self.text_node.start_position = token.position;
        }
        self.text_node.buffer.push(c);
        match token.kind {
            TokenKind::Character(_) => self.text_node.kind = TextKind::Text,
            TokenKind::Cdata(_) => self.text_node.kind = TextKind::Cdata,
            _ => {}
        }
    }

    /// The generic raw-text / RCDATA element parsing algorithm.
    fn run_generic_parsing_algorithm(
        &mut self,
        token: &mut Token,
        tokenizer: &mut Tokenizer<'a>,
        lexer_state: TokenizerState,
    ) {
        self.insert_element_from_token(token);
        tokenizer.set_state(lexer_state);
        self.original_insertion_mode = self.insertion_mode;
        self.insertion_mode = InsertionMode::Text;
    }

    /// Clones tags and attributes of an element, but none of its content.
    fn clone_node(&mut self, node: NodeId, reason: ParseFlags) -> NodeId {
        let (mut new_node, attributes) = {
            let original = &self.arena[node];
            let element = original
                .as_element()
                .expect("only elements are cloned during parsing");
            let attributes: Vec<Attribute> = element.attributes.clone();
            let mut cloned = Node::new(NodeKind::Element(Element {
                tag: element.tag,
                namespace: element.namespace,
                original_tag: element.original_tag,
                original_end_tag: element.original_end_tag,
                start_pos: element.start_pos,
                end_pos: element.end_pos,
                attributes: Vec::new(),
                children: Vec::new(),
            }));
            cloned.parse_flags = original.parse_flags;
            (cloned, attributes)
        };
        // The clone may get its own end tag.
        new_node.parse_flags.remove(ParseFlags::IMPLICIT_END_TAG);
        new_node
            .parse_flags
            .insert(reason | ParseFlags::BY_PARSER);
        let id = self.arena.push(new_node);
        self.arena[id]
            .as_element_mut()
            .expect("clone is an element")
            .attributes = attributes;
        id
    }

    // -----------------------------------------------------------------
    // Active formatting elements.

    fn add_formatting_element(&mut self, node: NodeId) {
        self.active_formatting.add(&self.arena, node);
    }

    fn reconstruct_active_formatting_elements(&mut self) {
        let entries_len = self.active_formatting.len();
        if entries_len == 0 {
            return;
        }
        // Nothing to do when the newest entry is a marker or already open.
        match self.active_formatting.get(entries_len - 1) {
            FormattingEntry::Marker => return,
            FormattingEntry::Element(node) => {
                if self.open_elements.contains(node) {
                    return;
                }
            }
        }
        // Rewind to the entry after the last marker/open element.
        let mut index = entries_len - 1;
        loop {
            if index == 0 {
                break;
            }
            index -= 1;
            let reached_boundary = match self.active_formatting.get(index) {
                FormattingEntry::Marker => true,
                FormattingEntry::Element(node) => self.open_elements.contains(node),
            };
            if reached_boundary {
                index += 1;
                break;
            }
        }
        for i in index..entries_len {
            let node = self
                .active_formatting
                .get(i)
                .node()
                .expect("markers cannot appear inside the reconstruction range");
            let clone = self.clone_node(node, ParseFlags::RECONSTRUCTED_FORMATTING_ELEMENT);
            self.insert_element(clone, true);
            self.active_formatting.replace_at(i, clone);
        }
    }

    fn clear_active_formatting_elements(&mut self) {
        self.active_formatting.clear_to_last_marker();
    }

    // -----------------------------------------------------------------
    // Scope queries and implied end tags.

    fn has_an_element_in_scope(&self, tag: Tag) -> bool {
        self.open_elements
            .has_tag_in_scope(&self.arena, tag, ScopeKind::Default)
    }

    fn has_an_element_in_list_scope(&self, tag: Tag) -> bool {
        self.open_elements
            .has_tag_in_scope(&self.arena, tag, ScopeKind::ListItem)
    }

    fn has_an_element_in_button_scope(&self, tag: Tag) -> bool {
        self.open_elements
            .has_tag_in_scope(&self.arena, tag, ScopeKind::Button)
    }

    fn has_an_element_in_table_scope(&self, tag: Tag) -> bool {
        self.open_elements
            .has_tag_in_scope(&self.arena, tag, ScopeKind::Table)
    }

    fn has_an_element_in_select_scope(&self, tag: Tag) -> bool {
        self.open_elements
            .has_tag_in_scope(&self.arena, tag, ScopeKind::Select)
    }

    fn has_node_in_scope(&self, node: NodeId) -> bool {
        self.open_elements.has_node_in_scope(&self.arena, node)
    }

    /// Pops the tags the spec lets close themselves, stopping at `exception`.
    fn generate_implied_end_tags(&mut self, exception: Option<Tag>) {
        const IMPLIED: &[Tag] = &[
            Tag::Dd,
            Tag::Dt,
            Tag::Li,
            Tag::Option,
            Tag::Optgroup,
            Tag::P,
            Tag::Rp,
            Tag::Rt,
        ];
        while let Some(current) = self.current_node() {
            if !self.node_tag_in(current, IMPLIED) {
                break;
            }
            if exception.is_some() && self.arena[current].tag() == exception {
                break;
            }
            self.pop_current_node();
        }
    }

    /// Implicitly closes open tags until one with the target name is popped.
    /// Closing past anything outside the implied-end-tag set is a parse error.
    fn implicitly_close_tags(&mut self, token: &Token, target: Tag, errors: &mut ErrorSink) -> bool {
        let mut result = true;
        self.generate_implied_end_tags(Some(target));
        if !self
            .current_node()
            .is_some_and(|node| self.node_tag_is(node, target))
        {
            self.add_parse_error(token, errors);
            while !self
                .current_node()
                .is_some_and(|node| self.node_tag_is(node, target))
            {
                self.pop_current_node();
            }
            result = false;
        }
        self.pop_current_node();
        result
    }

    fn maybe_implicitly_close_p_tag(&mut self, token: &Token, errors: &mut ErrorSink) -> bool {
        if self.has_an_element_in_button_scope(Tag::P) {
            return self.implicitly_close_tags(token, Tag::P, errors);
        }
        true
    }

    /// Closes an open `<li>` (or `<dd>`/`<dt>`) when a new one starts.
    fn maybe_implicitly_close_list_tag(
        &mut self,
        token: &Token,
        is_li: bool,
        errors: &mut ErrorSink,
    ) {
        self.frameset_ok = false;
        for index in (0..self.open_elements.len()).rev() {
            let node = self.open_elements.get(index);
            let is_list_tag = if is_li {
                self.node_tag_is(node, Tag::Li)
            } else {
                self.node_tag_in(node, &[Tag::Dd, Tag::Dt])
            };
            if is_list_tag {
                let tag = self.arena[node].tag().expect("list entries are elements");
                self.implicitly_close_tags(token, tag, errors);
                return;
            }
            if self.is_special_node(node)
                && !self.node_tag_in(node, &[Tag::Address, Tag::Div, Tag::P])
            {
                return;
            }
        }
    }

    fn is_special_node(&self, node: NodeId) -> bool {
        let element = match self.arena[node].as_element() {
            Some(element) => element,
            None => return false,
        };
        match element.namespace {
            Namespace::Html => matches!(
                element.tag,
                Tag::Address
                    | Tag::Applet
                    | Tag::Area
                    | Tag::Article
                    | Tag::Aside
                    | Tag::Base
                    | Tag::Basefont
                    | Tag::Bgsound
                    | Tag::Blockquote
                    | Tag::Body
                    | Tag::Br
                    | Tag::Button
                    | Tag::Caption
                    | Tag::Center
                    | Tag::Col
                    | Tag::Colgroup
                    | Tag::Menuitem
                    | Tag::Dd
                    | Tag::Details
                    | Tag::Dir
                    | Tag::Div
                    | Tag::Dl
                    | Tag::Dt
                    | Tag::Embed
                    | Tag::Fieldset
                    | Tag::Figcaption
                    | Tag::Figure
                    | Tag::Footer
                    | Tag::Form
                    | Tag::Frame
                    | Tag::Frameset
                    | Tag::H1
                    | Tag::H2
                    | Tag::H3
                    | Tag::H4
                    | Tag::H5
                    | Tag::H6
                    | Tag::Head
                    | Tag::Header
                    | Tag::Hgroup
                    | Tag::Hr
                    | Tag::Html
                    | Tag::Iframe
                    | Tag::Img
                    | Tag::Input
                    | Tag::Isindex
                    | Tag::Li
                    | Tag::Link
                    | Tag::Listing
                    | Tag::Marquee
                    | Tag::Menu
                    | Tag::Meta
                    | Tag::Nav
                    | Tag::Noembed
                    | Tag::Noframes
                    | Tag::Noscript
                    | Tag::Object
                    | Tag::Ol
                    | Tag::P
                    | Tag::Param
                    | Tag::Plaintext
                    | Tag::Pre
                    | Tag::Script
                    | Tag::Section
                    | Tag::Select
                    | Tag::Style
                    | Tag::Summary
                    | Tag::Table
                    | Tag::Tbody
                    | Tag::Td
                    | Tag::Textarea
                    | Tag::Tfoot
                    | Tag::Th
                    | Tag::Thead
                    | Tag::Title
                    | Tag::Tr
                    | Tag::Ul
                    | Tag::Wbr
                    | Tag::Xmp
            ),
            Namespace::MathMl => matches!(
                element.tag,
                Tag::Mi | Tag::Mo | Tag::Mn | Tag::Ms | Tag::Mtext | Tag::AnnotationXml
            ),
            Namespace::Svg => matches!(element.tag, Tag::Foreignobject | Tag::Desc),
        }
    }

    // -----------------------------------------------------------------
    // Table helpers.

    /// Acts as if `</table>` had been seen. Returns false (and leaves the
    /// stack alone) when no table is in table scope.
    fn close_table(&mut self) -> bool {
        if !self.has_an_element_in_table_scope(Tag::Table) {
            return false;
        }
        while let Some(node) = self.pop_current_node() {
            if self.node_tag_is(node, Tag::Table) {
                break;
            }
        }
        self.reset_insertion_mode_appropriately();
        true
    }

    /// Acts as if an end tag for the given cell had been seen.
    fn close_table_cell(&mut self, token: &Token, cell_tag: Tag, errors: &mut ErrorSink) -> bool {
        let mut result = true;
        self.generate_implied_end_tags(None);
        if !self
            .current_node()
            .is_some_and(|node| self.node_tag_is(node, cell_tag))
        {
            self.add_parse_error(token, errors);
            result = false;
        }
        loop {
            let node = self.pop_current_node().expect("cell is in table scope");
            if self.node_tag_is(node, cell_tag) {
                break;
            }
        }
        self.clear_active_formatting_elements();
        self.set_insertion_mode(InsertionMode::InRow);
        result
    }

    /// Decides whether a `<td>` or `<th>` is the cell to close.
    fn close_current_cell(&mut self, token: &Token, errors: &mut ErrorSink) -> bool {
        if self.has_an_element_in_table_scope(Tag::Td) {
            debug_assert!(!self.has_an_element_in_table_scope(Tag::Th));
            self.close_table_cell(token, Tag::Td, errors)
        } else {
            debug_assert!(self.has_an_element_in_table_scope(Tag::Th));
            self.close_table_cell(token, Tag::Th, errors)
        }
    }

    /// Acts as if `</select>` had been seen.
    fn close_current_select(&mut self) {
        loop {
            let node = self.pop_current_node().expect("select is on the stack");
            if self.node_tag_is(node, Tag::Select) {
                break;
            }
        }
        self.reset_insertion_mode_appropriately();
    }

    fn reset_insertion_mode_appropriately(&mut self) {
        for position in (0..self.open_elements.len()).rev() {
            let node = self.open_elements.get(position);
            let is_last = position == 0;
            let mode = match self.arena[node].tag() {
                Some(Tag::Select) => InsertionMode::InSelect,
                Some(Tag::Td) | Some(Tag::Th) => {
                    if is_last {
                        InsertionMode::InBody
                    } else {
                        InsertionMode::InCell
                    }
                }
                Some(Tag::Tr) => InsertionMode::InRow,
                Some(Tag::Tbody) | Some(Tag::Thead) | Some(Tag::Tfoot) => {
                    InsertionMode::InTableBody
                }
                Some(Tag::Caption) => InsertionMode::InCaption,
                Some(Tag::Colgroup) => InsertionMode::InColumnGroup,
                Some(Tag::Table) => InsertionMode::InTable,
                Some(Tag::Head) | Some(Tag::Body) => InsertionMode::InBody,
                Some(Tag::Frameset) => InsertionMode::InFrameset,
                Some(Tag::Html) => InsertionMode::BeforeHead,
                _ => {
                    if is_last {
                        InsertionMode::InBody
                    } else {
                        continue;
                    }
                }
            };
            self.set_insertion_mode(mode);
            return;
        }
        // is_last forces a mode on the bottom entry, so the loop cannot fall
        // through while the stack is non-empty.
        debug_assert!(self.open_elements.is_empty());
    }

    // -----------------------------------------------------------------
    // Attribute merging and the adoption agency.

    /// Folds a duplicate `<html>`/`<body>` start tag's attributes into the
    /// existing element; only names not already present are taken.
    fn merge_attributes(&mut self, token: &mut Token, node: NodeId) {
        let TokenKind::StartTag(data) = &mut token.kind else {
            unreachable!("merge_attributes takes start tags");
        };
        let incoming = std::mem::take(&mut data.attributes);
        let element = self.arena[node]
            .as_element_mut()
            .expect("merge target is an element");
        for attribute in incoming {
            if get_attribute(&element.attributes, &attribute.name).is_none() {
                element.attributes.push(attribute);
            }
        }
    }

    /// The adoption agency algorithm: untangles mis-nested formatting
    /// elements. Returns false when the caller should fall through to the
    /// "any other end tag" rules.
    fn adoption_agency_algorithm(
        &mut self,
        token: &Token,
        closing_tag: Tag,
        errors: &mut ErrorSink,
    ) -> bool {
        // Outer loop: at most eight passes.
        for _ in 0..8 {
            // Step 4: the formatting element is the nearest matching entry
            // above the last marker.
            let mut formatting_node = None;
            for entry in self.active_formatting.entries().iter().rev() {
                match entry {
                    FormattingEntry::Marker => break,
                    FormattingEntry::Element(node) => {
                        if self.node_tag_is(*node, closing_tag) {
                            formatting_node = Some(*node);
                            break;
                        }
                    }
                }
            }
            let Some(formatting_node) = formatting_node else {
                // Not an outright parse error; the "any other end tag" clause
                // takes over.
                return false;
            };

            let Some(formatting_node_in_open) = self.open_elements.position(formatting_node)
            else {
                self.active_formatting.remove(formatting_node);
                return false;
            };

            if !self.has_an_element_in_scope(
                self.arena[formatting_node]
                    .tag()
                    .expect("formatting entries are elements"),
            ) {
                self.add_parse_error(token, errors);
                return false;
            }
            if Some(formatting_node) != self.current_node() {
                self.add_parse_error(token, errors); // But continue onwards.
            }
            debug_assert!(!self.node_tag_is(formatting_node, Tag::Html));
            debug_assert!(!self.node_tag_is(formatting_node, Tag::Body));

            // Steps 5 & 6: the furthest block.
            let mut furthest_block = None;
            for index in formatting_node_in_open..self.open_elements.len() {
                let current = self.open_elements.get(index);
                if self.is_special_node(current) {
                    furthest_block = Some(current);
                    break;
                }
            }
            let Some(furthest_block) = furthest_block else {
                while self.current_node() != Some(formatting_node) {
                    self.pop_current_node();
                }
                self.pop_current_node();
                self.active_formatting.remove(formatting_node);
                return false;
            };
            debug_assert!(!self.node_tag_is(furthest_block, Tag::Html));

            // Step 7. Elements may have been reparented, so the common
            // ancestor comes from the stack, not from the parent pointer.
            let common_ancestor = self.open_elements.get(
                self.open_elements
                    .position(formatting_node)
                    .expect("formatting node still on the stack")
                    - 1,
            );

            // Step 8: the bookmark notes where the replacement entry goes.
            let mut bookmark = self
                .active_formatting
                .position_of(formatting_node)
                .expect("formatting node is in the list");

            // Step 9: walk up from the furthest block, cloning and
            // reparenting as we go. Inner loop: at most three passes.
            let mut node = furthest_block;
            let mut last_node = furthest_block;
            // Stored explicitly in case `node` is removed from the stack.
            let mut saved_node_index = self
                .open_elements
                .position(node)
                .expect("furthest block is on the stack");
            debug_assert!(saved_node_index > 0);
            for _ in 0..3 {
                // Step 9.4.
                let node_index = self
                    .open_elements
                    .position(node)
                    .unwrap_or(saved_node_index)
                    - 1;
                saved_node_index = node_index;
                debug_assert!(node_index < self.open_elements.len());
                node = self.open_elements.get(node_index);
                debug_assert!(self.arena[node].parent.is_some());
                // Step 9.5.
                if self.active_formatting.position_of(node).is_none() {
                    self.open_elements.remove_at(node_index);
                    continue;
                }
                // Step 9.6.
                if node == formatting_node {
                    break;
                }
                // Step 9.7.
                let formatting_index = self
                    .active_formatting
                    .position_of(node)
                    .expect("checked above");
                let clone = self.clone_node(node, ParseFlags::ADOPTION_AGENCY_CLONED);
                self.active_formatting.replace_at(formatting_index, clone);
                self.open_elements.replace_at(node_index, clone);
                node = clone;
                // Step 9.8.
                if last_node == furthest_block {
                    bookmark = formatting_index + 1;
                    debug_assert!(bookmark <= self.active_formatting.len());
                }
                // Step 9.9.
                self.arena[last_node]
                    .parse_flags
                    .insert(ParseFlags::ADOPTION_AGENCY_MOVED);
                self.remove_from_parent(last_node);
                self.append_node(node, last_node);
                // Step 9.10.
                last_node = node;
            }

            // Step 10.
            self.remove_from_parent(last_node);
            self.arena[last_node]
                .parse_flags
                .insert(ParseFlags::ADOPTION_AGENCY_MOVED);
            if self.node_tag_in(
                common_ancestor,
                &[Tag::Table, Tag::Tbody, Tag::Tfoot, Tag::Thead, Tag::Tr],
            ) {
                self.foster_parent_element(last_node);
            } else {
                self.append_node(common_ancestor, last_node);
            }

            // Step 11.
            let new_formatting_node =
                self.clone_node(formatting_node, ParseFlags::ADOPTION_AGENCY_CLONED);
            self.arena[formatting_node]
                .parse_flags
                .insert(ParseFlags::IMPLICIT_END_TAG);

            // Step 12: move the furthest block's children wholesale onto the
            // clone; their relative order (and indices) are unchanged, only
            // the parent pointers need resetting.
            let children = std::mem::take(
                &mut self.arena[furthest_block]
                    .as_element_mut()
                    .expect("furthest block is an element")
                    .children,
            );
            for child in &children {
                self.arena[*child].parent = Some(new_formatting_node);
            }
            self.arena[new_formatting_node]
                .as_element_mut()
                .expect("clone is an element")
                .children = children;

            // Step 13.
            self.append_node(furthest_block, new_formatting_node);

            // Step 14. Removing the old entry may shift the bookmark.
            let formatting_node_index = self
                .active_formatting
                .position_of(formatting_node)
                .expect("formatting node still in the list");
            if formatting_node_index < bookmark {
                bookmark -= 1;
            }
            self.active_formatting.remove_at(formatting_node_index);
            debug_assert!(bookmark <= self.active_formatting.len());
            self.active_formatting
                .insert_at(bookmark, FormattingEntry::Element(new_formatting_node));

            // Step 15.
            self.open_elements.remove(formatting_node);
            let insert_at = self
                .open_elements
                .position(furthest_block)
                .expect("furthest block is on the stack")
                + 1;
            self.open_elements.insert_at(insert_at, new_formatting_node);
        }
        true
    }

    // -----------------------------------------------------------------
    // Token dispatch.

    fn handle_token(
        &mut self,
        token: &mut Token,
        tokenizer: &mut Tokenizer<'a>,
        errors: &mut ErrorSink,
    ) -> bool {
        if self.ignore_next_linefeed && matches!(token.kind, TokenKind::Whitespace('\n')) {
            self.ignore_next_linefeed = false;
            return true;
        }
        // Reset in both paths: a non-whitespace token must not leave the flag
        // armed, and a second newline must not be swallowed.
        self.ignore_next_linefeed = false;

        if tag_is(token, END_TAG, Tag::Body) {
            self.closed_body_tag = true;
        }
        if tag_is(token, END_TAG, Tag::Html) {
            self.closed_html_tag = true;
        }

        let current_node = self.current_node();
        let use_html_rules = match current_node {
            None => true,
            Some(node) => {
                let element = self.arena[node]
                    .as_element()
                    .expect("open elements are elements");
                element.namespace == Namespace::Html
                    || (foreign::is_mathml_integration_point(&self.arena[node])
                        && (matches!(
                            token.kind,
                            TokenKind::Character(_) | TokenKind::Whitespace(_) | TokenKind::Null
                        ) || (token.token_type() == TokenType::StartTag
                            && !tag_in(token, START_TAG, &[Tag::Mglyph, Tag::Malignmark]))))
                    || (element.namespace == Namespace::MathMl
                        && element.tag == Tag::AnnotationXml
                        && tag_is(token, START_TAG, Tag::Svg))
                    || (foreign::is_html_integration_point(&self.arena[node])
                        && matches!(
                            token.kind,
                            TokenKind::StartTag(_)
                                | TokenKind::Character(_)
                                | TokenKind::Null
                                | TokenKind::Whitespace(_)
                        ))
                    || matches!(token.kind, TokenKind::Eof)
            }
        };
        if use_html_rules {
            self.handle_html_content(token, tokenizer, errors)
        } else {
            self.handle_in_foreign_content(token, tokenizer, errors)
        }
    }

    fn handle_html_content(
        &mut self,
        token: &mut Token,
        tokenizer: &mut Tokenizer<'a>,
        errors: &mut ErrorSink,
    ) -> bool {
        match self.insertion_mode {
            InsertionMode::Initial => self.handle_initial(token, tokenizer, errors),
            InsertionMode::BeforeHtml => self.handle_before_html(token, tokenizer, errors),
            InsertionMode::BeforeHead => self.handle_before_head(token, tokenizer, errors),
            InsertionMode::InHead => self.handle_in_head(token, tokenizer, errors),
            InsertionMode::InHeadNoscript => {
                self.handle_in_head_noscript(token, tokenizer, errors)
            }
            InsertionMode::AfterHead => self.handle_after_head(token, tokenizer, errors),
            InsertionMode::InBody => self.handle_in_body(token, tokenizer, errors),
            InsertionMode::Text => self.handle_text(token, tokenizer, errors),
            InsertionMode::InTable => self.handle_in_table(token, tokenizer, errors),
            InsertionMode::InTableText => self.handle_in_table_text(token, tokenizer, errors),
            InsertionMode::InCaption => self.handle_in_caption(token, tokenizer, errors),
            InsertionMode::InColumnGroup => self.handle_in_column_group(token, tokenizer, errors),
            InsertionMode::InTableBody => self.handle_in_table_body(token, tokenizer, errors),
            InsertionMode::InRow => self.handle_in_row(token, tokenizer, errors),
            InsertionMode::InCell => self.handle_in_cell(token, tokenizer, errors),
            InsertionMode::InSelect => self.handle_in_select(token, tokenizer, errors),
            InsertionMode::InSelectInTable => {
                self.handle_in_select_in_table(token, tokenizer, errors)
            }
            InsertionMode::InTemplate => self.handle_in_template(token, tokenizer, errors),
            InsertionMode::AfterBody => self.handle_after_body(token, tokenizer, errors),
            InsertionMode::InFrameset => self.handle_in_frameset(token, tokenizer, errors),
            InsertionMode::AfterFrameset => self.handle_after_frameset(token, tokenizer, errors),
            InsertionMode::AfterAfterBody => {
                self.handle_after_after_body(token, tokenizer, errors)
            }
            InsertionMode::AfterAfterFrameset => {
                self.handle_after_after_frameset(token, tokenizer, errors)
            }
        }
    }

    // -----------------------------------------------------------------
    // Insertion-mode handlers. One cohesive unit per mode, in spec order.

    fn handle_initial(
        &mut self,
        token: &mut Token,
        _tokenizer: &mut Tokenizer<'a>,
        errors: &mut ErrorSink,
    ) -> bool {
        match &token.kind {
            TokenKind::Whitespace(_) => true,
            TokenKind::Comment(_) => {
                self.append_comment_node(self.document, token);
                true
            }
            TokenKind::Doctype(doctype) => {
                let quirks_mode = doctype::compute_quirks_mode(doctype);
                let conforming = doctype::doctype_is_conforming(doctype);
                let document = self.arena[self.document]
                    .as_document_mut()
                    .expect("document node");
                document.has_doctype = true;
                document.name = doctype.name.clone();
                document.public_identifier = doctype.public_identifier.clone();
                document.system_identifier = doctype.system_identifier.clone();
                document.quirks_mode = quirks_mode;
                self.set_insertion_mode(InsertionMode::BeforeHtml);
                if !conforming {
                    self.add_parse_error(token, errors);
                    return false;
                }
                true
            }
            _ => {
                self.add_parse_error(token, errors);
                self.arena[self.document]
                    .as_document_mut()
                    .expect("document node")
                    .quirks_mode = QuirksMode::Quirks;
                self.set_insertion_mode(InsertionMode::BeforeHtml);
                self.reprocess_current_token = true;
                true
            }
        }
    }

    fn handle_before_html(
        &mut self,
        token: &mut Token,
        _tokenizer: &mut Tokenizer<'a>,
        errors: &mut ErrorSink,
    ) -> bool {
        match &token.kind {
            TokenKind::Doctype(_) => {
                self.add_parse_error(token, errors);
                false
            }
            TokenKind::Comment(_) => {
                self.append_comment_node(self.document, token);
                true
            }
            TokenKind::Whitespace(_) => true,
            _ if tag_is(token, START_TAG, Tag::Html) => {
                let html_node = self.insert_element_from_token(token);
                self.root = Some(html_node);
                self.set_insertion_mode(InsertionMode::BeforeHead);
                true
            }
            TokenKind::EndTag(tag)
                if !matches!(tag, Tag::Head | Tag::Body | Tag::Html | Tag::Br) =>
            {
                self.add_parse_error(token, errors);
                false
            }
            _ => {
                let html_node = self.insert_element_of_tag_type(Tag::Html, ParseFlags::IMPLIED);
                self.root = Some(html_node);
                self.set_insertion_mode(InsertionMode::BeforeHead);
                self.reprocess_current_token = true;
                true
            }
        }
    }

    fn handle_before_head(
        &mut self,
        token: &mut Token,
        _tokenizer: &mut Tokenizer<'a>,
        errors: &mut ErrorSink,
    ) -> bool {
        match &token.kind {
            TokenKind::Doctype(_) => {
                self.add_parse_error(token, errors);
                false
            }
            TokenKind::Comment(_) => {
                let parent = self.current_node().expect("html is open");
                self.append_comment_node(parent, token);
                true
            }
            TokenKind::Whitespace(_) => true,
            _ if tag_is(token, START_TAG, Tag::Head) => {
                let node = self.insert_element_from_token(token);
                self.set_insertion_mode(InsertionMode::InHead);
                self.head_element = Some(node);
                true
            }
            TokenKind::EndTag(tag)
                if !matches!(tag, Tag::Head | Tag::Body | Tag::Html | Tag::Br) =>
            {
                self.add_parse_error(token, errors);
                false
            }
            _ => {
                let node = self.insert_element_of_tag_type(Tag::Head, ParseFlags::IMPLIED);
                self.set_insertion_mode(InsertionMode::InHead);
                self.head_element = Some(node);
                self.reprocess_current_token = true;
                true
            }
        }
    }

    fn handle_in_head(
        &mut self,
        token: &mut Token,
        tokenizer: &mut Tokenizer<'a>,
        errors: &mut ErrorSink,
    ) -> bool {
        match &token.kind {
            TokenKind::Whitespace(_) => {
                self.insert_text_token(token);
                true
            }
            TokenKind::Doctype(_) => {
                self.add_parse_error(token, errors);
                false
            }
            TokenKind::Comment(_) => {
                let parent = self.current_node().expect("head is open");
                self.append_comment_node(parent, token);
                true
            }
            _ if tag_is(token, START_TAG, Tag::Html) => {
                self.handle_in_body(token, tokenizer, errors)
            }
            _ if tag_in(
                token,
                START_TAG,
                &[Tag::Base, Tag::Basefont, Tag::Bgsound, Tag::Menuitem, Tag::Link],
            ) =>
            {
                self.insert_element_from_token(token);
                self.pop_current_node();
                self.acknowledge_self_closing_tag();
                true
            }
            _ if tag_is(token, START_TAG, Tag::Meta) => {
                // This parser is UTF-8 only, so the charset clause of the spec
                // does not apply; clients re-encode before parsing.
                self.insert_element_from_token(token);
                self.pop_current_node();
                self.acknowledge_self_closing_tag();
                true
            }
            _ if tag_is(token, START_TAG, Tag::Title) => {
                self.run_generic_parsing_algorithm(token, tokenizer, TokenizerState::Rcdata);
                true
            }
            _ if tag_in(token, START_TAG, &[Tag::Noframes, Tag::Style]) => {
                self.run_generic_parsing_algorithm(token, tokenizer, TokenizerState::Rawtext);
                true
            }
            _ if tag_is(token, START_TAG, Tag::Noscript) => {
                self.insert_element_from_token(token);
                self.set_insertion_mode(InsertionMode::InHeadNoscript);
                true
            }
            _ if tag_is(token, START_TAG, Tag::Script) => {
                self.run_generic_parsing_algorithm(token, tokenizer, TokenizerState::ScriptData);
                true
            }
            _ if tag_is(token, END_TAG, Tag::Head) => {
                let head = self.pop_current_node();
                debug_assert!(head.is_some_and(|node| self.node_tag_is(node, Tag::Head)));
                self.set_insertion_mode(InsertionMode::AfterHead);
                true
            }
            _ if tag_is(token, START_TAG, Tag::Head) => {
                self.add_parse_error(token, errors);
                false
            }
            TokenKind::EndTag(tag) if !matches!(tag, Tag::Body | Tag::Html | Tag::Br) => {
                self.add_parse_error(token, errors);
                false
            }
            _ => {
                let head = self.pop_current_node();
                debug_assert!(head.is_some_and(|node| self.node_tag_is(node, Tag::Head)));
                self.set_insertion_mode(InsertionMode::AfterHead);
                self.reprocess_current_token = true;
                true
            }
        }
    }

    fn handle_in_head_noscript(
        &mut self,
        token: &mut Token,
        tokenizer: &mut Tokenizer<'a>,
        errors: &mut ErrorSink,
    ) -> bool {
        match &token.kind {
            TokenKind::Doctype(_) => {
                self.add_parse_error(token, errors);
                false
            }
            _ if tag_is(token, START_TAG, Tag::Html) => {
                self.handle_in_body(token, tokenizer, errors)
            }
            _ if tag_is(token, END_TAG, Tag::Noscript) => {
                let node = self.pop_current_node();
                debug_assert!(node.is_some_and(|node| self.node_tag_is(node, Tag::Noscript)));
                self.set_insertion_mode(InsertionMode::InHead);
                true
            }
            TokenKind::Whitespace(_) | TokenKind::Comment(_) => {
                self.handle_in_head(token, tokenizer, errors)
            }
            _ if tag_in(
                token,
                START_TAG,
                &[Tag::Basefont, Tag::Bgsound, Tag::Link, Tag::Meta, Tag::Noframes, Tag::Style],
            ) =>
            {
                self.handle_in_head(token, tokenizer, errors)
            }
            _ if tag_in(token, START_TAG, &[Tag::Head, Tag::Noscript]) => {
                self.add_parse_error(token, errors);
                false
            }
            TokenKind::EndTag(tag) if !matches!(tag, Tag::Br) => {
                self.add_parse_error(token, errors);
                false
            }
            _ => {
                self.add_parse_error(token, errors);
                let node = self.pop_current_node();
                debug_assert!(node.is_some_and(|node| self.node_tag_is(node, Tag::Noscript)));
                self.set_insertion_mode(InsertionMode::InHead);
                self.reprocess_current_token = true;
                false
            }
        }
    }

    fn handle_after_head(
        &mut self,
        token: &mut Token,
        tokenizer: &mut Tokenizer<'a>,
        errors: &mut ErrorSink,
    ) -> bool {
        match &token.kind {
            TokenKind::Whitespace(_) => {
                self.insert_text_token(token);
                true
            }
            TokenKind::Doctype(_) => {
                self.add_parse_error(token, errors);
                false
            }
            TokenKind::Comment(_) => {
                let parent = self.current_node().expect("html is open");
                self.append_comment_node(parent, token);
                true
            }
            _ if tag_is(token, START_TAG, Tag::Html) => {
                self.handle_in_body(token, tokenizer, errors)
            }
            _ if tag_is(token, START_TAG, Tag::Body) => {
                self.insert_element_from_token(token);
                self.frameset_ok = false;
                self.set_insertion_mode(InsertionMode::InBody);
                true
            }
            _ if tag_is(token, START_TAG, Tag::Frameset) => {
                self.insert_element_from_token(token);
                self.set_insertion_mode(InsertionMode::InFrameset);
                true
            }
            _ if tag_in(
                token,
                START_TAG,
                &[
                    Tag::Base,
                    Tag::Basefont,
                    Tag::Bgsound,
                    Tag::Link,
                    Tag::Meta,
                    Tag::Noframes,
                    Tag::Script,
                    Tag::Style,
                    Tag::Title,
                ],
            ) =>
            {
                self.add_parse_error(token, errors);
                let head = self.head_element.expect("head was created before after-head");
                // Pending characters belong to the root, not to the head
                // we're about to re-open.
                self.maybe_flush_text_node_buffer();
                self.open_elements.push(head);
                let result = self.handle_in_head(token, tokenizer, errors);
                self.open_elements.remove(head);
                result
            }
            _ if tag_is(token, START_TAG, Tag::Head) => {
                self.add_parse_error(token, errors);
                false
            }
            TokenKind::EndTag(tag) if !matches!(tag, Tag::Body | Tag::Html | Tag::Br) => {
                self.add_parse_error(token, errors);
                false
            }
            _ => {
                self.insert_element_of_tag_type(Tag::Body, ParseFlags::IMPLIED);
                self.set_insertion_mode(InsertionMode::InBody);
                self.reprocess_current_token = true;
                true
            }
        }
    }

    fn handle_in_body(
        &mut self,
        token: &mut Token,
        tokenizer: &mut Tokenizer<'a>,
        errors: &mut ErrorSink,
    ) -> bool {
        debug_assert!(!self.open_elements.is_empty());
        match &token.kind {
            TokenKind::Null => {
                self.add_parse_error(token, errors);
                false
            }
            TokenKind::Whitespace(_) => {
                self.reconstruct_active_formatting_elements();
                self.insert_text_token(token);
                true
            }
            TokenKind::Character(_) | TokenKind::Cdata(_) => {
                self.reconstruct_active_formatting_elements();
                self.insert_text_token(token);
                self.set_frameset_not_ok();
                true
            }
            TokenKind::Comment(_) => {
                let parent = self.current_node().expect("body is open");
                self.append_comment_node(parent, token);
                true
            }
            TokenKind::Doctype(_) => {
                self.add_parse_error(token, errors);
                false
            }
            _ if tag_is(token, START_TAG, Tag::Html) => {
                self.add_parse_error(token, errors);
                let root = self.root.expect("root exists in body");
                self.merge_attributes(token, root);
                false
            }
            _ if tag_in(
                token,
                START_TAG,
                &[
                    Tag::Base,
                    Tag::Basefont,
                    Tag::Bgsound,
                    Tag::Menuitem,
                    Tag::Link,
                    Tag::Meta,
                    Tag::Noframes,
                    Tag::Script,
                    Tag::Style,
                    Tag::Title,
                ],
            ) =>
            {
                self.handle_in_head(token, tokenizer, errors)
            }
            _ if tag_is(token, START_TAG, Tag::Body) => {
                self.add_parse_error(token, errors);
                if self.open_elements.len() < 2
                    || !self.node_tag_is(self.open_elements.get(1), Tag::Body)
                {
                    return false;
                }
                self.frameset_ok = false;
                let body = self.open_elements.get(1);
                self.merge_attributes(token, body);
                false
            }
            _ if tag_is(token, START_TAG, Tag::Frameset) => {
                self.add_parse_error(token, errors);
                if self.open_elements.len() < 2
                    || !self.node_tag_is(self.open_elements.get(1), Tag::Body)
                    || !self.frameset_ok
                {
                    return false;
                }
                // Replace the body wholesale with the frameset; the detached
                // body subtree stays in the arena, unreachable from the
                // document.
                let body_node = self.open_elements.get(1);
                loop {
                    let node = self.pop_current_node();
                    if node == Some(body_node) || node.is_none() {
                        break;
                    }
                }
                self.remove_from_parent(body_node);
                self.insert_element_from_token(token);
                self.set_insertion_mode(InsertionMode::InFrameset);
                true
            }
            TokenKind::Eof => {
                for index in 0..self.open_elements.len() {
                    let node = self.open_elements.get(index);
                    if !self.node_tag_in(
                        node,
                        &[
                            Tag::Dd,
                            Tag::Dt,
                            Tag::Li,
                            Tag::P,
                            Tag::Tbody,
                            Tag::Td,
                            Tag::Tfoot,
                            Tag::Th,
                            Tag::Thead,
                            Tag::Tr,
                            Tag::Body,
                            Tag::Html,
                        ],
                    ) {
                        self.add_parse_error(token, errors);
                        return false;
                    }
                }
                true
            }
            _ if tag_in(token, END_TAG, &[Tag::Body, Tag::Html]) => {
                if !self.has_an_element_in_scope(Tag::Body) {
                    self.add_parse_error(token, errors);
                    return false;
                }
                let mut success = true;
                for index in 0..self.open_elements.len() {
                    let node = self.open_elements.get(index);
                    if !self.node_tag_in(
                        node,
                        &[
                            Tag::Dd,
                            Tag::Dt,
                            Tag::Li,
                            Tag::Optgroup,
                            Tag::Option,
                            Tag::P,
                            Tag::Rp,
                            Tag::Rt,
                            Tag::Tbody,
                            Tag::Td,
                            Tag::Tfoot,
                            Tag::Th,
                            Tag::Thead,
                            Tag::Tr,
                            Tag::Body,
                            Tag::Html,
                        ],
                    ) {
                        self.add_parse_error(token, errors);
                        success = false;
                        break;
                    }
                }
                self.set_insertion_mode(InsertionMode::AfterBody);
                if tag_is(token, END_TAG, Tag::Html) {
                    self.reprocess_current_token = true;
                } else {
                    let body = self.open_elements.get(1);
                    debug_assert!(self.node_tag_is(body, Tag::Body));
                    self.record_end_of_element(body);
                }
                success
            }
            _ if tag_in(
                token,
                START_TAG,
                &[
                    Tag::Address,
                    Tag::Article,
                    Tag::Aside,
                    Tag::Blockquote,
                    Tag::Center,
                    Tag::Details,
                    Tag::Dir,
                    Tag::Div,
                    Tag::Dl,
                    Tag::Fieldset,
                    Tag::Figcaption,
                    Tag::Figure,
                    Tag::Footer,
                    Tag::Header,
                    Tag::Hgroup,
                    Tag::Menu,
                    Tag::Nav,
                    Tag::Ol,
                    Tag::P,
                    Tag::Section,
                    Tag::Summary,
                    Tag::Ul,
                ],
            ) =>
            {
                let result = self.maybe_implicitly_close_p_tag(token, errors);
                self.insert_element_from_token(token);
                result
            }
            _ if tag_in(
                token,
                START_TAG,
                &[Tag::H1, Tag::H2, Tag::H3, Tag::H4, Tag::H5, Tag::H6],
            ) =>
            {
                let mut result = self.maybe_implicitly_close_p_tag(token, errors);
                if self.current_node().is_some_and(|node| {
                    self.node_tag_in(
                        node,
                        &[Tag::H1, Tag::H2, Tag::H3, Tag::H4, Tag::H5, Tag::H6],
                    )
                }) {
                    self.add_parse_error(token, errors);
                    self.pop_current_node();
                    result = false;
                }
                self.insert_element_from_token(token);
                result
            }
            _ if tag_in(token, START_TAG, &[Tag::Pre, Tag::Listing]) => {
                let result = self.maybe_implicitly_close_p_tag(token, errors);
                self.insert_element_from_token(token);
                self.ignore_next_linefeed = true;
                self.frameset_ok = false;
                result
            }
            _ if tag_is(token, START_TAG, Tag::Form) => {
                if self.form_element.is_some() {
                    self.add_parse_error(token, errors);
                    return false;
                }
                let result = self.maybe_implicitly_close_p_tag(token, errors);
                self.form_element = Some(self.insert_element_from_token(token));
                result
            }
            _ if tag_is(token, START_TAG, Tag::Li) => {
                self.maybe_implicitly_close_list_tag(token, true, errors);
                let result = self.maybe_implicitly_close_p_tag(token, errors);
                self.insert_element_from_token(token);
                result
            }
            _ if tag_in(token, START_TAG, &[Tag::Dd, Tag::Dt]) => {
                self.maybe_implicitly_close_list_tag(token, false, errors);
                let result = self.maybe_implicitly_close_p_tag(token, errors);
                self.insert_element_from_token(token);
                result
            }
            _ if tag_is(token, START_TAG, Tag::Plaintext) => {
                let result = self.maybe_implicitly_close_p_tag(token, errors);
                self.insert_element_from_token(token);
                tokenizer.set_state(TokenizerState::Plaintext);
                result
            }
            _ if tag_is(token, START_TAG, Tag::Button) => {
                if self.has_an_element_in_scope(Tag::Button) {
                    self.add_parse_error(token, errors);
                    self.implicitly_close_tags(token, Tag::Button, errors);
                    self.reprocess_current_token = true;
                    return false;
                }
                self.reconstruct_active_formatting_elements();
                self.insert_element_from_token(token);
                self.frameset_ok = false;
                true
            }
            _ if tag_in(
                token,
                END_TAG,
                &[
                    Tag::Address,
                    Tag::Article,
                    Tag::Aside,
                    Tag::Blockquote,
                    Tag::Button,
                    Tag::Center,
                    Tag::Details,
                    Tag::Dir,
                    Tag::Div,
                    Tag::Dl,
                    Tag::Fieldset,
                    Tag::Figcaption,
                    Tag::Figure,
                    Tag::Footer,
                    Tag::Header,
                    Tag::Hgroup,
                    Tag::Listing,
                    Tag::Menu,
                    Tag::Nav,
                    Tag::Ol,
                    Tag::Pre,
                    Tag::Section,
                    Tag::Summary,
                    Tag::Ul,
                ],
            ) =>
            {
                let tag = token.end_tag().expect("end tag branch");
                if !self.has_an_element_in_scope(tag) {
                    self.add_parse_error(token, errors);
                    return false;
                }
                self.implicitly_close_tags(token, tag, errors);
                true
            }
            _ if tag_is(token, END_TAG, Tag::Form) => {
                let mut result = true;
                let node = self.form_element.take();
                let Some(node) = node.filter(|node| self.has_node_in_scope(*node)) else {
                    self.add_parse_error(token, errors);
                    return false;
                };
                // Unlike implicitly_close_tags, only the <form> element itself
                // is removed; anything above it stays open.
                self.generate_implied_end_tags(None);
                if self.current_node() != Some(node) {
                    self.add_parse_error(token, errors);
                    result = false;
                }
                self.open_elements.remove(node);
                result
            }
            _ if tag_is(token, END_TAG, Tag::P) => {
                if !self.has_an_element_in_button_scope(Tag::P) {
                    self.add_parse_error(token, errors);
                    self.reconstruct_active_formatting_elements();
                    self.insert_element_of_tag_type(Tag::P, ParseFlags::CONVERTED_FROM_END_TAG);
                    self.reprocess_current_token = true;
                    return false;
                }
                self.implicitly_close_tags(token, Tag::P, errors)
            }
            _ if tag_is(token, END_TAG, Tag::Li) => {
                if !self.has_an_element_in_list_scope(Tag::Li) {
                    self.add_parse_error(token, errors);
                    return false;
                }
                self.implicitly_close_tags(token, Tag::Li, errors)
            }
            _ if tag_in(token, END_TAG, &[Tag::Dd, Tag::Dt]) => {
                let tag = token.end_tag().expect("end tag branch");
                if !self.has_an_element_in_scope(tag) {
                    self.add_parse_error(token, errors);
                    return false;
                }
                self.implicitly_close_tags(token, tag, errors)
            }
            _ if tag_in(
                token,
                END_TAG,
                &[Tag::H1, Tag::H2, Tag::H3, Tag::H4, Tag::H5, Tag::H6],
            ) =>
            {
                const HEADINGS: &[Tag] = &[Tag::H1, Tag::H2, Tag::H3, Tag::H4, Tag::H5, Tag::H6];
                if !self
                    .open_elements
                    .has_any_tag_in_scope(&self.arena, HEADINGS, ScopeKind::Default)
                {
                    // No heading open at all; ignore the token entirely.
                    self.add_parse_error(token, errors);
                    return false;
                }
                self.generate_implied_end_tags(None);
                let success = self
                    .current_node()
                    .is_some_and(|node| self.arena[node].tag() == token.end_tag());
                if !success {
                    // Children of the heading are still open; they get closed
                    // below with a parse error.
                    self.add_parse_error(token, errors);
                }
                loop {
                    let node = self.pop_current_node().expect("heading is in scope");
                    if self.node_tag_in(node, HEADINGS) {
                        break;
                    }
                }
                success
            }
            _ if tag_is(token, START_TAG, Tag::A) => {
                let mut success = true;
                if self.active_formatting.last_anchor_index(&self.arena).is_some() {
                    self.add_parse_error(token, errors);
                    self.adoption_agency_algorithm(token, Tag::A, errors);
                    // The adoption agency usually removes the old anchor from
                    // the formatting list, but not always; finish the job.
                    if let Some(index) = self.active_formatting.last_anchor_index(&self.arena) {
                        let entry = self.active_formatting.remove_at(index);
                        if let Some(node) = entry.node() {
                            self.open_elements.remove(node);
                        }
                    }
                    success = false;
                }
                self.reconstruct_active_formatting_elements();
                let element = self.insert_element_from_token(token);
                self.add_formatting_element(element);
                success
            }
            _ if tag_in(
                token,
                START_TAG,
                &[
                    Tag::B,
                    Tag::Big,
                    Tag::Code,
                    Tag::Em,
                    Tag::Font,
                    Tag::I,
                    Tag::S,
                    Tag::Small,
                    Tag::Strike,
                    Tag::Strong,
                    Tag::Tt,
                    Tag::U,
                ],
            ) =>
            {
                self.reconstruct_active_formatting_elements();
                let element = self.insert_element_from_token(token);
                self.add_formatting_element(element);
                true
            }
            _ if tag_is(token, START_TAG, Tag::Nobr) => {
                let mut result = true;
                self.reconstruct_active_formatting_elements();
                if self.has_an_element_in_scope(Tag::Nobr) {
                    result = false;
                    self.add_parse_error(token, errors);
                    self.adoption_agency_algorithm(token, Tag::Nobr, errors);
                    self.reconstruct_active_formatting_elements();
                }
                let element = self.insert_element_from_token(token);
                self.add_formatting_element(element);
                result
            }
            _ if tag_in(
                token,
                END_TAG,
                &[
                    Tag::A,
                    Tag::B,
                    Tag::Big,
                    Tag::Code,
                    Tag::Em,
                    Tag::Font,
                    Tag::I,
                    Tag::Nobr,
                    Tag::S,
                    Tag::Small,
                    Tag::Strike,
                    Tag::Strong,
                    Tag::Tt,
                    Tag::U,
                ],
            ) =>
            {
                let tag = token.end_tag().expect("end tag branch");
                self.adoption_agency_algorithm(token, tag, errors)
            }
            _ if tag_in(token, START_TAG, &[Tag::Applet, Tag::Marquee, Tag::Object]) => {
                self.reconstruct_active_formatting_elements();
                self.insert_element_from_token(token);
                self.active_formatting.push_marker();
                self.set_frameset_not_ok();
                true
            }
            _ if tag_in(token, END_TAG, &[Tag::Applet, Tag::Marquee, Tag::Object]) => {
                let tag = token.end_tag().expect("end tag branch");
                if !self.has_an_element_in_table_scope(tag) {
                    self.add_parse_error(token, errors);
                    return false;
                }
                self.implicitly_close_tags(token, tag, errors);
                self.clear_active_formatting_elements();
                true
            }
            _ if tag_is(token, START_TAG, Tag::Table) => {
                let quirks = self.arena[self.document]
                    .as_document()
                    .expect("document node")
                    .quirks_mode;
                if quirks != QuirksMode::Quirks {
                    self.maybe_implicitly_close_p_tag(token, errors);
                }
                self.insert_element_from_token(token);
                self.set_frameset_not_ok();
                self.set_insertion_mode(InsertionMode::InTable);
                true
            }
            _ if tag_in(
                token,
                START_TAG,
                &[
                    Tag::Area,
                    Tag::Br,
                    Tag::Embed,
                    Tag::Img,
                    Tag::Image,
                    Tag::Keygen,
                    Tag::Wbr,
                ],
            ) =>
            {
                let mut success = true;
                let was_image = tag_is(token, START_TAG, Tag::Image);
                if was_image {
                    success = false;
                    self.add_parse_error(token, errors);
                    if let TokenKind::StartTag(data) = &mut token.kind {
                        data.tag = Tag::Img;
                    }
                }
                self.reconstruct_active_formatting_elements();
                let node = self.insert_element_from_token(token);
                if was_image {
                    self.arena[node].parse_flags.insert(ParseFlags::FROM_IMAGE);
                }
                self.pop_current_node();
                self.acknowledge_self_closing_tag();
                self.set_frameset_not_ok();
                success
            }
            _ if tag_is(token, START_TAG, Tag::Input) => {
                let is_hidden = match &token.kind {
                    TokenKind::StartTag(data) => {
                        attribute_matches(&data.attributes, "type", "hidden")
                    }
                    _ => false,
                };
                if !is_hidden {
                    // Checked before insertion takes the attributes away.
                    self.set_frameset_not_ok();
                }
                self.reconstruct_active_formatting_elements();
                self.insert_element_from_token(token);
                self.pop_current_node();
                self.acknowledge_self_closing_tag();
                true
            }
            _ if tag_in(token, START_TAG, &[Tag::Param, Tag::Source, Tag::Track]) => {
                self.insert_element_from_token(token);
                self.pop_current_node();
                self.acknowledge_self_closing_tag();
                true
            }
            _ if tag_is(token, START_TAG, Tag::Hr) => {
                let result = self.maybe_implicitly_close_p_tag(token, errors);
                self.insert_element_from_token(token);
                self.pop_current_node();
                self.acknowledge_self_closing_tag();
                self.set_frameset_not_ok();
                result
            }
            _ if tag_is(token, START_TAG, Tag::Isindex) => {
                self.handle_isindex(token, errors)
            }
            _ if tag_is(token, START_TAG, Tag::Textarea) => {
                self.run_generic_parsing_algorithm(token, tokenizer, TokenizerState::Rcdata);
                self.ignore_next_linefeed = true;
                self.set_frameset_not_ok();
                true
            }
            _ if tag_is(token, START_TAG, Tag::Xmp) => {
                let result = self.maybe_implicitly_close_p_tag(token, errors);
                self.reconstruct_active_formatting_elements();
                self.set_frameset_not_ok();
                self.run_generic_parsing_algorithm(token, tokenizer, TokenizerState::Rawtext);
                result
            }
            _ if tag_is(token, START_TAG, Tag::Iframe) => {
                self.set_frameset_not_ok();
                self.run_generic_parsing_algorithm(token, tokenizer, TokenizerState::Rawtext);
                true
            }
            _ if tag_is(token, START_TAG, Tag::Noembed) => {
                self.run_generic_parsing_algorithm(token, tokenizer, TokenizerState::Rawtext);
                true
            }
            _ if tag_is(token, START_TAG, Tag::Select) => {
                self.reconstruct_active_formatting_elements();
                self.insert_element_from_token(token);
                self.set_frameset_not_ok();
                let mode = self.insertion_mode;
                if matches!(
                    mode,
                    InsertionMode::InTable
                        | InsertionMode::InCaption
                        | InsertionMode::InTableBody
                        | InsertionMode::InRow
                        | InsertionMode::InCell
                ) {
                    self.set_insertion_mode(InsertionMode::InSelectInTable);
                } else {
                    self.set_insertion_mode(InsertionMode::InSelect);
                }
                true
            }
            _ if tag_in(token, START_TAG, &[Tag::Option, Tag::Optgroup]) => {
                if self
                    .current_node()
                    .is_some_and(|node| self.node_tag_is(node, Tag::Option))
                {
                    self.pop_current_node();
                }
                self.reconstruct_active_formatting_elements();
                self.insert_element_from_token(token);
                true
            }
            _ if tag_in(token, START_TAG, &[Tag::Rp, Tag::Rt]) => {
                let mut success = true;
                if self.has_an_element_in_scope(Tag::Ruby) {
                    self.generate_implied_end_tags(None);
                }
                if !self
                    .current_node()
                    .is_some_and(|node| self.node_tag_is(node, Tag::Ruby))
                {
                    self.add_parse_error(token, errors);
                    success = false;
                }
                self.insert_element_from_token(token);
                success
            }
            _ if tag_is(token, END_TAG, Tag::Br) => {
                self.add_parse_error(token, errors);
                self.reconstruct_active_formatting_elements();
                self.insert_element_of_tag_type(Tag::Br, ParseFlags::CONVERTED_FROM_END_TAG);
                self.pop_current_node();
                false
            }
            _ if tag_is(token, START_TAG, Tag::Math) => {
                self.reconstruct_active_formatting_elements();
                if let TokenKind::StartTag(data) = &mut token.kind {
                    foreign::adjust_mathml_attributes(data);
                    foreign::adjust_foreign_attributes(data);
                }
                let is_self_closing = matches!(&token.kind, TokenKind::StartTag(data) if data.is_self_closing);
                self.insert_foreign_element(token, Namespace::MathMl, errors);
                if is_self_closing {
                    self.pop_current_node();
                    self.acknowledge_self_closing_tag();
                }
                true
            }
            _ if tag_is(token, START_TAG, Tag::Svg) => {
                self.reconstruct_active_formatting_elements();
                if let TokenKind::StartTag(data) = &mut token.kind {
                    foreign::adjust_svg_attributes(data);
                    foreign::adjust_foreign_attributes(data);
                }
                let is_self_closing = matches!(&token.kind, TokenKind::StartTag(data) if data.is_self_closing);
                self.insert_foreign_element(token, Namespace::Svg, errors);
                if is_self_closing {
                    self.pop_current_node();
                    self.acknowledge_self_closing_tag();
                }
                true
            }
            _ if tag_in(
                token,
                START_TAG,
                &[
                    Tag::Caption,
                    Tag::Col,
                    Tag::Colgroup,
                    Tag::Frame,
                    Tag::Head,
                    Tag::Tbody,
                    Tag::Td,
                    Tag::Tfoot,
                    Tag::Th,
                    Tag::Thead,
                    Tag::Tr,
                ],
            ) =>
            {
                self.add_parse_error(token, errors);
                false
            }
            TokenKind::StartTag(_) => {
                self.reconstruct_active_formatting_elements();
                self.insert_element_from_token(token);
                true
            }
            TokenKind::EndTag(end_tag) => {
                let end_tag = *end_tag;
                debug_assert!(!self.open_elements.is_empty());
                debug_assert!(self.node_tag_is(self.open_elements.get(0), Tag::Html));
                // Walk up the stack: a matching HTML element closes everything
                // up to and including it; a special element means the token is
                // ignored with a parse error.
                for index in (0..self.open_elements.len()).rev() {
                    let node = self.open_elements.get(index);
                    let element = self.arena[node]
                        .as_element()
                        .expect("open elements are elements");
                    if element.namespace == Namespace::Html && element.tag == end_tag {
                        self.generate_implied_end_tags(Some(end_tag));
                        while self.pop_current_node() != Some(node) {}
                        return true;
                    }
                    if self.is_special_node(node) {
                        self.add_parse_error(token, errors);
                        return false;
                    }
                }
                // <html> is special, so the loop always terminates inside.
                unreachable!("open-element walk always hits <html>");
            }
        }
    }

    /// The `<isindex>` rewrite: a form with a labelled text input between two
    /// rules, built from the token's attributes.
    fn handle_isindex(&mut self, token: &mut Token, errors: &mut ErrorSink) -> bool {
        self.add_parse_error(token, errors);
        if self.form_element.is_some() {
            return false;
        }
        self.acknowledge_self_closing_tag();
        self.maybe_implicitly_close_p_tag(token, errors);
        self.set_frameset_not_ok();

        let TokenKind::StartTag(data) = &mut token.kind else {
            unreachable!("isindex is a start tag");
        };
        let mut prompt_attr = None;
        let mut action_attr = None;
        let mut input_attributes = Vec::new();
        for attribute in std::mem::take(&mut data.attributes) {
            match attribute.name.as_str() {
                "prompt" if prompt_attr.is_none() => prompt_attr = Some(attribute),
                "action" if action_attr.is_none() => action_attr = Some(attribute),
                // The isindex-named attribute is dropped entirely.
                "isindex" => {}
                _ => input_attributes.push(attribute),
            }
        }

        let form = self.insert_element_of_tag_type(Tag::Form, ParseFlags::FROM_ISINDEX);
        if let Some(action) = action_attr {
            self.arena[form]
                .as_element_mut()
                .expect("form is an element")
                .attributes
                .push(action);
        }
        self.insert_element_of_tag_type(Tag::Hr, ParseFlags::FROM_ISINDEX);
        self.pop_current_node(); // <hr>

        self.insert_element_of_tag_type(Tag::Label, ParseFlags::FROM_ISINDEX);
        self.text_node.start_original_text = token.original_text.start;
        self.text_node.start_position = token.position;
        self.text_node.kind = TextKind::Text;
        self.text_node.buffer.clear();
        match &prompt_attr {
            Some(prompt) => self.text_node.buffer.push_str(&prompt.value),
            None => self
                .text_node
                .buffer
                .push_str("This is a searchable index. Enter search keywords: "),
        }

        let input = self.insert_element_of_tag_type(Tag::Input, ParseFlags::FROM_ISINDEX);
        input_attributes.push(Attribute {
            namespace: AttributeNamespace::None,
            name: "name".to_string(),
            value: "isindex".to_string(),
            original_name: Span::EMPTY,
            original_value: Span::EMPTY,
            name_start: SourcePosition::EMPTY,
            name_end: SourcePosition::EMPTY,
            value_start: SourcePosition::EMPTY,
            value_end: SourcePosition::EMPTY,
        });
        self.arena[input]
            .as_element_mut()
            .expect("input is an element")
            .attributes = input_attributes;

        self.pop_current_node(); // <input>
        self.pop_current_node(); // <label>
        self.insert_element_of_tag_type(Tag::Hr, ParseFlags::FROM_ISINDEX);
        self.pop_current_node(); // <hr>
        self.pop_current_node(); // <form>
        false
    }

    fn handle_text(
        &mut self,
        token: &mut Token,
        _tokenizer: &mut Tokenizer<'a>,
        errors: &mut ErrorSink,
    ) -> bool {
        match &token.kind {
            TokenKind::Character(_) | TokenKind::Whitespace(_) | TokenKind::Cdata(_) => {
                self.insert_text_token(token);
            }
            _ => {
                // Script handling is deliberately bare-bones: no parser-pause
                // flag, no re-entrant tokenizer. The script body is simply a
                // text child of the <script> element.
                if matches!(token.kind, TokenKind::Eof) {
                    self.add_parse_error(token, errors);
                    self.reprocess_current_token = true;
                }
                self.pop_current_node();
                self.set_insertion_mode(self.original_insertion_mode);
            }
        }
        true
    }

    fn handle_in_table(
        &mut self,
        token: &mut Token,
        tokenizer: &mut Tokenizer<'a>,
        errors: &mut ErrorSink,
    ) -> bool {
        match &token.kind {
            TokenKind::Character(_) | TokenKind::Whitespace(_) | TokenKind::Cdata(_) => {
                // The "pending table character tokens" list is the ordinary
                // text buffer; in-table-text decides at flush time whether the
                // content foster-parents.
                debug_assert!(self.text_node.buffer.is_empty());
                self.original_insertion_mode = self.insertion_mode;
                self.reprocess_current_token = true;
                self.set_insertion_mode(InsertionMode::InTableText);
                true
            }
            TokenKind::Doctype(_) => {
                self.add_parse_error(token, errors);
                false
            }
            TokenKind::Comment(_) => {
                let parent = self.current_node().expect("table is open");
                self.append_comment_node(parent, token);
                true
            }
            _ if tag_is(token, START_TAG, Tag::Caption) => {
                self.clear_stack_to_table_context();
                self.active_formatting.push_marker();
                self.insert_element_from_token(token);
                self.set_insertion_mode(InsertionMode::InCaption);
                true
            }
            _ if tag_is(token, START_TAG, Tag::Colgroup) => {
                self.clear_stack_to_table_context();
                self.insert_element_from_token(token);
                self.set_insertion_mode(InsertionMode::InColumnGroup);
                true
            }
            _ if tag_is(token, START_TAG, Tag::Col) => {
                self.clear_stack_to_table_context();
                self.insert_element_of_tag_type(Tag::Colgroup, ParseFlags::IMPLIED);
                self.reprocess_current_token = true;
                self.set_insertion_mode(InsertionMode::InColumnGroup);
                true
            }
            _ if tag_in(
                token,
                START_TAG,
                &[Tag::Tbody, Tag::Tfoot, Tag::Thead, Tag::Td, Tag::Th, Tag::Tr],
            ) =>
            {
                self.clear_stack_to_table_context();
                self.set_insertion_mode(InsertionMode::InTableBody);
                if tag_in(token, START_TAG, &[Tag::Td, Tag::Th, Tag::Tr]) {
                    self.insert_element_of_tag_type(Tag::Tbody, ParseFlags::IMPLIED);
                    self.reprocess_current_token = true;
                } else {
                    self.insert_element_from_token(token);
                }
                true
            }
            _ if tag_is(token, START_TAG, Tag::Table) => {
                self.add_parse_error(token, errors);
                if self.close_table() {
                    self.reprocess_current_token = true;
                }
                false
            }
            _ if tag_is(token, END_TAG, Tag::Table) => {
                if !self.close_table() {
                    self.add_parse_error(token, errors);
                    return false;
                }
                true
            }
            _ if tag_in(
                token,
                END_TAG,
                &[
                    Tag::Body,
                    Tag::Caption,
                    Tag::Col,
                    Tag::Colgroup,
                    Tag::Html,
                    Tag::Tbody,
                    Tag::Td,
                    Tag::Tfoot,
                    Tag::Th,
                    Tag::Thead,
                    Tag::Tr,
                ],
            ) =>
            {
                self.add_parse_error(token, errors);
                false
            }
            _ if tag_in(token, START_TAG, &[Tag::Style, Tag::Script]) => {
                self.handle_in_head(token, tokenizer, errors)
            }
            _ if tag_is(token, START_TAG, Tag::Input)
                && matches!(
                    &token.kind,
                    TokenKind::StartTag(data)
                        if attribute_matches(&data.attributes, "type", "hidden")
                ) =>
            {
                self.add_parse_error(token, errors);
                self.insert_element_from_token(token);
                self.pop_current_node();
                false
            }
            _ if tag_is(token, START_TAG, Tag::Form) => {
                self.add_parse_error(token, errors);
                if self.form_element.is_some() {
                    return false;
                }
                self.form_element = Some(self.insert_element_from_token(token));
                self.pop_current_node();
                false
            }
            TokenKind::Eof => {
                if !self
                    .current_node()
                    .is_some_and(|node| self.node_tag_is(node, Tag::Html))
                {
                    self.add_parse_error(token, errors);
                    return false;
                }
                true
            }
            _ => {
                // Anything else: "in body" rules with foster parenting on.
                self.add_parse_error(token, errors);
                self.foster_parent_insertions = true;
                let result = self.handle_in_body(token, tokenizer, errors);
                self.foster_parent_insertions = false;
                result
            }
        }
    }

    fn handle_in_table_text(
        &mut self,
        token: &mut Token,
        _tokenizer: &mut Tokenizer<'a>,
        errors: &mut ErrorSink,
    ) -> bool {
        match &token.kind {
            TokenKind::Null => {
                self.add_parse_error(token, errors);
                false
            }
            TokenKind::Character(_) | TokenKind::Whitespace(_) | TokenKind::Cdata(_) => {
                self.insert_text_token(token);
                true
            }
            _ => {
                // Any non-whitespace byte in the pending buffer redirects the
                // whole run out of the table.
                let has_non_whitespace = self
                    .text_node
                    .buffer
                    .bytes()
                    .any(|byte| !byte.is_ascii_whitespace());
                if has_non_whitespace {
                    self.foster_parent_insertions = true;
                    self.reconstruct_active_formatting_elements();
                }
                self.maybe_flush_text_node_buffer();
                self.foster_parent_insertions = false;
                self.reprocess_current_token = true;
                self.insertion_mode = self.original_insertion_mode;
                true
            }
        }
    }

    fn handle_in_caption(
        &mut self,
        token: &mut Token,
        tokenizer: &mut Tokenizer<'a>,
        errors: &mut ErrorSink,
    ) -> bool {
        if tag_in(
            token,
            START_TAG,
            &[
                Tag::Caption,
                Tag::Col,
                Tag::Colgroup,
                Tag::Tbody,
                Tag::Td,
                Tag::Tfoot,
                Tag::Th,
                Tag::Thead,
                Tag::Tr,
            ],
        ) || tag_in(token, END_TAG, &[Tag::Caption, Tag::Table])
        {
            if !self.has_an_element_in_table_scope(Tag::Caption) {
                self.add_parse_error(token, errors);
                return false;
            }
            if !tag_is(token, END_TAG, Tag::Caption) {
                self.add_parse_error(token, errors);
                self.reprocess_current_token = true;
            }
            self.generate_implied_end_tags(None);
            let mut result = true;
            if !self
                .current_node()
                .is_some_and(|node| self.node_tag_is(node, Tag::Caption))
            {
                self.add_parse_error(token, errors);
                while !self
                    .current_node()
                    .is_some_and(|node| self.node_tag_is(node, Tag::Caption))
                {
                    self.pop_current_node();
                }
                result = false;
            }
            self.pop_current_node(); // The <caption> itself.
            self.clear_active_formatting_elements();
            self.set_insertion_mode(InsertionMode::InTable);
            result
        } else if tag_in(
            token,
            END_TAG,
            &[
                Tag::Body,
                Tag::Col,
                Tag::Colgroup,
                Tag::Html,
                Tag::Tbody,
                Tag::Td,
                Tag::Tfoot,
                Tag::Th,
                Tag::Thead,
                Tag::Tr,
            ],
        ) {
            self.add_parse_error(token, errors);
            false
        } else {
            self.handle_in_body(token, tokenizer, errors)
        }
    }

    fn handle_in_column_group(
        &mut self,
        token: &mut Token,
        tokenizer: &mut Tokenizer<'a>,
        errors: &mut ErrorSink,
    ) -> bool {
        match &token.kind {
            TokenKind::Whitespace(_) => {
                self.insert_text_token(token);
                true
            }
            TokenKind::Doctype(_) => {
                self.add_parse_error(token, errors);
                false
            }
            TokenKind::Comment(_) => {
                let parent = self.current_node().expect("colgroup is open");
                self.append_comment_node(parent, token);
                true
            }
            _ if tag_is(token, START_TAG, Tag::Html) => {
                self.handle_in_body(token, tokenizer, errors)
            }
            _ if tag_is(token, START_TAG, Tag::Col) => {
                self.insert_element_from_token(token);
                self.pop_current_node();
                self.acknowledge_self_closing_tag();
                true
            }
            _ if tag_is(token, END_TAG, Tag::Col) => {
                self.add_parse_error(token, errors);
                false
            }
            TokenKind::Eof if self.current_node() == self.root => true,
            _ => {
                if self.current_node() == self.root {
                    self.add_parse_error(token, errors);
                    return false;
                }
                debug_assert!(self
                    .current_node()
                    .is_some_and(|node| self.node_tag_is(node, Tag::Colgroup)));
                self.pop_current_node();
                self.set_insertion_mode(InsertionMode::InTable);
                if !tag_is(token, END_TAG, Tag::Colgroup) {
                    self.reprocess_current_token = true;
                }
                true
            }
        }
    }

    fn handle_in_table_body(
        &mut self,
        token: &mut Token,
        tokenizer: &mut Tokenizer<'a>,
        errors: &mut ErrorSink,
    ) -> bool {
        if tag_is(token, START_TAG, Tag::Tr) {
            self.clear_stack_to_table_body_context();
            self.insert_element_from_token(token);
            self.set_insertion_mode(InsertionMode::InRow);
            true
        } else if tag_in(token, START_TAG, &[Tag::Td, Tag::Th]) {
            self.add_parse_error(token, errors);
            self.clear_stack_to_table_body_context();
            self.insert_element_of_tag_type(Tag::Tr, ParseFlags::IMPLIED);
            self.reprocess_current_token = true;
            self.set_insertion_mode(InsertionMode::InRow);
            false
        } else if tag_in(token, END_TAG, &[Tag::Tbody, Tag::Tfoot, Tag::Thead]) {
            let tag = token.end_tag().expect("end tag branch");
            if !self.has_an_element_in_table_scope(tag) {
                self.add_parse_error(token, errors);
                return false;
            }
            self.clear_stack_to_table_body_context();
            self.pop_current_node();
            self.set_insertion_mode(InsertionMode::InTable);
            true
        } else if tag_in(
            token,
            START_TAG,
            &[Tag::Caption, Tag::Col, Tag::Colgroup, Tag::Tbody, Tag::Tfoot, Tag::Thead],
        ) || tag_is(token, END_TAG, Tag::Table)
        {
            if !(self.has_an_element_in_table_scope(Tag::Tbody)
                || self.has_an_element_in_table_scope(Tag::Thead)
                || self.has_an_element_in_table_scope(Tag::Tfoot))
            {
                self.add_parse_error(token, errors);
                return false;
            }
            self.clear_stack_to_table_body_context();
            self.pop_current_node();
            self.set_insertion_mode(InsertionMode::InTable);
            self.reprocess_current_token = true;
            true
        } else if tag_in(
            token,
            END_TAG,
            &[
                Tag::Body,
                Tag::Caption,
                Tag::Col,
                Tag::Tr,
                Tag::Colgroup,
                Tag::Html,
                Tag::Td,
                Tag::Th,
            ],
        ) {
            self.add_parse_error(token, errors);
            false
        } else {
            self.handle_in_table(token, tokenizer, errors)
        }
    }

    fn handle_in_row(
        &mut self,
        token: &mut Token,
        tokenizer: &mut Tokenizer<'a>,
        errors: &mut ErrorSink,
    ) -> bool {
        if tag_in(token, START_TAG, &[Tag::Th, Tag::Td]) {
            self.clear_stack_to_table_row_context();
            self.insert_element_from_token(token);
            self.set_insertion_mode(InsertionMode::InCell);
            self.active_formatting.push_marker();
            true
        } else if tag_in(
            token,
            START_TAG,
            &[Tag::Caption, Tag::Colgroup, Tag::Tbody, Tag::Tfoot, Tag::Thead, Tag::Tr],
        ) || tag_in(
            token,
            END_TAG,
            &[Tag::Tr, Tag::Table, Tag::Tbody, Tag::Tfoot, Tag::Thead],
        ) {
            // Four spec clauses collapse onto "act as if </tr> was seen"; the
            // differences are error handling and reprocessing.
            let desired_tag = if tag_in(token, END_TAG, &[Tag::Tbody, Tag::Tfoot, Tag::Thead]) {
                token.end_tag().expect("end tag branch")
            } else {
                Tag::Tr
            };
            if !self.has_an_element_in_table_scope(desired_tag) {
                self.add_parse_error(token, errors);
                return false;
            }
            self.clear_stack_to_table_row_context();
            let last_element = self.pop_current_node();
            debug_assert!(last_element.is_some_and(|node| self.node_tag_is(node, Tag::Tr)));
            self.set_insertion_mode(InsertionMode::InTableBody);
            if !tag_is(token, END_TAG, Tag::Tr) {
                self.reprocess_current_token = true;
            }
            true
        } else if tag_in(
            token,
            END_TAG,
            &[
                Tag::Body,
                Tag::Caption,
                Tag::Col,
                Tag::Colgroup,
                Tag::Html,
                Tag::Td,
                Tag::Th,
            ],
        ) {
            self.add_parse_error(token, errors);
            false
        } else {
            self.handle_in_table(token, tokenizer, errors)
        }
    }

    fn handle_in_cell(
        &mut self,
        token: &mut Token,
        tokenizer: &mut Tokenizer<'a>,
        errors: &mut ErrorSink,
    ) -> bool {
        if tag_in(token, END_TAG, &[Tag::Td, Tag::Th]) {
            let tag = token.end_tag().expect("end tag branch");
            if !self.has_an_element_in_table_scope(tag) {
                self.add_parse_error(token, errors);
                return false;
            }
            self.close_table_cell(token, tag, errors)
        } else if tag_in(
            token,
            START_TAG,
            &[
                Tag::Caption,
                Tag::Col,
                Tag::Colgroup,
                Tag::Tbody,
                Tag::Td,
                Tag::Tfoot,
                Tag::Th,
                Tag::Thead,
                Tag::Tr,
            ],
        ) {
            if !self.has_an_element_in_table_scope(Tag::Th)
                && !self.has_an_element_in_table_scope(Tag::Td)
            {
                self.add_parse_error(token, errors);
                return false;
            }
            self.reprocess_current_token = true;
            self.close_current_cell(token, errors)
        } else if tag_in(
            token,
            END_TAG,
            &[Tag::Body, Tag::Caption, Tag::Col, Tag::Colgroup, Tag::Html],
        ) {
            self.add_parse_error(token, errors);
            false
        } else if tag_in(
            token,
            END_TAG,
            &[Tag::Table, Tag::Tbody, Tag::Tfoot, Tag::Thead, Tag::Tr],
        ) {
            let tag = token.end_tag().expect("end tag branch");
            if !self.has_an_element_in_table_scope(tag) {
                self.add_parse_error(token, errors);
                return false;
            }
            self.reprocess_current_token = true;
            self.close_current_cell(token, errors)
        } else {
            self.handle_in_body(token, tokenizer, errors)
        }
    }

    fn handle_in_select(
        &mut self,
        token: &mut Token,
        tokenizer: &mut Tokenizer<'a>,
        errors: &mut ErrorSink,
    ) -> bool {
        match &token.kind {
            TokenKind::Null => {
                self.add_parse_error(token, errors);
                false
            }
            TokenKind::Character(_) | TokenKind::Whitespace(_) | TokenKind::Cdata(_) => {
                self.insert_text_token(token);
                true
            }
            TokenKind::Doctype(_) => {
                self.add_parse_error(token, errors);
                false
            }
            TokenKind::Comment(_) => {
                let parent = self.current_node().expect("select is open");
                self.append_comment_node(parent, token);
                true
            }
            _ if tag_is(token, START_TAG, Tag::Html) => {
                self.handle_in_body(token, tokenizer, errors)
            }
            _ if tag_is(token, START_TAG, Tag::Option) => {
                if self
                    .current_node()
                    .is_some_and(|node| self.node_tag_is(node, Tag::Option))
                {
                    self.pop_current_node();
                }
                self.insert_element_from_token(token);
                true
            }
            _ if tag_is(token, START_TAG, Tag::Optgroup) => {
                if self
                    .current_node()
                    .is_some_and(|node| self.node_tag_is(node, Tag::Option))
                {
                    self.pop_current_node();
                }
                if self
                    .current_node()
                    .is_some_and(|node| self.node_tag_is(node, Tag::Optgroup))
                {
                    self.pop_current_node();
                }
                self.insert_element_from_token(token);
                true
            }
            _ if tag_is(token, END_TAG, Tag::Optgroup) => {
                let stack_len = self.open_elements.len();
                if self
                    .current_node()
                    .is_some_and(|node| self.node_tag_is(node, Tag::Option))
                    && stack_len >= 2
                    && self.node_tag_is(self.open_elements.get(stack_len - 2), Tag::Optgroup)
                {
                    self.pop_current_node();
                }
                if self
                    .current_node()
                    .is_some_and(|node| self.node_tag_is(node, Tag::Optgroup))
                {
                    self.pop_current_node();
                    true
                } else {
                    self.add_parse_error(token, errors);
                    false
                }
            }
            _ if tag_is(token, END_TAG, Tag::Option) => {
                if self
                    .current_node()
                    .is_some_and(|node| self.node_tag_is(node, Tag::Option))
                {
                    self.pop_current_node();
                    true
                } else {
                    self.add_parse_error(token, errors);
                    false
                }
            }
            _ if tag_is(token, END_TAG, Tag::Select) => {
                if !self.has_an_element_in_select_scope(Tag::Select) {
                    self.add_parse_error(token, errors);
                    return false;
                }
                self.close_current_select();
                true
            }
            _ if tag_is(token, START_TAG, Tag::Select) => {
                self.add_parse_error(token, errors);
                self.close_current_select();
                false
            }
            _ if tag_in(token, START_TAG, &[Tag::Input, Tag::Keygen, Tag::Textarea]) => {
                self.add_parse_error(token, errors);
                if self.has_an_element_in_select_scope(Tag::Select) {
                    self.close_current_select();
                    self.reprocess_current_token = true;
                }
                false
            }
            _ if tag_is(token, START_TAG, Tag::Script) => {
                self.handle_in_head(token, tokenizer, errors)
            }
            TokenKind::Eof => {
                if self.current_node() != self.root {
                    self.add_parse_error(token, errors);
                    return false;
                }
                true
            }
            _ => {
                self.add_parse_error(token, errors);
                false
            }
        }
    }

    fn handle_in_select_in_table(
        &mut self,
        token: &mut Token,
        tokenizer: &mut Tokenizer<'a>,
        errors: &mut ErrorSink,
    ) -> bool {
        const TABLE_PARTS: &[Tag] = &[
            Tag::Caption,
            Tag::Table,
            Tag::Tbody,
            Tag::Tfoot,
            Tag::Thead,
            Tag::Tr,
            Tag::Td,
            Tag::Th,
        ];
        if tag_in(token, START_TAG, TABLE_PARTS) {
            self.add_parse_error(token, errors);
            self.close_current_select();
            self.reprocess_current_token = true;
            false
        } else if tag_in(token, END_TAG, TABLE_PARTS) {
            self.add_parse_error(token, errors);
            let tag = token.end_tag().expect("end tag branch");
            if self.has_an_element_in_table_scope(tag) {
                self.close_current_select();
                self.reset_insertion_mode_appropriately();
                self.reprocess_current_token = true;
            }
            false
        } else {
            self.handle_in_select(token, tokenizer, errors)
        }
    }

    fn handle_in_template(
        &mut self,
        _token: &mut Token,
        _tokenizer: &mut Tokenizer<'a>,
        _errors: &mut ErrorSink,
    ) -> bool {
        // <template> parsing is not implemented; the mode is unreachable.
        true
    }

    fn handle_after_body(
        &mut self,
        token: &mut Token,
        tokenizer: &mut Tokenizer<'a>,
        errors: &mut ErrorSink,
    ) -> bool {
        match &token.kind {
            TokenKind::Whitespace(_) => self.handle_in_body(token, tokenizer, errors),
            _ if tag_is(token, START_TAG, Tag::Html) => {
                self.handle_in_body(token, tokenizer, errors)
            }
            TokenKind::Comment(_) => {
                // Goes after the body, as a child of <html>.
                let html_node = self.root.expect("root exists after body");
                self.append_comment_node(html_node, token);
                true
            }
            TokenKind::Doctype(_) => {
                self.add_parse_error(token, errors);
                false
            }
            _ if tag_is(token, END_TAG, Tag::Html) => {
                self.set_insertion_mode(InsertionMode::AfterAfterBody);
                let html = self.open_elements.get(0);
                debug_assert!(self.node_tag_is(html, Tag::Html));
                self.record_end_of_element(html);
                true
            }
            TokenKind::Eof => true,
            _ => {
                self.add_parse_error(token, errors);
                self.set_insertion_mode(InsertionMode::InBody);
                self.reprocess_current_token = true;
                false
            }
        }
    }

    fn handle_in_frameset(
        &mut self,
        token: &mut Token,
        tokenizer: &mut Tokenizer<'a>,
        errors: &mut ErrorSink,
    ) -> bool {
        match &token.kind {
            TokenKind::Whitespace(_) => {
                self.insert_text_token(token);
                true
            }
            TokenKind::Comment(_) => {
                let parent = self.current_node().expect("frameset is open");
                self.append_comment_node(parent, token);
                true
            }
            TokenKind::Doctype(_) => {
                self.add_parse_error(token, errors);
                false
            }
            _ if tag_is(token, START_TAG, Tag::Html) => {
                self.handle_in_body(token, tokenizer, errors)
            }
            _ if tag_is(token, START_TAG, Tag::Frameset) => {
                self.insert_element_from_token(token);
                true
            }
            _ if tag_is(token, END_TAG, Tag::Frameset) => {
                if self
                    .current_node()
                    .is_some_and(|node| self.node_tag_is(node, Tag::Html))
                {
                    self.add_parse_error(token, errors);
                    return false;
                }
                self.pop_current_node();
                if !self
                    .current_node()
                    .is_some_and(|node| self.node_tag_is(node, Tag::Frameset))
                {
                    self.set_insertion_mode(InsertionMode::AfterFrameset);
                }
                true
            }
            _ if tag_is(token, START_TAG, Tag::Frame) => {
                self.insert_element_from_token(token);
                self.pop_current_node();
                self.acknowledge_self_closing_tag();
                true
            }
            _ if tag_is(token, START_TAG, Tag::Noframes) => {
                self.handle_in_head(token, tokenizer, errors)
            }
            TokenKind::Eof => {
                if !self
                    .current_node()
                    .is_some_and(|node| self.node_tag_is(node, Tag::Html))
                {
                    self.add_parse_error(token, errors);
                    return false;
                }
                true
            }
            _ => {
                self.add_parse_error(token, errors);
                false
            }
        }
    }

    fn handle_after_frameset(
        &mut self,
        token: &mut Token,
        tokenizer: &mut Tokenizer<'a>,
        errors: &mut ErrorSink,
    ) -> bool {
        match &token.kind {
            TokenKind::Whitespace(_) => {
                self.insert_text_token(token);
                true
            }
            TokenKind::Comment(_) => {
                let parent = self.current_node().expect("html is open");
                self.append_comment_node(parent, token);
                true
            }
            TokenKind::Doctype(_) => {
                self.add_parse_error(token, errors);
                false
            }
            _ if tag_is(token, START_TAG, Tag::Html) => {
                self.handle_in_body(token, tokenizer, errors)
            }
            _ if tag_is(token, END_TAG, Tag::Html) => {
                self.set_insertion_mode(InsertionMode::AfterAfterFrameset);
                true
            }
            _ if tag_is(token, START_TAG, Tag::Noframes) => {
                self.handle_in_head(token, tokenizer, errors)
            }
            TokenKind::Eof => true,
            _ => {
                self.add_parse_error(token, errors);
                false
            }
        }
    }

    fn handle_after_after_body(
        &mut self,
        token: &mut Token,
        tokenizer: &mut Tokenizer<'a>,
        errors: &mut ErrorSink,
    ) -> bool {
        match &token.kind {
            TokenKind::Comment(_) => {
                self.append_comment_node(self.document, token);
                true
            }
            TokenKind::Doctype(_) | TokenKind::Whitespace(_) => {
                self.handle_in_body(token, tokenizer, errors)
            }
            _ if tag_is(token, START_TAG, Tag::Html) => {
                self.handle_in_body(token, tokenizer, errors)
            }
            TokenKind::Eof => true,
            _ => {
                self.add_parse_error(token, errors);
                self.set_insertion_mode(InsertionMode::InBody);
                self.reprocess_current_token = true;
                false
            }
        }
    }

    fn handle_after_after_frameset(
        &mut self,
        token: &mut Token,
        tokenizer: &mut Tokenizer<'a>,
        errors: &mut ErrorSink,
    ) -> bool {
        match &token.kind {
            TokenKind::Comment(_) => {
                self.append_comment_node(self.document, token);
                true
            }
            TokenKind::Doctype(_) | TokenKind::Whitespace(_) => {
                self.handle_in_body(token, tokenizer, errors)
            }
            _ if tag_is(token, START_TAG, Tag::Html) => {
                self.handle_in_body(token, tokenizer, errors)
            }
            TokenKind::Eof => true,
            _ if tag_is(token, START_TAG, Tag::Noframes) => {
                self.handle_in_head(token, tokenizer, errors)
            }
            _ => {
                self.add_parse_error(token, errors);
                false
            }
        }
    }

    // -----------------------------------------------------------------
    // Foreign content.

    fn span_text_eq_ignore_case(&self, a: Span, b: Span) -> bool {
        self.source[a.start..a.end].eq_ignore_ascii_case(&self.source[b.start..b.end])
    }

    fn handle_in_foreign_content(
        &mut self,
        token: &mut Token,
        tokenizer: &mut Tokenizer<'a>,
        errors: &mut ErrorSink,
    ) -> bool {
        const BREAKOUT_TAGS: &[Tag] = &[
            Tag::B,
            Tag::Big,
            Tag::Blockquote,
            Tag::Body,
            Tag::Br,
            Tag::Center,
            Tag::Code,
            Tag::Dd,
            Tag::Div,
            Tag::Dl,
            Tag::Dt,
            Tag::Em,
            Tag::Embed,
            Tag::H1,
            Tag::H2,
            Tag::H3,
            Tag::H4,
            Tag::H5,
            Tag::H6,
            Tag::Head,
            Tag::Hr,
            Tag::I,
            Tag::Img,
            Tag::Li,
            Tag::Listing,
            Tag::Menu,
            Tag::Meta,
            Tag::Nobr,
            Tag::Ol,
            Tag::P,
            Tag::Pre,
            Tag::Ruby,
            Tag::S,
            Tag::Small,
            Tag::Span,
            Tag::Strong,
            Tag::Strike,
            Tag::Sub,
            Tag::Sup,
            Tag::Table,
            Tag::Tt,
            Tag::U,
            Tag::Ul,
            Tag::Var,
        ];
        match &token.kind {
            TokenKind::Null => {
                self.add_parse_error(token, errors);
                token.kind = TokenKind::Character(REPLACEMENT_CHAR);
                self.insert_text_token(token);
                return false;
            }
            TokenKind::Whitespace(_) => {
                self.insert_text_token(token);
                return true;
            }
            TokenKind::Character(_) => {
                self.insert_text_token(token);
                self.set_frameset_not_ok();
                return true;
            }
            TokenKind::Cdata(_) => {
                self.insert_text_token(token);
                return true;
            }
            TokenKind::Comment(_) => {
                let parent = self.current_node().expect("foreign content has a parent");
                self.append_comment_node(parent, token);
                return true;
            }
            TokenKind::Doctype(_) => {
                self.add_parse_error(token, errors);
                return false;
            }
            _ => {}
        }

        // Order matters for these clauses.
        let is_breakout = tag_in(token, START_TAG, BREAKOUT_TAGS)
            || (tag_is(token, START_TAG, Tag::Font)
                && matches!(
                    &token.kind,
                    TokenKind::StartTag(data)
                        if get_attribute(&data.attributes, "color").is_some()
                            || get_attribute(&data.attributes, "face").is_some()
                            || get_attribute(&data.attributes, "size").is_some()
                ));
        if is_breakout {
            self.add_parse_error(token, errors);
            loop {
                self.pop_current_node();
                let current = self.current_node().expect("html root stops the breakout walk");
                let node = &self.arena[current];
                if foreign::is_mathml_integration_point(node)
                    || foreign::is_html_integration_point(node)
                    || node
                        .as_element()
                        .is_some_and(|element| element.namespace == Namespace::Html)
                {
                    break;
                }
            }
            self.reprocess_current_token = true;
            return false;
        }

        if token.token_type() == TokenType::StartTag {
            let current_namespace = self.arena[self
                .current_node()
                .expect("foreign content has a current node")]
            .as_element()
            .expect("open elements are elements")
            .namespace;
            if let TokenKind::StartTag(data) = &mut token.kind {
                if current_namespace == Namespace::MathMl {
                    foreign::adjust_mathml_attributes(data);
                }
                if current_namespace == Namespace::Svg {
                    // Tag-name case correction is left to the
                    // normalize_svg_tagname lookup clients use.
                    foreign::adjust_svg_attributes(data);
                }
                foreign::adjust_foreign_attributes(data);
            }
            let is_self_closing =
                matches!(&token.kind, TokenKind::StartTag(data) if data.is_self_closing);
            self.insert_foreign_element(token, current_namespace, errors);
            if is_self_closing {
                self.pop_current_node();
                self.acknowledge_self_closing_tag();
            }
            return true;
        }

        // End tags (</script> included) match against the original tag text,
        // walking up to the nearest HTML element.
        debug_assert_eq!(token.token_type(), TokenType::EndTag);
        let mut node = self
            .current_node()
            .expect("foreign content has a current node");
        let token_name = tag_name_span(self.source, token.original_text);
        let mut node_name = tag_name_span(
            self.source,
            self.arena[node]
                .as_element()
                .expect("open elements are elements")
                .original_tag,
        );
        let mut is_success = true;
        if !self.span_text_eq_ignore_case(node_name, token_name) {
            self.add_parse_error(token, errors);
            is_success = false;
        }
        let mut index = self.open_elements.len() - 1;
        while index > 0 {
            if self.span_text_eq_ignore_case(node_name, token_name) {
                while self.pop_current_node() != Some(node) {}
                return is_success;
            }
            index -= 1;
            node = self.open_elements.get(index);
            if self.arena[node]
                .as_element()
                .is_some_and(|element| element.namespace == Namespace::Html)
            {
                // Stop before reading original text off parser-inserted
                // nodes.
                break;
            }
            node_name = tag_name_span(
                self.source,
                self.arena[node]
                    .as_element()
                    .expect("open elements are elements")
                    .original_tag,
            );
        }
        debug_assert!(self.arena[node]
            .as_element()
            .is_some_and(|element| element.namespace == Namespace::Html));
        // The current node is still foreign, so this cannot go through
        // handle_token without recursing back here.
        self.handle_html_content(token, tokenizer, errors) && is_success
    }

    // -----------------------------------------------------------------
    // End of parsing.

    fn finish_parsing(&mut self) {
        self.maybe_flush_text_node_buffer();
        while let Some(node) = self.pop_current_node() {
            if (self.node_tag_is(node, Tag::Body) && self.closed_body_tag)
                || (self.node_tag_is(node, Tag::Html) && self.closed_html_tag)
            {
                continue;
            }
            self.arena[node]
                .parse_flags
                .insert(ParseFlags::IMPLICIT_END_TAG);
        }
    }
}
