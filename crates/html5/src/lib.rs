//! An HTML5 parser: UTF-8 bytes in, document tree and diagnostics out.
//!
//! The parser follows the HTML5 parsing algorithm: a preprocessing input
//! cursor, the tokenizer state machine (character references included), and
//! the insertion-mode tree constructor with its open-element stack, active
//! formatting elements, adoption agency, and foster parenting. Parsing never
//! fails: malformed input produces a tree plus recoverable diagnostics, the
//! same way browsers handle it.
//!
//! The input buffer must outlive the output: nodes, attributes, and
//! diagnostics refer back into it through byte spans, resolved via
//! [`Output::original_text`]. Dropping the [`Output`] releases the whole tree
//! in one shot.
//!
//! ```
//! let output = html5::parse(b"<!DOCTYPE html><p class=greeting>Hello</p>");
//! assert!(output.errors.is_empty());
//! let root = output.root.expect("the html element always exists");
//! assert_eq!(output.node(root).tag(), Some(html5::Tag::Html));
//! ```

mod arena;
mod char_ref;
mod cursor;
mod entities;
mod error;
mod node;
mod span;
mod tag;
mod token;
mod tokenizer;
mod tree_builder;

pub use arena::NodeId;
pub use error::{
    DuplicateAttrDetail, ErrorDetail, ErrorKind, ParseError, ParserErrorDetail,
    TokenizerErrorState,
};
pub use node::{
    Document, Element, Namespace, Node, NodeKind, ParseFlags, QuirksMode, TextData,
};
pub use span::{SourcePosition, Span};
pub use tag::{Tag, tag_name_span};
pub use token::{Attribute, AttributeNamespace, TokenType, get_attribute};
pub use tree_builder::InsertionMode;
pub use tree_builder::foreign::normalize_svg_tagname;

use arena::NodeArena;
use error::ErrorSink;

/// Configuration for a parse. Use [`ParseOptions::default`] and override what
/// you need.
#[derive(Clone, Debug)]
pub struct ParseOptions {
    /// Tab-stop width used for column tracking when the source contains tabs.
    pub tab_stop: usize,
    /// Stop parsing as soon as the first diagnostic is recorded.
    pub stop_on_first_error: bool,
    /// Cap on recorded diagnostics; further ones are counted but dropped so a
    /// hopeless document cannot fill memory with redundant errors. `None`
    /// means unlimited.
    pub max_errors: Option<usize>,
    /// Serialization hint for consumers; recorded but never read by
    /// tokenization or tree construction.
    pub use_xhtml_rules: bool,
    /// Reserved for fragment parsing, which is not implemented; the value is
    /// recorded and ignored.
    pub fragment_context: Option<Tag>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            tab_stop: 8,
            stop_on_first_error: false,
            max_errors: None,
            use_xhtml_rules: false,
            fragment_context: None,
        }
    }
}

/// The result of a parse: the document tree, the diagnostics, and the arena
/// that owns every node. Dropping it releases everything at once.
pub struct Output<'a> {
    source: &'a [u8],
    arena: NodeArena,
    /// The document node; always present, always a [`NodeKind::Document`].
    pub document: NodeId,
    /// The `<html>` element: the first element child of the document. `None`
    /// only when `stop_on_first_error` aborted the parse before it was
    /// created.
    pub root: Option<NodeId>,
    /// Diagnostics in source order.
    pub errors: Vec<ParseError>,
}

impl<'a> Output<'a> {
    /// Resolves a node handle. Handles are only meaningful for the output
    /// that produced them.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.arena[id]
    }

    /// The input buffer this output was parsed from.
    pub fn source(&self) -> &'a [u8] {
        self.source
    }

    /// Resolves an original-text span against the input buffer.
    pub fn original_text(&self, span: Span) -> &'a [u8] {
        &self.source[span.start..span.end]
    }
}

impl std::fmt::Debug for Output<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Output")
            .field("document", &self.document)
            .field("root", &self.root)
            .field("errors", &self.errors.len())
            .field("nodes", &self.arena.len())
            .field("arena_chunks", &self.arena.chunks_allocated())
            .finish()
    }
}

/// Parses a buffer of UTF-8 text with default options.
pub fn parse(input: &[u8]) -> Output<'_> {
    parse_with_options(&ParseOptions::default(), input)
}

/// Parses a buffer of UTF-8 text.
///
/// The buffer may contain invalid UTF-8; bad sequences decode to U+FFFD with
/// a diagnostic, as the HTML5 spec requires.
pub fn parse_with_options<'a>(options: &ParseOptions, input: &'a [u8]) -> Output<'a> {
    let mut errors = ErrorSink::new(options.max_errors);
    let tree = tree_builder::construct_tree(input, options, &mut errors);
    Output {
        source: input,
        arena: tree.arena,
        document: tree.document,
        root: tree.root,
        errors: errors.into_errors(),
    }
}

#[cfg(all(test, feature = "count-alloc"))]
mod test_alloc {
    use std::alloc::{GlobalAlloc, Layout, System};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    pub struct CountingAlloc;

    static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);
    static DEALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);
    static ENABLED: AtomicBool = AtomicBool::new(false);

    unsafe impl GlobalAlloc for CountingAlloc {
        unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
            let ptr = unsafe { System.alloc(layout) };
            if !ptr.is_null() && ENABLED.load(Ordering::Relaxed) {
                ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
            }
            ptr
        }

        unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
            if ENABLED.load(Ordering::Relaxed) {
                DEALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
            }
            unsafe { System.dealloc(ptr, layout) }
        }

        unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
            let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
            if !new_ptr.is_null() && ENABLED.load(Ordering::Relaxed) {
                // A realloc retires one block and produces another.
                ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
                DEALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
            }
            new_ptr
        }
    }

    #[global_allocator]
    static GLOBAL: CountingAlloc = CountingAlloc;

    pub fn reset() {
        ALLOC_COUNT.store(0, Ordering::Relaxed);
        DEALLOC_COUNT.store(0, Ordering::Relaxed);
    }

    pub fn enable() {
        ENABLED.store(true, Ordering::Relaxed);
    }

    pub fn disable() {
        ENABLED.store(false, Ordering::Relaxed);
    }

    pub fn counts() -> (usize, usize) {
        (
            ALLOC_COUNT.load(Ordering::Relaxed),
            DEALLOC_COUNT.load(Ordering::Relaxed),
        )
    }
}

#[cfg(all(test, feature = "count-alloc"))]
mod count_alloc_tests {
    use super::test_alloc;

    /// Run with `--test-threads=1`: the counting allocator is process-global,
    /// and concurrent tests would skew the balance.
    #[test]
    fn parse_and_drop_release_every_allocation() {
        let input = b"<!DOCTYPE html><table><tr><td>a<td><b>1<i>2</b>3</i></tr></table>".to_vec();
        test_alloc::reset();
        test_alloc::enable();
        {
            let output = crate::parse(&input);
            assert!(output.root.is_some());
        }
        test_alloc::disable();
        let (allocations, deallocations) = test_alloc::counts();
        assert!(allocations > 0, "the parse must allocate");
        assert_eq!(
            allocations, deallocations,
            "a single drop must release every allocation the parse made"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_the_documented_defaults() {
        let options = ParseOptions::default();
        assert_eq!(options.tab_stop, 8);
        assert!(!options.stop_on_first_error);
        assert_eq!(options.max_errors, None);
        assert!(!options.use_xhtml_rules);
        assert_eq!(options.fragment_context, None);
    }

    #[test]
    fn output_resolves_spans_into_the_original_buffer() {
        let input = b"<p ID=\"x\">hi</p>";
        let output = parse(input);
        let body_children: Vec<NodeId> = {
            let root = output.root.expect("root");
            let html_children = output.node(root).children().expect("html children");
            let body = html_children[1];
            output.node(body).children().expect("body children").to_vec()
        };
        let p = output.node(body_children[0]).as_element().expect("p");
        assert_eq!(output.original_text(p.original_tag), b"<p ID=\"x\">");
        assert_eq!(output.original_text(p.attributes[0].original_name), b"ID");
        assert_eq!(output.original_text(p.attributes[0].original_value), b"\"x\"");
        assert_eq!(p.attributes[0].name, "id");
    }

    #[test]
    fn invalid_utf8_is_replaced_and_reported() {
        let input = b"<p>a\xFFb</p>";
        let output = parse(input);
        assert!(output.errors.iter().any(|e| e.kind == ErrorKind::Utf8Invalid));
        let root = output.root.expect("root");
        let body = output.node(root).children().expect("html")[1];
        let p = output.node(body).children().expect("body")[0];
        let text = output.node(output.node(p).children().expect("p")[0])
            .as_text()
            .expect("text");
        assert_eq!(text.text, "a\u{FFFD}b");
    }
}
