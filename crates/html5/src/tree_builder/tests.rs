use crate::arena::NodeId;
use crate::error::ErrorKind;
use crate::node::{Namespace, NodeKind, ParseFlags, QuirksMode};
use crate::tag::Tag;
use crate::{Output, ParseOptions, parse, parse_with_options};

fn parse_str(input: &str) -> Output<'_> {
    parse(input.as_bytes())
}

/// The element children of a node, skipping text/comment nodes.
fn element_children(output: &Output<'_>, node: NodeId) -> Vec<NodeId> {
    output
        .node(node)
        .children()
        .expect("node has children")
        .iter()
        .copied()
        .filter(|child| output.node(*child).as_element().is_some())
        .collect()
}

fn single_element_child(output: &Output<'_>, node: NodeId, tag: Tag) -> NodeId {
    let children = element_children(output, node);
    assert_eq!(children.len(), 1, "expected one element child");
    assert_eq!(output.node(children[0]).tag(), Some(tag));
    children[0]
}

fn text_of(output: &Output<'_>, node: NodeId) -> String {
    let mut out = String::new();
    for child in output.node(node).children().expect("node has children") {
        if let NodeKind::Text(data) | NodeKind::Whitespace(data) | NodeKind::Cdata(data) =
            &output.node(*child).kind
        {
            out.push_str(&data.text);
        }
    }
    out
}

fn body_of(output: &Output<'_>) -> NodeId {
    let root = output.root.expect("root exists");
    assert_eq!(output.node(root).tag(), Some(Tag::Html));
    let children = element_children(output, root);
    assert_eq!(children.len(), 2, "expected head and body");
    assert_eq!(output.node(children[0]).tag(), Some(Tag::Head));
    assert_eq!(output.node(children[1]).tag(), Some(Tag::Body));
    children[1]
}

/// Walks the whole tree checking the parent/index agreement invariant and
/// that every original-text span stays inside the input buffer.
fn check_tree_invariants(output: &Output<'_>, input: &[u8]) {
    let mut stack = vec![output.document];
    while let Some(node) = stack.pop() {
        if let Some(children) = output.node(node).children() {
            for (index, child) in children.iter().enumerate() {
                assert_eq!(
                    output.node(*child).parent,
                    Some(node),
                    "child's parent back-reference disagrees"
                );
                assert_eq!(
                    output.node(*child).index_within_parent,
                    index,
                    "child's index disagrees with its slot"
                );
                stack.push(*child);
            }
        }
        let spans = match &output.node(node).kind {
            NodeKind::Element(element) => vec![element.original_tag, element.original_end_tag],
            NodeKind::Text(data)
            | NodeKind::Whitespace(data)
            | NodeKind::Cdata(data)
            | NodeKind::Comment(data) => vec![data.original_text],
            NodeKind::Document(_) => Vec::new(),
        };
        for span in spans {
            assert!(span.start <= span.end);
            assert!(
                span.end <= input.len(),
                "span {span:?} escapes the input buffer"
            );
        }
    }
}

#[test]
fn well_formed_document_parses_cleanly() {
    let input = "<!DOCTYPE html><html><body><p>Hello</p></body></html>";
    let output = parse_str(input);
    assert!(output.errors.is_empty(), "errors: {:?}", output.errors);

    let document = output.node(output.document).as_document().expect("document");
    assert!(document.has_doctype);
    assert_eq!(document.name, "html");
    assert_eq!(document.quirks_mode, QuirksMode::NoQuirks);

    let body = body_of(&output);
    let p = single_element_child(&output, body, Tag::P);
    assert_eq!(text_of(&output, p), "Hello");
    check_tree_invariants(&output, input.as_bytes());
}

#[test]
fn unclosed_paragraph_is_implicitly_closed_without_errors() {
    let output = parse_str("<p>unclosed");
    // The only diagnostic is the missing doctype; the implicit closes at EOF
    // are spec-legal and add nothing.
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, ErrorKind::Parser);
    assert_eq!(output.errors[0].position.offset, 0);
    let body = body_of(&output);
    let p = single_element_child(&output, body, Tag::P);
    assert_eq!(text_of(&output, p), "unclosed");
    assert!(output
        .node(p)
        .parse_flags
        .contains(ParseFlags::IMPLICIT_END_TAG));
    // The <html> start tag never appeared either.
    let root = output.root.expect("root exists");
    assert!(output.node(root).parse_flags.contains(ParseFlags::IMPLIED));
}

#[test]
fn table_cells_get_an_implied_tbody_and_row() {
    let input = "<table><tr><td>a<td>b</tr></table>";
    let output = parse_str(input);
    let body = body_of(&output);
    let table = single_element_child(&output, body, Tag::Table);
    let tbody = single_element_child(&output, table, Tag::Tbody);
    assert!(output.node(tbody).parse_flags.contains(ParseFlags::IMPLIED));
    let tr = single_element_child(&output, tbody, Tag::Tr);
    let cells = element_children(&output, tr);
    assert_eq!(cells.len(), 2);
    assert_eq!(output.node(cells[0]).tag(), Some(Tag::Td));
    assert_eq!(output.node(cells[1]).tag(), Some(Tag::Td));
    assert_eq!(text_of(&output, cells[0]), "a");
    assert_eq!(text_of(&output, cells[1]), "b");
    check_tree_invariants(&output, input.as_bytes());
}

#[test]
fn adoption_agency_untangles_misnested_formatting() {
    let input = "<b>1<i>2</b>3</i>";
    let output = parse_str(input);
    let body = body_of(&output);
    let children = element_children(&output, body);
    assert_eq!(children.len(), 2, "expected <b> and reparented <i>");
    let b = children[0];
    let outer_i = children[1];
    assert_eq!(output.node(b).tag(), Some(Tag::B));
    assert_eq!(output.node(outer_i).tag(), Some(Tag::I));

    // <b> keeps its own text and the inner <i>.
    let b_children = output.node(b).children().expect("b has children");
    assert_eq!(b_children.len(), 2);
    let inner_i = b_children[1];
    assert_eq!(output.node(inner_i).tag(), Some(Tag::I));
    assert_eq!(text_of(&output, inner_i), "2");
    assert_eq!(text_of(&output, outer_i), "3");
    // The sibling <i> is the clone made when formatting was reconstructed for
    // the "3" character data.
    assert!(output
        .node(outer_i)
        .parse_flags
        .contains(ParseFlags::RECONSTRUCTED_FORMATTING_ELEMENT));
    check_tree_invariants(&output, input.as_bytes());
}

#[test]
fn character_references_decode_with_exact_error_positions() {
    let input = "A&amp;B&#x41;C&notavalidentity;D";
    let output = parse_str(input);
    let body = body_of(&output);
    assert_eq!(text_of(&output, body), "A&BAC\u{AC}avalidentity;D");

    let char_ref_errors: Vec<_> = output
        .errors
        .iter()
        .filter(|e| e.kind == ErrorKind::NamedCharRefWithoutSemicolon)
        .collect();
    assert_eq!(char_ref_errors.len(), 1);
    let error = char_ref_errors[0];
    // The diagnostic points at the ampersand of &not.
    assert_eq!(error.position.offset, 14);
    assert_eq!(error.position.line, 1);
    assert_eq!(error.position.column, 15);
    check_tree_invariants(&output, input.as_bytes());
}

#[test]
fn lone_angle_bracket_becomes_literal_text() {
    let input = "<\n";
    let output = parse_str(input);
    let body = body_of(&output);
    let children = output.node(body).children().expect("body children");
    assert_eq!(children.len(), 1);
    let text = output.node(children[0]).as_text().expect("text node");
    assert_eq!(text.text, "<\n");
    assert_eq!(text.start_pos.line, 1);
    assert_eq!(text.start_pos.column, 1);
    assert_eq!(text.start_pos.offset, 0);
    assert!(output.errors.iter().any(|e| e.kind == ErrorKind::TagInvalid));
}

#[test]
fn empty_input_still_produces_the_implied_skeleton() {
    let output = parse_str("");
    let document = output.node(output.document).as_document().expect("document");
    assert!(!document.has_doctype);
    assert_eq!(document.quirks_mode, QuirksMode::Quirks);
    let body = body_of(&output);
    assert!(output.node(body).children().expect("body").is_empty());
}

#[test]
fn missing_doctype_triggers_quirks_mode() {
    let output = parse_str("<div>x</div>");
    let document = output.node(output.document).as_document().expect("document");
    assert_eq!(document.quirks_mode, QuirksMode::Quirks);
    assert!(output.errors.iter().any(|e| e.kind == ErrorKind::Parser));

    let output = parse_str(
        "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\" \
         \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\"><p>x",
    );
    let document = output.node(output.document).as_document().expect("document");
    assert_eq!(document.quirks_mode, QuirksMode::LimitedQuirks);
}

#[test]
fn legacy_compat_doctype_is_conforming_and_keeps_its_identifier() {
    let output = parse_str("<!DOCTYPE html SYSTEM \"about:legacy-compat\">x");
    let document = output.node(output.document).as_document().expect("document");
    assert!(document.has_doctype);
    assert_eq!(document.system_identifier, "about:legacy-compat");
    assert_eq!(document.quirks_mode, QuirksMode::NoQuirks);
    assert!(output.errors.is_empty(), "about:legacy-compat is conforming");
}

#[test]
fn text_inside_a_table_is_foster_parented_before_it() {
    let input = "<table>x</table>";
    let output = parse_str(input);
    let body = body_of(&output);
    let children = output.node(body).children().expect("body children");
    assert_eq!(children.len(), 2);
    let text = output.node(children[0]).as_text().expect("fostered text");
    assert_eq!(text.text, "x");
    assert!(output
        .node(children[0])
        .parse_flags
        .contains(ParseFlags::FOSTER_PARENTED));
    assert_eq!(output.node(children[1]).tag(), Some(Tag::Table));
    check_tree_invariants(&output, input.as_bytes());
}

#[test]
fn fostered_element_lands_before_the_table() {
    let input = "<table><div>x</div></table>";
    let output = parse_str(input);
    let body = body_of(&output);
    let children = element_children(&output, body);
    assert_eq!(children.len(), 2);
    assert_eq!(output.node(children[0]).tag(), Some(Tag::Div));
    assert_eq!(output.node(children[1]).tag(), Some(Tag::Table));
    assert_eq!(text_of(&output, children[0]), "x");
    check_tree_invariants(&output, input.as_bytes());
}

#[test]
fn button_start_tag_closes_an_open_button() {
    let output = parse_str("<button>a<button>b");
    let body = body_of(&output);
    let buttons = element_children(&output, body);
    assert_eq!(buttons.len(), 2);
    assert_eq!(text_of(&output, buttons[0]), "a");
    assert_eq!(text_of(&output, buttons[1]), "b");
    assert!(output.errors.iter().any(|e| e.kind == ErrorKind::Parser));
}

#[test]
fn nested_form_is_ignored_with_an_error() {
    let output = parse_str("<form><form><input>");
    let body = body_of(&output);
    let forms = element_children(&output, body);
    assert_eq!(forms.len(), 1);
    assert_eq!(output.node(forms[0]).tag(), Some(Tag::Form));
    // The input still lands inside the only real form.
    let form_children = element_children(&output, forms[0]);
    assert_eq!(form_children.len(), 1);
    assert_eq!(output.node(form_children[0]).tag(), Some(Tag::Input));
    assert!(output.errors.iter().any(|e| e.kind == ErrorKind::Parser));
}

#[test]
fn image_start_tag_is_rewritten_to_img() {
    let output = parse_str("<image src=x>");
    let body = body_of(&output);
    let children = element_children(&output, body);
    assert_eq!(children.len(), 1);
    let img = output.node(children[0]).as_element().expect("element");
    assert_eq!(img.tag, Tag::Img);
    assert_eq!(img.attributes[0].name, "src");
    assert!(output
        .node(children[0])
        .parse_flags
        .contains(ParseFlags::FROM_IMAGE));
}

#[test]
fn isindex_is_rewritten_into_a_form() {
    let output = parse_str("<isindex prompt=Hi action=go>");
    let body = body_of(&output);
    let form = single_element_child(&output, body, Tag::Form);
    assert!(output.node(form).parse_flags.contains(ParseFlags::FROM_ISINDEX));
    let form_element = output.node(form).as_element().expect("form");
    assert_eq!(form_element.attributes[0].name, "action");
    assert_eq!(form_element.attributes[0].value, "go");

    let parts = element_children(&output, form);
    assert_eq!(parts.len(), 3, "hr, label, hr");
    assert_eq!(output.node(parts[0]).tag(), Some(Tag::Hr));
    assert_eq!(output.node(parts[1]).tag(), Some(Tag::Label));
    assert_eq!(output.node(parts[2]).tag(), Some(Tag::Hr));

    assert_eq!(text_of(&output, parts[1]), "Hi");
    let input_node = single_element_child(&output, parts[1], Tag::Input);
    let input_element = output.node(input_node).as_element().expect("input");
    assert_eq!(input_element.attributes[0].name, "name");
    assert_eq!(input_element.attributes[0].value, "isindex");
}

#[test]
fn pre_ignores_the_linefeed_right_after_its_start_tag() {
    let output = parse_str("<pre>\nfoo\n</pre>");
    let body = body_of(&output);
    let pre = single_element_child(&output, body, Tag::Pre);
    assert_eq!(text_of(&output, pre), "foo\n");
}

#[test]
fn script_content_is_a_single_text_child() {
    let input = "<script>if (a < b) document.write('</b>');</script>";
    let output = parse_str(input);
    let root = output.root.expect("root exists");
    let head = element_children(&output, root)[0];
    let script = single_element_child(&output, head, Tag::Script);
    // "</b>" is not the appropriate end tag, so it stays script text.
    assert_eq!(text_of(&output, script), "if (a < b) document.write('</b>');");
    check_tree_invariants(&output, input.as_bytes());
}

#[test]
fn title_content_decodes_character_references() {
    let output = parse_str("<title>Tom &amp; Jerry</title>");
    let root = output.root.expect("root exists");
    let head = element_children(&output, root)[0];
    let title = single_element_child(&output, head, Tag::Title);
    assert_eq!(text_of(&output, title), "Tom & Jerry");
}

#[test]
fn svg_subtree_is_in_the_svg_namespace() {
    let input = "<svg viewbox=\"0 0 1 1\"><circle/></svg>";
    let output = parse_str(input);
    let body = body_of(&output);
    let svg = element_children(&output, body)[0];
    let svg_element = output.node(svg).as_element().expect("svg");
    assert_eq!(svg_element.tag, Tag::Svg);
    assert_eq!(svg_element.namespace, Namespace::Svg);
    assert_eq!(svg_element.attributes[0].name, "viewBox");

    let circle = element_children(&output, svg)[0];
    let circle_element = output.node(circle).as_element().expect("circle");
    assert_eq!(circle_element.tag, Tag::Unknown);
    assert_eq!(circle_element.namespace, Namespace::Svg);
    // The self-closing flag was acknowledged, so no error for it.
    assert!(
        !output
            .errors
            .iter()
            .any(|e| e.kind == ErrorKind::UnacknowledgedSelfClosingTag),
        "errors: {:?}",
        output.errors
    );
    check_tree_invariants(&output, input.as_bytes());
}

#[test]
fn cdata_only_parses_inside_foreign_content() {
    let output = parse_str("<svg><![CDATA[x < y]]></svg>");
    let body = body_of(&output);
    let svg = element_children(&output, body)[0];
    let children = output.node(svg).children().expect("svg children");
    assert_eq!(children.len(), 1);
    assert!(matches!(output.node(children[0]).kind, NodeKind::Cdata(_)));
    assert_eq!(text_of(&output, svg), "x < y");
}

#[test]
fn html_breakout_tags_pop_out_of_foreign_content() {
    let input = "<svg><desc>d</desc><p>para";
    let output = parse_str(input);
    let body = body_of(&output);
    let children = element_children(&output, body);
    // <p> is a breakout tag: it closes the SVG subtree and lands in the body.
    assert_eq!(children.len(), 2);
    assert_eq!(output.node(children[0]).tag(), Some(Tag::Svg));
    assert_eq!(output.node(children[1]).tag(), Some(Tag::P));
    assert_eq!(text_of(&output, children[1]), "para");
    check_tree_invariants(&output, input.as_bytes());
}

#[test]
fn mathml_annotation_xml_with_html_encoding_is_an_integration_point() {
    let input = "<math><annotation-xml encoding=\"text/html\"><p>x</p></annotation-xml></math>";
    let output = parse_str(input);
    let body = body_of(&output);
    let math = element_children(&output, body)[0];
    assert_eq!(
        output.node(math).as_element().expect("math").namespace,
        Namespace::MathMl
    );
    let annotation = element_children(&output, math)[0];
    let p = element_children(&output, annotation)[0];
    let p_element = output.node(p).as_element().expect("p");
    assert_eq!(p_element.tag, Tag::P);
    assert_eq!(p_element.namespace, Namespace::Html);
}

#[test]
fn frameset_document_replaces_the_body() {
    let input = "<frameset><frame></frameset>after";
    let output = parse_str(input);
    let root = output.root.expect("root exists");
    let children = element_children(&output, root);
    assert_eq!(children.len(), 2, "head and frameset");
    assert_eq!(output.node(children[1]).tag(), Some(Tag::Frameset));
    let frame = element_children(&output, children[1])[0];
    assert_eq!(output.node(frame).tag(), Some(Tag::Frame));
}

#[test]
fn select_in_table_closes_on_table_parts() {
    let input = "<table><tr><td><select><option>one<td>two";
    let output = parse_str(input);
    let body = body_of(&output);
    let table = element_children(&output, body)[0];
    let tbody = single_element_child(&output, table, Tag::Tbody);
    let tr = single_element_child(&output, tbody, Tag::Tr);
    let cells = element_children(&output, tr);
    assert_eq!(cells.len(), 2);
    let select = single_element_child(&output, cells[0], Tag::Select);
    let option = single_element_child(&output, select, Tag::Option);
    assert_eq!(text_of(&output, option), "one");
    assert_eq!(text_of(&output, cells[1]), "two");
}

#[test]
fn end_of_file_closes_elements_with_implicit_flags() {
    let output = parse_str("<div><span>text");
    let body = body_of(&output);
    let div = single_element_child(&output, body, Tag::Div);
    let span = single_element_child(&output, div, Tag::Span);
    assert!(output.node(div).parse_flags.contains(ParseFlags::IMPLICIT_END_TAG));
    assert!(output.node(span).parse_flags.contains(ParseFlags::IMPLICIT_END_TAG));
    // An unclosed <div>/<span> at EOF is a parse error (unlike <p>).
    assert!(output.errors.iter().any(|e| e.kind == ErrorKind::Parser));
}

#[test]
fn element_positions_and_original_text_track_the_source() {
    let input = "<!DOCTYPE html>\n<html>\n<body>\n<p class=\"a\">x</p>\n</body>\n</html>";
    let output = parse_str(input);
    let body = body_of(&output);
    let p = single_element_child(&output, body, Tag::P);
    let element = output.node(p).as_element().expect("p");
    assert_eq!(element.start_pos.line, 4);
    assert_eq!(element.start_pos.column, 1);
    assert_eq!(
        output.original_text(element.original_tag),
        b"<p class=\"a\">"
    );
    assert_eq!(output.original_text(element.original_end_tag), b"</p>");
    check_tree_invariants(&output, input.as_bytes());
}

#[test]
fn max_errors_caps_the_recorded_diagnostics() {
    let options = ParseOptions {
        max_errors: Some(2),
        ..ParseOptions::default()
    };
    // Four duplicate attributes, each an error, plus the missing doctype.
    let output = parse_with_options(
        &options,
        b"<a x=1 x=2 x=3 x=4 x=5>",
    );
    assert_eq!(output.errors.len(), 2);
}

#[test]
fn stop_on_first_error_aborts_the_parse() {
    let options = ParseOptions {
        stop_on_first_error: true,
        ..ParseOptions::default()
    };
    let output = parse_with_options(&options, b"<!DOCTYPE html>x</nosuchtag>more");
    // The bogus end tag is the first error; "more" is never parsed.
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, ErrorKind::Parser);
    let body = body_of(&output);
    assert_eq!(text_of(&output, body), "x");
}

#[test]
fn comments_attach_where_they_appear() {
    let input = "<!--before--><!DOCTYPE html><p>x</p><!--after-->";
    let output = parse_str(input);
    let document_children = output
        .node(output.document)
        .children()
        .expect("document children");
    assert!(matches!(
        output.node(document_children[0]).kind,
        NodeKind::Comment(_)
    ));
    let body = body_of(&output);
    let body_children = output.node(body).children().expect("body children");
    let last = *body_children.last().expect("comment in body");
    let comment = output.node(last).as_text().expect("comment text");
    assert_eq!(comment.text, "after");
}

#[test]
fn duplicate_html_attributes_merge_onto_the_root() {
    let output = parse_str("<html lang=en><html class=x>");
    let root = output.root.expect("root exists");
    let element = output.node(root).as_element().expect("html");
    assert_eq!(element.attributes.len(), 2);
    assert_eq!(element.attributes[0].name, "lang");
    assert_eq!(element.attributes[1].name, "class");
    assert!(output.errors.iter().any(|e| e.kind == ErrorKind::Parser));
}

#[test]
fn whitespace_only_text_produces_whitespace_nodes() {
    let output = parse_str("<p>   </p>");
    let body = body_of(&output);
    let p = element_children(&output, body)[0];
    let children = output.node(p).children().expect("p children");
    assert_eq!(children.len(), 1);
    assert!(matches!(
        output.node(children[0]).kind,
        NodeKind::Whitespace(_)
    ));
}
