//! HTML tag names and the compact tag enum.
//!
//! The set is fixed at build time: every HTML5 tag plus the SVG/MathML names
//! the foreign-content tables refer to. Lookup is case-insensitive ASCII over
//! a sorted slice; the reverse direction yields the canonical lowercase name.
//! Anything outside the set maps to [`Tag::Unknown`], which keeps its original
//! spelling reachable through the element's original-tag span.

use crate::span::Span;

/// Tag enum for every element name the parser knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    Html,
    Head,
    Title,
    Base,
    Link,
    Meta,
    Style,
    Script,
    Noscript,
    Template,
    Body,
    Article,
    Section,
    Nav,
    Aside,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Hgroup,
    Header,
    Footer,
    Address,
    P,
    Hr,
    Pre,
    Blockquote,
    Ol,
    Ul,
    Li,
    Dl,
    Dt,
    Dd,
    Figure,
    Figcaption,
    Main,
    Div,
    A,
    Em,
    Strong,
    Small,
    S,
    Cite,
    Q,
    Dfn,
    Abbr,
    Data,
    Time,
    Code,
    Var,
    Samp,
    Kbd,
    Sub,
    Sup,
    I,
    B,
    U,
    Mark,
    Ruby,
    Rt,
    Rp,
    Bdi,
    Bdo,
    Span,
    Br,
    Wbr,
    Ins,
    Del,
    Image,
    Img,
    Iframe,
    Embed,
    Object,
    Param,
    Video,
    Audio,
    Source,
    Track,
    Canvas,
    Map,
    Area,
    Math,
    Mi,
    Mo,
    Mn,
    Ms,
    Mtext,
    Mglyph,
    Malignmark,
    AnnotationXml,
    Svg,
    Foreignobject,
    Desc,
    Table,
    Caption,
    Colgroup,
    Col,
    Tbody,
    Thead,
    Tfoot,
    Tr,
    Td,
    Th,
    Form,
    Fieldset,
    Legend,
    Label,
    Input,
    Button,
    Select,
    Datalist,
    Optgroup,
    Option,
    Textarea,
    Keygen,
    Output,
    Progress,
    Meter,
    Details,
    Summary,
    Menu,
    Menuitem,
    Applet,
    Acronym,
    Bgsound,
    Dir,
    Frame,
    Frameset,
    Noframes,
    Isindex,
    Listing,
    Xmp,
    Nextid,
    Noembed,
    Plaintext,
    Rb,
    Strike,
    Basefont,
    Big,
    Blink,
    Center,
    Font,
    Marquee,
    Multicol,
    Nobr,
    Spacer,
    Tt,
    Rtc,
    /// Any tag not in the known set. The original spelling survives in the
    /// element's `original_tag` span.
    Unknown,
}

/// Canonical lowercase names, indexed by enum discriminant.
static TAG_NAMES: [&str; 151] = [
    "html",
    "head",
    "title",
    "base",
    "link",
    "meta",
    "style",
    "script",
    "noscript",
    "template",
    "body",
    "article",
    "section",
    "nav",
    "aside",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "hgroup",
    "header",
    "footer",
    "address",
    "p",
    "hr",
    "pre",
    "blockquote",
    "ol",
    "ul",
    "li",
    "dl",
    "dt",
    "dd",
    "figure",
    "figcaption",
    "main",
    "div",
    "a",
    "em",
    "strong",
    "small",
    "s",
    "cite",
    "q",
    "dfn",
    "abbr",
    "data",
    "time",
    "code",
    "var",
    "samp",
    "kbd",
    "sub",
    "sup",
    "i",
    "b",
    "u",
    "mark",
    "ruby",
    "rt",
    "rp",
    "bdi",
    "bdo",
    "span",
    "br",
    "wbr",
    "ins",
    "del",
    "image",
    "img",
    "iframe",
    "embed",
    "object",
    "param",
    "video",
    "audio",
    "source",
    "track",
    "canvas",
    "map",
    "area",
    "math",
    "mi",
    "mo",
    "mn",
    "ms",
    "mtext",
    "mglyph",
    "malignmark",
    "annotation-xml",
    "svg",
    "foreignobject",
    "desc",
    "table",
    "caption",
    "colgroup",
    "col",
    "tbody",
    "thead",
    "tfoot",
    "tr",
    "td",
    "th",
    "form",
    "fieldset",
    "legend",
    "label",
    "input",
    "button",
    "select",
    "datalist",
    "optgroup",
    "option",
    "textarea",
    "keygen",
    "output",
    "progress",
    "meter",
    "details",
    "summary",
    "menu",
    "menuitem",
    "applet",
    "acronym",
    "bgsound",
    "dir",
    "frame",
    "frameset",
    "noframes",
    "isindex",
    "listing",
    "xmp",
    "nextid",
    "noembed",
    "plaintext",
    "rb",
    "strike",
    "basefont",
    "big",
    "blink",
    "center",
    "font",
    "marquee",
    "multicol",
    "nobr",
    "spacer",
    "tt",
    "rtc",
    "",
];

/// (name, tag) pairs sorted by name for binary search.
static TAGS_BY_NAME: [(&[u8], Tag); 150] = [
    (b"a", Tag::A),
    (b"abbr", Tag::Abbr),
    (b"acronym", Tag::Acronym),
    (b"address", Tag::Address),
    (b"annotation-xml", Tag::AnnotationXml),
    (b"applet", Tag::Applet),
    (b"area", Tag::Area),
    (b"article", Tag::Article),
    (b"aside", Tag::Aside),
    (b"audio", Tag::Audio),
    (b"b", Tag::B),
    (b"base", Tag::Base),
    (b"basefont", Tag::Basefont),
    (b"bdi", Tag::Bdi),
    (b"bdo", Tag::Bdo),
    (b"bgsound", Tag::Bgsound),
    (b"big", Tag::Big),
    (b"blink", Tag::Blink),
    (b"blockquote", Tag::Blockquote),
    (b"body", Tag::Body),
    (b"br", Tag::Br),
    (b"button", Tag::Button),
    (b"canvas", Tag::Canvas),
    (b"caption", Tag::Caption),
    (b"center", Tag::Center),
    (b"cite", Tag::Cite),
    (b"code", Tag::Code),
    (b"col", Tag::Col),
    (b"colgroup", Tag::Colgroup),
    (b"data", Tag::Data),
    (b"datalist", Tag::Datalist),
    (b"dd", Tag::Dd),
    (b"del", Tag::Del),
    (b"desc", Tag::Desc),
    (b"details", Tag::Details),
    (b"dfn", Tag::Dfn),
    (b"dir", Tag::Dir),
    (b"div", Tag::Div),
    (b"dl", Tag::Dl),
    (b"dt", Tag::Dt),
    (b"em", Tag::Em),
    (b"embed", Tag::Embed),
    (b"fieldset", Tag::Fieldset),
    (b"figcaption", Tag::Figcaption),
    (b"figure", Tag::Figure),
    (b"font", Tag::Font),
    (b"footer", Tag::Footer),
    (b"foreignobject", Tag::Foreignobject),
    (b"form", Tag::Form),
    (b"frame", Tag::Frame),
    (b"frameset", Tag::Frameset),
    (b"h1", Tag::H1),
    (b"h2", Tag::H2),
    (b"h3", Tag::H3),
    (b"h4", Tag::H4),
    (b"h5", Tag::H5),
    (b"h6", Tag::H6),
    (b"head", Tag::Head),
    (b"header", Tag::Header),
    (b"hgroup", Tag::Hgroup),
    (b"hr", Tag::Hr),
    (b"html", Tag::Html),
    (b"i", Tag::I),
    (b"iframe", Tag::Iframe),
    (b"image", Tag::Image),
    (b"img", Tag::Img),
    (b"input", Tag::Input),
    (b"ins", Tag::Ins),
    (b"isindex", Tag::Isindex),
    (b"kbd", Tag::Kbd),
    (b"keygen", Tag::Keygen),
    (b"label", Tag::Label),
    (b"legend", Tag::Legend),
    (b"li", Tag::Li),
    (b"link", Tag::Link),
    (b"listing", Tag::Listing),
    (b"main", Tag::Main),
    (b"malignmark", Tag::Malignmark),
    (b"map", Tag::Map),
    (b"mark", Tag::Mark),
    (b"marquee", Tag::Marquee),
    (b"math", Tag::Math),
    (b"menu", Tag::Menu),
    (b"menuitem", Tag::Menuitem),
    (b"meta", Tag::Meta),
    (b"meter", Tag::Meter),
    (b"mglyph", Tag::Mglyph),
    (b"mi", Tag::Mi),
    (b"mn", Tag::Mn),
    (b"mo", Tag::Mo),
    (b"ms", Tag::Ms),
    (b"mtext", Tag::Mtext),
    (b"multicol", Tag::Multicol),
    (b"nav", Tag::Nav),
    (b"nextid", Tag::Nextid),
    (b"nobr", Tag::Nobr),
    (b"noembed", Tag::Noembed),
    (b"noframes", Tag::Noframes),
    (b"noscript", Tag::Noscript),
    (b"object", Tag::Object),
    (b"ol", Tag::Ol),
    (b"optgroup", Tag::Optgroup),
    (b"option", Tag::Option),
    (b"output", Tag::Output),
    (b"p", Tag::P),
    (b"param", Tag::Param),
    (b"plaintext", Tag::Plaintext),
    (b"pre", Tag::Pre),
    (b"progress", Tag::Progress),
    (b"q", Tag::Q),
    (b"rb", Tag::Rb),
    (b"rp", Tag::Rp),
    (b"rt", Tag::Rt),
    (b"rtc", Tag::Rtc),
    (b"ruby", Tag::Ruby),
    (b"s", Tag::S),
    (b"samp", Tag::Samp),
    (b"script", Tag::Script),
    (b"section", Tag::Section),
    (b"select", Tag::Select),
    (b"small", Tag::Small),
    (b"source", Tag::Source),
    (b"spacer", Tag::Spacer),
    (b"span", Tag::Span),
    (b"strike", Tag::Strike),
    (b"strong", Tag::Strong),
    (b"style", Tag::Style),
    (b"sub", Tag::Sub),
    (b"summary", Tag::Summary),
    (b"sup", Tag::Sup),
    (b"svg", Tag::Svg),
    (b"table", Tag::Table),
    (b"tbody", Tag::Tbody),
    (b"td", Tag::Td),
    (b"template", Tag::Template),
    (b"textarea", Tag::Textarea),
    (b"tfoot", Tag::Tfoot),
    (b"th", Tag::Th),
    (b"thead", Tag::Thead),
    (b"time", Tag::Time),
    (b"title", Tag::Title),
    (b"tr", Tag::Tr),
    (b"track", Tag::Track),
    (b"tt", Tag::Tt),
    (b"u", Tag::U),
    (b"ul", Tag::Ul),
    (b"var", Tag::Var),
    (b"video", Tag::Video),
    (b"wbr", Tag::Wbr),
    (b"xmp", Tag::Xmp),
];

/// Length in bytes of the longest known tag name ("annotation-xml").
const LONGEST_TAG_NAME: usize = 14;

impl Tag {
    /// Canonical (lowercase) name for this tag; empty for [`Tag::Unknown`].
    pub fn normalized_name(self) -> &'static str {
        TAG_NAMES[self as usize]
    }

    /// Case-insensitive lookup from a raw tag name.
    pub fn from_name(name: &[u8]) -> Tag {
        if name.is_empty() || name.len() > LONGEST_TAG_NAME {
            return Tag::Unknown;
        }
        let mut folded = [0u8; LONGEST_TAG_NAME];
        for (slot, byte) in folded.iter_mut().zip(name) {
            *slot = byte.to_ascii_lowercase();
        }
        let folded = &folded[..name.len()];
        match TAGS_BY_NAME.binary_search_by(|(candidate, _)| candidate.cmp(&folded)) {
            Ok(index) => TAGS_BY_NAME[index].1,
            Err(_) => Tag::Unknown,
        }
    }
}

/// Narrows the original-text span of a tag token or element to just the tag
/// name, in its original case.
///
/// The span must cover a full `<tagname ...>` or `</tagname>` run; empty spans
/// pass through unchanged (parser-inserted elements have no original text).
pub fn tag_name_span(source: &[u8], span: Span) -> Span {
    if span.is_empty() {
        return span;
    }
    let bytes = &source[span.start..span.end];
    debug_assert!(bytes.len() >= 2, "tag original text must be at least <x");
    debug_assert_eq!(bytes[0], b'<');
    if bytes.get(1) == Some(&b'/') {
        // End tag: strip `</` and the closing `>`.
        Span::new(span.start + 2, span.end.saturating_sub(1).max(span.start + 2))
    } else {
        // Start tag: strip `<`, then cut at the first space or slash.
        let mut end = span.end - 1;
        for (offset, byte) in bytes[1..bytes.len() - 1].iter().enumerate() {
            if byte.is_ascii_whitespace() || *byte == b'/' {
                end = span.start + 1 + offset;
                break;
            }
        }
        Span::new(span.start + 1, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tag_round_trips_through_its_normalized_name() {
        for (_, tag) in TAGS_BY_NAME {
            assert_eq!(Tag::from_name(tag.normalized_name().as_bytes()), tag);
        }
    }

    #[test]
    fn lookup_table_is_strictly_sorted() {
        for window in TAGS_BY_NAME.windows(2) {
            assert!(window[0].0 < window[1].0);
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Tag::from_name(b"DIV"), Tag::Div);
        assert_eq!(Tag::from_name(b"DiV"), Tag::Div);
        assert_eq!(Tag::from_name(b"Annotation-XML"), Tag::AnnotationXml);
    }

    #[test]
    fn unknown_names_map_to_the_sentinel() {
        assert_eq!(Tag::from_name(b"frobnicate"), Tag::Unknown);
        assert_eq!(Tag::from_name(b""), Tag::Unknown);
        assert_eq!(Tag::from_name(b"averylongtagnamethatcannotmatch"), Tag::Unknown);
        assert_eq!(Tag::Unknown.normalized_name(), "");
    }

    #[test]
    fn tag_name_span_strips_tag_syntax() {
        let source = b"<DiV class=x></div>";
        let start = tag_name_span(source, Span::new(0, 13));
        assert_eq!(&source[start.start..start.end], b"DiV");
        let end = tag_name_span(source, Span::new(13, 19));
        assert_eq!(&source[end.start..end.end], b"div");
    }
}
