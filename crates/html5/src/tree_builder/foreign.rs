//! Foreign-content (SVG/MathML) adjustment tables and integration points.
//!
//! HTML tokenization lowercases every name, so SVG's mixed-case tags and
//! attributes have to be case-corrected during tree construction, and the
//! xlink/xml/xmlns attributes get their namespaces back here too.

use crate::node::{Namespace, Node};
use crate::tag::Tag;
use crate::token::{AttributeNamespace, StartTagData, attribute_matches};

/// lowercase -> canonical SVG attribute spellings.
static SVG_ATTRIBUTE_REPLACEMENTS: &[(&str, &str)] = &[
    ("attributename", "attributeName"),
    ("attributetype", "attributeType"),
    ("basefrequency", "baseFrequency"),
    ("baseprofile", "baseProfile"),
    ("calcmode", "calcMode"),
    ("clippathunits", "clipPathUnits"),
    ("contentscripttype", "contentScriptType"),
    ("contentstyletype", "contentStyleType"),
    ("diffuseconstant", "diffuseConstant"),
    ("edgemode", "edgeMode"),
    ("externalresourcesrequired", "externalResourcesRequired"),
    ("filterres", "filterRes"),
    ("filterunits", "filterUnits"),
    ("glyphref", "glyphRef"),
    ("gradienttransform", "gradientTransform"),
    ("gradientunits", "gradientUnits"),
    ("kernelmatrix", "kernelMatrix"),
    ("kernelunitlength", "kernelUnitLength"),
    ("keypoints", "keyPoints"),
    ("keysplines", "keySplines"),
    ("keytimes", "keyTimes"),
    ("lengthadjust", "lengthAdjust"),
    ("limitingconeangle", "limitingConeAngle"),
    ("markerheight", "markerHeight"),
    ("markerunits", "markerUnits"),
    ("markerwidth", "markerWidth"),
    ("maskcontentunits", "maskContentUnits"),
    ("maskunits", "maskUnits"),
    ("numoctaves", "numOctaves"),
    ("pathlength", "pathLength"),
    ("patterncontentunits", "patternContentUnits"),
    ("patterntransform", "patternTransform"),
    ("patternunits", "patternUnits"),
    ("pointsatx", "pointsAtX"),
    ("pointsaty", "pointsAtY"),
    ("pointsatz", "pointsAtZ"),
    ("preservealpha", "preserveAlpha"),
    ("preserveaspectratio", "preserveAspectRatio"),
    ("primitiveunits", "primitiveUnits"),
    ("refx", "refX"),
    ("refy", "refY"),
    ("repeatcount", "repeatCount"),
    ("repeatdur", "repeatDur"),
    ("requiredextensions", "requiredExtensions"),
    ("requiredfeatures", "requiredFeatures"),
    ("specularconstant", "specularConstant"),
    ("specularexponent", "specularExponent"),
    ("spreadmethod", "spreadMethod"),
    ("startoffset", "startOffset"),
    ("stddeviation", "stdDeviation"),
    ("stitchtiles", "stitchTiles"),
    ("surfacescale", "surfaceScale"),
    ("systemlanguage", "systemLanguage"),
    ("tablevalues", "tableValues"),
    ("targetx", "targetX"),
    ("targety", "targetY"),
    ("textlength", "textLength"),
    ("viewbox", "viewBox"),
    ("viewtarget", "viewTarget"),
    ("xchannelselector", "xChannelSelector"),
    ("ychannelselector", "yChannelSelector"),
    ("zoomandpan", "zoomAndPan"),
];

/// lowercase -> canonical SVG tag spellings.
static SVG_TAG_REPLACEMENTS: &[(&str, &str)] = &[
    ("altglyph", "altGlyph"),
    ("altglyphdef", "altGlyphDef"),
    ("altglyphitem", "altGlyphItem"),
    ("animatecolor", "animateColor"),
    ("animatemotion", "animateMotion"),
    ("animatetransform", "animateTransform"),
    ("clippath", "clipPath"),
    ("feblend", "feBlend"),
    ("fecolormatrix", "feColorMatrix"),
    ("fecomponenttransfer", "feComponentTransfer"),
    ("fecomposite", "feComposite"),
    ("feconvolvematrix", "feConvolveMatrix"),
    ("fediffuselighting", "feDiffuseLighting"),
    ("fedisplacementmap", "feDisplacementMap"),
    ("fedistantlight", "feDistantLight"),
    ("feflood", "feFlood"),
    ("fefunca", "feFuncA"),
    ("fefuncb", "feFuncB"),
    ("fefuncg", "feFuncG"),
    ("fefuncr", "feFuncR"),
    ("fegaussianblur", "feGaussianBlur"),
    ("feimage", "feImage"),
    ("femerge", "feMerge"),
    ("femergenode", "feMergeNode"),
    ("femorphology", "feMorphology"),
    ("feoffset", "feOffset"),
    ("fepointlight", "fePointLight"),
    ("fespecularlighting", "feSpecularLighting"),
    ("fespotlight", "feSpotLight"),
    ("fetile", "feTile"),
    ("feturbulence", "feTurbulence"),
    ("foreignobject", "foreignObject"),
    ("glyphref", "glyphRef"),
    ("lineargradient", "linearGradient"),
    ("radialgradient", "radialGradient"),
    ("textpath", "textPath"),
];

/// Attributes that move into the xlink/xml/xmlns namespaces inside foreign
/// content, with their adjusted local names.
static FOREIGN_ATTRIBUTE_REPLACEMENTS: &[(&str, &str, AttributeNamespace)] = &[
    ("xlink:actuate", "actuate", AttributeNamespace::Xlink),
    ("xlink:href", "href", AttributeNamespace::Xlink),
    ("xlink:role", "role", AttributeNamespace::Xlink),
    ("xlink:show", "show", AttributeNamespace::Xlink),
    ("xlink:title", "title", AttributeNamespace::Xlink),
    ("xlink:type", "type", AttributeNamespace::Xlink),
    ("xml:base", "base", AttributeNamespace::Xml),
    ("xml:lang", "lang", AttributeNamespace::Xml),
    ("xml:space", "space", AttributeNamespace::Xml),
    ("xmlns", "xmlns", AttributeNamespace::Xmlns),
    ("xmlns:xlink", "xlink", AttributeNamespace::Xmlns),
];

/// The legal `xmlns` attribute value for each element namespace, indexed to
/// match [`Namespace`].
pub(crate) fn legal_xmlns(namespace: Namespace) -> &'static str {
    match namespace {
        Namespace::Html => "http://www.w3.org/1999/xhtml",
        Namespace::Svg => "http://www.w3.org/2000/svg",
        Namespace::MathMl => "http://www.w3.org/1998/Math/MathML",
    }
}

/// Case-corrects an SVG tag name. Returns the canonical mixed-case spelling,
/// or `None` when the name needs no correction. Tag names are stored as enums
/// during parsing (most SVG tags land on the unknown sentinel), so the rename
/// is offered as a lookup for clients rather than applied to the tree.
pub fn normalize_svg_tagname(tagname: &str) -> Option<&'static str> {
    SVG_TAG_REPLACEMENTS
        .iter()
        .find(|(lowercase, _)| tagname.eq_ignore_ascii_case(lowercase))
        .map(|(_, canonical)| *canonical)
}

/// Restores canonical case on SVG attribute names.
pub(crate) fn adjust_svg_attributes(start_tag: &mut StartTagData) {
    for attribute in &mut start_tag.attributes {
        if let Some((_, canonical)) = SVG_ATTRIBUTE_REPLACEMENTS
            .iter()
            .find(|(lowercase, _)| attribute.name == *lowercase)
        {
            attribute.name = (*canonical).to_string();
        }
    }
}

/// Restores `definitionURL` on MathML elements.
pub(crate) fn adjust_mathml_attributes(start_tag: &mut StartTagData) {
    for attribute in &mut start_tag.attributes {
        if attribute.name == "definitionurl" {
            attribute.name = "definitionURL".to_string();
        }
    }
}

/// Moves xlink/xml/xmlns attributes into their namespaces and strips the
/// prefix from the stored name.
pub(crate) fn adjust_foreign_attributes(start_tag: &mut StartTagData) {
    for attribute in &mut start_tag.attributes {
        if let Some((_, local_name, namespace)) = FOREIGN_ATTRIBUTE_REPLACEMENTS
            .iter()
            .find(|(from, ..)| attribute.name == *from)
        {
            attribute.namespace = *namespace;
            attribute.name = (*local_name).to_string();
        }
    }
}

/// MathML text integration points: `<mi>`, `<mo>`, `<mn>`, `<ms>`, `<mtext>`.
pub(crate) fn is_mathml_integration_point(node: &Node) -> bool {
    let Some(element) = node.as_element() else {
        return false;
    };
    element.namespace == Namespace::MathMl
        && matches!(element.tag, Tag::Mi | Tag::Mo | Tag::Mn | Tag::Ms | Tag::Mtext)
}

/// HTML integration points: SVG `<foreignObject>`, `<desc>`, `<title>`, and
/// `<annotation-xml>` with an HTML-ish encoding attribute.
pub(crate) fn is_html_integration_point(node: &Node) -> bool {
    let Some(element) = node.as_element() else {
        return false;
    };
    (element.namespace == Namespace::Svg
        && matches!(element.tag, Tag::Foreignobject | Tag::Desc | Tag::Title))
        || (element.tag == Tag::AnnotationXml
            && (attribute_matches(&element.attributes, "encoding", "text/html")
                || attribute_matches(&element.attributes, "encoding", "application/xhtml+xml")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::{SourcePosition, Span};
    use crate::token::Attribute;

    fn start_tag_with(names: &[&str]) -> StartTagData {
        StartTagData {
            tag: Tag::Svg,
            attributes: names
                .iter()
                .map(|name| Attribute {
                    namespace: AttributeNamespace::None,
                    name: (*name).to_string(),
                    value: String::new(),
                    original_name: Span::EMPTY,
                    original_value: Span::EMPTY,
                    name_start: SourcePosition::EMPTY,
                    name_end: SourcePosition::EMPTY,
                    value_start: SourcePosition::EMPTY,
                    value_end: SourcePosition::EMPTY,
                })
                .collect(),
            is_self_closing: false,
        }
    }

    #[test]
    fn svg_attribute_case_is_restored() {
        let mut tag = start_tag_with(&["viewbox", "id", "preserveaspectratio"]);
        adjust_svg_attributes(&mut tag);
        let names: Vec<&str> = tag.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["viewBox", "id", "preserveAspectRatio"]);
    }

    #[test]
    fn mathml_definitionurl_is_restored() {
        let mut tag = start_tag_with(&["definitionurl"]);
        adjust_mathml_attributes(&mut tag);
        assert_eq!(tag.attributes[0].name, "definitionURL");
    }

    #[test]
    fn foreign_attributes_gain_namespaces_and_lose_prefixes() {
        let mut tag = start_tag_with(&["xlink:href", "xmlns", "xmlns:xlink", "href"]);
        adjust_foreign_attributes(&mut tag);
        assert_eq!(tag.attributes[0].name, "href");
        assert_eq!(tag.attributes[0].namespace, AttributeNamespace::Xlink);
        assert_eq!(tag.attributes[1].namespace, AttributeNamespace::Xmlns);
        assert_eq!(tag.attributes[2].name, "xlink");
        assert_eq!(tag.attributes[2].namespace, AttributeNamespace::Xmlns);
        assert_eq!(tag.attributes[3].namespace, AttributeNamespace::None);
    }

    #[test]
    fn svg_tag_names_normalize_case_insensitively() {
        assert_eq!(normalize_svg_tagname("foreignobject"), Some("foreignObject"));
        assert_eq!(normalize_svg_tagname("FEBLEND"), Some("feBlend"));
        assert_eq!(normalize_svg_tagname("circle"), None);
    }
}
