//! Quirks-mode computation and doctype conformance checking.
//!
//! The identifier tables are the ones published in the HTML5 spec's "initial"
//! insertion mode; matching is ASCII case-insensitive, by prefix or exact
//! match as each table requires.

use crate::node::QuirksMode;
use crate::token::DoctypeData;

static QUIRKS_PUBLIC_ID_PREFIXES: &[&str] = &[
    "+//Silmaril//dtd html Pro v0r11 19970101//",
    "-//AdvaSoft Ltd//DTD HTML 3.0 asWedit + extensions//",
    "-//AS//DTD HTML 3.0 asWedit + extensions//",
    "-//IETF//DTD HTML 2.0 Level 1//",
    "-//IETF//DTD HTML 2.0 Level 2//",
    "-//IETF//DTD HTML 2.0 Strict Level 1//",
    "-//IETF//DTD HTML 2.0 Strict Level 2//",
    "-//IETF//DTD HTML 2.0 Strict//",
    "-//IETF//DTD HTML 2.0//",
    "-//IETF//DTD HTML 2.1E//",
    "-//IETF//DTD HTML 3.0//",
    "-//IETF//DTD HTML 3.2 Final//",
    "-//IETF//DTD HTML 3.2//",
    "-//IETF//DTD HTML 3//",
    "-//IETF//DTD HTML Level 0//",
    "-//IETF//DTD HTML Level 1//",
    "-//IETF//DTD HTML Level 2//",
    "-//IETF//DTD HTML Level 3//",
    "-//IETF//DTD HTML Strict Level 0//",
    "-//IETF//DTD HTML Strict Level 1//",
    "-//IETF//DTD HTML Strict Level 2//",
    "-//IETF//DTD HTML Strict Level 3//",
    "-//IETF//DTD HTML Strict//",
    "-//IETF//DTD HTML//",
    "-//Metrius//DTD Metrius Presentational//",
    "-//Microsoft//DTD Internet Explorer 2.0 HTML Strict//",
    "-//Microsoft//DTD Internet Explorer 2.0 HTML//",
    "-//Microsoft//DTD Internet Explorer 2.0 Tables//",
    "-//Microsoft//DTD Internet Explorer 3.0 HTML Strict//",
    "-//Microsoft//DTD Internet Explorer 3.0 HTML//",
    "-//Microsoft//DTD Internet Explorer 3.0 Tables//",
    "-//Netscape Comm. Corp.//DTD HTML//",
    "-//Netscape Comm. Corp.//DTD Strict HTML//",
    "-//O'Reilly and Associates//DTD HTML 2.0//",
    "-//O'Reilly and Associates//DTD HTML Extended 1.0//",
    "-//O'Reilly and Associates//DTD HTML Extended Relaxed 1.0//",
    "-//SoftQuad Software//DTD HoTMetaL PRO 6.0::19990601::)extensions to HTML 4.0//",
    "-//SoftQuad//DTD HoTMetaL PRO 4.0::19971010::extensions to HTML 4.0//",
    "-//Spyglass//DTD HTML 2.0 Extended//",
    "-//SQ//DTD HTML 2.0 HoTMetaL + extensions//",
    "-//Sun Microsystems Corp.//DTD HotJava HTML//",
    "-//Sun Microsystems Corp.//DTD HotJava Strict HTML//",
    "-//W3C//DTD HTML 3 1995-03-24//",
    "-//W3C//DTD HTML 3.2 Draft//",
    "-//W3C//DTD HTML 3.2 Final//",
    "-//W3C//DTD HTML 3.2//",
    "-//W3C//DTD HTML 3.2S Draft//",
    "-//W3C//DTD HTML 4.0 Frameset//",
    "-//W3C//DTD HTML 4.0 Transitional//",
    "-//W3C//DTD HTML Experimental 19960712//",
    "-//W3C//DTD HTML Experimental 970421//",
    "-//W3C//DTD W3 HTML//",
    "-//W3O//DTD W3 HTML 3.0//",
    "-//WebTechs//DTD Mozilla HTML 2.0//",
    "-//WebTechs//DTD Mozilla HTML//",
];

static QUIRKS_PUBLIC_ID_EXACT: &[&str] = &[
    "-//W3O//DTD W3 HTML Strict 3.0//EN//",
    "-/W3C/DTD HTML 4.0 Transitional/EN",
    "HTML",
];

static QUIRKS_SYSTEM_ID_EXACT: &[&str] =
    &["http://www.ibm.com/data/dtd/v11/ibmxhtml1-transitional.dtd"];

static LIMITED_QUIRKS_PUBLIC_ID_PREFIXES: &[&str] = &[
    "-//W3C//DTD XHTML 1.0 Frameset//",
    "-//W3C//DTD XHTML 1.0 Transitional//",
];

/// Prefixes that put the document in limited-quirks mode when a system id is
/// present, and full quirks mode when it is absent.
static LIMITED_QUIRKS_REQUIRES_SYSTEM_ID_PREFIXES: &[&str] = &[
    "-//W3C//DTD HTML 4.01 Frameset//",
    "-//W3C//DTD HTML 4.01 Transitional//",
];

fn matches_prefix(needle: &str, haystack: &[&str]) -> bool {
    haystack.iter().any(|prefix| {
        needle.len() >= prefix.len() && needle[..prefix.len()].eq_ignore_ascii_case(prefix)
    })
}

fn matches_exact(needle: &str, haystack: &[&str]) -> bool {
    haystack.iter().any(|entry| needle.eq_ignore_ascii_case(entry))
}

/// Maps a doctype token onto the document's rendering mode.
pub(crate) fn compute_quirks_mode(doctype: &DoctypeData) -> QuirksMode {
    let public_id = doctype.public_identifier.as_str();
    let system_id = doctype.system_identifier.as_str();
    if doctype.force_quirks
        || doctype.name != "html"
        || matches_prefix(public_id, QUIRKS_PUBLIC_ID_PREFIXES)
        || matches_exact(public_id, QUIRKS_PUBLIC_ID_EXACT)
        || matches_exact(system_id, QUIRKS_SYSTEM_ID_EXACT)
        || (matches_prefix(public_id, LIMITED_QUIRKS_REQUIRES_SYSTEM_ID_PREFIXES)
            && !doctype.has_system_identifier)
    {
        QuirksMode::Quirks
    } else if matches_prefix(public_id, LIMITED_QUIRKS_PUBLIC_ID_PREFIXES)
        || (matches_prefix(public_id, LIMITED_QUIRKS_REQUIRES_SYSTEM_ID_PREFIXES)
            && doctype.has_system_identifier)
    {
        QuirksMode::LimitedQuirks
    } else {
        QuirksMode::NoQuirks
    }
}

fn doctype_matches(
    doctype: &DoctypeData,
    public_id: &str,
    system_id: &str,
    allow_missing_system_id: bool,
) -> bool {
    doctype.public_identifier == public_id
        && (allow_missing_system_id || doctype.has_system_identifier)
        && doctype.system_identifier == system_id
}

/// True for `<!DOCTYPE html>` and the short list of legacy doctypes the spec
/// blesses; everything else is a parse error even when it does not trigger
/// quirks mode.
pub(crate) fn doctype_is_conforming(doctype: &DoctypeData) -> bool {
    let html_doctype = doctype.name == "html";
    if !html_doctype {
        return false;
    }
    if doctype.has_public_identifier {
        return html_doctype
            && (doctype_matches(
                doctype,
                "-//W3C//DTD HTML 4.0//EN",
                "http://www.w3.org/TR/REC-html40/strict.dtd",
                true,
            ) || doctype_matches(
                doctype,
                "-//W3C//DTD HTML 4.01//EN",
                "http://www.w3.org/TR/html4/strict.dtd",
                true,
            ) || doctype_matches(
                doctype,
                "-//W3C//DTD XHTML 1.0 Strict//EN",
                "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd",
                false,
            ) || doctype_matches(
                doctype,
                "-//W3C//DTD XHTML 1.1//EN",
                "http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd",
                false,
            ));
    }
    !doctype.has_system_identifier || doctype.system_identifier == "about:legacy-compat"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctype(name: &str, public_id: Option<&str>, system_id: Option<&str>) -> DoctypeData {
        DoctypeData {
            name: name.to_string(),
            public_identifier: public_id.unwrap_or("").to_string(),
            system_identifier: system_id.unwrap_or("").to_string(),
            force_quirks: false,
            has_public_identifier: public_id.is_some(),
            has_system_identifier: system_id.is_some(),
        }
    }

    #[test]
    fn modern_doctype_is_no_quirks_and_conforming() {
        let modern = doctype("html", None, None);
        assert_eq!(compute_quirks_mode(&modern), QuirksMode::NoQuirks);
        assert!(doctype_is_conforming(&modern));
    }

    #[test]
    fn force_quirks_and_wrong_names_trigger_quirks() {
        let mut forced = doctype("html", None, None);
        forced.force_quirks = true;
        assert_eq!(compute_quirks_mode(&forced), QuirksMode::Quirks);
        assert_eq!(
            compute_quirks_mode(&doctype("svg", None, None)),
            QuirksMode::Quirks
        );
    }

    #[test]
    fn legacy_public_id_prefixes_match_case_insensitively() {
        let legacy = doctype("html", Some("-//w3c//dtd html 3.2 final//EN"), None);
        assert_eq!(compute_quirks_mode(&legacy), QuirksMode::Quirks);
        assert!(!doctype_is_conforming(&legacy));
    }

    #[test]
    fn html_401_transitional_depends_on_system_id() {
        let public_id = "-//W3C//DTD HTML 4.01 Transitional//EN";
        let without = doctype("html", Some(public_id), None);
        assert_eq!(compute_quirks_mode(&without), QuirksMode::Quirks);
        let with = doctype(
            "html",
            Some(public_id),
            Some("http://www.w3.org/TR/html4/loose.dtd"),
        );
        assert_eq!(compute_quirks_mode(&with), QuirksMode::LimitedQuirks);
    }

    #[test]
    fn xhtml_transitional_is_limited_quirks() {
        let xhtml = doctype(
            "html",
            Some("-//W3C//DTD XHTML 1.0 Transitional//EN"),
            Some("http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd"),
        );
        assert_eq!(compute_quirks_mode(&xhtml), QuirksMode::LimitedQuirks);
    }

    #[test]
    fn blessed_legacy_doctypes_are_conforming() {
        let html401 = doctype(
            "html",
            Some("-//W3C//DTD HTML 4.01//EN"),
            Some("http://www.w3.org/TR/html4/strict.dtd"),
        );
        assert!(doctype_is_conforming(&html401));
        assert_eq!(compute_quirks_mode(&html401), QuirksMode::NoQuirks);

        let legacy_compat = doctype("html", None, Some("about:legacy-compat"));
        assert!(doctype_is_conforming(&legacy_compat));
    }

    #[test]
    fn ibm_system_id_is_full_quirks() {
        let ibm = doctype(
            "html",
            None,
            Some("http://www.ibm.com/data/dtd/v11/ibmxhtml1-transitional.dtd"),
        );
        assert_eq!(compute_quirks_mode(&ibm), QuirksMode::Quirks);
    }
}
