//! Fill color override for the root `<svg>` element.

use std::io::Cursor;

use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

use super::{SvgError, is_svg_element};

/// Set the `fill` attribute of the first `<svg>` element to `color`.
///
/// An existing `fill` is replaced; the rest of the document is written back
/// event by event, so text, comments and declarations stay untouched.
pub fn set_fill_color(svg: &str, color: &str) -> Result<String, SvgError> {
    let mut reader = Reader::from_str(svg);
    let mut writer = Writer::new(Cursor::new(Vec::with_capacity(svg.len() + color.len() + 8)));
    let mut recolored = false;

    loop {
        let event = match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(Event::Start(elem)) if !recolored && is_svg_element(&elem) => {
                recolored = true;
                Event::Start(with_fill(&elem, color).map_err(|e| SvgError::parse(&reader, e))?)
            }
            Ok(Event::Empty(elem)) if !recolored && is_svg_element(&elem) => {
                recolored = true;
                Event::Empty(with_fill(&elem, color).map_err(|e| SvgError::parse(&reader, e))?)
            }
            Ok(event) => event,
            Err(err) => return Err(SvgError::parse(&reader, err)),
        };
        writer
            .write_event(event)
            .map_err(|e| SvgError::Write(e.to_string()))?;
    }

    if !recolored {
        return Err(SvgError::MissingRoot);
    }

    String::from_utf8(writer.into_inner().into_inner()).map_err(|e| SvgError::Write(e.to_string()))
}

/// Copy an element, dropping any `fill` and appending the new one.
fn with_fill(elem: &BytesStart<'_>, color: &str) -> Result<BytesStart<'static>, String> {
    let name = std::str::from_utf8(elem.name().as_ref())
        .map_err(|e| e.to_string())?
        .to_owned();
    let mut recolored = BytesStart::new(name);

    // The copy is always double-quoted; values are re-escaped for it.
    for attr in elem.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        if attr.key.as_ref() == b"fill" {
            continue;
        }
        let key = std::str::from_utf8(attr.key.as_ref()).map_err(|e| e.to_string())?;
        let raw = std::str::from_utf8(&attr.value).map_err(|e| e.to_string())?;
        let value = unescape(raw).map_err(|e| e.to_string())?;
        recolored.push_attribute((key, &*value));
    }
    recolored.push_attribute(("fill", color));

    Ok(recolored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::get_dimensions;

    #[test]
    fn test_adds_fill() {
        let out = set_fill_color(r#"<svg width="20"><path d="M0 0h4"/></svg>"#, "#FF0000").unwrap();
        assert_eq!(
            out,
            r##"<svg width="20" fill="#FF0000"><path d="M0 0h4"/></svg>"##
        );
    }

    #[test]
    fn test_replaces_existing_fill() {
        let out = set_fill_color(r#"<svg fill="blue" height="4"/>"#, "red").unwrap();
        assert_eq!(out, r#"<svg height="4" fill="red"/>"#);
    }

    #[test]
    fn test_only_root_is_recolored() {
        let svg = r#"<svg><g fill="blue"><svg fill="green"/></g></svg>"#;
        let out = set_fill_color(svg, "red").unwrap();
        assert_eq!(
            out,
            r#"<svg fill="red"><g fill="blue"><svg fill="green"/></g></svg>"#
        );
    }

    #[test]
    fn test_preserves_prolog_and_text() {
        let svg = "<?xml version=\"1.0\"?>\n<!-- a &amp; b -->\n<svg><title>A &amp; B</title></svg>";
        let out = set_fill_color(svg, "#000").unwrap();
        assert_eq!(
            out,
            "<?xml version=\"1.0\"?>\n<!-- a &amp; b -->\n<svg fill=\"#000\"><title>A &amp; B</title></svg>"
        );
    }

    #[test]
    fn test_color_is_escaped() {
        let out = set_fill_color("<svg/>", r#"a"b"#).unwrap();
        assert_eq!(out, r#"<svg fill="a&quot;b"/>"#);
    }

    #[test]
    fn test_single_quoted_values_stay_well_formed() {
        let svg = r#"<svg aria-label='say "hi"' data-x="a &amp; b" width="4"><path/></svg>"#;
        let out = set_fill_color(svg, "red").unwrap();
        assert_eq!(
            out,
            r#"<svg aria-label="say &quot;hi&quot;" data-x="a &amp; b" width="4" fill="red"><path/></svg>"#
        );
        // Output parses again.
        assert_eq!(get_dimensions(&out).unwrap().width.as_deref(), Some("4px"));
    }

    #[test]
    fn test_colors_do_not_compound() {
        let original = r#"<svg width="20"/>"#;
        let red = set_fill_color(original, "red").unwrap();
        let green = set_fill_color(original, "green").unwrap();
        assert!(!green.contains("red"));
        assert_ne!(red, green);
        // Dimensions survive the rewrite.
        assert_eq!(get_dimensions(&green).unwrap().width.as_deref(), Some("20px"));
    }

    #[test]
    fn test_errors() {
        assert!(matches!(set_fill_color("<g/>", "red"), Err(SvgError::MissingRoot)));
        assert!(matches!(
            set_fill_color("<svg><g></svg>", "red"),
            Err(SvgError::Parse { .. })
        ));
    }
}
