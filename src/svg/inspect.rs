//! Dimension extraction from the root `<svg>` element.

use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};

use super::{SvgError, is_svg_element};

/// Declared size of an SVG document, as CSS lengths.
///
/// `None` means the attribute is absent (or empty); the caller falls back to
/// the configured default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dimensions {
    pub width: Option<String>,
    pub height: Option<String>,
}

impl Dimensions {
    /// Resolve against defaults, returning `(width, height)`.
    pub fn or_defaults<'a>(&'a self, width: &'a str, height: &'a str) -> (&'a str, &'a str) {
        (
            self.width.as_deref().unwrap_or(width),
            self.height.as_deref().unwrap_or(height),
        )
    }
}

/// Read `width` / `height` from the first `<svg>` element.
///
/// The whole document is parsed so that malformed markup after the root
/// start tag is reported too. Purely numeric values get a `px` suffix;
/// anything else (`2em`, `50%`) is returned verbatim.
pub fn get_dimensions(svg: &str) -> Result<Dimensions, SvgError> {
    let mut reader = Reader::from_str(svg);
    let mut dimensions = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(elem) | Event::Empty(elem))
                if dimensions.is_none() && is_svg_element(&elem) =>
            {
                let width = read_attr(&elem, b"width").map_err(|e| SvgError::parse(&reader, e))?;
                let height =
                    read_attr(&elem, b"height").map_err(|e| SvgError::parse(&reader, e))?;
                dimensions = Some(Dimensions {
                    width: width.as_deref().and_then(css_length),
                    height: height.as_deref().and_then(css_length),
                });
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return Err(SvgError::parse(&reader, err)),
        }
    }

    dimensions.ok_or(SvgError::MissingRoot)
}

/// Read and unescape a single attribute value.
fn read_attr(elem: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>, String> {
    for attr in elem.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        if attr.key.as_ref() == key {
            let raw = std::str::from_utf8(&attr.value).map_err(|e| e.to_string())?;
            let value = unescape(raw).map_err(|e| e.to_string())?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

/// Convert a raw attribute value to a CSS length.
fn css_length(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else if is_plain_number(raw) {
        Some(format!("{raw}px"))
    } else {
        Some(raw.to_string())
    }
}

/// Digits with at most one decimal point, nothing else.
fn is_plain_number(value: &str) -> bool {
    let mut digits = 0;
    let mut dots = 0;
    for b in value.bytes() {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}
