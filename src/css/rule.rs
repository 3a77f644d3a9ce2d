//! CSS rule formatting.
//!
//! One rule per (icon, color) pair:
//!
//! ```text
//! .icon-arrowff0000 {
//!     background-image: url("data:image/svg+xml,%3Csvg...");
//!     width:20px; height:20px;
//! }
//! ```

use std::path::Path;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::Options;

/// Characters left literal by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Derive the selector token for an icon from its path.
///
/// Takes the file stem, lower-cases it and replaces every `.` or whitespace
/// character with `-`: `My Icon.V2.svg` becomes `my-icon-v2`.
pub fn normalize_file_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();

    stem.to_lowercase()
        .chars()
        .map(|c| if c == '.' || c.is_whitespace() { '-' } else { c })
        .collect()
}

/// Selector suffix for a fill color: leading `#` stripped, lower-cased.
pub fn color_suffix(color: &str) -> String {
    color.strip_prefix('#').unwrap_or(color).to_lowercase()
}

/// Whether `s` can be used inside a class selector without escaping.
pub fn is_css_ident(s: &str) -> bool {
    s.bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Encode optimized SVG text as a `data:` URI.
pub fn data_uri(svg: &str) -> String {
    format!(
        "data:image/svg+xml,{}",
        utf8_percent_encode(svg, URI_COMPONENT)
    )
}

/// Format a single rule block.
///
/// `width` / `height` are only emitted when `options.include_size` is set.
pub fn build_css_rule(
    name: &str,
    color_suffix: &str,
    data_uri: &str,
    width: &str,
    height: &str,
    options: &Options,
) -> String {
    let mut rule = format!(
        "{}{}{}{} {{\n    background-image: url(\"{}\");\n",
        options.selector_prefix, options.class_prefix, name, color_suffix, data_uri
    );
    if options.include_size {
        rule.push_str(&format!("    width:{width}; height:{height};\n"));
    }
    rule.push_str("}\n");
    rule
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_file_name() {
        assert_eq!(normalize_file_name(Path::new("My Icon.V2.svg")), "my-icon-v2");
        assert_eq!(normalize_file_name(Path::new("icons/arrow.svg")), "arrow");
        assert_eq!(normalize_file_name(Path::new("a\tb.svg")), "a-b");
        assert_eq!(normalize_file_name(Path::new("plain")), "plain");
    }

    #[test]
    fn test_color_suffix() {
        assert_eq!(color_suffix("#FF0000"), "ff0000");
        assert_eq!(color_suffix("red"), "red");
        assert_eq!(color_suffix("##abc"), "#abc");
    }

    #[test]
    fn test_is_css_ident() {
        assert!(is_css_ident("my-icon_v2"));
        assert!(!is_css_ident("rgb(0,0,0)"));
        assert!(!is_css_ident("a b"));
    }

    #[test]
    fn test_data_uri_matches_encode_uri_component() {
        assert_eq!(
            data_uri(r##"<svg fill="#f00" a='(x)*'/>"##),
            "data:image/svg+xml,%3Csvg%20fill%3D%22%23f00%22%20a%3D'(x)*'%2F%3E"
        );
        assert_eq!(data_uri("é"), "data:image/svg+xml,%C3%A9");
    }

    #[test]
    fn test_build_css_rule_without_size() {
        let options = Options::default();
        let rule = build_css_rule("arrow", "", "data:x", "20px", "20px", &options);
        assert_eq!(
            rule,
            ".icon-arrow {\n    background-image: url(\"data:x\");\n}\n"
        );
    }

    #[test]
    fn test_build_css_rule_with_size_and_color() {
        let options = Options {
            include_size: true,
            selector_prefix: "#".into(),
            class_prefix: "i-".into(),
            ..Options::default()
        };
        let rule = build_css_rule("arrow", "ff0000", "data:x", "20px", "50%", &options);
        assert_eq!(
            rule,
            "#i-arrowff0000 {\n    background-image: url(\"data:x\");\n    width:20px; height:50%;\n}\n"
        );
    }
}
