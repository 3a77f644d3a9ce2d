//! `[css]` section: stylesheet generation options.
//!
//! Fields are read into [`RawOptions`], where every key is optional, and
//! then resolved into [`Options`]. Defaults are applied only to keys that
//! were not supplied, so an explicit `fill_colors = []` stays distinguishable
//! from a missing key until resolution.

use serde::{Deserialize, Serialize};

use super::{ConfigDiagnostics, FieldPath};
use crate::css::{color_suffix, is_css_ident};

pub const DEFAULT_FILE_NAME: &str = "icons";
pub const DEFAULT_CLASS_PREFIX: &str = "icon-";
pub const DEFAULT_SELECTOR_PREFIX: &str = ".";
pub const DEFAULT_WIDTH: &str = "16px";
pub const DEFAULT_HEIGHT: &str = "16px";
pub const DEFAULT_EXTENSION: &str = "css";

/// Field paths used in diagnostics.
pub struct OptionsFields {
    pub file_name: FieldPath,
    pub class_prefix: FieldPath,
    pub selector_prefix: FieldPath,
    pub default_width: FieldPath,
    pub default_height: FieldPath,
    pub extension: FieldPath,
    pub fill_colors: FieldPath,
}

/// Options as supplied by the user, before defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawOptions {
    pub file_name: Option<String>,
    pub class_prefix: Option<String>,
    pub selector_prefix: Option<String>,
    pub include_size: Option<bool>,
    pub default_width: Option<String>,
    pub default_height: Option<String>,
    pub extension: Option<String>,
    pub fill_colors: Option<Vec<String>>,
    pub minify: Option<bool>,
}

impl RawOptions {
    pub const FIELDS: OptionsFields = OptionsFields {
        file_name: FieldPath::new("css.file_name"),
        class_prefix: FieldPath::new("css.class_prefix"),
        selector_prefix: FieldPath::new("css.selector_prefix"),
        default_width: FieldPath::new("css.default_width"),
        default_height: FieldPath::new("css.default_height"),
        extension: FieldPath::new("css.extension"),
        fill_colors: FieldPath::new("css.fill_colors"),
    };

    /// Layer `overrides` on top of `self`: supplied fields win.
    pub fn merge(self, overrides: RawOptions) -> Self {
        Self {
            file_name: overrides.file_name.or(self.file_name),
            class_prefix: overrides.class_prefix.or(self.class_prefix),
            selector_prefix: overrides.selector_prefix.or(self.selector_prefix),
            include_size: overrides.include_size.or(self.include_size),
            default_width: overrides.default_width.or(self.default_width),
            default_height: overrides.default_height.or(self.default_height),
            extension: overrides.extension.or(self.extension),
            fill_colors: overrides.fill_colors.or(self.fill_colors),
            minify: overrides.minify.or(self.minify),
        }
    }

    /// Apply defaults to every field that was not supplied.
    pub fn resolve(self) -> Options {
        Options {
            file_name: self.file_name.unwrap_or_else(|| DEFAULT_FILE_NAME.into()),
            class_prefix: self
                .class_prefix
                .unwrap_or_else(|| DEFAULT_CLASS_PREFIX.into()),
            selector_prefix: self
                .selector_prefix
                .unwrap_or_else(|| DEFAULT_SELECTOR_PREFIX.into()),
            include_size: self.include_size.unwrap_or(false),
            default_width: self.default_width.unwrap_or_else(|| DEFAULT_WIDTH.into()),
            default_height: self.default_height.unwrap_or_else(|| DEFAULT_HEIGHT.into()),
            extension: self.extension.unwrap_or_else(|| DEFAULT_EXTENSION.into()),
            fill_colors: self.fill_colors.unwrap_or_default(),
            minify: self.minify.unwrap_or(false),
        }
    }
}

/// Resolved, immutable stylesheet options.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Output file stem.
    pub file_name: String,
    /// Inserted before the normalized file name in each selector.
    pub class_prefix: String,
    /// Selector-type prefix, `.` for class selectors.
    pub selector_prefix: String,
    /// Emit `width` / `height` declarations.
    pub include_size: bool,
    /// Used when an SVG declares no width.
    pub default_width: String,
    /// Used when an SVG declares no height.
    pub default_height: String,
    /// Output file extension, without the dot.
    pub extension: String,
    /// One rule per color and icon; empty means a single uncolored rule.
    pub fill_colors: Vec<String>,
    /// Minify the generated stylesheet.
    pub minify: bool,
}

impl Default for Options {
    fn default() -> Self {
        RawOptions::default().resolve()
    }
}

impl Options {
    /// `<file_name>.<extension>`
    pub fn output_file_name(&self) -> String {
        format!("{}.{}", self.file_name, self.extension)
    }

    /// Validate resolved options.
    ///
    /// # Checks
    /// - output name parts are non-empty and contain no path separators
    /// - default sizes are non-empty
    /// - fill colors are non-empty, unique, and usable as a selector suffix
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let fields = &RawOptions::FIELDS;

        for (field, value) in [
            (fields.file_name, &self.file_name),
            (fields.extension, &self.extension),
        ] {
            if value.trim().is_empty() {
                diag.error(field, "must not be empty");
            } else if value.contains(['/', '\\']) {
                diag.error(field, format!("`{value}` must not contain path separators"));
            }
        }
        if self.extension.starts_with('.') {
            diag.error_with_hint(
                fields.extension,
                format!("`{}` starts with a dot", self.extension),
                format!("use `{}`", self.extension.trim_start_matches('.')),
            );
        }

        for (field, value) in [
            (fields.default_width, &self.default_width),
            (fields.default_height, &self.default_height),
        ] {
            if value.trim().is_empty() {
                diag.error(field, "must not be empty");
            }
        }

        let mut seen = Vec::with_capacity(self.fill_colors.len());
        for color in &self.fill_colors {
            let suffix = color_suffix(color);
            if suffix.is_empty() {
                diag.error(fields.fill_colors, format!("`{color}` is not a color"));
            } else if !is_css_ident(&suffix) {
                diag.error_with_hint(
                    fields.fill_colors,
                    format!("`{color}` cannot be used as a class-name suffix"),
                    "use a hex (`#ff0000`) or named (`red`) color",
                );
            } else if seen.contains(&suffix) {
                diag.error(
                    fields.fill_colors,
                    format!("`{color}` duplicates another color's selector"),
                );
            } else {
                seen.push(suffix);
            }
        }
    }
}
