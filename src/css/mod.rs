//! CSS output: rule formatting and stylesheet minification.

mod minify;
mod rule;

pub use minify::minify_css;
pub use rule::{build_css_rule, color_suffix, data_uri, is_css_ident, normalize_file_name};
