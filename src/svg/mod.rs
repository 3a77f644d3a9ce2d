//! SVG processing utilities.
//!
//! Reads and rewrites the source SVG of each icon before it is embedded
//! into the stylesheet.
//!
//! # Modules
//!
//! - [`inspect`]: declared `width` / `height` of the root element
//! - [`recolor`]: `fill` override on the root element
//! - [`optimize`]: SVG minification behind the [`Optimizer`] trait (usvg)
//!
//! # Architecture
//!
//! ```text
//! SVG text (from input record)
//!         │
//!         ├──► inspect ──► Dimensions
//!         │
//!         ▼
//!    ┌─────────┐
//!    │ recolor │ ──► one copy per fill color (skipped without colors)
//!    └────┬────┘
//!         │
//!         ▼
//!    ┌──────────┐
//!    │ optimize │ ──► usvg round-trip, no indentation
//!    └──────────┘
//! ```

mod error;
mod inspect;
mod optimize;
mod recolor;

pub use error::{OptimizeError, SvgError};
pub use inspect::{Dimensions, get_dimensions};
pub use optimize::{OptimizeOptions, Optimizer, Passthrough, UsvgOptimizer, optimize_svg};
pub use recolor::set_fill_color;

use quick_xml::Reader;
use quick_xml::events::BytesStart;

/// Check whether an element is an `<svg>` element (namespace prefix ignored).
#[inline]
fn is_svg_element(elem: &BytesStart<'_>) -> bool {
    elem.local_name().as_ref() == b"svg"
}

impl SvgError {
    /// Build a parse error positioned at the reader's current offset.
    fn parse(reader: &Reader<&[u8]>, err: impl std::fmt::Display) -> Self {
        Self::Parse {
            position: reader.error_position(),
            message: err.to_string(),
        }
    }
}
