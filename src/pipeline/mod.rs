//! SVG → CSS pipeline.
//!
//! A host hands over [`InputRecord`]s one at a time; the
//! [`SvgCssTransform`] turns each into one CSS rule per fill color and, at
//! end of input, emits a single [`OutputRecord`] holding the stylesheet.
//!
//! # Flow per record
//!
//! ```text
//! InputRecord
//!     │
//!     ├──► inspect ──► width / height (or defaults)
//!     │
//!     ├──► recolor × N ──► optimize × N (concurrent)
//!     │                         │
//!     │                         ▼  re-ordered by color index
//!     └──────────────────► build_css_rule × N ──► Aggregator
//! ```

mod aggregate;
mod error;
mod record;
mod transform;


pub use aggregate::Aggregator;
pub use error::{PipelineError, Stage};
pub use record::{Content, InputRecord, OutputRecord};
pub use transform::SvgCssTransform;
