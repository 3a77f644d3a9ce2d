//! svgcss - Embed SVG icons into a CSS stylesheet as data URIs.
//!
//! Each SVG becomes a `background-image` rule scoped to a class derived from
//! its file name, optionally expanded into one recolored rule per fill color.
//!
//! ```ignore
//! use svgcss::{InputRecord, Options, SvgCssTransform, UsvgOptimizer};
//!
//! let mut transform = SvgCssTransform::new(Options::default(), UsvgOptimizer::default());
//! transform.push(InputRecord::read(Path::new("icons/arrow.svg"))?).await?;
//! let stylesheet = transform.finish()?;
//! stylesheet.write_to(Path::new("public"))?;
//! ```

pub mod config;
pub mod css;
pub mod logger;
pub mod pipeline;
pub mod svg;

pub use config::{ConfigFile, Options, RawOptions};
pub use pipeline::{Content, InputRecord, OutputRecord, PipelineError, Stage, SvgCssTransform};
pub use svg::{OptimizeOptions, Optimizer, Passthrough, UsvgOptimizer};
