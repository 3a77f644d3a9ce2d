//! SVG optimization using usvg.
//!
//! The [`Optimizer`] trait is the seam between the pipeline and whatever
//! minifies SVG text. The pipeline only relies on "text in, text out,
//! eventually".

use std::future::Future;

use quick_xml::Reader;
use quick_xml::events::Event;

use super::OptimizeError;

/// Asynchronous SVG optimizer.
///
/// One call is made per (file, color) unit of work. Implementations must be
/// shareable across tasks, since the color variants of one file are
/// optimized concurrently.
pub trait Optimizer: Send + Sync + 'static {
    fn optimize(&self, svg: String) -> impl Future<Output = Result<String, OptimizeError>> + Send;
}

/// Options for SVG optimization
#[derive(Debug, Clone)]
pub struct OptimizeOptions {
    /// DPI used by usvg to resolve absolute units.
    pub dpi: f32,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self { dpi: 96.0 }
    }
}

/// Optimize SVG using usvg
///
/// Parses and re-serializes the document without indentation. usvg resolves
/// inherited presentation attributes while doing so, which is what makes a
/// root-level `fill` reach every shape.
///
/// usvg is built without text shaping and would drop `<text>` silently, so
/// such documents are rejected with [`OptimizeError::Text`].
pub fn optimize_svg(content: &[u8], options: &OptimizeOptions) -> Result<String, OptimizeError> {
    if has_text_element(content) {
        return Err(OptimizeError::Text);
    }

    let usvg_options = usvg::Options {
        dpi: options.dpi,
        ..Default::default()
    };

    let tree = usvg::Tree::from_data(content, &usvg_options)?;

    let write_options = usvg::WriteOptions {
        indent: usvg::Indent::None,
        ..Default::default()
    };

    Ok(tree.to_string(&write_options))
}

/// Whether the document contains a `<text>` element anywhere.
///
/// Markup errors end the scan; usvg reports them itself.
fn has_text_element(content: &[u8]) -> bool {
    let mut reader = Reader::from_reader(content);
    loop {
        match reader.read_event() {
            Ok(Event::Start(elem) | Event::Empty(elem))
                if elem.local_name().as_ref() == b"text" =>
            {
                return true;
            }
            Ok(Event::Eof) | Err(_) => return false,
            Ok(_) => {}
        }
    }
}

/// Default optimizer: usvg on a blocking worker thread.
#[derive(Debug, Clone, Default)]
pub struct UsvgOptimizer {
    options: OptimizeOptions,
}

impl UsvgOptimizer {
    pub fn new(options: OptimizeOptions) -> Self {
        Self { options }
    }
}

impl Optimizer for UsvgOptimizer {
    async fn optimize(&self, svg: String) -> Result<String, OptimizeError> {
        let options = self.options.clone();
        tokio::task::spawn_blocking(move || optimize_svg(svg.as_bytes(), &options)).await?
    }
}

/// Returns the SVG unchanged (`--no-optimize`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Optimizer for Passthrough {
    async fn optimize(&self, svg: String) -> Result<String, OptimizeError> {
        Ok(svg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20">
    <!-- drawn by hand -->
    <rect x="2" y="2" width="16" height="16"/>
</svg>"#;

    #[test]
    fn test_optimize_svg_strips_comments() {
        let out = optimize_svg(ICON.as_bytes(), &OptimizeOptions::default()).unwrap();
        assert!(out.starts_with("<svg"));
        assert!(out.contains(r#"width="20""#));
        assert!(!out.contains("drawn by hand"));
    }

    #[test]
    fn test_optimize_svg_rejects_garbage() {
        assert!(optimize_svg(b"definitely not svg", &OptimizeOptions::default()).is_err());
    }

    #[test]
    fn test_optimize_svg_rejects_text() {
        let svg = br#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20"><text x="1" y="10">Hi</text></svg>"#;
        assert!(matches!(
            optimize_svg(svg, &OptimizeOptions::default()),
            Err(OptimizeError::Text)
        ));

        let nested = br#"<svg xmlns="http://www.w3.org/2000/svg"><g><svg:text xmlns:svg="http://www.w3.org/2000/svg"/></g></svg>"#;
        assert!(has_text_element(nested));
        assert!(!has_text_element(ICON.as_bytes()));
    }

    #[tokio::test]
    async fn test_usvg_optimizer() {
        let optimizer = UsvgOptimizer::default();
        let out = optimizer.optimize(ICON.to_string()).await.unwrap();
        assert!(out.starts_with("<svg"));
        assert!(matches!(
            optimizer.optimize("<svg".to_string()).await,
            Err(OptimizeError::Usvg(_))
        ));
    }

    #[tokio::test]
    async fn test_passthrough() {
        assert_eq!(Passthrough.optimize(ICON.to_string()).await.unwrap(), ICON);
    }
}
