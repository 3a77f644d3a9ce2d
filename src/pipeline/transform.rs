//! The SVG → CSS transform driver.
//!
//! ```text
//!   push(record) ──► Collecting ──► push(record) ──► ... ──► finish()
//!                        │                                      │
//!                        │ error                                ▼
//!                        ▼                                  Flushing
//!                     poisoned (every later call: Aborted)      │
//!                                                               ▼
//!                                                         OutputRecord
//! ```
//!
//! `push` returns only after every color variant of the record has been
//! optimized and its rules appended, so `finish` never races outstanding
//! optimizer work.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use super::{Aggregator, Content, InputRecord, OutputRecord, PipelineError, Stage};
use crate::config::Options;
use crate::css::{build_css_rule, color_suffix, data_uri, is_css_ident, normalize_file_name};
use crate::svg::{Optimizer, SvgError, get_dimensions, set_fill_color};
use crate::{debug, log};

/// One unit of optimizer work: a (file, color) pair.
struct Variant {
    color: Option<String>,
    svg: String,
}

/// Streaming SVG → CSS transform.
///
/// Construct one per run; rules never leak between instances.
pub struct SvgCssTransform<O: Optimizer> {
    options: Options,
    optimizer: Arc<O>,
    aggregator: Aggregator,
    failed: bool,
}

impl<O: Optimizer> SvgCssTransform<O> {
    pub fn new(options: Options, optimizer: O) -> Self {
        Self {
            options,
            optimizer: Arc::new(optimizer),
            aggregator: Aggregator::new(),
            failed: false,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Rules collected so far.
    pub fn rule_count(&self) -> usize {
        self.aggregator.len()
    }

    /// Process one input record completely.
    ///
    /// Returns the number of rules it produced (0 for an empty record).
    pub async fn push(&mut self, record: InputRecord) -> Result<usize, PipelineError> {
        if self.failed {
            return Err(PipelineError::Aborted);
        }
        let result = self.process(record).await;
        if result.is_err() {
            self.failed = true;
        }
        result
    }

    /// End of input: produce the stylesheet.
    pub fn finish(self) -> Result<OutputRecord, PipelineError> {
        if self.failed {
            return Err(PipelineError::Aborted);
        }
        let count = self.aggregator.len();
        let output = self.aggregator.flush(&self.options);
        debug!("css"; "{} rules -> {}", count, output.path.display());
        Ok(output)
    }

    /// Run over a channel of records until the sender side is dropped.
    pub async fn drive(
        mut self,
        mut records: mpsc::Receiver<InputRecord>,
    ) -> Result<OutputRecord, PipelineError> {
        while let Some(record) = records.recv().await {
            self.push(record).await?;
        }
        self.finish()
    }

    /// Run over an already collected set of records.
    pub async fn run(
        mut self,
        records: impl IntoIterator<Item = InputRecord>,
    ) -> Result<OutputRecord, PipelineError> {
        for record in records {
            self.push(record).await?;
        }
        self.finish()
    }

    async fn process(&mut self, record: InputRecord) -> Result<usize, PipelineError> {
        let InputRecord { path, content } = record;

        let bytes = match content {
            Content::Streaming => return Err(PipelineError::UnsupportedInput { path }),
            Content::Buffered(bytes) if !bytes.is_empty() => bytes,
            _ => {
                debug!("svg"; "skipping empty {}", path.display());
                return Ok(0);
            }
        };

        let svg = std::str::from_utf8(&bytes)
            .map_err(|e| malformed(&path, Stage::Inspect, e.into()))?;
        let dimensions = get_dimensions(svg).map_err(|e| malformed(&path, Stage::Inspect, e))?;

        let name = normalize_file_name(&path);
        if !is_css_ident(&name) {
            log!("warning"; "`{}` is not a plain CSS identifier ({})", name, path.display());
        }

        let variants = self.variants(&path, svg)?;
        let optimized = self.optimize_all(&path, variants).await?;

        let (width, height) =
            dimensions.or_defaults(&self.options.default_width, &self.options.default_height);
        let rules: Vec<String> = optimized
            .iter()
            .map(|variant| {
                let suffix = variant.color.as_deref().map(color_suffix).unwrap_or_default();
                build_css_rule(
                    &name,
                    &suffix,
                    &data_uri(&variant.svg),
                    width,
                    height,
                    &self.options,
                )
            })
            .collect();

        let count = rules.len();
        self.aggregator.extend(rules);
        debug!("svg"; "{} -> {} rule(s)", path.display(), count);
        Ok(count)
    }

    /// One variant per fill color, each recolored from the original text.
    fn variants(&self, path: &Path, svg: &str) -> Result<Vec<Variant>, PipelineError> {
        if self.options.fill_colors.is_empty() {
            return Ok(vec![Variant {
                color: None,
                svg: svg.to_owned(),
            }]);
        }

        self.options
            .fill_colors
            .iter()
            .map(|color| {
                let recolored =
                    set_fill_color(svg, color).map_err(|e| malformed(path, Stage::Recolor, e))?;
                Ok(Variant {
                    color: Some(color.clone()),
                    svg: recolored,
                })
            })
            .collect()
    }

    /// Optimize all variants concurrently, returning them in input order.
    async fn optimize_all(
        &self,
        path: &Path,
        variants: Vec<Variant>,
    ) -> Result<Vec<Variant>, PipelineError> {
        let mut colors = Vec::with_capacity(variants.len());
        let mut tasks = JoinSet::new();

        for (index, variant) in variants.into_iter().enumerate() {
            colors.push(variant.color);
            let optimizer = Arc::clone(&self.optimizer);
            let svg = variant.svg;
            tasks.spawn(async move { (index, optimizer.optimize(svg).await) });
        }

        // Completion order is arbitrary; slot results by their issue index.
        let mut slots: Vec<Option<String>> = vec![None; colors.len()];
        while let Some(joined) = tasks.join_next().await {
            let (index, result) = joined.map_err(|e| PipelineError::Optimizer {
                path: path.to_path_buf(),
                color: None,
                source: e.into(),
            })?;
            let svg = result.map_err(|source| PipelineError::Optimizer {
                path: path.to_path_buf(),
                color: colors[index].clone(),
                source,
            })?;
            slots[index] = Some(svg);
        }

        Ok(colors
            .into_iter()
            .zip(slots)
            .filter_map(|(color, svg)| svg.map(|svg| Variant { color, svg }))
            .collect())
    }
}

fn malformed(path: &Path, stage: Stage, source: SvgError) -> PipelineError {
    PipelineError::MalformedSvg {
        path: path.to_path_buf(),
        stage,
        source,
    }
}
