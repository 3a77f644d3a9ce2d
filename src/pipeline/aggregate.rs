//! Rule accumulation and the final flush.

use std::path::PathBuf;

use super::OutputRecord;
use crate::config::Options;
use crate::css::minify_css;
use crate::debug;

/// Ordered rule accumulator, owned by one transform instance.
#[derive(Debug, Default)]
pub struct Aggregator {
    rules: Vec<String>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append rules, keeping their order.
    pub fn extend(&mut self, rules: impl IntoIterator<Item = String>) {
        self.rules.extend(rules);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Join all rules with `\n` into the single output record.
    ///
    /// With `options.minify`, the joined text goes through lightningcss;
    /// if that fails the unminified text is kept.
    pub fn flush(self, options: &Options) -> OutputRecord {
        let mut content = self.rules.join("\n");

        if options.minify && !content.is_empty() {
            match minify_css(&content) {
                Some(minified) => content = minified,
                None => debug!("css"; "minification failed, keeping unminified output"),
            }
        }

        OutputRecord {
            path: PathBuf::from(options.output_file_name()),
            content,
        }
    }
}
