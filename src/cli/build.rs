//! Stylesheet build orchestration.
//!
//! Phases:
//! - **Config** - load `svgcss.toml`, layer CLI overrides, validate
//! - **Collect** - expand inputs into SVG files
//! - **Convert** - feed each file through the transform
//! - **Write** - emit the stylesheet into the output directory

use super::{args::Cli, scan::collect_svg_files};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use svgcss::{
    ConfigFile, InputRecord, Optimizer, Options, OutputRecord, Passthrough, SvgCssTransform,
    UsvgOptimizer, debug, log, logger::ProgressLine,
};

/// Build the stylesheet described by `cli` and return the written path.
pub async fn build(cli: &Cli) -> Result<PathBuf> {
    let config = ConfigFile::load(&cli.config)
        .with_context(|| format!("failed to load config `{}`", cli.config.display()))?;
    let options = config.css.clone().merge(cli.css.to_raw()).resolve();
    config.validate(&options).context("invalid configuration")?;

    let files = collect_svg_files(&cli.inputs)?;
    log!("build"; "{}", plural_count(files.len(), "svg file"));

    let output = if cli.no_optimize || !config.optimize.enable {
        convert(options, Passthrough, &files).await?
    } else {
        let optimizer = UsvgOptimizer::new(config.optimize.options());
        convert(options, optimizer, &files).await?
    };

    output
        .write_to(&cli.output)
        .with_context(|| format!("failed to write into `{}`", cli.output.display()))
}

async fn convert<O: Optimizer>(
    options: Options,
    optimizer: O,
    files: &[PathBuf],
) -> Result<OutputRecord> {
    let mut transform = SvgCssTransform::new(options, optimizer);
    debug!("config"; "{:?}", transform.options());
    let progress = ProgressLine::new("svg", files.len());

    for path in files {
        let record = read_record(path)?;
        transform.push(record).await?;
        progress.inc();
    }
    progress.finish();

    debug!("css"; "{} rules", transform.rule_count());
    Ok(transform.finish()?)
}

fn read_record(path: &Path) -> Result<InputRecord> {
    InputRecord::read(path).with_context(|| format!("failed to read `{}`", path.display()))
}

fn plural_count(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
