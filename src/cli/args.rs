//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;
use svgcss::RawOptions;

/// Embed SVG icons into a single CSS stylesheet as data URIs
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// SVG files or directories (searched recursively for *.svg)
    #[arg(value_name = "INPUT", required = true, value_hint = clap::ValueHint::AnyPath)]
    pub inputs: Vec<PathBuf>,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (optional; defaults apply when missing)
    #[arg(short = 'C', long, default_value = "svgcss.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Directory the stylesheet is written to
    #[arg(short, long, default_value = ".", value_hint = clap::ValueHint::DirPath)]
    pub output: PathBuf,

    #[command(flatten)]
    pub css: CssArgs,

    /// Embed SVGs as-is instead of running them through usvg
    #[arg(long)]
    pub no_optimize: bool,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Overrides for the `[css]` config section.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct CssArgs {
    /// Output file stem [default: icons]
    #[arg(long)]
    pub file_name: Option<String>,

    /// Output file extension [default: css]
    #[arg(long)]
    pub extension: Option<String>,

    /// Prefix before the icon name in each selector [default: icon-]
    #[arg(long, allow_hyphen_values = true)]
    pub class_prefix: Option<String>,

    /// Selector-type prefix [default: .]
    #[arg(long)]
    pub selector_prefix: Option<String>,

    /// Emit width/height declarations
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub include_size: Option<bool>,

    /// Width used when an SVG declares none [default: 16px]
    #[arg(long)]
    pub default_width: Option<String>,

    /// Height used when an SVG declares none [default: 16px]
    #[arg(long)]
    pub default_height: Option<String>,

    /// Fill colors to expand each icon into (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub fill_colors: Option<Vec<String>>,

    /// Minify the generated stylesheet
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,
}

impl CssArgs {
    /// Supplied flags as config overrides; absent flags stay `None`.
    pub fn to_raw(&self) -> RawOptions {
        RawOptions {
            file_name: self.file_name.clone(),
            class_prefix: self.class_prefix.clone(),
            selector_prefix: self.selector_prefix.clone(),
            include_size: self.include_size,
            default_width: self.default_width.clone(),
            default_height: self.default_height.clone(),
            extension: self.extension.clone(),
            fill_colors: self.fill_colors.clone(),
            minify: self.minify,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_leave_overrides_empty() {
        let cli = Cli::try_parse_from(["svgcss", "icons"]).unwrap();
        assert_eq!(cli.inputs, [PathBuf::from("icons")]);
        assert_eq!(cli.config, PathBuf::from("svgcss.toml"));
        assert_eq!(cli.output, PathBuf::from("."));
        assert_eq!(cli.css.to_raw(), RawOptions::default());
        assert!(!cli.no_optimize);
    }

    #[test]
    fn test_css_overrides() {
        let cli = Cli::try_parse_from([
            "svgcss",
            "a.svg",
            "b.svg",
            "--fill-colors",
            "#FF0000,#00FF00",
            "--include-size",
            "--class-prefix",
            "-i-",
            "--minify",
            "false",
            "-o",
            "public",
        ])
        .unwrap();
        let raw = cli.css.to_raw();
        assert_eq!(cli.inputs.len(), 2);
        assert_eq!(
            raw.fill_colors,
            Some(vec!["#FF0000".to_string(), "#00FF00".to_string()])
        );
        assert_eq!(raw.include_size, Some(true));
        assert_eq!(raw.class_prefix.as_deref(), Some("-i-"));
        assert_eq!(raw.minify, Some(false));
        assert_eq!(cli.output, PathBuf::from("public"));
    }

    #[test]
    fn test_inputs_required() {
        assert!(Cli::try_parse_from(["svgcss", "--verbose"]).is_err());
    }
}
