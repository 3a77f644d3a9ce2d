//! Configuration management for `svgcss.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── options    # [css] section, RawOptions -> Options
//! ├── types/     # ConfigError, diagnostics, field paths
//! └── mod.rs     # ConfigFile (this file), [optimize] section
//! ```
//!
//! # Sections
//!
//! | Section      | Purpose                                         |
//! |--------------|-------------------------------------------------|
//! | `[css]`      | Output name, selectors, sizes, fill colors      |
//! | `[optimize]` | SVG optimizer settings                          |

mod options;
pub mod types;

pub use options::{Options, RawOptions};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::log;
use crate::svg::OptimizeOptions;
use serde::{Deserialize, Serialize};
use std::{fs, io, path::Path};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing svgcss.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Stylesheet options
    #[serde(default)]
    pub css: RawOptions,

    /// Optimizer settings
    #[serde(default)]
    pub optimize: OptimizeConfig,
}

/// `[optimize]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizeConfig {
    /// Run SVGs through usvg before encoding.
    pub enable: bool,
    /// DPI for unit resolution.
    pub dpi: f32,
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self {
            enable: true,
            dpi: 96.0,
        }
    }
}

impl OptimizeConfig {
    pub const DPI: FieldPath = FieldPath::new("optimize.dpi");

    pub fn options(&self) -> OptimizeOptions {
        OptimizeOptions { dpi: self.dpi }
    }
}

impl ConfigFile {
    /// Load configuration from a file path.
    ///
    /// A missing file is not an error: every option has a default.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate optimizer settings and the given resolved options together.
    pub fn validate(&self, options: &Options) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::default();
        options.validate(&mut diag);
        if self.optimize.dpi.is_nan() || self.optimize.dpi <= 0.0 {
            diag.error(OptimizeConfig::DPI, "must be a positive number");
        }
        diag.into_result()
    }
}

// ============================================================================
// test helpers
// ============================================================================

#[cfg(test)]
pub fn test_parse_config(content: &str) -> ConfigFile {
    let (parsed, ignored) = ConfigFile::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
