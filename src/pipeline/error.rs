//! Pipeline errors.
//!
//! Every error is fatal to the run: the host gets the failing stage and the
//! offending path, and no stylesheet is produced.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::svg::{OptimizeError, SvgError};

/// Processing stage an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Input,
    Inspect,
    Recolor,
    Optimize,
}

impl Stage {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Inspect => "inspect",
            Self::Recolor => "recolor",
            Self::Optimize => "optimize",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("streaming input not supported: `{}`", .path.display())]
    UnsupportedInput { path: PathBuf },

    #[error("{stage} failed for `{}`", .path.display())]
    MalformedSvg {
        path: PathBuf,
        stage: Stage,
        #[source]
        source: SvgError,
    },

    #[error("optimize failed for `{}`{}", .path.display(), color_note(.color))]
    Optimizer {
        path: PathBuf,
        color: Option<String>,
        #[source]
        source: OptimizeError,
    },

    #[error("pipeline aborted by an earlier error")]
    Aborted,
}

fn color_note(color: &Option<String>) -> String {
    color
        .as_deref()
        .map(|c| format!(" (fill `{c}`)"))
        .unwrap_or_default()
}

impl PipelineError {
    /// Stage that failed; `None` for [`PipelineError::Aborted`].
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::UnsupportedInput { .. } => Some(Stage::Input),
            Self::MalformedSvg { stage, .. } => Some(*stage),
            Self::Optimizer { .. } => Some(Stage::Optimize),
            Self::Aborted => None,
        }
    }

    /// Path of the offending input record.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::UnsupportedInput { path }
            | Self::MalformedSvg { path, .. }
            | Self::Optimizer { path, .. } => Some(path),
            Self::Aborted => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_path_and_stage() {
        let err = PipelineError::MalformedSvg {
            path: PathBuf::from("icons/arrow.svg"),
            stage: Stage::Recolor,
            source: SvgError::MissingRoot,
        };
        assert_eq!(err.to_string(), "recolor failed for `icons/arrow.svg`");
        assert_eq!(err.stage(), Some(Stage::Recolor));
        assert_eq!(err.path(), Some(Path::new("icons/arrow.svg")));

        let err = PipelineError::Optimizer {
            path: PathBuf::from("a.svg"),
            color: Some("#fff".into()),
            source: OptimizeError::Other("boom".into()),
        };
        assert_eq!(err.to_string(), "optimize failed for `a.svg` (fill `#fff`)");

        assert_eq!(PipelineError::Aborted.stage(), None);
        assert_eq!(PipelineError::Aborted.path(), None);
    }
}
