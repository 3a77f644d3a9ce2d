//! SVG processing errors.

use thiserror::Error;

/// Errors raised while reading or rewriting SVG markup.
#[derive(Debug, Error)]
pub enum SvgError {
    #[error("XML parse error at position {position}: {message}")]
    Parse { position: u64, message: String },

    #[error("SVG is not valid UTF-8")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("document has no <svg> element")]
    MissingRoot,

    #[error("failed to serialize SVG: {0}")]
    Write(String),
}

/// Errors reported by an [`Optimizer`](super::Optimizer).
#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("usvg could not read the document")]
    Usvg(#[from] usvg::Error),

    #[error("`<text>` elements are not supported by the optimizer; convert text to paths")]
    Text,

    #[error("optimizer task did not complete")]
    Task(#[from] tokio::task::JoinError),

    #[error("{0}")]
    Other(String),
}
