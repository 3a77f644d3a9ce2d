//! Records exchanged with the host pipeline.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Content of an input record, as handed over by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// No content (the host's "null" file); dropped by the transform.
    Empty,
    /// Fully materialized file content.
    Buffered(Vec<u8>),
    /// A live byte stream; not supported.
    Streaming,
}

/// One source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRecord {
    /// Source path; only its file stem is used.
    pub path: PathBuf,
    pub content: Content,
}

impl InputRecord {
    /// Record with buffered content. Zero bytes count as empty.
    pub fn buffered(path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        let content = content.into();
        Self {
            path: path.into(),
            content: if content.is_empty() {
                Content::Empty
            } else {
                Content::Buffered(content)
            },
        }
    }

    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            content: Content::Empty,
        }
    }

    pub fn streaming(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            content: Content::Streaming,
        }
    }

    /// Read a file from disk into a buffered record.
    pub fn read(path: &Path) -> io::Result<Self> {
        Ok(Self::buffered(path, fs::read(path)?))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self.content, Content::Empty)
    }

    #[inline]
    pub fn is_streaming(&self) -> bool {
        matches!(self.content, Content::Streaming)
    }
}

/// The generated stylesheet, produced once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    /// `<file_name>.<extension>`, relative to the output directory.
    pub path: PathBuf,
    pub content: String,
}

impl OutputRecord {
    /// Write the stylesheet below `dir`, creating it if needed.
    ///
    /// Returns the full path of the written file.
    pub fn write_to(&self, dir: &Path) -> io::Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.path);
        fs::write(&path, &self.content)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffered_empty_is_empty() {
        assert!(InputRecord::buffered("a.svg", Vec::new()).is_empty());
        assert!(!InputRecord::buffered("a.svg", "<svg/>").is_empty());
        assert!(InputRecord::streaming("a.svg").is_streaming());
    }

    #[test]
    fn test_read_and_write() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("a.svg");
        fs::write(&source, "<svg/>").unwrap();
        let record = InputRecord::read(&source).unwrap();
        assert_eq!(record.content, Content::Buffered(b"<svg/>".to_vec()));

        let output = OutputRecord {
            path: PathBuf::from("icons.css"),
            content: ".a {}".into(),
        };
        let written = output.write_to(&dir.path().join("out")).unwrap();
        assert_eq!(fs::read_to_string(written).unwrap(), ".a {}");
    }
}
