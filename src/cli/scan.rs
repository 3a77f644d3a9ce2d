//! Input discovery.

use anyhow::{Result, bail};
use jwalk::WalkDir;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Expand inputs into an ordered list of SVG files.
///
/// Files are taken as given; directories are walked recursively for `*.svg`
/// (case-insensitive), sorted by path. A file reached twice is kept once, at
/// its first position.
pub fn collect_svg_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for input in inputs {
        let found = if input.is_dir() {
            collect_dir(input)
        } else if input.is_file() {
            vec![input.clone()]
        } else {
            bail!("input `{}` does not exist", input.display());
        };

        for path in found {
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }

    Ok(files)
}

fn collect_dir(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| is_svg(p))
        .collect();
    files.sort();
    files
}

#[inline]
fn is_svg(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_collect_svg_files() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("icons/nested")).unwrap();
        for name in ["icons/b.svg", "icons/a.SVG", "icons/nested/c.svg", "icons/readme.md"] {
            fs::write(root.join(name), "<svg/>").unwrap();
        }
        let single = root.join("single.txt");
        fs::write(&single, "<svg/>").unwrap();

        let files = collect_svg_files(&[
            single.clone(),
            root.join("icons"),
            root.join("icons/b.svg"),
        ])
        .unwrap();

        assert_eq!(
            files,
            [
                single,
                root.join("icons/a.SVG"),
                root.join("icons/b.svg"),
                root.join("icons/nested/c.svg"),
            ]
        );
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        assert!(collect_svg_files(&[dir.path().join("nope")]).is_err());
    }
}
