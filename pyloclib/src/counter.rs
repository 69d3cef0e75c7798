//! High-level counting API.
//!
//! Entry points for counting one file or a whole set of user-supplied
//! inputs. Files are read and classified sequentially in discovery order;
//! aggregation is all-or-nothing, so a read failure on any collected file
//! fails the run without partial totals.

use std::fs;
use std::path::Path;

use crate::classifier::classify;
use crate::collector::collect;
use crate::error::PylocError;
use crate::options::CountOptions;
use crate::stats::{AggregateResult, FileRecord};
use crate::Result;

/// Split text into logical lines, normalizing `\n`, `\r\n` and lone `\r`.
///
/// A trailing line terminator does not produce a phantom empty last line.
pub fn split_logical_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&text[start..]);
    }

    lines
}

/// Count lines in a single file.
///
/// # Errors
///
/// `FileRead` when the file cannot be read; the error carries the path.
pub fn count_file(path: impl AsRef<Path>) -> Result<FileRecord> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| PylocError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let counts = classify(split_logical_lines(&content));
    Ok(FileRecord::new(path.to_path_buf(), counts))
}

/// Count lines in every source file reachable from `inputs`.
///
/// This is the main entry point: it collects the file set, counts each file
/// in discovery order and sums the totals.
///
/// # Example
///
/// ```rust,ignore
/// use pyloclib::{count_paths, CountOptions};
///
/// let options = CountOptions::new().recurse(true);
/// let result = count_paths(&["src".to_string()], &options)?;
/// println!("{}", result.totals.code);
/// ```
pub fn count_paths(inputs: &[String], options: &CountOptions) -> Result<AggregateResult> {
    let files = collect(inputs, options)?;

    let mut result = AggregateResult::new();
    for path in files {
        result.add_file(count_file(&path)?);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_split_unix_lines() {
        assert_eq!(split_logical_lines("a\nb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_trailing_newline() {
        assert_eq!(split_logical_lines("a\nb\n"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_windows_and_mac_lines() {
        assert_eq!(split_logical_lines("a\r\nb\rc\n"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_empty_text() {
        assert!(split_logical_lines("").is_empty());
    }

    #[test]
    fn test_split_blank_lines_preserved() {
        assert_eq!(split_logical_lines("a\n\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_count_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("sample.py");
        fs::write(
            &path,
            "\"\"\"Module docstring.\"\"\"\n\n# setup\nx = 1\ny = 2\n",
        )
        .unwrap();

        let record = count_file(&path).unwrap();

        assert_eq!(record.path, path);
        assert_eq!(record.counts.docstring, 1);
        assert_eq!(record.counts.blank, 1);
        assert_eq!(record.counts.comment, 1);
        assert_eq!(record.counts.code, 2);
        assert_eq!(record.counts.total(), 5);
    }

    #[test]
    fn test_count_file_missing() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("gone.py");

        let result = count_file(&path);

        match result {
            Err(PylocError::FileRead { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected FileRead, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_count_paths_totals() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.py"), "x = 1\n# note\n").unwrap();
        fs::write(temp.path().join("b.py"), "y = 2\n\nz = 3\n").unwrap();

        let inputs = vec![temp.path().to_string_lossy().to_string()];
        let result = count_paths(&inputs, &CountOptions::new()).unwrap();

        assert_eq!(result.files.len(), 2);
        assert_eq!(result.totals.code, 3);
        assert_eq!(result.totals.comment, 1);
        assert_eq!(result.totals.blank, 1);

        let summed = result
            .files
            .iter()
            .fold(crate::stats::LineCount::new(), |acc, f| acc + f.counts);
        assert_eq!(result.totals, summed);
    }

    #[test]
    fn test_count_paths_missing_input_fails() {
        let temp = tempdir().unwrap();
        let inputs = vec![temp
            .path()
            .join("nope")
            .to_string_lossy()
            .to_string()];

        let result = count_paths(&inputs, &CountOptions::new());
        assert!(matches!(result, Err(PylocError::PathNotFound(_))));
    }
}
