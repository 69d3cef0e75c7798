//! File set collection.
//!
//! Expands user-supplied files and directories into a deduplicated, ordered
//! list of source files. Traversal is an explicit breadth-first work queue;
//! each queued entry remembers whether the caller supplied it directly,
//! because the error policy differs: a missing or unreadable top-level entry
//! aborts the run, while one discovered during expansion is silently skipped
//! (directories can change between listing and access).

use std::collections::{HashSet, VecDeque};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};

use crate::error::PylocError;
use crate::options::CountOptions;
use crate::Result;

struct WorkItem {
    path: PathBuf,
    top_level: bool,
}

/// Strip a leading `./` from an entry.
///
/// Entries of exactly two characters are left alone so the bare
/// current-directory reference `./` is not mangled into an empty path.
fn normalize(entry: &str) -> &str {
    if entry.len() != 2 && entry.starts_with("./") {
        &entry[2..]
    } else {
        entry
    }
}

/// Check that a path can actually be opened for reading.
///
/// `exists()` alone is not enough: permission bits can make a listed entry
/// unreadable.
fn is_readable(path: &Path) -> bool {
    if path.is_dir() {
        fs::read_dir(path).is_ok()
    } else {
        File::open(path).is_ok()
    }
}

/// List a directory's immediate children via a glob over `<dir>/*`.
///
/// Glob metacharacters in the directory name itself are escaped so they are
/// matched literally. Hidden entries are not matched, and unreadable entries
/// are dropped.
fn expand_dir(dir: &Path) -> Vec<PathBuf> {
    let dir_str = dir.to_string_lossy();
    let pattern = format!("{}/*", Pattern::escape(dir_str.trim_end_matches('/')));
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    match glob::glob_with(&pattern, options) {
        Ok(paths) => paths.filter_map(|entry| entry.ok()).collect(),
        Err(_) => Vec::new(),
    }
}

fn matches_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}

/// Expand `inputs` into an ordered, deduplicated list of source files.
///
/// Each input is a file or directory path. A directory named directly is
/// always expanded one level; its subdirectories are only descended into
/// when `options.recurse` is set. Only files with the configured extension
/// are kept, in discovery order, each at most once.
///
/// # Errors
///
/// `PathNotFound` / `PathInaccessible` when a top-level input is missing or
/// unreadable. Paths discovered during expansion never fail the run.
pub fn collect(inputs: &[String], options: &CountOptions) -> Result<Vec<PathBuf>> {
    let mut queue: VecDeque<WorkItem> = inputs
        .iter()
        .map(|entry| WorkItem {
            path: PathBuf::from(normalize(entry)),
            top_level: true,
        })
        .collect();

    let mut found = Vec::new();
    let mut seen = HashSet::new();

    while let Some(item) = queue.pop_front() {
        let path = item.path;

        if !path.exists() {
            if item.top_level {
                return Err(PylocError::PathNotFound(path));
            }
            continue;
        }
        if !is_readable(&path) {
            if item.top_level {
                return Err(PylocError::PathInaccessible(path));
            }
            continue;
        }

        if path.is_dir() {
            // A top-level directory is expanded one level even without
            // recursion; discovered subdirectories need the recurse flag.
            if item.top_level || options.recurse {
                for child in expand_dir(&path) {
                    let child = PathBuf::from(normalize(&child.to_string_lossy()));
                    queue.push_back(WorkItem {
                        path: child,
                        top_level: false,
                    });
                }
            }
        } else if matches_extension(&path, &options.extension) && seen.insert(path.clone()) {
            found.push(path);
        }
    }

    Ok(found)
}
