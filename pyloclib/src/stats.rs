//! Core data structures for line counts

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};
use std::path::PathBuf;

/// Line counts for a single file or an aggregation of files.
///
/// The four categories are mutually exclusive: every logical line lands in
/// exactly one of them, so `total()` always equals the number of lines
/// consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCount {
    /// Executable/logic lines (actual code, not docstrings, comments or blanks)
    pub code: u64,
    /// Lines belonging to triple-quoted documentation strings
    pub docstring: u64,
    /// `#` comment lines
    pub comment: u64,
    /// Blank lines (whitespace only)
    pub blank: u64,
}

impl LineCount {
    /// Create a new LineCount with all zeros
    pub fn new() -> Self {
        Self::default()
    }

    /// Total lines across all categories
    pub fn total(&self) -> u64 {
        self.code + self.docstring + self.comment + self.blank
    }
}

impl Add for LineCount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            code: self.code + other.code,
            docstring: self.docstring + other.docstring,
            comment: self.comment + other.comment,
            blank: self.blank + other.blank,
        }
    }
}

impl AddAssign for LineCount {
    fn add_assign(&mut self, other: Self) {
        self.code += other.code;
        self.docstring += other.docstring;
        self.comment += other.comment;
        self.blank += other.blank;
    }
}

/// Line counts for a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path to the file
    pub path: PathBuf,
    /// Line counts for this file
    pub counts: LineCount,
}

impl FileRecord {
    /// Create a new file record
    pub fn new(path: PathBuf, counts: LineCount) -> Self {
        Self { path, counts }
    }
}

/// Result of counting a set of files.
///
/// `totals` is the element-wise sum of all per-file counts; `add_file` keeps
/// it in sync, so it never has to be recomputed after the fact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Per-file counts, in discovery order
    pub files: Vec<FileRecord>,
    /// Aggregated counts across all files
    pub totals: LineCount,
}

impl AggregateResult {
    /// Create a new empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file record, folding its counts into the totals
    pub fn add_file(&mut self, record: FileRecord) {
        self.totals += record.counts;
        self.files.push(record);
    }
}
