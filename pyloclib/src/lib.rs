//! # pyloclib
//!
//! A Python-aware lines of code counter library that separates code,
//! docstrings, comments, and blank lines.
//!
//! ## Overview
//!
//! The core is a small per-file state machine that classifies logical lines
//! without a full parser: it understands `#` line comments and triple-quoted
//! docstring blocks (`"""` / `'''`), including single-line docstrings and
//! docstring bodies that look like comments. Around it sit a file collector
//! that expands files and directories (optionally recursing) into an
//! ordered, deduplicated file set, and an aggregator that sums per-file
//! counts into totals.
//!
//! ## Example
//!
//! ```rust
//! use pyloclib::{classify, count_paths, CountOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // Classify lines directly, no I/O involved
//! let counts = classify(["# comment", "x = 1", "", "\"\"\"doc\"\"\""]);
//! assert_eq!(counts.comment, 1);
//! assert_eq!(counts.code, 1);
//! assert_eq!(counts.blank, 1);
//! assert_eq!(counts.docstring, 1);
//!
//! // Count files on disk
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("app.py"), "import os\n\nprint(os.name)\n").unwrap();
//! let inputs = vec![dir.path().to_string_lossy().to_string()];
//! let result = count_paths(&inputs, &CountOptions::new()).unwrap();
//! assert_eq!(result.totals.code, 2);
//! ```

pub mod classifier;
pub mod collector;
pub mod counter;
pub mod error;
pub mod options;
pub mod stats;

pub use classifier::{classify, Classifier, QuoteKind};
pub use collector::collect;
pub use counter::{count_file, count_paths, split_logical_lines};
pub use error::PylocError;
pub use options::{CountOptions, DEFAULT_EXTENSION};
pub use stats::{AggregateResult, FileRecord, LineCount};

/// Result type for pyloclib operations
pub type Result<T> = std::result::Result<T, PylocError>;
