//! Table rendering for CLI output.
//!
//! Rows are sequences of fields right-aligned to a fixed column width. The
//! columns shown depend on the verbosity flags; with neither flag set the
//! output collapses to the bare code total.

use console::Style;
use pyloclib::{AggregateResult, LineCount};

/// Default column width for table output.
pub const DEFAULT_COL_WIDTH: usize = 8;

/// Display options for rendering an [`AggregateResult`].
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Include docstring/comment/blank columns, not just code
    pub verbose: bool,
    /// Include one row per file in addition to the total
    pub per_file: bool,
    /// Width every numeric column is right-aligned to
    pub col_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            per_file: false,
            col_width: DEFAULT_COL_WIDTH,
        }
    }
}

fn verbose_cells(counts: &LineCount, width: usize) -> String {
    format!(
        "{:>width$}{:>width$}{:>width$}{:>width$}",
        counts.code,
        counts.docstring,
        counts.comment,
        counts.blank,
        width = width
    )
}

fn header(opts: &RenderOptions) -> String {
    let width = opts.col_width;
    let mut line = format!(
        "{:>width$}{:>width$}{:>width$}{:>width$}  ",
        "LOC",
        "DOCSTR",
        "CMMNTS",
        "EMPTY",
        width = width
    );
    if opts.per_file {
        line.push_str(&format!("{:>width$}", "FILENAME", width = width));
    }
    Style::new().bold().apply_to(line).to_string()
}

/// Render the result as lines of text.
///
/// An empty file set renders as empty output.
pub fn render(result: &AggregateResult, opts: &RenderOptions) -> String {
    if result.files.is_empty() {
        return String::new();
    }

    let width = opts.col_width;
    let mut lines = Vec::new();

    if opts.verbose {
        lines.push(header(opts));
        if opts.per_file {
            for file in &result.files {
                lines.push(format!(
                    "{}  {}",
                    verbose_cells(&file.counts, width),
                    file.path.display()
                ));
            }
        }
        lines.push(format!("{}  ", verbose_cells(&result.totals, width)));
    } else if opts.per_file {
        for file in &result.files {
            lines.push(format!(
                "{:>width$}  {}",
                file.counts.code,
                file.path.display(),
                width = width
            ));
        }
        lines.push(result.totals.code.to_string());
    } else {
        lines.push(result.totals.code.to_string());
    }

    lines.join("\n") + "\n"
}
