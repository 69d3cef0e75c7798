//! Line classification for Python source.
//!
//! The classifier is a small state machine that walks a file's logical lines
//! once and sorts each into one of four categories: code, docstring, comment
//! or blank. It is not a parser; it relies on docstrings being delimited by
//! triple quotes at the start of a trimmed line, which covers the common
//! module/class/function docstring convention.
//!
//! Known limitations, accepted by design: nested or mismatched quote styles,
//! escaped quotes inside string literals and line continuations are not
//! handled. An unterminated docstring consumes the rest of the file as
//! docstring content.

use crate::stats::LineCount;

/// Which triple-quote delimiter opened the current docstring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteKind {
    /// `"""`
    Double,
    /// `'''`
    Single,
}

impl QuoteKind {
    fn delimiter(self) -> &'static str {
        match self {
            QuoteKind::Double => "\"\"\"",
            QuoteKind::Single => "'''",
        }
    }
}

/// Classifier position relative to docstring blocks.
///
/// The quote kind only exists while inside a docstring, so the "quote kind
/// set while outside" combination is unrepresentable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum State {
    /// At statement level
    #[default]
    Outside,
    /// Inside a multi-line docstring opened with the given delimiter
    InDocstring(QuoteKind),
}

/// Streaming line classifier.
///
/// Feed lines one at a time with [`feed_line`](Classifier::feed_line), then
/// take the counts with [`into_counts`](Classifier::into_counts). For the
/// common whole-sequence case use [`classify`].
#[derive(Debug, Default)]
pub struct Classifier {
    state: State,
    counts: LineCount,
}

impl Classifier {
    /// Create a classifier in its initial state
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one logical line, updating exactly one counter.
    pub fn feed_line(&mut self, line: &str) {
        let line = line.trim();

        if line.is_empty() {
            self.counts.blank += 1;
            return;
        }

        match self.state {
            State::Outside => {
                if line.starts_with('#') {
                    self.counts.comment += 1;
                    return;
                }

                // Single-line docstring. The length guard keeps a bare `"""`
                // from matching itself at both ends; that line opens a
                // multi-line docstring instead.
                if line.len() > 3
                    && ((line.starts_with("\"\"\"") && line.ends_with("\"\"\""))
                        || (line.starts_with("'''") && line.ends_with("'''")))
                {
                    self.counts.docstring += 1;
                    return;
                }

                if line.starts_with("\"\"\"") {
                    self.state = State::InDocstring(QuoteKind::Double);
                    self.counts.docstring += 1;
                    return;
                }
                if line.starts_with("'''") {
                    self.state = State::InDocstring(QuoteKind::Single);
                    self.counts.docstring += 1;
                    return;
                }

                self.counts.code += 1;
            }
            State::InDocstring(kind) => {
                // Every line inside the block counts as docstring, including
                // the closing line. `#` lines are not reclassified as
                // comments here; comments exist at statement level only.
                if line.ends_with(kind.delimiter()) {
                    self.state = State::Outside;
                }
                self.counts.docstring += 1;
            }
        }
    }

    /// Consume the classifier and return the accumulated counts.
    pub fn into_counts(self) -> LineCount {
        self.counts
    }
}

/// Classify a sequence of logical lines.
///
/// Pure and total: any input, including the empty sequence, yields a valid
/// `LineCount` whose counters sum to the number of lines.
pub fn classify<'a, I>(lines: I) -> LineCount
where
    I: IntoIterator<Item = &'a str>,
{
    let mut classifier = Classifier::new();
    for line in lines {
        classifier.feed_line(line);
    }
    classifier.into_counts()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(lines: &[&str]) -> LineCount {
        classify(lines.iter().copied())
    }

    #[test]
    fn test_empty_input() {
        let c = counts(&[]);
        assert_eq!(c, LineCount::new());
    }

    #[test]
    fn test_counters_sum_to_line_count() {
        let lines = [
            "import os",
            "",
            "# a comment",
            "\"\"\"doc\"\"\"",
            "\"\"\"",
            "inside",
            "\"\"\"",
            "x = 1",
            "   ",
        ];
        let c = counts(&lines);
        assert_eq!(c.total(), lines.len() as u64);
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        let c = counts(&["   ", "\t"]);
        assert_eq!(c.blank, 2);
        assert_eq!(c.total(), 2);
    }

    #[test]
    fn test_whitespace_only_is_blank_inside_docstring() {
        let c = counts(&["\"\"\"", "   ", "\"\"\""]);
        assert_eq!(c.blank, 1);
        assert_eq!(c.docstring, 2);
    }

    #[test]
    fn test_single_line_docstring_double() {
        let c = counts(&["\"\"\"a\"\"\""]);
        assert_eq!(c.docstring, 1);
        assert_eq!(c.total(), 1);
    }

    #[test]
    fn test_single_line_docstring_single() {
        let c = counts(&["'''doc'''"]);
        assert_eq!(c.docstring, 1);
        assert_eq!(c.total(), 1);
    }

    #[test]
    fn test_multi_line_docstring() {
        let c = counts(&["\"\"\"", "body", "\"\"\""]);
        assert_eq!(c.docstring, 3);
        assert_eq!(c.total(), 3);
    }

    #[test]
    fn test_bare_triple_quote_opens_block() {
        // Three characters never match the single-line rule, so the lone
        // delimiter opens a multi-line docstring that the next line closes.
        let c = counts(&["\"\"\"", "still inside\"\"\"", "x = 1"]);
        assert_eq!(c.docstring, 2);
        assert_eq!(c.code, 1);
    }

    #[test]
    fn test_mixed_categories() {
        let c = counts(&["# hi", "x = 1", "", "\"\"\"single\"\"\""]);
        assert_eq!(c.comment, 1);
        assert_eq!(c.code, 1);
        assert_eq!(c.blank, 1);
        assert_eq!(c.docstring, 1);
    }

    #[test]
    fn test_indented_lines_classified_by_trimmed_content() {
        let c = counts(&["    # indented comment", "    '''doc'''"]);
        assert_eq!(c.comment, 1);
        assert_eq!(c.docstring, 1);
    }

    #[test]
    fn test_hash_inside_docstring_is_docstring() {
        let c = counts(&["'''", "# not a comment", "'''"]);
        assert_eq!(c.docstring, 3);
        assert_eq!(c.comment, 0);
    }

    #[test]
    fn test_mismatched_delimiter_does_not_close() {
        let c = counts(&["\"\"\"", "body'''", "real close\"\"\"", "x = 1"]);
        assert_eq!(c.docstring, 3);
        assert_eq!(c.code, 1);
    }

    #[test]
    fn test_unterminated_docstring_runs_to_eof() {
        let c = counts(&["x = 1", "\"\"\"", "# looks like comment", "y = 2"]);
        assert_eq!(c.code, 1);
        assert_eq!(c.docstring, 3);
        assert_eq!(c.comment, 0);
    }

    #[test]
    fn test_opener_on_last_line() {
        let c = counts(&["x = 1", "'''"]);
        assert_eq!(c.code, 1);
        assert_eq!(c.docstring, 1);
    }

    #[test]
    fn test_docstring_with_leading_text_is_code() {
        // Only lines starting with a delimiter are docstring candidates.
        let c = counts(&["x = \"\"\"inline\"\"\""]);
        assert_eq!(c.code, 1);
    }

    #[test]
    fn test_single_line_priority_over_open() {
        // `"""a"""` must not open a block; the following line is plain code.
        let c = counts(&["\"\"\"a\"\"\"", "x = 1"]);
        assert_eq!(c.docstring, 1);
        assert_eq!(c.code, 1);
    }
}
