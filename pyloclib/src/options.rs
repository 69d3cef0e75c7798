//! Options controlling collection and counting.

use serde::{Deserialize, Serialize};

/// Default source-file extension (without the dot).
pub const DEFAULT_EXTENSION: &str = "py";

/// Options for collecting and counting files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountOptions {
    /// Descend into subdirectories of expanded directories
    pub recurse: bool,
    /// Source-file extension to include, without the dot
    pub extension: String,
}

impl Default for CountOptions {
    fn default() -> Self {
        Self {
            recurse: false,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl CountOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set recursive directory descent.
    pub fn recurse(mut self, recurse: bool) -> Self {
        self.recurse = recurse;
        self
    }

    /// Builder: set the source-file extension (without the dot).
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default() {
        let options = CountOptions::new();
        assert!(!options.recurse);
        assert_eq!(options.extension, "py");
    }

    #[test]
    fn test_options_builder() {
        let options = CountOptions::new().recurse(true).extension("pyi");
        assert!(options.recurse);
        assert_eq!(options.extension, "pyi");
    }
}
