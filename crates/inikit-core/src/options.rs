//! Parser configuration.

use serde::{Deserialize, Serialize};

/// Maximum line length of the classic fixed-buffer reader: a 4096-byte
/// buffer including the NUL terminator, so 4095 bytes of line data.
pub const LEGACY_MAX_LINE_LEN: usize = 4095;

/// How the parser treats a header or key that appears more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Repeated headers reopen the existing section and repeated keys
    /// overwrite the earlier value in place, exactly like `Document::write`.
    #[default]
    Merge,
    /// Every header starts a new section and every line appends a new entry,
    /// even when the name is already taken. Lookups see the first match.
    Preserve,
}

/// Options for parsing .ini text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Duplicate header/key handling.
    pub duplicates: DuplicatePolicy,
    /// Hard limit on line length in bytes, including the line terminator.
    /// `None` reads lines of any length.
    pub max_line_len: Option<usize>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            duplicates: DuplicatePolicy::Merge,
            max_line_len: None,
        }
    }
}

impl ParseOptions {
    /// Options that approximate the classic parser: duplicates are kept
    /// as-is and lines are limited to [`LEGACY_MAX_LINE_LEN`] bytes.
    ///
    /// Two differences remain. An empty header `[]` is still skipped rather
    /// than opening a section with an empty name. A longer line fails with
    /// `LineTooLong` instead of being split into chunks.
    pub fn legacy() -> Self {
        Self {
            duplicates: DuplicatePolicy::Preserve,
            max_line_len: Some(LEGACY_MAX_LINE_LEN),
        }
    }

    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    pub fn max_line_len(mut self, limit: Option<usize>) -> Self {
        self.max_line_len = limit;
        self
    }
}
