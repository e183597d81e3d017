//! Error types for inikit core.

use std::fmt;

use thiserror::Error;

/// What was wrong with a `key=value` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFault {
    /// No `=` before the end of the line.
    MissingSeparator,
    /// Nothing left of the key once whitespace was stripped.
    EmptyKey,
}

impl fmt::Display for LineFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineFault::MissingSeparator => f.write_str("bad key/value pair: no '='"),
            LineFault::EmptyKey => f.write_str("bad key/value pair: empty key"),
        }
    }
}

/// Which kind of name failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Section,
    Key,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKind::Section => f.write_str("section name"),
            NameKind::Key => f.write_str("key"),
        }
    }
}

/// Errors that can occur while parsing, mutating or rendering a document.
#[derive(Debug, Error)]
pub enum IniError {
    /// A line inside a section that is not a valid `key=value` pair.
    #[error("malformed line {line}: {fault}")]
    MalformedLine { line: usize, fault: LineFault },

    /// A line exceeded the configured maximum length.
    #[error("line {line} exceeds the {limit}-byte limit")]
    LineTooLong { line: usize, limit: usize },

    /// A section name or key that cannot be stored.
    #[error("invalid {kind} {name:?}: {reason}")]
    InvalidName {
        kind: NameKind,
        name: String,
        reason: &'static str,
    },

    /// A value that cannot be stored.
    #[error("invalid value: {reason}")]
    InvalidValue { reason: &'static str },

    /// An allocation could not be satisfied.
    #[error("out of resources")]
    OutOfResources,

    /// I/O error from the underlying reader or writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::collections::TryReserveError> for IniError {
    fn from(_: std::collections::TryReserveError) -> Self {
        IniError::OutOfResources
    }
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, IniError>;
