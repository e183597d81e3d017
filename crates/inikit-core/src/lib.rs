//! # inikit Core
//!
//! Pure primitives for inikit: the ordered section/entry model, the .ini
//! line parser, and the writer.
//!
//! This crate contains no filesystem access. It is pure computation over
//! strings and readers/writers handed to it.
//!
//! ## Key Types
//!
//! - [`Document`] - Ordered sections, each holding ordered entries
//! - [`Section`] - A named group of entries
//! - [`Entry`] - A single `key=value` pair
//! - [`ParseOptions`] - Duplicate handling and line length limits
//! - [`Encoding`] - UTF-8, or Latin-1 for files that are not UTF-8
//!
//! ## Format
//!
//! ```text
//! ; comment line, ignored
//! [section name]
//! key=value
//! key 2=value 2
//! ```
//!
//! ```rust
//! use inikit_core::Document;
//!
//! let mut doc: Document = "[server]\nport=8080\n".parse().unwrap();
//! doc.write("server", "host", "localhost").unwrap();
//! assert_eq!(doc.read("server", "port"), Some("8080"));
//! assert_eq!(doc.to_string(), "\n[server]\nport=8080\nhost=localhost\n");
//! ```

pub mod document;
pub mod encoding;
pub mod error;
pub mod options;
pub mod parser;
pub mod writer;

pub use document::{Document, Entry, Section};
pub use encoding::Encoding;
pub use error::{IniError, LineFault, NameKind, Result};
pub use options::{DuplicatePolicy, ParseOptions, LEGACY_MAX_LINE_LEN};
pub use parser::{parse_reader, parse_str};
pub use writer::{render, write_document};
