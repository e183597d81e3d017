//! # inikit
//!
//! The unified API for inikit: mutable, ordered `.ini` configuration files.
//!
//! ## Overview
//!
//! inikit loads a `.ini` file into memory, lets you query and edit it, and
//! writes it back:
//!
//! - **Sections**: named groups, kept in the order they first appeared
//! - **Entries**: `key=value` pairs, kept in the order they were added
//! - **Upserts**: writing an existing key replaces its value in place
//! - **Auto-pruning**: deleting the last entry of a section removes the section
//!
//! ## Usage
//!
//! ```rust,no_run
//! use inikit::IniFile;
//!
//! let mut ini = IniFile::load("test.ini").unwrap();
//!
//! ini.write("First Section", "doobie", "dah").unwrap();
//! ini.write("New Section", "diddley", "dee").unwrap();
//! ini.delete_entry("New Section", "diddley");
//! assert!(!ini.has_section("New Section"));
//!
//! for section in ini.list_sections() {
//!     println!("[{section}] has {} entries", ini.entry_count(section));
//! }
//!
//! ini.save().unwrap();
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `inikit::core` - Document model, parser and writer
//! - `inikit::store` - File-backed storage

pub use inikit_core as core;
pub use inikit_store as store;

pub use inikit_core::{
    parse_reader, parse_str, render, write_document, Document, DuplicatePolicy, Encoding, Entry,
    IniError, LineFault, NameKind, ParseOptions, Section, LEGACY_MAX_LINE_LEN,
};
pub use inikit_store::{Dump, IniFile, StoreError};

/// Result type for file-backed operations.
pub type Result<T> = inikit_store::Result<T>;
