//! # inikit Store
//!
//! File-backed storage for inikit documents.
//!
//! ## Overview
//!
//! [`IniFile`] binds a [`Document`](inikit_core::Document) to the path it
//! was loaded from. Loading reads and parses the file in one pass; saving
//! renders the document back to the same path.
//!
//! ## Key Types
//!
//! - [`IniFile`] - A document plus its originating path
//! - [`Dump`] - Debug tree view of an `IniFile`
//! - [`StoreError`] - Load/save failures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use inikit_store::IniFile;
//!
//! let mut ini = IniFile::load("test.ini").unwrap();
//! ini.write("First Section", "Value1", "New").unwrap();
//! assert_eq!(ini.read("First Section", "Value1"), Some("New"));
//! ini.save().unwrap();
//! ```
//!
//! ## Design Notes
//!
//! - **Comments are dropped**: a save writes only sections and entries.
//! - **Empty sections are dropped**: sections with no entries are not saved.
//! - **Missing targets are not errors**: reads, counts and deletes on absent
//!   sections or keys return `None`/`0`/`false` or do nothing.

pub mod dump;
pub mod error;
pub mod file;

pub use dump::Dump;
pub use error::{Result, StoreError};
pub use file::IniFile;
