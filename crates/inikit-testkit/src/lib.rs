//! # inikit Testkit
//!
//! Testing utilities for inikit.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known inputs with the documents or errors they must produce
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Temporary directories for tests that load and save real files
//!
//! ## Golden Vectors
//!
//! ```rust
//! use inikit_testkit::vectors::verify_all_vectors;
//!
//! for (name, passed, detail) in verify_all_vectors() {
//!     assert!(passed, "{name}: {detail}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use inikit_testkit::generators::{document_from_ops, write_ops};
//!
//! proptest! {
//!     #[test]
//!     fn no_empty_sections(ops in write_ops(32)) {
//!         let doc = document_from_ops(&ops);
//!         prop_assert!(doc.sections().all(|s| !s.is_empty()));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use inikit_testkit::fixtures::{TempIni, SAMPLE_INI};
//!
//! let fixture = TempIni::new();
//! let ini = fixture.load("test.ini", SAMPLE_INI);
//! assert!(ini.has_section("First Section"));
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{TempIni, SAMPLE_INI};
pub use generators::{document_from_ops, document_from_writes, WriteOp};
pub use vectors::{all_vectors, check_vector, verify_all_vectors, GoldenVector};
