//! Proptest generators for property-based testing.

use proptest::prelude::*;

use inikit_core::Document;

/// Generate a section name that survives a save/load cycle.
pub fn section_name() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_][A-Za-z0-9 _.-]{0,15}".prop_map(String::from)
}

/// Generate a key that survives a save/load cycle.
///
/// Keys may contain inner spaces but never start or end with one.
pub fn key() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_]([A-Za-z0-9 _.-]{0,14}[A-Za-z0-9_.-])?".prop_map(String::from)
}

/// Generate a value: any printable ASCII, including `=`, `;`, `[` and
/// leading or trailing spaces.
pub fn value() -> impl Strategy<Value = String> {
    "[ -~]{0,32}".prop_map(String::from)
}

/// Pick from a handful of section names, so generated operations collide.
pub fn small_section_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["alpha", "beta", "gamma", "delta"]).prop_map(String::from)
}

/// Pick from a handful of keys, so generated operations collide.
pub fn small_key() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["k1", "k2", "k3", "k4", "k5"]).prop_map(String::from)
}

/// A single mutation of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOp {
    Write {
        section: String,
        key: String,
        value: String,
    },
    DeleteEntry {
        section: String,
        key: String,
    },
    DeleteSection {
        section: String,
    },
}

impl WriteOp {
    /// Apply this operation to `doc`.
    ///
    /// Generated names are always valid, so writes only fail on allocation
    /// failure.
    pub fn apply(&self, doc: &mut Document) -> inikit_core::Result<()> {
        match self {
            WriteOp::Write {
                section,
                key,
                value,
            } => doc.write(section, key, value)?,
            WriteOp::DeleteEntry { section, key } => doc.delete_entry(section, key),
            WriteOp::DeleteSection { section } => doc.delete_section(section),
        }
        Ok(())
    }
}

impl Arbitrary for WriteOp {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            6 => (small_section_name(), small_key(), value()).prop_map(|(section, key, value)| {
                WriteOp::Write {
                    section,
                    key,
                    value,
                }
            }),
            3 => (small_section_name(), small_key())
                .prop_map(|(section, key)| WriteOp::DeleteEntry { section, key }),
            1 => small_section_name().prop_map(|section| WriteOp::DeleteSection { section }),
        ]
        .boxed()
    }
}

/// Generate a sequence of up to `max_len` operations.
pub fn write_ops(max_len: usize) -> impl Strategy<Value = Vec<WriteOp>> {
    prop::collection::vec(any::<WriteOp>(), 0..=max_len)
}

/// Generate `(section, key, value)` triples with arbitrary valid names.
pub fn writes(max_len: usize) -> impl Strategy<Value = Vec<(String, String, String)>> {
    prop::collection::vec((section_name(), key(), value()), 0..=max_len)
}

/// Build a document by writing each triple in order.
pub fn document_from_writes(writes: &[(String, String, String)]) -> Document {
    let mut doc = Document::new();
    for (section, key, value) in writes {
        doc.write(section, key, value)
            .expect("generated names are always writable");
    }
    doc
}

/// Build a document by applying each operation in order.
pub fn document_from_ops(ops: &[WriteOp]) -> Document {
    let mut doc = Document::new();
    for op in ops {
        op.apply(&mut doc)
            .expect("generated operations are always applicable");
    }
    doc
}
