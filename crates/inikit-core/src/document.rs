//! Document: the ordered, in-memory form of an .ini file.
//!
//! A document owns a sequence of sections, each of which owns a sequence of
//! entries. Both sequences keep first-insertion order. Section names are
//! unique within a document and keys are unique within a section; every
//! mutation here goes through a find-or-create path that maintains that.

use serde::Serialize;

use crate::encoding::{decode_latin1, Encoding};
use crate::error::{IniError, NameKind, Result};

/// A single `key=value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Entry {
    key: String,
    value: String,
}

impl Entry {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A named, ordered group of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    name: String,
    entries: Vec<Entry>,
}

impl Section {
    pub(crate) fn try_new(name: &str) -> Result<Self> {
        Ok(Self {
            name: try_owned(name)?,
            entries: Vec::new(),
        })
    }

    /// The section name, exactly as written between the brackets.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(Entry::key)
    }

    /// Value of the first entry with this key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(Entry::value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    /// Insert or update `key`. An existing entry keeps its position.
    ///
    /// Nothing is modified unless every allocation succeeds.
    pub(crate) fn put(&mut self, key: &str, value: &str) -> Result<()> {
        match self.position(key) {
            Some(idx) => {
                self.entries[idx].value = try_owned(value)?;
            }
            None => self.append(key, value)?,
        }
        Ok(())
    }

    /// Append an entry without looking for an existing key.
    pub(crate) fn append(&mut self, key: &str, value: &str) -> Result<()> {
        let entry = Entry {
            key: try_owned(key)?,
            value: try_owned(value)?,
        };
        self.entries.try_reserve(1)?;
        self.entries.push(entry);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Option<Entry> {
        self.position(key).map(|idx| self.entries.remove(idx))
    }
}

/// An ordered collection of sections.
///
/// Lookups match names and keys by exact string equality and always return
/// the first match in insertion order. Operations on missing sections or keys
/// are not errors: reads return `None`, predicates return `false`, counts
/// return `0` and deletes do nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    sections: Vec<Section>,
    #[serde(skip)]
    encoding: Encoding,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The encoding the document was read with, and will be saved with.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Sections in insertion order, including ones with no entries.
    pub fn sections(&self) -> impl Iterator<Item = &Section> + '_ {
        self.sections.iter()
    }

    /// The first section with this name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.name == name)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Read the value stored under `section`/`key`.
    pub fn read(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(key))
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.position(section).is_some()
    }

    /// Whether `section` exists and contains `key`.
    pub fn has_entry(&self, section: &str, key: &str) -> bool {
        self.section(section).is_some_and(|s| s.contains_key(key))
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Number of entries in `section`, or 0 if there is no such section.
    pub fn entry_count(&self, section: &str) -> usize {
        self.section(section).map_or(0, Section::len)
    }

    /// Section names in insertion order.
    ///
    /// The listing borrows the document, so it has to be dropped before the
    /// next mutation.
    pub fn list_sections(&self) -> Vec<&str> {
        self.sections.iter().map(Section::name).collect()
    }

    /// Keys of `section` in insertion order; empty if the section is absent.
    pub fn list_entries(&self, section: &str) -> Vec<&str> {
        self.section(section)
            .map(|s| s.keys().collect())
            .unwrap_or_default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutation
    // ─────────────────────────────────────────────────────────────────────────

    /// Upsert `section`/`key` = `value`.
    ///
    /// A missing section is appended, then a missing key is appended to it.
    /// An existing key has its value replaced in place and keeps its position.
    ///
    /// Names and values are stored as given. Some of them are accepted here
    /// but read back differently after a save and load: a key with leading or
    /// trailing whitespace, a key containing `=` or starting with `[` or `;`,
    /// and a section name containing `]`.
    ///
    /// # Errors
    /// - `InvalidName` for an empty name, or a name containing a line break.
    /// - `InvalidValue` for a value containing a line break.
    /// - `OutOfResources` if an allocation fails.
    ///
    /// On error the document is unchanged; a section created by this call is
    /// removed again.
    pub fn write(&mut self, section: &str, key: &str, value: &str) -> Result<()> {
        validate_section_name(section)?;
        validate_key(key)?;
        validate_value(value)?;

        let (idx, created) = self.find_or_create(section)?;
        if let Err(e) = self.sections[idx].put(key, value) {
            if created {
                self.sections.pop();
            }
            return Err(e);
        }
        Ok(())
    }

    /// Remove `section` and all of its entries.
    pub fn delete_section(&mut self, section: &str) {
        if let Some(idx) = self.position(section) {
            self.sections.remove(idx);
        }
    }

    /// Remove `key` from `section`.
    ///
    /// A section left without entries is removed as well.
    pub fn delete_entry(&mut self, section: &str, key: &str) {
        let Some(idx) = self.position(section) else {
            return;
        };
        self.sections[idx].remove(key);
        if self.sections[idx].is_empty() {
            self.sections.remove(idx);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Parser support
    // ─────────────────────────────────────────────────────────────────────────

    /// Index of the first section named `name`, appending an empty one if
    /// there is none. The flag is true when the section was created.
    pub(crate) fn find_or_create(&mut self, name: &str) -> Result<(usize, bool)> {
        if let Some(idx) = self.position(name) {
            return Ok((idx, false));
        }
        let idx = self.push_section(name)?;
        Ok((idx, true))
    }

    /// Append a section unconditionally, even if the name is taken.
    pub(crate) fn push_section(&mut self, name: &str) -> Result<usize> {
        let section = Section::try_new(name)?;
        self.sections.try_reserve(1)?;
        self.sections.push(section);
        Ok(self.sections.len() - 1)
    }

    pub(crate) fn section_at_mut(&mut self, idx: usize) -> &mut Section {
        &mut self.sections[idx]
    }

    /// Switch to Latin-1 after everything so far was decoded as UTF-8.
    ///
    /// The stored text is mapped back to the bytes it came from and decoded
    /// again one char per byte. The mapping is one-to-one, so names that were
    /// distinct stay distinct.
    pub(crate) fn reinterpret_as_latin1(&mut self) -> Result<()> {
        if self.encoding == Encoding::Latin1 {
            return Ok(());
        }
        for section in &mut self.sections {
            section.name = redecode(&section.name)?;
            for entry in &mut section.entries {
                entry.key = redecode(&entry.key)?;
                entry.value = redecode(&entry.value)?;
            }
        }
        self.encoding = Encoding::Latin1;
        Ok(())
    }
}

fn redecode(text: &str) -> Result<String> {
    if text.is_ascii() {
        try_owned(text)
    } else {
        decode_latin1(text.as_bytes())
    }
}

/// Copy `s` into a new string, reporting allocation failure instead of aborting.
fn try_owned(s: &str) -> Result<String> {
    let mut out = String::new();
    out.try_reserve_exact(s.len())?;
    out.push_str(s);
    Ok(out)
}

fn invalid_name(kind: NameKind, name: &str, reason: &'static str) -> IniError {
    IniError::InvalidName {
        kind,
        name: name.to_string(),
        reason,
    }
}

fn validate_section_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(invalid_name(NameKind::Section, name, "must not be empty"));
    }
    if name.contains(['\n', '\r']) {
        return Err(invalid_name(NameKind::Section, name, "must not contain a line break"));
    }
    Ok(())
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(invalid_name(NameKind::Key, key, "must not be empty"));
    }
    if key.contains(['\n', '\r']) {
        return Err(invalid_name(NameKind::Key, key, "must not contain a line break"));
    }
    Ok(())
}

fn validate_value(value: &str) -> Result<()> {
    if value.contains(['\n', '\r']) {
        return Err(IniError::InvalidValue {
            reason: "must not contain a line break",
        });
    }
    Ok(())
}
