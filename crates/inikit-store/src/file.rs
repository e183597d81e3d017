//! IniFile: a document bound to the path it was loaded from.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use inikit_core::{parse_reader, render, Document, IniError, ParseOptions, Section};

use crate::dump::Dump;
use crate::error::{Result, StoreError};

/// A file-backed .ini store.
///
/// Owns its [`Document`] exclusively and remembers where it came from so
/// [`IniFile::save`] can write it back. All query and mutation methods
/// delegate to the document.
///
/// # Design Notes
///
/// - **Single pass I/O**: load and save each open the file once, with no
///   retries. A failed load returns no store at all.
/// - **Save is read-only**: a failed save leaves the in-memory state as it
///   was.
/// - **Save replaces atomically**: the contents go to a sibling temp file
///   that is then renamed over the target, so a failed save leaves the old
///   file intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniFile {
    path: PathBuf,
    document: Document,
}

impl IniFile {
    /// Create an empty store that will save to `path`.
    ///
    /// Nothing is read or written until [`IniFile::save`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_document(path, Document::new())
    }

    /// Bind an existing document to `path`.
    pub fn with_document(path: impl Into<PathBuf>, document: Document) -> Self {
        Self {
            path: path.into(),
            document,
        }
    }

    /// Load the file at `path` with default parse options.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(path, &ParseOptions::default())
    }

    /// Load the file at `path`.
    ///
    /// # Errors
    /// - `NotFound` if the file does not exist.
    /// - `Io` if it cannot be opened or read.
    /// - `Document` if the contents are malformed.
    pub fn load_with(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| StoreError::from_io(path, e))?;

        let document = parse_reader(BufReader::new(file), options).map_err(|e| match e {
            IniError::Io(source) => StoreError::from_io(path, source),
            other => StoreError::Document(other),
        })?;

        tracing::debug!(
            path = %path.display(),
            sections = document.section_count(),
            "loaded ini file"
        );

        Ok(Self::with_document(path, document))
    }

    /// Write the current contents back to the originating path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&self.path)
    }

    /// Write to `path` and make it the new save target.
    ///
    /// The store is only rebound if the write succeeds.
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        self.save_to(&path)?;
        self.path = path;
        Ok(())
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        let contents = render(&self.document);

        let temp_path = temp_path(path);
        fs::write(&temp_path, &contents).map_err(|e| StoreError::from_io(path, e))?;

        if let Err(e) = fs::rename(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(StoreError::from_io(path, e));
        }

        tracing::debug!(
            path = %path.display(),
            sections = self.document.section_count(),
            bytes = contents.len(),
            "saved ini file"
        );
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// A printable tree view of the contents, for debugging.
    pub fn dump(&self) -> Dump<'_> {
        Dump::new(self)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn read(&self, section: &str, key: &str) -> Option<&str> {
        self.document.read(section, key)
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.document.has_section(section)
    }

    pub fn has_entry(&self, section: &str, key: &str) -> bool {
        self.document.has_entry(section, key)
    }

    pub fn section_count(&self) -> usize {
        self.document.section_count()
    }

    pub fn entry_count(&self, section: &str) -> usize {
        self.document.entry_count(section)
    }

    pub fn list_sections(&self) -> Vec<&str> {
        self.document.list_sections()
    }

    pub fn list_entries(&self, section: &str) -> Vec<&str> {
        self.document.list_entries(section)
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> + '_ {
        self.document.sections()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutation
    // ─────────────────────────────────────────────────────────────────────────

    /// Upsert `section`/`key` = `value`. See [`Document::write`].
    pub fn write(&mut self, section: &str, key: &str, value: &str) -> Result<()> {
        Ok(self.document.write(section, key, value)?)
    }

    pub fn delete_section(&mut self, section: &str) {
        self.document.delete_section(section)
    }

    /// Remove an entry, pruning its section if it becomes empty.
    pub fn delete_entry(&mut self, section: &str, key: &str) {
        self.document.delete_entry(section, key)
    }
}

/// `settings.ini` -> `settings.ini.tmp`, in the same directory.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use inikit_core::LineFault;
    use std::fs;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = IniFile::load(dir.path().join("nonexistant.ini")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn test_load_and_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "test.ini", "[First Section]\nValue1=Old\n");

        let ini = IniFile::load(&path).unwrap();
        assert_eq!(ini.path(), path.as_path());
        assert_eq!(ini.read("First Section", "Value1"), Some("Old"));
    }

    #[test]
    fn test_load_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "bad.ini", "[s]\nbadline\n");

        let err = IniFile::load(&path).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Document(IniError::MalformedLine {
                line: 2,
                fault: LineFault::MissingSeparator
            })
        ));
    }

    #[test]
    fn test_save_writes_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "test.ini", "; comment\n[First Section]\nValue1=Old\n");

        let mut ini = IniFile::load(&path).unwrap();
        ini.write("First Section", "Value1", "New").unwrap();
        ini.save().unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "\n[First Section]\nValue1=New\n"
        );
    }

    #[test]
    fn test_new_does_not_touch_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.ini");

        let mut ini = IniFile::new(&path);
        assert!(!path.exists());
        assert_eq!(ini.section_count(), 0);

        ini.write("s", "k", "v").unwrap();
        ini.save().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "\n[s]\nk=v\n");
    }

    #[test]
    fn test_save_failure_keeps_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("out.ini");

        let mut ini = IniFile::new(&path);
        ini.write("s", "k", "v").unwrap();
        let before = ini.clone();

        let err = ini.save().unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        assert_eq!(ini, before);
    }

    #[test]
    fn test_save_as_rebinds_only_on_success() {
        let dir = tempfile::tempdir().unwrap();
        let original = dir.path().join("a.ini");
        let copy = dir.path().join("b.ini");

        let mut ini = IniFile::new(&original);
        ini.write("s", "k", "v").unwrap();

        assert!(ini.save_as(dir.path().join("nope").join("c.ini")).is_err());
        assert_eq!(ini.path(), original.as_path());

        ini.save_as(&copy).unwrap();
        assert_eq!(ini.path(), copy.as_path());
        assert!(copy.exists());
        assert!(!original.exists());
    }

    #[test]
    fn test_failed_save_keeps_old_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "test.ini", "[s]\nk=old\n");

        let mut ini = IniFile::load(&path).unwrap();
        ini.write("s", "k", "new").unwrap();

        // A directory in the temp file's place makes the write fail.
        fs::create_dir(temp_path(&path)).unwrap();
        let err = ini.save().unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "[s]\nk=old\n");

        fs::remove_dir(temp_path(&path)).unwrap();
        ini.save().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "\n[s]\nk=new\n");
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_temp_path_is_sibling() {
        assert_eq!(
            temp_path(Path::new("/etc/app/settings.ini")),
            PathBuf::from("/etc/app/settings.ini.tmp")
        );
    }

    #[test]
    fn test_latin1_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.ini");
        fs::write(&path, b"\n[s]\nname=caf\xe9\n").unwrap();

        let mut ini = IniFile::load(&path).unwrap();
        assert_eq!(ini.read("s", "name"), Some("café"));

        ini.write("s", "city", "Zürich").unwrap();
        ini.save().unwrap();
        assert_eq!(
            fs::read(&path).unwrap(),
            b"\n[s]\nname=caf\xe9\ncity=Z\xfcrich\n"
        );
    }

    #[test]
    fn test_write_rejection_maps_to_store_error() {
        let mut ini = IniFile::new("unused.ini");
        let err = ini.write("", "k", "v").unwrap_err();
        assert!(matches!(
            err,
            StoreError::Document(IniError::InvalidName { .. })
        ));
    }
}
