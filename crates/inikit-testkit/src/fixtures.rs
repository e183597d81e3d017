//! Test fixtures and helpers.
//!
//! Common setup code for tests that need real files on disk.

use std::fs;
use std::path::PathBuf;

use inikit_store::IniFile;
use tempfile::TempDir;

/// A small file exercising comments, blank lines and key whitespace.
pub const SAMPLE_INI: &str = "\
; Sample configuration
[First Section]
Value1=Old
Value2 = Two

[Second Section]
Value3=Three
";

/// A temporary directory holding .ini files; removed on drop.
pub struct TempIni {
    dir: TempDir,
}

impl TempIni {
    /// Create a new, empty temporary directory.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    /// Path of `name` inside the directory. The file need not exist.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `contents` to `name` and return its path.
    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).expect("failed to write fixture file");
        path
    }

    /// Write [`SAMPLE_INI`] to `name` and return its path.
    pub fn sample(&self, name: &str) -> PathBuf {
        self.write(name, SAMPLE_INI)
    }

    /// Read `name` back as a string.
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("failed to read fixture file")
    }

    /// Write `contents` to `name` and load it.
    pub fn load(&self, name: &str, contents: &str) -> IniFile {
        let path = self.write(name, contents);
        IniFile::load(path).expect("fixture file should load")
    }
}

impl Default for TempIni {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_loads() {
        let fixture = TempIni::new();
        let ini = fixture.load("sample.ini", SAMPLE_INI);

        assert_eq!(ini.list_sections(), vec!["First Section", "Second Section"]);
        assert_eq!(ini.read("First Section", "Value2"), Some(" Two"));
        assert_eq!(ini.read("Second Section", "Value3"), Some("Three"));
    }

    #[test]
    fn test_write_and_read_back() {
        let fixture = TempIni::new();
        let path = fixture.write("a.ini", "[s]\nk=v\n");

        assert!(path.exists());
        assert_eq!(fixture.read("a.ini"), "[s]\nk=v\n");
        assert!(!fixture.path("missing.ini").exists());
    }
}
