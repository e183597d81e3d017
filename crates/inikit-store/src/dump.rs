//! Human-readable dump of a store, for debugging.

use std::fmt;

use crate::file::IniFile;

/// Tree view of an [`IniFile`], produced by [`IniFile::dump`].
///
/// ```text
/// Dump of settings.ini:
///
/// [First Section]
///  |
///  +- `Value1' = `New'
///
/// ```
///
/// Unlike the saved form, sections without entries are listed too.
pub struct Dump<'a> {
    file: &'a IniFile,
}

impl<'a> Dump<'a> {
    pub(crate) fn new(file: &'a IniFile) -> Self {
        Self { file }
    }
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dump of {}:", self.file.path().display())?;
        writeln!(f)?;
        for section in self.file.sections() {
            writeln!(f, "[{}]", section.name())?;
            for entry in section.entries() {
                writeln!(f, " |")?;
                writeln!(f, " +- `{}' = `{}'", entry.key(), entry.value())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use inikit_core::Document;

    use crate::file::IniFile;

    #[test]
    fn test_dump_layout() {
        let doc: Document = "[a]\nx=1\ny=\n[empty]\n".parse().unwrap();
        let ini = IniFile::with_document("test.ini", doc);

        assert_eq!(
            ini.dump().to_string(),
            "Dump of test.ini:\n\n[a]\n |\n +- `x' = `1'\n |\n +- `y' = `'\n\n[empty]\n\n"
        );
    }

    #[test]
    fn test_dump_empty() {
        let ini = IniFile::new("empty.ini");
        assert_eq!(ini.dump().to_string(), "Dump of empty.ini:\n\n");
    }
}
