//! Rendering a document back to .ini text.
//!
//! Every section with at least one entry is written as a blank line, the
//! `[name]` header, then one `key=value` line per entry. Sections without
//! entries are left out. Comments read from the original text are not kept.

use std::fmt;
use std::io;

use crate::document::Document;
use crate::error::Result;

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in self.sections().filter(|s| !s.is_empty()) {
            write!(f, "\n[{}]\n", section.name())?;
            for entry in section.entries() {
                writeln!(f, "{}={}", entry.key(), entry.value())?;
            }
        }
        Ok(())
    }
}

/// The complete file contents for `doc`, in the document's encoding.
pub fn render(doc: &Document) -> Vec<u8> {
    let text = doc.to_string();
    doc.encoding().encode(&text).into_owned()
}

/// Write `doc` to `out` in .ini format with a single write, then flush.
pub fn write_document<W: io::Write>(doc: &Document, mut out: W) -> Result<()> {
    out.write_all(&render(doc))?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::Encoding;
    use crate::options::ParseOptions;
    use crate::parser::{parse_reader, parse_str};

    #[test]
    fn test_render_layout() {
        let mut doc = Document::new();
        doc.write("First Section", "Value1", "New").unwrap();
        doc.write("Second", "a", " padded ").unwrap();
        doc.write("Second", "b", "").unwrap();

        assert_eq!(
            doc.to_string(),
            "\n[First Section]\nValue1=New\n\n[Second]\na= padded \nb=\n"
        );
    }

    #[test]
    fn test_empty_document_renders_nothing() {
        assert_eq!(Document::new().to_string(), "");
        assert!(render(&Document::new()).is_empty());
    }

    #[test]
    fn test_empty_sections_skipped() {
        let doc = parse_str("[empty]\n[full]\nk=v\n[also empty]\n", &ParseOptions::default())
            .unwrap();
        assert_eq!(doc.section_count(), 3);
        assert_eq!(doc.to_string(), "\n[full]\nk=v\n");
    }

    #[test]
    fn test_comments_dropped() {
        let doc: Document = "; header comment\n[s]\n; inner\nk=v\n".parse().unwrap();
        assert_eq!(doc.to_string(), "\n[s]\nk=v\n");
    }

    #[test]
    fn test_write_document_matches_display() {
        let doc: Document = "[a]\nx=1\n[b]\ny=2\n".parse().unwrap();
        let mut buf = Vec::new();
        write_document(&doc, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), doc.to_string());
    }

    #[test]
    fn test_latin1_written_back_byte_for_byte() {
        let input: &[u8] = b"\n[s\xe9]\nname=caf\xe9\nraw=\xff\n";
        let doc = parse_reader(input, &ParseOptions::default()).unwrap();
        assert_eq!(doc.encoding(), Encoding::Latin1);

        let mut buf = Vec::new();
        write_document(&doc, &mut buf).unwrap();
        assert_eq!(buf, input);
    }
}
