//! Golden parse vectors.
//!
//! Each vector pairs raw .ini text with the document it must parse to,
//! expressed as the document's JSON serialization, or with the error it
//! must fail with.

use serde_json::{json, Value};

use inikit_core::{parse_reader, IniError, ParseOptions};

/// Sections as `(name, [(key, value)])`, in order.
pub type Sections = &'static [(&'static str, &'static [(&'static str, &'static str)])];

/// Error a vector must fail with, by kind and 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedLine(usize),
    LineTooLong(usize),
}

impl ErrorKind {
    /// Classify a parse error, if it is one a vector can describe.
    pub fn of(err: &IniError) -> Option<Self> {
        match err {
            IniError::MalformedLine { line, .. } => Some(ErrorKind::MalformedLine(*line)),
            IniError::LineTooLong { line, .. } => Some(ErrorKind::LineTooLong(*line)),
            _ => None,
        }
    }
}

/// Expected outcome of parsing a vector.
#[derive(Debug, Clone)]
pub enum Expected {
    Sections(Sections),
    Error(ErrorKind),
}

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Raw file contents.
    pub input: &'static [u8],
    /// Parse with [`ParseOptions::legacy`] instead of the defaults.
    pub legacy: bool,
    pub expected: Expected,
}

impl GoldenVector {
    pub fn options(&self) -> ParseOptions {
        if self.legacy {
            ParseOptions::legacy()
        } else {
            ParseOptions::default()
        }
    }
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "empty file",
            input: b"",
            legacy: false,
            expected: Expected::Sections(&[]),
        },
        GoldenVector {
            name: "comments and blank lines only",
            input: b"; one\n\n   \n\t; two\n",
            legacy: false,
            expected: Expected::Sections(&[]),
        },
        GoldenVector {
            name: "single section",
            input: b"[First Section]\nValue1=Old\n",
            legacy: false,
            expected: Expected::Sections(&[("First Section", &[("Value1", "Old")])]),
        },
        GoldenVector {
            name: "key whitespace stripped, value verbatim",
            input: b"[s]\n  key 1 \t=  value 1 \nkey2=a=b\nempty=\n",
            legacy: false,
            expected: Expected::Sections(&[(
                "s",
                &[("key 1", "  value 1 "), ("key2", "a=b"), ("empty", "")],
            )]),
        },
        GoldenVector {
            name: "crlf line endings",
            input: b"[s]\r\nk=v\r\n",
            legacy: false,
            expected: Expected::Sections(&[("s", &[("k", "v")])]),
        },
        GoldenVector {
            name: "pairs before first header discarded",
            input: b"orphan=1\nno separator here\n[s]\nk=v\n",
            legacy: false,
            expected: Expected::Sections(&[("s", &[("k", "v")])]),
        },
        GoldenVector {
            name: "malformed headers skipped",
            input: b"[a]\nx=1\n[unterminated\ny=2\n[]\nz=3\n",
            legacy: false,
            expected: Expected::Sections(&[("a", &[("x", "1"), ("y", "2"), ("z", "3")])]),
        },
        GoldenVector {
            name: "empty sections kept in memory",
            input: b"[empty]\n[full]\nk=v\n",
            legacy: false,
            expected: Expected::Sections(&[("empty", &[]), ("full", &[("k", "v")])]),
        },
        GoldenVector {
            name: "duplicates merged",
            input: b"[a]\nk=1\n[b]\nj=2\n[a]\nk=3\nl=4\n",
            legacy: false,
            expected: Expected::Sections(&[
                ("a", &[("k", "3"), ("l", "4")]),
                ("b", &[("j", "2")]),
            ]),
        },
        GoldenVector {
            name: "duplicates preserved",
            input: b"[a]\nk=1\nk=2\n[b]\nj=2\n[a]\nk=3\n",
            legacy: true,
            expected: Expected::Sections(&[
                ("a", &[("k", "1"), ("k", "2")]),
                ("b", &[("j", "2")]),
                ("a", &[("k", "3")]),
            ]),
        },
        GoldenVector {
            name: "latin-1 bytes",
            input: b"[caf\xe9]\nname=Z\xfcrich\n",
            legacy: false,
            expected: Expected::Sections(&[("café", &[("name", "Zürich")])]),
        },
        GoldenVector {
            name: "missing separator",
            input: b"[s]\nok=1\nbadline\n",
            legacy: false,
            expected: Expected::Error(ErrorKind::MalformedLine(3)),
        },
        GoldenVector {
            name: "empty key",
            input: b"[s]\n = value\n",
            legacy: false,
            expected: Expected::Error(ErrorKind::MalformedLine(2)),
        },
    ]
}

/// JSON form of a document with these sections, matching `Document`'s
/// `Serialize` output.
pub fn sections_json(sections: Sections) -> Value {
    let sections: Vec<Value> = sections
        .iter()
        .map(|(name, entries)| {
            let entries: Vec<Value> = entries
                .iter()
                .map(|(key, value)| json!({ "key": key, "value": value }))
                .collect();
            json!({ "name": name, "entries": entries })
        })
        .collect();
    json!({ "sections": sections })
}

/// Parse a vector and compare against its expected outcome.
pub fn check_vector(vector: &GoldenVector) -> Result<(), String> {
    let result = parse_reader(vector.input, &vector.options());

    match (&vector.expected, result) {
        (Expected::Sections(sections), Ok(doc)) => {
            let actual = serde_json::to_value(&doc).map_err(|e| e.to_string())?;
            let expected = sections_json(*sections);
            if actual == expected {
                Ok(())
            } else {
                Err(format!("expected {expected}, got {actual}"))
            }
        }
        (Expected::Sections(_), Err(e)) => Err(format!("unexpected error: {e}")),
        (Expected::Error(kind), Err(e)) => match ErrorKind::of(&e) {
            Some(actual) if actual == *kind => Ok(()),
            _ => Err(format!("expected {kind:?}, got {e}")),
        },
        (Expected::Error(kind), Ok(doc)) => Err(format!("expected {kind:?}, parsed {doc:?}")),
    }
}

/// Check every golden vector.
///
/// Returns `(name, passed, detail)` for each vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| match check_vector(v) {
            Ok(()) => (v.name.to_string(), true, String::new()),
            Err(detail) => (v.name.to_string(), false, detail),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_names_unique() {
        let vectors = all_vectors();
        let mut names: Vec<_> = vectors.iter().map(|v| v.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), vectors.len());
    }

    #[test]
    fn test_sections_json_shape() {
        let value = sections_json(&[("s", &[("k", "v")])]);
        assert_eq!(
            value,
            json!({ "sections": [{ "name": "s", "entries": [{ "key": "k", "value": "v" }] }] })
        );
    }

    #[test]
    fn test_check_vector_reports_mismatch() {
        let vector = GoldenVector {
            name: "wrong expectation",
            input: b"[s]\nk=v\n",
            legacy: false,
            expected: Expected::Sections(&[("s", &[("k", "other")])]),
        };
        assert!(check_vector(&vector).is_err());
    }
}
