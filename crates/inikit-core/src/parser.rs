//! Line-oriented .ini parser.
//!
//! Each line has its terminator (`\n` or `\r\n`) removed and leading spaces
//! and tabs skipped, then:
//!
//! - `[name]` opens a section. A header with no closing `]`, or an empty
//!   name, is skipped and the current section stays as it was.
//! - `;` starts a comment. Comments and blank lines are ignored.
//! - Anything else is a `key=value` pair for the current section. Pairs seen
//!   before the first header are discarded. The key is everything before the
//!   first `=` minus trailing spaces and tabs; the value is the rest of the
//!   line, verbatim.
//!
//! A pair without `=` (or with an empty key) fails the whole parse.
//!
//! Input is bytes. It is read as UTF-8 until a line turns out not to be;
//! from then on the whole document is Latin-1 (see [`crate::encoding`]).

use std::borrow::Cow;
use std::io::{BufRead, Read};
use std::str::FromStr;

use crate::document::Document;
use crate::encoding::{decode_latin1, Encoding};
use crate::error::{IniError, LineFault, Result};
use crate::options::{DuplicatePolicy, ParseOptions};

/// Parse a document from a string.
pub fn parse_str(text: &str, options: &ParseOptions) -> Result<Document> {
    parse_reader(text.as_bytes(), options)
}

/// Parse a document from a buffered reader.
///
/// Lines are read into a growable buffer, so there is no length limit unless
/// `options.max_line_len` sets one.
pub fn parse_reader<R: BufRead>(mut reader: R, options: &ParseOptions) -> Result<Document> {
    let mut parser = Parser::new(options);
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = match options.max_line_len {
            // Read at most one byte past the limit so an overlong line is
            // detected without buffering all of it.
            Some(limit) => (&mut reader)
                .take(limit.saturating_add(1) as u64)
                .read_until(b'\n', &mut buf)?,
            None => reader.read_until(b'\n', &mut buf)?,
        };
        if n == 0 {
            break;
        }
        line_no += 1;

        if let Some(limit) = options.max_line_len {
            if n > limit {
                return Err(IniError::LineTooLong {
                    line: line_no,
                    limit,
                });
            }
        }

        let line = match parser.doc.encoding() {
            Encoding::Utf8 => match std::str::from_utf8(&buf) {
                Ok(text) => Cow::Borrowed(text),
                Err(_) => {
                    tracing::debug!(line = line_no, "input is not UTF-8, reading as Latin-1");
                    parser.doc.reinterpret_as_latin1()?;
                    Cow::Owned(decode_latin1(&buf)?)
                }
            },
            Encoding::Latin1 => Cow::Owned(decode_latin1(&buf)?),
        };
        parser.feed(line_no, &line)?;
    }

    Ok(parser.finish())
}

impl FromStr for Document {
    type Err = IniError;

    fn from_str(s: &str) -> Result<Self> {
        parse_str(s, &ParseOptions::default())
    }
}

struct Parser<'a> {
    options: &'a ParseOptions,
    doc: Document,
    /// Index of the section entries are currently added to.
    current: Option<usize>,
}

impl<'a> Parser<'a> {
    fn new(options: &'a ParseOptions) -> Self {
        Self {
            options,
            doc: Document::new(),
            current: None,
        }
    }

    fn feed(&mut self, line_no: usize, raw: &str) -> Result<()> {
        let line = strip_terminator(raw).trim_start_matches([' ', '\t']);

        if let Some(rest) = line.strip_prefix('[') {
            match rest.find(']') {
                Some(end) if end > 0 => {
                    let name = &rest[..end];
                    let idx = match self.options.duplicates {
                        DuplicatePolicy::Merge => self.doc.find_or_create(name)?.0,
                        DuplicatePolicy::Preserve => self.doc.push_section(name)?,
                    };
                    self.current = Some(idx);
                }
                _ => {
                    tracing::warn!(line = line_no, "skipping malformed section header");
                }
            }
            return Ok(());
        }

        if line.is_empty() || line.starts_with(';') {
            return Ok(());
        }

        let Some(idx) = self.current else {
            tracing::trace!(line = line_no, "discarding entry outside any section");
            return Ok(());
        };

        let (key, value) = split_entry(line).map_err(|fault| IniError::MalformedLine {
            line: line_no,
            fault,
        })?;

        let section = self.doc.section_at_mut(idx);
        match self.options.duplicates {
            DuplicatePolicy::Merge => section.put(key, value),
            DuplicatePolicy::Preserve => section.append(key, value),
        }
    }

    fn finish(self) -> Document {
        self.doc
    }
}

fn strip_terminator(raw: &str) -> &str {
    match raw.strip_suffix('\n') {
        Some(line) => line.strip_suffix('\r').unwrap_or(line),
        None => raw,
    }
}

/// Split `key=value` at the first `=`.
fn split_entry(line: &str) -> std::result::Result<(&str, &str), LineFault> {
    let eq = line.find('=').ok_or(LineFault::MissingSeparator)?;
    let key = line[..eq].trim_end_matches([' ', '\t']);
    if key.is_empty() {
        return Err(LineFault::EmptyKey);
    }
    Ok((key, &line[eq + 1..]))
}
