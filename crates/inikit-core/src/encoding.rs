//! Mapping between document text and file bytes.
//!
//! Files are byte-oriented: only the ASCII delimiters `[`, `]`, `=` and `;`
//! mean anything to the parser. A file that is valid UTF-8 is read as UTF-8.
//! Anything else is read as Latin-1, one `char` per byte, which accepts every
//! byte sequence and gives the same bytes back on save.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How a document's text is stored on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    #[default]
    Utf8,
    /// ISO 8859-1: byte `b` is the char `U+00bb`.
    Latin1,
}

impl Encoding {
    /// Bytes to write for `text`.
    ///
    /// Under `Latin1`, chars above `U+00FF` have no single-byte form and are
    /// written as their UTF-8 bytes.
    pub fn encode(self, text: &str) -> Cow<'_, [u8]> {
        match self {
            Encoding::Utf8 => Cow::Borrowed(text.as_bytes()),
            Encoding::Latin1 if text.is_ascii() => Cow::Borrowed(text.as_bytes()),
            Encoding::Latin1 => Cow::Owned(encode_latin1(text)),
        }
    }
}

/// Decode bytes as Latin-1. Never fails on content, only on allocation.
pub fn decode_latin1(bytes: &[u8]) -> Result<String> {
    let mut out = String::new();
    // Every byte becomes at most two bytes of UTF-8.
    out.try_reserve_exact(bytes.len().saturating_mul(2))?;
    out.extend(bytes.iter().copied().map(char::from));
    Ok(out)
}

fn encode_latin1(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        match u8::try_from(c) {
            Ok(byte) => out.push(byte),
            Err(_) => out.extend_from_slice(c.encode_utf8(&mut [0; 4]).as_bytes()),
        }
    }
    out
}
