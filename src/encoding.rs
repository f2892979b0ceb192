//! Text encodings supported by the editor
//!
//! Files of unknown encoding are decoded by trying [`CANDIDATES`] in order and
//! keeping the first strict success. The order is fixed: a byte sequence that
//! several encodings accept is always attributed to the earliest one.
//!
//! Each candidate is strict so that later ones stay reachable:
//! - `utf-8` rejects malformed sequences
//! - `latin-1` rejects control bytes (NUL, C0 except tab/LF/FF/CR, DEL, C1)
//!   and input that starts with a UTF-16 byte-order mark
//! - `utf-16` requires a byte-order mark and well-formed code units
//! - `cp1252` rejects the five bytes Windows-1252 leaves undefined

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use encoding_rs::{UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252};
use serde::{Deserialize, Serialize};

/// One of the fixed set of encodings a document can be read or written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextEncoding {
    #[default]
    #[serde(rename = "utf-8")]
    Utf8,
    #[serde(rename = "latin-1")]
    Latin1,
    #[serde(rename = "utf-16")]
    Utf16,
    #[serde(rename = "cp1252")]
    Cp1252,
}

/// Read fallback order.
pub const CANDIDATES: [TextEncoding; 4] = [
    TextEncoding::Utf8,
    TextEncoding::Latin1,
    TextEncoding::Utf16,
    TextEncoding::Cp1252,
];

/// Encodings offered as write choices in the Encoding menu.
pub const MENU_CHOICES: [TextEncoding; 3] = [
    TextEncoding::Utf8,
    TextEncoding::Latin1,
    TextEncoding::Utf16,
];

/// Bytes that Windows-1252 does not assign a character to.
const CP1252_UNDEFINED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];

impl TextEncoding {
    /// Canonical lowercase label (`utf-8`, `latin-1`, `utf-16`, `cp1252`)
    pub fn label(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "latin-1",
            TextEncoding::Utf16 => "utf-16",
            TextEncoding::Cp1252 => "cp1252",
        }
    }

    /// Label as shown in the Encoding menu
    pub fn menu_label(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Latin1 => "Latin-1",
            TextEncoding::Utf16 => "UTF-16",
            TextEncoding::Cp1252 => "Windows-1252",
        }
    }

    /// Strictly decode `bytes`, returning `None` if this encoding does not
    /// accept them.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8 => UTF_8
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(Cow::into_owned),
            TextEncoding::Latin1 => {
                if starts_with_utf16_bom(bytes) {
                    return None;
                }
                if bytes.iter().all(|&b| is_latin1_text_byte(b)) {
                    Some(encoding_rs::mem::decode_latin1(bytes).into_owned())
                } else {
                    None
                }
            }
            TextEncoding::Utf16 => {
                let (encoding, bom_len) = encoding_rs::Encoding::for_bom(bytes)?;
                if encoding != UTF_16LE && encoding != UTF_16BE {
                    return None;
                }
                let body = &bytes[bom_len..];
                if body.len() % 2 != 0 {
                    return None;
                }
                encoding
                    .decode_without_bom_handling_and_without_replacement(body)
                    .map(Cow::into_owned)
            }
            TextEncoding::Cp1252 => {
                if bytes.iter().any(|b| CP1252_UNDEFINED.contains(b)) {
                    return None;
                }
                WINDOWS_1252
                    .decode_without_bom_handling_and_without_replacement(bytes)
                    .map(Cow::into_owned)
            }
        }
    }

    /// Strictly encode `text`, returning `None` if any character falls
    /// outside this encoding's repertoire.
    ///
    /// UTF-16 output is little-endian with a byte-order mark.
    pub fn encode(self, text: &str) -> Option<Vec<u8>> {
        match self {
            TextEncoding::Utf8 => Some(text.as_bytes().to_vec()),
            TextEncoding::Latin1 => {
                if encoding_rs::mem::is_str_latin1(text) {
                    Some(encoding_rs::mem::encode_latin1_lossy(text).into_owned())
                } else {
                    None
                }
            }
            TextEncoding::Utf16 => {
                let mut bytes = Vec::with_capacity(2 + text.len() * 2);
                bytes.extend_from_slice(&UTF16_LE_BOM);
                for unit in text.encode_utf16() {
                    bytes.extend_from_slice(&unit.to_le_bytes());
                }
                Some(bytes)
            }
            TextEncoding::Cp1252 => {
                let (bytes, _, had_unmappable) = WINDOWS_1252.encode(text);
                if had_unmappable || bytes.iter().any(|b| CP1252_UNDEFINED.contains(b)) {
                    None
                } else {
                    Some(bytes.into_owned())
                }
            }
        }
    }
}

/// Latin-1 candidate filter: printable Latin-1 plus common whitespace.
fn is_latin1_text_byte(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | 0x0C | b'\r' | 0x20..=0x7E | 0xA0..=0xFF)
}

fn starts_with_utf16_bom(bytes: &[u8]) -> bool {
    bytes.starts_with(&UTF16_LE_BOM) || bytes.starts_with(&UTF16_BE_BOM)
}

/// Decode `bytes` with the first candidate that accepts them.
pub fn decode_with_fallback(bytes: &[u8]) -> Option<(String, TextEncoding)> {
    CANDIDATES.iter().find_map(|&encoding| {
        let decoded = encoding.decode(bytes);
        if decoded.is_none() {
            tracing::debug!("Candidate encoding {} rejected", encoding);
        }
        decoded.map(|text| (text, encoding))
    })
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown encoding label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEncoding(pub String);

impl fmt::Display for UnknownEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown encoding '{}' (expected utf-8, latin-1, utf-16 or cp1252)",
            self.0
        )
    }
}

impl std::error::Error for UnknownEncoding {}

impl FromStr for TextEncoding {
    type Err = UnknownEncoding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" => Ok(TextEncoding::Latin1),
            "utf-16" | "utf16" => Ok(TextEncoding::Utf16),
            "cp1252" | "windows-1252" => Ok(TextEncoding::Cp1252),
            _ => Err(UnknownEncoding(s.to_string())),
        }
    }
}
