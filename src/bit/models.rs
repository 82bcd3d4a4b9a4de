//! Data structures representing bitstream container components

use std::collections::HashMap;

use super::error::{BitParseError, Result};

/// Preamble signature for a plain (unencrypted) bitstream,
/// read little-endian from the boundary offset.
pub const PREAMBLE_PLAIN: u32 = 0xb3bd_ffff;

/// Preamble signature for an encrypted bitstream.
pub const PREAMBLE_ENCRYPTED: u32 = 0xb3bf_ffff;

/// The format variant selected by the 4-byte preamble signature.
///
/// Resolved once after signature validation; each variant has its own
/// identification-code recovery strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreambleKind {
    /// Configuration data in the clear; the idcode is recovered by
    /// scanning the payload for a verification-id block.
    Plain,
    /// Configuration data is encrypted; the idcode can only be recovered
    /// from the "Part" header field via a device table lookup.
    Encrypted,
}

impl TryFrom<u32> for PreambleKind {
    type Error = BitParseError;
    fn try_from(value: u32) -> Result<Self> {
        match value {
            PREAMBLE_PLAIN => Ok(Self::Plain),
            PREAMBLE_ENCRYPTED => Ok(Self::Encrypted),
            other => Err(BitParseError::MissingPreamble(other)),
        }
    }
}

/// The textual metadata fields from the comment area of a `.bit` file.
///
/// Keys are case-sensitive; writing a key that already exists overwrites
/// its value. Values are stored with surrounding whitespace trimmed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeaderMap {
    fields: HashMap<String, String>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, trimming surrounding whitespace from the value.
    /// The most recent write for a key wins.
    pub fn set(&mut self, key: impl Into<String>, value: &str) {
        self.fields.insert(key.into(), value.trim().to_string());
    }

    /// Look up a field value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Look up a field value, returning `""` for missing keys.
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    /// Number of stored fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(key, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
