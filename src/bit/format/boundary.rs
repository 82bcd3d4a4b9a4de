//! Preamble/boundary scanning.
//!
//! Locates the byte offset separating the textual comment area from the
//! binary configuration payload. The scan tolerates both container
//! variants (Diamond files start directly with the comment marker, Radiant
//! files prepend an `LSCC` signature) and any amount of extra `0xFF`
//! padding before the preamble key, as produced for MachXO3D parts.

use log::{debug, trace};

use crate::bit::error::{BitParseError, Result};

/// File-type signature at the start of Radiant `.bit` files.
pub const FILE_SIGNATURE: &[u8; 4] = b"LSCC";

/// Two-byte marker opening the comment area.
pub const COMMENT_START: [u8; 2] = [0xff, 0x00];

/// Byte terminating the comment area (also the first preamble byte).
pub const COMMENT_END: u8 = 0xff;

/// Preamble key byte; the last byte of the 4-byte preamble signature.
pub const PREAMBLE_KEY: u8 = 0xb3;

/// Variant byte preceding the preamble key in plain bitstreams.
pub const KEY_PLAIN: u8 = 0xbd;

/// Variant byte preceding the preamble key in encrypted bitstreams.
pub const KEY_ENCRYPTED: u8 = 0xbf;

/// Offsets computed by [`locate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    /// First byte of the null-delimited header text.
    pub text_start: usize,
    /// Start of the 4-byte preamble signature; the payload begins here.
    /// Always `>= text_start`.
    pub offset: usize,
}

/// Find the boundary between header text and configuration payload.
///
/// Every byte access is bounds-checked; inputs too short to contain the
/// expected structure fail with an error rather than reading out of range.
pub fn locate(raw: &[u8]) -> Result<Boundary> {
    let mut pos = 0;

    // Radiant files carry an "LSCC" signature before the comment area.
    if raw.first() == Some(&b'L') {
        let sig = raw.get(..4).ok_or(BitParseError::Truncated {
            needed: 4,
            len: raw.len(),
        })?;
        if sig != FILE_SIGNATURE {
            let mut got = [0u8; 4];
            got.copy_from_slice(sig);
            return Err(BitParseError::WrongSignature(got));
        }
        trace!("LSCC signature present, Radiant-style container");
        pos += 4;
    }

    // Comment area opens with 0xFF 0x00.
    let marker = raw.get(pos..pos + 2).ok_or(BitParseError::Truncated {
        needed: pos + 2,
        len: raw.len(),
    })?;
    if marker != COMMENT_START {
        return Err(BitParseError::MissingCommentMarker([marker[0], marker[1]]));
    }
    pos += 2;
    let text_start = pos;

    // The first 0xFF after the text delimits the comment area.
    let comment_end = raw[pos..]
        .iter()
        .position(|&b| b == COMMENT_END)
        .map(|i| pos + i)
        .ok_or(BitParseError::PreambleNotFound)?;

    // Scan forward for the preamble key rather than requiring adjacency;
    // MachXO3D files insert extra 0xFF padding here.
    let key_pos = raw[comment_end..]
        .iter()
        .position(|&b| b == PREAMBLE_KEY)
        .map(|i| comment_end + i)
        .ok_or(BitParseError::PreambleKeyNotFound)?;

    // The byte before the key selects the format variant.
    let variant = raw[key_pos - 1];
    if variant != KEY_PLAIN && variant != KEY_ENCRYPTED {
        return Err(BitParseError::WrongPreambleKey(variant));
    }

    // The signature is FF FF BD|BF B3; the key is its last byte. A key
    // this close to the comment-area start cannot carry a full signature,
    // so the boundary would land inside (or before) the header text.
    if key_pos < text_start + 3 {
        return Err(BitParseError::PreambleNotFound);
    }
    let offset = key_pos - 3;
    debug!(
        "Boundary located: text at {}..{}, preamble key at {}",
        text_start, offset, key_pos
    );
    Ok(Boundary { text_start, offset })
}
