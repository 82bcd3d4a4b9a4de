//! Custom error types for the lattice-bit-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Every variant describes one way a file can fail structural parsing.
/// All of them are fatal for the parser instance that produced them; a
/// dispatcher that supports several bitstream formats is expected to try
/// another parser rather than retry this one.
#[derive(Debug, Error)]
pub enum BitParseError {
    /// The file ends before the structure being read is complete.
    #[error("Truncated file: need at least {needed} bytes, got {len}")]
    Truncated { needed: usize, len: usize },

    /// The file starts with 'L' but the 4-byte signature is not `LSCC`.
    #[error("Wrong file signature: expected \"LSCC\", got {0:02x?}")]
    WrongSignature([u8; 4]),

    /// The comment area does not start with the `0xFF 0x00` marker.
    #[error("Comment-area marker not found: expected ff 00, got {0:02x?}")]
    MissingCommentMarker([u8; 2]),

    /// No `0xFF` comment terminator was found after the header text, or
    /// the preamble key sits too close to the comment-area start for a
    /// complete 4-byte signature to precede it.
    #[error("Preamble not found")]
    PreambleNotFound,

    /// No `0xB3` preamble key byte was found after the comment terminator.
    #[error("Preamble key not found")]
    PreambleKeyNotFound,

    /// The byte before the preamble key identifies the format variant and
    /// must be `0xBD` (plain) or `0xBF` (encrypted).
    #[error("Wrong preamble key: got {0:#04x}")]
    WrongPreambleKey(u8),

    /// The 4-byte value at the boundary offset is not a recognized
    /// preamble signature.
    #[error("Missing preamble: got {0:#010x}")]
    MissingPreamble(u32),
}

/// A convenience `Result` type alias using the crate's `BitParseError` type.
pub type Result<T> = std::result::Result<T, BitParseError>;
