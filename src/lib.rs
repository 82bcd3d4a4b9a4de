//! # lattice-bit-reader
//!
//! A reader for Lattice FPGA configuration bitstream container files
//! (Diamond and Radiant `.bit` files).
//!
//! The container mixes a null-delimited ASCII metadata header with an opaque
//! binary configuration payload. Parsing recovers the header fields as a
//! key/value map and the raw payload bytes, plus the target device's 32-bit
//! identification code when the file carries one.
pub mod bit;

// Re-export the main types for convenience
pub use bit::{
    devices::{DeviceRecord, LATTICE_DEVICES},
    error::{BitParseError, Result},
    models::{HeaderMap, PreambleKind},
    BitstreamParser,
};
