//! File format parsing layer for Lattice `.bit` container files.
//!
//! This module provides the mid-level parsing layer that bridges between
//! raw file bytes and the high-level
//! [`BitstreamParser`](crate::bit::parser::BitstreamParser).
//!
//! # Module Organization
//!
//! - [`boundary`]: Locates the boundary between header text and payload
//! - [`header`]: Parses the null-delimited `Key: Value` header text
//!
//! # Architecture
//!
//! ```text
//! File Structure:
//! ┌──────────────────────┐
//! │ "LSCC"  (Radiant     │ ← optional, boundary::locate()
//! │  files only)         │
//! ├──────────────────────┤
//! │ FF 00                │ ← comment-area start marker
//! ├──────────────────────┤
//! │ Key: Value\0 ...     │ ← header::parse_fields()
//! │ (null-delimited)     │
//! ├──────────────────────┤
//! │ FF .. FF BD|BF B3    │ ← 4-byte preamble signature
//! ├──────────────────────┤
//! │ Configuration        │ ← opaque payload, handed downstream
//! │ payload              │
//! └──────────────────────┘
//! ```

pub mod boundary;
pub mod header;
