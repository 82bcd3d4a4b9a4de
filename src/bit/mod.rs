//! Core Lattice bitstream reader module

pub mod devices;
pub mod error;
pub mod format;
pub mod models;
mod idcode;
mod parser;

pub use error::{BitParseError, Result};
pub use parser::BitstreamParser;
