//! Header text field parsing.
//!
//! The comment area of a `.bit` file is a sequence of null-delimited ASCII
//! lines of the form `Key: Value`. Typical fields are `Part`, `Date`,
//! `Time` and the tool version string.

use log::trace;

use crate::bit::models::HeaderMap;

/// Parse the header text region into `map`.
///
/// Lines are split at the first colon; the value is stored trimmed.
/// Lines without a colon (including any trailing preamble padding that
/// falls inside the region) are skipped. A key seen twice keeps its most
/// recent value.
pub fn parse_fields(text: &[u8], map: &mut HeaderMap) {
    for line in text.split(|&b| b == 0) {
        let line = String::from_utf8_lossy(line);
        if let Some((key, value)) = line.split_once(':') {
            trace!("Header field: {}={}", key, value.trim());
            map.set(key, value);
        }
    }
}
