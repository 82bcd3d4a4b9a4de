//! Identification-code recovery strategies.
//!
//! Plain bitstreams embed the target idcode in the configuration data
//! itself; encrypted bitstreams do not, so the only recourse is matching
//! the "Part" header field against a device table. Both strategies are
//! best-effort: not every bitstream variant carries recoverable identity
//! information, and callers treat a missing idcode as non-fatal.

use byteorder::{BigEndian, ByteOrder};
use log::{debug, trace};

use super::devices::DeviceRecord;

/// Tag byte opening the verification-id block in plain configuration data.
const VERIFY_ID_TAG: u8 = 0xe2;

/// Manufacturer name this parser targets in device tables.
const MANUFACTURER: &str = "lattice";

/// Scan plain configuration data for the verification-id block and read
/// the 32-bit idcode stored 4 bytes past the tag, big-endian.
///
/// The first tag occurrence wins; the candidate is not cross-checked
/// against a device table, so a payload byte that happens to equal the tag
/// value before the real block would yield a wrong code. A tag too close
/// to the end of the data for the code bytes to exist yields no code.
pub fn from_payload(payload: &[u8]) -> Option<u32> {
    let tag_pos = payload.iter().position(|&b| b == VERIFY_ID_TAG)?;
    let code_bytes = payload.get(tag_pos + 4..tag_pos + 8)?;
    let idcode = BigEndian::read_u32(code_bytes);
    debug!("Verification-id block at {}: idcode {:#010x}", tag_pos, idcode);
    Some(idcode)
}

/// Look up the idcode for a "Part" header value in a device table.
///
/// The part name is truncated at its last hyphen (grade/package suffix),
/// then compared against each Lattice record's model name: the first
/// record whose model is a prefix of the truncated name wins.
pub fn from_part_name(part: &str, devices: &[DeviceRecord]) -> Option<u32> {
    let subpart = match part.rfind('-') {
        Some(i) => &part[..i],
        None => part,
    };
    if subpart.is_empty() {
        return None;
    }
    trace!("Device table lookup for sub-part {:?}", subpart);
    devices
        .iter()
        .filter(|d| d.manufacturer == MANUFACTURER)
        .find(|d| subpart.starts_with(d.model))
        .map(|d| {
            debug!("Part {:?} matched model {:?}: idcode {:#010x}", part, d.model, d.idcode);
            d.idcode
        })
}
