//! Top-level bitstream parser.

use byteorder::{ByteOrder, LittleEndian};
use log::{debug, info};

use super::devices::DeviceRecord;
use super::error::Result;
use super::format::{boundary, header};
use super::idcode;
use super::models::{HeaderMap, PreambleKind};

/// Parser for one Lattice `.bit` configuration bitstream container.
///
/// The instance exclusively owns the raw file bytes for its lifetime.
/// Independent instances share no state and may run concurrently.
///
/// # Example
/// ```no_run
/// use lattice_bit_reader::{BitstreamParser, LATTICE_DEVICES};
///
/// let raw = std::fs::read("design.bit")?;
/// let mut parser = BitstreamParser::new(raw);
/// parser.parse(LATTICE_DEVICES)?;
/// println!("part: {}", parser.header_val("Part"));
/// println!("idcode: {}", parser.header_val("idcode"));
/// println!("payload: {} bits", parser.bit_length());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct BitstreamParser {
    raw: Vec<u8>,
    header: HeaderMap,
    boundary: Option<usize>,
    kind: Option<PreambleKind>,
    payload: Vec<u8>,
    bit_length: usize,
}

impl BitstreamParser {
    /// Create a parser over the full content of a `.bit` file.
    ///
    /// File I/O is the caller's concern; nothing is read or validated
    /// until [`parse`](Self::parse) or [`parse_header`](Self::parse_header)
    /// is called.
    pub fn new(raw: Vec<u8>) -> Self {
        Self {
            raw,
            header: HeaderMap::new(),
            boundary: None,
            kind: None,
            payload: Vec::new(),
            bit_length: 0,
        }
    }

    /// Locate the header/payload boundary and populate the header map.
    ///
    /// # Errors
    /// Returns an error if the file signature, comment-area marker, or
    /// preamble key is missing or malformed. On error no partial state is
    /// usable.
    pub fn parse_header(&mut self) -> Result<()> {
        self.locate_and_parse_header().map(|_| ())
    }

    fn locate_and_parse_header(&mut self) -> Result<usize> {
        let boundary::Boundary { text_start, offset } = boundary::locate(&self.raw)?;
        header::parse_fields(&self.raw[text_start..offset], &mut self.header);
        debug!("Parsed {} header fields, boundary at {}", self.header.len(), offset);
        self.boundary = Some(offset);
        Ok(offset)
    }

    /// Parse the full container: header, preamble signature, payload, and
    /// identification code.
    ///
    /// `devices` is only consulted on the encrypted path; pass
    /// [`LATTICE_DEVICES`](crate::LATTICE_DEVICES) unless you carry your
    /// own device database. A missing idcode (no "Part" field, or no table
    /// match) is not an error; the `idcode` header entry is simply absent.
    ///
    /// # Errors
    /// Returns an error for any structural defect, including a boundary
    /// whose 4-byte value is not one of the two accepted preamble
    /// signatures.
    pub fn parse(&mut self, devices: &[DeviceRecord]) -> Result<()> {
        let boundary = self.locate_and_parse_header()?;

        // The scanner guarantees boundary + 4 <= raw.len().
        let signature = LittleEndian::read_u32(&self.raw[boundary..boundary + 4]);
        let kind = PreambleKind::try_from(signature)?;
        debug!("Preamble signature {:#010x}: {:?}", signature, kind);
        self.kind = Some(kind);

        self.payload = self.raw[boundary..].to_vec();
        self.bit_length = self.payload.len() * 8;

        let idcode = match kind {
            PreambleKind::Plain => idcode::from_payload(&self.payload),
            PreambleKind::Encrypted => {
                idcode::from_part_name(self.header.get_or_empty("Part"), devices)
            }
        };
        if let Some(code) = idcode {
            self.header.set("idcode", &format!("{:08x}", code));
        }

        info!(
            "Bitstream parsed: {:?}, part={:?}, idcode={:?}, {} payload bytes",
            kind,
            self.header.get("Part").unwrap_or("?"),
            self.header.get("idcode").unwrap_or("?"),
            self.payload.len()
        );
        Ok(())
    }

    /// Header field accessor; returns `""` for fields the file lacks.
    pub fn header_val(&self, key: &str) -> &str {
        self.header.get_or_empty(key)
    }

    /// The parsed header fields.
    pub fn header(&self) -> &HeaderMap {
        &self.header
    }

    /// Byte offset of the 4-byte preamble signature, which is also where
    /// the payload starts. `None` until a header parse succeeds.
    pub fn boundary(&self) -> Option<usize> {
        self.boundary
    }

    /// The format variant selected by the preamble signature. `None` until
    /// [`parse`](Self::parse) succeeds.
    pub fn preamble_kind(&self) -> Option<PreambleKind> {
        self.kind
    }

    /// The configuration payload, from the preamble signature to the end
    /// of the file. Empty until [`parse`](Self::parse) succeeds.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Payload length in bits (always 8x the byte length).
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }
}
