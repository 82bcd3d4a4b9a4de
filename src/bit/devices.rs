//! Device identity records consumed by the encrypted-format idcode lookup.

/// One known FPGA device: its JTAG identification code, the manufacturer
/// it belongs to, and the model name its "Part" header values start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceRecord {
    pub idcode: u32,
    pub manufacturer: &'static str,
    pub model: &'static str,
}

/// Built-in table of common Lattice parts.
///
/// Encrypted bitstreams only name the device in their "Part" header field,
/// so the idcode has to come from a table like this one. Callers with a
/// fuller device database can pass their own slice instead.
pub const LATTICE_DEVICES: &[DeviceRecord] = &[
    DeviceRecord { idcode: 0x2111_1043, manufacturer: "lattice", model: "LFE5U-12" },
    DeviceRecord { idcode: 0x4111_1043, manufacturer: "lattice", model: "LFE5U-25" },
    DeviceRecord { idcode: 0x4111_2043, manufacturer: "lattice", model: "LFE5U-45" },
    DeviceRecord { idcode: 0x4111_3043, manufacturer: "lattice", model: "LFE5U-85" },
    DeviceRecord { idcode: 0x0111_1043, manufacturer: "lattice", model: "LFE5UM-25" },
    DeviceRecord { idcode: 0x0111_2043, manufacturer: "lattice", model: "LFE5UM-45" },
    DeviceRecord { idcode: 0x0111_3043, manufacturer: "lattice", model: "LFE5UM-85" },
    DeviceRecord { idcode: 0x8111_1043, manufacturer: "lattice", model: "LFE5UM5G-25" },
    DeviceRecord { idcode: 0x8111_2043, manufacturer: "lattice", model: "LFE5UM5G-45" },
    DeviceRecord { idcode: 0x8111_3043, manufacturer: "lattice", model: "LFE5UM5G-85" },
    DeviceRecord { idcode: 0x010f_0043, manufacturer: "lattice", model: "LIFCL-17" },
    DeviceRecord { idcode: 0x010f_1043, manufacturer: "lattice", model: "LIFCL-40" },
];
