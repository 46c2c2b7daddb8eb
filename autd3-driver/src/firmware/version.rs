use derive_more::Display;

/// Firmware version information of a device.
///
/// Each version is assembled from two byte reads as `msb << 8 | lsb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[display("{idx}: CPU = v{cpu_version:#06X}, FPGA = v{fpga_version:#06X}")]
pub struct FirmwareInfo {
    /// The index of the device.
    pub idx: usize,
    /// The version of the CPU firmware.
    pub cpu_version: u16,
    /// The version of the FPGA firmware.
    pub fpga_version: u16,
}

impl FirmwareInfo {
    /// Creates a new [`FirmwareInfo`] from the bytes read from the device.
    #[must_use]
    pub const fn from_bytes(idx: usize, cpu: (u8, u8), fpga: (u8, u8)) -> Self {
        Self {
            idx,
            cpu_version: (cpu.1 as u16) << 8 | cpu.0 as u16,
            fpga_version: (fpga.1 as u16) << 8 | fpga.0 as u16,
        }
    }
}
