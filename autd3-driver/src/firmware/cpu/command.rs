/// Command codes carried in the frame header.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Command {
    /// Normal operation: drive data and modulation.
    Op = 0x00,
    /// Read the lower byte of the CPU firmware version.
    ReadCpuVerLsb = 0x02,
    /// Read the upper byte of the CPU firmware version.
    ReadCpuVerMsb = 0x03,
    /// Read the lower byte of the FPGA firmware version.
    ReadFpgaVerLsb = 0x04,
    /// Read the upper byte of the FPGA firmware version.
    ReadFpgaVerMsb = 0x05,
    /// Point sequence data.
    SeqMode = 0x06,
    /// Initialize the reference clock with the modulation shift constants.
    InitRefClock = 0x07,
    /// Apply per-device sequence clock offsets.
    CalibSeqClock = 0x08,
    /// Reset the device.
    Clear = 0x09,
    /// Set the ultrasound clock divisor.
    UltrasoundCycleCnt = 0x0B,
    /// Duty data.
    WriteDuty = 0x10,
    /// Phase data.
    WritePhase = 0x11,
}

impl Command {
    /// Returns the wire code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Command {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0x00 => Self::Op,
            0x02 => Self::ReadCpuVerLsb,
            0x03 => Self::ReadCpuVerMsb,
            0x04 => Self::ReadFpgaVerLsb,
            0x05 => Self::ReadFpgaVerMsb,
            0x06 => Self::SeqMode,
            0x07 => Self::InitRefClock,
            0x08 => Self::CalibSeqClock,
            0x09 => Self::Clear,
            0x0B => Self::UltrasoundCycleCnt,
            0x10 => Self::WriteDuty,
            0x11 => Self::WritePhase,
            v => return Err(v),
        })
    }
}
