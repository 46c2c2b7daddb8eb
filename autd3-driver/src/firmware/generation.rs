use crate::firmware::cpu::MsgIdGenerator;

/// The wire protocol generation spoken with the devices.
///
/// The generation is fixed when a controller is opened. Frames of different generations must not be mixed in one session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ProtocolGeneration {
    /// Duty and phase are packed into one 16-bit word per transducer and written by a single `OP` frame.
    ///
    /// This generation supports modulation, point sequence, and clock synchronization.
    #[default]
    Combined,
    /// Duty and phase are written by separate `WRITE_DUTY` and `WRITE_PHASE` frames at full resolution.
    ///
    /// The clock divisor of each device is configurable. There is no modulation buffer.
    Split,
}

impl ProtocolGeneration {
    /// The smallest message id generated in this generation.
    #[must_use]
    pub const fn msg_id_min(self) -> u8 {
        match self {
            Self::Combined => 0x20,
            Self::Split => 0x01,
        }
    }

    /// The largest message id generated in this generation.
    #[must_use]
    pub const fn msg_id_max(self) -> u8 {
        match self {
            Self::Combined => 0xBF,
            Self::Split => 0xFE,
        }
    }

    /// Creates a message id generator for this generation.
    #[must_use]
    pub const fn msg_id_generator(self) -> MsgIdGenerator {
        MsgIdGenerator::new(self.msg_id_min(), self.msg_id_max())
    }
}
