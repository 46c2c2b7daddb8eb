/// Sequence clock calibration.
pub mod clock;
/// Ultrasound clock divisor.
pub mod frequency;
/// Duty and phase.
pub mod gain;
/// Modulation chunks.
pub mod modulation;
/// Point sequence chunks.
pub mod sequence;
/// Reference clock initialization.
pub mod synchronize;

pub use autd3_core::modulation::MOD_BUF_SIZE_MAX;

use crate::firmware::cpu::{Command, ControlFlags, TxDatagram};

/// The maximum number of modulation samples carried by one frame.
pub const MOD_FRAME_SIZE: usize = 124;
/// The minimum length of a modulation buffer.
pub const MOD_BUF_SIZE_MIN: usize = 1;
/// The maximum number of points carried by one frame.
pub const SEQ_POINTS_PER_FRAME: usize = 40;

/// Offset of the modulation chunk size in the header payload.
pub const MOD_SIZE_OFFSET: usize = 0;
/// Offset of the modulation chunk in the header payload.
pub const MOD_DATA_OFFSET: usize = 1;
/// Offset of the number of points (`u16` LE) in the header payload.
pub const SEQ_SIZE_OFFSET: usize = 1;
/// Offset of the sampling frequency division (`u16` LE) in the header payload.
pub const SEQ_DIV_OFFSET: usize = 3;

/// Clears `tx` and writes a new header.
///
/// The bodies are disabled until an operation packs them.
pub fn pack_header(tx: &mut TxDatagram, msg_id: u8, command: Command, flags: ControlFlags) {
    tx.clear();
    let header = tx.header_mut();
    header.msg_id = msg_id;
    header.command = command.code();
    header.flags = flags.bits();
}
