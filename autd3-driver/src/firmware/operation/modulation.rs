use super::{MOD_DATA_OFFSET, MOD_FRAME_SIZE, MOD_SIZE_OFFSET};
use crate::{
    datagram::ModulationCache,
    firmware::cpu::{ControlFlags, TxDatagram},
};

/// Packs the next chunk of the modulation buffer into the header payload and advances the cursor.
///
/// Returns the framing flags of the chunk. A modulation that is not built or already finished packs nothing.
pub fn pack(modulation: &mut ModulationCache, tx: &mut TxDatagram) -> ControlFlags {
    let sent = modulation.sent();
    let Some(buffer) = modulation.buffer() else {
        return ControlFlags::empty();
    };
    if sent >= buffer.len() {
        return ControlFlags::empty();
    }

    let size = (buffer.len() - sent).min(MOD_FRAME_SIZE);
    let mut flags = ControlFlags::empty();
    flags.set(ControlFlags::MOD_BEGIN, sent == 0);
    flags.set(ControlFlags::MOD_END, sent + size >= buffer.len());

    let payload = &mut tx.header_mut().payload;
    payload[MOD_SIZE_OFFSET] = size as u8;
    payload[MOD_DATA_OFFSET..MOD_DATA_OFFSET + size].copy_from_slice(&buffer[sent..sent + size]);

    modulation.advance(size);
    flags
}
