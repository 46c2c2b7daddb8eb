use autd3_core::{gain::Drive, geometry::Geometry};

use crate::firmware::cpu::TxDatagram;

/// Encodes a drive into the combined 16-bit word, duty in the upper byte and phase in the lower byte.
///
/// Both values are rescaled from device clock cycles to 8 bits. A duty of `cycle / 2` saturates at 255.
#[must_use]
pub fn encode_combined(drive: Drive, cycle: u16) -> u16 {
    let cycle = cycle.max(1) as f32;
    let duty = (drive.duty() as f32 * 510. / cycle).round().min(255.) as u16;
    let phase = ((drive.phase() as f32 * 256. / cycle).round() as u32 % 256) as u16;
    duty << 8 | phase
}

/// Packs combined duty/phase words into the bodies.
pub fn pack_combined(drives: &[Vec<Drive>], geometry: &Geometry, tx: &mut TxDatagram) {
    geometry.iter().zip(drives).for_each(|(dev, d)| {
        tx.body_mut(dev.idx())
            .data_mut()
            .iter_mut()
            .zip(d)
            .for_each(|(dst, &drive)| *dst = encode_combined(drive, dev.cycle()));
    });
    tx.set_bodies_enabled(true);
}

/// Packs duties into the bodies.
pub fn pack_duty(drives: &[Vec<Drive>], tx: &mut TxDatagram) {
    pack_with(drives, tx, Drive::duty);
}

/// Packs phases into the bodies.
pub fn pack_phase(drives: &[Vec<Drive>], tx: &mut TxDatagram) {
    pack_with(drives, tx, Drive::phase);
}

fn pack_with(drives: &[Vec<Drive>], tx: &mut TxDatagram, f: impl Fn(&Drive) -> u16) {
    tx.bodies_mut().iter_mut().zip(drives).for_each(|(body, d)| {
        body.data_mut()
            .iter_mut()
            .zip(d)
            .for_each(|(dst, drive)| *dst = f(drive));
    });
    tx.set_bodies_enabled(true);
}
