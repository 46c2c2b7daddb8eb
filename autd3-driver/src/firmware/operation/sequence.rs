use super::{SEQ_DIV_OFFSET, SEQ_POINTS_PER_FRAME, SEQ_SIZE_OFFSET};
use crate::{
    datagram::PointSequence,
    firmware::cpu::{ControlFlags, TxDatagram},
};

use autd3_core::geometry::Geometry;

/// The amplitude byte sent with every point.
pub const SEQ_POINT_AMP: u8 = 0xFF;
/// The number of bytes of one encoded point.
pub const SEQ_POINT_SIZE: usize = 10;

/// Encodes a fixed-point coordinate into 24 bits with the sign in the top bit of the last byte.
#[must_use]
pub const fn encode_point(v: i32) -> [u8; 3] {
    [
        (v & 0xFF) as u8,
        ((v >> 8) & 0xFF) as u8,
        (((v as u32 & 0x8000_0000) >> 24) | ((v as u32 & 0x007F_0000) >> 16)) as u8,
    ]
}

/// Decodes a coordinate packed by [`encode_point`] by sign-extending from bit 23.
#[must_use]
pub const fn decode_point(b: [u8; 3]) -> i32 {
    let raw = (b[2] as u32) << 16 | (b[1] as u32) << 8 | b[0] as u32;
    ((raw << 8) as i32) >> 8
}

/// Packs the next points of the sequence and advances the cursor.
///
/// Each point is converted into the local coordinate of each device and quantized by `wavelength / 256`.
pub fn pack(seq: &mut PointSequence, geometry: &Geometry, tx: &mut TxDatagram) -> ControlFlags {
    let sent = seq.sent();
    let len = seq.points().len();
    let size = len.saturating_sub(sent).min(SEQ_POINTS_PER_FRAME);

    let mut flags = ControlFlags::SEQ_MODE;
    flags.set(ControlFlags::SEQ_BEGIN, sent == 0);
    flags.set(ControlFlags::SEQ_END, sent + size >= len);

    let payload = &mut tx.header_mut().payload;
    payload[SEQ_SIZE_OFFSET..SEQ_SIZE_OFFSET + 2].copy_from_slice(&(size as u16).to_le_bytes());
    payload[SEQ_DIV_OFFSET..SEQ_DIV_OFFSET + 2]
        .copy_from_slice(&seq.sampling_frequency_division().to_le_bytes());

    let points = &seq.points()[sent..sent + size];
    geometry.iter().for_each(|dev| {
        let unit = dev.wavelength() / 256.;
        let body = tx.body_mut(dev.idx()).data_mut();
        points.iter().enumerate().for_each(|(i, p)| {
            let local = dev.local_position(p);
            let mut bytes = [0u8; SEQ_POINT_SIZE];
            bytes[0..3].copy_from_slice(&encode_point((local.x / unit) as i32));
            bytes[3..6].copy_from_slice(&encode_point((local.y / unit) as i32));
            bytes[6..9].copy_from_slice(&encode_point((local.z / unit) as i32));
            bytes[9] = SEQ_POINT_AMP;
            body[i * SEQ_POINT_SIZE / 2..(i + 1) * SEQ_POINT_SIZE / 2]
                .iter_mut()
                .zip(bytes.chunks_exact(2))
                .for_each(|(dst, b)| *dst = u16::from_le_bytes([b[0], b[1]]));
        });
    });
    tx.set_bodies_enabled(true);

    seq.advance(size);
    flags
}
