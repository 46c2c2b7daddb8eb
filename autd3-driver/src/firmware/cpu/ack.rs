use super::RxMessage;

/// The modulus of the sequence clock lap counter.
pub const LAP_MODULUS: u16 = 1000;
/// The mask to extract the lap counter from an acknowledgment word.
pub const LAP_MASK: u16 = 0x03FF;
/// The tag in the acknowledgment of a device that has finished receiving a point sequence.
pub const SEQ_LAP_REPORT_TAG: u8 = 0xC0;
/// The tag in the acknowledgment of a device that has applied the sequence clock offset.
pub const SEQ_CALIB_DONE_TAG: u8 = 0xE0;
/// The mask applied to the acknowledgment byte when matching a tag.
pub const LAP_TAG_MASK: u8 = 0xE0;

/// A decoded acknowledgment of one device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AckRecord {
    /// The index of the device.
    pub dev_idx: usize,
    /// The echoed message id.
    pub msg_id: u8,
    /// The response payload.
    pub data: u8,
}

/// Decodes the acknowledgments of all devices in device order.
pub fn decode_ack(rx: &[RxMessage]) -> impl Iterator<Item = AckRecord> + '_ {
    rx.iter().enumerate().map(|(dev_idx, r)| AckRecord {
        dev_idx,
        msg_id: r.ack(),
        data: r.data(),
    })
}

/// Checks for each device whether the acknowledgment matches `msg_id` under `mask`.
pub fn check_if_msg_is_processed(
    msg_id: u8,
    mask: u8,
    rx: &[RxMessage],
) -> impl Iterator<Item = bool> + '_ {
    decode_ack(rx).map(move |r| (r.msg_id & mask) == msg_id)
}

/// Extracts the sequence clock lap counter of each device.
pub fn laps(rx: &[RxMessage]) -> impl Iterator<Item = u16> + '_ {
    rx.iter().map(|r| r.word() & LAP_MASK)
}
