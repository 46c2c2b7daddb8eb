use std::time::Duration;

use crate::link::{Body, Header, RxMessage};

/// The size of the output frame of a device in bytes.
pub const EC_OUTPUT_FRAME_SIZE: usize = size_of::<Header>() + size_of::<Body>();
/// The size of the input frame of a device in bytes.
pub const EC_INPUT_FRAME_SIZE: usize = size_of::<RxMessage>();
/// The number of devices in one EtherCAT frame.
pub const EC_DEVICE_PER_FRAME: usize = 2;
/// The length of an EtherCAT frame on the wire in bytes.
pub const EC_FRAME_LENGTH: usize =
    14 + 2 + (10 + EC_OUTPUT_FRAME_SIZE + EC_INPUT_FRAME_SIZE + 2) * EC_DEVICE_PER_FRAME + 10;
/// The bus speed in bits per second.
pub const EC_SPEED_BPS: f64 = 100.0 * 1000.0 * 1000.0;
/// The time to transfer one EtherCAT frame in seconds.
pub const EC_TRAFFIC_DELAY: f64 = EC_FRAME_LENGTH as f64 * 8.0 / EC_SPEED_BPS;

/// The delay between two acknowledgment polls for `num_devices` devices.
///
/// This is the traffic delay per device scaled by the number of devices, rounded up to whole milliseconds.
#[must_use]
pub fn poll_interval(num_devices: usize) -> Duration {
    let ms = (EC_TRAFFIC_DELAY * 1000.0 / EC_DEVICE_PER_FRAME as f64 * num_devices as f64).ceil();
    Duration::from_millis(ms as u64)
}
