use derive_more::Display;
use zerocopy::{FromBytes, FromZeros, Immutable, IntoBytes, KnownLayout};

use super::header::Header;
use crate::link::LinkError;

/// The number of transducers driven by one body.
pub const NUM_TRANS_IN_UNIT: usize = 249;

/// Per-device payload of a frame.
#[repr(C)]
#[derive(Clone, Debug, PartialEq, Eq, IntoBytes, FromBytes, Immutable, KnownLayout)]
pub struct Body {
    data: [u16; NUM_TRANS_IN_UNIT],
}

impl Body {
    /// Returns the payload words.
    #[must_use]
    pub const fn data(&self) -> &[u16; NUM_TRANS_IN_UNIT] {
        &self.data
    }

    /// Returns the mutable payload words.
    #[must_use]
    pub fn data_mut(&mut self) -> &mut [u16; NUM_TRANS_IN_UNIT] {
        &mut self.data
    }
}

/// A frame to be sent to the devices.
///
/// A frame always carries a [`Header`]. Bodies, one per device, are carried only when `num_bodies` is non-zero.
#[derive(Clone, Debug, PartialEq, Eq, Display)]
#[display("TxDatagram(msg_id: {:#04X}, command: {:#04X}, flags: {:#04X}, bodies: {})", header.msg_id, header.command, header.flags, num_bodies)]
pub struct TxDatagram {
    header: Header,
    bodies: Vec<Body>,
    num_bodies: usize,
}

impl TxDatagram {
    /// Creates a new [`TxDatagram`] for `num_devices` devices.
    #[must_use]
    pub fn new(num_devices: usize) -> Self {
        Self {
            header: Header::new_zeroed(),
            bodies: (0..num_devices).map(|_| Body::new_zeroed()).collect(),
            num_bodies: 0,
        }
    }

    /// Returns the number of devices this datagram is sized for.
    #[must_use]
    pub fn num_devices(&self) -> usize {
        self.bodies.len()
    }

    /// Returns the number of bodies to be transmitted.
    #[must_use]
    pub const fn num_bodies(&self) -> usize {
        self.num_bodies
    }

    /// Sets whether the bodies are transmitted.
    pub fn set_bodies_enabled(&mut self, enabled: bool) {
        self.num_bodies = if enabled { self.bodies.len() } else { 0 };
    }

    /// Returns the number of bytes to be transmitted.
    #[must_use]
    pub const fn transmitting_size(&self) -> usize {
        size_of::<Header>() + size_of::<Body>() * self.num_bodies
    }

    /// Returns the header.
    #[must_use]
    pub const fn header(&self) -> &Header {
        &self.header
    }

    /// Returns the mutable header.
    #[must_use]
    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    /// Returns the body of the device at `idx`.
    #[must_use]
    pub fn body(&self, idx: usize) -> &Body {
        &self.bodies[idx]
    }

    /// Returns the mutable body of the device at `idx`.
    #[must_use]
    pub fn body_mut(&mut self, idx: usize) -> &mut Body {
        &mut self.bodies[idx]
    }

    /// Returns the mutable bodies of all devices.
    #[must_use]
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// Zeroes the header and all bodies, and disables the bodies.
    pub fn clear(&mut self) {
        self.header.zero();
        self.bodies.iter_mut().for_each(|b| b.zero());
        self.num_bodies = 0;
    }

    /// Serializes the frame into its wire representation.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.transmitting_size());
        bytes.extend_from_slice(self.header.as_bytes());
        self.bodies[..self.num_bodies]
            .iter()
            .for_each(|b| bytes.extend_from_slice(b.as_bytes()));
        bytes
    }

    /// Deserializes a frame from its wire representation.
    ///
    /// A header-only frame yields a datagram sized for `num_devices` devices with the bodies disabled.
    pub fn from_bytes(bytes: &[u8], num_devices: usize) -> Result<Self, LinkError> {
        let (header, rest) = Header::read_from_prefix(bytes)
            .map_err(|_| LinkError::new(format!("Frame is too short: {} bytes", bytes.len())))?;
        if !rest.is_empty() && rest.len() != size_of::<Body>() * num_devices {
            return Err(LinkError::new(format!(
                "Invalid body size: {} bytes for {} devices",
                rest.len(),
                num_devices
            )));
        }
        let mut tx = Self::new(num_devices);
        tx.header = header;
        if !rest.is_empty() {
            rest.chunks_exact(size_of::<Body>())
                .zip(tx.bodies.iter_mut())
                .try_for_each(|(src, dst)| {
                    *dst = Body::read_from_bytes(src)
                        .map_err(|_| LinkError::new("Invalid body"))?;
                    Ok::<_, LinkError>(())
                })?;
            tx.num_bodies = num_devices;
        }
        Ok(tx)
    }
}
