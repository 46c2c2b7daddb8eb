use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// PDO input data representation
///
/// `ack` echoes the message id of the last processed frame, `data` carries a command specific response.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, IntoBytes, Immutable, FromBytes, KnownLayout)]
#[repr(C)]
pub struct RxMessage {
    data: u8,
    ack: u8,
}

impl RxMessage {
    /// Creates a new [`RxMessage`].
    #[must_use]
    pub const fn new(data: u8, ack: u8) -> Self {
        Self { data, ack }
    }

    /// Creates a new [`RxMessage`] from a 16-bit acknowledgment word.
    #[must_use]
    pub const fn from_word(word: u16) -> Self {
        Self {
            data: (word & 0xFF) as u8,
            ack: (word >> 8) as u8,
        }
    }

    /// Returns the received data.
    #[must_use]
    pub const fn data(&self) -> u8 {
        self.data
    }

    /// Returns the acknowledgement.
    #[must_use]
    pub const fn ack(&self) -> u8 {
        self.ack
    }

    /// Returns the acknowledgment word, `ack << 8 | data`.
    #[must_use]
    pub const fn word(&self) -> u16 {
        (self.ack as u16) << 8 | self.data as u16
    }
}
