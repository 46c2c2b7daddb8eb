use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// The size of the command specific region of the [`Header`].
pub const HEADER_PAYLOAD_SIZE: usize = 125;

/// The global header of a frame.
///
/// The interpretation of `payload` depends on `command`.
#[repr(C, align(2))]
#[derive(Clone, Debug, PartialEq, Eq, IntoBytes, FromBytes, Immutable, KnownLayout)]
pub struct Header {
    /// The message id.
    pub msg_id: u8,
    /// The control flags.
    pub flags: u8,
    /// The command code.
    pub command: u8,
    /// The command specific payload.
    pub payload: [u8; HEADER_PAYLOAD_SIZE],
}

#[cfg(test)]
mod tests {
    use std::mem::{offset_of, size_of};

    use zerocopy::FromZeros;

    use super::*;

    #[test]
    fn size() {
        assert_eq!(128, size_of::<Header>());
        assert_eq!(0, offset_of!(Header, msg_id));
        assert_eq!(1, offset_of!(Header, flags));
        assert_eq!(2, offset_of!(Header, command));
        assert_eq!(3, offset_of!(Header, payload));
    }

    #[test]
    fn as_bytes() {
        let mut header = Header::new_zeroed();
        header.msg_id = 0x21;
        header.flags = 0x08;
        header.command = 0x09;
        header.payload[0] = 0xFF;
        let bytes = header.as_bytes();
        assert_eq!(&[0x21, 0x08, 0x09, 0xFF], &bytes[..4]);
        assert_eq!(Ok(header.clone()), Header::read_from_bytes(bytes).map_err(|_| ()));
    }
}
