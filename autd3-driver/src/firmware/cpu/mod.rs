mod ack;
mod command;
mod control_flags;
mod msg_id;

pub use ack::*;
pub use autd3_core::link::{Body, Header, RxMessage, TxDatagram, HEADER_PAYLOAD_SIZE};
pub use command::Command;
pub use control_flags::ControlFlags;
pub use msg_id::MsgIdGenerator;
