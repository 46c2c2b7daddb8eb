mod header;
mod rx;
mod tx;

pub use header::{Header, HEADER_PAYLOAD_SIZE};
pub use rx::RxMessage;
pub use tx::{Body, TxDatagram, NUM_TRANS_IN_UNIT};
