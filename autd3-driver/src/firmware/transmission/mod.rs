mod option;
mod sender;

pub use option::{SenderOption, SessionState};
pub use sender::{Sender, SEND_MAX_TRIAL, SEQ_LAP_MAX_TRIAL, SYNC_MAX_TRIAL};
