mod datagram;
mod error;
mod sync;

pub use datagram::*;
pub use error::LinkError;
#[doc(inline)]
pub use sync::*;
