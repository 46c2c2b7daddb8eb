mod focus;
mod null;
mod uniform;

pub use focus::Focus;
pub use null::Null;
pub use uniform::Uniform;
