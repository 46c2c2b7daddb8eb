/// Definitions of the frame header and acknowledgment.
pub mod cpu;
mod generation;
/// Frame packing for each command.
pub mod operation;
/// Transmission of frames and acknowledgment handling.
pub mod transmission;
/// Firmware version information.
pub mod version;

pub use generation::ProtocolGeneration;
