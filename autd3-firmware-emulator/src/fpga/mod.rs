mod emulator;
pub mod params;

pub use emulator::{FPGAEmulator, SeqPoint};
