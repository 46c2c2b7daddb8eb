mod emulator;
mod operation;
pub mod params;

pub use emulator::CPUEmulator;
