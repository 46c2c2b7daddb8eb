#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(rustdoc::missing_crate_level_docs)]

//! Emulator of the AUTD3 firmware.
//!
//! [`CPUEmulator`] interprets the frames sent by the host and writes into the memory of [`FPGAEmulator`].

pub mod cpu;
pub mod fpga;

pub use cpu::CPUEmulator;
pub use fpga::FPGAEmulator;
