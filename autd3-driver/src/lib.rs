#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! A base library to drive AUTD3 devices over the legacy frame protocol.
//!
//! This crate packs frames, tracks message ids and acknowledgments, and streams modulation and point sequences.

/// Stateful payloads that are streamed over several frames.
pub mod datagram;
/// Error definitions.
pub mod error;
/// Firmware related modules.
pub mod firmware;

pub use autd3_core as core;
