#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Core traits and types for AUTD3.

/// Common constants and units.
pub mod common;
/// AUTD3 device definition.
pub mod devices;
/// Definitions for EtherCAT.
pub mod ethercat;
/// Core traits for Gain.
pub mod gain;
/// Geometry related modules.
pub mod geometry;
/// A interface to the device.
pub mod link;
/// Core traits for Modulation.
pub mod modulation;
/// Utilities for sleeping between polls.
pub mod sleep;
