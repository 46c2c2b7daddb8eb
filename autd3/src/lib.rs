#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! AUTD3 library over the legacy frame protocol.
//!
//! [`Controller`] opens a [`Link`](autd3_core::link::Link) to the devices and exposes the operations of the protocol.

/// The controller.
pub mod controller;
/// Primitive gains.
pub mod gain;
/// Links to the devices.
pub mod link;
/// Primitive modulations.
pub mod modulation;
/// A set of commonly used items.
pub mod prelude;

pub use autd3_core as core;
pub use autd3_driver as driver;

pub use controller::Controller;

#[cfg(test)]
mod tests {
    use autd3_core::{devices::AUTD3, geometry::Geometry};

    pub fn create_geometry(n: usize) -> Geometry {
        Geometry::new((0..n).map(|_| AUTD3::default().into()).collect())
    }
}
