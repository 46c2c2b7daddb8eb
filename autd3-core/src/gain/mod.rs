mod drive;
mod error;

pub use drive::{to_duty, to_phase, Drive};
pub use error::GainError;

use crate::geometry::{Device, Geometry, Transducer};

/// A trait to calculate the duty and phase of each transducer.
///
/// The result has one vector per device, each holding one [`Drive`] per transducer.
pub trait Gain: std::fmt::Debug {
    /// Calculates the drives for the given geometry.
    fn calc(&self, geometry: &Geometry) -> Result<Vec<Vec<Drive>>, GainError>;

    /// Applies `f` to every transducer of every device.
    fn transform<F: Fn(&Device, &Transducer) -> Drive>(
        geometry: &Geometry,
        f: F,
    ) -> Vec<Vec<Drive>>
    where
        Self: Sized,
    {
        geometry
            .iter()
            .map(|dev| dev.iter().map(|tr| f(dev, tr)).collect())
            .collect()
    }
}

impl Gain for Box<dyn Gain> {
    fn calc(&self, geometry: &Geometry) -> Result<Vec<Vec<Drive>>, GainError> {
        self.as_ref().calc(geometry)
    }
}
