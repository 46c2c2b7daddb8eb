use autd3_core::{
    common::rad,
    gain::{Drive, Gain, GainError},
    geometry::{Geometry, Point3},
};

/// [`Gain`] to produce a single focal point.
///
/// The phase of each transducer is the propagation distance to the focal point times the wavenumber of its device.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Focus {
    /// The position of the focal point.
    pub pos: Point3,
    /// The normalized amplitude in `[0, 1]`.
    pub amp: f32,
}

impl Focus {
    /// Creates a new [`Focus`] with the maximum amplitude.
    #[must_use]
    pub const fn new(pos: Point3) -> Self {
        Self { pos, amp: 1.0 }
    }
}

impl Gain for Focus {
    fn calc(&self, geometry: &Geometry) -> Result<Vec<Vec<Drive>>, GainError> {
        Ok(Self::transform(geometry, |dev, tr| {
            let dist = (tr.position() - self.pos).norm();
            Drive::from_amp_phase(self.amp, dist * dev.wavenumber() * rad, dev.cycle())
        }))
    }
}
