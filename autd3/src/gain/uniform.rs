use autd3_core::{
    common::Angle,
    gain::{Drive, Gain, GainError},
    geometry::Geometry,
};

/// [`Gain`] with the same amplitude and phase on every transducer.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Uniform {
    /// The normalized amplitude in `[0, 1]`.
    pub amp: f32,
    /// The phase.
    pub phase: Angle,
}

impl Uniform {
    /// Creates a new [`Uniform`].
    #[must_use]
    pub const fn new(amp: f32, phase: Angle) -> Self {
        Self { amp, phase }
    }
}

impl Gain for Uniform {
    fn calc(&self, geometry: &Geometry) -> Result<Vec<Vec<Drive>>, GainError> {
        Ok(Self::transform(geometry, |dev, _| {
            Drive::from_amp_phase(self.amp, self.phase, dev.cycle())
        }))
    }
}
