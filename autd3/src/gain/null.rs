use autd3_core::{
    gain::{Drive, Gain, GainError},
    geometry::Geometry,
};

/// [`Gain`] that output nothing.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Null;

impl Null {
    /// Creates a new [`Null`].
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Gain for Null {
    fn calc(&self, geometry: &Geometry) -> Result<Vec<Vec<Drive>>, GainError> {
        Ok(Self::transform(geometry, |_, _| Drive::NULL))
    }
}
