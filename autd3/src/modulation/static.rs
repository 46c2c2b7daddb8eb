use autd3_core::modulation::{Modulation, ModulationError, SamplingConfig};

/// [`Modulation`] with a constant amplitude.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Static {
    /// The amplitude.
    pub amp: u8,
}

impl Static {
    /// Creates a new [`Static`] with the maximum amplitude.
    #[must_use]
    pub const fn new() -> Self {
        Self { amp: u8::MAX }
    }
}

impl Default for Static {
    fn default() -> Self {
        Self::new()
    }
}

impl Modulation for Static {
    fn calc(&self, _: &SamplingConfig) -> Result<Vec<u8>, ModulationError> {
        Ok(vec![self.amp])
    }
}
