mod error;
mod sampling_config;

pub use error::ModulationError;
pub use sampling_config::{SamplingConfig, MOD_BUF_SIZE_MAX, MOD_SAMPLING_FREQ_BASE};

/// A trait to calculate the amplitude envelope of the ultrasound.
///
/// Each sample is an 8-bit amplitude, played back at [`SamplingConfig::freq`].
pub trait Modulation: std::fmt::Debug {
    /// Calculates the modulation buffer for the given sampling configuration.
    fn calc(&self, config: &SamplingConfig) -> Result<Vec<u8>, ModulationError>;
}

impl Modulation for Box<dyn Modulation> {
    fn calc(&self, config: &SamplingConfig) -> Result<Vec<u8>, ModulationError> {
        self.as_ref().calc(config)
    }
}
