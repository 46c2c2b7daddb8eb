use crate::common::{Freq, Hz};

/// The base frequency from which the modulation sampling frequency is divided.
pub const MOD_SAMPLING_FREQ_BASE: Freq<u32> = Freq { freq: 8000 };
/// The size of the modulation buffer on the device.
pub const MOD_BUF_SIZE_MAX: usize = 4000;

/// The sampling configuration of modulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamplingConfig {
    /// The sampling frequency.
    pub freq: Freq<u32>,
    /// The length of the modulation cycle in samples.
    pub buf_size: u32,
}

impl SamplingConfig {
    /// Creates a new [`SamplingConfig`].
    #[must_use]
    pub const fn new(freq: Freq<u32>, buf_size: u32) -> Self {
        Self { freq, buf_size }
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self::new(4000 * Hz, 4000)
    }
}
