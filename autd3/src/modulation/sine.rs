use autd3_core::{
    common::{Freq, Hz},
    modulation::{Modulation, ModulationError, SamplingConfig},
};

use num::integer::gcd;

/// [`Modulation`] with a periodic envelope of the given frequency.
///
/// One period of the buffer holds the smallest whole number of cycles sampled exactly at the sampling frequency.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Sine {
    /// The frequency of the envelope. It is clamped to `[1 Hz, fs / 2]`.
    pub freq: Freq<u32>,
    /// The peak to peak amplitude in `[0, 1]`.
    pub amp: f32,
    /// The offset in `[0, 1]`.
    pub offset: f32,
}

impl Sine {
    /// Creates a new [`Sine`] with `amp = 1.0` and `offset = 0.5`.
    #[must_use]
    pub const fn new(freq: Freq<u32>) -> Self {
        Self {
            freq,
            amp: 1.0,
            offset: 0.5,
        }
    }
}

impl Modulation for Sine {
    fn calc(&self, config: &SamplingConfig) -> Result<Vec<u8>, ModulationError> {
        let fs = config.freq.hz();
        if fs < 2 {
            return Err(ModulationError::new(format!(
                "Sampling frequency ({}) is too low",
                config.freq
            )));
        }
        let freq = self.freq.hz().clamp(1, fs / 2);
        if freq != self.freq.hz() {
            tracing::warn!(
                "Frequency ({}) is clamped to {}",
                self.freq,
                freq * Hz
            );
        }

        let d = gcd(fs, freq);
        let n = fs / d;
        let rep = freq / d;

        Ok((0..n)
            .map(|i| {
                let t = (2 * rep * i) as f32 / n as f32 % 2.0;
                let t = if t > 1.0 { 2.0 - t } else { t };
                ((self.offset + (t - 0.5) * self.amp).clamp(0.0, 1.0) * 255.0) as u8
            })
            .collect())
    }
}
