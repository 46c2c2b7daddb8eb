use autd3_core::{
    common::Freq,
    geometry::Point3,
};

use crate::error::AUTDDriverError;

/// The base frequency from which the sequence sampling frequency is divided.
pub const SEQ_BASE_FREQ: Freq<u32> = Freq::new(SEQ_BASE_FREQ_HZ);
const SEQ_BASE_FREQ_HZ: u32 = 40000;
/// The minimum number of points in a [`PointSequence`].
pub const SEQ_BUF_SIZE_MIN: usize = 1;
/// The maximum number of points in a [`PointSequence`].
pub const SEQ_BUF_SIZE_MAX: usize = 40000;

/// A sequence of focal points played back by the devices.
///
/// Like [`ModulationCache`](crate::datagram::ModulationCache), the points are streamed in chunks and the `sent` cursor tracks progress.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSequence {
    points: Vec<Point3>,
    sent: usize,
    freq_div: u16,
}

impl PointSequence {
    /// Creates a new [`PointSequence`] sampled at [`SEQ_BASE_FREQ`].
    pub fn new(points: Vec<Point3>) -> Result<Self, AUTDDriverError> {
        if !(SEQ_BUF_SIZE_MIN..=SEQ_BUF_SIZE_MAX).contains(&points.len()) {
            return Err(AUTDDriverError::PointSequenceSizeOutOfRange(points.len()));
        }
        Ok(Self {
            points,
            sent: 0,
            freq_div: 1,
        })
    }

    /// Returns the points.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Returns the number of points already sent.
    #[must_use]
    pub const fn sent(&self) -> usize {
        self.sent
    }

    /// Returns whether all points have been sent.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.sent >= self.points.len()
    }

    /// Rewinds the cursor.
    pub fn reset(&mut self) {
        self.sent = 0;
    }

    /// Returns the sampling frequency division.
    #[must_use]
    pub const fn sampling_frequency_division(&self) -> u16 {
        self.freq_div
    }

    /// Sets the sampling frequency division. Zero is treated as one.
    pub fn set_sampling_frequency_division(&mut self, div: u16) {
        self.freq_div = div.max(1);
    }

    /// Returns the sampling frequency in Hz.
    #[must_use]
    pub fn sampling_frequency(&self) -> f32 {
        SEQ_BASE_FREQ_HZ as f32 / self.freq_div as f32
    }

    /// Returns the frequency at which the whole sequence is repeated in Hz.
    #[must_use]
    pub fn frequency(&self) -> f32 {
        self.sampling_frequency() / self.points.len() as f32
    }

    /// Sets the repetition frequency and returns the frequency actually achieved.
    ///
    /// The sampling frequency is capped at [`SEQ_BASE_FREQ`] and quantized to an integer division of it.
    /// A non-positive or non-finite `freq` is rejected and leaves the division unchanged.
    pub fn set_frequency(&mut self, freq: f32) -> Result<f32, AUTDDriverError> {
        if !freq.is_finite() || freq <= 0. {
            return Err(AUTDDriverError::InvalidFrequency(freq));
        }
        let sample_freq = (self.points.len() as f32 * freq).min(SEQ_BASE_FREQ_HZ as f32);
        let div = (SEQ_BASE_FREQ_HZ as f32 / sample_freq).clamp(1.0, u16::MAX as f32);
        self.freq_div = div as u16;
        Ok(self.frequency())
    }

    pub(crate) fn advance(&mut self, n: usize) {
        self.sent += n;
    }
}
