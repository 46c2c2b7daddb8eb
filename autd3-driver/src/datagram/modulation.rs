use autd3_core::modulation::{Modulation, SamplingConfig};

use crate::{
    error::AUTDDriverError,
    firmware::operation::{MOD_BUF_SIZE_MAX, MOD_BUF_SIZE_MIN},
};

/// A [`Modulation`] whose buffer is calculated once and streamed to the devices in chunks.
///
/// The buffer is immutable once built. Only the `sent` cursor advances as chunks are packed into frames.
#[derive(Debug)]
pub struct ModulationCache {
    modulation: Box<dyn Modulation>,
    buffer: Option<Vec<u8>>,
    sent: usize,
}

impl ModulationCache {
    /// Creates a new [`ModulationCache`].
    #[must_use]
    pub fn new(modulation: impl Modulation + 'static) -> Self {
        Self {
            modulation: Box::new(modulation),
            buffer: None,
            sent: 0,
        }
    }

    /// Calculates the buffer if it has not been calculated yet.
    pub fn build(&mut self, config: &SamplingConfig) -> Result<(), AUTDDriverError> {
        if self.buffer.is_none() {
            self.rebuild(config)?;
        }
        Ok(())
    }

    /// Recalculates the buffer and rewinds the cursor.
    pub fn rebuild(&mut self, config: &SamplingConfig) -> Result<(), AUTDDriverError> {
        let buffer = self.modulation.calc(config)?;
        if !(MOD_BUF_SIZE_MIN..=MOD_BUF_SIZE_MAX).contains(&buffer.len()) {
            return Err(AUTDDriverError::ModulationSizeOutOfRange(buffer.len()));
        }
        self.buffer = Some(buffer);
        self.sent = 0;
        Ok(())
    }

    /// Returns whether the buffer has been calculated.
    #[must_use]
    pub fn is_built(&self) -> bool {
        self.buffer.is_some()
    }

    /// Returns the calculated buffer.
    #[must_use]
    pub fn buffer(&self) -> Option<&[u8]> {
        self.buffer.as_deref()
    }

    /// Returns the number of samples already sent.
    #[must_use]
    pub const fn sent(&self) -> usize {
        self.sent
    }

    /// Returns whether the whole buffer has been sent.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.buffer.as_ref().is_some_and(|b| self.sent >= b.len())
    }

    /// Rewinds the cursor so that the buffer is streamed again from the beginning.
    pub fn reset(&mut self) {
        self.sent = 0;
    }

    pub(crate) fn advance(&mut self, n: usize) {
        self.sent += n;
    }
}

/// A trait to convert a [`Modulation`] into a [`ModulationCache`].
pub trait IntoModulationCache {
    /// Wraps the modulation into a [`ModulationCache`].
    fn into_cache(self) -> ModulationCache;
}

impl<M: Modulation + 'static> IntoModulationCache for M {
    fn into_cache(self) -> ModulationCache {
        ModulationCache::new(self)
    }
}
