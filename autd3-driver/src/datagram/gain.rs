use autd3_core::{
    gain::{Drive, Gain, GainError},
    geometry::Geometry,
};

/// A [`Gain`] whose drives are calculated at most once.
///
/// The drives are calculated on the first [`GainCache::build`] and reused by later sends until [`GainCache::rebuild`] is called.
#[derive(Debug)]
pub struct GainCache {
    gain: Box<dyn Gain>,
    drives: Option<Vec<Vec<Drive>>>,
}

impl GainCache {
    /// Creates a new [`GainCache`].
    #[must_use]
    pub fn new(gain: impl Gain + 'static) -> Self {
        Self {
            gain: Box::new(gain),
            drives: None,
        }
    }

    /// Calculates the drives if they have not been calculated yet.
    pub fn build(&mut self, geometry: &Geometry) -> Result<&[Vec<Drive>], GainError> {
        if self.drives.is_none() {
            self.rebuild(geometry)?;
        }
        Ok(self.drives.as_deref().unwrap_or_default())
    }

    /// Recalculates the drives.
    pub fn rebuild(&mut self, geometry: &Geometry) -> Result<&[Vec<Drive>], GainError> {
        let drives = self.gain.calc(geometry)?;
        if drives.len() != geometry.num_devices() {
            return Err(GainError::new(format!(
                "Drives for {} devices were calculated, but the geometry has {} devices",
                drives.len(),
                geometry.num_devices()
            )));
        }
        if let Some((dev, d)) = geometry
            .iter()
            .zip(drives.iter())
            .find(|(dev, d)| dev.num_transducers() != d.len())
        {
            return Err(GainError::new(format!(
                "Device {} has {} transducers, but {} drives were calculated",
                dev.idx(),
                dev.num_transducers(),
                d.len()
            )));
        }
        Ok(self.drives.insert(drives).as_slice())
    }

    /// Returns whether the drives have been calculated.
    #[must_use]
    pub fn is_built(&self) -> bool {
        self.drives.is_some()
    }

    /// Returns the calculated drives.
    #[must_use]
    pub fn drives(&self) -> Option<&[Vec<Drive>]> {
        self.drives.as_deref()
    }
}

/// A trait to convert a [`Gain`] into a [`GainCache`].
pub trait IntoGainCache {
    /// Wraps the gain into a [`GainCache`].
    fn into_cache(self) -> GainCache;
}

impl<G: Gain + 'static> IntoGainCache for G {
    fn into_cache(self) -> GainCache {
        GainCache::new(self)
    }
}
