use super::{Isometry3, Point3, Transducer, Translation3, UnitQuaternion, Vector3};
use crate::common::{DEFAULT_CYCLE, FPGA_BASE_CLK_FREQ, PI, SOUND_SPEED};

/// An AUTD device unit.
#[derive(Debug, Clone)]
pub struct Device {
    pub(crate) idx: u16,
    pub(crate) transducers: Vec<Transducer>,
    rotation: UnitQuaternion,
    center: Point3,
    cycle: u16,
    inv: Isometry3,
}

impl Device {
    /// Creates a new [`Device`] with the default clock divisor.
    ///
    /// The local coordinate of the device has its origin at the first transducer.
    #[must_use]
    pub fn new(rotation: UnitQuaternion, transducers: Vec<Transducer>) -> Self {
        let mut transducers = transducers;
        transducers.iter_mut().enumerate().for_each(|(tr_idx, tr)| {
            tr.idx = tr_idx as _;
        });
        let center = if transducers.is_empty() {
            Point3::origin()
        } else {
            Point3::from(
                transducers
                    .iter()
                    .map(|tr| tr.position().coords)
                    .sum::<Vector3>()
                    / transducers.len() as f32,
            )
        };
        let origin = transducers
            .first()
            .map(|tr| tr.position())
            .unwrap_or_else(Point3::origin);
        let inv = (Translation3::from(origin) * rotation).inverse();
        Self {
            idx: 0,
            transducers,
            rotation,
            center,
            cycle: DEFAULT_CYCLE,
            inv,
        }
    }

    /// Sets the clock divisor of the device.
    #[must_use]
    pub fn with_cycle(mut self, cycle: u16) -> Self {
        self.cycle = cycle;
        self
    }

    /// Gets the index of the device.
    #[must_use]
    pub const fn idx(&self) -> usize {
        self.idx as _
    }

    /// Gets the number of transducers of the device.
    #[must_use]
    pub fn num_transducers(&self) -> usize {
        self.transducers.len()
    }

    /// Gets the rotation of the device.
    #[must_use]
    pub const fn rotation(&self) -> UnitQuaternion {
        self.rotation
    }

    /// Gets the center of the device.
    #[must_use]
    pub const fn center(&self) -> Point3 {
        self.center
    }

    /// Gets the clock divisor that determines the ultrasound frequency.
    #[must_use]
    pub const fn cycle(&self) -> u16 {
        self.cycle
    }

    /// Gets the ultrasound frequency in Hz.
    #[must_use]
    pub fn frequency(&self) -> f32 {
        FPGA_BASE_CLK_FREQ.hz() as f32 / self.cycle as f32
    }

    /// Gets the wavelength of the emitted ultrasound.
    #[must_use]
    pub fn wavelength(&self) -> f32 {
        SOUND_SPEED / self.frequency()
    }

    /// Gets the wavenumber of the emitted ultrasound.
    #[must_use]
    pub fn wavenumber(&self) -> f32 {
        2.0 * PI / self.wavelength()
    }

    /// Converts a global position into the local coordinate of the device.
    #[must_use]
    pub fn local_position(&self, pos: &Point3) -> Point3 {
        self.inv * pos
    }
}

impl std::ops::Deref for Device {
    type Target = [Transducer];

    fn deref(&self) -> &Self::Target {
        &self.transducers
    }
}

impl<'a> IntoIterator for &'a Device {
    type Item = &'a Transducer;
    type IntoIter = std::slice::Iter<'a, Transducer>;

    fn into_iter(self) -> Self::IntoIter {
        self.transducers.iter()
    }
}
