mod device;
mod transducer;

/// 3-dimensional column vector.
pub type Vector3 = nalgebra::Vector3<f32>;
/// 3-dimensional point.
pub type Point3 = nalgebra::Point3<f32>;
/// A quaternion.
pub type Quaternion = nalgebra::Quaternion<f32>;
/// A unit quaternion.
pub type UnitQuaternion = nalgebra::UnitQuaternion<f32>;
/// A 3-dimensional translation.
pub type Translation3 = nalgebra::Translation3<f32>;
/// A 3-dimensional isometry.
pub type Isometry3 = nalgebra::Isometry3<f32>;

pub use device::*;
pub use transducer::*;

/// Geometry of the devices.
///
/// The geometry is fixed once a controller is opened; devices can only be appended before that.
#[derive(Debug)]
pub struct Geometry {
    devices: Vec<Device>,
}

impl Geometry {
    /// Creates a new [`Geometry`].
    #[must_use]
    pub fn new(devices: Vec<Device>) -> Self {
        let mut geometry = Self {
            devices: Vec::with_capacity(devices.len()),
        };
        devices.into_iter().for_each(|dev| geometry.push(dev));
        geometry
    }

    /// Appends a device to the end of the geometry.
    pub fn push(&mut self, mut device: Device) {
        let dev_idx = self.devices.len();
        device.idx = dev_idx as _;
        device.transducers.iter_mut().for_each(|tr| {
            tr.dev_idx = dev_idx as _;
        });
        self.devices.push(device);
    }

    /// Gets the number of devices.
    #[must_use]
    pub fn num_devices(&self) -> usize {
        self.devices.len()
    }

    /// Gets the number of transducers.
    #[must_use]
    pub fn num_transducers(&self) -> usize {
        self.iter().map(|dev| dev.num_transducers()).sum()
    }

    /// Gets the center of the transducers.
    #[must_use]
    pub fn center(&self) -> Point3 {
        Point3::from(
            self.iter().map(|d| d.center().coords).sum::<Vector3>() / self.devices.len() as f32,
        )
    }

    /// Gets the clock divisors of all devices in order.
    #[must_use]
    pub fn cycles(&self) -> Vec<u16> {
        self.iter().map(|dev| dev.cycle()).collect()
    }
}

impl<'a> IntoIterator for &'a Geometry {
    type Item = &'a Device;
    type IntoIter = std::slice::Iter<'a, Device>;

    fn into_iter(self) -> Self::IntoIter {
        self.devices.iter()
    }
}

impl std::ops::Deref for Geometry {
    type Target = [Device];

    fn deref(&self) -> &Self::Target {
        &self.devices
    }
}
