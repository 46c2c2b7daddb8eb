use crate::{
    common::{mm, DEFAULT_CYCLE},
    geometry::{Device, Isometry3, Point3, Transducer, Translation3, UnitQuaternion},
};

/// AUTD3 device.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AUTD3 {
    /// The global position of the AUTD3 device.
    pub pos: Point3,
    /// The rotation of the AUTD3 device.
    pub rot: UnitQuaternion,
    /// The clock divisor of the device.
    pub cycle: u16,
}

impl AUTD3 {
    /// The number of transducers in x-axis.
    pub const NUM_TRANS_X: usize = 18;
    /// The number of transducers in y-axis.
    pub const NUM_TRANS_Y: usize = 14;
    /// The number of transducers in a unit.
    pub const NUM_TRANS_IN_UNIT: usize = Self::NUM_TRANS_X * Self::NUM_TRANS_Y - 3;
    /// The spacing between transducers.
    pub const TRANS_SPACING: f32 = 10.16 * mm;
    /// The width of the device (including the substrate).
    pub const DEVICE_WIDTH: f32 = 192.0 * mm;

    /// Create a new [`AUTD3`] at `pos` with rotation `rot`.
    #[must_use]
    pub fn new(pos: Point3, rot: UnitQuaternion) -> Self {
        Self {
            pos,
            rot,
            cycle: DEFAULT_CYCLE,
        }
    }

    /// Gets the index in x- and y-axis from the transducer index.
    #[must_use]
    pub const fn grid_id(idx: usize) -> (usize, usize) {
        let local_id = idx % Self::NUM_TRANS_IN_UNIT;
        let uid = match local_id {
            0..19 => local_id,
            19..32 => local_id + 2,
            _ => local_id + 3,
        };
        (uid % Self::NUM_TRANS_X, uid / Self::NUM_TRANS_X)
    }

    #[must_use]
    const fn is_missing_transducer(x: usize, y: usize) -> bool {
        y == 1 && (x == 1 || x == 2 || x == 16)
    }
}

impl Default for AUTD3 {
    fn default() -> Self {
        Self::new(Point3::origin(), UnitQuaternion::identity())
    }
}

impl From<AUTD3> for Device {
    fn from(autd3: AUTD3) -> Self {
        let isometry = Isometry3 {
            rotation: autd3.rot,
            translation: Translation3::from(autd3.pos),
        };
        Self::new(
            autd3.rot,
            (0..AUTD3::NUM_TRANS_Y)
                .flat_map(|y| {
                    (0..AUTD3::NUM_TRANS_X)
                        .filter(move |&x| !AUTD3::is_missing_transducer(x, y))
                        .map(move |x| {
                            isometry
                                * Point3::new(
                                    x as f32 * AUTD3::TRANS_SPACING,
                                    y as f32 * AUTD3::TRANS_SPACING,
                                    0.,
                                )
                        })
                })
                .map(Transducer::new)
                .collect(),
        )
        .with_cycle(autd3.cycle)
    }
}
