use derive_more::Debug;

/// \[°\]
#[allow(non_camel_case_types)]
pub struct deg;

/// \[rad\]
#[allow(non_camel_case_types)]
pub struct rad;

/// Phase angle of an ultrasound transducer.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug, Default)]
#[debug("{}rad", radian)]
pub struct Angle {
    radian: f32,
}

impl Angle {
    /// Returns the angle in radian
    #[must_use]
    pub const fn radian(self) -> f32 {
        self.radian
    }

    /// Returns the angle wrapped into `[0, 2π)`.
    #[must_use]
    pub fn wrapped(self) -> Self {
        Self {
            radian: self.radian.rem_euclid(2.0 * std::f32::consts::PI),
        }
    }
}

impl std::ops::Mul<deg> for f32 {
    type Output = Angle;

    fn mul(self, _rhs: deg) -> Self::Output {
        Self::Output {
            radian: self.to_radians(),
        }
    }
}

impl std::ops::Mul<rad> for f32 {
    type Output = Angle;

    fn mul(self, _rhs: rad) -> Self::Output {
        Self::Output { radian: self }
    }
}

impl std::ops::Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Self::Output {
        Self::Output {
            radian: self.radian + rhs.radian,
        }
    }
}

impl std::ops::Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Self::Output {
        Self::Output {
            radian: -self.radian,
        }
    }
}
