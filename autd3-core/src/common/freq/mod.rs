/// \[Hz\]
pub struct Hz;

/// \[kHz\]
#[allow(non_camel_case_types)]
pub struct kHz;

/// Frequency
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Freq<T: Copy> {
    pub(crate) freq: T,
}

impl<T: Copy + core::fmt::Display> core::fmt::Debug for Freq<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} Hz", self.freq)
    }
}

impl<T: Copy + core::fmt::Display> core::fmt::Display for Freq<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} Hz", self.freq)
    }
}

impl<T: Copy> Freq<T> {
    /// Creates a new [`Freq`] of `freq` Hz.
    #[must_use]
    pub const fn new(freq: T) -> Self {
        Self { freq }
    }

    /// Returns the frequency in Hz.
    #[inline]
    pub const fn hz(&self) -> T {
        self.freq
    }
}

impl core::ops::Mul<Hz> for u32 {
    type Output = Freq<u32>;

    fn mul(self, _rhs: Hz) -> Self::Output {
        Self::Output { freq: self }
    }
}

impl core::ops::Mul<kHz> for u32 {
    type Output = Freq<u32>;

    fn mul(self, _rhs: kHz) -> Self::Output {
        Self::Output { freq: self * 1000 }
    }
}

impl core::ops::Mul<Hz> for f32 {
    type Output = Freq<f32>;

    fn mul(self, _rhs: Hz) -> Self::Output {
        Self::Output { freq: self }
    }
}

impl core::ops::Mul<u32> for Freq<u32> {
    type Output = Freq<u32>;

    fn mul(self, rhs: u32) -> Self::Output {
        Freq {
            freq: self.freq * rhs,
        }
    }
}

impl core::ops::Div<u32> for Freq<u32> {
    type Output = Freq<u32>;

    fn div(self, rhs: u32) -> Self::Output {
        Freq {
            freq: self.freq / rhs,
        }
    }
}
