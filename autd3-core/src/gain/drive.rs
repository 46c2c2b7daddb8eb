use derive_new::new;

use crate::common::{Angle, PI};

/// Duty and phase of one transducer in device clock cycles.
///
/// A duty of `cycle / 2` is the maximum output, a phase of `cycle` is one full period.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, new)]
pub struct Drive {
    duty: u16,
    phase: u16,
}

impl Drive {
    /// A [`Drive`] with zero duty and zero phase.
    pub const NULL: Self = Self { duty: 0, phase: 0 };

    /// Creates a [`Drive`] from a normalized amplitude and a phase for a device with the clock divisor `cycle`.
    #[must_use]
    pub fn from_amp_phase(amp: f32, phase: Angle, cycle: u16) -> Self {
        Self {
            duty: to_duty(amp, cycle),
            phase: to_phase(phase, cycle),
        }
    }

    /// Returns the duty.
    #[must_use]
    pub const fn duty(&self) -> u16 {
        self.duty
    }

    /// Returns the phase.
    #[must_use]
    pub const fn phase(&self) -> u16 {
        self.phase
    }
}

/// Converts a normalized amplitude into a duty.
///
/// The output amplitude of a transducer is proportional to `sin(π * duty / cycle)`.
#[must_use]
pub fn to_duty(amp: f32, cycle: u16) -> u16 {
    (amp.clamp(0.0, 1.0).asin() / PI * cycle as f32).round() as u16
}

/// Converts a phase into device clock cycles.
#[must_use]
pub fn to_phase(phase: Angle, cycle: u16) -> u16 {
    let phase = (phase.wrapped().radian() / (2.0 * PI) * cycle as f32).round() as u32;
    (phase % cycle.max(1) as u32) as u16
}
