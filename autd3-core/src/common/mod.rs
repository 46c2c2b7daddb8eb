mod angle;
mod freq;

pub use std::f32::consts::PI;

#[cfg(feature = "use_meter")]
mod unit {
    /// meter
    pub const METER: f32 = 1.0;
}
#[cfg(not(feature = "use_meter"))]
mod unit {
    /// meter
    pub const METER: f32 = 1000.0;
}
pub use unit::*;

pub use angle::*;
pub use freq::*;

/// millimeter
pub const MILLIMETER: f32 = METER / 1000.0;

/// \[㎜\]
#[allow(non_upper_case_globals)]
pub const mm: f32 = MILLIMETER;

/// The base clock frequency of the FPGA.
pub const FPGA_BASE_CLK_FREQ: Freq<u32> = Freq { freq: 200_000_000 };

/// The frequency of ultrasound
pub const ULTRASOUND_FREQ: Freq<u32> = Freq { freq: 40000 };

/// The default clock divisor of a device, i.e., [`FPGA_BASE_CLK_FREQ`] / [`ULTRASOUND_FREQ`].
pub const DEFAULT_CYCLE: u16 = (FPGA_BASE_CLK_FREQ.freq / ULTRASOUND_FREQ.freq) as u16;

/// The speed of sound in \[㎜/s\] (or \[m/s\] with `use_meter`).
pub const SOUND_SPEED: f32 = 340.0 * METER;
