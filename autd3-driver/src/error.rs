use autd3_core::{gain::GainError, link::LinkError, modulation::ModulationError};
use thiserror::Error;

use crate::{
    datagram::{SEQ_BUF_SIZE_MAX, SEQ_BUF_SIZE_MIN},
    firmware::{
        operation::{MOD_BUF_SIZE_MAX, MOD_BUF_SIZE_MIN},
        ProtocolGeneration,
    },
};

/// A interface for error handling in autd3-driver.
#[derive(Error, Debug, PartialEq, Clone)]
#[non_exhaustive]
pub enum AUTDDriverError {
    /// Modulation buffer size is out of range.
    #[error(
        "Modulation buffer size ({0}) is out of range ([{min}, {max}])",
        min = MOD_BUF_SIZE_MIN,
        max = MOD_BUF_SIZE_MAX
    )]
    ModulationSizeOutOfRange(usize),
    /// Point sequence size is out of range.
    #[error(
        "Point sequence size ({0}) is out of range ([{min}, {max}])",
        min = SEQ_BUF_SIZE_MIN,
        max = SEQ_BUF_SIZE_MAX
    )]
    PointSequenceSizeOutOfRange(usize),
    /// Modulation buffer is shorter than the sampling frequency.
    #[error("Modulation buffer size ({buf_size}) must not be less than sampling frequency ({freq} Hz)")]
    ModBufferTooSmall {
        /// The buffer size.
        buf_size: u32,
        /// The sampling frequency in Hz.
        freq: u32,
    },
    /// The requested frequency is not a positive finite number.
    #[error("Frequency ({0} Hz) must be positive and finite")]
    InvalidFrequency(f32),
    /// A frequency ratio required by the firmware is not an exact power of two.
    #[error("Ratio {0}/{1} must be an exact power of two")]
    NotPowerOfTwo(u32, u32),
    /// The operation is not available in the protocol generation.
    #[error("{0} is not supported in {1:?} protocol")]
    NotSupported(&'static str, ProtocolGeneration),

    /// Error in the modulation.
    #[error("{0}")]
    Modulation(#[from] ModulationError),
    /// Error in the gain.
    #[error("{0}")]
    Gain(#[from] GainError),
    /// Error in the Link.
    #[error("{0}")]
    Link(#[from] LinkError),

    /// Link is closed.
    #[error("Link is closed")]
    LinkClosed,

    /// Failed to read firmware version.
    #[error("Read firmware info failed: {}", .0.iter().enumerate().filter(|(_, b)| !**b).map(|(i, _)| i.to_string()).collect::<Vec<_>>().join(", "))]
    ReadFirmwareInfoFailed(Vec<bool>),
}
