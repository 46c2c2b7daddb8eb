pub use crate::{
    controller::Controller,
    gain::{Focus, Null, Uniform},
    modulation::{Sine, Static},
};

#[cfg(feature = "link-audit")]
pub use crate::link::{Audit, AuditOption};
#[cfg(feature = "link-nop")]
pub use crate::link::Nop;

pub use autd3_core::{
    common::{deg, kHz, mm, rad, Angle, Hz, DEFAULT_CYCLE, PI},
    devices::AUTD3,
    gain::{Drive, Gain, GainError},
    geometry::{Device, Geometry, Point3, Transducer, UnitQuaternion, Vector3},
    link::{Link, LinkConfiguration, LinkError},
    modulation::{Modulation, ModulationError, SamplingConfig},
    sleep::{Sleep, SpinWaitSleeper, StdSleeper},
};
pub use autd3_driver::{
    datagram::{GainCache, IntoGainCache, IntoModulationCache, ModulationCache, PointSequence},
    error::AUTDDriverError,
    firmware::{transmission::SenderOption, version::FirmwareInfo, ProtocolGeneration},
};
