mod gain;
pub(crate) mod modulation;
mod sequence;

pub use gain::{GainCache, IntoGainCache};
pub use modulation::{IntoModulationCache, ModulationCache};
pub use sequence::{PointSequence, SEQ_BASE_FREQ, SEQ_BUF_SIZE_MAX, SEQ_BUF_SIZE_MIN};
