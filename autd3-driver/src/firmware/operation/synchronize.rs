use autd3_core::{
    geometry::Geometry,
    modulation::{SamplingConfig, MOD_SAMPLING_FREQ_BASE},
};

use crate::{error::AUTDDriverError, firmware::cpu::TxDatagram};

fn log2_exact(num: u32, den: u32) -> Result<u16, AUTDDriverError> {
    if den == 0 || num % den != 0 || !(num / den).is_power_of_two() {
        return Err(AUTDDriverError::NotPowerOfTwo(num, den));
    }
    Ok((num / den).trailing_zeros() as u16)
}

/// Computes `(mod_idx_shift, ref_clk_cycle_shift)` for the sampling configuration.
///
/// `mod_idx_shift = log2(8 kHz / freq)` and `ref_clk_cycle_shift = log2(buf_size / freq)`. Both ratios must be exact powers of two.
pub fn shifts(config: &SamplingConfig) -> Result<(u16, u16), AUTDDriverError> {
    let freq = config.freq.hz();
    if config.buf_size < freq {
        return Err(AUTDDriverError::ModBufferTooSmall {
            buf_size: config.buf_size,
            freq,
        });
    }
    Ok((
        log2_exact(MOD_SAMPLING_FREQ_BASE.hz(), freq)?,
        log2_exact(config.buf_size, freq)?,
    ))
}

/// Writes the shift constants into body words 0 and 1 of every device.
pub fn pack(shifts: (u16, u16), geometry: &Geometry, tx: &mut TxDatagram) {
    let (mod_idx_shift, ref_clk_cycle_shift) = shifts;
    geometry.iter().for_each(|dev| {
        let body = tx.body_mut(dev.idx()).data_mut();
        body[0] = mod_idx_shift;
        body[1] = ref_clk_cycle_shift;
    });
    tx.set_bodies_enabled(true);
}
