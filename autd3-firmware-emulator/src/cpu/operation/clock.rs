use autd3_driver::firmware::cpu::{LAP_MODULUS, SEQ_CALIB_DONE_TAG};

use crate::{fpga::params::*, CPUEmulator};

impl CPUEmulator {
    pub(crate) fn init_ref_clock(&mut self, msg_id: u8, body: Option<&[u16]>) -> u16 {
        if let Some(body) = body {
            self.bram_write(BRAM_SELECT_CONFIG, ADDR_MOD_IDX_SHIFT, body[0]);
            self.bram_write(BRAM_SELECT_CONFIG, ADDR_REF_CLK_CYC_SHIFT, body[1]);
            self.bram_write(BRAM_SELECT_CONFIG, ADDR_CLK_SYNC, 1);
        }
        Self::ack_word(msg_id)
    }

    /// Shifts the lap counter back by the received offset and reports it with the calibration tag.
    pub(crate) fn calib_seq_clock(&mut self, body: Option<&[u16]>) -> u16 {
        let offset = body.and_then(|b| b.first()).copied().unwrap_or(0) % LAP_MODULUS;
        self.lap = (self.lap + LAP_MODULUS - offset) % LAP_MODULUS;
        self.bram_write(BRAM_SELECT_CONFIG, ADDR_SEQ_CLK_OFFSET, offset);
        Self::lap_word(SEQ_CALIB_DONE_TAG, self.lap)
    }
}
