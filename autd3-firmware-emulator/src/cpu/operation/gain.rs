use autd3_driver::firmware::cpu::Header;

use crate::{
    fpga::params::{BRAM_SELECT_TR, TR_PHASE_OFFSET},
    CPUEmulator,
};

impl CPUEmulator {
    pub(crate) fn write_drives(&mut self, body: &[u16]) {
        let n = self.num_transducers.min(body.len());
        self.bram_cpy(BRAM_SELECT_TR, 0, &body[..n]);
    }

    pub(crate) fn write_duty(&mut self, header: &Header, body: Option<&[u16]>) -> u16 {
        self.write_ctrl_flags(header.flags);
        if let Some(body) = body {
            self.write_drives(body);
        }
        Self::ack_word(header.msg_id)
    }

    pub(crate) fn write_phase(&mut self, header: &Header, body: Option<&[u16]>) -> u16 {
        self.write_ctrl_flags(header.flags);
        if let Some(body) = body {
            let n = self.num_transducers.min(body.len());
            self.bram_cpy(BRAM_SELECT_TR, TR_PHASE_OFFSET, &body[..n]);
        }
        Self::ack_word(header.msg_id)
    }
}
