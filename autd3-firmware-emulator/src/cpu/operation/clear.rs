use autd3_driver::{
    core::common::DEFAULT_CYCLE,
    firmware::{cpu::ControlFlags, ProtocolGeneration},
};

use crate::{
    cpu::params::MOD_BUF_SIZE,
    fpga::params::*,
    CPUEmulator,
};

impl CPUEmulator {
    pub(crate) fn reset(&mut self) {
        self.write_ctrl_flags(ControlFlags::SILENT.bits());
        self.bram_write(BRAM_SELECT_CONFIG, ADDR_ULTRASOUND_CYCLE, DEFAULT_CYCLE);
        self.bram_write(BRAM_SELECT_CONFIG, ADDR_SEQ_SIZE, 0);
        self.bram_set(BRAM_SELECT_TR, 0, 0x0000, TR_BRAM_SIZE);

        if self.generation == ProtocolGeneration::Combined {
            self.mod_buf.fill(0xFF);
            self.bram_set(BRAM_SELECT_MOD, 0, 0xFFFF, MOD_BUF_SIZE / 2);
        }
        self.mod_size = 0;
        self.seq_cursor = 0;
        self.seq_lap_pending = false;
    }

    pub(crate) fn clear(&mut self, msg_id: u8) -> u16 {
        self.reset();
        Self::ack_word(msg_id)
    }
}
