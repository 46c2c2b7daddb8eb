use crate::{
    fpga::params::{ADDR_ULTRASOUND_CYCLE, BRAM_SELECT_CONFIG},
    CPUEmulator,
};

impl CPUEmulator {
    pub(crate) fn ultrasound_cycle_cnt(&mut self, msg_id: u8, body: Option<&[u16]>) -> u16 {
        if let Some(&cycle) = body.and_then(|b| b.first()) {
            self.bram_write(BRAM_SELECT_CONFIG, ADDR_ULTRASOUND_CYCLE, cycle);
        }
        Self::ack_word(msg_id)
    }
}
