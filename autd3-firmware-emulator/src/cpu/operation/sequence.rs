use autd3_driver::firmware::{
    cpu::{ControlFlags, Header},
    operation::{sequence::SEQ_POINT_SIZE, SEQ_DIV_OFFSET, SEQ_POINTS_PER_FRAME, SEQ_SIZE_OFFSET},
};

use crate::{fpga::params::*, CPUEmulator};

const SEQ_WORDS_PER_POINT: usize = SEQ_POINT_SIZE / 2;

impl CPUEmulator {
    pub(crate) fn seq_mode(&mut self, header: &Header, body: Option<&[u16]>) -> u16 {
        let flags = ControlFlags::from_bits_truncate(header.flags);
        let p = &header.payload;
        let size = u16::from_le_bytes([p[SEQ_SIZE_OFFSET], p[SEQ_SIZE_OFFSET + 1]]) as usize;
        let div = u16::from_le_bytes([p[SEQ_DIV_OFFSET], p[SEQ_DIV_OFFSET + 1]]);

        if flags.contains(ControlFlags::SEQ_BEGIN) {
            self.seq_cursor = 0;
            self.seq_lap_pending = false;
        }

        if let Some(body) = body {
            let size = size.min(SEQ_POINTS_PER_FRAME);
            self.bram_cpy(
                BRAM_SELECT_STM,
                self.seq_cursor * SEQ_WORDS_PER_POINT,
                &body[..size * SEQ_WORDS_PER_POINT],
            );
            self.seq_cursor += size;
        }

        self.write_ctrl_flags(header.flags);
        self.bram_write(BRAM_SELECT_CONFIG, ADDR_SEQ_DIV, div);

        if flags.contains(ControlFlags::SEQ_END) {
            self.bram_write(BRAM_SELECT_CONFIG, ADDR_SEQ_SIZE, self.seq_cursor as u16);
            self.seq_lap_pending = true;
        }
        Self::ack_word(header.msg_id)
    }
}
