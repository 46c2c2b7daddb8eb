use autd3_driver::firmware::{
    cpu::{ControlFlags, Header},
    operation::{MOD_DATA_OFFSET, MOD_FRAME_SIZE, MOD_SIZE_OFFSET},
};

use crate::{cpu::params::MOD_BUF_SIZE, fpga::params::BRAM_SELECT_MOD, CPUEmulator};

impl CPUEmulator {
    fn write_mod(&mut self, header: &Header, flags: ControlFlags) {
        if flags.contains(ControlFlags::MOD_BEGIN) {
            self.mod_size = 0;
        }

        let size = (header.payload[MOD_SIZE_OFFSET] as usize)
            .min(MOD_FRAME_SIZE)
            .min(MOD_BUF_SIZE - self.mod_size);
        self.mod_buf[self.mod_size..self.mod_size + size]
            .copy_from_slice(&header.payload[MOD_DATA_OFFSET..MOD_DATA_OFFSET + size]);
        self.mod_size += size;

        if flags.contains(ControlFlags::MOD_END) && self.mod_size > 0 {
            let mod_size = self.mod_size;
            (mod_size..MOD_BUF_SIZE).for_each(|i| self.mod_buf[i] = self.mod_buf[i % mod_size]);
            let words = self
                .mod_buf
                .chunks_exact(2)
                .map(|b| u16::from_le_bytes([b[0], b[1]]))
                .collect::<Vec<_>>();
            self.bram_cpy(BRAM_SELECT_MOD, 0, &words);
        }
    }

    pub(crate) fn op(&mut self, header: &Header, body: Option<&[u16]>) -> u16 {
        let flags = ControlFlags::from_bits_truncate(header.flags);
        self.write_ctrl_flags(header.flags);
        if let Some(body) = body {
            self.write_drives(body);
        }
        if flags.intersects(ControlFlags::MOD_BEGIN | ControlFlags::MOD_END)
            || header.payload[MOD_SIZE_OFFSET] != 0
        {
            self.write_mod(header, flags);
        }
        Self::ack_word(header.msg_id)
    }
}
