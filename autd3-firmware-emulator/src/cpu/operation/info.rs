use autd3_driver::firmware::cpu::Command;

use crate::{
    cpu::params::CPU_VERSION,
    fpga::params::{ADDR_FPGA_VER, BRAM_SELECT_CONFIG},
    CPUEmulator,
};

impl CPUEmulator {
    #[must_use]
    fn fpga_version(&self) -> u16 {
        self.bram_read(BRAM_SELECT_CONFIG, ADDR_FPGA_VER)
    }

    pub(crate) fn read_info(&mut self, msg_id: u8, command: Command) -> u16 {
        let data = match command {
            Command::ReadCpuVerLsb => CPU_VERSION & 0xFF,
            Command::ReadCpuVerMsb => CPU_VERSION >> 8,
            Command::ReadFpgaVerLsb => self.fpga_version() & 0xFF,
            Command::ReadFpgaVerMsb => self.fpga_version() >> 8,
            _ => 0x00,
        };
        Self::ack_word(msg_id) | data
    }
}
