use autd3_driver::{
    core::{common::DEFAULT_CYCLE, modulation::MOD_BUF_SIZE_MAX},
    datagram::SEQ_BUF_SIZE_MAX,
    firmware::operation::sequence::SEQ_POINT_SIZE,
};

use crate::fpga::params::*;

pub(crate) struct Memory {
    num_transducers: usize,
    tr_bram: Vec<u16>,
    mod_bram: Vec<u16>,
    config_bram: Vec<u16>,
    stm_bram: Vec<u16>,
}

impl Memory {
    pub fn new(num_transducers: usize) -> Self {
        let mut mem = Self {
            num_transducers,
            tr_bram: vec![0x0000; TR_BRAM_SIZE],
            mod_bram: vec![0x0000; MOD_BUF_SIZE_MAX / 2],
            config_bram: vec![0x0000; CONFIG_BRAM_SIZE],
            stm_bram: vec![0x0000; SEQ_BUF_SIZE_MAX * SEQ_POINT_SIZE / 2],
        };
        mem.config_bram[ADDR_FPGA_VER] = FPGA_VERSION;
        mem.config_bram[ADDR_ULTRASOUND_CYCLE] = DEFAULT_CYCLE;
        mem
    }

    pub const fn num_transducers(&self) -> usize {
        self.num_transducers
    }

    fn bram(&self, select: u8) -> Option<&[u16]> {
        match select {
            BRAM_SELECT_TR => Some(self.tr_bram.as_slice()),
            BRAM_SELECT_MOD => Some(self.mod_bram.as_slice()),
            BRAM_SELECT_CONFIG => Some(self.config_bram.as_slice()),
            BRAM_SELECT_STM => Some(self.stm_bram.as_slice()),
            _ => None,
        }
    }

    fn bram_mut(&mut self, select: u8) -> Option<&mut [u16]> {
        match select {
            BRAM_SELECT_TR => Some(self.tr_bram.as_mut_slice()),
            BRAM_SELECT_MOD => Some(self.mod_bram.as_mut_slice()),
            BRAM_SELECT_CONFIG => Some(self.config_bram.as_mut_slice()),
            BRAM_SELECT_STM => Some(self.stm_bram.as_mut_slice()),
            _ => None,
        }
    }

    pub fn read(&self, addr: u32) -> u16 {
        let select = (addr >> BRAM_ADDR_BITS) as u8;
        let addr = (addr & BRAM_ADDR_MASK) as usize;
        self.bram(select)
            .and_then(|b| b.get(addr).copied())
            .unwrap_or(0x0000)
    }

    pub fn write(&mut self, addr: u32, data: u16) {
        let select = (addr >> BRAM_ADDR_BITS) as u8;
        let addr = (addr & BRAM_ADDR_MASK) as usize;
        match self.bram_mut(select).and_then(|b| b.get_mut(addr)) {
            Some(dst) => *dst = data,
            None => tracing::warn!("Invalid BRAM address: select={}, addr={:#X}", select, addr),
        }
    }

    pub fn config(&self, addr: usize) -> u16 {
        self.config_bram[addr]
    }

    pub fn config_mut(&mut self, addr: usize) -> &mut u16 {
        &mut self.config_bram[addr]
    }

    pub fn tr(&self, offset: usize) -> &[u16] {
        &self.tr_bram[offset..offset + self.num_transducers]
    }

    pub fn modulation(&self) -> &[u16] {
        &self.mod_bram
    }

    pub fn stm(&self) -> &[u16] {
        &self.stm_bram
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(select: u8, addr: usize) -> u32 {
        (select as u32) << BRAM_ADDR_BITS | addr as u32
    }

    #[rstest::rstest]
    #[case(BRAM_SELECT_TR, 0)]
    #[case(BRAM_SELECT_TR, TR_PHASE_OFFSET + 248)]
    #[case(BRAM_SELECT_MOD, 1999)]
    #[case(BRAM_SELECT_CONFIG, ADDR_SEQ_DIV)]
    #[case(BRAM_SELECT_STM, 199_999)]
    fn read_write(#[case] select: u8, #[case] a: usize) {
        let mut mem = Memory::new(249);
        mem.write(addr(select, a), 0x1234);
        assert_eq!(0x1234, mem.read(addr(select, a)));
    }

    #[test]
    fn out_of_range() {
        let mut mem = Memory::new(249);
        mem.write(addr(BRAM_SELECT_MOD, 2000), 0x1234);
        assert_eq!(0x0000, mem.read(addr(BRAM_SELECT_MOD, 2000)));
        mem.write(addr(0x3F, 0), 0x1234);
        assert_eq!(0x0000, mem.read(addr(0x3F, 0)));
    }

    #[test]
    fn init() {
        let mem = Memory::new(249);
        assert_eq!(FPGA_VERSION, mem.config(ADDR_FPGA_VER));
        assert_eq!(DEFAULT_CYCLE, mem.config(ADDR_ULTRASOUND_CYCLE));
        assert_eq!(249, mem.tr(0).len());
    }
}
