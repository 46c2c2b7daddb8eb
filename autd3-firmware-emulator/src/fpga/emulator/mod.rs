mod memory;

use autd3_driver::firmware::{
    cpu::ControlFlags,
    operation::sequence::{decode_point, SEQ_POINT_SIZE},
};

use memory::Memory;

use super::params::*;

/// A focal point stored in the sequence memory, in device-local fixed-point units, with its amplitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeqPoint {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub amp: u8,
}

pub struct FPGAEmulator {
    mem: Memory,
}

impl FPGAEmulator {
    pub(crate) fn new(num_transducers: usize) -> Self {
        Self {
            mem: Memory::new(num_transducers),
        }
    }

    pub(crate) fn read(&self, addr: u32) -> u16 {
        self.mem.read(addr)
    }

    pub(crate) fn write(&mut self, addr: u32, data: u16) {
        self.mem.write(addr, data);
    }

    #[must_use]
    pub fn ctrl_flags(&self) -> ControlFlags {
        ControlFlags::from_bits_truncate(self.mem.config(ADDR_CTRL_FLAGS) as u8)
    }

    #[must_use]
    pub fn is_clk_synced(&self) -> bool {
        self.mem.config(ADDR_CLK_SYNC) != 0
    }

    #[must_use]
    pub fn mod_idx_shift(&self) -> u16 {
        self.mem.config(ADDR_MOD_IDX_SHIFT)
    }

    #[must_use]
    pub fn ref_clk_cycle_shift(&self) -> u16 {
        self.mem.config(ADDR_REF_CLK_CYC_SHIFT)
    }

    #[must_use]
    pub fn ultrasound_cycle(&self) -> u16 {
        self.mem.config(ADDR_ULTRASOUND_CYCLE)
    }

    #[must_use]
    pub fn fpga_version(&self) -> u16 {
        self.mem.config(ADDR_FPGA_VER)
    }

    pub fn set_fpga_version(&mut self, version: u16) {
        *self.mem.config_mut(ADDR_FPGA_VER) = version;
    }

    /// Returns `(duty, phase)` of each transducer written by combined operation frames.
    #[must_use]
    pub fn drives(&self) -> Vec<(u8, u8)> {
        self.mem
            .tr(0)
            .iter()
            .map(|&d| ((d >> 8) as u8, (d & 0xFF) as u8))
            .collect()
    }

    #[must_use]
    pub fn duties(&self) -> Vec<u16> {
        self.mem.tr(0).to_vec()
    }

    #[must_use]
    pub fn phases(&self) -> Vec<u16> {
        self.mem.tr(TR_PHASE_OFFSET).to_vec()
    }

    #[must_use]
    pub fn modulation(&self) -> Vec<u8> {
        self.mem
            .modulation()
            .iter()
            .flat_map(|w| w.to_le_bytes())
            .collect()
    }

    #[must_use]
    pub fn seq_size(&self) -> usize {
        self.mem.config(ADDR_SEQ_SIZE) as usize
    }

    #[must_use]
    pub fn seq_div(&self) -> u16 {
        self.mem.config(ADDR_SEQ_DIV)
    }

    #[must_use]
    pub fn seq_clk_offset(&self) -> u16 {
        self.mem.config(ADDR_SEQ_CLK_OFFSET)
    }

    #[must_use]
    pub fn seq_points(&self) -> Vec<SeqPoint> {
        self.mem
            .stm()
            .chunks_exact(SEQ_POINT_SIZE / 2)
            .take(self.seq_size())
            .map(|words| {
                let b: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
                SeqPoint {
                    x: decode_point([b[0], b[1], b[2]]),
                    y: decode_point([b[3], b[4], b[5]]),
                    z: decode_point([b[6], b[7], b[8]]),
                    amp: b[9],
                }
            })
            .collect()
    }

    #[must_use]
    pub const fn num_transducers(&self) -> usize {
        self.mem.num_transducers()
    }
}
