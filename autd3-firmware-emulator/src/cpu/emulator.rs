use autd3_driver::firmware::{
    cpu::{RxMessage, TxDatagram, LAP_MODULUS, SEQ_LAP_REPORT_TAG},
    ProtocolGeneration,
};

use crate::fpga::{params::*, FPGAEmulator};

use super::params::*;

pub struct CPUEmulator {
    pub(crate) idx: usize,
    pub(crate) num_transducers: usize,
    pub(crate) generation: ProtocolGeneration,
    pub(crate) last_msg_id: u8,
    pub(crate) ack: u16,
    pub(crate) mod_buf: Vec<u8>,
    pub(crate) mod_size: usize,
    pub(crate) seq_cursor: usize,
    pub(crate) seq_lap_pending: bool,
    pub(crate) lap: u16,
    pub(crate) fpga: FPGAEmulator,
}

impl CPUEmulator {
    #[must_use]
    pub fn new(idx: usize, num_transducers: usize, generation: ProtocolGeneration) -> Self {
        let mut s = Self {
            idx,
            num_transducers,
            generation,
            last_msg_id: INITIAL_MSG_ID,
            ack: 0x0000,
            mod_buf: vec![0xFF; MOD_BUF_SIZE],
            mod_size: 0,
            seq_cursor: 0,
            seq_lap_pending: false,
            lap: 0,
            fpga: FPGAEmulator::new(num_transducers),
        };
        s.init();
        s
    }

    #[must_use]
    pub const fn idx(&self) -> usize {
        self.idx
    }

    #[must_use]
    pub const fn num_transducers(&self) -> usize {
        self.num_transducers
    }

    #[must_use]
    pub const fn generation(&self) -> ProtocolGeneration {
        self.generation
    }

    #[must_use]
    pub const fn fpga(&self) -> &FPGAEmulator {
        &self.fpga
    }

    #[must_use]
    pub fn fpga_mut(&mut self) -> &mut FPGAEmulator {
        &mut self.fpga
    }

    #[must_use]
    pub const fn rx(&self) -> RxMessage {
        RxMessage::from_word(self.ack)
    }

    #[must_use]
    pub const fn last_msg_id(&self) -> u8 {
        self.last_msg_id
    }

    pub fn set_last_msg_id(&mut self, msg_id: u8) {
        self.last_msg_id = msg_id;
    }

    /// Returns the sequence clock lap counter.
    #[must_use]
    pub const fn lap(&self) -> u16 {
        self.lap
    }

    pub fn set_lap(&mut self, lap: u16) {
        self.lap = lap % LAP_MODULUS;
    }

    pub fn send(&mut self, tx: &TxDatagram) {
        self.ecat_recv(tx);
    }

    /// Publishes the lap report once a point sequence has been received completely.
    pub fn update(&mut self) {
        if self.seq_lap_pending {
            self.seq_lap_pending = false;
            self.ack = Self::lap_word(SEQ_LAP_REPORT_TAG, self.lap);
        }
    }

    /// Puts the device into its power-on state.
    pub fn init(&mut self) {
        self.reset();
        self.last_msg_id = INITIAL_MSG_ID;
        self.ack = 0x0000;
    }
}

impl CPUEmulator {
    #[must_use]
    const fn get_addr(select: u8, addr: usize) -> u32 {
        (select as u32) << BRAM_ADDR_BITS | (addr as u32 & BRAM_ADDR_MASK)
    }

    #[must_use]
    pub(crate) fn bram_read(&self, select: u8, addr: usize) -> u16 {
        self.fpga.read(Self::get_addr(select, addr))
    }

    pub(crate) fn bram_write(&mut self, select: u8, addr: usize, data: u16) {
        self.fpga.write(Self::get_addr(select, addr), data);
    }

    pub(crate) fn bram_cpy(&mut self, select: u8, addr_base: usize, src: &[u16]) {
        src.iter()
            .enumerate()
            .for_each(|(i, &d)| self.bram_write(select, addr_base + i, d));
    }

    pub(crate) fn bram_set(&mut self, select: u8, addr_base: usize, value: u16, size: usize) {
        (0..size).for_each(|i| self.bram_write(select, addr_base + i, value));
    }

    #[must_use]
    pub(crate) const fn lap_word(tag: u8, lap: u16) -> u16 {
        (tag as u16) << 8 | (lap % LAP_MODULUS)
    }

    pub(crate) fn write_ctrl_flags(&mut self, flags: u8) {
        self.bram_write(BRAM_SELECT_CONFIG, ADDR_CTRL_FLAGS, flags as u16);
    }

    fn ecat_recv(&mut self, tx: &TxDatagram) {
        let header = tx.header();
        if header.msg_id == self.last_msg_id {
            return;
        }
        self.last_msg_id = header.msg_id;

        let body = (tx.num_bodies() > self.idx).then(|| tx.body(self.idx).data().as_slice());
        self.ack = self.handle_payload(header, body);
    }
}
