mod clear;
mod clock;
mod frequency;
mod gain;
mod info;
mod modulation;
mod sequence;

use autd3_driver::firmware::{
    cpu::{Command, Header},
    ProtocolGeneration,
};

use crate::CPUEmulator;

impl CPUEmulator {
    #[must_use]
    pub(crate) const fn ack_word(msg_id: u8) -> u16 {
        (msg_id as u16) << 8
    }

    /// Dispatches a frame by its command and returns the acknowledgment word.
    pub(crate) fn handle_payload(&mut self, header: &Header, body: Option<&[u16]>) -> u16 {
        let command = match Command::try_from(header.command) {
            Ok(command) => command,
            Err(code) => {
                tracing::warn!("Unknown command: {:#04X}", code);
                return Self::ack_word(header.msg_id);
            }
        };

        match (self.generation, command) {
            (_, Command::ReadCpuVerLsb)
            | (_, Command::ReadCpuVerMsb)
            | (_, Command::ReadFpgaVerLsb)
            | (_, Command::ReadFpgaVerMsb) => self.read_info(header.msg_id, command),
            (_, Command::Clear) => self.clear(header.msg_id),
            (ProtocolGeneration::Combined, Command::Op) => self.op(header, body),
            (ProtocolGeneration::Combined, Command::SeqMode) => self.seq_mode(header, body),
            (ProtocolGeneration::Combined, Command::InitRefClock) => {
                self.init_ref_clock(header.msg_id, body)
            }
            (ProtocolGeneration::Combined, Command::CalibSeqClock) => self.calib_seq_clock(body),
            (ProtocolGeneration::Split, Command::WriteDuty) => self.write_duty(header, body),
            (ProtocolGeneration::Split, Command::WritePhase) => self.write_phase(header, body),
            (ProtocolGeneration::Split, Command::UltrasoundCycleCnt) => {
                self.ultrasound_cycle_cnt(header.msg_id, body)
            }
            (generation, command) => {
                tracing::warn!("{:?} is not supported in {:?} protocol", command, generation);
                Self::ack_word(header.msg_id)
            }
        }
    }
}
