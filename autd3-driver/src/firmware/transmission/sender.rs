use autd3_core::{
    ethercat::poll_interval,
    gain::Drive,
    geometry::Geometry,
    link::Link,
    modulation::SamplingConfig,
    sleep::Sleep,
};
use itertools::Itertools;

use super::{SenderOption, SessionState};
use crate::{
    datagram::{GainCache, ModulationCache, PointSequence},
    error::AUTDDriverError,
    firmware::{
        cpu::{
            check_if_msg_is_processed, laps, Command, ControlFlags, MsgIdGenerator, RxMessage,
            TxDatagram, LAP_TAG_MASK, SEQ_CALIB_DONE_TAG, SEQ_LAP_REPORT_TAG,
        },
        operation::{self, pack_header},
        version::FirmwareInfo,
        ProtocolGeneration,
    },
};

/// The trial budget of an ordinary blocking send.
pub const SEND_MAX_TRIAL: usize = 200;
/// The trial budget of the reference clock initialization.
pub const SYNC_MAX_TRIAL: usize = 5000;
/// The trial budget of waiting for the lap report after a point sequence.
pub const SEQ_LAP_MAX_TRIAL: usize = 2000;

const MSG_ID_MASK: u8 = 0xFF;

/// A struct to send frames to the devices and wait for their acknowledgment.
///
/// A [`Sender`] borrows the state of a session for the duration of one or more operations.
pub struct Sender<'a, L: Link, S: Sleep> {
    pub(crate) msg_id: &'a mut MsgIdGenerator,
    pub(crate) link: &'a mut L,
    pub(crate) geometry: &'a Geometry,
    pub(crate) tx: &'a mut TxDatagram,
    pub(crate) rx: &'a mut [RxMessage],
    pub(crate) state: &'a mut SessionState,
    pub(crate) generation: ProtocolGeneration,
    pub(crate) option: SenderOption,
    pub(crate) sleeper: &'a S,
}

impl<'a, L: Link, S: Sleep> Sender<'a, L, S> {
    #[doc(hidden)]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        msg_id: &'a mut MsgIdGenerator,
        link: &'a mut L,
        geometry: &'a Geometry,
        tx: &'a mut TxDatagram,
        rx: &'a mut [RxMessage],
        state: &'a mut SessionState,
        generation: ProtocolGeneration,
        option: SenderOption,
        sleeper: &'a S,
    ) -> Self {
        Self {
            msg_id,
            link,
            geometry,
            tx,
            rx,
            state,
            generation,
            option,
            sleeper,
        }
    }

    /// Sends one frame carrying the gain and the next modulation chunk without waiting for acknowledgment.
    ///
    /// In [`ProtocolGeneration::Split`], the gain is written by a duty frame followed by a phase frame.
    pub fn send(
        &mut self,
        gain: Option<&mut GainCache>,
        modulation: Option<&mut ModulationCache>,
    ) -> Result<bool, AUTDDriverError> {
        match self.generation {
            ProtocolGeneration::Combined => {
                let drives = gain.map(|g| g.build(self.geometry)).transpose()?;
                let mut modulation = modulation;
                if let Some(m) = modulation.as_deref_mut() {
                    m.build(&self.state.config)?;
                }
                self.pack_op(drives, modulation);
                self.transmit()
            }
            ProtocolGeneration::Split => {
                self.ensure_no_modulation(modulation.is_some())?;
                match gain {
                    Some(g) => {
                        let drives = g.build(self.geometry)?;
                        self.send_split(drives, false)
                    }
                    None => Ok(true),
                }
            }
        }
    }

    /// Sends frames until the modulation is fully streamed, waiting for the acknowledgment of each.
    ///
    /// The gain travels only in the first frame.
    pub fn send_blocking(
        &mut self,
        gain: Option<&mut GainCache>,
        modulation: Option<&mut ModulationCache>,
    ) -> Result<bool, AUTDDriverError> {
        match self.generation {
            ProtocolGeneration::Combined => {
                let drives = gain.map(|g| g.build(self.geometry)).transpose()?;
                let mut modulation = modulation;
                if let Some(m) = modulation.as_deref_mut() {
                    m.build(&self.state.config)?;
                }
                self.send_op_blocking(drives, modulation)
            }
            ProtocolGeneration::Split => {
                self.ensure_no_modulation(modulation.is_some())?;
                match gain {
                    Some(g) => {
                        let drives = g.build(self.geometry)?;
                        self.send_split(drives, true)
                    }
                    None => Ok(true),
                }
            }
        }
    }

    /// Streams a point sequence, then aligns the sequence clocks of the devices.
    pub fn send_sequence(&mut self, seq: &mut PointSequence) -> Result<bool, AUTDDriverError> {
        self.ensure_combined("Point sequence")?;

        let mut base = ControlFlags::empty();
        base.set(ControlFlags::SILENT, self.option.silent_mode);
        loop {
            let msg_id = self.msg_id.next_id();
            pack_header(self.tx, msg_id, Command::SeqMode, base);
            let flags = base | operation::sequence::pack(seq, self.geometry, self.tx);
            self.tx.header_mut().flags = flags.bits();
            if !self.transmit_blocking(SEND_MAX_TRIAL)? {
                return Ok(false);
            }
            if seq.is_finished() {
                break;
            }
        }
        self.state.seq_mode = true;

        if !self.wait_msg_processed(SEQ_LAP_REPORT_TAG, SEQ_LAP_MAX_TRIAL, LAP_TAG_MASK)? {
            return Ok(false);
        }
        self.synchronize_seq()
    }

    /// Resets the devices and the host-side session state.
    pub fn clear(&mut self) -> Result<bool, AUTDDriverError> {
        if !self.release_control_msg_id(Command::Clear)? {
            return Ok(false);
        }
        let msg_id = self.control_msg_id(Command::Clear);
        pack_header(self.tx, msg_id, Command::Clear, ControlFlags::empty());
        *self.state = SessionState::default();
        self.transmit_blocking(SEND_MAX_TRIAL)
    }

    /// Silences the output by sending zero duty and phase to every transducer.
    pub fn stop(&mut self) -> Result<bool, AUTDDriverError> {
        let drives = self
            .geometry
            .iter()
            .map(|dev| vec![Drive::NULL; dev.num_transducers()])
            .collect_vec();
        match self.generation {
            ProtocolGeneration::Combined => self.send_op_blocking(Some(drives.as_slice()), None),
            ProtocolGeneration::Split => self.send_split(&drives, true),
        }
    }

    /// Validates and stores the sampling configuration, then initializes the reference clock of the devices.
    ///
    /// No frame is sent if the configuration is invalid.
    pub fn synchronize(&mut self, config: SamplingConfig) -> Result<bool, AUTDDriverError> {
        self.ensure_combined("Synchronize")?;
        let shifts = operation::synchronize::shifts(&config)?;
        if !self.release_control_msg_id(Command::InitRefClock)? {
            return Ok(false);
        }
        self.state.config = config;

        let msg_id = self.control_msg_id(Command::InitRefClock);
        pack_header(self.tx, msg_id, Command::InitRefClock, ControlFlags::empty());
        operation::synchronize::pack(shifts, self.geometry, self.tx);
        self.transmit_blocking(SYNC_MAX_TRIAL)
    }

    /// Aligns the sequence clocks using the lap counters held in the current acknowledgments.
    ///
    /// If all counters already agree, no frame is sent.
    pub fn synchronize_seq(&mut self) -> Result<bool, AUTDDriverError> {
        self.ensure_combined("Sequence clock calibration")?;
        let laps = laps(self.rx).collect_vec();
        let offsets = operation::clock::compute_offsets(&laps);
        if offsets.iter().all(|&o| o == 0) {
            tracing::debug!("Sequence clocks are already aligned: {:?}", laps);
            return Ok(true);
        }
        tracing::debug!("Sequence clock offsets: {:?}", offsets);
        if !self.release_control_msg_id(Command::CalibSeqClock)? {
            return Ok(false);
        }

        let msg_id = self.control_msg_id(Command::CalibSeqClock);
        pack_header(
            self.tx,
            msg_id,
            Command::CalibSeqClock,
            ControlFlags::empty(),
        );
        operation::clock::pack(&offsets, self.tx);
        if !self.transmit()? {
            return Ok(false);
        }
        self.wait_msg_processed(SEQ_CALIB_DONE_TAG, SEND_MAX_TRIAL, LAP_TAG_MASK)
    }

    /// Pushes the clock divisor of each device.
    pub fn set_frequency(&mut self) -> Result<bool, AUTDDriverError> {
        if self.generation != ProtocolGeneration::Split {
            return Err(AUTDDriverError::NotSupported(
                "Ultrasound cycle",
                self.generation,
            ));
        }
        let msg_id = self.msg_id.next_id();
        pack_header(
            self.tx,
            msg_id,
            Command::UltrasoundCycleCnt,
            ControlFlags::empty(),
        );
        operation::frequency::pack(self.geometry, self.tx);
        self.transmit_blocking(SEND_MAX_TRIAL)
    }

    /// Reads the firmware versions of all devices.
    pub fn firmware_info_list(&mut self) -> Result<Vec<FirmwareInfo>, AUTDDriverError> {
        let cpu_lsb = self.read_firmware_info(Command::ReadCpuVerLsb)?;
        let cpu_msb = self.read_firmware_info(Command::ReadCpuVerMsb)?;
        let fpga_lsb = self.read_firmware_info(Command::ReadFpgaVerLsb)?;
        let fpga_msb = self.read_firmware_info(Command::ReadFpgaVerMsb)?;

        Ok(self
            .geometry
            .iter()
            .map(|dev| {
                let i = dev.idx();
                FirmwareInfo::from_bytes(i, (cpu_lsb[i], cpu_msb[i]), (fpga_lsb[i], fpga_msb[i]))
            })
            .collect())
    }

    /// Polls the acknowledgments until every device reports `msg_id` under `mask`.
    ///
    /// Returns `Ok(false)` if the trial budget is exhausted.
    pub fn wait_msg_processed(
        &mut self,
        msg_id: u8,
        max_trial: usize,
        mask: u8,
    ) -> Result<bool, AUTDDriverError> {
        if !self.link.is_open() {
            return Err(AUTDDriverError::LinkClosed);
        }
        let interval = poll_interval(self.geometry.num_devices());
        for trial in 0..max_trial {
            if self.link.receive(self.rx)?
                && check_if_msg_is_processed(msg_id, mask, self.rx).all(std::convert::identity)
            {
                return Ok(true);
            }
            tracing::trace!("Message {:#04X} is not processed (trial {})", msg_id, trial + 1);
            if trial + 1 < max_trial {
                self.sleeper.sleep(interval);
            }
        }
        tracing::warn!(
            "Message {:#04X} was not processed within {} trials",
            msg_id,
            max_trial
        );
        Ok(false)
    }

    /// Stops the output, clears the devices and closes the link.
    ///
    /// All three steps are attempted. The first error is returned, otherwise whether all steps succeeded.
    pub fn close(mut self) -> Result<bool, AUTDDriverError> {
        let stop = self.stop();
        let clear = self.clear();
        let close = match self.link.close() {
            Ok(()) => {
                tracing::debug!("Link closed");
                Ok(true)
            }
            Err(e) => Err(AUTDDriverError::from(e)),
        };
        [stop, clear, close]
            .into_iter()
            .try_fold(true, |acc, r| r.map(|b| acc && b))
    }
}

impl<L: Link, S: Sleep> Sender<'_, L, S> {
    fn ensure_combined(&self, op: &'static str) -> Result<(), AUTDDriverError> {
        match self.generation {
            ProtocolGeneration::Combined => Ok(()),
            ProtocolGeneration::Split => Err(AUTDDriverError::NotSupported(op, self.generation)),
        }
    }

    fn ensure_no_modulation(&self, has_modulation: bool) -> Result<(), AUTDDriverError> {
        if has_modulation {
            return Err(AUTDDriverError::NotSupported("Modulation", self.generation));
        }
        Ok(())
    }

    // A device ignores a frame carrying the same msg id as the previous one.
    // When the last frame already used the fixed id of `command`, a read frame with a generated id is sent in between.
    fn release_control_msg_id(&mut self, command: Command) -> Result<bool, AUTDDriverError> {
        if self.generation != ProtocolGeneration::Combined
            || self.tx.header().msg_id != command.code()
        {
            return Ok(true);
        }
        tracing::debug!("Msg id {:#04X} is still in use", command.code());
        let msg_id = self.msg_id.next_id();
        pack_header(self.tx, msg_id, Command::ReadCpuVerLsb, ControlFlags::empty());
        self.transmit_blocking(SEND_MAX_TRIAL)
    }

    fn control_msg_id(&mut self, command: Command) -> u8 {
        match self.generation {
            ProtocolGeneration::Combined => command.code(),
            ProtocolGeneration::Split => self.msg_id.next_id(),
        }
    }

    fn op_flags(&self) -> ControlFlags {
        let mut flags = ControlFlags::empty();
        flags.set(ControlFlags::SILENT, self.option.silent_mode);
        flags.set(ControlFlags::FORCE_FAN, self.option.force_fan);
        flags.set(ControlFlags::SEQ_MODE, self.state.seq_mode);
        flags
    }

    fn pack_op(&mut self, drives: Option<&[Vec<Drive>]>, modulation: Option<&mut ModulationCache>) {
        let msg_id = self.msg_id.next_id();
        let mut flags = self.op_flags();
        if drives.is_some() {
            self.state.seq_mode = false;
            flags.remove(ControlFlags::SEQ_MODE);
        }
        pack_header(self.tx, msg_id, Command::Op, flags);
        if let Some(m) = modulation {
            flags |= operation::modulation::pack(m, self.tx);
        }
        if let Some(drives) = drives {
            operation::gain::pack_combined(drives, self.geometry, self.tx);
        }
        self.tx.header_mut().flags = flags.bits();
    }

    fn send_op_blocking(
        &mut self,
        drives: Option<&[Vec<Drive>]>,
        modulation: Option<&mut ModulationCache>,
    ) -> Result<bool, AUTDDriverError> {
        let mut drives = drives;
        let mut modulation = modulation;
        loop {
            self.pack_op(drives.take(), modulation.as_deref_mut());
            if !self.transmit_blocking(SEND_MAX_TRIAL)? {
                return Ok(false);
            }
            if modulation.as_ref().map_or(true, |m| m.is_finished()) {
                return Ok(true);
            }
        }
    }

    fn send_split(&mut self, drives: &[Vec<Drive>], blocking: bool) -> Result<bool, AUTDDriverError> {
        let flags = self.op_flags();

        let msg_id = self.msg_id.next_id();
        pack_header(self.tx, msg_id, Command::WriteDuty, flags);
        operation::gain::pack_duty(drives, self.tx);
        if !self.transmit_blocking(SEND_MAX_TRIAL)? {
            return Ok(false);
        }

        let msg_id = self.msg_id.next_id();
        pack_header(self.tx, msg_id, Command::WritePhase, flags);
        operation::gain::pack_phase(drives, self.tx);
        if blocking {
            self.transmit_blocking(SEND_MAX_TRIAL)
        } else {
            self.transmit()
        }
    }

    fn read_firmware_info(&mut self, command: Command) -> Result<Vec<u8>, AUTDDriverError> {
        let msg_id = self.msg_id.next_id();
        pack_header(self.tx, msg_id, command, ControlFlags::empty());
        if !self.transmit()? || !self.wait_msg_processed(msg_id, SEND_MAX_TRIAL, MSG_ID_MASK)? {
            return Err(AUTDDriverError::ReadFirmwareInfoFailed(
                check_if_msg_is_processed(msg_id, MSG_ID_MASK, self.rx).collect(),
            ));
        }
        Ok(self.rx.iter().map(|r| r.data()).collect())
    }

    fn transmit(&mut self) -> Result<bool, AUTDDriverError> {
        if !self.link.is_open() {
            return Err(AUTDDriverError::LinkClosed);
        }
        tracing::debug!("Send {}", self.tx);
        Ok(self.link.send(self.tx)?)
    }

    fn transmit_blocking(&mut self, max_trial: usize) -> Result<bool, AUTDDriverError> {
        let msg_id = self.tx.header().msg_id;
        if !self.transmit()? {
            return Ok(false);
        }
        if !self.option.check_ack {
            return Ok(true);
        }
        self.wait_msg_processed(msg_id, max_trial, MSG_ID_MASK)
    }
}
