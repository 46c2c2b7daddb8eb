use autd3_core::{
    geometry::{Device, Geometry},
    link::{Link, LinkConfiguration},
    modulation::SamplingConfig,
    sleep::{Sleep, StdSleeper},
};
pub use autd3_driver::firmware::transmission::{Sender, SenderOption};
use autd3_driver::{
    datagram::{GainCache, ModulationCache, PointSequence},
    error::AUTDDriverError,
    firmware::{
        cpu::{MsgIdGenerator, RxMessage, TxDatagram},
        transmission::SessionState,
        version::FirmwareInfo,
        ProtocolGeneration,
    },
};

use derive_more::Deref;
use getset::{CopyGetters, Getters, MutGetters};

/// A controller for the AUTD devices.
///
/// All operations to the devices are done through this struct.
#[derive(Deref, Getters, MutGetters, CopyGetters)]
pub struct Controller<L: Link, S: Sleep = StdSleeper> {
    /// The link to the devices.
    #[getset(get = "pub", get_mut = "pub")]
    link: L,
    /// The geometry of the devices.
    #[getset(get = "pub")]
    #[deref]
    geometry: Geometry,
    msg_id: MsgIdGenerator,
    tx_buf: TxDatagram,
    rx_buf: Vec<RxMessage>,
    state: SessionState,
    /// The protocol generation spoken by the devices.
    #[getset(get_copy = "pub")]
    generation: ProtocolGeneration,
    /// The option used for every operation.
    pub option: SenderOption,
    sleeper: S,
}

impl<L: Link> Controller<L> {
    /// Equivalent to [`Self::open_with_option`] with [`ProtocolGeneration::Combined`], default [`SenderOption`] and [`StdSleeper`].
    pub fn open<D: Into<Device>, F: IntoIterator<Item = D>>(
        devices: F,
        link: L,
    ) -> Result<Self, AUTDDriverError> {
        Self::open_with_option(
            devices,
            link,
            ProtocolGeneration::Combined,
            SenderOption::default(),
            StdSleeper,
        )
    }
}

impl<L: Link, S: Sleep> Controller<L, S> {
    /// Opens a controller.
    ///
    /// Opens the link with the clock divisor of each device. In [`ProtocolGeneration::Split`], the clock divisors are then pushed to the devices.
    pub fn open_with_option<D: Into<Device>, F: IntoIterator<Item = D>>(
        devices: F,
        mut link: L,
        generation: ProtocolGeneration,
        option: SenderOption,
        sleeper: S,
    ) -> Result<Self, AUTDDriverError> {
        let geometry = Geometry::new(devices.into_iter().map(|d| d.into()).collect());

        link.open(&LinkConfiguration {
            cycles: geometry.cycles(),
        })?;
        tracing::debug!(
            "Link opened with {} devices ({:?})",
            geometry.num_devices(),
            generation
        );

        let num_devices = geometry.num_devices();
        let mut cnt = Self {
            link,
            geometry,
            msg_id: generation.msg_id_generator(),
            tx_buf: TxDatagram::new(num_devices),
            rx_buf: vec![RxMessage::default(); num_devices],
            state: SessionState::default(),
            generation,
            option,
            sleeper,
        };

        if generation == ProtocolGeneration::Split && !cnt.set_frequency()? {
            tracing::warn!("Ultrasound cycle was not acknowledged by all devices");
        }

        Ok(cnt)
    }

    /// Returns the [`Sender`] to send frames to the devices.
    pub fn sender(&mut self) -> Sender<'_, L, S> {
        Sender::new(
            &mut self.msg_id,
            &mut self.link,
            &self.geometry,
            &mut self.tx_buf,
            &mut self.rx_buf,
            &mut self.state,
            self.generation,
            self.option,
            &self.sleeper,
        )
    }

    /// Checks if the link is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.link.is_open()
    }

    /// Returns the sampling configuration applied by the last [`synchronize`](Self::synchronize).
    #[must_use]
    pub const fn sampling_config(&self) -> SamplingConfig {
        self.state.config
    }

    /// Returns the acknowledgments received last.
    #[must_use]
    pub fn rx(&self) -> &[RxMessage] {
        &self.rx_buf
    }

    /// Sends one frame without waiting for acknowledgment. See [`Sender::send`].
    pub fn send(
        &mut self,
        gain: Option<&mut GainCache>,
        modulation: Option<&mut ModulationCache>,
    ) -> Result<bool, AUTDDriverError> {
        self.sender().send(gain, modulation)
    }

    /// Sends frames until the modulation is fully streamed. See [`Sender::send_blocking`].
    pub fn send_blocking(
        &mut self,
        gain: Option<&mut GainCache>,
        modulation: Option<&mut ModulationCache>,
    ) -> Result<bool, AUTDDriverError> {
        self.sender().send_blocking(gain, modulation)
    }

    /// Streams a point sequence and aligns the sequence clocks. See [`Sender::send_sequence`].
    pub fn send_sequence(&mut self, seq: &mut PointSequence) -> Result<bool, AUTDDriverError> {
        self.sender().send_sequence(seq)
    }

    /// Resets the devices.
    pub fn clear(&mut self) -> Result<bool, AUTDDriverError> {
        self.sender().clear()
    }

    /// Silences the output.
    pub fn stop(&mut self) -> Result<bool, AUTDDriverError> {
        self.sender().stop()
    }

    /// Initializes the reference clock of the devices with `config`. See [`Sender::synchronize`].
    pub fn synchronize(&mut self, config: SamplingConfig) -> Result<bool, AUTDDriverError> {
        self.sender().synchronize(config)
    }

    /// Aligns the sequence clocks using the lap counters held in the last acknowledgments.
    pub fn synchronize_seq(&mut self) -> Result<bool, AUTDDriverError> {
        self.sender().synchronize_seq()
    }

    /// Pushes the clock divisor of each device.
    pub fn set_frequency(&mut self) -> Result<bool, AUTDDriverError> {
        self.sender().set_frequency()
    }

    /// Returns the firmware information of the devices.
    pub fn firmware_info_list(&mut self) -> Result<Vec<FirmwareInfo>, AUTDDriverError> {
        self.sender().firmware_info_list()
    }

    /// Polls the acknowledgments until every device reports `msg_id` under `mask`.
    pub fn wait_msg_processed(
        &mut self,
        msg_id: u8,
        max_trial: usize,
        mask: u8,
    ) -> Result<bool, AUTDDriverError> {
        self.sender().wait_msg_processed(msg_id, max_trial, mask)
    }

    /// Closes the controller.
    ///
    /// The output is stopped and the devices are cleared before the link is closed.
    pub fn close(mut self) -> Result<bool, AUTDDriverError> {
        self.close_impl()
    }

    fn close_impl(&mut self) -> Result<bool, AUTDDriverError> {
        if !self.link.is_open() {
            return Ok(true);
        }
        self.sender().close()
    }
}

impl<'a, L: Link, S: Sleep> IntoIterator for &'a Controller<L, S> {
    type Item = &'a Device;
    type IntoIter = std::slice::Iter<'a, Device>;

    fn into_iter(self) -> Self::IntoIter {
        self.geometry.iter()
    }
}

impl<L: Link, S: Sleep> Drop for Controller<L, S> {
    fn drop(&mut self) {
        if !self.link.is_open() {
            return;
        }
        if let Err(e) = self.close_impl() {
            tracing::warn!("Failed to close the controller: {}", e);
        }
    }
}
