use autd3_core::link::{
    Link, LinkConfiguration, LinkError, RxMessage, TxDatagram, NUM_TRANS_IN_UNIT,
};
use autd3_driver::firmware::ProtocolGeneration;
use autd3_firmware_emulator::CPUEmulator;

/// A [`Link`] that does nothing.
///
/// Every frame is accepted and acknowledged. This link is mainly used for explanation.
#[derive(Default)]
pub struct Nop {
    is_open: bool,
    cpus: Vec<CPUEmulator>,
}

impl Nop {
    /// Creates a new [`Nop`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            is_open: false,
            cpus: Vec::new(),
        }
    }
}

impl Link for Nop {
    fn open(&mut self, config: &LinkConfiguration) -> Result<(), LinkError> {
        self.is_open = true;
        self.cpus = (0..config.num_devices())
            .map(|i| CPUEmulator::new(i, NUM_TRANS_IN_UNIT, ProtocolGeneration::Combined))
            .collect();
        Ok(())
    }

    fn close(&mut self) -> Result<(), LinkError> {
        self.is_open = false;
        Ok(())
    }

    fn send(&mut self, tx: &TxDatagram) -> Result<bool, LinkError> {
        if !self.is_open {
            return Err(LinkError::closed());
        }
        self.cpus.iter_mut().for_each(|cpu| cpu.send(tx));
        Ok(true)
    }

    fn receive(&mut self, rx: &mut [RxMessage]) -> Result<bool, LinkError> {
        if !self.is_open {
            return Err(LinkError::closed());
        }
        rx.iter_mut().zip(self.cpus.iter_mut()).for_each(|(r, cpu)| {
            *r = cpu.rx();
            cpu.update();
        });
        Ok(true)
    }

    fn is_open(&self) -> bool {
        self.is_open
    }
}
