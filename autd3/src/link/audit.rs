use autd3_core::link::{
    Link, LinkConfiguration, LinkError, RxMessage, TxDatagram, NUM_TRANS_IN_UNIT,
};
use autd3_driver::firmware::ProtocolGeneration;
use autd3_firmware_emulator::CPUEmulator;

use derive_more::{Deref, DerefMut};

#[derive(Default, Clone, Copy, Debug)]
#[doc(hidden)]
pub struct AuditOption {
    pub initial_msg_id: Option<u8>,
    pub broken: bool,
}

#[doc(hidden)]
#[derive(Deref, DerefMut)]
pub struct Audit {
    option: AuditOption,
    generation: ProtocolGeneration,
    is_open: bool,
    #[deref]
    #[deref_mut]
    cpus: Vec<CPUEmulator>,
    broken: bool,
}

impl Audit {
    pub const fn new(generation: ProtocolGeneration, option: AuditOption) -> Self {
        Self {
            option,
            generation,
            is_open: false,
            cpus: Vec::new(),
            broken: false,
        }
    }

    pub fn break_down(&mut self) {
        self.broken = true;
    }

    pub fn repair(&mut self) {
        self.broken = false;
    }

    fn ensure_available(&self) -> Result<(), LinkError> {
        if !self.is_open {
            return Err(LinkError::closed());
        }
        if self.broken {
            return Err(LinkError::new("broken"));
        }
        Ok(())
    }
}

impl Link for Audit {
    fn open(&mut self, config: &LinkConfiguration) -> Result<(), LinkError> {
        self.is_open = true;
        self.cpus = (0..config.num_devices())
            .map(|i| {
                let mut cpu = CPUEmulator::new(i, NUM_TRANS_IN_UNIT, self.generation);
                if let Some(msg_id) = self.option.initial_msg_id {
                    cpu.set_last_msg_id(msg_id);
                }
                cpu
            })
            .collect();
        self.broken = self.option.broken;
        tracing::debug!("Audit link opened with {} devices", self.cpus.len());
        Ok(())
    }

    fn close(&mut self) -> Result<(), LinkError> {
        self.is_open = false;
        Ok(())
    }

    fn send(&mut self, tx: &TxDatagram) -> Result<bool, LinkError> {
        self.ensure_available()?;
        self.cpus.iter_mut().for_each(|cpu| cpu.send(tx));
        Ok(true)
    }

    fn receive(&mut self, rx: &mut [RxMessage]) -> Result<bool, LinkError> {
        self.ensure_available()?;
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
