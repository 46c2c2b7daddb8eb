use super::{error::LinkError, RxMessage, TxDatagram};

/// Parameters passed to a [`Link`] when it is opened.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LinkConfiguration {
    /// The clock divisor of each device, in device order.
    pub cycles: Vec<u16>,
}

impl LinkConfiguration {
    /// Returns the number of devices.
    #[must_use]
    pub fn num_devices(&self) -> usize {
        self.cycles.len()
    }
}

/// A trait that provides the interface with the device.
///
/// `Ok(false)` from [`Link::send`] and [`Link::receive`] means the operation failed but retrying is meaningful.
/// `Err` means an unrecoverable fault.
pub trait Link: Send {
    /// Opens the link.
    fn open(&mut self, config: &LinkConfiguration) -> Result<(), LinkError>;

    /// Closes the link.
    fn close(&mut self) -> Result<(), LinkError>;

    /// Sends a frame to the devices.
    fn send(&mut self, tx: &TxDatagram) -> Result<bool, LinkError>;

    /// Receives the acknowledgments of all devices.
    fn receive(&mut self, rx: &mut [RxMessage]) -> Result<bool, LinkError>;

    /// Checks if the link is open.
    #[must_use]
    fn is_open(&self) -> bool;
}

impl Link for Box<dyn Link> {
    fn open(&mut self, config: &LinkConfiguration) -> Result<(), LinkError> {
        self.as_mut().open(config)
    }

    fn close(&mut self) -> Result<(), LinkError> {
        self.as_mut().close()
    }

    fn send(&mut self, tx: &TxDatagram) -> Result<bool, LinkError> {
        self.as_mut().send(tx)
    }

    fn receive(&mut self, rx: &mut [RxMessage]) -> Result<bool, LinkError> {
        self.as_mut().receive(rx)
    }

    fn is_open(&self) -> bool {
        self.as_ref().is_open()
    }
}
