use autd3_core::modulation::SamplingConfig;

/// The option used in [`Sender`].
///
/// [`Sender`]: super::Sender
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SenderOption {
    /// Sets the silent flag on operation frames.
    pub silent_mode: bool,
    /// Sets the force fan flag on operation frames.
    pub force_fan: bool,
    /// If false, blocking sends do not wait for acknowledgment. Reads always wait.
    pub check_ack: bool,
}

impl Default for SenderOption {
    fn default() -> Self {
        Self {
            silent_mode: true,
            force_fan: false,
            check_ack: true,
        }
    }
}

/// Host-side state of a session that outlives a single [`Sender`].
///
/// [`Sender`]: super::Sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionState {
    /// The sampling configuration applied by the last synchronize.
    pub config: SamplingConfig,
    /// Whether the devices play a point sequence.
    pub seq_mode: bool,
}
