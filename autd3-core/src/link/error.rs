use derive_more::Display;
use derive_new::new;
use thiserror::Error;

/// An error produced by the link.
///
/// A link returns this error only for unrecoverable faults. Transient failures are reported as `Ok(false)`.
#[derive(new, Error, Debug, Display, PartialEq, Clone)]
#[display("{}", msg)]
pub struct LinkError {
    #[new(into)]
    msg: String,
}

impl LinkError {
    /// An error returned when the link is used before it is opened or after it is closed.
    #[must_use]
    pub fn closed() -> Self {
        Self::new("Link is closed")
    }
}
