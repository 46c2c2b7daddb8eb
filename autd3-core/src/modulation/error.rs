use derive_more::Display;
use derive_new::new;
use thiserror::Error;

/// An error occurred during modulation calculation.
#[derive(new, Error, Debug, Display, PartialEq, Clone)]
#[display("{}", msg)]
pub struct ModulationError {
    #[new(into)]
    msg: String,
}
