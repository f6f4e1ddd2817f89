//! Errors raised while setting up an accumulation.
//!
//! Reaching a bound during a run is not an error; it is reported through
//! [`crate::Outcome::halted`].

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The lower bound is above the upper bound.
    #[error("invalid bounds: min {min} is greater than max {max}")]
    InvalidBounds { min: String, max: String },

    /// A step count of zero, or one that does not fit in the register.
    #[error("step count {steps} is not usable for {type_name}: it must be between 1 and {type_name}::MAX")]
    StepCount { steps: u64, type_name: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
