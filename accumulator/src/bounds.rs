//! Explicit overflow/underflow window for an accumulator.

use crate::error::{Error, Result};
use crate::register::Register;
use num_traits::NumCast;
use std::fmt;

/// Which side of the window a pre-check ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// The next value would be above the maximum.
    Overflow,
    /// The next value would be below the minimum.
    Underflow,
}

impl Boundary {
    pub fn as_str(&self) -> &'static str {
        match self {
            Boundary::Overflow => "overflow",
            Boundary::Underflow => "underflow",
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive `[min, max]` range an accumulator must stay within.
///
/// Usually the native range of the register ([`Bounds::native`]), but a
/// narrower window can be supplied to model a smaller width on a wider
/// type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds<T> {
    min: T,
    max: T,
}

impl<T: Register> Bounds<T> {
    /// The full representable range of `T`.
    pub fn native() -> Self {
        Self {
            min: T::min_value(),
            max: T::max_value(),
        }
    }

    /// A custom window. Fails when `min > max`.
    pub fn new(min: T, max: T) -> Result<Self> {
        if min > max {
            return Err(Error::InvalidBounds {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }

    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    /// `max / steps`: the largest step that can be taken `steps` times from
    /// zero without leaving the window.
    pub fn share(&self, steps: u64) -> Result<T> {
        let divisor = <T as NumCast>::from(steps)
            .filter(|d| !d.is_zero())
            .ok_or(Error::StepCount {
                steps,
                type_name: T::NAME,
            })?;
        Ok(self.max / divisor)
    }

    /// Pre-check for `value + delta`.
    ///
    /// Returns the sum only if it is representable and inside the window;
    /// the addition is never carried out past the bound.
    pub fn check_add(&self, value: T, delta: T) -> std::result::Result<T, Boundary> {
        let rising = delta >= T::zero();
        match value.checked_add(&delta) {
            Some(next) if next > self.max => Err(Boundary::Overflow),
            Some(next) if next < self.min => Err(Boundary::Underflow),
            Some(next) => Ok(next),
            None if rising => Err(Boundary::Overflow),
            None => Err(Boundary::Underflow),
        }
    }

    /// Pre-check for `value - delta`.
    pub fn check_sub(&self, value: T, delta: T) -> std::result::Result<T, Boundary> {
        let falling = delta >= T::zero();
        match value.checked_sub(&delta) {
            Some(next) if next < self.min => Err(Boundary::Underflow),
            Some(next) if next > self.max => Err(Boundary::Overflow),
            Some(next) => Ok(next),
            None if falling => Err(Boundary::Underflow),
            None => Err(Boundary::Overflow),
        }
    }
}
