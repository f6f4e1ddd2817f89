//! # Numeric Accumulator
//!
//! Bounded integer accumulators that never wrap.
//!
//! Every step of an accumulation is checked *before* it is applied: if the
//! next addition or subtraction would leave the configured [`Bounds`], the
//! run stops and reports which side was reached. Nothing is printed from
//! here; callers get an [`Outcome`] and decide how to present it.
//!
//! ## Usage
//!
//! ```rust
//! use numeric_accumulator::{add_numbers, Boundary, Bounds};
//!
//! let bounds = Bounds::<i64>::native();
//! let increment = bounds.share(5).unwrap();
//!
//! let safe = add_numbers(0, increment, 5, &bounds);
//! assert!(!safe.halted_early());
//!
//! let breach = add_numbers(0, increment, 6, &bounds);
//! assert_eq!(breach.halted, Some(Boundary::Overflow));
//! assert_eq!(breach.value, safe.value);
//! ```

pub mod accumulator;
pub mod bounds;
pub mod error;
pub mod register;

pub use accumulator::{accumulate, add_numbers, subtract_numbers, Accumulator, Operation, Outcome};
pub use bounds::{Boundary, Bounds};
pub use error::{Error, Result};
pub use register::Register;
