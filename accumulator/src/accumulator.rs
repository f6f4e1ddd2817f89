//! Bounded addition and subtraction loops.
//!
//! A run starts from a value, applies the same step up to `steps` times and
//! stops as soon as the next step would leave the window. The loop is
//! bounded by `steps`, so every run terminates.

use crate::bounds::{Boundary, Bounds};
use crate::register::Register;
use log::debug;
use std::fmt;

/// The arithmetic applied on every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
        }
    }

    fn symbol(&self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one accumulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome<T> {
    /// Last value that stayed inside the window.
    pub value: T,
    /// Number of steps actually applied.
    pub steps_taken: u64,
    /// Set when the run stopped before `steps` because of a pre-check.
    pub halted: Option<Boundary>,
}

impl<T> Outcome<T> {
    pub fn halted_early(&self) -> bool {
        self.halted.is_some()
    }
}

/// A register holding a running value inside fixed bounds.
///
/// Every mutation is pre-checked; on failure the value is left untouched.
#[derive(Debug, Clone, Copy)]
pub struct Accumulator<T> {
    value: T,
    bounds: Bounds<T>,
}

impl<T: Register> Accumulator<T> {
    pub fn new(start: T, bounds: Bounds<T>) -> Self {
        Self {
            value: start,
            bounds,
        }
    }

    pub fn value(&self) -> T {
        self.value
    }

    /// Apply one step of `op`, or report the side it would cross.
    pub fn apply(&mut self, op: Operation, delta: T) -> Result<T, Boundary> {
        let next = match op {
            Operation::Add => self.bounds.check_add(self.value, delta)?,
            Operation::Subtract => self.bounds.check_sub(self.value, delta)?,
        };
        self.value = next;
        Ok(next)
    }
}

/// Run `op` with `delta` up to `steps` times starting from `start`.
pub fn accumulate<T: Register>(
    op: Operation,
    start: T,
    delta: T,
    steps: u64,
    bounds: &Bounds<T>,
) -> Outcome<T> {
    let mut acc = Accumulator::new(start, *bounds);

    for taken in 0..steps {
        if let Err(boundary) = acc.apply(op, delta) {
            debug!(
                "numeric {} detected: {} {} {} leaves [{}, {}] ({}), halting before step {} of {}",
                boundary,
                acc.value(),
                op.symbol(),
                delta,
                bounds.min(),
                bounds.max(),
                T::NAME,
                taken + 1,
                steps
            );
            return Outcome {
                value: acc.value(),
                steps_taken: taken,
                halted: Some(boundary),
            };
        }
    }

    Outcome {
        value: acc.value(),
        steps_taken: steps,
        halted: None,
    }
}

/// Add `increment` to `start` up to `steps` times without crossing `bounds`.
pub fn add_numbers<T: Register>(start: T, increment: T, steps: u64, bounds: &Bounds<T>) -> Outcome<T> {
    accumulate(Operation::Add, start, increment, steps, bounds)
}

/// Subtract `decrement` from `start` up to `steps` times without crossing `bounds`.
pub fn subtract_numbers<T: Register>(start: T, decrement: T, steps: u64, bounds: &Bounds<T>) -> Outcome<T> {
    accumulate(Operation::Subtract, start, decrement, steps, bounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    const I64_FIFTH: i64 = i64::MAX / 5;

    #[test]
    fn test_add_without_overflow() {
        let bounds = Bounds::<i64>::native();
        let outcome = add_numbers(0, I64_FIFTH, 5, &bounds);
        assert_eq!(outcome.value, 9_223_372_036_854_775_805);
        assert_eq!(outcome.steps_taken, 5);
        assert!(!outcome.halted_early());
    }

    #[test]
    fn test_add_with_overflow() {
        let bounds = Bounds::<i64>::native();
        let outcome = add_numbers(0, I64_FIFTH, 6, &bounds);
        assert_eq!(outcome.value, 5 * I64_FIFTH);
        assert_eq!(outcome.steps_taken, 5);
        assert_eq!(outcome.halted, Some(Boundary::Overflow));
    }

    #[test]
    fn test_subtract_without_underflow() {
        let bounds = Bounds::<i64>::native();
        let outcome = subtract_numbers(i64::MAX, I64_FIFTH, 5, &bounds);
        assert_eq!(outcome.value, i64::MAX - 5 * I64_FIFTH);
        assert!(!outcome.halted_early());
    }

    #[test]
    fn test_subtract_signed_sixth_step_stays_in_range() {
        let bounds = Bounds::<i64>::native();
        let outcome = subtract_numbers(i64::MAX, I64_FIFTH, 6, &bounds);
        assert_eq!(outcome.value, 2 - I64_FIFTH);
        assert_eq!(outcome.steps_taken, 6);
        assert!(!outcome.halted_early());
    }

    #[test]
    fn test_subtract_unsigned_with_underflow() {
        let bounds = Bounds::<u64>::native();
        let fifth = u64::MAX / 5;
        let outcome = subtract_numbers(u64::MAX, fifth, 6, &bounds);
        assert_eq!(outcome.value, u64::MAX - 5 * fifth);
        assert_eq!(outcome.steps_taken, 5);
        assert_eq!(outcome.halted, Some(Boundary::Underflow));
    }

    #[test]
    fn test_subtract_to_signed_minimum() {
        let bounds = Bounds::<i64>::native();
        let outcome = subtract_numbers(0, i64::MAX, 2, &bounds);
        assert_eq!(outcome.value, -i64::MAX);
        assert_eq!(outcome.halted, Some(Boundary::Underflow));

        let outcome = subtract_numbers(-1, i64::MAX, 1, &bounds);
        assert_eq!(outcome.value, i64::MIN);
        assert!(!outcome.halted_early());
    }

    #[test]
    fn test_zero_steps_returns_start() {
        let bounds = Bounds::<i32>::native();
        let outcome = add_numbers(42, 7, 0, &bounds);
        assert_eq!(outcome.value, 42);
        assert_eq!(outcome.steps_taken, 0);
        assert!(!outcome.halted_early());

        let outcome = subtract_numbers(42, 7, 0, &bounds);
        assert_eq!(outcome.value, 42);
    }

    #[test]
    fn test_zero_increment_runs_every_step() {
        let bounds = Bounds::<i8>::native();
        let outcome = add_numbers(i8::MAX, 0, 1000, &bounds);
        assert_eq!(outcome.value, i8::MAX);
        assert_eq!(outcome.steps_taken, 1000);
        assert!(!outcome.halted_early());
    }

    #[test]
    fn test_negative_increment_detects_underflow() {
        let bounds = Bounds::<i16>::native();
        let outcome = add_numbers(i16::MIN + 10, -4, 10, &bounds);
        assert_eq!(outcome.value, i16::MIN + 2);
        assert_eq!(outcome.steps_taken, 2);
        assert_eq!(outcome.halted, Some(Boundary::Underflow));
    }

    #[test]
    fn test_custom_window_halts_early() {
        let bounds = Bounds::new(0u32, 100).unwrap();
        let outcome = add_numbers(0, 30, 5, &bounds);
        assert_eq!(outcome.value, 90);
        assert_eq!(outcome.steps_taken, 3);
        assert_eq!(outcome.halted, Some(Boundary::Overflow));
    }

    #[test]
    fn test_accumulator_apply_leaves_value_on_failure() {
        let mut acc = Accumulator::new(250u8, Bounds::native());
        assert_eq!(acc.apply(Operation::Add, 5), Ok(255));
        assert_eq!(acc.apply(Operation::Add, 1), Err(Boundary::Overflow));
        assert_eq!(acc.value(), 255);
        assert_eq!(acc.apply(Operation::Subtract, 255), Ok(0));
        assert_eq!(acc.apply(Operation::Subtract, 1), Err(Boundary::Underflow));
        assert_eq!(acc.value(), 0);
    }

    #[test]
    fn test_every_width_overflows_on_extra_step() {
        fn check<T: Register>() {
            let bounds = Bounds::<T>::native();
            let increment = bounds.share(5).unwrap();
            let safe = add_numbers(T::zero(), increment, 5, &bounds);
            let breach = add_numbers(T::zero(), increment, 6, &bounds);
            assert!(!safe.halted_early(), "{} halted early", T::NAME);
            assert_eq!(breach.halted, Some(Boundary::Overflow), "{}", T::NAME);
            assert_eq!(breach.value, safe.value, "{}", T::NAME);
        }

        check::<i8>();
        check::<i16>();
        check::<i32>();
        check::<i64>();
        check::<i128>();
        check::<isize>();
        check::<u8>();
        check::<u16>();
        check::<u32>();
        check::<u64>();
        check::<u128>();
        check::<usize>();
    }

    #[test]
    fn test_every_width_underflow_on_extra_step() {
        fn check<T: Register>() {
            let bounds = Bounds::<T>::native();
            let decrement = bounds.share(5).unwrap();
            let safe = subtract_numbers(bounds.max(), decrement, 5, &bounds);
            let extra = subtract_numbers(bounds.max(), decrement, 6, &bounds);
            assert!(!safe.halted_early(), "{} halted early", T::NAME);

            if T::min_value() < T::zero() {
                assert!(!extra.halted_early(), "{} halted", T::NAME);
                assert_eq!(extra.steps_taken, 6, "{}", T::NAME);
                assert_eq!(extra.value, safe.value - decrement, "{}", T::NAME);
            } else {
                assert_eq!(extra.halted, Some(Boundary::Underflow), "{}", T::NAME);
                assert_eq!(extra.steps_taken, 5, "{}", T::NAME);
                assert_eq!(extra.value, safe.value, "{}", T::NAME);
            }
        }

        check::<i8>();
        check::<i16>();
        check::<i32>();
        check::<i64>();
        check::<i128>();
        check::<isize>();
        check::<u8>();
        check::<u16>();
        check::<u32>();
        check::<u64>();
        check::<u128>();
        check::<usize>();
    }
}
