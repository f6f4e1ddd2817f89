//! Overflow and underflow drivers and the console report
//!
//! Each driver runs its accumulator twice for one width: `steps` times
//! with a step sized to stay in bounds, then once more to reach the bound.
//! The halt signal of each run is reported as the status; no post-hoc
//! comparison against the start value is made.

use crate::error::ReportError;
use crate::events::EventLog;
use crate::widths::IntWidth;
use colored::{ColoredString, Colorize};
use log::debug;
use numeric_accumulator::{accumulate, Boundary, Bounds, Operation, Register};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestKind {
    Overflow,
    Underflow,
}

impl TestKind {
    pub fn operation(&self) -> Operation {
        match self {
            TestKind::Overflow => Operation::Add,
            TestKind::Underflow => Operation::Subtract,
        }
    }

    fn noun(&self) -> &'static str {
        match self {
            TestKind::Overflow => "Overflow",
            TestKind::Underflow => "Underflow",
        }
    }

    fn case_label(&self, reaches_bound: bool) -> String {
        let verb = match self {
            TestKind::Overflow => "Adding",
            TestKind::Underflow => "Subtracting",
        };
        let with = if reaches_bound { "With" } else { "Without" };
        format!("{} Numbers {} {}", verb, with, self.noun())
    }
}

/// One accumulator run, already formatted for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    pub label: String,
    pub start: String,
    pub delta: String,
    pub steps: u64,
    pub value: String,
    pub steps_taken: u64,
    pub halted: Option<Boundary>,
}

/// Both runs of one driver for one width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestReport {
    pub kind: TestKind,
    pub type_name: &'static str,
    pub cases: Vec<CaseReport>,
}

impl TestReport {
    pub fn render(&self) -> String {
        let mut out = format!("{} Test of Type = {}\n", self.kind.noun(), self.type_name.white().bold());

        for case in &self.cases {
            out.push_str(&format!(
                "\t{} ( {} , {} , {} ) = {} , {} Status: {}\n",
                case.label,
                case.start,
                case.delta,
                case.steps,
                case.value,
                self.kind.noun(),
                status_text(case.halted)
            ));

            if let Some(boundary) = case.halted {
                out.push_str(&format!(
                    "\t\t{} Halted before step {} of {}\n",
                    format!("Numeric {} detected!", boundary).yellow(),
                    case.steps_taken + 1,
                    case.steps
                ));
            }
        }

        out
    }
}

fn status_text(halted: Option<Boundary>) -> ColoredString {
    match halted {
        Some(_) => "true".yellow().bold(),
        None => "false".green(),
    }
}

/// Add `max / steps` to zero, `steps` and then `steps + 1` times.
pub fn test_overflow<T: Register>(
    steps: u64,
    bounds: &Bounds<T>,
    events: &mut EventLog,
) -> Result<TestReport, ReportError> {
    let increment = bounds.share(steps)?;
    let start = T::zero();
    if !bounds.contains(start) {
        return Err(ReportError::StartOutOfBounds {
            start: start.to_string(),
            type_name: T::NAME,
        });
    }

    run_cases(TestKind::Overflow, start, increment, steps, bounds, events)
}

/// Subtract `max / steps` from the maximum, `steps` and then `steps + 1` times.
pub fn test_underflow<T: Register>(
    steps: u64,
    bounds: &Bounds<T>,
    events: &mut EventLog,
) -> Result<TestReport, ReportError> {
    let decrement = bounds.share(steps)?;
    run_cases(TestKind::Underflow, bounds.max(), decrement, steps, bounds, events)
}

fn run_cases<T: Register>(
    kind: TestKind,
    start: T,
    delta: T,
    steps: u64,
    bounds: &Bounds<T>,
    events: &mut EventLog,
) -> Result<TestReport, ReportError> {
    let breach_steps = steps.checked_add(1).ok_or(ReportError::TooManySteps {
        steps,
        limit: u64::MAX - 1,
    })?;

    debug!(
        "{} test for {}: start {}, step {}, {} steps",
        kind.noun(),
        T::NAME,
        start,
        delta,
        steps
    );

    let mut cases = Vec::with_capacity(2);
    for (count, reaches_bound) in [(steps, false), (breach_steps, true)] {
        let outcome = accumulate(kind.operation(), start, delta, count, bounds);
        if let Some(boundary) = outcome.halted {
            events.record(T::NAME, kind.operation(), boundary);
        }

        cases.push(CaseReport {
            label: kind.case_label(reaches_bound),
            start: start.to_string(),
            delta: delta.to_string(),
            steps: count,
            value: outcome.value.to_string(),
            steps_taken: outcome.steps_taken,
            halted: outcome.halted,
        });
    }

    Ok(TestReport {
        kind,
        type_name: T::NAME,
        cases,
    })
}

fn run_native<T: Register>(kind: TestKind, steps: u64, events: &mut EventLog) -> Result<TestReport, ReportError> {
    let bounds = Bounds::<T>::native();
    match kind {
        TestKind::Overflow => test_overflow(steps, &bounds, events),
        TestKind::Underflow => test_underflow(steps, &bounds, events),
    }
}

/// Run one driver on the native range of `width`
pub fn run_width(
    kind: TestKind,
    width: IntWidth,
    steps: u64,
    events: &mut EventLog,
) -> Result<TestReport, ReportError> {
    match width {
        IntWidth::I8 => run_native::<i8>(kind, steps, events),
        IntWidth::I16 => run_native::<i16>(kind, steps, events),
        IntWidth::I32 => run_native::<i32>(kind, steps, events),
        IntWidth::I64 => run_native::<i64>(kind, steps, events),
        IntWidth::I128 => run_native::<i128>(kind, steps, events),
        IntWidth::Isize => run_native::<isize>(kind, steps, events),
        IntWidth::U8 => run_native::<u8>(kind, steps, events),
        IntWidth::U16 => run_native::<u16>(kind, steps, events),
        IntWidth::U32 => run_native::<u32>(kind, steps, events),
        IntWidth::U64 => run_native::<u64>(kind, steps, events),
        IntWidth::U128 => run_native::<u128>(kind, steps, events),
        IntWidth::Usize => run_native::<usize>(kind, steps, events),
    }
}

/// The complete console report: every overflow test, then every underflow test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub overflow: Vec<TestReport>,
    pub underflow: Vec<TestReport>,
}

impl Report {
    pub fn run(widths: &[IntWidth], steps: u64, events: &mut EventLog) -> Result<Self, ReportError> {
        let overflow = widths
            .iter()
            .map(|&width| run_width(TestKind::Overflow, width, steps, events))
            .collect::<Result<Vec<_>, _>>()?;
        let underflow = widths
            .iter()
            .map(|&width| run_width(TestKind::Underflow, width, steps, events))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { overflow, underflow })
    }

    pub fn render(&self, banner_width: usize) -> String {
        let star_line = "*".repeat(banner_width);
        let mut out = String::from("Starting Numeric Underflow / Overflow Tests!\n");

        for (kind, tests) in [(TestKind::Overflow, &self.overflow), (TestKind::Underflow, &self.underflow)] {
            out.push('\n');
            out.push_str(&format!("{}\n", star_line));
            out.push_str(&format!(
                "{}\n",
                format!("*** Running {} Tests ***", kind.noun()).cyan().bold()
            ));
            out.push_str(&format!("{}\n", star_line));

            for test in tests {
                out.push_str(&test.render());
            }
        }

        out.push_str("\nAll Numeric Underflow / Overflow Tests Complete!\n");
        out
    }
}
