//! In-memory log of every bound a run ran into
//!
//! Each halted accumulation records one row of `(id, type, operation,
//! status)`. Ids are sequential from 1.

use chrono::{DateTime, Local};
use colored::Colorize;
use numeric_accumulator::{Boundary, Operation};
use std::fmt;

/// One detected overflow or underflow
#[derive(Debug, Clone)]
pub struct BoundaryEvent {
    pub id: u64,
    pub type_name: &'static str,
    pub operation: Operation,
    pub status: Boundary,
    pub recorded_at: DateTime<Local>,
}

impl fmt::Display for BoundaryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Type: {}, Operation: {}, Status: {}",
            self.id, self.type_name, self.operation, self.status
        )
    }
}

#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<BoundaryEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a detected boundary and return the stored event
    pub fn record(&mut self, type_name: &'static str, operation: Operation, status: Boundary) -> &BoundaryEvent {
        let id = self.events.len() as u64 + 1;
        self.events.push(BoundaryEvent {
            id,
            type_name,
            operation,
            status,
            recorded_at: Local::now(),
        });
        &self.events[self.events.len() - 1]
    }

    pub fn events(&self) -> &[BoundaryEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events of one kind, e.g. every overflow
    pub fn with_status(&self, status: Boundary) -> impl Iterator<Item = &BoundaryEvent> {
        self.events.iter().filter(move |e| e.status == status)
    }

    /// Render the log as a report section
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", "=".repeat(70)));
        out.push_str(&format!("{}\n", "Boundary Event Log".cyan().bold()));
        out.push_str(&format!("{}\n", "=".repeat(70)));

        if self.is_empty() {
            out.push_str(&format!("  {}\n", "No overflow or underflow detected".green()));
        } else {
            for event in self.events() {
                let stamp = format!("[{}]", event.recorded_at.format("%H:%M:%S%.3f"));
                out.push_str(&format!("  {} {}\n", stamp.dimmed(), event));
            }

            let overflows = self.with_status(Boundary::Overflow).count();
            let underflows = self.with_status(Boundary::Underflow).count();
            out.push_str(&format!(
                "\n  {} overflow, {} underflow\n",
                overflows.to_string().yellow(),
                underflows.to_string().yellow()
            ));
        }

        out.push_str(&format!("{}\n", "=".repeat(70)));
        out
    }
}
