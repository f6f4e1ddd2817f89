//! Overflow Report
//!
//! Demonstrates overflow and underflow detection on bounded integer
//! accumulators and prints a pass/fail report for each integer width.
//!
//! # Features
//!
//! - **Overflow tests**: add `max / steps` to zero, first `steps` times
//!   (stays in bounds) and then once more (reaches the maximum)
//! - **Underflow tests**: subtract the same share from the maximum
//! - **Every width**: `i8` through `u128`, the machine word, and C aliases
//! - **Event log**: every detected overflow/underflow, in order
//!
//! # Usage
//!
//! ```bash
//! # Native machine word, five steps
//! overflow-report
//!
//! # Every integer width, with the event log
//! overflow-report --width all --events
//!
//! # Settings from a file, printed back as TOML
//! overflow-report --config report.toml --print-config
//! ```

mod config;
mod error;
mod events;
mod report;
mod widths;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use std::path::PathBuf;

use config::Settings;
use events::EventLog;
use report::Report;
use widths::resolve_widths;

/// Overflow Report
///
/// Bounded accumulator overflow/underflow demonstration
#[derive(Parser)]
#[command(name = "overflow-report")]
#[command(version = "0.1.0")]
#[command(about = "Detects integer overflow and underflow before it happens, for every integer width")]
struct Cli {
    /// Integer width to test (repeatable): i8..i128, u8..u128, isize, usize, native, all, or a C type name
    #[arg(short, long = "width", value_name = "TYPE")]
    widths: Vec<String>,

    /// Number of in-bounds steps; the breach case runs one more
    #[arg(short, long)]
    steps: Option<u64>,

    /// TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the boundary event log after the report
    #[arg(short, long)]
    events: bool,

    /// Print the effective settings as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    settings.apply_overrides(cli.widths, cli.steps, cli.events);
    settings.validate()?;

    if cli.print_config {
        print!("{}", settings.to_toml_string()?);
        return Ok(());
    }

    let widths = resolve_widths(&settings.widths)?;
    debug!(
        "Testing widths [{}] with {} steps",
        widths.iter().map(|w| w.to_string()).collect::<Vec<_>>().join(", "),
        settings.steps
    );

    let mut events = EventLog::new();
    let report = Report::run(&widths, settings.steps, &mut events)?;
    print!("{}", report.render(settings.banner_width));
    debug!("{} boundary events recorded", events.len());

    if settings.show_events {
        println!();
        print!("{}", events.render());
    }

    Ok(())
}
