//! Report settings
//!
//! Settings come from built-in defaults, optionally overlaid by a TOML
//! file, then by command-line flags. With no file and no flags the report
//! runs five in-bounds steps on the native machine word.
//!
//! ```toml
//! steps = 5
//! widths = ["native", "i8", "u64"]
//! show_events = true
//! banner_width = 50
//! ```

use crate::error::ReportError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Largest in-bounds step count; the breach case runs one more
pub const MAX_STEPS: u64 = 1_000_000;

/// Longest `*` banner line
pub const MAX_BANNER_WIDTH: usize = 200;

/// Effective report settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// In-bounds step count; the breach case runs one more
    pub steps: u64,
    /// Width names or aliases (see `widths::WIDTH_ALIASES`)
    pub widths: Vec<String>,
    /// Print the boundary event log after the report
    pub show_events: bool,
    /// Length of the `*` banner lines
    pub banner_width: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            steps: 5,
            widths: vec!["native".to_string()],
            show_events: false,
            banner_width: 50,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let content = fs::read_to_string(path).map_err(|source| ReportError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse settings from TOML text; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ReportError> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Apply command-line overrides on top of the current values
    pub fn apply_overrides(&mut self, widths: Vec<String>, steps: Option<u64>, show_events: bool) {
        if !widths.is_empty() {
            self.widths = widths;
        }
        if let Some(steps) = steps {
            self.steps = steps;
        }
        if show_events {
            self.show_events = true;
        }
    }

    pub fn validate(&self) -> Result<(), ReportError> {
        if self.steps == 0 {
            return Err(ReportError::ZeroSteps);
        }
        if self.steps > MAX_STEPS {
            return Err(ReportError::TooManySteps {
                steps: self.steps,
                limit: MAX_STEPS,
            });
        }
        if self.banner_width == 0 || self.banner_width > MAX_BANNER_WIDTH {
            return Err(ReportError::BannerWidth {
                width: self.banner_width,
                limit: MAX_BANNER_WIDTH,
            });
        }
        if self.widths.is_empty() {
            return Err(ReportError::NoWidths);
        }
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String, ReportError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
