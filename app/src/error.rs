//! Errors for report setup: settings, width selection and driver inputs.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("unknown integer width '{0}' (try i8..i128, u8..u128, isize, usize, native or all)")]
    UnknownWidth(String),

    #[error("no integer widths selected")]
    NoWidths,

    #[error("step count must be at least 1")]
    ZeroSteps,

    #[error("step count {steps} is above the limit of {limit}")]
    TooManySteps { steps: u64, limit: u64 },

    #[error("banner width {width} is outside 1..={limit}")]
    BannerWidth { width: usize, limit: usize },

    #[error("start value {start} lies outside the {type_name} bounds")]
    StartOutOfBounds {
        start: String,
        type_name: &'static str,
    },

    #[error("failed to read config file {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize settings: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Accumulator(#[from] numeric_accumulator::Error),
}
