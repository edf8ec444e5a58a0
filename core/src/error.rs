//! Error types for calendar generation.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WorkHoursError>;

#[derive(Error, Debug)]
pub enum WorkHoursError {
    /// Input folder missing or not a directory
    #[error("Input folder not found or is not a directory: {}", .0.display())]
    InputFolder(PathBuf),

    /// No year files to process
    #[error("No JSON files found in the input folder: {}", .0.display())]
    NoInputFiles(PathBuf),

    #[error("Invalid skip day '{0}': expected a weekday number between 0 (Sunday) and 6 (Saturday)")]
    InvalidSkipDay(String),

    #[error("Invalid number of latest files '{0}': expected a positive integer")]
    InvalidLatestFiles(String),

    #[error("Unknown language code '{0}'")]
    UnknownLanguage(String),

    #[error("Invalid month key '{0}'")]
    InvalidMonth(String),

    #[error("Invalid day key '{day}' for {year}-{month:02}")]
    InvalidDay { year: i32, month: u32, day: String },

    /// Two month keys ("1" and "januari") name the same month
    #[error("Duplicate month {month:02} in year record {year}")]
    DuplicateMonth { year: i32, month: u32 },

    #[error("Duplicate year {year}: both {first} and {second} hold records for it")]
    DuplicateYear {
        year: i32,
        first: String,
        second: String,
    },

    /// Malformed or invalid year record
    #[error("Failed to read year record {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WorkHoursError {
    /// Configuration errors are reported before any output is written.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InputFolder(_)
                | Self::NoInputFiles(_)
                | Self::InvalidSkipDay(_)
                | Self::InvalidLatestFiles(_)
                | Self::UnknownLanguage(_)
        )
    }
}
