use chrono::{DateTime, Utc};
use std::path::PathBuf;

use crate::model::language::{LanguageProfile, LANGUAGES};
use crate::repository::calendar_file::DEFAULT_OUTPUT_DIR;
use crate::service::assembler::DEFAULT_LATEST_FILES;
use crate::time::SkipDays;

/// Settings for one run, built once at startup.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_folder: PathBuf,
    pub output_folder: PathBuf,
    pub skip_days: SkipDays,
    pub latest_files: usize,
    pub languages: Vec<&'static LanguageProfile>,
    /// Shared DTSTAMP for every event written in this run
    pub dtstamp: DateTime<Utc>,
}

impl RunConfig {
    pub fn new(input_folder: impl Into<PathBuf>) -> Self {
        Self {
            input_folder: input_folder.into(),
            output_folder: PathBuf::from(DEFAULT_OUTPUT_DIR),
            skip_days: SkipDays::default(),
            latest_files: DEFAULT_LATEST_FILES,
            languages: LANGUAGES.iter().collect(),
            dtstamp: Utc::now(),
        }
    }
}
