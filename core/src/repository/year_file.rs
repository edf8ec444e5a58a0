use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

use crate::error::{Result, WorkHoursError};
use crate::model::year_record::YearRecord;
use crate::repository::traits::{YearRecordRepository, YearSource};

const YEAR_FILE_EXTENSION: &str = "json";

/// First run of four consecutive digits in a file name, or 0.
pub fn year_from_file_name(name: &str) -> u32 {
    name.as_bytes()
        .windows(4)
        .find(|w| w.iter().all(u8::is_ascii_digit))
        .and_then(|w| std::str::from_utf8(w).ok())
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}

#[derive(Clone)]
pub struct FileYearRecordRepository {
    input_dir: PathBuf,
}

impl FileYearRecordRepository {
    pub fn new(input_dir: impl Into<PathBuf>) -> Result<Self> {
        let input_dir = input_dir.into();
        if !input_dir.is_dir() {
            return Err(WorkHoursError::InputFolder(input_dir));
        }
        Ok(Self { input_dir })
    }
}

impl YearRecordRepository for FileYearRecordRepository {
    fn list_sources(&self) -> Result<Vec<YearSource>> {
        let mut sources = Vec::new();
        for entry in fs::read_dir(&self.input_dir)? {
            let path = entry?.path();
            let is_json = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case(YEAR_FILE_EXTENSION));
            if !is_json || !path.is_file() {
                continue;
            }

            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            sources.push(YearSource {
                year: year_from_file_name(&file_name),
                file_name,
                path,
            });
        }
        Ok(sources)
    }

    fn load(&self, source: &YearSource) -> Result<YearRecord> {
        let file = File::open(&source.path)?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| WorkHoursError::Json {
            path: source.path.clone(),
            source: e,
        })
    }
}
