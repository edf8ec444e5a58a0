use std::path::PathBuf;
use tracing::info;

use crate::config::RunConfig;
use crate::error::{Result, WorkHoursError};
use crate::ics;
use crate::repository::{CalendarWriter, YearRecordRepository};
use crate::service::assembler::{select_latest, CalendarAssembler, LoadedYear};

#[derive(Debug, Clone)]
pub struct GeneratedCalendar {
    pub language: &'static str,
    pub path: PathBuf,
    pub events: usize,
}

#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Oldest first
    pub years: Vec<LoadedYear>,
    pub calendars: Vec<GeneratedCalendar>,
}

pub struct GenerateCalendarsUseCase<'a, R: YearRecordRepository, W: CalendarWriter> {
    records: &'a R,
    writer: &'a W,
}

impl<'a, R: YearRecordRepository, W: CalendarWriter> GenerateCalendarsUseCase<'a, R, W> {
    pub fn new(records: &'a R, writer: &'a W) -> Self {
        Self { records, writer }
    }

    pub fn run(&self, config: &RunConfig) -> Result<GenerationReport> {
        // 1. Pick the latest year files
        let selected = select_latest(self.records.list_sources()?, config.latest_files);
        if selected.is_empty() {
            return Err(WorkHoursError::NoInputFiles(config.input_folder.clone()));
        }
        let names: Vec<&str> = selected.iter().map(|s| s.file_name.as_str()).collect();
        info!(files = %names.join(", "), "Found {} latest year file(s)", selected.len());

        // 2. Load and total every record before anything is written
        let mut years: Vec<LoadedYear> = Vec::with_capacity(selected.len());
        for source in selected {
            info!(path = %source.path.display(), "Processing file");
            let record = self.records.load(&source)?;
            // Two records for one year would give every date two events with the same UID
            if let Some(earlier) = years.iter().find(|y| y.record.year == record.year) {
                return Err(WorkHoursError::DuplicateYear {
                    year: record.year,
                    first: earlier.source.file_name.clone(),
                    second: source.file_name,
                });
            }
            years.push(LoadedYear::new(source, record));
        }

        // 3. One document per language
        let assembler = CalendarAssembler::new(config.skip_days, config.dtstamp);
        let mut calendars = Vec::with_capacity(config.languages.len());
        for &profile in &config.languages {
            let doc = assembler.assemble(profile, &years);
            let content = ics::serialize(&doc);
            let path = self.writer.write(&doc, &content)?;
            info!(language = profile.code, events = doc.events.len(), path = %path.display(), "ICS calendar file created");

            calendars.push(GeneratedCalendar {
                language: profile.code,
                path,
                events: doc.events.len(),
            });
        }

        Ok(GenerationReport { years, calendars })
    }
}
