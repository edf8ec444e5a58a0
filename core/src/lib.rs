pub mod config;
pub mod error;
pub mod ics;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use config::RunConfig;
pub use error::{Result, WorkHoursError};
pub use input::{normalize_flags, parse_languages, parse_latest_files};
pub use model::event::{CalendarDocument, CalendarEvent};
pub use model::language::{find_language, LanguageProfile, LANGUAGES};
pub use model::year_record::{DayMap, YearRecord};
pub use repository::{FileCalendarRepository, FileYearRecordRepository};
pub use service::aggregator::{MonthTotal, YearTotals};
pub use time::SkipDays;
pub use usecase::generate::{GenerateCalendarsUseCase, GenerationReport};
