pub mod calendar_file;
pub mod traits;
pub mod year_file;

// Re-export
pub use calendar_file::FileCalendarRepository;
pub use traits::{CalendarWriter, YearRecordRepository, YearSource};
pub use year_file::{year_from_file_name, FileYearRecordRepository};
