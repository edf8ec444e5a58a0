use std::path::PathBuf;

use crate::error::Result;
use crate::model::event::CalendarDocument;
use crate::model::year_record::YearRecord;

/// A year file found in the input folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearSource {
    pub path: PathBuf,
    pub file_name: String,
    /// Year parsed from the file name, 0 when it has none.
    pub year: u32,
}

pub trait YearRecordRepository {
    fn list_sources(&self) -> Result<Vec<YearSource>>;
    fn load(&self, source: &YearSource) -> Result<YearRecord>;
}

pub trait CalendarWriter {
    /// Stores the serialized document, replacing any previous one, and returns where it went.
    fn write(&self, doc: &CalendarDocument, content: &str) -> Result<PathBuf>;
}
