use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::event::CalendarDocument;
use crate::repository::traits::CalendarWriter;

pub const DEFAULT_OUTPUT_DIR: &str = "output/calendars";

#[derive(Clone)]
pub struct FileCalendarRepository {
    output_dir: PathBuf,
}

impl FileCalendarRepository {
    /// The directory is created on first write, not here, so a failed run leaves nothing behind.
    pub fn new(output_dir: Option<PathBuf>) -> Self {
        let output_dir = output_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
        Self { output_dir }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl CalendarWriter for FileCalendarRepository {
    fn write(&self, doc: &CalendarDocument, content: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(doc.file_name());

        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(content.as_bytes())?;
        writer.flush()?;
        Ok(path)
    }
}
