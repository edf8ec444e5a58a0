use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub uid: String,
    pub summary: String,
    pub description: String,
    pub date: NaiveDate,
}

/// One language's calendar, built fresh per run.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDocument {
    pub language: &'static str,
    pub dtstamp: DateTime<Utc>,
    pub events: Vec<CalendarEvent>,
}

impl CalendarDocument {
    pub fn new(language: &'static str, dtstamp: DateTime<Utc>) -> Self {
        Self {
            language,
            dtstamp,
            events: Vec::new(),
        }
    }

    pub fn file_name(&self) -> String {
        format!("work_hours_{}.ics", self.language)
    }
}
