use chrono::{DateTime, Utc};

use crate::model::event::CalendarDocument;
use crate::model::language::LanguageProfile;
use crate::model::year_record::YearRecord;
use crate::repository::YearSource;
use crate::service::aggregator::YearTotals;
use crate::service::event_builder::EventBuilder;
use crate::time::SkipDays;

pub const DEFAULT_LATEST_FILES: usize = 2;

/// The `count` most recent sources by file-name year, oldest first.
///
/// Ties on year are ordered by file name.
pub fn select_latest(mut sources: Vec<YearSource>, count: usize) -> Vec<YearSource> {
    sources.sort_by(|a, b| a.year.cmp(&b.year).then_with(|| a.file_name.cmp(&b.file_name)));
    let skip = sources.len().saturating_sub(count);
    sources.split_off(skip)
}

/// A loaded record together with its precomputed totals.
#[derive(Debug, Clone)]
pub struct LoadedYear {
    pub source: YearSource,
    pub record: YearRecord,
    pub totals: YearTotals,
}

impl LoadedYear {
    pub fn new(source: YearSource, record: YearRecord) -> Self {
        let totals = YearTotals::compute(&record);
        Self { source, record, totals }
    }
}

pub struct CalendarAssembler {
    skip_days: SkipDays,
    dtstamp: DateTime<Utc>,
}

impl CalendarAssembler {
    pub fn new(skip_days: SkipDays, dtstamp: DateTime<Utc>) -> Self {
        Self { skip_days, dtstamp }
    }

    /// One language's document over all years, in date order.
    pub fn assemble(&self, profile: &'static LanguageProfile, years: &[LoadedYear]) -> CalendarDocument {
        let builder = EventBuilder::new(profile, self.skip_days);
        let mut doc = CalendarDocument::new(profile.code, self.dtstamp);

        for year in years {
            doc.events.extend(builder.build_year(&year.record, &year.totals));
        }
        // Stable, so already ordered input is left as is
        doc.events.sort_by_key(|e| e.date);
        doc
    }
}
