use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::model::event::CalendarEvent;
use crate::model::language::LanguageProfile;
use crate::model::year_record::YearRecord;
use crate::service::aggregator::YearTotals;
use crate::service::formatter::{DescriptionLevel, TextFormatter};
use crate::time::SkipDays;

pub const UID_DOMAIN: &str = "workhours.calendar";

/// Stable identifier for one language's event on one date.
pub fn event_uid(language: &str, date: NaiveDate) -> String {
    format!(
        "workhours-{}-{:04}-{:02}-{:02}@{}",
        language,
        date.year(),
        date.month(),
        date.day(),
        UID_DOMAIN
    )
}

pub struct EventBuilder<'a> {
    profile: &'a LanguageProfile,
    skip_days: SkipDays,
    formatter: TextFormatter<'a>,
}

impl<'a> EventBuilder<'a> {
    pub fn new(profile: &'a LanguageProfile, skip_days: SkipDays) -> Self {
        Self {
            profile,
            skip_days,
            formatter: TextFormatter::new(profile),
        }
    }

    /// Event for a single day, or `None` when its weekday is skipped.
    pub fn build(&self, date: NaiveDate, hours: f64, totals: &YearTotals) -> Option<CalendarEvent> {
        if self.skip_days.should_skip(date) {
            return None;
        }

        let month = date.month();
        let month_total = totals.month(month);
        let is_month_end = month_total.and_then(|m| m.last_recorded_day) == Some(date.day());
        let level = match (is_month_end, month) {
            (true, 12) => DescriptionLevel::YearEnd {
                month_total: totals.month_hours(month),
                totals,
            },
            (true, _) => DescriptionLevel::MonthEnd {
                month_total: totals.month_hours(month),
            },
            _ => DescriptionLevel::Day,
        };

        Some(CalendarEvent {
            uid: event_uid(self.profile.code, date),
            summary: self.formatter.summary(hours),
            description: self.formatter.description(date.day(), month, hours, level),
            date,
        })
    }

    /// Events for a whole record: each month walks days 1 through its last recorded day.
    pub fn build_year(&self, record: &YearRecord, totals: &YearTotals) -> Vec<CalendarEvent> {
        let mut events = Vec::new();

        for total in totals.months() {
            let Some(last_day) = total.last_recorded_day else {
                continue;
            };
            for day in 1..=last_day {
                let Some(date) = NaiveDate::from_ymd_opt(record.year, total.month, day) else {
                    continue;
                };
                match self.build(date, record.hours(total.month, day), totals) {
                    Some(event) => events.push(event),
                    None if day == last_day => debug!(
                        %date,
                        language = self.profile.code,
                        "Last recorded day of the month is skipped; month total not shown"
                    ),
                    None => {}
                }
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::language::find_language;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn january_2024() -> YearRecord {
        // 8 hours on every day, 0 on the 2nd
        let mut hours = [8.0; 31];
        hours[1] = 0.0;
        YearRecord::new(2024).with_month(1, &hours)
    }

    #[test]
    fn test_uid_is_stable() {
        let d = date(2024, 3, 5);
        assert_eq!(event_uid("en", d), event_uid("en", d));
        assert_eq!(event_uid("en", d), "workhours-en-2024-03-05@workhours.calendar");
        assert_ne!(event_uid("en", d), event_uid("sv", d));
    }

    #[test]
    fn test_weekends_are_skipped_by_default() {
        let record = january_2024();
        let totals = YearTotals::compute(&record);
        let builder = EventBuilder::new(find_language("en").unwrap(), SkipDays::default());
        let events = builder.build_year(&record, &totals);

        // January 2024 has 23 weekdays
        assert_eq!(events.len(), 23);
        for event in &events {
            let weekday = crate::time::weekday_number(event.date);
            assert!(weekday != 0 && weekday != 6, "weekend event on {}", event.date);
        }
    }

    #[test]
    fn test_month_end_carries_full_month_total() {
        let record = january_2024();
        let totals = YearTotals::compute(&record);
        let builder = EventBuilder::new(find_language("en").unwrap(), SkipDays::default());
        let events = builder.build_year(&record, &totals);

        let last = events.last().unwrap();
        assert_eq!(last.date, date(2024, 1, 31));
        // 30 days at 8 hours, weekend days included in the sum
        assert!(last.description.ends_with("Total work hours for January: 240"));
        assert!(events[..events.len() - 1]
            .iter()
            .all(|e| !e.description.contains("Total work hours")));

        let second = events.iter().find(|e| e.date == date(2024, 1, 2)).unwrap();
        assert_eq!(second.summary, "🕒 Work Hours: 0");
    }

    #[test]
    fn test_custom_skip_days() {
        let record = january_2024();
        let totals = YearTotals::compute(&record);
        let skip: SkipDays = "3".parse().unwrap();
        let builder = EventBuilder::new(find_language("en").unwrap(), skip);
        let events = builder.build_year(&record, &totals);

        // Five Wednesdays in January 2024
        assert_eq!(events.len(), 26);
        assert!(events.iter().all(|e| crate::time::weekday_number(e.date) != 3));
    }

    #[test]
    fn test_missing_trailing_days_end_month_early() {
        // April 2024 recorded through the 29th only (a Monday)
        let record = YearRecord::new(2024).with_month(4, &[8.0; 29]);
        let totals = YearTotals::compute(&record);
        let builder = EventBuilder::new(find_language("en").unwrap(), SkipDays::default());
        let events = builder.build_year(&record, &totals);

        let last = events.last().unwrap();
        assert_eq!(last.date, date(2024, 4, 29));
        assert!(last.description.contains("Total work hours for April: 232"));
        assert!(events.iter().all(|e| e.date != date(2024, 4, 30)));
    }

    #[test]
    fn test_gap_days_get_zero_hour_events() {
        let json = r#"{"year":2024,"months":{"7":{"1":8,"3":6}}}"#;
        let record: YearRecord = serde_json::from_str(json).unwrap();
        let totals = YearTotals::compute(&record);
        let builder = EventBuilder::new(find_language("en").unwrap(), SkipDays::none());
        let events = builder.build_year(&record, &totals);

        assert_eq!(events.len(), 3);
        assert_eq!(events[1].summary, "🕒 Work Hours: 0");
        assert!(events[2].description.contains("Total work hours for July: 14"));
    }

    #[test]
    fn test_year_end_event_has_breakdown() {
        // December 31st 2024 is a Tuesday
        let record = YearRecord::new(2024)
            .with_month(12, &[7.0; 31])
            .with_month(1, &[8.0; 31]);
        let totals = YearTotals::compute(&record);
        let builder = EventBuilder::new(find_language("en").unwrap(), SkipDays::default());
        let events = builder.build_year(&record, &totals);

        let last = events.last().unwrap();
        assert_eq!(last.date, date(2024, 12, 31));
        assert_eq!(
            last.description,
            "Work hours for 31 December: 7 hours\n\n\
             Total work hours for December: 217\n\n\
             Yearly Summary:\nJanuary: 248\nDecember: 217\nTotal: 465 hours"
        );
        let jan_end = events.iter().find(|e| e.date == date(2024, 1, 31)).unwrap();
        assert!(!jan_end.description.contains("Yearly Summary"));
    }
}
