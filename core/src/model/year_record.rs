use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

use crate::error::WorkHoursError;
use crate::model::language::parse_month_key;
use crate::time::days_in_month;

/// Day number -> hours for one month.
pub type DayMap = BTreeMap<u32, f64>;

/// One year of daily work hours, as written by the extractor.
///
/// Keys are validated on load: months are 1-12 (or a month name), days exist in that month.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "RawYearRecord")]
pub struct YearRecord {
    pub year: i32,
    pub months: BTreeMap<u32, DayMap>,
}

// JSON object keys are always strings, and the extractor may leave hours as null.
#[derive(Deserialize)]
struct RawYearRecord {
    year: i32,
    #[serde(default)]
    months: HashMap<String, HashMap<String, Option<f64>>>,
}

impl TryFrom<RawYearRecord> for YearRecord {
    type Error = WorkHoursError;

    fn try_from(raw: RawYearRecord) -> Result<Self, Self::Error> {
        let mut months = BTreeMap::new();
        for (month_key, days) in raw.months {
            let month = parse_month_key(&month_key)
                .ok_or_else(|| WorkHoursError::InvalidMonth(month_key.clone()))?;
            let max_day = days_in_month(raw.year, month)
                .ok_or_else(|| WorkHoursError::InvalidMonth(month_key.clone()))?;

            let mut day_map = DayMap::new();
            for (day_key, hours) in days {
                let day = day_key
                    .trim()
                    .parse::<u32>()
                    .ok()
                    .filter(|d| (1..=max_day).contains(d))
                    .ok_or_else(|| WorkHoursError::InvalidDay {
                        year: raw.year,
                        month,
                        day: day_key.clone(),
                    })?;
                day_map.insert(day, hours.unwrap_or(0.0));
            }
            if months.insert(month, day_map).is_some() {
                return Err(WorkHoursError::DuplicateMonth {
                    year: raw.year,
                    month,
                });
            }
        }

        Ok(YearRecord { year: raw.year, months })
    }
}

impl YearRecord {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            months: BTreeMap::new(),
        }
    }

    /// Builds a month from hours for days 1..=hours.len().
    pub fn with_month(mut self, month: u32, hours: &[f64]) -> Self {
        let days = hours
            .iter()
            .enumerate()
            .map(|(i, h)| (i as u32 + 1, *h))
            .collect();
        self.months.insert(month, days);
        self
    }

    pub fn hours(&self, month: u32, day: u32) -> f64 {
        self.months
            .get(&month)
            .and_then(|days| days.get(&day))
            .copied()
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_keys() {
        let json = r#"{"year":2024,"months":{"2":{"1":8,"2":7.5,"29":0},"1":{"31":8}}}"#;
        let record: YearRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.year, 2024);
        assert_eq!(record.months.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(record.hours(2, 2), 7.5);
        assert_eq!(record.hours(1, 31), 8.0);
        assert_eq!(record.hours(3, 1), 0.0);
    }

    #[test]
    fn test_parse_month_names_and_null_hours() {
        let json = r#"{"year":2023,"months":{"januari":{"1":null,"2":8},"December":{"31":4}}}"#;
        let record: YearRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.hours(1, 1), 0.0);
        assert_eq!(record.hours(1, 2), 8.0);
        assert_eq!(record.hours(12, 31), 4.0);
    }

    #[test]
    fn test_rejects_invalid_month() {
        let json = r#"{"year":2024,"months":{"13":{"1":8}}}"#;
        let err = serde_json::from_str::<YearRecord>(json).unwrap_err();
        assert!(err.to_string().contains("Invalid month key '13'"));
    }

    #[test]
    fn test_rejects_day_outside_month() {
        // 2023 is not a leap year
        let json = r#"{"year":2023,"months":{"2":{"29":8}}}"#;
        let err = serde_json::from_str::<YearRecord>(json).unwrap_err();
        assert!(err.to_string().contains("Invalid day key '29' for 2023-02"));

        let json = r#"{"year":2024,"months":{"2":{"29":8}}}"#;
        assert!(serde_json::from_str::<YearRecord>(json).is_ok());
    }

    #[test]
    fn test_rejects_same_month_twice() {
        let json = r#"{"year":2024,"months":{"1":{"1":8,"2":8},"januari":{"1":1}}}"#;
        let err = serde_json::from_str::<YearRecord>(json).unwrap_err();
        assert!(err.to_string().contains("Duplicate month 01 in year record 2024"));

        let json = r#"{"year":2024,"months":{"January":{"1":8},"Januari":{"2":8}}}"#;
        assert!(serde_json::from_str::<YearRecord>(json).is_err());
    }

    #[test]
    fn test_missing_months_is_empty_record() {
        let record: YearRecord = serde_json::from_str(r#"{"year":2024}"#).unwrap();
        assert_eq!(record, YearRecord::new(2024));
    }
}
