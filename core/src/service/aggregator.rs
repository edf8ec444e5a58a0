use std::collections::BTreeMap;
use tracing::warn;

use crate::model::year_record::YearRecord;
use crate::time::days_in_month;

#[derive(Debug, Clone, PartialEq)]
pub struct MonthTotal {
    pub month: u32,
    /// Sum over every recorded day, skipped weekdays included.
    pub hours: f64,
    /// Highest day key present. This is where the month is treated as ending.
    pub last_recorded_day: Option<u32>,
    pub days_in_month: u32,
}

impl MonthTotal {
    pub fn is_short(&self) -> bool {
        self.last_recorded_day.unwrap_or(0) < self.days_in_month
    }
}

/// Monthly and yearly sums for one record, computed before any event text is built.
#[derive(Debug, Clone, PartialEq)]
pub struct YearTotals {
    pub year: i32,
    pub year_total: f64,
    months: BTreeMap<u32, MonthTotal>,
}

impl YearTotals {
    pub fn compute(record: &YearRecord) -> Self {
        let mut months = BTreeMap::new();
        let mut year_total = 0.0;

        for (&month, days) in &record.months {
            let hours: f64 = days.values().sum();
            let last_recorded_day = days.keys().next_back().copied();
            let total = MonthTotal {
                month,
                hours,
                last_recorded_day,
                days_in_month: days_in_month(record.year, month).unwrap_or(0),
            };

            if total.is_short() {
                warn!(
                    year = record.year,
                    month,
                    last_recorded_day = total.last_recorded_day.unwrap_or(0),
                    expected = total.days_in_month,
                    "Month has fewer recorded days than the calendar; month total will be placed on the last recorded day"
                );
            }

            year_total += hours;
            months.insert(month, total);
        }

        Self {
            year: record.year,
            year_total,
            months,
        }
    }

    /// Months in numeric order.
    pub fn months(&self) -> impl Iterator<Item = &MonthTotal> {
        self.months.values()
    }

    pub fn month(&self, month: u32) -> Option<&MonthTotal> {
        self.months.get(&month)
    }

    pub fn month_hours(&self, month: u32) -> f64 {
        self.month(month).map(|m| m.hours).unwrap_or(0.0)
    }
}
