use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use std::fmt;
use std::str::FromStr;

use crate::error::WorkHoursError;

/// Weekday number with Sunday as 0 and Saturday as 6.
pub fn weekday_number(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((next_month - first).num_days() as u32)
}

/// All-day date value, e.g. `20240131`.
pub fn format_ics_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Exclusive end of an all-day event.
pub fn next_day(date: NaiveDate) -> NaiveDate {
    date + Duration::days(1)
}

/// UTC timestamp value, e.g. `20241017T120000Z`.
pub fn format_dtstamp(stamp: DateTime<Utc>) -> String {
    stamp.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Set of weekdays excluded from the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipDays {
    days: [bool; 7],
}

impl SkipDays {
    pub fn none() -> Self {
        Self { days: [false; 7] }
    }

    pub fn from_numbers(numbers: &[u32]) -> Result<Self, WorkHoursError> {
        let mut skip = Self::none();
        for &n in numbers {
            if n > 6 {
                return Err(WorkHoursError::InvalidSkipDay(n.to_string()));
            }
            skip.days[n as usize] = true;
        }
        Ok(skip)
    }

    pub fn contains(&self, weekday: u32) -> bool {
        self.days.get(weekday as usize).copied().unwrap_or(false)
    }

    pub fn should_skip(&self, date: NaiveDate) -> bool {
        self.contains(weekday_number(date))
    }

    pub fn numbers(&self) -> Vec<u32> {
        (0..7).filter(|&n| self.days[n as usize]).collect()
    }
}

impl Default for SkipDays {
    fn default() -> Self {
        // Sunday and Saturday
        Self {
            days: [true, false, false, false, false, false, true],
        }
    }
}

impl FromStr for SkipDays {
    type Err = WorkHoursError;

    /// Accepts weekday numbers or names: `0,6`, `sun,sat`, `5, 6`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut numbers = Vec::new();
        for token in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let number = match token.parse::<u32>() {
                Ok(n) if n <= 6 => n,
                Ok(_) => return Err(WorkHoursError::InvalidSkipDay(token.to_string())),
                Err(_) => parse_weekday_str(token)
                    .map(|w| w.num_days_from_sunday())
                    .ok_or_else(|| WorkHoursError::InvalidSkipDay(token.to_string()))?,
            };
            numbers.push(number);
        }
        Self::from_numbers(&numbers)
    }
}

impl fmt::Display for SkipDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numbers: Vec<String> = self.numbers().iter().map(u32::to_string).collect();
        write!(f, "{}", numbers.join(","))
    }
}

fn parse_weekday_str(s: &str) -> Option<Weekday> {
    match s.to_lowercase().as_str() {
        "mon" | "monday" => Some(Weekday::Mon),
        "tue" | "tuesday" => Some(Weekday::Tue),
        "wed" | "wednesday" => Some(Weekday::Wed),
        "thu" | "thursday" => Some(Weekday::Thu),
        "fri" | "friday" => Some(Weekday::Fri),
        "sat" | "saturday" => Some(Weekday::Sat),
        "sun" | "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}
