//! A single day of logged deep work.

use chrono::NaiveDate;

/// Upper bound of hours that can be logged for one day.
pub const MAX_HOURS: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyEntry {
    pub date: NaiveDate,
    pub hours_logged: u8,
}

impl DailyEntry {
    /// Build an entry; hours above `MAX_HOURS` are clamped.
    pub fn new(date: NaiveDate, hours: u8) -> Self {
        Self {
            date,
            hours_logged: clamp_hours(i64::from(hours)),
        }
    }

    /// Date as stored in the DB (`YYYY-MM-DD`)
    pub fn date_key(&self) -> String {
        date_key(&self.date)
    }

    pub fn is_complete(&self) -> bool {
        self.hours_logged >= MAX_HOURS
    }
}

/// Clamp any integer into 0..=MAX_HOURS.
pub fn clamp_hours(value: i64) -> u8 {
    value.clamp(0, i64::from(MAX_HOURS)) as u8
}

pub fn date_key(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
