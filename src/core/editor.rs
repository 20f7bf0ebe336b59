//! Hour-toggle editor for a single day.

use crate::core::calendar::title_box;
use crate::models::daily_entry::{DailyEntry, MAX_HOURS, clamp_hours};
use chrono::NaiveDate;

const COMMANDS_HINT: &str = "[1-4] Toggle hour | [S]ave & back | [C]lear all";

/// In-memory hours for the day being edited.
///
/// The date is fixed when the editor opens and is never re-read from the
/// clock, even if the session runs past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorState {
    date: NaiveDate,
    current_hours: u8,
}

impl EditorState {
    /// Start from what is stored for `date`; an absent entry starts at 0.
    pub fn open(date: NaiveDate, stored: Option<DailyEntry>) -> Self {
        Self {
            date,
            current_hours: stored.map(|e| e.hours_logged).unwrap_or(0).min(MAX_HOURS),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn current_hours(&self) -> u8 {
        self.current_hours
    }

    /// Pressing hour `n` (1..=4): an already-counted hour drops the total by
    /// one, an uncounted one raises it to `n`. Other values are ignored.
    pub fn toggle(&mut self, n: u8) {
        if !(1..=MAX_HOURS).contains(&n) {
            return;
        }

        let next = if n <= self.current_hours {
            i64::from(self.current_hours) - 1
        } else {
            i64::from(n)
        };
        self.current_hours = clamp_hours(next);
    }

    pub fn clear(&mut self) {
        self.current_hours = 0;
    }

    /// The entry a save writes back.
    pub fn entry(&self) -> DailyEntry {
        DailyEntry::new(self.date, self.current_hours)
    }

    pub fn render(&self) -> String {
        let mut lines = title_box(&format!("LOG HOURS FOR TODAY: {}", self.date));
        lines.push(String::new());
        lines.push(format!("Current: {}/{} hours", self.current_hours, MAX_HOURS));
        lines.push(String::new());

        for hour in 1..=MAX_HOURS {
            let mark = if hour <= self.current_hours { "☑" } else { "☐" };
            lines.push(format!("{} Hour {}", mark, hour));
        }

        lines.push(String::new());
        lines.push(COMMANDS_HINT.to_string());

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}
