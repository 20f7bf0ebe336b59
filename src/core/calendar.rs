//! Month grid for the calendar screen.
//!
//! Building the grid is pure: the caller provides the month and a way to
//! look up the hours logged on each day, and gets back rows of exactly seven
//! cells (Sunday first). Rendering turns a grid into the boxed text screen.

use crate::models::daily_entry::MAX_HOURS;
use crate::models::year_month::YearMonth;
use crate::utils::formatting::{center, pad_right};

pub const DAYS_PER_WEEK: usize = 7;

/// Inner width of every box on screen (between the vertical borders).
const INNER_WIDTH: usize = 64;
/// Columns used by one day cell, separator included.
const CELL_WIDTH: usize = 7;

const WEEKDAY_HEADER: &str = "Sun    Mon    Tue    Wed    Thu    Fri    Sat";
const LEGEND: &str = "Legend: ✓=4h complete  ⊙⊙⊙⊙=4h  ⊙⊙⊙=3h  ⊙⊙=2h  ⊙=1h";
const COMMANDS_HINT: &str = "[n]ext month | [p]rev month | [t]oday | [q]uit";

const COMPLETE_MARK: &str = "✓";
const LEVEL_GLYPH: &str = "⊙";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Blank,
    Day { day: u32, hours: u8 },
}

impl Cell {
    pub fn day(&self) -> Option<u32> {
        match self {
            Cell::Day { day, .. } => Some(*day),
            Cell::Blank => None,
        }
    }

    /// First line of the cell: the day number, marked once the day is complete.
    pub fn day_line(&self) -> String {
        match self {
            Cell::Blank => String::new(),
            Cell::Day { day, hours } if *hours >= MAX_HOURS => {
                format!("{} {}", COMPLETE_MARK, day)
            }
            Cell::Day { day, .. } => day.to_string(),
        }
    }

    /// Second line of the cell: one glyph per logged hour.
    pub fn level_line(&self) -> String {
        match self {
            Cell::Blank => String::new(),
            Cell::Day { hours, .. } => LEVEL_GLYPH.repeat(usize::from((*hours).min(MAX_HOURS))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: YearMonth,
    pub rows: Vec<[Cell; DAYS_PER_WEEK]>,
}

impl MonthGrid {
    /// Day cells in display order (blanks skipped).
    pub fn days(&self) -> impl Iterator<Item = &Cell> {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|c| matches!(c, Cell::Day { .. }))
    }

    pub fn leading_blanks(&self) -> usize {
        self.rows
            .first()
            .map(|row| row.iter().take_while(|c| **c == Cell::Blank).count())
            .unwrap_or(0)
    }

    pub fn trailing_blanks(&self) -> usize {
        self.rows
            .last()
            .map(|row| row.iter().rev().take_while(|c| **c == Cell::Blank).count())
            .unwrap_or(0)
    }

    pub fn total_hours(&self) -> u32 {
        self.days()
            .map(|c| match c {
                Cell::Day { hours, .. } => u32::from(*hours),
                Cell::Blank => 0,
            })
            .sum()
    }

    pub fn complete_days(&self) -> usize {
        self.days()
            .filter(|c| matches!(c, Cell::Day { hours, .. } if *hours >= MAX_HOURS))
            .count()
    }
}

/// Lay out `month` as Sunday-first weeks.
///
/// `hours_for_day` is called once per day of the month with the day number
/// and must return the hours logged (0 when nothing is stored).
pub fn build_grid<F>(month: YearMonth, hours_for_day: F) -> MonthGrid
where
    F: Fn(u32) -> u8,
{
    let offset = month.first_weekday() as usize;
    let mut rows = Vec::new();
    let mut row = [Cell::Blank; DAYS_PER_WEEK];
    let mut col = offset;

    for day in 1..=month.days_in_month() {
        row[col] = Cell::Day {
            day,
            hours: hours_for_day(day).min(MAX_HOURS),
        };
        col += 1;

        if col == DAYS_PER_WEEK {
            rows.push(row);
            row = [Cell::Blank; DAYS_PER_WEEK];
            col = 0;
        }
    }

    // The remaining cells of `row` are already blank.
    if col > 0 {
        rows.push(row);
    }

    MonthGrid { month, rows }
}

fn border(left: char, fill: char, right: char) -> String {
    format!("{}{}{}", left, fill.to_string().repeat(INNER_WIDTH), right)
}

fn boxed(content: &str) -> String {
    format!("│ {}│", pad_right(content, INNER_WIDTH - 1))
}

/// Screen title shared by the calendar and the editor.
pub fn title_box(title: &str) -> Vec<String> {
    vec![
        border('╔', '═', '╗'),
        format!("║{}║", center(title, INNER_WIDTH)),
        border('╚', '═', '╝'),
    ]
}

/// The two text lines of one grid row.
pub fn render_row(row: &[Cell; DAYS_PER_WEEK]) -> (String, String) {
    let mut days = String::new();
    let mut levels = String::new();

    for cell in row {
        days.push_str(&pad_right(&cell.day_line(), CELL_WIDTH));
        levels.push_str(&pad_right(&cell.level_line(), CELL_WIDTH));
    }

    (days, levels)
}

/// Full calendar screen (without the input prompt).
pub fn render(grid: &MonthGrid) -> String {
    let mut lines = title_box("DEEP WORK TRACKER (4 HOURS/DAY)");
    lines.push(String::new());

    let heading = format!("─ {} {} ", grid.month.name().to_uppercase(), grid.month.year());
    lines.push(format!("┌{}┐", pad_right(&heading, INNER_WIDTH)));
    lines.push(boxed(WEEKDAY_HEADER));
    lines.push(border('├', '─', '┤'));

    for row in &grid.rows {
        let (days, levels) = render_row(row);
        lines.push(boxed(&days));
        lines.push(boxed(&levels));
    }

    lines.push(border('├', '─', '┤'));
    lines.push(boxed(LEGEND));
    lines.push(border('└', '─', '┘'));
    lines.push(format!(
        "Month total: {}h | Complete days: {}",
        grid.total_hours(),
        grid.complete_days()
    ));
    lines.push(String::new());
    lines.push(COMMANDS_HINT.to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
