use crate::errors::AppError;
use crate::models::daily_entry::{DailyEntry, MAX_HOURS, date_key};
use crate::models::year_month::YearMonth;
use crate::utils::date::parse_date;
use chrono::{Datelike, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};
use std::collections::BTreeMap;

pub fn map_row(row: &Row) -> Result<DailyEntry> {
    let date_str: String = row.get("date")?;
    let hours: i64 = row.get("hours_logged")?;

    let date = parse_date(&date_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    if !(0..=i64::from(MAX_HOURS)).contains(&hours) {
        return Err(rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Integer,
            Box::new(AppError::InvalidHours(hours)),
        ));
    }

    Ok(DailyEntry {
        date,
        hours_logged: hours as u8,
    })
}

pub fn get_entry(conn: &Connection, date: &NaiveDate) -> Result<Option<DailyEntry>> {
    let mut stmt =
        conn.prepare_cached("SELECT date, hours_logged FROM daily_entries WHERE date = ?1")?;
    stmt.query_row([date_key(date)], map_row).optional()
}

/// Insert-or-replace keyed by date; the stored value is overwritten, never summed.
pub fn upsert_entry(conn: &Connection, entry: &DailyEntry) -> Result<()> {
    conn.execute(
        "INSERT INTO daily_entries (date, hours_logged)
         VALUES (?1, ?2)
         ON CONFLICT(date) DO UPDATE SET hours_logged = excluded.hours_logged",
        params![entry.date_key(), entry.hours_logged],
    )?;
    Ok(())
}

/// Returns true when a row was removed.
pub fn delete_entry(conn: &Connection, date: &NaiveDate) -> Result<bool> {
    let n = conn.execute("DELETE FROM daily_entries WHERE date = ?1", [date_key(date)])?;
    Ok(n > 0)
}

pub fn list_entries(conn: &Connection) -> Result<Vec<DailyEntry>> {
    let mut stmt =
        conn.prepare("SELECT date, hours_logged FROM daily_entries ORDER BY date DESC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Hours per day-of-month for every stored day of `ym`.
pub fn month_entries(conn: &Connection, ym: &YearMonth) -> Result<BTreeMap<u32, u8>> {
    let from = format!("{}-01", ym);
    let to = format!("{}-{:02}", ym, ym.days_in_month());

    let mut stmt = conn.prepare_cached(
        "SELECT date, hours_logged FROM daily_entries
         WHERE date BETWEEN ?1 AND ?2
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map(params![from, to], map_row)?;

    let mut out = BTreeMap::new();
    for r in rows {
        let entry = r?;
        out.insert(entry.date.day(), entry.hours_logged);
    }
    Ok(out)
}
