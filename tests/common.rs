#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn deepwork() -> Command {
    cargo_bin_cmd!("deepwork")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Fixed clocks for driving sessions.
pub fn dec_15_2025() -> NaiveDate {
    date(2025, 12, 15)
}

pub fn jan_10_2026() -> NaiveDate {
    date(2026, 1, 10)
}

/// Unique scratch directory inside the system temp dir, emptied first.
pub fn setup_test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("deepwork_test_{}_{}", name, std::process::id()));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Database path inside a fresh scratch directory (file not created).
pub fn setup_test_db(name: &str) -> PathBuf {
    setup_test_dir(name).join("deep-work.db")
}
