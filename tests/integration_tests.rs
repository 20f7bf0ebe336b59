use deepwork::db::store::EntryStore;
use deepwork::models::daily_entry::DailyEntry;
use deepwork::utils::date::today;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{deepwork, setup_test_db, setup_test_dir};

#[test]
fn test_quit_immediately() {
    let db_path = setup_test_db("quit");

    deepwork()
        .env("HOME", db_path.parent().unwrap())
        .args(["--db", db_path.to_str().unwrap(), "--no-pause"])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(contains("DEEP WORK TRACKER (4 HOURS/DAY)"))
        .stdout(contains("Goodbye!"));

    assert!(db_path.exists());
}

#[test]
fn test_uppercase_quit_and_navigation() {
    let db_path = setup_test_db("nav");

    deepwork()
        .env("HOME", db_path.parent().unwrap())
        .args(["--db", db_path.to_str().unwrap(), "--no-pause"])
        .write_stdin("N\nP\nwhat\n\nQ\n")
        .assert()
        .success()
        .stdout(contains("Goodbye!"));
}

#[test]
fn test_log_today_persists_hours() {
    let db_path = setup_test_db("log_today");

    deepwork()
        .env("HOME", db_path.parent().unwrap())
        .args(["--db", db_path.to_str().unwrap(), "--no-pause"])
        .write_stdin("t\n2\n4\ns\nq\n")
        .assert()
        .success()
        .stdout(contains("LOG HOURS FOR TODAY"))
        .stdout(contains("Saved!"))
        .stdout(contains("Goodbye!"));

    let store = EntryStore::open(&db_path).expect("reopen store");
    let d = today();
    assert_eq!(store.get(&d).unwrap(), Some(DailyEntry::new(d, 4)));
}

#[test]
fn test_second_save_replaces_first() {
    let db_path = setup_test_db("replace");

    for script in ["t\n3\ns\nq\n", "t\n1\ns\nq\n"] {
        deepwork()
            .env("HOME", db_path.parent().unwrap())
            .args(["--db", db_path.to_str().unwrap(), "--no-pause"])
            .write_stdin(script)
            .assert()
            .success();
    }

    // Second run opened with 3 stored; pressing 1 drops it by one.
    let store = EntryStore::open(&db_path).expect("reopen store");
    assert_eq!(store.get(&today()).unwrap().unwrap().hours_logged, 2);
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let db_path = setup_test_db("eof");

    deepwork()
        .env("HOME", db_path.parent().unwrap())
        .args(["--db", db_path.to_str().unwrap(), "--no-pause"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(contains("Goodbye!"));
}

#[test]
fn test_database_from_config_file() {
    let home = setup_test_dir("config_home");
    let app_dir = home.join(".productivity-tracker");
    fs::create_dir_all(&app_dir).unwrap();

    let db_path = home.join("custom").join("tracker.db");
    fs::write(
        app_dir.join("deep-work.conf"),
        format!(
            "database: {}\nsave_pause_ms: 0\n",
            db_path.to_string_lossy()
        ),
    )
    .unwrap();

    deepwork()
        .env("HOME", &home)
        .write_stdin("t\n2\ns\nq\n")
        .assert()
        .success();

    let store = EntryStore::open(&db_path).expect("configured store");
    assert_eq!(store.get(&today()).unwrap().unwrap().hours_logged, 2);
}

#[test]
fn test_default_database_lives_under_home_dot_directory() {
    let home = setup_test_dir("default_home");

    deepwork()
        .env("HOME", &home)
        .args(["--no-pause"])
        .write_stdin("q\n")
        .assert()
        .success();

    assert!(
        home.join(".productivity-tracker")
            .join("deep-work.db")
            .exists()
    );
}

#[test]
fn test_unopenable_store_is_fatal() {
    let dir = setup_test_dir("fatal");
    let blocker = dir.join("blocker");
    fs::write(&blocker, b"not a directory").unwrap();
    let db_path = blocker.join("deep-work.db");

    deepwork()
        .env("HOME", &dir)
        .args(["--db", db_path.to_str().unwrap()])
        .write_stdin("q\n")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error").and(contains("I/O error")))
        .stdout(contains("Goodbye!").not());
}

#[test]
fn test_invalid_config_is_fatal() {
    let home = setup_test_dir("bad_config");
    let app_dir = home.join(".productivity-tracker");
    fs::create_dir_all(&app_dir).unwrap();
    fs::write(app_dir.join("deep-work.conf"), "save_pause_ms: [oops\n").unwrap();

    deepwork()
        .env("HOME", &home)
        .write_stdin("q\n")
        .assert()
        .failure()
        .stderr(contains("configuration"));
}
