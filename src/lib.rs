//! deepwork library root.
//! Exposes the CLI parser, the high-level run() function and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use config::Config;
use crate::core::session::SessionController;
use db::store::EntryStore;
use errors::AppResult;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Apply command-line overrides on top of the loaded configuration.
pub fn apply_overrides(cli: &Cli, cfg: &mut Config) {
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if cli.no_pause {
        cfg.save_pause_ms = 0;
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;
    apply_overrides(&cli, &mut cfg);

    // 3️⃣ open the store; failing here is fatal
    let db_path: PathBuf = cfg.database_path();
    let store = EntryStore::open(&db_path)?;

    // 4️⃣ interactive loop on stdin/stdout
    let mut session = SessionController::new(store, utils::date::today)
        .with_save_pause(Duration::from_millis(cfg.save_pause_ms));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout)
}
