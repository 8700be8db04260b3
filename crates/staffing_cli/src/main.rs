//! `staffing` command-line entry point.
//!
//! # Responsibility
//! - Resolve configuration from `.env`, the environment and flags.
//! - Start file logging when a log directory is configured.
//! - Open the registry database and dispatch one command.

mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use commands::{Format, Registry};
use log::info;
use staffing_core::{init_logging, open_db, StoreConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    // A missing .env file is normal; real variables still apply.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = StoreConfig::from_env()?;
    if let Some(db) = cli.db {
        config = config.with_db_path(db);
    }

    if let Some(log_dir) = config.log_dir.as_deref() {
        if let Err(err) = init_logging(config.log_level, log_dir) {
            eprintln!("warning: file logging disabled: {err}");
        }
    }

    let conn = open_db(&config.db_path)
        .with_context(|| format!("cannot open database `{}`", config.db_path.display()))?;
    info!(
        "event=cli_start module=cli status=ok version={}",
        staffing_core::core_version()
    );

    let format = if cli.json { Format::Json } else { Format::Text };
    let today = chrono::Local::now().date_naive();
    let registry = Registry::open(&conn, today, format)?;
    let mut stdout = std::io::stdout().lock();
    registry.run(cli.command, &mut stdout)
}
