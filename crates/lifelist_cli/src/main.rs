//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `lifelist_core` linkage and store wiring without any UI.
//! - Print deterministic `key=value` lines for quick local sanity checks.
//!
//! Usage: `lifelist_cli [DATA_DIR]`. Without an argument the data directory
//! comes from `LIFELIST_DATA_DIR` or the platform default.

use lifelist_core::{init_logging, AppConfig, LifeList, SqliteKvStore};
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("lifelist_core ping={}", lifelist_core::ping());
    println!("lifelist_core version={}", lifelist_core::core_version());

    match run(std::env::args_os().nth(1).map(PathBuf::from)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("lifelist_cli error={message}");
            ExitCode::FAILURE
        }
    }
}

fn run(data_dir: Option<PathBuf>) -> Result<(), String> {
    let data_dir = match data_dir {
        Some(dir) if dir.is_relative() => Some(
            std::env::current_dir()
                .map_err(|err| err.to_string())?
                .join(dir),
        ),
        other => other,
    };
    let config = AppConfig::discover(data_dir, None).map_err(|err| err.to_string())?;
    let log_dir = config.log_dir();
    let log_dir = log_dir
        .to_str()
        .ok_or_else(|| format!("log dir is not valid UTF-8: {}", log_dir.display()))?;
    init_logging(config.log_level(), log_dir)?;

    let store = SqliteKvStore::open(config.store_path()).map_err(|err| err.to_string())?;
    let mut lists = LifeList::new(&store);
    let summary = lists.summary().map_err(|err| err.to_string())?;
    info!("event=cli_summary module=cli status=ok");

    println!("store path={}", config.store_path().display());
    println!(
        "todos total={} active={}",
        summary.todos, summary.active_todos
    );
    println!(
        "tasks total={} active={}",
        summary.tasks, summary.active_tasks
    );
    println!("notes total={}", summary.notes);
    println!(
        "events total={} reminders={}",
        summary.events, summary.reminders
    );
    Ok(())
}
