use std::path::PathBuf;

use chrono::Local;

mod cli;
use cli::{CliMode, parse_cli_mode, run_agenda_mode};
mod tui;
use tui::run_tui;

use calgrid::calendar::EventStore;
use calgrid::storage::Config;

fn main() -> anyhow::Result<()> {
    setup_logging();

    let cli_mode = match parse_cli_mode() {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("Error: {}", err);
            println!("{}", cli::USAGE);
            return Ok(());
        }
    };

    let config = match Config::load_or_create() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("falling back to default config: {}", err);
            Config::default()
        }
    };

    match cli_mode {
        CliMode::Agenda { date, events_path } => {
            // Agenda mode has no interactive session to add events to, so
            // it always has the demo schedule unless a seed file is given.
            let store = build_store(events_path.is_none(), events_path);
            run_agenda_mode(date, &store)?;
            Ok(())
        }
        CliMode::Tui { sample, events_path } => {
            let store = build_store(sample, events_path);
            run_tui(&config, store)
        }
    }
}

fn build_store(sample: bool, events_path: Option<PathBuf>) -> EventStore {
    if let Some(path) = events_path {
        match tui::seed::load_drafts(&path) {
            Ok(drafts) => return EventStore::seeded(drafts),
            Err(err) => {
                eprintln!("Failed to load events from {}: {}", path.display(), err);
                tracing::error!("seed file rejected: {}", err);
                return EventStore::new();
            }
        }
    }

    if sample {
        EventStore::seeded(tui::seed::sample_drafts(Local::now().date_naive()))
    } else {
        EventStore::new()
    }
}

fn setup_logging() {
    let log_dir = dirs::config_dir()
        .map(|d| d.join("calgrid"))
        .unwrap_or_else(|| std::path::PathBuf::from("."));

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "calgrid.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("calgrid started");
}
