use std::{
    env,
    io::{self, Write},
    path::PathBuf,
    process::{Command, Stdio},
};

use chrono::{Local, NaiveDate};

use calgrid::calendar::{CalendarEvent, EventStatus, EventStore, format_time, parse_date};

pub const USAGE: &str = "Usage: calgrid [--agenda [DD-MM-YYYY]] [--sample] [--events <file.json>]";

#[derive(Debug, Clone, PartialEq)]
pub enum CliMode {
    Tui {
        sample: bool,
        events_path: Option<PathBuf>,
    },
    Agenda {
        date: NaiveDate,
        events_path: Option<PathBuf>,
    },
}

pub fn parse_cli_mode() -> Result<CliMode, String> {
    parse_args(env::args().skip(1))
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<CliMode, String> {
    let mut sample = false;
    let mut events_path = None;
    let mut agenda_date = None;
    let mut args = args.peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--sample" => {
                sample = true;
            }
            "--events" => {
                let Some(path) = args.next() else {
                    return Err("--events requires a file path".to_string());
                };
                events_path = Some(PathBuf::from(path));
            }
            "--agenda" => {
                let date = match args.peek() {
                    Some(next) if !next.starts_with("--") => {
                        let date_text = args.next().ok_or("peeked value must exist")?;
                        parse_date(&date_text)
                            .map_err(|_| format!("Invalid date '{}'. Use DD-MM-YYYY.", date_text))?
                    }
                    _ => Local::now().date_naive(),
                };
                agenda_date = Some(date);
            }
            "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    Ok(match agenda_date {
        Some(date) => CliMode::Agenda { date, events_path },
        None => CliMode::Tui { sample, events_path },
    })
}

pub fn run_agenda_mode(date: NaiveDate, store: &EventStore) -> io::Result<()> {
    let events = store.events_on(date);
    let agenda = format_agenda_text(date, &events);
    display_with_pager(&agenda)
}

fn format_agenda_text(date: NaiveDate, events: &[&CalendarEvent]) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Agenda - {}", date.format("%A, %B %d, %Y")));
    lines.push(String::new());

    if events.is_empty() {
        lines.push("No events scheduled.".to_string());
    } else {
        for event in events {
            lines.push(format!("- {}", build_agenda_line(event)));
        }
    }

    lines.join("\n")
}

fn build_agenda_line(event: &CalendarEvent) -> String {
    let start = event.start_datetime();
    let end = event.end_datetime();
    let mut line = format!(
        "{}-{}  {}",
        format_time(start.time()),
        format_time(end.time()),
        event.title
    );

    if let Some(location) = &event.location {
        if !location.is_empty() {
            line.push_str(&format!(" @ {}", location));
        }
    }

    match event.status {
        EventStatus::Pending => line.push_str(" (pending)"),
        EventStatus::Cancelled => line.push_str(" (cancelled)"),
        EventStatus::Confirmed => {}
    }

    line
}

fn display_with_pager(text: &str) -> io::Result<()> {
    let pager_value = env::var("PAGER").unwrap_or_else(|_| "less".to_string());
    let mut parts = pager_value.split_whitespace();
    let Some(cmd) = parts.next() else {
        println!("{text}");
        return Ok(());
    };
    let args: Vec<&str> = parts.collect();

    match Command::new(cmd).args(&args).stdin(Stdio::piped()).spawn() {
        Ok(mut child) => {
            if let Some(stdin) = child.stdin.as_mut() {
                stdin.write_all(text.as_bytes())?;
            }
            let _ = child.wait();
        }
        Err(_) => {
            println!("{text}");
        }
    }

    Ok(())
}
