use chrono::{NaiveDate, NaiveTime};

use crate::app::ViewType;
use crate::calendar::date_format;

#[derive(Debug, PartialEq)]
pub enum Command {
    Quit,
    Goto(NaiveDate),
    NewEvent(Option<String>),
    MoveEvent(NaiveDate, NaiveTime),
    SwitchView(ViewType),
    Theme(String),
    Help,
    Error(String),
}

/// Parses a `:` command line. Dates use the same strict DD-MM-YYYY format
/// as every other manual date entry point.
pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();

    let Some(command_text) = trimmed.strip_prefix(':') else {
        return Command::Error("commands must start with ':'".to_string());
    };

    let parts: Vec<&str> = command_text.split_whitespace().collect();
    if parts.is_empty() {
        return Command::Error("empty command".to_string());
    }

    match parts[0] {
        "q" | "quit" => Command::Quit,
        "help" => Command::Help,
        "goto" => {
            if parts.len() < 2 {
                Command::Error("goto requires a date (DD-MM-YYYY)".to_string())
            } else {
                match date_format::parse_date(parts[1]) {
                    Ok(date) => Command::Goto(date),
                    Err(err) => Command::Error(format!("invalid date '{}': {}", parts[1], err)),
                }
            }
        }
        "new" => {
            if parts.len() < 2 {
                Command::NewEvent(None)
            } else {
                Command::NewEvent(Some(parts[1..].join(" ")))
            }
        }
        "move" => {
            if parts.len() < 3 {
                return Command::Error("move requires a date and a time".to_string());
            }
            let date = match date_format::parse_date(parts[1]) {
                Ok(date) => date,
                Err(err) => {
                    return Command::Error(format!("invalid date '{}': {}", parts[1], err));
                }
            };
            match date_format::parse_time(parts[2]) {
                Ok(time) => Command::MoveEvent(date, time),
                Err(err) => Command::Error(format!("invalid time '{}': {}", parts[2], err)),
            }
        }
        "view" => match parts.get(1).copied() {
            Some("month") => Command::SwitchView(ViewType::Month),
            Some("week") => Command::SwitchView(ViewType::Week),
            Some("day") => Command::SwitchView(ViewType::Day),
            Some(other) => Command::Error(format!("unknown view: {}", other)),
            None => Command::Error("view requires month, week, or day".to_string()),
        },
        "theme" => {
            if parts.len() < 2 {
                Command::Error("theme requires a theme name".to_string())
            } else {
                Command::Theme(parts[1].to_string())
            }
        }
        _ => Command::Error(format!("unknown command: {}", parts[0])),
    }
}
