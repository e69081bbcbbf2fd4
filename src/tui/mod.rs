mod calendar_views;
mod dialogs;
mod presentation;
pub mod seed;

use std::io;

use anyhow::Context;
use chrono::Local;
use crossterm::{
    event::{self, Event as TermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use calgrid::{
    app::{AppState, EventForm, Mode},
    calendar::{EventStore, format_date},
    input::{command_mode, insert_mode, normal_mode},
    storage::Config,
    ui::theme::Theme,
};

use crate::tui::presentation::ui;

pub fn run_tui(config: &Config, store: EventStore) -> anyhow::Result<()> {
    enable_raw_mode().context("enabling raw terminal mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("initializing terminal")?;

    let mut app = AppState::new(store)
        .with_theme(Theme::get_by_name(&config.ui.theme))
        .with_view(config.default_view())
        .with_week_start(config.week_start())
        .with_event_cap(config.ui.max_visible_events)
        .with_slot_minutes(config.ui.day_slot_minutes);

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> anyhow::Result<()> {
    loop {
        let today = Local::now().date_naive();
        terminal.draw(|f| ui(f, app, today))?;

        let TermEvent::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.mode {
            Mode::Normal => {
                if app.show_help {
                    handle_help_keys(key.code, app);
                } else if app.delete_confirmation_event_id.is_some() {
                    handle_delete_confirmation(key.code, app);
                } else {
                    match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        _ => normal_mode::handle_key(key.code, app),
                    }
                }
            }
            Mode::Command => {
                if handle_command_keys(key.code, app) {
                    return Ok(());
                }
            }
            Mode::Insert => handle_insert_keys(key.code, app),
        }
    }
}

fn handle_help_keys(code: KeyCode, app: &mut AppState) {
    match code {
        KeyCode::Char('j') => app.help_scroll = app.help_scroll.saturating_add(1),
        KeyCode::Char('k') => app.help_scroll = app.help_scroll.saturating_sub(1),
        KeyCode::Char('q') | KeyCode::Esc => {
            app.show_help = false;
            app.help_scroll = 0;
        }
        _ => {}
    }
}

fn handle_delete_confirmation(code: KeyCode, app: &mut AppState) {
    match code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some(event_id) = app.delete_confirmation_event_id.take() {
                match app.store.delete(&event_id) {
                    Ok(removed) => {
                        app.set_status(format!("Deleted '{}'", removed.title));
                        app.selected_event_index = app.selected_event_index.saturating_sub(1);
                    }
                    Err(err) => app.set_status(err.to_string()),
                }
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.delete_confirmation_event_id = None;
        }
        _ => {}
    }
}

/// Returns true when the command asked the application to quit.
fn handle_command_keys(code: KeyCode, app: &mut AppState) -> bool {
    match code {
        KeyCode::Enter => {
            let command_text = app.command_buffer.clone();
            app.command_buffer.clear();
            app.mode = Mode::Normal;
            execute_command(&command_text, app)
        }
        KeyCode::Esc => {
            app.command_buffer.clear();
            app.mode = Mode::Normal;
            false
        }
        KeyCode::Backspace => {
            app.command_buffer.pop();
            if app.command_buffer.is_empty() {
                app.mode = Mode::Normal;
            }
            false
        }
        KeyCode::Char(c) => {
            app.command_buffer.push(c);
            false
        }
        _ => false,
    }
}

fn execute_command(command_text: &str, app: &mut AppState) -> bool {
    match command_mode::parse_command(command_text) {
        command_mode::Command::Quit => return true,
        command_mode::Command::Goto(date) => {
            app.jump_to(date);
            app.set_status(format!("Jumped to {}", format_date(date)));
        }
        command_mode::Command::NewEvent(title) => {
            let form = EventForm::new(app.reference_date, title.unwrap_or_default());
            app.event_form = Some(form);
            app.mode = Mode::Insert;
        }
        command_mode::Command::MoveEvent(date, time) => {
            let Some(id) = app.selected_event().map(|event| event.id.clone()) else {
                app.set_status("no event selected to move");
                return false;
            };
            match app.store.move_to(&id, date, time) {
                Ok(moved) => {
                    let message = format!("Moved '{}' to {}", moved.title, format_date(date));
                    app.set_status(message);
                }
                Err(err) => app.set_status(err.to_string()),
            }
        }
        command_mode::Command::SwitchView(view) => app.set_view(view),
        command_mode::Command::Theme(name) => app.theme = Theme::get_by_name(&name),
        command_mode::Command::Help => app.show_help = true,
        command_mode::Command::Error(message) => {
            tracing::warn!("rejected command: {}", message);
            app.set_status(message);
        }
    }
    false
}

fn handle_insert_keys(code: KeyCode, app: &mut AppState) {
    match code {
        KeyCode::Esc => {
            app.event_form = None;
            app.mode = Mode::Normal;
        }
        KeyCode::Enter => submit_form(app),
        _ => insert_mode::handle_key(code, app),
    }
}

/// Runs the form through the strict parsers and the store. On failure the
/// form stays open with the error in its status line and the store is
/// untouched.
fn submit_form(app: &mut AppState) {
    let Some(mut form) = app.event_form.take() else {
        return;
    };

    let draft = match form.to_draft() {
        Ok(draft) => draft,
        Err(message) => {
            tracing::warn!("rejected event form: {}", message);
            form.error = Some(message);
            app.event_form = Some(form);
            return;
        }
    };

    let result = match form.event_id.as_deref() {
        Some(id) => app.store.update(id, draft).map(|_| "Event updated"),
        None => app.store.create(draft).map(|_| "Event created"),
    };

    match result {
        Ok(message) => {
            app.set_status(message);
            app.mode = Mode::Normal;
        }
        Err(err) => {
            form.error = Some(err.to_string());
            app.event_form = Some(form);
        }
    }
}
