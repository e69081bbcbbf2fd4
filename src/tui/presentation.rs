use chrono::NaiveDate;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use calgrid::app::{AppState, Mode, ViewType};

use crate::tui::{calendar_views, dialogs};

pub fn ui(f: &mut Frame, app: &AppState, today: NaiveDate) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_chunks[1]);

    let view_name = match app.view {
        ViewType::Month => "Month",
        ViewType::Week => "Week",
        ViewType::Day => "Day",
    };
    let title_text = format!(
        "calgrid - {} View - {}",
        view_name,
        app.reference_date.format("%B %d, %Y")
    );

    let title = Paragraph::new(title_text)
        .style(Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, main_chunks[0]);

    match app.view {
        ViewType::Month => calendar_views::month::render(f, app, today, content_chunks[0]),
        ViewType::Week => calendar_views::week::render(f, app, today, content_chunks[0]),
        ViewType::Day => calendar_views::day::render(f, app, today, content_chunks[0]),
    }

    calendar_views::event_list::render(f, app, content_chunks[1]);

    let (status_text, status_color, alignment) = if app.mode == Mode::Command {
        (app.command_buffer.clone(), app.theme.command_line, Alignment::Left)
    } else if let Some(message) = &app.status_message {
        (message.clone(), app.theme.status_bar, Alignment::Center)
    } else {
        (
            format!(
                "Events: {} | Press 'q' to quit, '?' for help",
                app.store.len()
            ),
            app.theme.status_bar,
            Alignment::Center,
        )
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(alignment)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, main_chunks[2]);

    if app.show_help {
        dialogs::help::render(f, app);
    }

    if app.event_form.is_some() {
        dialogs::event_form::render(f, app);
    }

    if app.delete_confirmation_event_id.is_some() {
        dialogs::delete_confirmation::render(f, app);
    }
}
