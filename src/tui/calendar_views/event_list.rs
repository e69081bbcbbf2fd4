use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use calgrid::{app::AppState, calendar::EventStatus, calendar::format_time};

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let events = app.events_on_reference_date();

    let title = format!("Events on {}", app.reference_date.format("%B %d, %Y"));

    let mut lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if events.is_empty() {
        lines.push(Line::from(Span::styled(
            "No events",
            Style::default().fg(app.theme.outside_period),
        )));
    } else {
        let selected_base = Style::default()
            .bg(app.theme.selected_bg)
            .add_modifier(Modifier::BOLD);

        for (idx, event) in events.iter().enumerate() {
            let is_selected = idx == app.selected_event_index;

            let (time_style, title_style) = if is_selected {
                (selected_base.fg(Color::Black), selected_base.fg(Color::Black))
            } else {
                (
                    Style::default().fg(app.theme.event_time),
                    Style::default().fg(app.theme.status_bar),
                )
            };

            let cursor = if is_selected { ">" } else { " " };
            let mut spans = vec![
                Span::styled(cursor, Style::default().fg(app.theme.selected_bg)),
                Span::styled(format_time(event.time), time_style),
                Span::raw(" "),
                Span::styled(event.title.clone(), title_style),
            ];

            match event.status {
                EventStatus::Pending => spans.push(Span::styled(
                    " [pending]",
                    Style::default().fg(app.theme.overflow),
                )),
                EventStatus::Cancelled => spans.push(Span::styled(
                    " [cancelled]",
                    Style::default().fg(app.theme.error),
                )),
                EventStatus::Confirmed => {}
            }

            lines.push(Line::from(spans));

            if let Some(location) = &event.location {
                lines.push(Line::from(vec![
                    Span::raw("    @ "),
                    Span::styled(location.clone(), Style::default().fg(app.theme.outside_period)),
                ]));
            }

            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![
            Span::styled("j/k", Style::default().fg(app.theme.title)),
            Span::raw(" = Navigate | "),
            Span::styled("e", Style::default().fg(app.theme.today)),
            Span::raw(" = Edit | "),
            Span::styled("x", Style::default().fg(app.theme.error)),
            Span::raw(" = Delete"),
        ]));
    }

    let content = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
