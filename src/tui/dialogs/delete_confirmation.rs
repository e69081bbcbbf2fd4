use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use calgrid::app::AppState;

pub fn render(f: &mut Frame, app: &AppState) {
    let Some(event_id) = &app.delete_confirmation_event_id else {
        return;
    };

    let event_title = app
        .store
        .get(event_id)
        .map(|event| event.title.as_str())
        .unwrap_or("this event");

    let area = f.size();
    let dialog_width = 56;
    let dialog_height = 9;
    let x = (area.width.saturating_sub(dialog_width)) / 2;
    let y = (area.height.saturating_sub(dialog_height)) / 2;

    let dialog_area = ratatui::layout::Rect {
        x,
        y,
        width: dialog_width,
        height: dialog_height,
    };

    f.render_widget(Clear, dialog_area);

    let dialog_text = vec![
        Line::from(Span::styled(
            "Delete Event?",
            Style::default().fg(app.theme.error).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Delete "),
            Span::styled(
                event_title,
                Style::default().fg(app.theme.weekday_header).add_modifier(Modifier::BOLD),
            ),
            Span::raw("? This cannot be undone."),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Y", Style::default().fg(app.theme.today)),
            Span::raw(" = Yes, delete | "),
            Span::styled("N", Style::default().fg(app.theme.error)),
            Span::raw(" = No, cancel"),
        ]),
    ];

    let dialog = Paragraph::new(dialog_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Confirm Delete ")
                .style(Style::default().bg(Color::Black)),
        )
        .alignment(Alignment::Center);

    f.render_widget(dialog, dialog_area);
}
