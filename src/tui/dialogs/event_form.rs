use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use calgrid::app::{AppState, FormField};

pub fn render(f: &mut Frame, app: &AppState) {
    let Some(form) = &app.event_form else {
        return;
    };

    let area = f.size();
    let form_width = 60;
    let form_height = 18;
    let x = (area.width.saturating_sub(form_width)) / 2;
    let y = (area.height.saturating_sub(form_height)) / 2;

    let form_area = ratatui::layout::Rect {
        x,
        y,
        width: form_width,
        height: form_height,
    };

    f.render_widget(Clear, form_area);

    let active = app.theme.selected_bg;
    let inactive = Color::DarkGray;
    let label_style = |field: FormField| {
        Style::default().fg(if form.active_field == field { active } else { inactive })
    };

    let form_title = if form.is_editing() { "Edit Event" } else { "Create New Event" };

    let mut form_text = vec![
        Line::from(Span::styled(
            form_title,
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Title: ", label_style(FormField::Title)),
            Span::raw(form.title.clone()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Date (DD-MM-YYYY): ", label_style(FormField::Date)),
            Span::raw(form.date_buffer.clone()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Start (HH:MM): ", label_style(FormField::StartTime)),
            Span::raw(form.time_buffer.clone()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Duration (min): ", label_style(FormField::Duration)),
            Span::raw(form.duration_buffer.clone()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Location: ", label_style(FormField::Location)),
            Span::raw(form.location.clone()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Notes: ", label_style(FormField::Notes)),
            Span::raw(form.notes.clone()),
        ]),
        Line::from(""),
    ];

    if let Some(error) = &form.error {
        form_text.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(app.theme.error),
        )));
    } else {
        form_text.push(Line::from(vec![
            Span::styled("Tab", Style::default().fg(app.theme.title)),
            Span::raw(" = Next field | "),
            Span::styled("Enter", Style::default().fg(app.theme.today)),
            Span::raw(" = Save | "),
            Span::styled("Esc", Style::default().fg(app.theme.error)),
            Span::raw(" = Cancel"),
        ]));
    }

    let dialog = Paragraph::new(form_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(if form.is_editing() { " Edit " } else { " New Event " })
            .style(Style::default().bg(Color::Black)),
    );

    f.render_widget(dialog, form_area);
}
