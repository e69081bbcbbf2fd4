use chrono::NaiveDate;
use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use calgrid::{app::AppState, calendar::format_time, ui::day_view};

pub fn render(f: &mut Frame, app: &AppState, today: NaiveDate, area: ratatui::layout::Rect) {
    let layout = day_view::calculate_layout(app, today);

    let mut heading = layout.date.format("%A, %B %d, %Y").to_string();
    if layout.is_today {
        heading.push_str(" (today)");
    }

    let mut lines = vec![
        Line::from(Span::styled(
            heading,
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for slot in &layout.slots {
        let Some(start) = slot.slot else { continue };

        let label_style = if slot.events.is_empty() {
            Style::default().fg(app.theme.outside_period)
        } else {
            Style::default().fg(app.theme.weekday_header)
        };

        let mut spans = vec![Span::styled(format!("{} ", format_time(start)), label_style)];

        let mut entries: Vec<String> = slot
            .events
            .iter()
            .map(|event| format!("{} ({} min)", event.title, event.duration_minutes))
            .collect();
        if slot.overflow_count > 0 {
            entries.push(format!("+{} more", slot.overflow_count));
        }

        if !entries.is_empty() {
            spans.push(Span::styled(
                entries.join(" | "),
                Style::default().fg(app.theme.event_time),
            ));
        }

        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("h/l", Style::default().fg(app.theme.title)),
        Span::raw(" = Prev/next day | "),
        Span::styled("j/k", Style::default().fg(app.theme.title)),
        Span::raw(" = Select event | "),
        Span::styled("e", Style::default().fg(app.theme.today)),
        Span::raw(" = Edit"),
    ]));

    let content = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
