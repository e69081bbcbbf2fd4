use chrono::NaiveDate;
use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use calgrid::{app::AppState, calendar::format_time, ui::week_view};

pub fn render(f: &mut Frame, app: &AppState, today: NaiveDate, area: ratatui::layout::Rect) {
    let layout = week_view::calculate_layout(app, today);

    let week_range = match layout.days.last() {
        Some(last) => format!(
            "{} - {}",
            layout.week_start.format("%b %d"),
            last.date.format("%b %d, %Y")
        ),
        None => layout.week_start.format("%b %d, %Y").to_string(),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            week_range,
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for day in &layout.days {
        let header_style = if day.date == app.reference_date {
            Style::default()
                .bg(app.theme.selected_bg)
                .fg(app.theme.selected_fg)
                .add_modifier(Modifier::BOLD)
        } else if day.is_today {
            Style::default().fg(app.theme.today).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.weekday_header)
        };

        lines.push(Line::from(Span::styled(
            format!("{}", day.date.format("%a %b %d")),
            header_style,
        )));

        if day.events.is_empty() && day.overflow_count == 0 {
            lines.push(Line::from(Span::styled(
                "    no events",
                Style::default().fg(app.theme.outside_period),
            )));
        } else {
            for event in &day.events {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(format_time(event.time), Style::default().fg(app.theme.event_time)),
                    Span::raw(" "),
                    Span::raw(event.title.clone()),
                ]));
            }
            if day.overflow_count > 0 {
                lines.push(Line::from(Span::styled(
                    format!("    +{} more", day.overflow_count),
                    Style::default().fg(app.theme.overflow),
                )));
            }
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("h/l", Style::default().fg(app.theme.title)),
        Span::raw(" = Prev/next week | "),
        Span::styled("Enter", Style::default().fg(app.theme.today)),
        Span::raw(" = Day view"),
    ]));

    let content = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
