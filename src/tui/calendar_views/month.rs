use chrono::{Datelike, NaiveDate};
use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use calgrid::{app::AppState, calendar::format_time, ui::grid::Cell, ui::month_view};

const CELL_WIDTH: usize = 10;

pub fn render(f: &mut Frame, app: &AppState, today: NaiveDate, area: ratatui::layout::Rect) {
    let layout = month_view::calculate_layout(app, today);

    let month_name = NaiveDate::from_ymd_opt(layout.year, layout.month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{}-{:02}", layout.year, layout.month));

    let mut lines = vec![
        Line::from(Span::styled(
            month_name,
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        weekday_header(app),
    ];

    for week in &layout.weeks {
        let mut number_spans = Vec::new();
        for cell in &week.cells {
            number_spans.push(Span::styled(
                pad(&format!("{:>2}", cell.date.day())),
                day_style(app, cell),
            ));
        }
        lines.push(Line::from(number_spans));

        for row in 0..app.max_visible_events {
            let mut entry_spans = Vec::new();
            let mut any = false;
            for cell in &week.cells {
                match cell.events.get(row) {
                    Some(event) => {
                        any = true;
                        let entry = format!("{} {}", format_time(event.time), event.title);
                        entry_spans.push(Span::styled(pad(&entry), entry_style(app, cell)));
                    }
                    None => entry_spans.push(Span::raw(pad(""))),
                }
            }
            if any {
                lines.push(Line::from(entry_spans));
            }
        }

        let mut overflow_spans = Vec::new();
        let mut any_overflow = false;
        for cell in &week.cells {
            if cell.overflow_count > 0 {
                any_overflow = true;
                overflow_spans.push(Span::styled(
                    pad(&format!("+{} more", cell.overflow_count)),
                    Style::default().fg(app.theme.overflow),
                ));
            } else {
                overflow_spans.push(Span::raw(pad("")));
            }
        }
        if any_overflow {
            lines.push(Line::from(overflow_spans));
        }

        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("h/l", Style::default().fg(app.theme.title)),
        Span::raw(" = Prev/next month | "),
        Span::styled("a", Style::default().fg(app.theme.today)),
        Span::raw(" = Add event | "),
        Span::styled("m/w/d", Style::default().fg(app.theme.title)),
        Span::raw(" = Views | "),
        Span::styled(":goto DD-MM-YYYY", Style::default().fg(app.theme.title)),
    ]));

    let content = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}

fn weekday_header(app: &AppState) -> Line<'static> {
    let mut spans = Vec::new();
    let mut weekday = app.week_start;
    for _ in 0..7 {
        spans.push(Span::styled(
            pad(&weekday.to_string()),
            Style::default().fg(app.theme.weekday_header),
        ));
        weekday = weekday.succ();
    }
    Line::from(spans)
}

fn day_style(app: &AppState, cell: &Cell) -> Style {
    if cell.date == app.reference_date {
        Style::default()
            .bg(app.theme.selected_bg)
            .fg(app.theme.selected_fg)
            .add_modifier(Modifier::BOLD)
    } else if cell.is_today {
        Style::default().fg(app.theme.today).add_modifier(Modifier::BOLD)
    } else if cell.outside_period {
        Style::default().fg(app.theme.outside_period)
    } else {
        Style::default()
    }
}

fn entry_style(app: &AppState, cell: &Cell) -> Style {
    if cell.outside_period {
        Style::default().fg(app.theme.outside_period)
    } else {
        Style::default().fg(app.theme.event_time)
    }
}

fn pad(text: &str) -> String {
    let truncated: String = text.chars().take(CELL_WIDTH - 1).collect();
    format!("{:<width$}", truncated, width = CELL_WIDTH)
}
