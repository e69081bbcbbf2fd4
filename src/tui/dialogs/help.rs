use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use calgrid::app::AppState;

pub fn render(f: &mut Frame, app: &AppState) {
    let area = f.size();
    let help_width = 56;
    let help_height = 22;
    let x = (area.width.saturating_sub(help_width)) / 2;
    let y = (area.height.saturating_sub(help_height)) / 2;

    let help_area = ratatui::layout::Rect {
        x,
        y,
        width: help_width,
        height: help_height,
    };

    f.render_widget(Clear, help_area);

    let heading = |text: &'static str| {
        Line::from(Span::styled(text, Style::default().fg(app.theme.help_heading)))
    };

    let help_text = vec![
        Line::from(Span::styled(
            "calgrid Help",
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        heading("Navigation:"),
        Line::from("  h/l      - Previous/next month, week, or day"),
        Line::from("  j/k      - Select events on the current date"),
        Line::from("  t        - Jump to today"),
        Line::from(""),
        heading("Views:"),
        Line::from("  m/w/d    - Month/Week/Day view"),
        Line::from("  Enter    - Open day view (Month/Week)"),
        Line::from(""),
        heading("Events:"),
        Line::from("  a        - Add new event"),
        Line::from("  e        - Edit selected event"),
        Line::from("  x        - Delete selected event"),
        Line::from(""),
        heading("Commands:"),
        Line::from("  :q                 - Quit"),
        Line::from("  :goto DD-MM-YYYY   - Jump to date"),
        Line::from("  :new [title]       - Create event"),
        Line::from("  :move <date> <time> - Reschedule selected event"),
        Line::from("  :view month        - Switch view"),
        Line::from("  :theme nord        - Change theme"),
    ];

    let visible_lines = help_height.saturating_sub(2) as usize;
    let scroll = app.help_scroll.min(help_text.len().saturating_sub(visible_lines));

    let dialog = Paragraph::new(help_text)
        .scroll((scroll as u16, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help (q/Esc to close) ")
                .style(Style::default().bg(Color::Black)),
        );

    f.render_widget(dialog, help_area);
}
