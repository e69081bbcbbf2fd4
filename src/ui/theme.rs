use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub title: Color,
    pub weekday_header: Color,
    pub today: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub outside_period: Color,
    pub event_time: Color,
    pub overflow: Color,
    pub status_bar: Color,
    pub command_line: Color,
    pub help_heading: Color,
    pub error: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            title: Color::Cyan,
            weekday_header: Color::Yellow,
            today: Color::Green,
            selected_bg: Color::Blue,
            selected_fg: Color::White,
            outside_period: Color::DarkGray,
            event_time: Color::Green,
            overflow: Color::Magenta,
            status_bar: Color::White,
            command_line: Color::White,
            help_heading: Color::Yellow,
            error: Color::Red,
        }
    }

    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            title: Color::Rgb(251, 184, 108),
            weekday_header: Color::Rgb(254, 128, 25),
            today: Color::Rgb(184, 187, 38),
            selected_bg: Color::Rgb(60, 56, 54),
            selected_fg: Color::Rgb(235, 219, 178),
            outside_period: Color::Rgb(146, 131, 116),
            event_time: Color::Rgb(142, 192, 124),
            overflow: Color::Rgb(211, 134, 155),
            status_bar: Color::Rgb(235, 219, 178),
            command_line: Color::Rgb(235, 219, 178),
            help_heading: Color::Rgb(254, 128, 25),
            error: Color::Rgb(251, 73, 52),
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            title: Color::Rgb(136, 192, 208),
            weekday_header: Color::Rgb(235, 203, 139),
            today: Color::Rgb(163, 190, 140),
            selected_bg: Color::Rgb(59, 66, 82),
            selected_fg: Color::Rgb(236, 239, 244),
            outside_period: Color::Rgb(76, 86, 106),
            event_time: Color::Rgb(129, 161, 193),
            overflow: Color::Rgb(180, 142, 173),
            status_bar: Color::Rgb(216, 222, 233),
            command_line: Color::Rgb(216, 222, 233),
            help_heading: Color::Rgb(235, 203, 139),
            error: Color::Rgb(191, 97, 106),
        }
    }

    pub fn get_by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "gruvbox" => Self::gruvbox(),
            "nord" => Self::nord(),
            _ => Self::default_theme(),
        }
    }

    pub fn available_themes() -> Vec<&'static str> {
        vec!["default", "gruvbox", "nord"]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
