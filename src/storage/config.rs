use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::app::ViewType;
use crate::ui::grid::{DEFAULT_MAX_VISIBLE, DEFAULT_SLOT_MINUTES};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    pub first_day_of_week: String,
    pub default_view: String,
    pub max_visible_events: usize,
    pub day_slot_minutes: u32,
    pub theme: String,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    pub fn load_or_create() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("calgrid")
            .join("config.toml")
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .expect("Failed to serialize config");
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    pub fn week_start(&self) -> Weekday {
        match self.ui.first_day_of_week.to_lowercase().as_str() {
            "sunday" | "sun" => Weekday::Sun,
            "saturday" | "sat" => Weekday::Sat,
            _ => Weekday::Mon,
        }
    }

    pub fn default_view(&self) -> ViewType {
        match self.ui.default_view.to_lowercase().as_str() {
            "week" => ViewType::Week,
            "day" => ViewType::Day,
            _ => ViewType::Month,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig {
                first_day_of_week: "Monday".to_string(),
                default_view: "month".to_string(),
                max_visible_events: DEFAULT_MAX_VISIBLE,
                day_slot_minutes: DEFAULT_SLOT_MINUTES,
                theme: "default".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_starts_the_week_on_monday() {
        let config = Config::default();
        assert_eq!(config.week_start(), Weekday::Mon);
    }

    #[test]
    fn default_config_opens_the_month_view() {
        let config = Config::default();
        assert_eq!(config.default_view(), ViewType::Month);
    }

    #[test]
    fn default_config_caps_cells_at_two_events() {
        let config = Config::default();
        assert_eq!(config.ui.max_visible_events, 2);
    }

    #[test]
    fn parse_valid_toml_config() {
        let toml_content = r#"
            [ui]
            first_day_of_week = "Sunday"
            default_view = "week"
            max_visible_events = 4
            day_slot_minutes = 30
            theme = "nord"
        "#;

        let config = Config::from_toml(toml_content).unwrap();

        assert_eq!(config.week_start(), Weekday::Sun);
        assert_eq!(config.default_view(), ViewType::Week);
        assert_eq!(config.ui.max_visible_events, 4);
        assert_eq!(config.ui.day_slot_minutes, 30);
        assert_eq!(config.ui.theme, "nord");
    }

    #[test]
    fn parse_invalid_toml_returns_error() {
        let result = Config::from_toml("this is not valid toml");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_weekday_falls_back_to_monday() {
        let mut config = Config::default();
        config.ui.first_day_of_week = "someday".to_string();
        assert_eq!(config.week_start(), Weekday::Mon);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::from_toml(&serialized).unwrap(), config);
    }
}
