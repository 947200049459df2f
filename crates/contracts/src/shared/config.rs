use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Тексты виджета
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct UiConfig {
    pub title: String,
    pub search_placeholder: String,
    pub empty_message: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "Product Categories".to_string(),
            search_placeholder: "Search".to_string(),
            empty_message: "No products matching selected criteria".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Уровень для `console_log`; неизвестное значение даёт `Info`
    pub fn level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Info)
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[ui]
title = "Product Categories"
search_placeholder = "Search"
empty_message = "No products matching selected criteria"

[logging]
level = "debug"
"#;

/// Load widget configuration
///
/// Uses `source` when given (e.g. a config embedded by the host page),
/// otherwise the embedded default.
pub fn load_config(source: Option<&str>) -> anyhow::Result<Config> {
    match source {
        Some(contents) => {
            log::info!("Loading widget config from provided source");
            Ok(toml::from_str(contents)?)
        }
        None => {
            log::info!("Using default embedded configuration");
            Ok(toml::from_str(DEFAULT_CONFIG)?)
        }
    }
}
