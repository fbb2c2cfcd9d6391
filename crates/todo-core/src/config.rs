//! Front End Configuration

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_BANNER_TIMEOUT: Duration = Duration::from_secs(3);
pub const DEFAULT_THEME_KEY: &str = "theme";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the todo API, no trailing slash required
    pub api_base: String,
    /// How long an error banner stays up
    pub banner_timeout: Duration,
    /// Storage key of the theme preference
    pub theme_key: String,
    pub log_level: log::LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            banner_timeout: DEFAULT_BANNER_TIMEOUT,
            theme_key: DEFAULT_THEME_KEY.to_string(),
            log_level: log::LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Build from optional overrides (typically `option_env!` values).
    /// Blank or unparsable values keep the defaults.
    pub fn from_overrides(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
            config.api_base = base.to_string();
        }
        if let Some(level) = log_level.and_then(|l| l.trim().parse().ok()) {
            config.log_level = level;
        }
        config
    }
}
