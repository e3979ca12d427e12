use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// User preferences for the terminal UI
///
/// Only presentation and logging are configurable; suppliers are never
/// written to disk.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Title shown above the logo
    pub title: String,
    /// Event polling interval in milliseconds
    pub tick_rate_ms: u64,
    /// Default tracing filter, overridden by RUST_LOG
    pub log_level: String,
    /// Log file path; logging is disabled when unset
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Projeto RGP0023".to_string(),
            tick_rate_ms: 100,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".supplier-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the config file, if there is a readable one
    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Option<Config> {
        serde_json::from_str(contents).ok()
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.title, "Projeto RGP0023");
        assert_eq!(config.tick_rate(), Duration::from_millis(100));
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{ "title": "Fornecedores" }"#).unwrap();
        assert_eq!(config.title, "Fornecedores");
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_log_file_path() {
        let config =
            Config::from_json(r#"{ "log_file": "/tmp/supplier-tui.log", "log_level": "debug" }"#)
                .unwrap();
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/supplier-tui.log")));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_json() {
        assert!(Config::from_json("not json").is_none());
    }

    #[test]
    fn test_zero_tick_rate_is_clamped() {
        let config = Config {
            tick_rate_ms: 0,
            ..Config::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(1));
    }
}
