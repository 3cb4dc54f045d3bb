//! App Configuration
//!
//! Optional JSON block embedded in `index.html`:
//!
//! ```html
//! <script id="app-config" type="application/json">
//!   { "storage_key": "tasks", "log_level": "debug" }
//! </script>
//! ```

use log::LevelFilter;
use serde::Deserialize;

use crate::error::ConfigError;

/// Id of the `<script>` element holding the config JSON
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// localStorage key holding the JSON array of task texts
    pub storage_key: String,
    /// `log` level name (error, warn, info, debug, trace, off)
    pub log_level: String,
    /// Number of recent log lines kept in memory
    pub log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "tasks".to_string(),
            log_level: "info".to_string(),
            log_capacity: 200,
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read the config block from the current document
    pub fn from_document() -> Result<Self, ConfigError> {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
            .ok_or(ConfigError::Missing(CONFIG_ELEMENT_ID))?;
        Self::from_json(&raw)
    }

    /// Parsed log level; unknown names fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.storage_key, "tasks");
        assert_eq!(config.level_filter(), LevelFilter::Info);
        assert_eq!(config.log_capacity, 200);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{ "storage_key": "work-tasks" }"#).unwrap();
        assert_eq!(config.storage_key, "work-tasks");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_capacity, 200);
    }

    #[test]
    fn test_level_parsing() {
        let config = AppConfig::from_json(r#"{ "log_level": "debug" }"#).unwrap();
        assert_eq!(config.level_filter(), LevelFilter::Debug);

        let config = AppConfig::from_json(r#"{ "log_level": "loud" }"#).unwrap();
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_malformed_json() {
        let err = AppConfig::from_json("{ storage_key: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
