//! Dashboard configuration: bundled TOML with per-field defaults.
//!
//! Every section and field is optional; a missing value takes its default,
//! so an empty document is a valid configuration.

use std::time::Duration;

use geomon_domain::endpoint::EndpointConfig;
use serde::Deserialize;

/// Top-level dashboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Endpoint selection.
    pub api: EndpointConfig,
    /// Polling intervals.
    pub polling: PollingConfig,
    /// Settings page notices.
    pub notices: NoticeConfig,
    /// Browser console logging.
    pub logging: LoggingConfig,
}

/// Polling intervals, in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    pub realtime_secs: u64,
    pub history_secs: u64,
    pub uptime_secs: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            realtime_secs: 5,
            history_secs: 60,
            uptime_secs: 15,
        }
    }
}

impl PollingConfig {
    #[must_use]
    pub fn realtime(&self) -> Duration {
        Duration::from_secs(self.realtime_secs)
    }

    #[must_use]
    pub fn history(&self) -> Duration {
        Duration::from_secs(self.history_secs)
    }

    #[must_use]
    pub fn uptime(&self) -> Duration {
        Duration::from_secs(self.uptime_secs)
    }
}

/// Settings page notice behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NoticeConfig {
    /// How long a success notice stays visible.
    pub success_timeout_ms: u64,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            success_timeout_ms: 3_000,
        }
    }
}

impl NoticeConfig {
    #[must_use]
    pub fn success_timeout(&self) -> Duration {
        Duration::from_millis(self.success_timeout_ms)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Validation`] for out-of-range values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check intervals and prefixes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] naming the first offending value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let intervals = [
            ("polling.realtime_secs", self.polling.realtime_secs),
            ("polling.history_secs", self.polling.history_secs),
            ("polling.uptime_secs", self.polling.uptime_secs),
            ("notices.success_timeout_ms", self.notices.success_timeout_ms),
        ];
        if let Some((name, _)) = intervals.iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::Validation(format!("{name} must be non-zero")));
        }
        if self.api.live_prefix.trim().is_empty() {
            return Err(ConfigError::Validation(
                "api.live_prefix must not be empty".to_string(),
            ));
        }
        if self.api.mock_prefix.trim().is_empty() {
            return Err(ConfigError::Validation(
                "api.mock_prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Errors that can occur when loading the dashboard configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use geomon_domain::endpoint::ApiTarget;

    use super::*;

    #[test]
    fn should_use_defaults_for_empty_document() {
        let config = DashboardConfig::from_toml_str("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.polling.realtime(), Duration::from_secs(5));
        assert_eq!(config.polling.history(), Duration::from_secs(60));
        assert_eq!(config.polling.uptime(), Duration::from_secs(15));
        assert_eq!(config.notices.success_timeout(), Duration::from_secs(3));
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn should_parse_partial_sections() {
        let toml = r#"
[api]
loopback_hosts = ["dev.local"]

[polling]
realtime_secs = 2

[logging]
filter = "geomon_app=debug"
"#;
        let config = DashboardConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.polling.realtime_secs, 2);
        assert_eq!(config.polling.history_secs, 60);
        assert_eq!(config.api.live_prefix, "/api");
        assert_eq!(config.api.resolve("dev.local").target, ApiTarget::Mock);
        assert_eq!(config.api.resolve("localhost").target, ApiTarget::Live);
        assert_eq!(config.logging.filter, "geomon_app=debug");
    }

    #[test]
    fn should_reject_zero_interval() {
        let err = DashboardConfig::from_toml_str("[polling]\nhistory_secs = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref msg) if msg.contains("history_secs")));
    }

    #[test]
    fn should_reject_empty_prefix() {
        let err = DashboardConfig::from_toml_str("[api]\nlive_prefix = \" \"").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn should_report_malformed_toml() {
        let err = DashboardConfig::from_toml_str("[polling\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
