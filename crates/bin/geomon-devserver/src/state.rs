//! In-memory device backing the `/mock` API.

use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::Instant;

use geomon_domain::error::ValidationError;
use geomon_domain::settings::{SettingsConfig, SettingsPatch};

/// Mutable device state: alert settings and the log buffer.
///
/// Log lines carry the milliseconds since the device "booted", the way the
/// firmware stamps them.
#[derive(Debug)]
pub struct MockDevice {
    settings: RwLock<SettingsConfig>,
    logs: Mutex<Vec<String>>,
    booted_at: Instant,
}

impl Default for MockDevice {
    fn default() -> Self {
        Self::new(SettingsConfig::default())
    }
}

impl MockDevice {
    /// Boot a device with `settings`.
    #[must_use]
    pub fn new(settings: SettingsConfig) -> Self {
        let device = Self {
            settings: RwLock::new(settings),
            logs: Mutex::new(Vec::new()),
            booted_at: Instant::now(),
        };
        device.log("Device booted");
        device
    }

    /// Current settings.
    pub fn settings(&self) -> SettingsConfig {
        *self.settings.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply a partial update; nothing changes when any field is out of range.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first offending field.
    pub fn apply(&self, patch: &SettingsPatch) -> Result<SettingsConfig, ValidationError> {
        let mut settings = self.settings.write().unwrap_or_else(PoisonError::into_inner);
        let updated = patch.apply_to(&settings)?;
        *settings = updated;
        drop(settings);
        self.log("Settings saved");
        Ok(updated)
    }

    /// Restore factory settings.
    pub fn factory_reset(&self) {
        *self.settings.write().unwrap_or_else(PoisonError::into_inner) = SettingsConfig::default();
        self.log("Factory reset requested");
    }

    /// Append a timestamped line to the log buffer.
    pub fn log(&self, message: &str) {
        let millis = self.booted_at.elapsed().as_millis();
        self.logs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(format!("[{millis}] {message}"));
    }

    /// The log buffer as one newline-separated text.
    pub fn logs(&self) -> String {
        let logs = self.logs.lock().unwrap_or_else(PoisonError::into_inner);
        let mut text = logs.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        text
    }

    pub fn clear_logs(&self) {
        self.logs.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

/// State shared by the mock handlers.
pub type MockState = Arc<MockDevice>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_with_boot_line() {
        let device = MockDevice::default();
        let logs = device.logs();
        assert!(logs.starts_with('['));
        assert!(logs.ends_with("] Device booted\n"));
    }

    #[test]
    fn should_apply_valid_patch() {
        let device = MockDevice::default();
        let patch = SettingsPatch {
            no_airflow_duration_s: Some(120),
            ..SettingsPatch::default()
        };
        let updated = device.apply(&patch).unwrap();
        assert_eq!(updated.no_airflow_duration_s, 120);
        assert_eq!(device.settings(), updated);
        assert!(device.logs().contains("Settings saved"));
    }

    #[test]
    fn should_keep_settings_when_patch_is_invalid() {
        let device = MockDevice::default();
        let patch = SettingsPatch {
            no_airflow_duration_s: Some(120),
            low_delta_t_threshold: Some(25.0),
            ..SettingsPatch::default()
        };
        assert_eq!(device.apply(&patch), Err(ValidationError::DeltaTThreshold));
        assert_eq!(device.settings(), SettingsConfig::default());
    }

    #[test]
    fn should_restore_defaults_on_factory_reset() {
        let device = MockDevice::new(SettingsConfig {
            low_delta_t_duration_s: 900,
            ..SettingsConfig::default()
        });
        device.factory_reset();
        assert_eq!(device.settings(), SettingsConfig::default());
    }

    #[test]
    fn should_return_empty_text_after_clear() {
        let device = MockDevice::default();
        device.clear_logs();
        assert_eq!(device.logs(), "");
    }
}
