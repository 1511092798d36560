//! Alerting settings: thresholds and durations the device uses to raise alerts.

use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Accepted low delta-T threshold, in °C.
pub const THRESHOLD_RANGE: RangeInclusive<f32> = 0.0..=20.0;

/// Accepted alert durations, in seconds.
pub const DURATION_RANGE: RangeInclusive<u32> = 10..=3600;

/// Runtime-configurable alerting parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsConfig {
    /// Delta-T below which the "low delta-T" timer starts.
    pub low_delta_t_threshold: f32,
    /// How long delta-T must stay low before alerting.
    pub low_delta_t_duration_s: u32,
    /// How long the fan may run without airflow before alerting.
    pub no_airflow_duration_s: u32,
    /// How long a temperature sensor may be missing before alerting.
    pub temp_sensor_disconnected_duration_s: u32,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            low_delta_t_threshold: 2.0,
            low_delta_t_duration_s: 300,
            no_airflow_duration_s: 60,
            temp_sensor_disconnected_duration_s: 60,
        }
    }
}

impl SettingsConfig {
    /// Check every field against the ranges the device accepts.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first field out of range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_threshold(self.low_delta_t_threshold)?;
        check_duration(self.low_delta_t_duration_s, ValidationError::DeltaTDuration)?;
        check_duration(self.no_airflow_duration_s, ValidationError::NoAirflowDuration)?;
        check_duration(
            self.temp_sensor_disconnected_duration_s,
            ValidationError::SensorDisconnectedDuration,
        )?;
        Ok(())
    }
}

fn check_threshold(value: f32) -> Result<(), ValidationError> {
    if THRESHOLD_RANGE.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::DeltaTThreshold)
    }
}

fn check_duration(value: u32, err: ValidationError) -> Result<(), ValidationError> {
    if DURATION_RANGE.contains(&value) {
        Ok(())
    } else {
        Err(err)
    }
}

/// A partial settings update: absent fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    pub low_delta_t_threshold: Option<f32>,
    pub low_delta_t_duration_s: Option<u32>,
    pub no_airflow_duration_s: Option<u32>,
    pub temp_sensor_disconnected_duration_s: Option<u32>,
}

impl SettingsPatch {
    /// Apply the present fields on top of `current`.
    ///
    /// Either every present field is valid and the merged config is returned,
    /// or nothing is applied.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first present field out of range.
    pub fn apply_to(&self, current: &SettingsConfig) -> Result<SettingsConfig, ValidationError> {
        let merged = SettingsConfig {
            low_delta_t_threshold: self
                .low_delta_t_threshold
                .unwrap_or(current.low_delta_t_threshold),
            low_delta_t_duration_s: self
                .low_delta_t_duration_s
                .unwrap_or(current.low_delta_t_duration_s),
            no_airflow_duration_s: self
                .no_airflow_duration_s
                .unwrap_or(current.no_airflow_duration_s),
            temp_sensor_disconnected_duration_s: self
                .temp_sensor_disconnected_duration_s
                .unwrap_or(current.temp_sensor_disconnected_duration_s),
        };
        merged.validate()?;
        Ok(merged)
    }
}

impl From<SettingsConfig> for SettingsPatch {
    fn from(config: SettingsConfig) -> Self {
        Self {
            low_delta_t_threshold: Some(config.low_delta_t_threshold),
            low_delta_t_duration_s: Some(config.low_delta_t_duration_s),
            no_airflow_duration_s: Some(config.no_airflow_duration_s),
            temp_sensor_disconnected_duration_s: Some(config.temp_sensor_disconnected_duration_s),
        }
    }
}

/// Raw text of the settings form, one entry per input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsInput {
    pub low_delta_t_threshold: String,
    pub low_delta_t_duration_s: String,
    pub no_airflow_duration_s: String,
    pub temp_sensor_disconnected_duration_s: String,
}

impl SettingsInput {
    /// Parse the form into typed settings and check them.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotANumber`] when an input does not parse
    /// (float for the threshold, unsigned integer for durations), or a range
    /// error from [`SettingsConfig::validate`].
    pub fn parse(&self) -> Result<SettingsConfig, ValidationError> {
        let config = SettingsConfig {
            low_delta_t_threshold: parse_field("lowDeltaTThreshold", &self.low_delta_t_threshold)?,
            low_delta_t_duration_s: parse_field("lowDeltaTDurationS", &self.low_delta_t_duration_s)?,
            no_airflow_duration_s: parse_field("noAirflowDurationS", &self.no_airflow_duration_s)?,
            temp_sensor_disconnected_duration_s: parse_field(
                "tempSensorDisconnectedDurationS",
                &self.temp_sensor_disconnected_duration_s,
            )?,
        };
        config.validate()?;
        Ok(config)
    }
}

impl From<&SettingsConfig> for SettingsInput {
    fn from(config: &SettingsConfig) -> Self {
        Self {
            low_delta_t_threshold: config.low_delta_t_threshold.to_string(),
            low_delta_t_duration_s: config.low_delta_t_duration_s.to_string(),
            no_airflow_duration_s: config.no_airflow_duration_s.to_string(),
            temp_sensor_disconnected_duration_s: config
                .temp_sensor_disconnected_duration_s
                .to_string(),
        }
    }
}

fn parse_field<T: FromStr>(field: &'static str, raw: &str) -> Result<T, ValidationError> {
    raw.trim().parse().map_err(|_| ValidationError::NotANumber {
        field,
        value: raw.to_string(),
    })
}
