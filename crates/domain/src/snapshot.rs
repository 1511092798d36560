//! Snapshot: the device's instantaneous sensor and actuator readings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::{CURRENT_DECIMALS, TEMPERATURE_DECIMALS, fixed};

/// Running state of a fan, compressor or pump, derived by the device from its current.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComponentStatus {
    On,
    Off,
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for ComponentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::On => "ON",
            Self::Off => "OFF",
            Self::Unknown => "UNKNOWN",
        })
    }
}

/// Whether the device detects airflow across the coil.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AirflowStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "N/A")]
    NotAvailable,
    #[default]
    #[serde(other, rename = "UNKNOWN")]
    Unknown,
}

impl fmt::Display for AirflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ok => "OK",
            Self::NotAvailable => "N/A",
            Self::Unknown => "UNKNOWN",
        })
    }
}

/// The alert the device is currently raising, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertStatus {
    None,
    FanNoAirflow,
    LowDeltaT,
    TempSensorDisconnected,
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "NONE",
            Self::FanNoAirflow => "FAN_NO_AIRFLOW",
            Self::LowDeltaT => "LOW_DELTA_T",
            Self::TempSensorDisconnected => "TEMP_SENSOR_DISCONNECTED",
            Self::Unknown => "UNKNOWN",
        })
    }
}

/// Instantaneous device state as returned by the `data` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub return_temp_c: f64,
    pub supply_temp_c: f64,
    pub delta_t: f64,
    pub fan_status: ComponentStatus,
    pub fan_amps: f64,
    pub compressor_status: ComponentStatus,
    pub compressor_amps: f64,
    pub geo_pumps_status: ComponentStatus,
    pub geo_pumps_amps: f64,
    pub airflow_status: AirflowStatus,
    pub alert_status: AlertStatus,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub build_date: String,
}

/// A display target on the realtime status page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ReturnTemp,
    SupplyTemp,
    DeltaT,
    FanStatus,
    FanAmps,
    CompressorStatus,
    CompressorAmps,
    PumpsStatus,
    PumpsAmps,
    Airflow,
    Alerts,
    Version,
    BuildDate,
}

impl Field {
    /// Every field, in page order.
    pub const ALL: [Field; 13] = [
        Field::ReturnTemp,
        Field::SupplyTemp,
        Field::DeltaT,
        Field::FanStatus,
        Field::FanAmps,
        Field::CompressorStatus,
        Field::CompressorAmps,
        Field::PumpsStatus,
        Field::PumpsAmps,
        Field::Airflow,
        Field::Alerts,
        Field::Version,
        Field::BuildDate,
    ];

    /// Element id of the target on the page.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::ReturnTemp => "returnTemp",
            Self::SupplyTemp => "supplyTemp",
            Self::DeltaT => "deltaT",
            Self::FanStatus => "fanStatus",
            Self::FanAmps => "fanAmps",
            Self::CompressorStatus => "compressorStatus",
            Self::CompressorAmps => "compressorAmps",
            Self::PumpsStatus => "pumpsStatus",
            Self::PumpsAmps => "pumpsAmps",
            Self::Airflow => "airflow",
            Self::Alerts => "alerts",
            Self::Version => "version",
            Self::BuildDate => "buildDate",
        }
    }

    /// Position of the field in [`Field::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl Snapshot {
    /// Display text for a single field.
    #[must_use]
    pub fn text(&self, field: Field) -> String {
        match field {
            Field::ReturnTemp => fixed(self.return_temp_c, TEMPERATURE_DECIMALS),
            Field::SupplyTemp => fixed(self.supply_temp_c, TEMPERATURE_DECIMALS),
            Field::DeltaT => fixed(self.delta_t, TEMPERATURE_DECIMALS),
            Field::FanStatus => self.fan_status.to_string(),
            Field::FanAmps => fixed(self.fan_amps, CURRENT_DECIMALS),
            Field::CompressorStatus => self.compressor_status.to_string(),
            Field::CompressorAmps => fixed(self.compressor_amps, CURRENT_DECIMALS),
            Field::PumpsStatus => self.geo_pumps_status.to_string(),
            Field::PumpsAmps => fixed(self.geo_pumps_amps, CURRENT_DECIMALS),
            Field::Airflow => self.airflow_status.to_string(),
            Field::Alerts => self.alert_status.to_string(),
            Field::Version => self.version.clone(),
            Field::BuildDate => self.build_date.clone(),
        }
    }

    /// Display text for every field, in page order.
    pub fn readout(&self) -> impl Iterator<Item = (Field, String)> + '_ {
        Field::ALL.into_iter().map(|field| (field, self.text(field)))
    }
}
