//! Aggregated history: time-bucketed averages kept by the device.

use serde::{Deserialize, Deserializer, Serialize};

use crate::time::{self, Timestamp};

/// One bucket of the device's aggregated history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPoint {
    /// Bucket time; the device sends epoch milliseconds, fixtures may use RFC 3339.
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: Timestamp,
    pub avg_delta_t: f64,
    pub avg_fan_amps: f64,
    pub avg_compressor_amps: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    FractionalMillis(f64),
    Text(String),
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Millis(millis) => time::from_epoch_millis(millis),
        #[allow(clippy::cast_possible_truncation)]
        RawTimestamp::FractionalMillis(millis) => time::from_epoch_millis(millis.trunc() as i64),
        RawTimestamp::Text(text) => time::from_rfc3339(&text),
    };
    parsed.map_err(serde::de::Error::custom)
}
