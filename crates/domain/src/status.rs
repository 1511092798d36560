//! Device status and uptime humanization.

use serde::{Deserialize, Serialize};

const MS_PER_SECOND: u64 = 1_000;
const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Payload of the `status` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusInfo {
    /// Milliseconds since the device booted.
    pub uptime_ms: u64,
    /// Free heap reported by newer firmware.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_heap_bytes: Option<u64>,
}

impl StatusInfo {
    /// Humanized uptime, see [`format_uptime`].
    #[must_use]
    pub fn uptime_text(&self) -> String {
        format_uptime(self.uptime_ms)
    }

    /// Free heap in kilobytes with one decimal, when reported.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn free_heap_text(&self) -> Option<String> {
        self.free_heap_bytes
            .map(|bytes| format!("{:.1} KB free", bytes as f64 / 1024.0))
    }
}

/// Render a millisecond uptime as its non-zero day/hour/minute/second
/// components, largest first (`"2d 3h 5m"`).
///
/// Sub-second uptimes render as `"<ms> ms"`, except zero which renders as `"0s"`.
#[must_use]
pub fn format_uptime(uptime_ms: u64) -> String {
    if uptime_ms == 0 {
        return "0s".to_string();
    }
    if uptime_ms < MS_PER_SECOND {
        return format!("{uptime_ms} ms");
    }

    let total_seconds = uptime_ms / MS_PER_SECOND;
    let units = [
        (total_seconds / SECONDS_PER_DAY, 'd'),
        (total_seconds % SECONDS_PER_DAY / SECONDS_PER_HOUR, 'h'),
        (total_seconds % SECONDS_PER_HOUR / SECONDS_PER_MINUTE, 'm'),
        (total_seconds % SECONDS_PER_MINUTE, 's'),
    ];

    units
        .iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| format!("{value}{unit}"))
        .collect::<Vec<_>>()
        .join(" ")
}
