//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.

/// A settings edit that violates the device's accepted ranges, or a form value
/// that is not a number at all.
///
/// The messages match the ones the device itself reports for the same
/// violations, so the user sees the same text whether the check happens in
/// the browser or on the device.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid Delta T threshold. Must be between 0.0 and 20.0.")]
    DeltaTThreshold,
    #[error("Invalid Delta T duration. Must be between 10 and 3600 seconds.")]
    DeltaTDuration,
    #[error("Invalid No Airflow duration. Must be between 10 and 3600 seconds.")]
    NoAirflowDuration,
    #[error("Invalid Temp Sensor Disconnected duration. Must be between 10 and 3600 seconds.")]
    SensorDisconnectedDuration,
    /// A form field could not be parsed into the expected numeric type.
    #[error("Invalid value for {field}: '{value}' is not a number.")]
    NotANumber { field: &'static str, value: String },
}

/// A history timestamp that is neither epoch milliseconds nor RFC 3339.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    #[error("timestamp {0} ms is out of range")]
    OutOfRange(i64),
    #[error("invalid timestamp '{0}'")]
    Unparseable(String),
}
