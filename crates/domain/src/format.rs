//! Fixed-precision number formatting shared by the readout and the chart.

/// Decimal places used for temperatures and delta-T.
pub const TEMPERATURE_DECIMALS: usize = 1;

/// Decimal places used for currents (amps).
pub const CURRENT_DECIMALS: usize = 2;

/// Format `value` with exactly `decimals` digits after the point.
///
/// Ties round away from zero (`21.25` → `"21.3"`), matching [`round_to`] and
/// the device's own web page, not the round-half-to-even of `{:.N}`.
#[must_use]
pub fn fixed(value: f64, decimals: usize) -> String {
    let rounded = round_to(value, decimals);
    format!("{rounded:.decimals$}")
}

/// Round `value` to `decimals` digits after the point.
#[must_use]
pub fn round_to(value: f64, decimals: usize) -> f64 {
    let exponent = i32::try_from(decimals).unwrap_or(i32::MAX);
    let factor = 10_f64.powi(exponent);
    (value * factor).round() / factor
}
