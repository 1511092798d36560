//! # geomon-domain
//!
//! Pure domain model for the geomon HVAC/geothermal monitoring dashboard.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps, number formatting
//! - Define the device's wire types: **Snapshot**, **`HistoryPoint`**, **`StatusInfo`**,
//!   **`SettingsConfig`**
//! - Humanize device uptime
//! - Parse and validate settings edits
//! - Derive chart series from aggregated history
//! - Resolve API endpoints from the page's host name
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod format;
pub mod time;

pub mod chart;
pub mod endpoint;
pub mod history;
pub mod settings;
pub mod snapshot;
pub mod status;
