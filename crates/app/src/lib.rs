//! # geomon-app
//!
//! Application layer: page controllers and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `DeviceApi`: the device's HTTP API
//!   - `Timer`: delayed wake-ups for polling and notice expiry
//!   - display sinks (`ReadoutSink`, `TextSink`, `NoticeSink`, `SettingsForm`)
//!   - `ChartFactory` / `ChartHandle`: the history chart surface
//!   - `Prompt`: confirmation dialogs and alerts
//! - Provide the page controllers: realtime status, history chart, uptime,
//!   log viewer and settings editor
//! - Provide the repeating [`poller::Poller`] that drives the polling pages
//! - Load and validate the dashboard configuration
//!
//! ## Dependency rule
//! Depends on `geomon-domain` only. Never imports adapter crates or browser
//! APIs. Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod error;
pub mod notice;
pub mod poller;
pub mod ports;
pub mod services;

#[cfg(test)]
mod testing;
