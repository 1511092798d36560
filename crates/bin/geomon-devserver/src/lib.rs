//! # geomon-devserver
//!
//! Local stand-in for the device while working on the dashboard.
//!
//! ## Responsibilities
//! - Serve the built dashboard (`trunk build` output) with an `index.html`
//!   fallback for client-side routes
//! - Serve the `/mock` API the dashboard selects on loopback hosts: static
//!   fixtures for snapshot, history and status, plus an in-memory device for
//!   settings, logs and system commands
//! - Load configuration from `geomon.toml` and the environment
//!
//! No dashboard logic lives here; settings edits go through the same
//! [`SettingsPatch`](geomon_domain::settings::SettingsPatch) validation the
//! device applies.

pub mod config;
pub mod error;
pub mod mock;
pub mod router;
pub mod state;
