//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the page controllers and the browser.
//! They are defined here (in `app`) so that both the controllers and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! The dashboard runs on a single-threaded event loop, so none of the
//! futures returned by these ports are required to be `Send`.

pub mod chart;
pub mod device_api;
pub mod display;
pub mod timer;

pub use chart::{ChartFactory, ChartHandle};
pub use device_api::{DeviceApi, SaveReceipt};
pub use display::{NoticeSink, Prompt, ReadoutSink, SettingsForm, TextSink};
pub use timer::Timer;
