//! Browser-backed ports: timers, dialogs and page facts.

use std::time::Duration;

use chrono::FixedOffset;
use geomon_app::ports::{Prompt, Timer};
use geomon_domain::time::{Timestamp, offset_from_minutes};
use gloo_timers::future::sleep;
use wasm_bindgen::JsValue;

/// [`Timer`] over `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTimer;

impl Timer for GlooTimer {
    async fn sleep(&self, duration: Duration) {
        sleep(duration).await;
    }
}

/// [`Prompt`] over `window.confirm` and `window.alert`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPrompt;

impl Prompt for BrowserPrompt {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            tracing::warn!(error = ?err, "failed to show alert");
        }
    }
}

/// Host name the page was served from, empty when unknown.
pub fn hostname() -> String {
    web_sys::window()
        .and_then(|window| window.location().hostname().ok())
        .unwrap_or_default()
}

/// The viewer's UTC offset in force at `ts`, daylight saving included.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn offset_at(ts: Timestamp) -> FixedOffset {
    let date = js_sys::Date::new(&JsValue::from_f64(ts.timestamp_millis() as f64));
    // getTimezoneOffset is minutes *behind* UTC
    let behind = date.get_timezone_offset();
    offset_from_minutes(-(behind.round() as i32))
}
