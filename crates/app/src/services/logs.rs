//! Log viewer: on-demand display and clearing of the device log buffer.

use crate::error::ApiError;
use crate::ports::{DeviceApi, Prompt, TextSink};

pub const LOADING: &str = "Loading logs...";
pub const EMPTY: &str = "Log file is empty.";
pub const FETCH_FAILED: &str = "Error fetching logs.";
pub const CLEAR_CONFIRM: &str =
    "Are you sure you want to clear all system logs? This action cannot be undone.";
pub const CLEAR_FAILED: &str = "Failed to clear logs.";
pub const CLEAR_UNREACHABLE: &str = "Error sending clear logs command.";

/// Result of a clear request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// The user declined the confirmation.
    Cancelled,
    /// The device emptied its buffer and the view was refreshed.
    Cleared,
    /// The user was alerted; the displayed logs were left as they were.
    Failed,
}

/// Shows the device log and lets the user clear it.
pub struct LogViewer<A, S, P> {
    api: A,
    sink: S,
    prompt: P,
}

impl<A: DeviceApi, S: TextSink, P: Prompt> LogViewer<A, S, P> {
    pub fn new(api: A, sink: S, prompt: P) -> Self {
        Self { api, sink, prompt }
    }

    /// Show a placeholder, then the log text verbatim or a message explaining
    /// why there is none.
    pub async fn refresh(&self) {
        self.sink.set_text(LOADING.to_string());
        let text = match self.api.logs().await {
            Ok(text) if text.is_empty() => EMPTY.to_string(),
            Ok(text) => text,
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch logs");
                FETCH_FAILED.to_string()
            }
        };
        self.sink.set_text(text);
    }

    /// Ask for confirmation, clear the buffer and show the now empty log.
    pub async fn clear(&self) -> ClearOutcome {
        if !self.prompt.confirm(CLEAR_CONFIRM) {
            return ClearOutcome::Cancelled;
        }
        match self.api.clear_logs().await {
            Ok(()) => {
                tracing::info!("device logs cleared");
                self.refresh().await;
                ClearOutcome::Cleared
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to clear logs");
                let message = match err {
                    ApiError::Rejected { .. } => CLEAR_FAILED,
                    _ => CLEAR_UNREACHABLE,
                };
                self.prompt.alert(message);
                ClearOutcome::Failed
            }
        }
    }
}
