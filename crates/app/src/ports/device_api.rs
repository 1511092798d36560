//! Device API port: the HTTP API exposed by the HVAC controller.

use std::future::Future;
use std::rc::Rc;

use geomon_domain::history::HistoryPoint;
use geomon_domain::settings::SettingsConfig;
use geomon_domain::snapshot::Snapshot;
use geomon_domain::status::StatusInfo;

use crate::error::{ApiError, MessageBody};

/// Confirmation returned by a successful settings save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveReceipt {
    /// The device's confirmation text, if it sent one.
    pub message: Option<String>,
}

impl SaveReceipt {
    /// Read the confirmation from a successful save's raw body.
    ///
    /// A JSON object without a usable `message` carries no text.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the body is not a JSON object.
    pub fn from_body(body: &str) -> Result<Self, ApiError> {
        let parsed: MessageBody =
            serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string()))?;
        Ok(Self {
            message: parsed.message.filter(|message| !message.trim().is_empty()),
        })
    }
}

/// Calls against the device's HTTP API.
///
/// Implementations map transport failures to [`ApiError::Transport`],
/// non-success statuses to [`ApiError::Rejected`] (with the JSON `message`
/// when present) and undecodable bodies to [`ApiError::Decode`].
pub trait DeviceApi {
    /// Fetch the current [`Snapshot`].
    fn snapshot(&self) -> impl Future<Output = Result<Snapshot, ApiError>>;

    /// Fetch the aggregated history, oldest first.
    fn aggregated_history(&self) -> impl Future<Output = Result<Vec<HistoryPoint>, ApiError>>;

    /// Fetch uptime and memory status.
    fn status(&self) -> impl Future<Output = Result<StatusInfo, ApiError>>;

    /// Fetch the current alerting settings.
    fn settings(&self) -> impl Future<Output = Result<SettingsConfig, ApiError>>;

    /// Submit new alerting settings.
    fn save_settings(
        &self,
        settings: SettingsConfig,
    ) -> impl Future<Output = Result<SaveReceipt, ApiError>>;

    /// Fetch the raw log buffer.
    fn logs(&self) -> impl Future<Output = Result<String, ApiError>>;

    /// Empty the log buffer.
    fn clear_logs(&self) -> impl Future<Output = Result<(), ApiError>>;

    /// Ask the device to restart. The device may drop the connection before answering.
    fn reboot(&self) -> impl Future<Output = Result<(), ApiError>>;

    /// Ask the device to restore factory settings and restart.
    fn factory_reset(&self) -> impl Future<Output = Result<(), ApiError>>;
}

impl<T: DeviceApi> DeviceApi for Rc<T> {
    fn snapshot(&self) -> impl Future<Output = Result<Snapshot, ApiError>> {
        (**self).snapshot()
    }

    fn aggregated_history(&self) -> impl Future<Output = Result<Vec<HistoryPoint>, ApiError>> {
        (**self).aggregated_history()
    }

    fn status(&self) -> impl Future<Output = Result<StatusInfo, ApiError>> {
        (**self).status()
    }

    fn settings(&self) -> impl Future<Output = Result<SettingsConfig, ApiError>> {
        (**self).settings()
    }

    fn save_settings(
        &self,
        settings: SettingsConfig,
    ) -> impl Future<Output = Result<SaveReceipt, ApiError>> {
        (**self).save_settings(settings)
    }

    fn logs(&self) -> impl Future<Output = Result<String, ApiError>> {
        (**self).logs()
    }

    fn clear_logs(&self) -> impl Future<Output = Result<(), ApiError>> {
        (**self).clear_logs()
    }

    fn reboot(&self) -> impl Future<Output = Result<(), ApiError>> {
        (**self).reboot()
    }

    fn factory_reset(&self) -> impl Future<Output = Result<(), ApiError>> {
        (**self).factory_reset()
    }
}
