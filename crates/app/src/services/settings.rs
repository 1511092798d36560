//! Settings editor: alerting parameters and device lifecycle commands.

use std::time::Duration;

use crate::error::ApiError;
use crate::notice::{Notice, NoticeBoard, NoticeEvent};
use crate::ports::{DeviceApi, NoticeSink, Prompt, SettingsForm, Timer};

pub const SAVED: &str = "Settings saved!";
pub const SAVE_FAILED: &str = "Error saving settings.";
pub const VALIDATION_FAILED: &str = "Settings validation failed.";

pub const REBOOT_CONFIRM: &str = "Are you sure you want to reboot the device?";
pub const REBOOT_STARTED: &str = "Rebooting device...";
pub const REBOOT_FAILED: &str = "Error sending reboot command.";

pub const FACTORY_RESET_CONFIRM: &str =
    "Are you sure you want to restore factory settings? All configuration will be lost.";
pub const FACTORY_RESET_STARTED: &str = "Factory reset in progress. The device will reboot...";
pub const FACTORY_RESET_FAILED: &str = "Error sending factory reset command.";

/// A lifecycle command of the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceCommand {
    Reboot,
    FactoryReset,
}

impl DeviceCommand {
    fn confirm_text(self) -> &'static str {
        match self {
            Self::Reboot => REBOOT_CONFIRM,
            Self::FactoryReset => FACTORY_RESET_CONFIRM,
        }
    }

    fn started_text(self) -> &'static str {
        match self {
            Self::Reboot => REBOOT_STARTED,
            Self::FactoryReset => FACTORY_RESET_STARTED,
        }
    }

    fn failed_text(self) -> &'static str {
        match self {
            Self::Reboot => REBOOT_FAILED,
            Self::FactoryReset => FACTORY_RESET_FAILED,
        }
    }
}

/// Loads the settings form, submits edits and sends device commands,
/// reporting every outcome in the message area.
pub struct SettingsEditor<A, F, N, P, T> {
    api: A,
    form: F,
    notices: NoticeBoard<N>,
    prompt: P,
    timer: T,
    success_timeout: Duration,
}

impl<A, F, N, P, T> SettingsEditor<A, F, N, P, T>
where
    A: DeviceApi,
    F: SettingsForm,
    N: NoticeSink,
    P: Prompt,
    T: Timer,
{
    /// Success notices are cleared after `success_timeout`.
    pub fn new(api: A, form: F, notices: N, prompt: P, timer: T, success_timeout: Duration) -> Self {
        Self {
            api,
            form,
            notices: NoticeBoard::new(notices),
            prompt,
            timer,
            success_timeout,
        }
    }

    /// The notice currently shown.
    pub fn notice(&self) -> Notice {
        self.notices.current()
    }

    /// Fill the form with the device's current settings.
    ///
    /// A failure is only logged; the form keeps whatever it showed.
    pub async fn load(&self) {
        match self.api.settings().await {
            Ok(config) => self.form.populate(&config),
            Err(err) => tracing::error!(error = %err, "failed to fetch settings"),
        }
    }

    /// Validate the form and send it to the device.
    ///
    /// Invalid input is reported without any request. On success the
    /// confirmation stays visible for the configured timeout, unless a newer
    /// notice replaces it first.
    pub async fn submit(&self) {
        let settings = match self.form.read().parse() {
            Ok(settings) => settings,
            Err(err) => {
                tracing::debug!(error = %err, "settings form rejected");
                self.notices.dispatch(NoticeEvent::Failed(err.to_string()));
                return;
            }
        };

        let receipt = match self.api.save_settings(settings).await {
            Ok(receipt) => receipt,
            Err(err) => {
                tracing::error!(error = %err, "failed to save settings");
                self.notices.dispatch(NoticeEvent::Failed(save_error_text(&err)));
                return;
            }
        };

        tracing::info!(?settings, "settings saved");
        let text = receipt
            .message
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| SAVED.to_string());
        let ticket = self.notices.dispatch(NoticeEvent::Saved(text));
        self.timer.sleep(self.success_timeout).await;
        self.notices.expire(ticket);
    }

    /// Ask the device to restart, after confirmation.
    ///
    /// Returns `false` when the user declined.
    pub async fn reboot(&self) -> bool {
        self.send(DeviceCommand::Reboot).await
    }

    /// Ask the device to restore its factory settings, after confirmation.
    ///
    /// Returns `false` when the user declined.
    pub async fn factory_reset(&self) -> bool {
        self.send(DeviceCommand::FactoryReset).await
    }

    async fn send(&self, command: DeviceCommand) -> bool {
        if !self.prompt.confirm(command.confirm_text()) {
            return false;
        }
        self.notices
            .dispatch(NoticeEvent::CommandStarted(command.started_text().to_string()));
        let result = match command {
            DeviceCommand::Reboot => self.api.reboot().await,
            DeviceCommand::FactoryReset => self.api.factory_reset().await,
        };
        match result {
            Ok(()) => tracing::info!(?command, "device command sent"),
            Err(err) => {
                tracing::error!(?command, error = %err, "device command failed");
                self.notices
                    .dispatch(NoticeEvent::Failed(command.failed_text().to_string()));
            }
        }
        true
    }
}

fn save_error_text(err: &ApiError) -> String {
    match err {
        ApiError::Rejected { .. } => err
            .rejection_message()
            .unwrap_or(VALIDATION_FAILED)
            .to_string(),
        ApiError::Transport(_) | ApiError::Decode(_) => SAVE_FAILED.to_string(),
    }
}
