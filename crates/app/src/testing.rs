//! In-memory fakes of the ports, shared by the controller tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::time::Duration;

use geomon_domain::history::HistoryPoint;
use geomon_domain::settings::{SettingsConfig, SettingsInput};
use geomon_domain::snapshot::{AirflowStatus, AlertStatus, ComponentStatus, Field, Snapshot};
use geomon_domain::status::StatusInfo;

use crate::error::ApiError;
use crate::notice::Notice;
use crate::ports::{
    DeviceApi, NoticeSink, Prompt, ReadoutSink, SaveReceipt, SettingsForm, TextSink, Timer,
};

pub fn offline() -> ApiError {
    ApiError::Transport("offline".to_string())
}

pub fn sample_snapshot() -> Snapshot {
    Snapshot {
        return_temp_c: 22.456,
        supply_temp_c: 14.04,
        delta_t: 8.416,
        fan_status: ComponentStatus::On,
        fan_amps: 1.234,
        compressor_status: ComponentStatus::Off,
        compressor_amps: 0.0,
        geo_pumps_status: ComponentStatus::On,
        geo_pumps_amps: 2.5,
        airflow_status: AirflowStatus::Ok,
        alert_status: AlertStatus::None,
        version: "1.4.0".to_string(),
        build_date: "2024-05-01".to_string(),
    }
}

/// A device whose every answer is scripted and every call recorded.
pub struct FakeDevice {
    pub snapshot: RefCell<Result<Snapshot, ApiError>>,
    pub history: RefCell<Result<Vec<HistoryPoint>, ApiError>>,
    pub status: RefCell<Result<StatusInfo, ApiError>>,
    pub settings: RefCell<Result<SettingsConfig, ApiError>>,
    pub save: RefCell<Result<SaveReceipt, ApiError>>,
    pub logs: RefCell<Result<String, ApiError>>,
    pub clear: RefCell<Result<(), ApiError>>,
    pub command: RefCell<Result<(), ApiError>>,
    pub calls: RefCell<Vec<&'static str>>,
    pub saved: RefCell<Vec<SettingsConfig>>,
}

impl Default for FakeDevice {
    fn default() -> Self {
        Self {
            snapshot: RefCell::new(Ok(sample_snapshot())),
            history: RefCell::new(Ok(Vec::new())),
            status: RefCell::new(Ok(StatusInfo {
                uptime_ms: 61_000,
                free_heap_bytes: None,
            })),
            settings: RefCell::new(Ok(SettingsConfig::default())),
            save: RefCell::new(Ok(SaveReceipt::default())),
            logs: RefCell::new(Ok(String::new())),
            clear: RefCell::new(Ok(())),
            command: RefCell::new(Ok(())),
            calls: RefCell::new(Vec::new()),
            saved: RefCell::new(Vec::new()),
        }
    }
}

impl FakeDevice {
    fn record(&self, call: &'static str) {
        self.calls.borrow_mut().push(call);
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls.borrow().iter().filter(|c| **c == call).count()
    }
}

impl DeviceApi for FakeDevice {
    async fn snapshot(&self) -> Result<Snapshot, ApiError> {
        self.record("snapshot");
        self.snapshot.borrow().clone()
    }

    async fn aggregated_history(&self) -> Result<Vec<HistoryPoint>, ApiError> {
        self.record("aggregated_history");
        self.history.borrow().clone()
    }

    async fn status(&self) -> Result<StatusInfo, ApiError> {
        self.record("status");
        self.status.borrow().clone()
    }

    async fn settings(&self) -> Result<SettingsConfig, ApiError> {
        self.record("settings");
        self.settings.borrow().clone()
    }

    async fn save_settings(&self, settings: SettingsConfig) -> Result<SaveReceipt, ApiError> {
        self.record("save_settings");
        self.saved.borrow_mut().push(settings);
        self.save.borrow().clone()
    }

    async fn logs(&self) -> Result<String, ApiError> {
        self.record("logs");
        self.logs.borrow().clone()
    }

    async fn clear_logs(&self) -> Result<(), ApiError> {
        self.record("clear_logs");
        self.clear.borrow().clone()
    }

    async fn reboot(&self) -> Result<(), ApiError> {
        self.record("reboot");
        self.command.borrow().clone()
    }

    async fn factory_reset(&self) -> Result<(), ApiError> {
        self.record("factory_reset");
        self.command.borrow().clone()
    }
}

/// Resolves every sleep at once and remembers the requested durations.
#[derive(Default)]
pub struct FakeTimer {
    pub sleeps: RefCell<Vec<Duration>>,
}

impl Timer for FakeTimer {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.borrow_mut().push(duration);
    }
}

#[derive(Default)]
pub struct RecordingReadout {
    pub shown: RefCell<HashMap<Field, String>>,
    pub writes: Cell<usize>,
}

impl ReadoutSink for RecordingReadout {
    fn show(&self, field: Field, text: String) {
        self.writes.set(self.writes.get() + 1);
        self.shown.borrow_mut().insert(field, text);
    }
}

#[derive(Default)]
pub struct RecordingText {
    pub texts: RefCell<Vec<String>>,
}

impl RecordingText {
    pub fn last(&self) -> Option<String> {
        self.texts.borrow().last().cloned()
    }
}

impl TextSink for RecordingText {
    fn set_text(&self, text: String) {
        self.texts.borrow_mut().push(text);
    }
}

#[derive(Default)]
pub struct RecordingNotices {
    pub shown: RefCell<Vec<Notice>>,
}

impl RecordingNotices {
    pub fn last(&self) -> Option<Notice> {
        self.shown.borrow().last().cloned()
    }
}

impl NoticeSink for RecordingNotices {
    fn show_notice(&self, notice: &Notice) {
        self.shown.borrow_mut().push(notice.clone());
    }
}

#[derive(Default)]
pub struct FakeForm {
    pub populated: RefCell<Option<SettingsConfig>>,
    pub input: RefCell<SettingsInput>,
}

impl FakeForm {
    pub fn filled(input: SettingsInput) -> Self {
        Self {
            populated: RefCell::new(None),
            input: RefCell::new(input),
        }
    }
}

impl SettingsForm for FakeForm {
    fn populate(&self, config: &SettingsConfig) {
        *self.populated.borrow_mut() = Some(*config);
    }

    fn read(&self) -> SettingsInput {
        self.input.borrow().clone()
    }
}

/// Answers every confirmation with `answer` and records what was asked.
pub struct ScriptedPrompt {
    pub answer: Cell<bool>,
    pub asked: RefCell<Vec<String>>,
    pub alerts: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer: Cell::new(answer),
            asked: RefCell::new(Vec::new()),
            alerts: RefCell::new(Vec::new()),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.asked.borrow_mut().push(message.to_string());
        self.answer.get()
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}
