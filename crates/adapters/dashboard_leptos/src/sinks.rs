//! Display ports backed by Leptos signals.
//!
//! Controllers write through these; components read the same signals.

use geomon_app::notice::Notice;
use geomon_app::ports::{NoticeSink, ReadoutSink, SettingsForm, TextSink};
use geomon_domain::settings::{SettingsConfig, SettingsInput};
use geomon_domain::snapshot::Field;
use leptos::prelude::*;

/// Placeholder shown before the first reading arrives.
const NO_READING: &str = "--";

/// One text per realtime field, indexed by [`Field::index`].
#[derive(Debug, Clone, Copy)]
pub struct SignalReadout(RwSignal<Vec<String>>);

impl SignalReadout {
    pub fn new() -> Self {
        Self(RwSignal::new(vec![NO_READING.to_string(); Field::ALL.len()]))
    }

    /// Current text of `field`, tracked.
    pub fn text(&self, field: Field) -> String {
        self.0
            .with(|texts| texts.get(field.index()).cloned().unwrap_or_default())
    }
}

impl Default for SignalReadout {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadoutSink for SignalReadout {
    fn show(&self, field: Field, text: String) {
        self.0.update(|texts| {
            if let Some(slot) = texts.get_mut(field.index()) {
                *slot = text;
            }
        });
    }
}

/// A single reactive line of text.
#[derive(Debug, Clone, Copy)]
pub struct SignalText(pub RwSignal<String>);

impl SignalText {
    pub fn new(initial: &str) -> Self {
        Self(RwSignal::new(initial.to_string()))
    }
}

impl TextSink for SignalText {
    fn set_text(&self, text: String) {
        self.0.set(text);
    }
}

/// The settings page message area.
#[derive(Debug, Clone, Copy)]
pub struct SignalNotice(pub RwSignal<Notice>);

impl SignalNotice {
    pub fn new() -> Self {
        Self(RwSignal::new(Notice::Idle))
    }
}

impl Default for SignalNotice {
    fn default() -> Self {
        Self::new()
    }
}

impl NoticeSink for SignalNotice {
    fn show_notice(&self, notice: &Notice) {
        self.0.set(notice.clone());
    }
}

/// The four settings inputs, bound to `<input>` values.
#[derive(Debug, Clone, Copy)]
pub struct SignalForm {
    pub low_delta_t_threshold: RwSignal<String>,
    pub low_delta_t_duration_s: RwSignal<String>,
    pub no_airflow_duration_s: RwSignal<String>,
    pub temp_sensor_disconnected_duration_s: RwSignal<String>,
}

impl SignalForm {
    pub fn new() -> Self {
        Self {
            low_delta_t_threshold: RwSignal::new(String::new()),
            low_delta_t_duration_s: RwSignal::new(String::new()),
            no_airflow_duration_s: RwSignal::new(String::new()),
            temp_sensor_disconnected_duration_s: RwSignal::new(String::new()),
        }
    }
}

impl Default for SignalForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsForm for SignalForm {
    fn populate(&self, config: &SettingsConfig) {
        let input = SettingsInput::from(config);
        self.low_delta_t_threshold.set(input.low_delta_t_threshold);
        self.low_delta_t_duration_s.set(input.low_delta_t_duration_s);
        self.no_airflow_duration_s.set(input.no_airflow_duration_s);
        self.temp_sensor_disconnected_duration_s
            .set(input.temp_sensor_disconnected_duration_s);
    }

    fn read(&self) -> SettingsInput {
        SettingsInput {
            low_delta_t_threshold: self.low_delta_t_threshold.get_untracked(),
            low_delta_t_duration_s: self.low_delta_t_duration_s.get_untracked(),
            no_airflow_duration_s: self.no_airflow_duration_s.get_untracked(),
            temp_sensor_disconnected_duration_s: self
                .temp_sensor_disconnected_duration_s
                .get_untracked(),
        }
    }
}
