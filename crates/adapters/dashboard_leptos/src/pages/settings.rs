//! Alerting settings and device lifecycle commands.

use std::rc::Rc;

use geomon_app::services::settings::SettingsEditor;
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::Dashboard;
use crate::browser::{BrowserPrompt, GlooTimer};
use crate::components::NoticeArea;
use crate::sinks::{SignalForm, SignalNotice};

/// A labelled numeric input bound to `value`.
#[component]
fn SettingsField(
    label: &'static str,
    /// Form field name, also used as the element id.
    name: &'static str,
    step: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=name>{label}</label>
            <input
                type="number"
                id=name
                name=name
                step=step
                required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn Settings() -> impl IntoView {
    let Dashboard { api, config } = expect_context::<Dashboard>();
    let form = SignalForm::new();
    let notice = SignalNotice::new();
    let editor = StoredValue::new_local(Rc::new(SettingsEditor::new(
        api,
        form,
        notice,
        BrowserPrompt,
        GlooTimer,
        config.notices.success_timeout(),
    )));

    let load = editor.get_value();
    spawn_local(async move { load.load().await });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let editor = editor.get_value();
        spawn_local(async move { editor.submit().await });
    };
    let on_reboot = move |_: MouseEvent| {
        let editor = editor.get_value();
        spawn_local(async move {
            editor.reboot().await;
        });
    };
    let on_factory_reset = move |_: MouseEvent| {
        let editor = editor.get_value();
        spawn_local(async move {
            editor.factory_reset().await;
        });
    };

    view! {
        <div class="settings-page">
            <h1>"Settings"</h1>
            <form id="settingsForm" on:submit=on_submit>
                <SettingsField
                    label="Low Delta T Threshold (°C)"
                    name="lowDeltaTThreshold"
                    step="0.1"
                    value=form.low_delta_t_threshold
                />
                <SettingsField
                    label="Low Delta T Duration (s)"
                    name="lowDeltaTDurationS"
                    step="1"
                    value=form.low_delta_t_duration_s
                />
                <SettingsField
                    label="No Airflow Duration (s)"
                    name="noAirflowDurationS"
                    step="1"
                    value=form.no_airflow_duration_s
                />
                <SettingsField
                    label="Temp Sensor Disconnected Duration (s)"
                    name="tempSensorDisconnectedDurationS"
                    step="1"
                    value=form.temp_sensor_disconnected_duration_s
                />
                <button type="submit" class="btn btn-primary">"Save Settings"</button>
            </form>
            <NoticeArea notice=notice.0/>
            <section class="device-actions">
                <h2>"Device"</h2>
                <button class="btn" on:click=on_reboot>"Reboot Device"</button>
                <button class="btn btn-danger" on:click=on_factory_reset>"Factory Reset"</button>
            </section>
        </div>
    }
}
