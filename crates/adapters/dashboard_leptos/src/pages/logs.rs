//! System log viewer.

use std::rc::Rc;

use geomon_app::services::logs::{self, LogViewer};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::Dashboard;
use crate::browser::BrowserPrompt;
use crate::sinks::SignalText;

#[component]
pub fn Logs() -> impl IntoView {
    let Dashboard { api, .. } = expect_context::<Dashboard>();
    let content = SignalText::new(logs::LOADING);
    let viewer = StoredValue::new_local(Rc::new(LogViewer::new(api, content, BrowserPrompt)));

    let refresh = move || {
        let viewer = viewer.get_value();
        spawn_local(async move { viewer.refresh().await });
    };
    let clear = move || {
        let viewer = viewer.get_value();
        spawn_local(async move {
            let outcome = viewer.clear().await;
            tracing::debug!(?outcome, "log clear finished");
        });
    };
    refresh();

    view! {
        <div class="logs-page">
            <h1>"System Logs"</h1>
            <div class="actions">
                <button class="btn" on:click=move |_| refresh()>"Refresh"</button>
                <button class="btn btn-danger" on:click=move |_| clear()>"Clear Logs"</button>
            </div>
            <pre id="logContent">{move || content.0.get()}</pre>
        </div>
    }
}
