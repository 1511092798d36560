//! Device uptime and free memory.

use geomon_app::config::DashboardConfig;
use geomon_app::services::uptime::UptimeStatus;
use leptos::prelude::*;

use crate::api::HttpDeviceApi;
use crate::polling::spawn_poller;
use crate::sinks::SignalText;

#[component]
pub fn Uptime(api: HttpDeviceApi, config: DashboardConfig) -> impl IntoView {
    let uptime = SignalText::new("--");
    let heap = SignalText::new("");
    spawn_poller(
        "uptime",
        config.polling.uptime(),
        UptimeStatus::new(api, uptime, heap),
    );

    view! {
        <div class="uptime">
            <span>"Uptime: "</span>
            <span id="uptime">{move || uptime.0.get()}</span>
            <span id="freeHeap" class="secondary">{move || heap.0.get()}</span>
        </div>
    }
}
