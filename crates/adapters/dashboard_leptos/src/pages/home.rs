use leptos::prelude::*;

use crate::Dashboard;
use crate::components::{HistoryChartCanvas, Readout, Uptime};

/// Live readings, uptime and the aggregated history chart.
#[component]
pub fn Home() -> impl IntoView {
    let Dashboard { api, config } = expect_context::<Dashboard>();

    view! {
        <div class="status-page">
            <h1>"Geothermal System Status"</h1>
            <Uptime api=api.clone() config=config.clone()/>
            <Readout api=api.clone() config=config.clone()/>
            <HistoryChartCanvas api=api config=config/>
        </div>
    }
}
