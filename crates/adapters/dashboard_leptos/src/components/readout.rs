//! Live sensor readout of the status page.

use geomon_app::config::DashboardConfig;
use geomon_app::services::realtime::RealtimeStatus;
use geomon_domain::snapshot::Field;
use leptos::prelude::*;

use crate::api::HttpDeviceApi;
use crate::polling::spawn_poller;
use crate::sinks::SignalReadout;

fn label(field: Field) -> &'static str {
    match field {
        Field::ReturnTemp => "Return Temp (°C)",
        Field::SupplyTemp => "Supply Temp (°C)",
        Field::DeltaT => "Delta T (°C)",
        Field::FanStatus => "Fan",
        Field::FanAmps => "Fan Current (A)",
        Field::CompressorStatus => "Compressor",
        Field::CompressorAmps => "Compressor Current (A)",
        Field::PumpsStatus => "Geo Pumps",
        Field::PumpsAmps => "Geo Pumps Current (A)",
        Field::Airflow => "Airflow",
        Field::Alerts => "Alerts",
        Field::Version => "Firmware Version",
        Field::BuildDate => "Build Date",
    }
}

/// Every realtime field with its label, refreshed on the realtime interval.
#[component]
pub fn Readout(api: HttpDeviceApi, config: DashboardConfig) -> impl IntoView {
    let readout = SignalReadout::new();
    spawn_poller(
        "realtime",
        config.polling.realtime(),
        RealtimeStatus::new(api, readout),
    );

    view! {
        <table class="readout">
            <tbody>
                {Field::ALL
                    .into_iter()
                    .map(|field| {
                        view! {
                            <tr>
                                <th>{label(field)}</th>
                                <td id=field.id()>{move || readout.text(field)}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
