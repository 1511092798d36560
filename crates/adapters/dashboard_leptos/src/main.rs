use geomon_app::config::DashboardConfig;
use geomon_dashboard::{App, BUNDLED_CONFIG, Dashboard, browser, logging};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match DashboardConfig::from_toml_str(BUNDLED_CONFIG) {
        Ok(config) => (config, None),
        Err(err) => (DashboardConfig::default(), Some(err)),
    };
    logging::init(&config.logging.filter);
    if let Some(err) = config_error {
        tracing::warn!(error = %err, "invalid bundled configuration, using defaults");
    }

    let dashboard = Dashboard::new(config, &browser::hostname());
    leptos::mount::mount_to_body(move || view! { <App dashboard=dashboard/> });
}
