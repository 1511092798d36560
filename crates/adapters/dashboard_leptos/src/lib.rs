//! # geomon-dashboard
//!
//! Browser dashboard for the geothermal controller, rendered client-side
//! with Leptos and compiled to WebAssembly.
//!
//! This crate only binds the `geomon-app` page controllers to the browser:
//! `fetch` through `gloo-net`, timers through `gloo-timers`, display targets
//! through Leptos signals and the history chart through a `plotters` canvas.

use geomon_app::config::DashboardConfig;
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
pub mod browser;
mod components;
pub mod logging;
mod pages;
mod polling;
mod sinks;

use api::HttpDeviceApi;
use components::Nav;
use pages::{Home, Logs, NotFound, Settings};

/// Configuration compiled into the binary.
pub const BUNDLED_CONFIG: &str = include_str!("../dashboard.toml");

/// Shared by every page through the Leptos context.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub api: HttpDeviceApi,
    pub config: DashboardConfig,
}

impl Dashboard {
    /// Resolve the device endpoints for a page served from `host`.
    pub fn new(config: DashboardConfig, host: &str) -> Self {
        let endpoints = config.api.resolve(host);
        tracing::info!(host, target = ?endpoints.target, "device endpoints resolved");
        Self {
            api: HttpDeviceApi::new(endpoints),
            config,
        }
    }
}

/// Root application component.
#[component]
pub fn App(dashboard: Dashboard) -> impl IntoView {
    provide_context(dashboard);

    view! {
        <Router>
            <Nav/>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=Home/>
                    <Route path=path!("logs") view=Logs/>
                    <Route path=path!("settings") view=Settings/>
                </Routes>
            </main>
        </Router>
    }
}
