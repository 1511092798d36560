//! Fallback for paths the dashboard does not serve.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Names the unknown path and points back to the monitor's pages.
#[component]
pub fn NotFound() -> impl IntoView {
    let path = use_location().pathname;

    view! {
        <div class="not-found">
            <h1>"Unknown page"</h1>
            <p>
                "The controller has no page at "
                <code>{move || path.get()}</code>
                "."
            </p>
            <ul>
                <li><a href="/">"System status"</a></li>
                <li><a href="/logs">"Device logs"</a></li>
                <li><a href="/settings">"Alert settings"</a></li>
            </ul>
        </div>
    }
}
