use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav>
            <ul>
                <li><a href="/">"Status"</a></li>
                <li><a href="/logs">"Logs"</a></li>
                <li><a href="/settings">"Settings"</a></li>
            </ul>
        </nav>
    }
}
