//! Settings page message area.

use geomon_app::notice::Notice;
use leptos::prelude::*;

/// Renders the current [`Notice`]; hidden text and plain styling when idle.
#[component]
pub fn NoticeArea(notice: RwSignal<Notice>) -> impl IntoView {
    view! {
        <div id="message" class=move || notice.with(Notice::css_class)>
            {move || notice.with(|current| current.text().to_string())}
        </div>
    }
}
