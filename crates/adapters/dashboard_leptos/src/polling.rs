//! Page-scoped polling loops.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use geomon_app::poller::{PollTask, Poller};
use leptos::prelude::on_cleanup;
use leptos::task::spawn_local;

use crate::browser::GlooTimer;

/// Run `task` now and every `interval` until the current reactive owner
/// (usually the page component) is cleaned up.
pub fn spawn_poller<P>(name: &'static str, interval: Duration, task: P)
where
    P: PollTask + 'static,
{
    let mounted = Arc::new(AtomicBool::new(true));
    let on_unmount = Arc::clone(&mounted);
    on_cleanup(move || on_unmount.store(false, Ordering::Relaxed));

    spawn_local(async move {
        Poller::new(name, interval, GlooTimer)
            .run_while(task, move || mounted.load(Ordering::Relaxed))
            .await;
    });
}
