//! Repeating fetch loops.
//!
//! A [`Poller`] runs `tick → sleep(interval)` forever (or while a page is
//! mounted). A tick always finishes before the next sleep starts, so a loop
//! never overlaps with itself, and a failed tick re-arms exactly like a
//! successful one.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use crate::ports::Timer;

/// One refresh of a polling page.
pub trait PollTask {
    type Error: Display;

    /// Fetch and render once.
    fn tick(&mut self) -> impl Future<Output = Result<(), Self::Error>>;
}

/// Drives a [`PollTask`] on a fixed interval.
#[derive(Debug, Clone)]
pub struct Poller<T> {
    name: &'static str,
    interval: Duration,
    timer: T,
}

impl<T: Timer> Poller<T> {
    pub fn new(name: &'static str, interval: Duration, timer: T) -> Self {
        Self {
            name,
            interval,
            timer,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Tick immediately, then every `interval`, for as long as the program runs.
    pub async fn run<P: PollTask>(&self, task: P) {
        self.run_while(task, || true).await;
    }

    /// Like [`Poller::run`], but checks `keep_going` before each tick and
    /// stops as soon as it returns `false`.
    ///
    /// Returns the number of ticks performed.
    pub async fn run_while<P, K>(&self, mut task: P, keep_going: K) -> usize
    where
        P: PollTask,
        K: Fn() -> bool,
    {
        tracing::debug!(task = self.name, interval = ?self.interval, "poller started");
        let mut ticks = 0;
        while keep_going() {
            match task.tick().await {
                Ok(()) => tracing::trace!(task = self.name, "tick succeeded"),
                Err(err) => tracing::warn!(task = self.name, error = %err, "tick failed"),
            }
            ticks += 1;
            self.timer.sleep(self.interval).await;
        }
        tracing::debug!(task = self.name, ticks, "poller stopped");
        ticks
    }
}
