//! Timer port: delayed wake-ups.

use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

/// Source of delays; the browser adapter backs it with `setTimeout`.
pub trait Timer {
    /// Resolve once `duration` has elapsed.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

impl<T: Timer> Timer for Rc<T> {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        (**self).sleep(duration)
    }
}

impl<T: Timer> Timer for &T {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        (**self).sleep(duration)
    }
}
