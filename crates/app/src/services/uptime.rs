//! Uptime status: humanized device uptime and free memory.

use crate::error::ApiError;
use crate::poller::PollTask;
use crate::ports::{DeviceApi, TextSink};

/// Fetches the device status and renders its uptime and free heap.
pub struct UptimeStatus<A, U, H> {
    api: A,
    uptime: U,
    heap: H,
}

impl<A: DeviceApi, U: TextSink, H: TextSink> UptimeStatus<A, U, H> {
    pub fn new(api: A, uptime: U, heap: H) -> Self {
        Self { api, uptime, heap }
    }

    /// # Errors
    ///
    /// Returns the [`ApiError`] of the failed fetch; nothing is rendered then.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        let status = self.api.status().await?;
        self.uptime.set_text(status.uptime_text());
        self.heap.set_text(status.free_heap_text().unwrap_or_default());
        Ok(())
    }
}

impl<A: DeviceApi, U: TextSink, H: TextSink> PollTask for UptimeStatus<A, U, H> {
    type Error = ApiError;

    async fn tick(&mut self) -> Result<(), ApiError> {
        self.refresh().await
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use geomon_domain::status::StatusInfo;

    use super::*;
    use crate::testing::{FakeDevice, RecordingText, offline};

    fn make_status(
        device: FakeDevice,
    ) -> (
        UptimeStatus<FakeDevice, Rc<RecordingText>, Rc<RecordingText>>,
        Rc<RecordingText>,
        Rc<RecordingText>,
    ) {
        let uptime = Rc::new(RecordingText::default());
        let heap = Rc::new(RecordingText::default());
        let status = UptimeStatus::new(device, Rc::clone(&uptime), Rc::clone(&heap));
        (status, uptime, heap)
    }

    #[tokio::test]
    async fn should_render_humanized_uptime() {
        let device = FakeDevice::default();
        *device.status.borrow_mut() = Ok(StatusInfo {
            uptime_ms: 90_000_000,
            free_heap_bytes: Some(204_800),
        });
        let (status, uptime, heap) = make_status(device);

        status.refresh().await.unwrap();

        assert_eq!(uptime.last().as_deref(), Some("1d 1h"));
        assert_eq!(heap.last().as_deref(), Some("200.0 KB free"));
    }

    #[tokio::test]
    async fn should_clear_heap_line_when_not_reported() {
        let (status, uptime, heap) = make_status(FakeDevice::default());

        status.refresh().await.unwrap();

        assert_eq!(uptime.last().as_deref(), Some("1m 1s"));
        assert_eq!(heap.last().as_deref(), Some(""));
    }

    #[tokio::test]
    async fn should_render_nothing_on_failure() {
        let device = FakeDevice::default();
        *device.status.borrow_mut() = Err(offline());
        let (mut status, uptime, heap) = make_status(device);

        assert!(status.tick().await.is_err());
        assert!(uptime.texts.borrow().is_empty());
        assert!(heap.texts.borrow().is_empty());
    }
}
