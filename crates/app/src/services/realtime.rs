//! Realtime status: the live sensor readout of the home page.

use geomon_domain::snapshot::Field;

use crate::error::ApiError;
use crate::poller::PollTask;
use crate::ports::{DeviceApi, ReadoutSink};

/// Fetches a snapshot and writes every field into its display target.
pub struct RealtimeStatus<A, S> {
    api: A,
    sink: S,
}

impl<A: DeviceApi, S: ReadoutSink> RealtimeStatus<A, S> {
    pub fn new(api: A, sink: S) -> Self {
        Self { api, sink }
    }

    /// Fetch the current snapshot and render it.
    ///
    /// Targets are only written once the whole snapshot has been decoded, so
    /// a failed fetch leaves the previous readings on screen.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] of the failed fetch.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        let snapshot = self.api.snapshot().await?;
        for (field, text) in snapshot.readout() {
            self.sink.show(field, text);
        }
        tracing::debug!(fields = Field::ALL.len(), "realtime readout updated");
        Ok(())
    }
}

impl<A: DeviceApi, S: ReadoutSink> PollTask for RealtimeStatus<A, S> {
    type Error = ApiError;

    async fn tick(&mut self) -> Result<(), ApiError> {
        self.refresh().await
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::testing::{FakeDevice, RecordingReadout, offline};

    #[tokio::test]
    async fn should_write_every_field_rounded() {
        let sink = Rc::new(RecordingReadout::default());
        let status = RealtimeStatus::new(FakeDevice::default(), Rc::clone(&sink));

        status.refresh().await.unwrap();

        let shown = sink.shown.borrow();
        assert_eq!(shown.len(), Field::ALL.len());
        assert_eq!(shown[&Field::ReturnTemp], "22.5");
        assert_eq!(shown[&Field::SupplyTemp], "14.0");
        assert_eq!(shown[&Field::DeltaT], "8.4");
        assert_eq!(shown[&Field::FanStatus], "ON");
        assert_eq!(shown[&Field::FanAmps], "1.23");
        assert_eq!(shown[&Field::CompressorStatus], "OFF");
        assert_eq!(shown[&Field::CompressorAmps], "0.00");
        assert_eq!(shown[&Field::PumpsAmps], "2.50");
        assert_eq!(shown[&Field::Airflow], "OK");
        assert_eq!(shown[&Field::Alerts], "NONE");
        assert_eq!(shown[&Field::Version], "1.4.0");
        assert_eq!(shown[&Field::BuildDate], "2024-05-01");
    }

    #[tokio::test]
    async fn should_leave_targets_untouched_on_failure() {
        let device = FakeDevice::default();
        *device.snapshot.borrow_mut() = Err(offline());
        let sink = Rc::new(RecordingReadout::default());
        let status = RealtimeStatus::new(device, Rc::clone(&sink));

        let err = status.refresh().await.unwrap_err();

        assert_eq!(err, offline());
        assert_eq!(sink.writes.get(), 0);
    }

    #[tokio::test]
    async fn should_keep_previous_values_after_failed_poll() {
        let device = Rc::new(FakeDevice::default());
        let sink = Rc::new(RecordingReadout::default());
        let mut status = RealtimeStatus::new(Rc::clone(&device), Rc::clone(&sink));

        status.tick().await.unwrap();
        *device.snapshot.borrow_mut() = Err(ApiError::Decode("truncated".into()));
        assert!(status.tick().await.is_err());

        assert_eq!(sink.writes.get(), Field::ALL.len());
        assert_eq!(sink.shown.borrow()[&Field::DeltaT], "8.4");
        assert_eq!(device.count("snapshot"), 2);
    }
}
