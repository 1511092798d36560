//! History chart: the dual-axis aggregated-history chart of the home page.
//!
//! The chart is created lazily on the first non-empty response and then only
//! ever updated in place. The handle never leaves this controller.

use chrono::FixedOffset;
use geomon_domain::chart::{ChartLayout, ChartSeries};
use geomon_domain::time::Timestamp;

use crate::error::RefreshError;
use crate::poller::PollTask;
use crate::ports::{ChartFactory, ChartHandle, DeviceApi};

/// What a refresh did to the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartOutcome {
    /// The device returned no history; nothing was drawn.
    Skipped,
    Created,
    Updated,
}

/// Fetches aggregated history and keeps the chart in sync with it.
pub struct HistoryChart<A, F: ChartFactory, O> {
    api: A,
    factory: F,
    layout: ChartLayout,
    offset_at: O,
    chart: Option<F::Chart>,
}

impl<A, F, O> HistoryChart<A, F, O>
where
    A: DeviceApi,
    F: ChartFactory,
    O: Fn(Timestamp) -> FixedOffset,
{
    /// Labels are rendered as local time of day, using the UTC offset
    /// `offset_at` reports for each point's timestamp.
    pub fn new(api: A, factory: F, offset_at: O) -> Self {
        Self {
            api,
            factory,
            layout: ChartLayout::history(),
            offset_at,
            chart: None,
        }
    }

    /// Whether the chart has been drawn at least once.
    pub fn has_chart(&self) -> bool {
        self.chart.is_some()
    }

    /// Fetch the history and draw it.
    ///
    /// # Errors
    ///
    /// Returns [`RefreshError::Api`] when the fetch fails and
    /// [`RefreshError::Render`] when drawing fails. A chart that failed to be
    /// created is attempted again on the next refresh.
    pub async fn refresh(&mut self) -> Result<ChartOutcome, RefreshError> {
        let points = self.api.aggregated_history().await?;
        let Some(series) = ChartSeries::from_history(&points, &self.offset_at) else {
            tracing::debug!("aggregated history is empty, chart left as is");
            return Ok(ChartOutcome::Skipped);
        };
        let len = series.len();
        let outcome = if let Some(chart) = self.chart.as_mut() {
            chart.update(series)?;
            ChartOutcome::Updated
        } else {
            self.chart = Some(self.factory.create(&self.layout, series)?);
            ChartOutcome::Created
        };
        tracing::debug!(points = len, ?outcome, "history chart drawn");
        Ok(outcome)
    }
}

impl<A, F, O> PollTask for HistoryChart<A, F, O>
where
    A: DeviceApi,
    F: ChartFactory,
    O: Fn(Timestamp) -> FixedOffset,
{
    type Error = RefreshError;

    async fn tick(&mut self) -> Result<(), RefreshError> {
        self.refresh().await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use chrono::{TimeZone, Utc};
    use geomon_domain::history::HistoryPoint;
    use geomon_domain::time::offset_from_minutes;

    use super::*;
    use crate::error::{ApiError, RenderError};
    use crate::testing::{FakeDevice, offline};

    /// Every draw, tagged with the id of the chart that performed it.
    type DrawLog = Rc<RefCell<Vec<(usize, ChartSeries)>>>;

    #[derive(Default)]
    struct FakeFactory {
        created: Cell<usize>,
        fail_create: Cell<bool>,
        draws: DrawLog,
    }

    struct FakeChart {
        id: usize,
        draws: DrawLog,
    }

    impl ChartFactory for Rc<FakeFactory> {
        type Chart = FakeChart;

        fn create(
            &self,
            layout: &ChartLayout,
            series: ChartSeries,
        ) -> Result<FakeChart, RenderError> {
            assert_eq!(*layout, ChartLayout::history());
            if self.fail_create.get() {
                return Err(RenderError("canvas missing".into()));
            }
            let id = self.created.get() + 1;
            self.created.set(id);
            self.draws.borrow_mut().push((id, series));
            Ok(FakeChart {
                id,
                draws: Rc::clone(&self.draws),
            })
        }
    }

    impl ChartHandle for FakeChart {
        fn update(&mut self, series: ChartSeries) -> Result<(), RenderError> {
            self.draws.borrow_mut().push((self.id, series));
            Ok(())
        }
    }

    fn point(minute: u32, delta_t: f64) -> HistoryPoint {
        HistoryPoint {
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 14, minute, 0).unwrap(),
            avg_delta_t: delta_t,
            avg_fan_amps: 1.234,
            avg_compressor_amps: 5.678,
        }
    }

    fn make_chart(
        device: &Rc<FakeDevice>,
        factory: &Rc<FakeFactory>,
    ) -> HistoryChart<Rc<FakeDevice>, Rc<FakeFactory>, impl Fn(Timestamp) -> FixedOffset> {
        HistoryChart::new(Rc::clone(device), Rc::clone(factory), |_: Timestamp| {
            offset_from_minutes(120)
        })
    }

    #[tokio::test]
    async fn should_skip_empty_history() {
        let device = Rc::new(FakeDevice::default());
        let factory = Rc::new(FakeFactory::default());
        let mut chart = make_chart(&device, &factory);

        assert_eq!(chart.refresh().await.unwrap(), ChartOutcome::Skipped);
        assert!(!chart.has_chart());
        assert_eq!(factory.created.get(), 0);
        assert!(factory.draws.borrow().is_empty());
    }

    #[tokio::test]
    async fn should_create_once_then_update_same_chart() {
        let device = Rc::new(FakeDevice::default());
        let factory = Rc::new(FakeFactory::default());
        let mut chart = make_chart(&device, &factory);

        *device.history.borrow_mut() = Ok(vec![point(0, 8.44), point(5, 7.96)]);
        assert_eq!(chart.refresh().await.unwrap(), ChartOutcome::Created);

        *device.history.borrow_mut() = Ok(vec![point(0, 8.4), point(5, 8.0), point(10, 7.5)]);
        assert_eq!(chart.refresh().await.unwrap(), ChartOutcome::Updated);

        assert_eq!(factory.created.get(), 1);
        let draws = factory.draws.borrow();
        assert_eq!(draws.len(), 2);
        assert!(draws.iter().all(|(id, _)| *id == 1));

        let (_, latest) = &draws[1];
        assert_eq!(latest.len(), 3);
        assert_eq!(latest.labels, vec!["16:00", "16:05", "16:10"]);
        assert_eq!(latest.delta_t, vec![8.4, 8.0, 7.5]);
        assert_eq!(latest.fan_amps, vec![1.23; 3]);
        assert_eq!(latest.compressor_amps, vec![5.68; 3]);
    }

    #[tokio::test]
    async fn should_resolve_offset_on_every_refresh() {
        let device = Rc::new(FakeDevice::default());
        let factory = Rc::new(FakeFactory::default());
        let offset_minutes = Rc::new(Cell::new(60));
        let current = Rc::clone(&offset_minutes);
        let offset_at = move |_: Timestamp| offset_from_minutes(current.get());
        let mut chart = HistoryChart::new(Rc::clone(&device), Rc::clone(&factory), offset_at);

        *device.history.borrow_mut() = Ok(vec![point(0, 8.0)]);
        chart.refresh().await.unwrap();
        offset_minutes.set(120);
        chart.refresh().await.unwrap();

        let draws = factory.draws.borrow();
        assert_eq!(draws[0].1.labels, vec!["15:00"]);
        assert_eq!(draws[1].1.labels, vec!["16:00"]);
    }

    #[tokio::test]
    async fn should_not_reset_chart_on_empty_history() {
        let device = Rc::new(FakeDevice::default());
        let factory = Rc::new(FakeFactory::default());
        let mut chart = make_chart(&device, &factory);

        *device.history.borrow_mut() = Ok(vec![point(0, 8.0)]);
        chart.refresh().await.unwrap();
        *device.history.borrow_mut() = Ok(Vec::new());

        assert_eq!(chart.refresh().await.unwrap(), ChartOutcome::Skipped);
        assert!(chart.has_chart());
        assert_eq!(factory.draws.borrow().len(), 1);
    }

    #[tokio::test]
    async fn should_report_fetch_failure() {
        let device = Rc::new(FakeDevice::default());
        *device.history.borrow_mut() = Err(offline());
        let factory = Rc::new(FakeFactory::default());
        let mut chart = make_chart(&device, &factory);

        let err = chart.refresh().await.unwrap_err();

        assert_eq!(err, RefreshError::Api(ApiError::Transport("offline".into())));
        assert!(!chart.has_chart());
    }

    #[tokio::test]
    async fn should_retry_creation_after_render_failure() {
        let device = Rc::new(FakeDevice::default());
        *device.history.borrow_mut() = Ok(vec![point(0, 8.0)]);
        let factory = Rc::new(FakeFactory::default());
        factory.fail_create.set(true);
        let mut chart = make_chart(&device, &factory);

        assert!(matches!(chart.tick().await, Err(RefreshError::Render(_))));
        assert!(!chart.has_chart());

        factory.fail_create.set(false);
        assert_eq!(chart.refresh().await.unwrap(), ChartOutcome::Created);
    }
}
