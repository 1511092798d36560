//! Chart model for the aggregated-history view: layout and derived series.

use chrono::FixedOffset;

use crate::format::{CURRENT_DECIMALS, TEMPERATURE_DECIMALS, round_to};
use crate::history::HistoryPoint;
use crate::time::{Timestamp, time_of_day};

/// Which vertical axis a dataset is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    Left,
    Right,
}

/// A vertical axis of the history chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Axis {
    pub title: &'static str,
    pub side: AxisSide,
    pub gridlines: bool,
}

/// A plotted line and the axis it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub label: &'static str,
    pub axis: AxisSide,
}

/// Dual-axis line chart: temperature on the left, amperage on the right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartLayout {
    pub left: Axis,
    pub right: Axis,
    /// Datasets in the same order as [`ChartSeries::values`].
    pub datasets: [Dataset; 3],
}

impl ChartLayout {
    /// Layout of the aggregated history chart.
    #[must_use]
    pub fn history() -> Self {
        Self {
            left: Axis {
                title: "Temperature (°C)",
                side: AxisSide::Left,
                gridlines: true,
            },
            right: Axis {
                title: "Amperage (A)",
                side: AxisSide::Right,
                gridlines: false,
            },
            datasets: [
                Dataset {
                    label: "Avg Delta T (°C)",
                    axis: AxisSide::Left,
                },
                Dataset {
                    label: "Avg Fan Amps",
                    axis: AxisSide::Right,
                },
                Dataset {
                    label: "Avg Compressor Amps",
                    axis: AxisSide::Right,
                },
            ],
        }
    }
}

/// Labels and the three parallel series derived from a history response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub delta_t: Vec<f64>,
    pub fan_amps: Vec<f64>,
    pub compressor_amps: Vec<f64>,
}

impl ChartSeries {
    /// Derive chart data from `points`, labelling each with its local time of
    /// day. `offset_at` gives the viewer's UTC offset in force at a given
    /// instant, so labels stay right across daylight-saving changes.
    ///
    /// Returns `None` for an empty history, which callers treat as "nothing to draw".
    #[must_use]
    pub fn from_history(
        points: &[HistoryPoint],
        offset_at: impl Fn(Timestamp) -> FixedOffset,
    ) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self {
            labels: points
                .iter()
                .map(|point| time_of_day(point.timestamp, offset_at(point.timestamp)))
                .collect(),
            delta_t: points
                .iter()
                .map(|point| round_to(point.avg_delta_t, TEMPERATURE_DECIMALS))
                .collect(),
            fan_amps: points
                .iter()
                .map(|point| round_to(point.avg_fan_amps, CURRENT_DECIMALS))
                .collect(),
            compressor_amps: points
                .iter()
                .map(|point| round_to(point.avg_compressor_amps, CURRENT_DECIMALS))
                .collect(),
        })
    }

    /// Number of points in each series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The series in [`ChartLayout::datasets`] order.
    #[must_use]
    pub fn values(&self) -> [&[f64]; 3] {
        [
            self.delta_t.as_slice(),
            self.fan_amps.as_slice(),
            self.compressor_amps.as_slice(),
        ]
    }

    /// Value range covered by the datasets plotted on `side`, if any.
    #[must_use]
    pub fn range(&self, layout: &ChartLayout, side: AxisSide) -> Option<(f64, f64)> {
        layout
            .datasets
            .iter()
            .zip(self.values())
            .filter(|(dataset, _)| dataset.axis == side)
            .flat_map(|(_, values)| values.iter().copied())
            .fold(None, |range, value| match range {
                None => Some((value, value)),
                Some((low, high)) => Some((f64::min(low, value), f64::max(high, value))),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{from_rfc3339, offset_from_minutes};

    fn point(ts: &str, delta_t: f64, fan: f64, compressor: f64) -> HistoryPoint {
        HistoryPoint {
            timestamp: from_rfc3339(ts).unwrap(),
            avg_delta_t: delta_t,
            avg_fan_amps: fan,
            avg_compressor_amps: compressor,
        }
    }

    #[test]
    fn should_return_none_for_empty_history() {
        assert!(ChartSeries::from_history(&[], |_| offset_from_minutes(0)).is_none());
    }

    #[test]
    fn should_build_parallel_series_of_input_length() {
        let points = vec![
            point("2024-05-01T08:00:00Z", 7.44, 1.234, 9.876),
            point("2024-05-01T08:05:00Z", 7.46, 1.0, 10.0),
            point("2024-05-01T08:10:00Z", 6.0, 0.005, 0.0),
        ];
        let series = ChartSeries::from_history(&points, |_| offset_from_minutes(0)).unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series.delta_t.len(), 3);
        assert_eq!(series.fan_amps.len(), 3);
        assert_eq!(series.compressor_amps.len(), 3);
        assert_eq!(series.labels, vec!["08:00", "08:05", "08:10"]);
    }

    #[test]
    fn should_round_series_values() {
        let points = vec![point("2024-05-01T08:00:00Z", 7.46, 1.234, 9.876)];
        let series = ChartSeries::from_history(&points, |_| offset_from_minutes(0)).unwrap();

        assert!((series.delta_t[0] - 7.5).abs() < f64::EPSILON);
        assert!((series.fan_amps[0] - 1.23).abs() < f64::EPSILON);
        assert!((series.compressor_amps[0] - 9.88).abs() < f64::EPSILON);
    }

    #[test]
    fn should_label_in_viewer_offset() {
        let points = vec![point("2024-05-01T23:30:00Z", 0.0, 0.0, 0.0)];
        let series = ChartSeries::from_history(&points, |_| offset_from_minutes(60)).unwrap();
        assert_eq!(series.labels, vec!["00:30"]);
    }

    #[test]
    fn should_label_each_point_with_offset_in_force() {
        // Central Europe switched to summer time at 01:00 UTC on 2024-03-31
        let switch = from_rfc3339("2024-03-31T01:00:00Z").unwrap();
        let central_europe = |ts: Timestamp| {
            if ts < switch {
                offset_from_minutes(60)
            } else {
                offset_from_minutes(120)
            }
        };
        let points = vec![
            point("2024-03-31T00:30:00Z", 0.0, 0.0, 0.0),
            point("2024-03-31T00:55:00Z", 0.0, 0.0, 0.0),
            point("2024-03-31T01:00:00Z", 0.0, 0.0, 0.0),
            point("2024-03-31T01:30:00Z", 0.0, 0.0, 0.0),
        ];
        let series = ChartSeries::from_history(&points, central_europe).unwrap();
        assert_eq!(series.labels, vec!["01:30", "01:55", "03:00", "03:30"]);
    }

    #[test]
    fn should_compute_ranges_per_axis() {
        let points = vec![
            point("2024-05-01T08:00:00Z", 7.0, 1.5, 9.0),
            point("2024-05-01T08:05:00Z", 4.0, 0.5, 12.0),
        ];
        let series = ChartSeries::from_history(&points, |_| offset_from_minutes(0)).unwrap();
        let layout = ChartLayout::history();

        assert_eq!(series.range(&layout, AxisSide::Left), Some((4.0, 7.0)));
        assert_eq!(series.range(&layout, AxisSide::Right), Some((0.5, 12.0)));
    }

    #[test]
    fn should_only_draw_gridlines_on_temperature_axis() {
        let layout = ChartLayout::history();
        assert!(layout.left.gridlines);
        assert!(!layout.right.gridlines);
    }
}
