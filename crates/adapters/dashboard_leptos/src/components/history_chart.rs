//! Dual-axis aggregated history chart drawn with `plotters` on a `<canvas>`.

use geomon_app::config::DashboardConfig;
use geomon_app::error::RenderError;
use geomon_app::ports::{ChartFactory, ChartHandle};
use geomon_app::services::history_chart::HistoryChart;
use geomon_domain::chart::{AxisSide, ChartLayout, ChartSeries};
use leptos::html::Canvas;
use leptos::prelude::*;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;

use crate::api::HttpDeviceApi;
use crate::browser::offset_at;
use crate::polling::spawn_poller;

/// Line colours, in dataset order.
const PALETTE: [RGBColor; 3] = [
    RGBColor(0xd9, 0x53, 0x4f),
    RGBColor(0x33, 0x7a, 0xb7),
    RGBColor(0x5c, 0xb8, 0x5c),
];

fn render_error(err: impl std::fmt::Display) -> RenderError {
    RenderError(err.to_string())
}

/// Pad a value range so flat lines stay visible.
fn padded(range: Option<(f64, f64)>) -> (f64, f64) {
    let (low, high) = range.unwrap_or((0.0, 1.0));
    let margin = ((high - low) * 0.1).max(0.5);
    (low - margin, high + margin)
}

/// Builds charts on one canvas element.
pub struct CanvasChartFactory {
    canvas: HtmlCanvasElement,
}

impl CanvasChartFactory {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }
}

impl ChartFactory for CanvasChartFactory {
    type Chart = CanvasChart;

    fn create(&self, layout: &ChartLayout, series: ChartSeries) -> Result<CanvasChart, RenderError> {
        let chart = CanvasChart {
            canvas: self.canvas.clone(),
            layout: layout.clone(),
            series,
        };
        chart.draw()?;
        Ok(chart)
    }
}

/// A drawn chart; redrawn from scratch whenever its data changes.
pub struct CanvasChart {
    canvas: HtmlCanvasElement,
    layout: ChartLayout,
    series: ChartSeries,
}

impl CanvasChart {
    fn draw(&self) -> Result<(), RenderError> {
        let backend = CanvasBackend::with_canvas_object(self.canvas.clone())
            .ok_or_else(|| RenderError("canvas has no 2d context".to_string()))?;
        let root = backend.into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let labels = &self.series.labels;
        let x_range = 0..self.series.len().saturating_sub(1).max(1);
        let (left_low, left_high) = padded(self.series.range(&self.layout, AxisSide::Left));
        let (right_low, right_high) = padded(self.series.range(&self.layout, AxisSide::Right));

        let mut chart = ChartBuilder::on(&root)
            .margin(12)
            .x_label_area_size(30)
            .y_label_area_size(50)
            .right_y_label_area_size(50)
            .build_cartesian_2d(x_range.clone(), left_low..left_high)
            .map_err(render_error)?
            .set_secondary_coord(x_range, right_low..right_high);

        let format_label = |index: &usize| labels.get(*index).cloned().unwrap_or_default();
        let mut mesh = chart.configure_mesh();
        mesh.x_label_formatter(&format_label)
            .x_labels(labels.len().min(12))
            .y_desc(self.layout.left.title);
        if !self.layout.left.gridlines {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(render_error)?;

        chart
            .configure_secondary_axes()
            .y_desc(self.layout.right.title)
            .draw()
            .map_err(render_error)?;

        for ((dataset, values), color) in self
            .layout
            .datasets
            .iter()
            .zip(self.series.values())
            .zip(PALETTE)
        {
            let line = LineSeries::new(values.iter().copied().enumerate(), color.stroke_width(2));
            let annotation = match dataset.axis {
                AxisSide::Left => chart.draw_series(line),
                AxisSide::Right => chart.draw_secondary_series(line),
            }
            .map_err(render_error)?;
            annotation
                .label(dataset.label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(render_error)?;

        root.present().map_err(render_error)
    }
}

impl ChartHandle for CanvasChart {
    fn update(&mut self, series: ChartSeries) -> Result<(), RenderError> {
        self.series = series;
        self.draw()
    }
}

/// Aggregated history chart, refreshed on the configured history interval.
#[component]
pub fn HistoryChartCanvas(api: HttpDeviceApi, config: DashboardConfig) -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();
    let interval = config.polling.history();

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let chart = HistoryChart::new(
            api.clone(),
            CanvasChartFactory::new(canvas),
            offset_at,
        );
        spawn_poller("history", interval, chart);
    });

    view! {
        <div class="chart-container">
            <h2>"Aggregated History"</h2>
            <canvas node_ref=canvas_ref width="800" height="400"></canvas>
        </div>
    }
}
