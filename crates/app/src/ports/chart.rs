//! Chart port: the drawing surface of the history chart.

use geomon_domain::chart::{ChartLayout, ChartSeries};

use crate::error::RenderError;

/// Creates chart instances on a drawing surface.
pub trait ChartFactory {
    type Chart: ChartHandle;

    /// Build and draw a new chart with `layout` showing `series`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the surface is unavailable or drawing fails.
    fn create(&self, layout: &ChartLayout, series: ChartSeries) -> Result<Self::Chart, RenderError>;
}

/// A live chart whose data can be replaced in place.
pub trait ChartHandle {
    /// Swap in new labels and series, then redraw.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when drawing fails. The new data is kept either way.
    fn update(&mut self, series: ChartSeries) -> Result<(), RenderError>;
}
