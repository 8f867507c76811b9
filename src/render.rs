//! Rendering adapter seams
//!
//! View-models expose derived state; the embedding layer implements these
//! traits to push that state into whatever map or chart widget it uses.
//! No view-model reaches into a rendering object directly.

use crate::models::{HeatPoint, SeriesPoint};

/// Consumer of (lat, lng, weight) triples for a heatmap or pin layer
pub trait HeatmapSink {
    fn render(&mut self, points: &[HeatPoint]);
}

/// Consumer of a (date, count) time series for a chart
pub trait ChartSink {
    fn render(&mut self, series: &[SeriesPoint]);
}
