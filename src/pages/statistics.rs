//! Aggregate statistics page
//!
//! Species search over the catalog; selecting a species fetches its
//! sightings and derives both a (date, count) time series and heatmap
//! points. Uses the same stale-response discard as the home page, since
//! the same out-of-order arrival applies here.

use crate::api::ApiClient;
use crate::models::{heat_points_of, series_of, HeatPoint, SeriesPoint, Sighting};
use crate::render::{ChartSink, HeatmapSink};
use crate::services::SpeciesMatcher;
use crate::Result;

/// View-model for the aggregate statistics page
#[derive(Debug)]
pub struct StatisticsPage {
    client: ApiClient,
    matcher: SpeciesMatcher,
    selected_species: Option<String>,
    request_seq: u64,
    series: Vec<SeriesPoint>,
    heat_points: Vec<HeatPoint>,
}

impl StatisticsPage {
    pub fn new(client: ApiClient, catalog: Vec<String>) -> Self {
        Self {
            client,
            matcher: SpeciesMatcher::new(catalog),
            selected_species: None,
            request_seq: 0,
            series: Vec::new(),
            heat_points: Vec::new(),
        }
    }

    /// Fetch the catalog and construct the page
    pub async fn load(client: ApiClient) -> Result<Self> {
        let catalog = client.get_species().await?;
        Ok(Self::new(client, catalog))
    }

    pub fn set_query(&mut self, query: &str) {
        self.matcher.set_query(query);
    }

    pub fn matches(&self) -> &[String] {
        self.matcher.current_matches()
    }

    pub fn selected_species(&self) -> Option<&str> {
        self.selected_species.as_deref()
    }

    pub fn series(&self) -> &[SeriesPoint] {
        &self.series
    }

    pub fn heat_points(&self) -> &[HeatPoint] {
        &self.heat_points
    }

    /// Record a species selection and hand out the sequence number the
    /// caller must present when applying the response
    pub fn begin_selection(&mut self, name: &str) -> u64 {
        self.selected_species = Some(name.to_string());
        self.request_seq += 1;
        self.request_seq
    }

    /// Apply a sightings response; stale responses are discarded
    pub fn apply_sightings(&mut self, seq: u64, sightings: &[Sighting]) -> bool {
        if seq != self.request_seq {
            tracing::debug!(seq, latest = self.request_seq, "Discarding stale sightings response");
            return false;
        }
        self.series = series_of(sightings);
        self.heat_points = heat_points_of(sightings);
        true
    }

    /// Select a species and refresh both derived views sequentially
    pub async fn select_species(&mut self, name: &str) -> Result<()> {
        let seq = self.begin_selection(name);
        let sightings = self.client.get_sightings(name).await?;
        self.apply_sightings(seq, &sightings);
        Ok(())
    }

    /// Push derived state into the rendering adapters
    pub fn publish(&self, chart: &mut dyn ChartSink, map: &mut dyn HeatmapSink) {
        chart.render(&self.series);
        map.render(&self.heat_points);
    }
}
