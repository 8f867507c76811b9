//! Per-location statistics page
//!
//! Shows species statistics for a map region chosen on the home page.
//! Selecting a species fetches its sightings and derives a (date, count)
//! chart series; the most-seen bird is derived from the stats list.

use crate::api::ApiClient;
use crate::models::{series_of, SeriesPoint};
use crate::render::ChartSink;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Per-species sighting total within the viewed region
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpeciesStat {
    pub common_name: String,
    pub total_sightings: u32,
}

/// View-model for the per-location statistics page
#[derive(Debug)]
pub struct LocationPage {
    client: ApiClient,
    stats: Vec<SpeciesStat>,
    selected_species: Option<String>,
    series: Vec<SeriesPoint>,
}

impl LocationPage {
    /// Construct over the region statistics embedded in the page
    pub fn new(client: ApiClient, stats: Vec<SpeciesStat>) -> Self {
        Self {
            client,
            stats,
            selected_species: None,
            series: Vec::new(),
        }
    }

    pub fn stats(&self) -> &[SpeciesStat] {
        &self.stats
    }

    pub fn selected_species(&self) -> Option<&str> {
        self.selected_species.as_deref()
    }

    /// Derived chart state for the currently selected species
    pub fn series(&self) -> &[SeriesPoint] {
        &self.series
    }

    /// Species with the highest sighting total in the region
    pub fn most_seen_bird(&self) -> Option<&str> {
        self.stats
            .iter()
            .max_by_key(|s| s.total_sightings)
            .map(|s| s.common_name.as_str())
    }

    /// Selecting the already-selected species toggles it off (closes the
    /// popup); otherwise fetch its sightings and derive the chart series.
    pub async fn select_species(&mut self, name: &str) -> Result<()> {
        if self.selected_species.as_deref() == Some(name) {
            self.selected_species = None;
            self.series.clear();
            return Ok(());
        }

        let sightings = self.client.get_sightings(name).await?;
        self.selected_species = Some(name.to_string());
        self.series = series_of(&sightings);
        Ok(())
    }

    /// Push the current derived series into the chart adapter
    pub fn publish(&self, sink: &mut dyn ChartSink) {
        sink.render(&self.series);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_seen_bird_takes_the_maximum_total() {
        let client = ApiClient::new("http://127.0.0.1:1").unwrap();
        let page = LocationPage::new(
            client,
            vec![
                SpeciesStat {
                    common_name: "Blue Jay".to_string(),
                    total_sightings: 4,
                },
                SpeciesStat {
                    common_name: "American Robin".to_string(),
                    total_sightings: 11,
                },
            ],
        );
        assert_eq!(page.most_seen_bird(), Some("American Robin"));
    }

    #[test]
    fn most_seen_bird_is_none_for_empty_stats() {
        let client = ApiClient::new("http://127.0.0.1:1").unwrap();
        let page = LocationPage::new(client, Vec::new());
        assert_eq!(page.most_seen_bird(), None);
    }
}
