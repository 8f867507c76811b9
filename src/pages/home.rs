//! Home map page
//!
//! Species search over the catalog; selecting a bird fetches its
//! sightings and derives heatmap points for the map adapter.
//!
//! Responses can arrive out of order when the embedding layer runs
//! lookups concurrently, and "last to arrive wins" would show the wrong
//! bird's heatmap. Every lookup therefore takes a monotonically
//! increasing sequence number and stale responses are discarded.

use crate::api::ApiClient;
use crate::models::{heat_points_of, HeatPoint, Sighting};
use crate::render::HeatmapSink;
use crate::services::SpeciesMatcher;
use crate::Result;

/// View-model for the home map page
#[derive(Debug)]
pub struct HomePage {
    client: ApiClient,
    matcher: SpeciesMatcher,
    selected_bird: Option<String>,
    /// Sequence number of the most recently started lookup; responses
    /// carrying an older number are stale and discarded
    request_seq: u64,
    heat_points: Vec<HeatPoint>,
}

impl HomePage {
    pub fn new(client: ApiClient, catalog: Vec<String>) -> Self {
        Self {
            client,
            matcher: SpeciesMatcher::new(catalog),
            selected_bird: None,
            request_seq: 0,
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

    pub fn selected_bird(&self) -> Option<&str> {
        self.selected_bird.as_deref()
    }

    /// Derived heatmap state for the currently applied lookup
    pub fn heat_points(&self) -> &[HeatPoint] {
        &self.heat_points
    }

    /// Record a bird selection and hand out the sequence number the
    /// caller must present when applying the response
    pub fn begin_selection(&mut self, bird: &str) -> u64 {
        self.selected_bird = Some(bird.to_string());
        self.matcher.clear_query();
        self.request_seq += 1;
        self.request_seq
    }

    /// Apply a sightings response for the lookup started under `seq`.
    /// Returns false (leaving derived state untouched) when a newer
    /// lookup has been started since.
    pub fn apply_sightings(&mut self, seq: u64, sightings: &[Sighting]) -> bool {
        if seq != self.request_seq {
            tracing::debug!(seq, latest = self.request_seq, "Discarding stale sightings response");
            return false;
        }
        self.heat_points = heat_points_of(sightings);
        true
    }

    /// Select a bird and refresh the heatmap in one sequential step
    pub async fn select_bird(&mut self, bird: &str) -> Result<()> {
        let seq = self.begin_selection(bird);
        let sightings = self.client.get_sightings(bird).await?;
        self.apply_sightings(seq, &sightings);
        Ok(())
    }

    /// Push the current derived state into the map adapter
    pub fn publish(&self, sink: &mut dyn HeatmapSink) {
        sink.render(&self.heat_points);
    }
}
