//! "My checklists" page
//!
//! Lists the user's checklists sorted by observation date (newest first),
//! resolves per-checklist bird counts, and supports deletion with a
//! reload on success. Navigation to the edit page is the embedding
//! layer's job; this view-model only exposes the list.

use crate::api::ApiClient;
use crate::models::sighting::parse_date;
use crate::models::{BirdCount, Checklist};
use crate::Result;

/// One checklist with its resolved bird counts
#[derive(Debug, Clone)]
pub struct ChecklistSummary {
    pub checklist: Checklist,
    pub bird_counts: Vec<BirdCount>,
}

impl ChecklistSummary {
    /// Position for the per-checklist mini-map pin
    pub fn position(&self) -> Option<(f64, f64)> {
        match (self.checklist.lat, self.checklist.lng) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }
}

/// View-model for the "my checklists" page
#[derive(Debug)]
pub struct MyChecklistsPage {
    client: ApiClient,
    checklists: Vec<ChecklistSummary>,
}

impl MyChecklistsPage {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            checklists: Vec::new(),
        }
    }

    pub fn checklists(&self) -> &[ChecklistSummary] {
        &self.checklists
    }

    /// Fetch the checklist list and resolve bird counts per checklist.
    /// Lookups run sequentially; a failed lookup leaves that checklist's
    /// counts empty rather than failing the whole page.
    pub async fn load(&mut self) -> Result<()> {
        let mut checklists = self.client.get_my_checklists().await?;
        sort_by_date_desc(&mut checklists);

        let mut summaries = Vec::with_capacity(checklists.len());
        for checklist in checklists {
            let bird_counts = match &checklist.sampling_event_id {
                Some(event_id) => match self.client.get_birds_by_event(event_id).await {
                    Ok(counts) => counts,
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to fetch birds for event");
                        Vec::new()
                    }
                },
                None => Vec::new(),
            };
            summaries.push(ChecklistSummary {
                checklist,
                bird_counts,
            });
        }

        self.checklists = summaries;
        Ok(())
    }

    /// Delete a checklist, then reload the list
    pub async fn delete(&mut self, checklist_id: i64) -> Result<()> {
        self.client.delete_checklist(checklist_id).await?;
        self.load().await
    }
}

/// Sort checklists by observation date, newest first. Dates that fail to
/// parse sort last.
pub fn sort_by_date_desc(checklists: &mut [Checklist]) {
    checklists.sort_by(|a, b| {
        let da = a.observation_date.as_deref().and_then(parse_date);
        let db = b.observation_date.as_deref().and_then(parse_date);
        db.cmp(&da)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checklist(date: Option<&str>) -> Checklist {
        Checklist {
            id: None,
            sampling_event_id: None,
            lat: None,
            lng: None,
            observation_date: date.map(String::from),
            observation_time: None,
            observer_id: None,
            duration: None,
        }
    }

    #[test]
    fn sorts_newest_first_with_unparseable_dates_last() {
        let mut lists = vec![
            checklist(Some("2024-01-15")),
            checklist(None),
            checklist(Some("2024-06-01")),
        ];
        sort_by_date_desc(&mut lists);
        assert_eq!(lists[0].observation_date.as_deref(), Some("2024-06-01"));
        assert_eq!(lists[1].observation_date.as_deref(), Some("2024-01-15"));
        assert_eq!(lists[2].observation_date, None);
    }
}
