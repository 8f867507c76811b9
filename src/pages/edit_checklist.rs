//! Checklist edit page
//!
//! Loads an existing checklist and its stored sightings into an id-keyed
//! ledger, offers the same matcher/ledger operations as the entry page,
//! and submits an update keyed by the checklist id. Entries added during
//! the session carry a `null` id so the server inserts them.

use crate::api::ApiClient;
use crate::models::{
    ChecklistFields, TallyEntry, UpdateChecklistData, UpdateChecklistRequest,
};
use crate::services::{SpeciesMatcher, TallyLedger};
use crate::validators::filter_duration_input;
use crate::{Error, Result};

/// View-model for the checklist edit page
#[derive(Debug)]
pub struct EditChecklistPage {
    client: ApiClient,
    checklist_id: i64,
    sampling_event_id: Option<String>,
    matcher: SpeciesMatcher,
    ledger: TallyLedger,
    date: String,
    duration: String,
}

impl EditChecklistPage {
    /// Fetch the catalog and the checklist under edit
    pub async fn load(client: ApiClient, checklist_id: i64) -> Result<Self> {
        let catalog = client.get_species().await?;
        let response = client.load_checklist(checklist_id).await?;

        // load_checklist errors when the checklist is absent
        let checklist = response
            .checklist
            .ok_or_else(|| Error::Remote(format!("Checklist {} not found", checklist_id)))?;

        let entries = response
            .sightings
            .into_iter()
            .map(|s| TallyEntry {
                id: Some(s.id),
                name: s.common_name,
                count: s.observation_count,
            })
            .collect();

        Ok(Self {
            client,
            checklist_id,
            sampling_event_id: checklist.sampling_event_id,
            matcher: SpeciesMatcher::new(catalog),
            ledger: TallyLedger::restore(entries),
            date: checklist.observation_date.unwrap_or_default(),
            duration: checklist
                .duration
                .map(|d| d.to_string())
                .unwrap_or_default(),
        })
    }

    pub fn checklist_id(&self) -> i64 {
        self.checklist_id
    }

    pub fn ledger(&self) -> &TallyLedger {
        &self.ledger
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn duration(&self) -> &str {
        &self.duration
    }

    pub fn set_query(&mut self, query: &str) {
        self.matcher.set_query(query);
    }

    pub fn matches(&self) -> &[String] {
        self.matcher.current_matches()
    }

    pub fn pick_species(&mut self, name: &str) {
        self.ledger.add(name);
        self.matcher.clear_query();
    }

    pub fn increment(&mut self, name: &str) {
        self.ledger.increment(name);
    }

    pub fn decrement(&mut self, name: &str) {
        self.ledger.decrement(name);
    }

    pub fn remove_species(&mut self, name: &str) {
        self.ledger.remove(name);
    }

    pub fn set_date(&mut self, date: &str) {
        self.date = date.to_string();
    }

    pub fn set_duration(&mut self, raw: &str) {
        self.duration = filter_duration_input(raw);
    }

    /// Validate and submit the updated checklist. The edit form carries
    /// no position fields; date and duration must be non-blank.
    pub async fn update(&mut self) -> Result<()> {
        if self.date.trim().is_empty() || self.duration.trim().is_empty() {
            return Err(Error::Validation(
                "Please fill out the date and duration before updating".to_string(),
            ));
        }

        let request = UpdateChecklistRequest {
            checklist_id: self.checklist_id,
            data: UpdateChecklistData {
                checklist: ChecklistFields {
                    observation_date: self.date.clone(),
                    duration: self.duration.clone(),
                    sampling_event_id: self.sampling_event_id.clone(),
                },
                sightings: self.ledger.to_sighting_updates(),
            },
        };

        self.client.update_checklist(&request).await
    }
}
