//! Checklist entry page
//!
//! Catalog load, live species search, the tally ledger, and the
//! submission gate. Position may be seeded from navigation parameters
//! (the map pin the user clicked to reach this page).

use crate::api::ApiClient;
use crate::models::SubmitChecklistRequest;
use crate::services::{SpeciesMatcher, TallyLedger};
use crate::validators::ChecklistForm;
use crate::Result;

/// View-model for the checklist entry page
#[derive(Debug)]
pub struct ChecklistPage {
    client: ApiClient,
    matcher: SpeciesMatcher,
    ledger: TallyLedger,
    form: ChecklistForm,
}

impl ChecklistPage {
    /// Construct over an already-loaded catalog
    pub fn new(client: ApiClient, catalog: Vec<String>) -> Self {
        Self {
            client,
            matcher: SpeciesMatcher::new(catalog),
            ledger: TallyLedger::new(),
            form: ChecklistForm::new(),
        }
    }

    /// Fetch the catalog and construct the page, seeding position from
    /// navigation parameters when present
    pub async fn load(client: ApiClient, position: Option<(String, String)>) -> Result<Self> {
        let catalog = client.get_species().await?;
        let mut page = Self::new(client, catalog);
        if let Some((lat, lng)) = position {
            page.form.lat = lat;
            page.form.lng = lng;
        }
        Ok(page)
    }

    pub fn form(&self) -> &ChecklistForm {
        &self.form
    }

    pub fn ledger(&self) -> &TallyLedger {
        &self.ledger
    }

    /// Keystroke in the search box
    pub fn set_query(&mut self, query: &str) {
        self.matcher.set_query(query);
    }

    pub fn matches(&self) -> &[String] {
        self.matcher.current_matches()
    }

    /// User picked a suggestion: tally it and reset the search box
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

    pub fn set_lat(&mut self, lat: &str) {
        self.form.lat = lat.to_string();
    }

    pub fn set_lng(&mut self, lng: &str) {
        self.form.lng = lng.to_string();
    }

    pub fn set_date(&mut self, date: &str) {
        self.form.date = date.to_string();
    }

    /// Keystroke in the duration field, run through the incremental filter
    pub fn set_duration(&mut self, raw: &str) {
        self.form.set_duration(raw);
    }

    /// Validate and submit the checklist.
    ///
    /// Validation failure aborts before any request is issued and leaves
    /// all state untouched. A remote failure or transport error leaves
    /// the ledger intact for retry. On confirmed success the ledger is
    /// cleared and date/duration reset (position retained).
    pub async fn submit(&mut self) -> Result<()> {
        self.form.validate()?;

        let request = SubmitChecklistRequest {
            lat: self.form.lat.clone(),
            lng: self.form.lng.clone(),
            date: self.form.date.clone(),
            duration: self.form.duration().to_string(),
            sightings: self.ledger.to_new_sightings(),
        };

        self.client.submit_checklist(&request).await?;

        self.ledger.clear();
        self.form.reset_after_submit();
        Ok(())
    }
}
