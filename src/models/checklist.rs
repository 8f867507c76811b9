//! Checklist wire types

use crate::models::tally::{NewSighting, SightingUpdate};
use serde::{Deserialize, Serialize};

/// One checklist row as returned by the listing and load endpoints
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Checklist {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub sampling_event_id: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub observation_date: Option<String>,
    #[serde(default)]
    pub observation_time: Option<String>,
    #[serde(default)]
    pub observer_id: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
}

/// One stored sighting row attached to a loaded checklist
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoredSighting {
    pub id: i64,
    pub common_name: String,
    pub observation_count: u32,
}

/// Response shape of the checklist load endpoint.
/// `checklist` is absent when the requested id does not exist.
#[derive(Debug, Clone, Deserialize)]
pub struct LoadChecklistResponse {
    pub checklist: Option<Checklist>,
    #[serde(default)]
    pub sightings: Vec<StoredSighting>,
}

/// Request body of the checklist submission endpoint.
///
/// Position, date, and duration travel as the free-text field contents;
/// the server owns parsing and storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitChecklistRequest {
    pub lat: String,
    pub lng: String,
    pub date: String,
    pub duration: String,
    pub sightings: Vec<NewSighting>,
}

/// Checklist fields carried by an update request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistFields {
    pub observation_date: String,
    pub duration: String,
    pub sampling_event_id: Option<String>,
}

/// Payload of the checklist update endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateChecklistData {
    pub checklist: ChecklistFields,
    pub sightings: Vec<SightingUpdate>,
}

/// Request body of the checklist update endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateChecklistRequest {
    pub checklist_id: i64,
    pub data: UpdateChecklistData,
}
