//! Data models for the BirdApp client
//!
//! Wire shapes mirror the server's JSON contract; derived shapes
//! (heatmap points, chart series) are what the rendering adapters consume.

pub mod checklist;
pub mod sighting;
pub mod species;
pub mod tally;

pub use checklist::{
    Checklist, ChecklistFields, LoadChecklistResponse, StoredSighting, SubmitChecklistRequest,
    UpdateChecklistData, UpdateChecklistRequest,
};
pub use sighting::{heat_points_of, series_of, BirdCount, HeatPoint, SeriesPoint, Sighting};
pub use species::{Species, SpeciesListResponse};
pub use tally::{NewSighting, SightingUpdate, TallyEntry};
