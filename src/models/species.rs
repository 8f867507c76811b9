//! Species catalog wire types

use serde::{Deserialize, Serialize};

/// One species catalog entry as the server sends it
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Species {
    /// Display name, the identity key used throughout the client
    pub bird_name: String,
}

/// Response shape of the species catalog and species search endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesListResponse {
    #[serde(default)]
    pub species: Vec<Species>,
}

impl SpeciesListResponse {
    /// Flatten into plain display names, the shape the matcher consumes
    pub fn into_names(self) -> Vec<String> {
        self.species.into_iter().map(|s| s.bird_name).collect()
    }
}
