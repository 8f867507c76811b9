//! Tally ledger entry and its two serialization shapes

use serde::{Deserialize, Serialize};

/// One row of the in-progress tally: a species and its observed count.
///
/// `id` is the server-side sighting row id. It is `None` for entries added
/// during the current page session ("new, not yet persisted") and `Some`
/// for entries loaded from an existing checklist.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TallyEntry {
    pub id: Option<i64>,
    /// Species display name, unique within one ledger
    pub name: String,
    pub count: u32,
}

impl TallyEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            count: 1,
        }
    }
}

/// Name-keyed sighting payload used by the checklist creation flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSighting {
    pub name: String,
    pub count: u32,
}

/// Id-keyed sighting payload used by the checklist edit flow.
/// A `null` id tells the server to insert rather than update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SightingUpdate {
    pub id: Option<i64>,
    pub species_name: String,
    pub number: u32,
}
