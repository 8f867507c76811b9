//! Page-session state components shared across the view-models

pub mod species_matcher;
pub mod tally_ledger;

pub use species_matcher::{SpeciesMatcher, MAX_MATCHES};
pub use tally_ledger::TallyLedger;
