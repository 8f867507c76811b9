//! Per-page view-models
//!
//! Each page is an explicit view-model instance constructed at page
//! initialization and dropped on navigation; there is no ambient shared
//! state across pages. All state mutation happens in discrete calls from
//! the embedding event loop; network calls compose sequentially with
//! `.await`.

pub mod checklist;
pub mod edit_checklist;
pub mod home;
pub mod location;
pub mod my_checklists;
pub mod statistics;

pub use checklist::ChecklistPage;
pub use edit_checklist::EditChecklistPage;
pub use home::HomePage;
pub use location::{LocationPage, SpeciesStat};
pub use my_checklists::{ChecklistSummary, MyChecklistsPage};
pub use statistics::StatisticsPage;
