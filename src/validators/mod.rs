//! Client-side validation run before anything is sent to the server

pub mod submission_gate;

pub use submission_gate::{filter_duration_input, ChecklistForm};
