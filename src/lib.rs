//! BirdApp client view-model library
//!
//! Client-side presentation layer for a citizen-science bird-observation
//! application: per-page view-models that fetch JSON over HTTP from the
//! BirdApp server, maintain page-session state (species search, tally
//! ledger, submission gate), and expose derived state to thin rendering
//! adapters. Map and chart rendering, authentication, and persistence
//! live in external collaborators.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod pages;
pub mod render;
pub mod services;
pub mod validators;

pub use crate::error::{Error, Result};
