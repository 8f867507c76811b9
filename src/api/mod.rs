//! HTTP client for the BirdApp server API

pub mod client;

pub use client::ApiClient;
