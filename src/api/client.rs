//! BirdApp server API client
//!
//! Every endpoint exchanges JSON with a `status`/`success` discriminator
//! field and a `message` on failure. Transport failures and non-2xx
//! responses map to `Error::Network`/`Error::Remote`; a well-formed body
//! carrying a failure discriminator maps to `Error::Remote` with the
//! server's message, leaving the caller's state intact for retry.

use crate::models::{
    BirdCount, Checklist, LoadChecklistResponse, Sighting, SpeciesListResponse,
    SubmitChecklistRequest, UpdateChecklistRequest,
};
use crate::{Error, Result};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

const USER_AGENT: &str = "BirdApp-UI/0.1.0";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Success/failure discriminator shared by the mutation endpoints.
///
/// The server is inconsistent about its flag: creation and deletion
/// return `status: "success"`, the update endpoint returns
/// `success: true`. Both spellings are accepted here.
#[derive(Debug, Deserialize)]
struct Ack {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    message: Option<String>,
}

impl Ack {
    fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success") || self.success == Some(true)
    }

    fn into_error(self) -> Error {
        Error::Remote(
            self.message
                .unwrap_or_else(|| "Server reported failure".to_string()),
        )
    }
}

/// BirdApp server API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn check_http(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Remote(format!("HTTP {}: {}", status.as_u16(), body)));
        }
        Ok(response)
    }

    /// Fetch the full species catalog as display names
    pub async fn get_species(&self) -> Result<Vec<String>> {
        let url = self.url("get_species");
        tracing::debug!(url = %url, "Fetching species catalog");

        let response = Self::check_http(self.http_client.get(&url).send().await?).await?;
        let body: SpeciesListResponse = response.json().await?;

        let names = body.into_names();
        tracing::info!(count = names.len(), "Loaded species catalog");
        Ok(names)
    }

    /// Server-side species search by substring query
    pub async fn find_species(&self, query: &str) -> Result<Vec<String>> {
        let url = self.url("find_species");
        tracing::debug!(query = %query, "Searching species");

        let response = Self::check_http(
            self.http_client
                .get(&url)
                .query(&[("query", query)])
                .send()
                .await?,
        )
        .await?;
        let body: SpeciesListResponse = response.json().await?;
        Ok(body.into_names())
    }

    /// Submit a new checklist
    pub async fn submit_checklist(&self, request: &SubmitChecklistRequest) -> Result<()> {
        let url = self.url("submit_checklist");
        tracing::debug!(sightings = request.sightings.len(), "Submitting checklist");

        let response =
            Self::check_http(self.http_client.post(&url).json(request).send().await?).await?;
        let ack: Ack = response.json().await?;

        if ack.is_success() {
            tracing::info!("Checklist submitted");
            Ok(())
        } else {
            Err(ack.into_error())
        }
    }

    /// Load an existing checklist with its stored sightings
    pub async fn load_checklist(&self, checklist_id: i64) -> Result<LoadChecklistResponse> {
        let url = self.url("load_checklist");
        tracing::debug!(checklist_id, "Loading checklist");

        let response = Self::check_http(
            self.http_client
                .get(&url)
                .query(&[("id", checklist_id)])
                .send()
                .await?,
        )
        .await?;
        let body: LoadChecklistResponse = response.json().await?;

        if body.checklist.is_none() {
            return Err(Error::Remote(format!(
                "Checklist {} not found",
                checklist_id
            )));
        }
        Ok(body)
    }

    /// Update an existing checklist and its sightings
    pub async fn update_checklist(&self, request: &UpdateChecklistRequest) -> Result<()> {
        let url = self.url("update_checklist");
        tracing::debug!(checklist_id = request.checklist_id, "Updating checklist");

        let response =
            Self::check_http(self.http_client.post(&url).json(request).send().await?).await?;
        let ack: Ack = response.json().await?;

        if ack.is_success() {
            Ok(())
        } else {
            Err(ack.into_error())
        }
    }

    /// Delete a checklist by id
    pub async fn delete_checklist(&self, checklist_id: i64) -> Result<()> {
        let url = self.url("delete_checklist");
        tracing::debug!(checklist_id, "Deleting checklist");

        let response = Self::check_http(
            self.http_client
                .post(&url)
                .json(&json!({ "id": checklist_id }))
                .send()
                .await?,
        )
        .await?;
        let ack: Ack = response.json().await?;

        if ack.is_success() {
            Ok(())
        } else {
            Err(ack.into_error())
        }
    }

    /// List the current user's checklists
    pub async fn get_my_checklists(&self) -> Result<Vec<Checklist>> {
        #[derive(Deserialize)]
        struct ChecklistsResponse {
            #[serde(default)]
            checklists: Vec<Checklist>,
        }

        let url = self.url("get_my_checklists");
        tracing::debug!(url = %url, "Fetching my checklists");

        let response = Self::check_http(self.http_client.get(&url).send().await?).await?;
        let body: ChecklistsResponse = response.json().await?;
        Ok(body.checklists)
    }

    /// Per-species observation totals for one sampling event
    pub async fn get_birds_by_event(&self, sampling_event_id: &str) -> Result<Vec<BirdCount>> {
        #[derive(Deserialize)]
        struct BirdCountsResponse {
            #[serde(default)]
            status: Option<String>,
            #[serde(default)]
            message: Option<String>,
            #[serde(default)]
            bird_counts: Vec<BirdCount>,
        }

        let url = self.url("get_birds_by_event");
        tracing::debug!(sampling_event_id = %sampling_event_id, "Fetching birds by event");

        let response = Self::check_http(
            self.http_client
                .post(&url)
                .json(&json!({ "sampling_event_id": sampling_event_id }))
                .send()
                .await?,
        )
        .await?;
        let body: BirdCountsResponse = response.json().await?;

        if body.status.as_deref() == Some("success") {
            Ok(body.bird_counts)
        } else {
            Err(Error::Remote(body.message.unwrap_or_else(|| {
                "Failed to fetch birds for event".to_string()
            })))
        }
    }

    /// All sightings of one species, for heatmaps and time series
    pub async fn get_sightings(&self, bird_name: &str) -> Result<Vec<Sighting>> {
        #[derive(Deserialize)]
        struct SightingsResponse {
            #[serde(default)]
            sightings: Vec<Sighting>,
        }

        let url = self.url("get_sightings");
        tracing::debug!(bird_name = %bird_name, "Fetching sightings");

        let response = Self::check_http(
            self.http_client
                .get(&url)
                .query(&[("bird_name", bird_name)])
                .send()
                .await?,
        )
        .await?;
        let body: SightingsResponse = response.json().await?;
        Ok(body.sightings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation_strips_trailing_slash() {
        let client = ApiClient::new("http://localhost:8000/BirdApp/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000/BirdApp");
    }

    #[test]
    fn ack_accepts_both_discriminator_spellings() {
        let status: Ack = serde_json::from_str(r#"{"status": "success"}"#).unwrap();
        assert!(status.is_success());

        let success: Ack = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(success.is_success());

        let failure: Ack =
            serde_json::from_str(r#"{"status": "error", "message": "bad input"}"#).unwrap();
        assert!(!failure.is_success());
        assert!(failure.into_error().to_string().contains("bad input"));
    }
}
