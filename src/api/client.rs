//! HTTP client for the repository-structure endpoint.

use super::RepoStructureResponse;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_structure_path")]
    pub structure_path: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_structure_path() -> String {
    "/api/repo_structure".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            structure_path: default_structure_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn structure_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.structure_path.trim_start_matches('/')
        )
    }
}

/// Fetches the indented structure listing from the backend.
///
/// Failures are returned as [`ApiError::Fetch`]; there is no retry.
pub struct StructureClient {
    http: reqwest::Client,
    url: String,
}

impl StructureClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            url: config.structure_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch(&self) -> Result<RepoStructureResponse, ApiError> {
        debug!(url = %self.url, "Requesting repository structure");
        let response = self.http.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Fetch(format!("HTTP {}", status)));
        }

        let body: RepoStructureResponse = response.json().await?;
        info!(
            url = %self.url,
            has_structure = body.file_structure.is_some(),
            "Fetched repository structure"
        );
        Ok(body)
    }
}
