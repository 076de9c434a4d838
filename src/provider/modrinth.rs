//! Modrinth v2 API client

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::config::{LIST_TIMEOUT, SEARCH_TIMEOUT};
use crate::provider::ModProvider;
use crate::provider::error::ProviderError;
use crate::provider::types::{ProjectFile, SearchHit, Source};

/// Default base URL for the Modrinth API
const DEFAULT_BASE_URL: &str = "https://api.modrinth.com/v2";

/// Public site base for synthesized project URLs. Search hits carry a
/// slug, not a link, so the page URL is built from it.
const PROJECT_URL_BASE: &str = "https://modrinth.com/mod";

const SEARCH_LIMIT: u32 = 5;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    hits: Vec<SearchProject>,
}

#[derive(Debug, Deserialize)]
struct SearchProject {
    project_id: String,
    slug: Option<String>,
    author: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProjectVersion {
    id: String,
    #[serde(default)]
    game_versions: Vec<String>,
}

/// Client for the Modrinth v2 API. No credential required.
pub struct ModrinthClient {
    client: reqwest::Client,
    base_url: String,
}

impl ModrinthClient {
    /// Creates a client against a custom base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("mod-compat")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
        }
    }
}

impl Default for ModrinthClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl ModProvider for ModrinthClient {
    fn source(&self) -> Source {
        Source::Modrinth
    }

    async fn search(&self, name: &str) -> Result<Option<SearchHit>, ProviderError> {
        let url = format!("{}/search", self.base_url);
        let facets = serde_json::json!([["project_type:mod"]]).to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("query", name.to_string()),
                ("limit", SEARCH_LIMIT.to_string()),
                ("facets", facets),
            ])
            .timeout(SEARCH_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Modrinth search returned status {}: {}", status, url);
            return Err(ProviderError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let body: SearchResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse Modrinth search response: {}", e);
            ProviderError::InvalidResponse(e.to_string())
        })?;

        Ok(body.hits.into_iter().next().map(|hit| SearchHit {
            project_id: hit.project_id,
            url: hit
                .slug
                .map(|slug| format!("{}/{}", PROJECT_URL_BASE, slug)),
            author: hit.author,
        }))
    }

    async fn list_files(&self, project_id: &str) -> Result<Vec<ProjectFile>, ProviderError> {
        let url = format!("{}/project/{}/version", self.base_url, project_id);

        let response = self.client.get(&url).timeout(LIST_TIMEOUT).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Modrinth versions returned status {}: {}", status, url);
            return Err(ProviderError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let versions: Vec<ProjectVersion> = response.json().await.map_err(|e| {
            warn!("Failed to parse Modrinth versions response: {}", e);
            ProviderError::InvalidResponse(e.to_string())
        })?;

        Ok(versions
            .into_iter()
            .map(|v| ProjectFile {
                id: v.id,
                game_versions: v.game_versions,
            })
            .collect())
    }
}
