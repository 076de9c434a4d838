//! CurseForge v1 API client

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::config::{LIST_TIMEOUT, SEARCH_TIMEOUT};
use crate::provider::ModProvider;
use crate::provider::error::ProviderError;
use crate::provider::types::{ProjectFile, SearchHit, Source};

/// Default base URL for the CurseForge API
const DEFAULT_BASE_URL: &str = "https://api.curseforge.com/v1";

/// CurseForge game id for Minecraft
const GAME_ID_MINECRAFT: u32 = 432;

/// Files endpoint sort: field 3 is file date, order 2 is descending
const SORT_FIELD_FILE_DATE: u32 = 3;
const SORT_ORDER_DESC: u32 = 2;

const SEARCH_PAGE_SIZE: u32 = 5;
const FILES_PAGE_SIZE: u32 = 80;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<SearchMod>,
}

#[derive(Debug, Deserialize)]
struct SearchMod {
    id: u64,
    links: Option<ModLinks>,
    #[serde(default)]
    authors: Vec<ModAuthor>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModLinks {
    website_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ModAuthor {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FilesResponse {
    #[serde(default)]
    data: Vec<ModFile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModFile {
    id: u64,
    #[serde(default)]
    game_versions: Vec<String>,
}

/// Client for the CurseForge v1 API. Construction requires an API key;
/// without one the provider is disabled upstream and this type is never
/// built, so it does not model the anonymous case.
pub struct CurseForgeClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl CurseForgeClient {
    /// Creates a client against a custom base URL.
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("mod-compat")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Creates a client against the production API.
    pub fn with_api_key(api_key: &str) -> Self {
        Self::new(DEFAULT_BASE_URL, api_key)
    }
}

#[async_trait]
impl ModProvider for CurseForgeClient {
    fn source(&self) -> Source {
        Source::CurseForge
    }

    async fn search(&self, name: &str) -> Result<Option<SearchHit>, ProviderError> {
        let url = format!("{}/mods/search", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .header("x-api-key", &self.api_key)
            .query(&[
                ("gameId", GAME_ID_MINECRAFT.to_string()),
                ("searchFilter", name.to_string()),
                ("pageSize", SEARCH_PAGE_SIZE.to_string()),
            ])
            .timeout(SEARCH_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("CurseForge search returned status {}: {}", status, url);
            return Err(ProviderError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let body: SearchResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse CurseForge search response: {}", e);
            ProviderError::InvalidResponse(e.to_string())
        })?;

        Ok(body.data.into_iter().next().map(|hit| SearchHit {
            project_id: hit.id.to_string(),
            url: hit.links.and_then(|l| l.website_url),
            author: hit.authors.into_iter().next().and_then(|a| a.name),
        }))
    }

    async fn list_files(&self, project_id: &str) -> Result<Vec<ProjectFile>, ProviderError> {
        let url = format!("{}/mods/{}/files", self.base_url, project_id);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .header("x-api-key", &self.api_key)
            .query(&[
                ("pageSize", FILES_PAGE_SIZE.to_string()),
                ("sortField", SORT_FIELD_FILE_DATE.to_string()),
                ("sortOrder", SORT_ORDER_DESC.to_string()),
            ])
            .timeout(LIST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("CurseForge files returned status {}: {}", status, url);
            return Err(ProviderError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let body: FilesResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse CurseForge files response: {}", e);
            ProviderError::InvalidResponse(e.to_string())
        })?;

        Ok(body
            .data
            .into_iter()
            .map(|f| ProjectFile {
                id: f.id.to_string(),
                game_versions: f.game_versions,
            })
            .collect())
    }
}
