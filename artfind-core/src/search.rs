//! Client for the book volume search API and the mapping of its items into
//! [`SearchResult`]s.

use artfind_common::SearchResult;
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed with status {0}")]
    RequestFailed(u16),
    #[error("network or parse error: {0}")]
    Network(#[from] reqwest::Error),
}

// -- Response envelope types --

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct VolumesResponse {
    /// Absent when nothing matched
    #[serde(default)]
    pub items: Vec<Volume>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct Volume {
    pub id: String,
    #[serde(rename = "volumeInfo", default)]
    pub volume_info: VolumeInfo,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct VolumeInfo {
    #[serde(default)]
    pub title: String,
    pub authors: Option<Vec<String>>,
    pub description: Option<String>,
    #[serde(rename = "imageLinks")]
    pub image_links: Option<ImageLinks>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct ImageLinks {
    pub thumbnail: Option<String>,
}

impl From<Volume> for SearchResult {
    fn from(volume: Volume) -> Self {
        let info = volume.volume_info;
        SearchResult::new(
            volume.id,
            info.authors,
            info.title,
            info.description,
            info.image_links.and_then(|links| links.thumbnail),
        )
    }
}

/// Map every item of a response, preserving order.
pub fn map_volumes(response: VolumesResponse) -> Vec<SearchResult> {
    response.items.into_iter().map(SearchResult::from).collect()
}

/// Remote search backend.
#[async_trait(?Send)]
pub trait SearchApi {
    /// Run a free-text query and return the raw response.
    async fn search(&self, query: &str) -> Result<VolumesResponse, SearchError>;
}

/// Book volume search over HTTP.
pub struct BooksSearchClient {
    url: String,
    http: reqwest::Client,
}

impl BooksSearchClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait(?Send)]
impl SearchApi for BooksSearchClient {
    async fn search(&self, query: &str) -> Result<VolumesResponse, SearchError> {
        debug!("Search request: {} q={}", self.url, query);
        let response = self
            .http
            .get(&self.url)
            .query(&[("q", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::RequestFailed(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}
