//! GraphQL transport plus the typed operations the page needs.

pub mod documents;

use artfind_common::SearchResult;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum GraphqlError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("GraphQL error: {0}")]
    Server(String),
    #[error("response had no data")]
    MissingData,
}

// -- Request/response envelope types --

#[derive(Debug, Serialize)]
struct GraphqlRequest<'a, V> {
    query: &'a str,
    variables: V,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorEntry {
    message: String,
}

// -- Operation data types --

/// Artist fields as sent in `ArtistInput` and selected in `savedArtist`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistData {
    pub artist_id: String,
    pub authors: Vec<String>,
    pub title: String,
    pub description: Option<String>,
    pub image: String,
}

impl From<&SearchResult> for ArtistData {
    fn from(result: &SearchResult) -> Self {
        Self {
            artist_id: result.id.clone(),
            authors: result.authors.clone(),
            title: result.title.clone(),
            description: result.description.clone(),
            image: result.image_url.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(rename = "artCount", default)]
    pub art_count: u32,
    #[serde(rename = "savedArtist", default)]
    pub saved_artists: Vec<ArtistData>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
}

#[derive(Deserialize)]
struct MeData {
    me: UserProfile,
}

#[derive(Deserialize)]
struct UsersData {
    users: Vec<UserSummary>,
}

#[derive(Deserialize)]
struct SaveArtistData {
    #[serde(rename = "saveArtist")]
    save_artist: UserProfile,
}

/// Backend that records a saved artist for the user owning `token`.
#[async_trait(?Send)]
pub trait ArtistSaver {
    async fn save_artist(&self, token: &str, artist: &ArtistData)
        -> Result<UserProfile, GraphqlError>;
}

/// Minimal GraphQL-over-HTTP client.
pub struct GraphqlClient {
    endpoint: String,
    http: reqwest::Client,
}

impl GraphqlClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    /// POST `{ query, variables }`, with a bearer token when given.
    ///
    /// Any entry in `errors` fails the call, even when `data` is present.
    pub async fn execute<V, T>(
        &self,
        query: &str,
        variables: V,
        token: Option<&str>,
    ) -> Result<T, GraphqlError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let mut request = self
            .http
            .post(&self.endpoint)
            .json(&GraphqlRequest { query, variables });
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("GraphQL endpoint returned {}", status);
            return Err(GraphqlError::Status(status.as_u16()));
        }

        let envelope: GraphqlResponse<T> = response.json().await?;
        if !envelope.errors.is_empty() {
            let message = envelope
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(GraphqlError::Server(message));
        }

        envelope.data.ok_or(GraphqlError::MissingData)
    }

    pub async fn me(&self, token: &str) -> Result<UserProfile, GraphqlError> {
        let data: MeData = self
            .execute(documents::GET_ME, json!({}), Some(token))
            .await?;
        Ok(data.me)
    }

    pub async fn users(&self) -> Result<Vec<UserSummary>, GraphqlError> {
        let data: UsersData = self.execute(documents::QUERY_USERS, json!({}), None).await?;
        Ok(data.users)
    }
}

#[async_trait(?Send)]
impl ArtistSaver for GraphqlClient {
    async fn save_artist(
        &self,
        token: &str,
        artist: &ArtistData,
    ) -> Result<UserProfile, GraphqlError> {
        debug!("saveArtist mutation for {}", artist.artist_id);
        let data: SaveArtistData = self
            .execute(
                documents::SAVE_ARTIST,
                json!({ "artistData": artist }),
                Some(token),
            )
            .await?;
        Ok(data.save_artist)
    }
}
