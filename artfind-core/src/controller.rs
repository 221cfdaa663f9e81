//! Search and save actions behind the search page.
//!
//! Failures are logged here and handed back typed; the page drops them
//! without rendering anything.

use crate::graphql::{ArtistData, ArtistSaver, GraphqlError};
use crate::search::{map_volumes, SearchApi, SearchError};
use crate::session::Session;
use artfind_common::SearchResult;
use std::rc::Rc;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("no search result with id {0}")]
    UnknownResult(String),
    #[error("not logged in")]
    NotAuthenticated,
    #[error("save mutation failed: {0}")]
    Mutation(#[from] GraphqlError),
}

#[derive(Clone)]
pub struct SearchController {
    search: Rc<dyn SearchApi>,
    saver: Rc<dyn ArtistSaver>,
}

impl SearchController {
    pub fn new(search: Rc<dyn SearchApi>, saver: Rc<dyn ArtistSaver>) -> Self {
        Self { search, saver }
    }

    /// Run a search and map the response.
    ///
    /// Returns `Ok(None)` without touching the network when `input` is blank.
    pub async fn search(&self, input: &str) -> Result<Option<Vec<SearchResult>>, SearchError> {
        let query = input.trim();
        if query.is_empty() {
            debug!("Ignoring blank search");
            return Ok(None);
        }

        match self.search.search(query).await {
            Ok(response) => {
                let results = map_volumes(response);
                info!("Search '{}' returned {} results", query, results.len());
                Ok(Some(results))
            }
            Err(e) => {
                warn!("Search '{}' failed: {}", query, e);
                Err(e)
            }
        }
    }

    /// Save the result with `artist_id` for the session's user.
    ///
    /// Nothing is sent when the session has no usable token. On success the
    /// caller records `artist_id` as saved.
    pub async fn save(
        &self,
        session: &Session,
        results: &[SearchResult],
        artist_id: &str,
    ) -> Result<(), SaveError> {
        let Some(artist) = results.iter().find(|r| r.id == artist_id) else {
            warn!("Save requested for unknown result {}", artist_id);
            return Err(SaveError::UnknownResult(artist_id.to_string()));
        };

        let Some(token) = session.token() else {
            debug!("Save of {} skipped: not logged in", artist_id);
            return Err(SaveError::NotAuthenticated);
        };

        match self.saver.save_artist(token, &ArtistData::from(artist)).await {
            Ok(profile) => {
                info!(
                    "Saved {} for {} ({} saved)",
                    artist.id,
                    profile.username,
                    profile.saved_artists.len()
                );
                Ok(())
            }
            Err(e) => {
                warn!("Saving {} failed: {}", artist.id, e);
                Err(e.into())
            }
        }
    }
}
