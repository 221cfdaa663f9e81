//! App-wide services, built once and shared through Dioxus context.

use crate::storage::LocalIdStore;
use artfind_core::{BooksSearchClient, ClientConfig, GraphqlClient, SearchController};
use std::rc::Rc;
use tracing::error;

#[derive(Clone)]
pub struct AppContext {
    pub config: ClientConfig,
    pub controller: SearchController,
    pub saved_ids: Rc<LocalIdStore>,
}

impl AppContext {
    /// Build from the environment, falling back to defaults on a bad config.
    pub fn load() -> Self {
        let config = ClientConfig::load().unwrap_or_else(|e| {
            error!("Invalid configuration, using defaults: {}", e);
            ClientConfig::default()
        });
        Self::new(resolve_on_page(config))
    }

    pub fn new(config: ClientConfig) -> Self {
        let controller = SearchController::new(
            Rc::new(BooksSearchClient::new(config.search_url.clone())),
            Rc::new(GraphqlClient::new(config.graphql_url.clone())),
        );
        let saved_ids = Rc::new(LocalIdStore::new(config.saved_ids_key.clone()));

        Self {
            config,
            controller,
            saved_ids,
        }
    }
}

/// Root-relative endpoints point at the origin serving the page.
fn resolve_on_page(config: ClientConfig) -> ClientConfig {
    if !config.has_relative_urls() {
        return config;
    }
    let Some(origin) = page_origin() else {
        error!("No page origin, relative endpoints left unresolved");
        return config;
    };
    config.clone().resolve_against(&origin).unwrap_or_else(|e| {
        error!("{}", e);
        config
    })
}

fn page_origin() -> Option<String> {
    web_sys_x::window().and_then(|w| w.location().origin().ok())
}
