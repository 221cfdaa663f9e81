//! artfind-core - clients and orchestration behind the artist search page
//!
//! Platform-neutral: builds for the browser (wasm32) and for native hosts,
//! where the tests run. Browser-only concerns (localStorage, rendering) live
//! in `artfind-web`.

pub mod config;
pub mod controller;
pub mod graphql;
pub mod persistence;
pub mod search;
pub mod session;

pub use config::{ClientConfig, ConfigError};
pub use controller::{SaveError, SearchController};
pub use graphql::{ArtistData, ArtistSaver, GraphqlClient, GraphqlError, UserProfile, UserSummary};
pub use persistence::{MemoryIdStore, SavedIdStore};
pub use search::{BooksSearchClient, SearchApi, SearchError};
pub use session::Session;
