//! artfind-common - view-model types shared by the core, UI and web crates
//!
//! No async, no I/O. Everything here is plain data plus the page state
//! machine that the search page drives.

pub mod saved_ids;
pub mod search_page;
pub mod search_result;

pub use saved_ids::SavedIdSet;
pub use search_page::{SaveStatus, SearchPage, SearchPhase};
pub use search_result::{SearchResult, NO_AUTHOR_PLACEHOLDER};
