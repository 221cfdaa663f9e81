//! artfind-ui - Pure view components for the artist search page
//!
//! Components take plain data plus callbacks; fetching, saving and storage
//! are left to the app crate.

pub mod components;

pub use components::*;
