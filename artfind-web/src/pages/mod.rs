mod layout;
mod search_artists;

pub use layout::AppLayout;
pub use search_artists::SearchArtists;
