//! GraphQL documents sent by the client.
//!
//! Saved artists are selected with the same fields the save mutation sends,
//! so a profile's saved list and a search result share one shape.

/// Current user with their saved artists.
pub const GET_ME: &str = r#"
query me {
    me {
        _id
        username
        email
        artCount
        savedArtist {
            artistId
            authors
            title
            description
            image
        }
    }
}
"#;

/// Every registered user.
pub const QUERY_USERS: &str = r#"
query users {
    users {
        _id
        username
        email
    }
}
"#;

/// Save one artist to the logged-in user's account.
pub const SAVE_ARTIST: &str = r#"
mutation saveArtist($artistData: ArtistInput!) {
    saveArtist(artistData: $artistData) {
        _id
        username
        email
        artCount
        savedArtist {
            artistId
            authors
            title
            description
            image
        }
    }
}
"#;
