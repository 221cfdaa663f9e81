use serde::{Deserialize, Serialize};

/// Author line shown when the search API returns no authors for an item.
pub const NO_AUTHOR_PLACEHOLDER: &str = "No author to display";

/// One item of a search response, resolved into what the page renders.
///
/// Optional fields of the remote payload are resolved when the result is
/// built, so `authors` is never empty and `image_url` is an empty string when
/// the item has no thumbnail.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub authors: Vec<String>,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
}

impl SearchResult {
    pub fn new(
        id: String,
        authors: Option<Vec<String>>,
        title: String,
        description: Option<String>,
        thumbnail: Option<String>,
    ) -> Self {
        let authors = match authors {
            Some(authors) if !authors.is_empty() => authors,
            _ => vec![NO_AUTHOR_PLACEHOLDER.to_string()],
        };

        Self {
            id,
            authors,
            title,
            description,
            image_url: thumbnail.unwrap_or_default(),
        }
    }

    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_authors_use_placeholder() {
        let result = SearchResult::new("a".into(), None, "Title".into(), None, None);
        assert_eq!(result.authors, vec![NO_AUTHOR_PLACEHOLDER.to_string()]);
    }

    #[test]
    fn test_empty_authors_use_placeholder() {
        let result = SearchResult::new("a".into(), Some(vec![]), "Title".into(), None, None);
        assert_eq!(result.authors, vec![NO_AUTHOR_PLACEHOLDER.to_string()]);
    }

    #[test]
    fn test_authors_keep_order() {
        let result = SearchResult::new(
            "a".into(),
            Some(vec!["Terry Pratchett".into(), "Neil Gaiman".into()]),
            "Good Omens".into(),
            None,
            None,
        );
        assert_eq!(result.authors, vec!["Terry Pratchett", "Neil Gaiman"]);
    }

    #[test]
    fn test_missing_thumbnail_is_empty_string() {
        let result = SearchResult::new("a".into(), None, "Title".into(), None, None);
        assert_eq!(result.image_url, "");
        assert!(!result.has_image());
    }
}
