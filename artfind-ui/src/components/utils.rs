//! Text helpers for the search page

/// Heading above the result grid
pub fn results_heading(count: usize) -> String {
    if count > 0 {
        format!("Viewing {} results:", count)
    } else {
        "Search for a artist to begin".to_string()
    }
}

/// Authors joined for display on a card
pub fn authors_line(authors: &[String]) -> String {
    authors.join(", ")
}

/// Label of the save button
pub fn save_button_label(saved: bool) -> &'static str {
    if saved {
        "This artist has already been saved!"
    } else {
        "Save this Artist!"
    }
}

/// Alt text for a result's cover image
pub fn cover_alt(title: &str) -> String {
    format!("The cover for {}", title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_counts_results() {
        assert_eq!(results_heading(1), "Viewing 1 results:");
        assert_eq!(results_heading(10), "Viewing 10 results:");
    }

    #[test]
    fn test_heading_without_results() {
        assert_eq!(results_heading(0), "Search for a artist to begin");
    }

    #[test]
    fn test_authors_line() {
        assert_eq!(authors_line(&["Frank Herbert".to_string()]), "Frank Herbert");
        assert_eq!(
            authors_line(&["Terry Pratchett".to_string(), "Neil Gaiman".to_string()]),
            "Terry Pratchett, Neil Gaiman"
        );
    }

    #[test]
    fn test_save_button_label() {
        assert_eq!(save_button_label(false), "Save this Artist!");
        assert_eq!(save_button_label(true), "This artist has already been saved!");
    }

    #[test]
    fn test_cover_alt() {
        assert_eq!(cover_alt("Dune"), "The cover for Dune");
    }
}
