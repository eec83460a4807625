//! Local substring search over the catalog.
//!
//! Deterministic and synchronous: the authoritative first batch of results is
//! always produced here before any recommendation augmentation is attempted.

use crate::models::Movie;

/// Filters the catalog to entries whose title, genre, or description contains
/// the query as a case-insensitive substring, preserving catalog order.
///
/// An empty or whitespace-only query returns the entire catalog unfiltered.
/// Non-empty queries match as given; interior and surrounding whitespace is
/// significant.
pub fn filter_catalog(query: &str, catalog: &[Movie]) -> Vec<Movie> {
    if query.trim().is_empty() {
        return catalog.to_vec();
    }

    let needle = query.to_lowercase();

    catalog
        .iter()
        .filter(|movie| {
            movie.title.to_lowercase().contains(&needle)
                || movie.genre.to_lowercase().contains(&needle)
                || movie.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_catalog;

    fn titles(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_full_catalog() {
        let catalog = seed_catalog();
        let results = filter_catalog("", &catalog);
        assert_eq!(results, catalog);
    }

    #[test]
    fn test_whitespace_query_returns_full_catalog() {
        let catalog = seed_catalog();
        let results = filter_catalog("   \t", &catalog);
        assert_eq!(results, catalog);
    }

    #[test]
    fn test_query_sci_matches_inception_by_genre() {
        let catalog = seed_catalog();
        let subset = vec![catalog[0].clone(), catalog[1].clone()];

        let results = filter_catalog("sci", &subset);
        assert_eq!(titles(&results), vec!["Inception"]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let catalog = seed_catalog();
        let results = filter_catalog("MATRIX", &catalog);
        assert_eq!(titles(&results), vec!["The Matrix"]);
    }

    #[test]
    fn test_matches_on_description() {
        let catalog = seed_catalog();
        let results = filter_catalog("joker", &catalog);
        assert_eq!(titles(&results), vec!["The Dark Knight"]);
    }

    #[test]
    fn test_catalog_order_preserved() {
        let catalog = seed_catalog();
        let results = filter_catalog("drama", &catalog);
        assert_eq!(
            titles(&results),
            vec!["Pulp Fiction", "The Godfather", "Forrest Gump"]
        );
    }

    #[test]
    fn test_no_match_returns_empty() {
        let catalog = seed_catalog();
        let results = filter_catalog("western musical", &catalog);
        assert!(results.is_empty());
    }

    #[test]
    fn test_whitespace_in_query_is_significant() {
        let catalog = seed_catalog();

        // No title, genre, or description contains "knight" followed by a space
        assert!(filter_catalog("knight ", &catalog).is_empty());

        // " dark " appears inside "The Dark Knight"
        let results = filter_catalog(" dark ", &catalog);
        assert_eq!(titles(&results), vec!["The Dark Knight"]);
    }
}
