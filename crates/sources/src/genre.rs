//! Genre Source - every film of one genre
//!
//! Feeds genre recommendations. Produces unscored candidates in catalog
//! order; exclusion of watched films and scoring happen downstream.

use crate::types::{Candidate, CandidateSource};
use data_loader::{Catalog, Genre};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Generates candidates for a genre request
#[derive(Clone)]
pub struct GenreSource {
    /// Shared reference to the catalog (read-only, so no Mutex needed)
    catalog: Arc<Catalog>,
}

impl GenreSource {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// All films of `genre`, in catalog order
    #[instrument(skip(self))]
    pub fn get_candidates(&self, genre: Genre) -> Vec<Candidate<'_>> {
        let candidates: Vec<Candidate<'_>> = self
            .catalog
            .films_by_genre(genre)
            .map(|film| Candidate::new(film, CandidateSource::Genre))
            .collect();

        debug!("Generated {} genre candidates", candidates.len());
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::Film;

    fn create_test_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        for (name, genre) in [
            ("A", Genre::Comedy),
            ("B", Genre::Drama),
            ("C", Genre::Comedy),
        ] {
            catalog.insert_film(Film {
                name: name.to_string(),
                director: "dir".to_string(),
                cast: "cast".to_string(),
                genre,
                imdb: 5.0,
            });
        }
        catalog
    }

    #[test]
    fn test_get_candidates() {
        let source = GenreSource::new(Arc::new(create_test_catalog()));

        let candidates = source.get_candidates(Genre::Comedy);
        let names: Vec<&str> = candidates.iter().map(|c| c.film.name.as_str()).collect();

        assert_eq!(names, vec!["A", "C"]);
        for candidate in &candidates {
            assert_eq!(candidate.source, CandidateSource::Genre);
            assert_eq!(candidate.score, None);
        }
    }

    #[test]
    fn test_no_films_in_genre() {
        let source = GenreSource::new(Arc::new(create_test_catalog()));
        assert!(source.get_candidates(Genre::Horror).is_empty());
    }
}
