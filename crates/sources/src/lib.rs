//! # Sources Crate
//!
//! This crate implements candidate generation for film recommendations.
//!
//! ## Components
//!
//! ### Genre Source
//! Every film in the requested genre. Used by genre recommendations, for
//! both anonymous and known users.
//!
//! ### Cast Source
//! Every film featuring the requested cast member. Used by cast
//! recommendations.
//!
//! ### User Context
//! What the downstream filters need to know about a known user: the set of
//! watched titles and their favorite genre.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{GenreSource, user_context::build_user_context};
//! use data_loader::{Catalog, Genre};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::load_from_files(users, films)?);
//! let user = catalog.find_user("bob").unwrap();
//! let context = build_user_context(&catalog, user);
//!
//! let genre = GenreSource::new(catalog.clone());
//! let candidates = genre.get_candidates(Genre::Comedy);
//! ```

// Public modules
pub mod types;
pub mod user_context;
pub mod genre;
pub mod cast;

// Re-export commonly used types
pub use types::{Candidate, CandidateSource, UserContext};
pub use genre::GenreSource;
pub use cast::CastSource;

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{Catalog, Film, Genre};
    use std::sync::Arc;

    fn create_test_catalog() -> Catalog {
        let mut catalog = Catalog::new();

        catalog.insert_film(Film {
            name: "Test Film".to_string(),
            director: "Someone".to_string(),
            cast: "Somebody".to_string(),
            genre: Genre::Action,
            imdb: 7.0,
        });

        catalog
    }

    #[test]
    fn test_sources_share_one_catalog() {
        let catalog = Arc::new(create_test_catalog());
        let genre = GenreSource::new(catalog.clone());
        let cast = CastSource::new(catalog.clone());

        let by_genre = genre.get_candidates(Genre::Action);
        let by_cast = cast.get_candidates("Somebody");

        // Both borrow the very same Film out of the shared catalog
        assert!(std::ptr::eq(by_genre[0].film, by_cast[0].film));
        assert_eq!(Arc::strong_count(&catalog), 3);
    }

    #[test]
    fn test_candidate_creation() {
        let catalog = create_test_catalog();
        let film = &catalog.films()[0];

        let candidate = Candidate::new(film, CandidateSource::Genre);
        assert_eq!(candidate.score, None);

        let scored = candidate.with_score(4.2);
        assert_eq!(scored.score, Some(4.2));
        assert_eq!(scored.film.name, "Test Film");
    }

    #[test]
    fn test_anonymous_context() {
        let context = UserContext::anonymous();
        assert!(context.is_anonymous());
        assert_eq!(context.username(), None);
        assert!(context.watched_films.is_empty());
    }
}
