//! # Data Loader Crate
//!
//! This crate handles loading the film and user CSV files into a read-only
//! in-memory [`Catalog`].
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Film, User, WatchEntry, Genre, RatingLabel, Catalog)
//! - **parser**: Parse the CSV files into Rust structs
//! - **index**: Build the Catalog and check cross references
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_files(Path::new("users.csv"), Path::new("films.csv"))?;
//!
//! let user = catalog.find_user("bob").unwrap();
//! let film = catalog.find_film("Heat").unwrap();
//!
//! println!("{} watched {} films", user.username, user.history.len());
//! ```
//!
//! ## Ownership
//!
//! The Catalog owns every record. Everything downstream (sources, scorer,
//! ranker) borrows `&Film` / `&User` out of it, usually through an
//! `Arc<Catalog>` shared across components.

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{Catalog, Film, Genre, RatingLabel, User, WatchEntry};

#[cfg(test)]
mod tests {
    use super::*;

    fn film(name: &str, cast: &str, genre: Genre, imdb: f64) -> Film {
        Film {
            name: name.to_string(),
            director: "dir".to_string(),
            cast: cast.to_string(),
            genre,
            imdb,
        }
    }

    #[test]
    fn test_catalog_creation() {
        // Test that we can create an empty Catalog
        let catalog = Catalog::new();
        let (users, films, entries) = catalog.counts();

        assert_eq!(users, 0);
        assert_eq!(films, 0);
        assert_eq!(entries, 0);
    }

    #[test]
    fn test_insert_film() {
        let mut catalog = Catalog::new();

        assert!(catalog.insert_film(film("Heat", "Al Pacino", Genre::Action, 8.3)));

        let retrieved = catalog.find_film("Heat").unwrap();
        assert_eq!(retrieved.cast, "Al Pacino");
        assert_eq!(retrieved.genre, Genre::Action);
    }

    #[test]
    fn test_insert_user() {
        let mut catalog = Catalog::new();

        let user = User::new("bob", vec![WatchEntry::new("Heat", RatingLabel::Average)]);
        assert!(catalog.insert_user(user));
        assert!(!catalog.insert_user(User::new("bob", vec![])));

        // First record wins lookups, both are listed
        assert_eq!(catalog.find_user("bob").unwrap().history.len(), 1);
        assert_eq!(catalog.users().len(), 2);
    }

    #[test]
    fn test_secondary_indices() {
        let mut catalog = Catalog::new();
        catalog.insert_film(film("A", "castY", Genre::Comedy, 8.0));
        catalog.insert_film(film("B", "castY", Genre::Drama, 6.0));
        catalog.insert_film(film("C", "castZ", Genre::Comedy, 7.0));

        let comedies: Vec<&str> = catalog
            .films_by_genre(Genre::Comedy)
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(comedies, vec!["A", "C"]);

        let cast_y: Vec<&str> = catalog
            .films_by_cast("castY")
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(cast_y, vec!["A", "B"]);
    }

    #[test]
    fn test_empty_queries() {
        let catalog = Catalog::new();

        // Querying non-existent data should return None or empty iterators
        assert!(catalog.find_user("nobody").is_none());
        assert!(catalog.find_film("nothing").is_none());
        assert_eq!(catalog.films_by_genre(Genre::Horror).count(), 0);
        assert_eq!(catalog.films_by_cast("nobody").count(), 0);
    }
}
