//! Filter to keep only films in the user's favorite genre.
//!
//! Cast recommendations for a known user are scoped to the single genre
//! that user watches most.

use crate::traits::Filter;
use anyhow::Result;
use sources::{Candidate, UserContext};

/// Keeps only candidates whose genre equals `UserContext.favorite_genre`.
///
/// A context without a favorite genre (anonymous, or nothing in the watch
/// history resolves to a catalog film) lets nothing through.
pub struct FavoriteGenreFilter;

impl Filter for FavoriteGenreFilter {
    fn name(&self) -> &str {
        "FavoriteGenreFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<Candidate<'a>>,
        context: &UserContext<'_>,
    ) -> Result<Vec<Candidate<'a>>> {
        let Some(favorite) = context.favorite_genre else {
            return Ok(Vec::new());
        };

        let filtered: Vec<Candidate<'a>> = candidates
            .into_iter()
            .filter(|candidate| candidate.film.genre == favorite)
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{Film, Genre};
    use sources::CandidateSource;

    fn create_test_films() -> Vec<Film> {
        [
            ("Heat", Genre::Action),
            ("Scarface", Genre::Drama),
            ("Ronin", Genre::Action),
        ]
        .into_iter()
        .map(|(name, genre)| Film {
            name: name.to_string(),
            director: "dir".to_string(),
            cast: "Al Pacino".to_string(),
            genre,
            imdb: 7.5,
        })
        .collect()
    }

    #[test]
    fn test_favorite_genre_filter() {
        let films = create_test_films();
        let mut context = UserContext::anonymous();
        context.favorite_genre = Some(Genre::Action);

        let candidates = films
            .iter()
            .map(|f| Candidate::new(f, CandidateSource::Cast))
            .collect();

        let filtered = FavoriteGenreFilter.apply(candidates, &context).unwrap();

        let names: Vec<&str> = filtered.iter().map(|c| c.film.name.as_str()).collect();
        assert_eq!(names, vec!["Heat", "Ronin"]);
    }

    #[test]
    fn test_no_favorite_genre_drops_everything() {
        let films = create_test_films();
        let candidates = films
            .iter()
            .map(|f| Candidate::new(f, CandidateSource::Cast))
            .collect();

        let filtered = FavoriteGenreFilter
            .apply(candidates, &UserContext::anonymous())
            .unwrap();

        assert!(filtered.is_empty());
    }
}
