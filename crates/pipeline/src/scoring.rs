//! Score engine for genre recommendations.
//!
//! Two scoring modes, picked by whether the request has a user:
//!
//! - **Known user**: imdb plus director/cast affinity taken from the user's
//!   own ratings of watched films in the same genre.
//! - **Anonymous**: crowd reaction. How every user rated this exact title,
//!   ignoring imdb.
//!
//! Both are pure and total. A watched title that is missing from the
//! catalog contributes nothing.

use crate::effects::{cast_effect, director_effect};
use data_loader::{Catalog, Film, RatingLabel, User};
use sources::{Candidate, UserContext};
use std::sync::Arc;
use tracing::debug;

/// Weight of the film's own imdb rating for a known user
pub const IMDB_WEIGHT: f64 = 0.7;
/// Weight of the director affinity effect
pub const DIRECTOR_WEIGHT: f64 = 0.5;
/// Weight of the cast affinity effect
pub const CAST_WEIGHT: f64 = 0.6;

// Per-reaction weights for anonymous scoring
pub const CROWD_PERFECT_WEIGHT: f64 = 0.7;
pub const CROWD_AVERAGE_WEIGHT: f64 = 0.5;
pub const CROWD_POOR_WEIGHT: f64 = -0.2;

/// How many times users reacted to one title with each known label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReactionCounts {
    pub perfect: usize,
    pub average: usize,
    pub poor: usize,
}

impl ReactionCounts {
    /// Anonymous score for these counts
    pub fn score(&self) -> f64 {
        self.perfect as f64 * CROWD_PERFECT_WEIGHT
            + self.average as f64 * CROWD_AVERAGE_WEIGHT
            + self.poor as f64 * CROWD_POOR_WEIGHT
    }
}

/// Computes recommendation scores against a shared catalog.
#[derive(Clone)]
pub struct ScoreEngine {
    catalog: Arc<Catalog>,
}

impl ScoreEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Score `film` for a user with a watch history.
    ///
    /// ## Algorithm
    /// 1. Start from `imdb * 0.7`
    /// 2. Walk the history in order, skipping titles not in the catalog or
    ///    not in the candidate's genre
    /// 3. A watched film with the same director SETS the director effect
    ///    from that entry's rating; same for cast. Later matches overwrite
    ///    earlier ones (last match wins, no max, no sum)
    /// 4. Add `director * 0.5 + cast * 0.6`
    pub fn score_for_known_user(&self, film: &Film, user: &User) -> f64 {
        let mut director = 0.0;
        let mut cast = 0.0;

        for entry in &user.history {
            let Some(watched) = self.catalog.find_film(&entry.film) else {
                continue;
            };
            if watched.genre != film.genre {
                continue;
            }
            if watched.director == film.director {
                director = director_effect(&entry.rating);
            }
            if watched.cast == film.cast {
                cast = cast_effect(&entry.rating);
            }
        }

        film.imdb * IMDB_WEIGHT + director * DIRECTOR_WEIGHT + cast * CAST_WEIGHT
    }

    /// Count every user's reactions to this exact title
    pub fn crowd_reactions(&self, film: &Film) -> ReactionCounts {
        let mut counts = ReactionCounts::default();

        let entries = self
            .catalog
            .users()
            .iter()
            .flat_map(|user| user.history.iter())
            .filter(|entry| entry.film == film.name);

        for entry in entries {
            match entry.rating {
                RatingLabel::Perfect => counts.perfect += 1,
                RatingLabel::Average => counts.average += 1,
                RatingLabel::Poor => counts.poor += 1,
                RatingLabel::Other(_) => {}
            }
        }
        counts
    }

    /// Score `film` with no user: crowd reaction only, imdb is ignored.
    /// A film nobody has watched scores 0.0.
    pub fn score_for_anonymous_user(&self, film: &Film) -> f64 {
        self.crowd_reactions(film).score()
    }

    /// Fill in `score` on every candidate, using the context's user if any
    pub fn score_candidates<'a>(
        &self,
        candidates: Vec<Candidate<'a>>,
        context: &UserContext<'_>,
    ) -> Vec<Candidate<'a>> {
        let scored: Vec<Candidate<'a>> = candidates
            .into_iter()
            .map(|candidate| {
                let score = match context.user {
                    Some(user) => self.score_for_known_user(candidate.film, user),
                    None => self.score_for_anonymous_user(candidate.film),
                };
                candidate.with_score(score)
            })
            .collect();

        debug!(
            user = context.username().unwrap_or("<anonymous>"),
            "Scored {} candidates",
            scored.len()
        );
        scored
    }
}
