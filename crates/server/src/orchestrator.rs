//! # Recommendation Orchestrator
//!
//! This module coordinates the two recommendation requests end to end:
//!
//! **Genre recommendation**
//! 1. Validate the genre
//! 2. Resolve the user (or go anonymous)
//! 3. Generate genre candidates
//! 4. Drop watched films (known users only)
//! 5. Score (crowd reaction or personal affinity)
//! 6. Rank and keep the top 3
//!
//! **Cast recommendation**
//! 1. Resolve the user (or go anonymous)
//! 2. Generate cast candidates
//! 3. Keep the favorite genre and drop watched films (known users only)
//! 4. Rank by imdb and keep the top 2
//!
//! Everything runs synchronously against one shared, read-only catalog.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{RecommendError, Result};
use data_loader::{Catalog, Genre, User};
use pipeline::filters::{AlreadyWatchedFilter, FavoriteGenreFilter};
use pipeline::{rank_top, FilterPipeline, ScoreEngine};
use sources::{user_context::build_user_context, Candidate, CastSource, GenreSource, UserContext};

/// How many films a genre recommendation returns at most
pub const GENRE_LIMIT: usize = 3;
/// How many films a cast recommendation returns at most
pub const CAST_LIMIT: usize = 2;

/// Final recommendation returned to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilmRecommendation {
    /// 1-based position in the ranked list
    pub rank: usize,
    pub name: String,
    pub director: String,
    pub cast: String,
    pub genre: Genre,
    pub imdb: f64,
    /// Absent for cast recommendations, which are ranked on imdb alone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl fmt::Display for FilmRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}: {} ({})", self.rank, self.name, self.director, self.imdb)
    }
}

/// Result of a request that did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationOutcome {
    /// Best first, never empty
    Ranked(Vec<FilmRecommendation>),
    /// Nothing matched; a valid answer, not an error
    NoCandidates,
}

impl RecommendationOutcome {
    pub fn recommendations(&self) -> &[FilmRecommendation] {
        match self {
            RecommendationOutcome::Ranked(recs) => recs,
            RecommendationOutcome::NoCandidates => &[],
        }
    }

    fn from_ranked(ranked: Vec<Candidate<'_>>) -> Self {
        if ranked.is_empty() {
            return RecommendationOutcome::NoCandidates;
        }

        let recommendations = ranked
            .into_iter()
            .enumerate()
            .map(|(idx, candidate)| FilmRecommendation {
                rank: idx + 1,
                name: candidate.film.name.clone(),
                director: candidate.film.director.clone(),
                cast: candidate.film.cast.clone(),
                genre: candidate.film.genre,
                imdb: candidate.film.imdb,
                score: candidate.score,
            })
            .collect();
        RecommendationOutcome::Ranked(recommendations)
    }
}

/// Main orchestrator that coordinates the recommendation pipeline
#[derive(Clone)]
pub struct RecommendationOrchestrator {
    catalog: Arc<Catalog>,
    genre_source: GenreSource,
    cast_source: CastSource,
    score_engine: ScoreEngine,
    /// Filters for genre requests from a known user
    genre_filters: Arc<FilterPipeline>,
    /// Filters for cast requests from a known user
    cast_filters: Arc<FilterPipeline>,
}

impl RecommendationOrchestrator {
    /// Create a new orchestrator with all components sharing `catalog`
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let genre_source = GenreSource::new(catalog.clone());
        let cast_source = CastSource::new(catalog.clone());
        let score_engine = ScoreEngine::new(catalog.clone());
        let genre_filters = Arc::new(FilterPipeline::new().add_filter(AlreadyWatchedFilter));
        let cast_filters = Arc::new(
            FilterPipeline::new()
                .add_filter(FavoriteGenreFilter)
                .add_filter(AlreadyWatchedFilter),
        );

        Self {
            catalog,
            genre_source,
            cast_source,
            score_engine,
            genre_filters,
            cast_filters,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Recommend up to [`GENRE_LIMIT`] films of `genre`.
    ///
    /// `username` of `None` or `""` means an anonymous request.
    ///
    /// # Errors
    /// * `InvalidGenre` - `genre` is not one of the fixed labels
    /// * `UserNotFound` - a username was given but is not in the catalog
    pub fn genre_recommendation(
        &self,
        username: Option<&str>,
        genre: &str,
    ) -> Result<RecommendationOutcome> {
        let start_time = Instant::now();

        let genre: Genre = genre.parse().map_err(|_| RecommendError::InvalidGenre {
            genre: genre.to_string(),
            valid: valid_genres(),
        })?;
        let context = self.build_context(username)?;

        let candidates = self.genre_source.get_candidates(genre);
        let candidates = if context.is_anonymous() {
            candidates
        } else {
            self.genre_filters.apply(candidates, &context)?
        };
        debug!("{} genre candidates after filtering", candidates.len());

        let scored = self.score_engine.score_candidates(candidates, &context);
        let outcome = RecommendationOutcome::from_ranked(rank_top(scored, GENRE_LIMIT));

        info!(
            user = context.username().unwrap_or("<anonymous>"),
            genre = %genre,
            returned = outcome.recommendations().len(),
            "Genre recommendation finished in {:.2?}",
            start_time.elapsed()
        );
        Ok(outcome)
    }

    /// Recommend up to [`CAST_LIMIT`] films featuring `cast`.
    ///
    /// A known user only gets films from their favorite genre that they
    /// have not watched yet. Ranking is by imdb, never by score.
    ///
    /// # Errors
    /// * `UserNotFound` - a username was given but is not in the catalog
    pub fn cast_recommendation(
        &self,
        username: Option<&str>,
        cast: &str,
    ) -> Result<RecommendationOutcome> {
        let start_time = Instant::now();

        let context = self.build_context(username)?;
        if let Some(favorite) = context.favorite_genre {
            debug!(genre = %favorite, "Restricting cast recommendation to favorite genre");
        }

        let candidates = self.cast_source.get_candidates(cast);
        let candidates = if context.is_anonymous() {
            candidates
        } else {
            self.cast_filters.apply(candidates, &context)?
        };

        let outcome = RecommendationOutcome::from_ranked(rank_top(candidates, CAST_LIMIT));

        info!(
            user = context.username().unwrap_or("<anonymous>"),
            cast,
            returned = outcome.recommendations().len(),
            "Cast recommendation finished in {:.2?}",
            start_time.elapsed()
        );
        Ok(outcome)
    }

    /// Resolve an optional username into a user context
    fn build_context(&self, username: Option<&str>) -> Result<UserContext<'_>> {
        match self.resolve_user(username)? {
            Some(user) => Ok(build_user_context(&self.catalog, user)),
            None => Ok(UserContext::anonymous()),
        }
    }

    fn resolve_user(&self, username: Option<&str>) -> Result<Option<&User>> {
        match username.filter(|name| !name.is_empty()) {
            None => Ok(None),
            Some(name) => self
                .catalog
                .find_user(name)
                .map(Some)
                .ok_or_else(|| RecommendError::UserNotFound(name.to_string())),
        }
    }
}

/// Comma-separated list of every genre label
fn valid_genres() -> String {
    Genre::ALL
        .iter()
        .map(|genre| genre.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
