//! Shared types for candidate generation.

use data_loader::{Film, Genre, User};
use std::collections::HashSet;

/// Which source produced a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateSource {
    /// Every film of a requested genre
    Genre,
    /// Every film featuring a requested cast member
    Cast,
}

/// A film under consideration for one request.
///
/// Borrowed from the Catalog and dropped once the top-N slice has been
/// copied out. `score` stays `None` for candidates that are ranked on
/// imdb alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    pub film: &'a Film,
    pub source: CandidateSource,
    pub score: Option<f64>,
}

impl<'a> Candidate<'a> {
    pub fn new(film: &'a Film, source: CandidateSource) -> Self {
        Self {
            film,
            source,
            score: None,
        }
    }

    /// Builder-style helper used by the scorer and in tests
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }
}

/// Everything the pipeline needs to know about who is asking.
///
/// An anonymous context has no user, watched nothing and has no favorite
/// genre.
#[derive(Debug, Clone, Default)]
pub struct UserContext<'a> {
    pub user: Option<&'a User>,
    /// Titles already watched, for O(1) exclusion
    pub watched_films: HashSet<&'a str>,
    /// Most frequent genre in the watch history, if any watched film resolves
    pub favorite_genre: Option<Genre>,
}

impl<'a> UserContext<'a> {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_anonymous(&self) -> bool {
        self.user.is_none()
    }

    pub fn username(&self) -> Option<&'a str> {
        self.user.map(|user| user.username.as_str())
    }
}
