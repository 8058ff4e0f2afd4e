//! Filter to remove films the user has already watched.
//!
//! Known-user requests always run this; there's no point in recommending
//! a film the user has already seen.

use crate::traits::Filter;
use anyhow::Result;
use sources::{Candidate, UserContext};

/// Removes candidates whose title appears in the user's watch history.
///
/// ## Algorithm
/// Uses the HashSet in UserContext.watched_films for O(1) lookups.
/// An anonymous context watched nothing, so everything passes.
pub struct AlreadyWatchedFilter;

impl Filter for AlreadyWatchedFilter {
    fn name(&self) -> &str {
        "AlreadyWatchedFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<Candidate<'a>>,
        context: &UserContext<'_>,
    ) -> Result<Vec<Candidate<'a>>> {
        let filtered: Vec<Candidate<'a>> = candidates
            .into_iter()
            .filter(|candidate| !context.watched_films.contains(candidate.film.name.as_str()))
            .collect();
        Ok(filtered)
    }
}
