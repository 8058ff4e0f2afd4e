//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to candidate sets.

use anyhow::Result;
use sources::{Candidate, UserContext};

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to live in a shared orchestrator
/// - Filters take ownership of the Vec<Candidate> and return a filtered Vec
/// - Candidates borrow from the Catalog (`'a`), and filtering never changes
///   where they point, so the output keeps the input's lifetime
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership)
    /// * `context` - User context containing watch history and favorite genre
    ///
    /// # Returns
    /// * `Ok(Vec<Candidate>)` - The filtered candidates, order preserved
    /// * `Err` - If filtering fails
    fn apply<'a>(
        &self,
        candidates: Vec<Candidate<'a>>,
        context: &UserContext<'_>,
    ) -> Result<Vec<Candidate<'a>>>;
}
