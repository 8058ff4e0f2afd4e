//! Errors returned by the recommendation orchestrator.
//!
//! An empty result is not an error; see `RecommendationOutcome::NoCandidates`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecommendError {
    /// The requested username is not in the catalog
    #[error("User {0} does not exist in system.")]
    UserNotFound(String),

    /// The requested genre is outside the fixed genre set
    #[error("Invalid genre '{genre}'. Valid genres: {valid}")]
    InvalidGenre { genre: String, valid: String },

    /// A filter in the pipeline failed
    #[error(transparent)]
    Pipeline(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, RecommendError>;
