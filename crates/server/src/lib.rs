//! Server crate for the film recommendation engine.
//!
//! This crate contains the orchestrator, the facade that turns a genre or
//! cast request into a short ranked list. It wires the catalog, candidate
//! sources, filters, score engine and ranker together.

pub mod error;
pub mod orchestrator;

pub use error::RecommendError;
pub use orchestrator::{
    FilmRecommendation, RecommendationOrchestrator, RecommendationOutcome, CAST_LIMIT,
    GENRE_LIMIT,
};
