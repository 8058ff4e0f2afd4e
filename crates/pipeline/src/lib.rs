//! Pipeline for filtering, scoring and ranking film candidates.
//!
//! This crate provides:
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//! - The rating translator (`effects`)
//! - ScoreEngine for the known-user and anonymous score formulas
//! - The ranker (`ranking`) with its deterministic total order
//!
//! ## Architecture
//! The pipeline processes candidates in stages:
//! 1. Filters remove unwanted candidates (already watched, wrong genre)
//! 2. ScoreEngine attaches a score (genre requests only)
//! 3. The ranker orders them and the caller keeps the top N
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterPipeline, ScoreEngine, ranking};
//! use pipeline::filters::*;
//!
//! let pipeline = FilterPipeline::new().add_filter(AlreadyWatchedFilter);
//! let filtered = pipeline.apply(candidates, &context)?;
//!
//! let engine = ScoreEngine::new(catalog.clone());
//! let scored = engine.score_candidates(filtered, &context);
//! let top = ranking::rank_top(scored, 3);
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod effects;
pub mod scoring;
pub mod ranking;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use scoring::{ReactionCounts, ScoreEngine};
pub use ranking::{compare_candidates, rank, rank_top};
