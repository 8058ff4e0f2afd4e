//! Filter implementations for the candidate pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod already_watched;
pub mod favorite_genre;

// Re-export for convenience
pub use already_watched::AlreadyWatchedFilter;
pub use favorite_genre::FavoriteGenreFilter;
