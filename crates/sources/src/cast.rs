//! Cast Source - every film featuring one cast member
//!
//! The match is exact on the film's single credited cast name. No genre
//! or watch-history filtering happens here.

use crate::types::{Candidate, CandidateSource};
use data_loader::Catalog;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Generates candidates for a cast request
#[derive(Clone)]
pub struct CastSource {
    catalog: Arc<Catalog>,
}

impl CastSource {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// All films whose cast is exactly `cast`, in catalog order
    #[instrument(skip(self))]
    pub fn get_candidates(&self, cast: &str) -> Vec<Candidate<'_>> {
        let candidates: Vec<Candidate<'_>> = self
            .catalog
            .films_by_cast(cast)
            .map(|film| Candidate::new(film, CandidateSource::Cast))
            .collect();

        debug!("Generated {} cast candidates", candidates.len());
        candidates
    }
}
