//! Core traits for the recommendation pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible stages to be applied to candidate sets.

use crate::error::Result;
use crate::types::{Candidate, RecommendationContext};

/// Core trait for filtering candidates.
///
/// All stages after rating aggregation implement this trait so they can be
/// chained in a FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared between runs
/// - Filters take ownership of the Vec<Candidate> and return a new Vec,
///   which may drop, reorder or enrich candidates
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership)
    /// * `context` - The person's ratings and the movie catalog
    fn apply(
        &self,
        candidates: Vec<Candidate>,
        context: &RecommendationContext<'_>,
    ) -> Result<Vec<Candidate>>;
}
