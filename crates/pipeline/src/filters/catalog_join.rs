//! Inner join of candidates with the movie catalog.

use crate::error::Result;
use crate::traits::Filter;
use crate::types::{Candidate, RecommendationContext};
use tracing::debug;

/// Attaches catalog data to each candidate and drops titles the catalog
/// does not know.
pub struct CatalogJoinFilter;

impl Filter for CatalogJoinFilter {
    fn name(&self) -> &str {
        "CatalogJoinFilter"
    }

    fn apply(
        &self,
        candidates: Vec<Candidate>,
        context: &RecommendationContext<'_>,
    ) -> Result<Vec<Candidate>> {
        let joined: Vec<Candidate> = candidates
            .into_iter()
            .filter_map(|mut candidate| match context.catalog.get(&candidate.title) {
                Some(entry) => {
                    candidate.movie = Some(entry.clone());
                    Some(candidate)
                }
                None => {
                    debug!("'{}' is not in the catalog", candidate.title);
                    None
                }
            })
            .collect();
        Ok(joined)
    }
}
