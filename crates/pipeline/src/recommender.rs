//! The RecommendationAggregator ties the stages together.
//!
//! ## Flow
//! 1. Aggregate the selected critics' ratings per title
//! 2. Drop titles the person already rated
//! 3. Inner join with the movie catalog
//! 4. Keep the top rated titles of each genre, ordered by genre
//! 5. Convert to RecommendationRecords

use crate::aggregate::aggregate_ratings;
use crate::error::Result;
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{CatalogJoinFilter, TopRatedPerGenreFilter, UnwatchedFilter};
use crate::types::{RecommendationContext, RecommendationRecord};
use data_loader::{CriticRatings, MovieCatalog, PersonRatings};
use similarity::SelectedCritics;
use tracing::{debug, info};

/// Produces recommendations from the ratings of already selected critics
pub struct RecommendationAggregator {
    pipeline: FilterPipeline,
}

impl RecommendationAggregator {
    /// Create an aggregator with the standard filter stages
    pub fn new() -> Self {
        Self {
            pipeline: FilterPipeline::new()
                .add_filter(UnwatchedFilter)
                .add_filter(CatalogJoinFilter)
                .add_filter(TopRatedPerGenreFilter),
        }
    }

    /// Create an aggregator running a custom pipeline after aggregation.
    ///
    /// Candidates still lacking catalog data at the end are not reported.
    pub fn with_pipeline(pipeline: FilterPipeline) -> Self {
        Self { pipeline }
    }

    /// Recommend unwatched titles, ordered by ascending genre.
    ///
    /// An empty result is a valid outcome. Fails only when `selected` is
    /// empty or names a critic that `critics` lacks.
    pub fn recommend(
        &self,
        critics: &CriticRatings,
        selected: &SelectedCritics,
        person: &PersonRatings,
        catalog: &MovieCatalog,
    ) -> Result<Vec<RecommendationRecord>> {
        let candidates = aggregate_ratings(critics, selected)?;
        debug!("{} titles have an aggregate rating", candidates.len());

        let context = RecommendationContext::new(person, catalog);
        let selected_candidates = self.pipeline.apply(candidates, &context)?;

        let records: Vec<RecommendationRecord> = selected_candidates
            .into_iter()
            .filter_map(RecommendationRecord::from_candidate)
            .collect();
        info!("{} recommendations for {}", records.len(), person.name());
        Ok(records)
    }
}

impl Default for RecommendationAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Recommend with the standard stages
pub fn recommend(
    critics: &CriticRatings,
    selected: &SelectedCritics,
    person: &PersonRatings,
    catalog: &MovieCatalog,
) -> Result<Vec<RecommendationRecord>> {
    RecommendationAggregator::new().recommend(critics, selected, person, catalog)
}
