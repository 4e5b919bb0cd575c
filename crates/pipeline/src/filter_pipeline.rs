//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::error::Result;
use crate::traits::Filter;
use crate::types::{Candidate, RecommendationContext};

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(UnwatchedFilter)
///     .add_filter(CatalogJoinFilter)
///     .add_filter(TopRatedPerGenreFilter);
///
/// let selected = pipeline.apply(candidates, &context)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// Stops at the first failing filter; no partial result is returned.
    pub fn apply(
        &self,
        candidates: Vec<Candidate>,
        context: &RecommendationContext<'_>,
    ) -> Result<Vec<Candidate>> {
        let mut current = candidates;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, context)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{CatalogJoinFilter, UnwatchedFilter};
    use data_loader::{CatalogEntry, MovieCatalog, PersonRatings};

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let person = PersonRatings::new("Joann");
        let catalog = MovieCatalog::new();
        let context = RecommendationContext::new(&person, &catalog);

        let candidates = vec![Candidate::new("M1", 8.0), Candidate::new("M2", 7.0)];

        let filtered = pipeline.apply(candidates.clone(), &context).unwrap();
        assert_eq!(filtered, candidates);
    }

    #[test]
    fn test_filters_run_in_order() {
        let mut person = PersonRatings::new("Joann");
        person.insert("M1", Some(6.0)).unwrap();
        let mut catalog = MovieCatalog::new();
        for title in ["M1", "M3"] {
            catalog.insert(
                title,
                CatalogEntry {
                    genre: "Drama".to_string(),
                    year: None,
                    runtime: None,
                },
            );
        }
        let context = RecommendationContext::new(&person, &catalog);

        let pipeline = FilterPipeline::new()
            .add_filter(UnwatchedFilter)
            .add_filter(CatalogJoinFilter);
        assert_eq!(pipeline.filter_names(), ["UnwatchedFilter", "CatalogJoinFilter"]);

        let candidates = vec![
            Candidate::new("M1", 8.0),
            Candidate::new("M2", 7.0),
            Candidate::new("M3", 6.0),
        ];

        let filtered = pipeline.apply(candidates, &context).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "M3");
        assert_eq!(filtered[0].genre(), Some("Drama"));
    }
}
