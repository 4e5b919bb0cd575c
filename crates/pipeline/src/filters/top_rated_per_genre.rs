//! Keep the best rated titles of each genre.
//!
//! ## Algorithm
//! 1. Group candidates by primary genre (input order kept inside a group)
//! 2. Find the highest rating of each group
//! 3. Keep every candidate whose rating reaches that maximum, so exact ties
//!    are all kept
//! 4. Emit the groups in ascending genre order

use crate::error::Result;
use crate::traits::Filter;
use crate::types::{Candidate, RecommendationContext};
use std::collections::BTreeMap;
use tracing::debug;

/// Selects the top rated candidates per genre, ordered by genre.
///
/// Candidates without catalog data or with a blank genre belong to no group
/// and are dropped.
pub struct TopRatedPerGenreFilter;

impl Filter for TopRatedPerGenreFilter {
    fn name(&self) -> &str {
        "TopRatedPerGenreFilter"
    }

    fn apply(
        &self,
        candidates: Vec<Candidate>,
        _context: &RecommendationContext<'_>,
    ) -> Result<Vec<Candidate>> {
        let mut groups: BTreeMap<String, Vec<Candidate>> = BTreeMap::new();
        for candidate in candidates {
            let genre = candidate
                .genre()
                .filter(|genre| !genre.is_empty())
                .map(str::to_string);
            match genre {
                Some(genre) => groups.entry(genre).or_default().push(candidate),
                None => debug!("'{}' has no genre, skipping", candidate.title),
            }
        }

        let mut selected = Vec::new();
        for (genre, group) in groups {
            let max_rating = group
                .iter()
                .map(|c| c.rating)
                .fold(f64::NEG_INFINITY, f64::max);
            let before = selected.len();
            selected.extend(group.into_iter().filter(|c| c.rating >= max_rating));
            debug!(
                "Genre {}: max rating {}, {} selected",
                genre,
                max_rating,
                selected.len() - before
            );
        }
        Ok(selected)
    }
}
