//! Filter to remove movies the person has already rated.

use crate::error::Result;
use crate::traits::Filter;
use crate::types::{Candidate, RecommendationContext};

/// Keeps only titles the person has no rating for.
///
/// A title is unwatched when it is missing from the person's table or its
/// cell there is blank.
pub struct UnwatchedFilter;

impl Filter for UnwatchedFilter {
    fn name(&self) -> &str {
        "UnwatchedFilter"
    }

    fn apply(
        &self,
        candidates: Vec<Candidate>,
        context: &RecommendationContext<'_>,
    ) -> Result<Vec<Candidate>> {
        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| !context.person.has_rated(&candidate.title))
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{MovieCatalog, PersonRatings};

    #[test]
    fn test_unwatched_filter() {
        let mut person = PersonRatings::new("Joann");
        person.insert("M1", Some(7.0)).unwrap();
        person.insert("M2", None).unwrap();
        person.insert("M4", Some(1.0)).unwrap();
        let catalog = MovieCatalog::new();
        let context = RecommendationContext::new(&person, &catalog);

        let candidates = vec![
            Candidate::new("M1", 9.0), // rated
            Candidate::new("M2", 8.0), // blank cell
            Candidate::new("M3", 7.0), // not in the person table
            Candidate::new("M4", 6.0), // rated
        ];

        let filtered = UnwatchedFilter.apply(candidates, &context).unwrap();

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].title, "M2");
        assert_eq!(filtered[1].title, "M3");
    }
}
