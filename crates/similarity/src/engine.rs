//! Nearest-critic selection
//!
//! Finds the critics whose ratings are closest to the person's:
//!
//! ## Algorithm
//! 1. For every critic, sum `(critic - person)^2` over the titles of the
//!    critic table that both of them rated. A title where either rating is
//!    absent adds nothing; titles only the person rated are never visited.
//! 2. Sort critics ascending by that sum. The sort is stable, so on equal
//!    distance the critic listed first in the table wins.
//! 3. Keep the first `k` critics.
//!
//! The sum is not divided by the number of co-rated titles.

use crate::error::{Result, SimilarityError};
use crate::types::{CriticDistance, SelectedCritics};
use data_loader::{CriticRatings, PersonRatings};
use tracing::{debug, instrument};

/// Number of critics selected per person
pub const DEFAULT_CRITIC_COUNT: usize = 3;

/// Selects the critics closest to one person
#[derive(Debug, Clone, Copy)]
pub struct SimilarityEngine {
    critic_count: usize,
}

impl SimilarityEngine {
    /// Create an engine selecting `DEFAULT_CRITIC_COUNT` critics
    pub fn new() -> Self {
        Self {
            critic_count: DEFAULT_CRITIC_COUNT,
        }
    }

    /// Configure how many critics to select (default: 3)
    pub fn with_critic_count(mut self, count: usize) -> Self {
        self.critic_count = count;
        self
    }

    /// Distance of every critic to the person, in critic column order
    pub fn distances(&self, critics: &CriticRatings, person: &PersonRatings) -> Vec<CriticDistance> {
        let mut sums = vec![0.0_f64; critics.critics().len()];
        let mut shared = vec![0_usize; critics.critics().len()];

        for (title, cells) in critics.rows() {
            let Some(own) = person.rating(title) else {
                continue;
            };
            for (pos, cell) in cells.iter().enumerate() {
                if let Some(rating) = cell {
                    let diff = rating - own;
                    sums[pos] += diff * diff;
                    shared[pos] += 1;
                }
            }
        }

        critics
            .critics()
            .iter()
            .zip(sums.into_iter().zip(shared))
            .map(|(critic, (distance, shared_titles))| CriticDistance {
                critic: critic.clone(),
                distance,
                shared_titles,
            })
            .collect()
    }

    /// All critics, closest first
    pub fn rank(&self, critics: &CriticRatings, person: &PersonRatings) -> Vec<CriticDistance> {
        let mut ranked = self.distances(critics, person);
        // sort_by is stable: equal distances keep column order
        ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        ranked
    }

    /// The `critic_count` critics closest to the person, closest first.
    ///
    /// Fails with `InsufficientCritics` rather than returning fewer critics.
    #[instrument(skip_all, fields(person = person.name(), k = self.critic_count))]
    pub fn select_closest_critics(
        &self,
        critics: &CriticRatings,
        person: &PersonRatings,
    ) -> Result<SelectedCritics> {
        if self.critic_count == 0 {
            return Err(SimilarityError::ZeroCriticCount);
        }
        let available = critics.critics().len();
        if available < self.critic_count {
            return Err(SimilarityError::InsufficientCritics {
                required: self.critic_count,
                available,
            });
        }

        let ranked = self.rank(critics, person);
        for entry in &ranked {
            debug!(
                "Critic {}: distance {} over {} shared titles",
                entry.critic, entry.distance, entry.shared_titles
            );
        }

        let selected: Vec<_> = ranked
            .into_iter()
            .take(self.critic_count)
            .map(|entry| entry.critic)
            .collect();
        debug!("Selected critics: {:?}", selected);
        Ok(SelectedCritics::new(selected))
    }
}

impl Default for SimilarityEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Select the three critics closest to the person
pub fn select_closest_critics(
    critics: &CriticRatings,
    person: &PersonRatings,
) -> Result<SelectedCritics> {
    SimilarityEngine::new().select_closest_critics(critics, person)
}
