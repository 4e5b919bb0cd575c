//! Mean rating of the selected critics per title.
//!
//! This is the entry stage of the pipeline: it turns the critic table into
//! candidates. Titles none of the selected critics rated have no mean and
//! produce no candidate.

use crate::error::{PipelineError, Result};
use crate::types::Candidate;
use data_loader::CriticRatings;
use similarity::SelectedCritics;
use tracing::debug;

/// Round to 2 decimal places, halves to even
pub fn round_rating(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Column positions of the selected critics.
///
/// Fails if the selection is empty or names a critic the table lacks.
pub fn critic_positions(critics: &CriticRatings, selected: &SelectedCritics) -> Result<Vec<usize>> {
    if selected.is_empty() {
        return Err(PipelineError::EmptyCriticSelection);
    }
    selected
        .iter()
        .map(|critic| {
            critics
                .critic_position(critic)
                .ok_or_else(|| PipelineError::InvalidCriticSelection {
                    critic: critic.clone(),
                })
        })
        .collect()
}

/// One candidate per title rated by at least one selected critic, in row order
pub fn aggregate_ratings(critics: &CriticRatings, selected: &SelectedCritics) -> Result<Vec<Candidate>> {
    let positions = critic_positions(critics, selected)?;

    let candidates: Vec<Candidate> = critics
        .rows()
        .filter_map(|(title, cells)| {
            let present: Vec<f64> = positions.iter().filter_map(|&p| cells[p]).collect();
            if present.is_empty() {
                return None;
            }
            let mean = present.iter().sum::<f64>() / present.len() as f64;
            Some(Candidate::new(title.clone(), round_rating(mean)))
        })
        .collect();

    debug!(
        "Aggregated {} of {} titles over {} critics",
        candidates.len(),
        critics.len(),
        positions.len()
    );
    Ok(candidates)
}
