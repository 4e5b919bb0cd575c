//! Text rendering of critic selections and recommendations.
//!
//! Pure formatting: records arrive already ordered by genre and rounded.

use pipeline::RecommendationRecord;
use similarity::{CriticDistance, SelectedCritics};

/// Layout options for the recommendation listing
#[derive(Debug, Clone, Copy)]
pub struct PresenterConfig {
    /// Extra columns added to the longest quoted title when aligning
    pub title_padding: usize,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self { title_padding: 5 }
    }
}

/// Ratings print with at least one decimal: `8.0`, `7.33`
pub fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{:.1}", rating)
    } else {
        rating.to_string()
    }
}

/// Comma separated critic names, closest first
pub fn format_critics(selected: &SelectedCritics) -> String {
    selected
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One line per record: quoted title padded to a common width, genre,
/// rating, then year and runtime when known.
pub fn format_recommendations(
    records: &[RecommendationRecord],
    config: PresenterConfig,
) -> Vec<String> {
    let width = records
        .iter()
        .map(|r| r.title.chars().count())
        .max()
        .unwrap_or(0)
        + config.title_padding;

    records
        .iter()
        .map(|record| {
            let quoted = format!("\"{}\"", record.title);
            let tail = match record.runtime {
                Some(runtime) => format!("{}, runs {}", record.year_text(), runtime),
                None => record.year_text(),
            };
            format!(
                "{:<width$}({}), rating: {}, {}",
                quoted,
                record.genre,
                format_rating(record.rating),
                tail,
                width = width
            )
        })
        .collect()
}

/// One line per critic in ranked order, marking the selected ones
pub fn format_ranking(ranked: &[CriticDistance], selected: usize) -> Vec<String> {
    let width = ranked.iter().map(|d| d.critic.chars().count()).max().unwrap_or(0);
    ranked
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            format!(
                "{:>3}. {:<width$}  distance: {:<8} shared titles: {}{}",
                i + 1,
                entry.critic,
                entry.distance,
                entry.shared_titles,
                if i < selected { "  *" } else { "" },
                width = width
            )
        })
        .collect()
}

/// The ranking as a JSON array, closest critic first
pub fn ranking_json(ranked: &[CriticDistance]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(ranked)
}
