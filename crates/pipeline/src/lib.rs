//! Pipeline turning critic ratings into per-genre recommendations.
//!
//! This crate provides:
//! - Rating aggregation over the selected critics
//! - Filter trait and implementations for the later stages
//! - FilterPipeline for composing filters
//! - RecommendationAggregator running the whole flow
//!
//! ## Architecture
//! The pipeline processes candidates in stages:
//! 1. Aggregation averages the selected critics' ratings per title
//! 2. Filters drop watched titles, join the catalog and keep the top
//!    rated titles of each genre
//! 3. Survivors become RecommendationRecords, ordered by genre
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::RecommendationAggregator;
//! use similarity::select_closest_critics;
//!
//! let selected = select_closest_critics(&dataset.critics, &dataset.person)?;
//! let records = RecommendationAggregator::new().recommend(
//!     &dataset.critics,
//!     &selected,
//!     &dataset.person,
//!     &dataset.catalog,
//! )?;
//! ```

pub mod error;
pub mod types;
pub mod aggregate;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod recommender;

// Re-export main types
pub use error::{PipelineError, Result};
pub use types::{Candidate, RecommendationContext, RecommendationRecord};
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use aggregate::{aggregate_ratings, round_rating};
pub use recommender::{recommend, RecommendationAggregator};
