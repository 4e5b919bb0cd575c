//! Filter implementations for the recommendation pipeline.
//!
//! Applied in this order by the default aggregator:
//! unwatched titles, catalog join, top rated per genre.

pub mod unwatched;
pub mod catalog_join;
pub mod top_rated_per_genre;

// Re-export for convenience
pub use unwatched::UnwatchedFilter;
pub use catalog_join::CatalogJoinFilter;
pub use top_rated_per_genre::TopRatedPerGenreFilter;
