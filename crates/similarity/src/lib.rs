//! # Similarity Crate
//!
//! Picks the critics whose tastes most resemble one person's, based on the
//! titles both of them rated.
//!
//! ## Example Usage
//!
//! ```ignore
//! use similarity::SimilarityEngine;
//!
//! let engine = SimilarityEngine::new();
//! let selected = engine.select_closest_critics(&dataset.critics, &dataset.person)?;
//!
//! for critic in &selected {
//!     println!("{}", critic);
//! }
//! ```

pub mod error;
pub mod types;
pub mod engine;

// Re-export commonly used types
pub use error::{Result, SimilarityError};
pub use types::{CriticDistance, SelectedCritics};
pub use engine::{select_closest_critics, SimilarityEngine, DEFAULT_CRITIC_COUNT};
