use thiserror::Error;

/// Reasons critic selection can fail
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimilarityError {
    /// The critic table has fewer critics than the engine must select
    #[error("Need {required} critics but only {available} are available")]
    InsufficientCritics { required: usize, available: usize },

    /// The engine was configured to select no critics at all
    #[error("Critic count must be at least 1")]
    ZeroCriticCount,
}

pub type Result<T> = std::result::Result<T, SimilarityError>;
