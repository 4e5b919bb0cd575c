use thiserror::Error;

/// Errors raised by the recommendation pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// A selected critic is not a column of the critic table
    #[error("Invalid critic selection: unknown critic '{critic}'")]
    InvalidCriticSelection { critic: String },

    /// No critics were selected
    #[error("Invalid critic selection: no critics selected")]
    EmptyCriticSelection,
}

pub type Result<T> = std::result::Result<T, PipelineError>;
