//! Error types shared by the library and the binary.

use thiserror::Error;

/// Result type alias for classifier operations
pub type Result<T> = std::result::Result<T, ClassifierError>;

#[derive(Error, Debug)]
pub enum ClassifierError {
    /// A vector of the wrong width reached the model or the ranker
    #[error("input shape mismatch: expected {expected} values, got {got}")]
    InputShape { expected: usize, got: usize },

    /// Empty, ragged or mislabeled training data
    #[error("invalid training data: {0}")]
    InvalidTrainingData(String),

    /// Hyperparameter out of range
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Training loss became NaN or infinite
    #[error("training diverged at epoch {epoch} (loss = {loss})")]
    Diverged { epoch: usize, loss: f64 },

    /// Dataset or config document could not be parsed
    #[error("invalid dataset: {0}")]
    Dataset(#[from] serde_json::Error),

    #[error("dataset has no query record")]
    MissingQuery,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
