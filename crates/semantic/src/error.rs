use thiserror::Error;

/// Result type for semantic splitting
pub type Result<T> = std::result::Result<T, SemanticError>;

/// Errors that can occur during semantic splitting
#[derive(Error, Debug)]
pub enum SemanticError {
    /// Failure raised by the injected embeddings generator, propagated
    /// unchanged; retry and backpressure policy belong to the caller
    #[error(transparent)]
    Embedding(#[from] anyhow::Error),

    /// The generator broke the batch contract
    #[error("Embedding count mismatch: expected {expected}, got {actual}")]
    EmbeddingCount { expected: usize, actual: usize },
}
