/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("search failed: {reason}")]
    SearchFailed { reason: String },

    #[error("retriever unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

/// Convenience type alias.
pub type RetrievalResult<T> = Result<T, RetrievalError>;
