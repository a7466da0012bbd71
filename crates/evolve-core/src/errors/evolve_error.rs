use super::{ConfigError, EvalError};

/// Top-level error type for fallible entry points.
/// Retrieval errors never reach it: the agent absorbs them.
#[derive(Debug, thiserror::Error)]
pub enum EvolveError {
    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Convenience type alias.
pub type EvolveResult<T> = Result<T, EvolveError>;
