use std::path::PathBuf;

/// Evaluation harness errors. These abort the run.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("failed to read dataset {path}: {source}")]
    DatasetRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed dataset record on line {line}: {source}")]
    MalformedRecord {
        line: usize,
        source: serde_json::Error,
    },

    #[error("--sweep must be a comma-separated list of floats, e.g. 0.5,0.6,0.7 (bad item: {item:?})")]
    InvalidSweep { item: String },

    #[error("sweep threshold list is empty")]
    EmptySweep,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to write report {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience type alias.
pub type EvalResult<T> = Result<T, EvalError>;
