mod config_error;
mod eval_error;
mod evolve_error;
mod recovery;
mod retrieval_error;

pub use config_error::ConfigError;
pub use eval_error::{EvalError, EvalResult};
pub use evolve_error::{EvolveError, EvolveResult};
pub use recovery::RecoveryAction;
pub use retrieval_error::{RetrievalError, RetrievalResult};
