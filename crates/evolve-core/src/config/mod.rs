pub mod agent_config;
pub mod eval_config;
pub mod retrieval_config;
pub mod verifier_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use agent_config::{AgentConfig, MAX_CITATIONS};
pub use eval_config::EvalConfig;
pub use retrieval_config::RetrievalConfig;
pub use verifier_config::VerifierConfig;

use crate::errors::ConfigError;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EvolveConfig {
    pub retrieval: RetrievalConfig,
    pub verifier: VerifierConfig,
    pub agent: AgentConfig,
    pub eval: EvalConfig,
}

impl EvolveConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load config from a TOML file on disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }
}
