use fieldhint_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("rule config error: {0}")]
    Config(#[from] ConfigError),

    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),
}
