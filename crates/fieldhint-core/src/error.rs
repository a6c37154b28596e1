use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("rule file not found: {0}")]
    NotFound(std::path::PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid rule file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{table} rule #{index} has an empty {part}")]
    EmptyEntry {
        table: &'static str,
        index: usize,
        part: &'static str,
    },

    #[error("{table} key '{key}' is declared more than once")]
    DuplicateKey { table: &'static str, key: String },
}
