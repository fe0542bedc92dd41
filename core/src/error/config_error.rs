// core/src/error/config_error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(String),

    #[error("config read error: {path}")]
    Read { path: String, #[source] source: std::io::Error },

    #[error("config parse error")]
    Parse(#[source] serde_json::Error),
}
