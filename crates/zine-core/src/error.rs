use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, ZineError>;

#[derive(Debug, thiserror::Error)]
pub enum ZineError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML content: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON content: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported content file extension: {0}")]
    UnsupportedFormat(String),
    #[error("spread {index} is invalid: {reason}")]
    InvalidSpread { index: usize, reason: String },
    #[error("invalid colour literal: {0}")]
    InvalidColor(String),
}

impl ZineError {
    pub fn invalid_spread(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidSpread {
            index,
            reason: reason.into(),
        }
    }
}
