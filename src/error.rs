use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolidError {
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to set up logging: {0}")]
    Logging(String),
}

impl SolidError {
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging(message.into())
    }
}

pub type Result<T> = std::result::Result<T, SolidError>;
