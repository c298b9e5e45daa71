use thiserror::Error;

use crate::deepl::DeepLError;
use crate::lokalise::LokaliseError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing credentials: {} not set", .0.join(" and "))]
    MissingCredentials(Vec<&'static str>),

    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a single work item could not be written back.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("machine translation failed: {0}")]
    Translate(#[from] DeepLError),

    #[error("update request failed: {0}")]
    Write(#[from] LokaliseError),
}
