use thiserror::Error;

use crate::config::ConfigError;
use crate::data::LoadError;

/// Error type for starting and running the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to load catalog: {0}")]
    Load(#[from] LoadError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}
