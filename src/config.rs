//! Optional TOML configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::games::DEFAULT_REVEAL_DELAY;
use crate::selector::QUIZ_LENGTH;

/// Looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "class-quest.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog file to use instead of the embedded one.
    pub catalog: Option<PathBuf>,
    /// Maximum number of questions in a quiz.
    pub quiz_length: usize,
    /// How long a flipped pair stays visible in the memory game.
    pub reveal_delay_ms: u64,
    /// Seed for reproducible game rounds.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            quiz_length: QUIZ_LENGTH,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY.as_millis() as u64,
            seed: None,
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config.sanitized())
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    fn sanitized(mut self) -> Self {
        if self.quiz_length == 0 {
            warn!(default = QUIZ_LENGTH, "quiz_length must be positive, using default");
            self.quiz_length = QUIZ_LENGTH;
        }
        self
    }
}

/// Load an explicit config file, or `class-quest.toml` if it exists, or defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let local = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !local.exists() {
                return Ok(Config::default());
            }
            local
        }
    };

    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    Config::from_toml_str(&content, &path)
}
