use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use rentalgen_generate::{DatasetCounts, GenerateOptions, PeopleOptions};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "rentalgen.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Generation settings read from `rentalgen.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    pub seed: Option<u64>,
    pub out_dir: PathBuf,
    pub counts: DatasetCounts,
    pub people: PeopleOptions,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        let options = GenerateOptions::default();
        Self {
            seed: options.seed,
            out_dir: options.out_dir,
            counts: DatasetCounts::default(),
            people: options.people,
        }
    }
}

impl GenerateConfig {
    pub fn from_toml(path: &Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load `path`, or the defaults when `path` is absent and `required` is
    /// false.
    pub fn load(path: &Path, required: bool) -> Result<Self, ConfigError> {
        if !required && !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(path, &content)
    }

    pub fn into_parts(self) -> (GenerateOptions, DatasetCounts) {
        let options = GenerateOptions {
            out_dir: self.out_dir,
            seed: self.seed,
            people: self.people,
        };
        (options, self.counts)
    }
}
