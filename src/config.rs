//! Options controlling how format strings are scanned and verified
//!
//! Options can be built in code or loaded from a TOML document:
//!
//! ```toml
//! stacked_flags = false
//! check_types = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The configuration is not valid TOML or has unknown keys
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Scanner and verifier options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Accept any number of flags in a placeholder (`%-+05d`).
    /// When `false` at most one flag is recognized.
    pub stacked_flags: bool,
    /// Compare argument categories in addition to the argument count
    pub check_types: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stacked_flags: true,
            check_types: true,
        }
    }
}

impl Config {
    pub fn with_stacked_flags(mut self, stacked_flags: bool) -> Self {
        self.stacked_flags = stacked_flags;
        self
    }

    pub fn with_check_types(mut self, check_types: bool) -> Self {
        self.check_types = check_types;
        self
    }

    /// Parse options from a TOML document, missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load options from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("loaded {config:?} from {}", path.display());
        Ok(config)
    }
}
