//! Audit configuration.
//!
//! Every key is optional; an empty file audits the four container types
//! with abstract trait hooks skipped.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Types audited when the config does not name any.
pub const DEFAULT_TYPES: &[&str] = &["LockedObject", "LockedDict", "LockedList", "LockedSet"];

/// Failure to load an [`AuditConfig`] file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read audit config {}: {source}", path.display())]
    Read {
        /// Config file path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// The file is not a valid audit config.
    #[error("failed to parse audit config {}: {source}", path.display())]
    Parse {
        /// Config file path.
        path: PathBuf,
        /// TOML syntax or schema error.
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// The config file the error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

/// Which types to audit and what to leave out.
///
/// ```toml
/// types = ["LockedObject", "LockedDict", "LockedList", "LockedSet"]
/// exclude = []
/// skip_abstract = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuditConfig {
    /// Type names whose operations must all be documented.
    pub types: Vec<String>,
    /// Operation names never reported, whatever type they appear on.
    pub exclude: Vec<String>,
    /// Skip trait methods without a default body (hooks each type supplies).
    pub skip_abstract: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            types: DEFAULT_TYPES.iter().map(|name| (*name).to_string()).collect(),
            exclude: Vec::new(),
            skip_abstract: true,
        }
    }
}

impl AuditConfig {
    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Read and parse the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read audit config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match Self::from_toml_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse audit config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    /// Whether `operation` is listed in `exclude`.
    #[must_use]
    pub fn excludes(&self, operation: &str) -> bool {
        self.exclude.iter().any(|name| name == operation)
    }
}
