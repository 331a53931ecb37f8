//! Persisted user preferences.
//!
//! Currently a single switch controlling whether new-posting alerts fire.
//! Stored as YAML so it can be edited by hand.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("preferences I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid preferences file {path}: {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub alerts_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            alerts_enabled: true,
        }
    }
}

impl Preferences {
    /// Reads preferences from `path`.
    ///
    /// A missing file is not an error: defaults are returned.
    ///
    /// # Errors
    ///
    /// Returns [`PreferencesError::Io`] if the file exists but cannot be read,
    /// or [`PreferencesError::Yaml`] if its contents do not parse.
    pub fn load(path: &Path) -> Result<Self, PreferencesError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(PreferencesError::Io {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        };

        if raw.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&raw).map_err(|e| PreferencesError::Yaml {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Writes preferences to `path`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`PreferencesError::Io`] on filesystem failure or
    /// [`PreferencesError::Yaml`] if serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), PreferencesError> {
        let io_err = |source| PreferencesError::Io {
            path: path.display().to_string(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|e| PreferencesError::Yaml {
            path: path.display().to_string(),
            source: e,
        })?;
        std::fs::write(path, yaml).map_err(io_err)
    }
}
