// SPDX-License-Identifier: MPL-2.0

//! Configuration persistence
//!
//! The pipeline never touches storage itself; callers load a [`Config`],
//! pass it in, and save it back through a [`ConfigStore`] they own.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::errors::ConfigError;

/// Injected persistence collaborator for [`Config`]
pub trait ConfigStore {
    /// Load the persisted configuration
    fn load(&self) -> Result<Config, ConfigError>;
    /// Persist the given configuration
    fn save(&self, config: &Config) -> Result<(), ConfigError>;
}

/// JSON file-backed configuration store
pub struct JsonConfigStore {
    path: PathBuf,
}

impl JsonConfigStore {
    /// Create a store backed by the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store at the conventional per-user location
    /// (`<config dir>/depthsense/config.json`)
    pub fn at_default_location() -> Result<Self, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::new(dir.join("depthsense").join("config.json")))
    }

    /// The file this store reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration, falling back to defaults
    ///
    /// A missing or unreadable file is normal on first run.
    pub fn load_or_default(&self) -> Config {
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                debug!(path = ?self.path, error = %e, "Using default configuration");
                Config::default()
            }
        }
    }
}

impl ConfigStore for JsonConfigStore {
    fn load(&self) -> Result<Config, ConfigError> {
        let bytes = fs::read(&self.path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json)?;
        debug!(path = ?self.path, "Configuration saved");
        Ok(())
    }
}
