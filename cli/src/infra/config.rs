//! YAML-backed fleet configuration store.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::domain::config::FleetConfig;

/// Loads `FleetConfig` from a YAML file on disk.
///
/// An explicit path (from `--config` / `ECS_TIER_CONFIG`) wins over the
/// default `~/.ecs-tier/config.yaml`.
pub struct YamlConfigStore {
    explicit: Option<PathBuf>,
}

impl YamlConfigStore {
    #[must_use]
    pub fn new(explicit: Option<PathBuf>) -> Self {
        Self { explicit }
    }

    /// Read, parse, and validate the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, not valid YAML,
    /// or fails validation.
    pub fn load(&self) -> Result<FleetConfig> {
        let path = self.path()?;
        anyhow::ensure!(
            path.exists(),
            "config file {} not found.\n\nCreate it with the backend and frontend instance IDs, \
             or pass --config <PATH>.",
            path.display()
        );
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let config: FleetConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("cannot parse {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            backend = config.fleet.backend.len(),
            frontend = config.fleet.frontend.len(),
            "loaded fleet config"
        );
        Ok(config)
    }

    /// Resolved config file path.
    ///
    /// # Errors
    ///
    /// Returns an error if no explicit path was given and the home directory
    /// cannot be determined.
    pub fn path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.explicit {
            return Ok(path.clone());
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(home.join(".ecs-tier").join("config.yaml"))
    }
}
