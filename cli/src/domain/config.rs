//! Domain types and validators for the fleet configuration file.
//!
//! Pure functions only; no I/O.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;
use crate::domain::fleet::Fleet;

// ── Constants ────────────────────────────────────────────────────────────────

pub const DEFAULT_REGION: &str = "eu-de";
pub const DEFAULT_ENDPOINT: &str = "https://ecs.eu-de.otc.t-systems.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_INTERVAL_SECS: u64 = 10;

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.ecs-tier/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FleetConfig {
    /// Region identifier, e.g. `eu-de`.
    pub region: String,
    /// HTTPS endpoint of the ECS service for `region`.
    pub endpoint: String,
    /// Status polling budget.
    pub poll: PollConfig,
    /// Backend and frontend instance groups.
    pub fleet: Fleet,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            poll: PollConfig::default(),
            fleet: Fleet::default(),
        }
    }
}

/// Per-instance polling budget.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PollConfig {
    /// Give up on an instance after this many seconds.
    pub timeout_secs: u64,
    /// Seconds to sleep between status checks.
    pub interval_secs: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            interval_secs: DEFAULT_INTERVAL_SECS,
        }
    }
}

impl PollConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

impl FleetConfig {
    /// Validates values serde cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.region.trim().is_empty() {
            return Err(ConfigError::EmptyRegion);
        }
        if !self.endpoint.starts_with("https://") || self.endpoint.len() <= "https://".len() {
            return Err(ConfigError::InvalidEndpoint(self.endpoint.clone()));
        }
        // A zero interval never advances the elapsed counter.
        if self.poll.interval_secs == 0 {
            return Err(ConfigError::InvalidInterval);
        }
        Ok(())
    }

    /// Endpoint without any trailing `/`.
    #[must_use]
    pub fn endpoint_base(&self) -> &str {
        self.endpoint.trim_end_matches('/')
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
