//! Instance run-state and shutdown mode as reported by the ECS API.
//!
//! | Wire value | Meaning                  |
//! |------------|--------------------------|
//! | `ACTIVE`   | Running                  |
//! | `SHUTOFF`  | Stopped                  |
//! | `BUILD`    | Creating                 |
//! | `STOPPING` | Stopping (transitional)  |
//! | `STARTING` | Starting (transitional)  |
//! | `ERROR`    | Error state              |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Server status as reported by `GET /cloudservers/{id}`.
///
/// Anything outside the documented set is kept verbatim in `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceStatus {
    Active,
    Shutoff,
    Build,
    Stopping,
    Starting,
    Error,
    Unknown(String),
}

impl InstanceStatus {
    /// Parse the provider's status string; unknown values are kept verbatim.
    #[must_use]
    pub fn from_wire(s: &str) -> Self {
        match s {
            "ACTIVE" => Self::Active,
            "SHUTOFF" => Self::Shutoff,
            "BUILD" => Self::Build,
            "STOPPING" => Self::Stopping,
            "STARTING" => Self::Starting,
            "ERROR" => Self::Error,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Wire representation of this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "ACTIVE",
            Self::Shutoff => "SHUTOFF",
            Self::Build => "BUILD",
            Self::Stopping => "STOPPING",
            Self::Starting => "STARTING",
            Self::Error => "ERROR",
            Self::Unknown(raw) => raw,
        }
    }

    /// Returns `true` for states the provider passes through on its way to
    /// `ACTIVE` or `SHUTOFF`.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Build | Self::Stopping | Self::Starting)
    }
}

impl FromStr for InstanceStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_wire(s))
    }
}

impl fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shutdown mode carried by the batch stop request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShutdownMode {
    /// Graceful OS shutdown.
    #[default]
    Soft,
    /// Forced power-off.
    Hard,
}
