//! Lifecycle actions and the tier ordering they imply.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::ActionError;
use crate::domain::fleet::Tier;
use crate::domain::status::InstanceStatus;

/// A requested fleet-wide lifecycle action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Stop,
}

impl Action {
    /// Parse a line typed at the interactive prompt.
    ///
    /// Surrounding whitespace and letter case are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Invalid`] for anything other than `start` or `stop`.
    pub fn from_prompt(input: &str) -> Result<Self, ActionError> {
        input.trim().to_lowercase().parse()
    }

    /// Tiers in activation order: dependencies come up first and go down last.
    #[must_use]
    pub fn tier_order(self) -> [Tier; 2] {
        match self {
            Self::Start => [Tier::Backend, Tier::Frontend],
            Self::Stop => [Tier::Frontend, Tier::Backend],
        }
    }

    /// Status every instance of a tier must reach.
    #[must_use]
    pub fn target_status(self) -> InstanceStatus {
        match self {
            Self::Start => InstanceStatus::Active,
            Self::Stop => InstanceStatus::Shutoff,
        }
    }

    /// `"Starting"` / `"Stopping"`.
    #[must_use]
    pub fn progressive(self) -> &'static str {
        match self {
            Self::Start => "Starting",
            Self::Stop => "Stopping",
        }
    }

    /// `"started"` / `"stopped"`.
    #[must_use]
    pub fn past(self) -> &'static str {
        match self {
            Self::Start => "started",
            Self::Stop => "stopped",
        }
    }
}

impl FromStr for Action {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "stop" => Ok(Self::Stop),
            other => Err(ActionError::Invalid(other.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::Stop => "stop",
        })
    }
}
