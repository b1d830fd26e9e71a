//! Fleet definition: two named groups of instance identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named subset of the fleet advanced through the lifecycle as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Backend,
    Frontend,
}

impl Tier {
    /// Every tier, in listing order.
    pub const ALL: [Tier; 2] = [Tier::Backend, Tier::Frontend];

    /// Label used in console output, e.g. `"Backend"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Backend => "Backend",
            Self::Frontend => "Frontend",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Static fleet definition supplied by the operator.
///
/// Order within each group fixes polling and reporting order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fleet {
    /// Instance IDs of the backend tier.
    pub backend: Vec<String>,
    /// Instance IDs of the frontend tier.
    pub frontend: Vec<String>,
}

impl Fleet {
    /// Instance IDs belonging to `tier`.
    #[must_use]
    pub fn group(&self, tier: Tier) -> &[String] {
        match tier {
            Tier::Backend => &self.backend,
            Tier::Frontend => &self.frontend,
        }
    }

    /// Total number of instances across both tiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.backend.len() + self.frontend.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
