//! Provider credentials loaded from `OTC_*` environment variables via `envy`.
//!
//! Each field maps to `OTC_<field>`:
//!   - `OTC_access_key_id`      (required)
//!   - `OTC_secret_access_key`  (required)
//!   - `OTC_project_id`         (required)

use std::fmt;

use serde::Deserialize;

use crate::domain::error::CredentialsError;

pub const ENV_PREFIX: &str = "OTC_";

/// AK/SK credentials plus the project the requests are scoped to.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub project_id: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("project_id", &self.project_id)
            .finish()
    }
}

/// Raw view of the environment; every field optional so that all missing
/// variables can be reported at once.
#[derive(Deserialize, Default)]
#[serde(default)]
struct RawCredentials {
    access_key_id: Option<String>,
    secret_access_key: Option<String>,
    project_id: Option<String>,
}

impl Credentials {
    /// Load credentials from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsError::Missing`] naming every unset or empty variable.
    pub fn from_env() -> Result<Self, CredentialsError> {
        Self::from_vars(std::env::vars())
    }

    /// Load credentials from an explicit set of variables.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsError::Missing`] naming every unset or empty variable.
    pub fn from_vars<I>(vars: I) -> Result<Self, CredentialsError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let raw: RawCredentials = envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .unwrap_or_default();

        let mut missing = Vec::new();
        let mut take = |value: Option<String>, field: &str| {
            match value.filter(|v| !v.trim().is_empty()) {
                Some(v) => v,
                None => {
                    missing.push(format!("{ENV_PREFIX}{field}"));
                    String::new()
                }
            }
        };
        let credentials = Self {
            access_key_id: take(raw.access_key_id, "access_key_id"),
            secret_access_key: take(raw.secret_access_key, "secret_access_key"),
            project_id: take(raw.project_id, "project_id"),
        };

        if missing.is_empty() {
            Ok(credentials)
        } else {
            Err(CredentialsError::Missing { vars: missing })
        }
    }
}
