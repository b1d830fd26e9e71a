//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Action errors ─────────────────────────────────────────────────────────────

/// Errors related to the requested lifecycle action.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("Invalid action '{0}'. Please enter 'start' or 'stop'.")]
    Invalid(String),
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors raised while validating the fleet configuration file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("poll.interval_secs must be greater than zero")]
    InvalidInterval,

    #[error("Invalid endpoint '{0}': must be an https:// URL")]
    InvalidEndpoint(String),

    #[error("region must not be empty")]
    EmptyRegion,
}

// ── Credential errors ─────────────────────────────────────────────────────────

/// Errors raised while loading provider credentials from the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialsError {
    #[error(
        "{} environment variable(s) not set.\n\nPlease set them before running ecs-tier.",
        vars.join(", ")
    )]
    Missing { vars: Vec<String> },
}

// ── Provider errors ───────────────────────────────────────────────────────────

/// Errors returned by the cloud provider API.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("unexpected provider response: {0}")]
    Decode(String),
}
