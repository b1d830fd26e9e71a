//! Domain layer: pure types, parsing, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod action;
pub mod config;
pub mod error;
pub mod fleet;
pub mod status;

#[allow(unused_imports)]
pub use action::Action;
#[allow(unused_imports)]
pub use config::{FleetConfig, PollConfig};
#[allow(unused_imports)]
pub use error::{ActionError, ConfigError, CredentialsError, ProviderError};
#[allow(unused_imports)]
pub use fleet::{Fleet, Tier};
#[allow(unused_imports)]
pub use status::{InstanceStatus, ShutdownMode};
