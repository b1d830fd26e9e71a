//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: the OTC ECS HTTP client,
//! request signing, config file loading, and credential loading.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod config;
pub mod credentials;
pub mod otc;
