//! Application layer: the compute and progress ports, and the services that
//! drive a fleet through them.
//!
//! Depends on `crate::domain` only.

pub mod ports;
pub mod services;

#[allow(unused_imports)]
pub use ports::{BatchReceipt, ComputeControl, ProgressReporter};
