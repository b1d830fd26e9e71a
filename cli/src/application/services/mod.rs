//! Use-cases over the ports: poll one instance, drive the tiers, snapshot the
//! fleet. Generic over `ComputeControl` and `ProgressReporter` so tests can
//! script the provider.

pub mod fleet_status;
pub mod orchestrator;
pub mod poller;
