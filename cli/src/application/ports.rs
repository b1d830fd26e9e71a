//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use anyhow::Result;

use crate::domain::{InstanceStatus, ShutdownMode};

// ── Value Types ───────────────────────────────────────────────────────────────

/// Acknowledgement of a batch lifecycle request.
///
/// The provider processes batch requests asynchronously; completion is
/// discovered by polling, never through the receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReceipt {
    /// Provider job identifier, when the response carried one.
    pub job_id: Option<String>,
}

// ── Compute Port ──────────────────────────────────────────────────────────────

/// Compute control operations keyed by instance identifier.
///
/// Implementations return `Err` only for transport, authentication, or
/// non-success responses. Per-instance failures inside an accepted batch are
/// not reported here.
#[allow(async_fn_in_trait)]
pub trait ComputeControl {
    /// Request every listed instance to transition toward `ACTIVE`.
    async fn batch_start(&self, ids: &[String]) -> Result<BatchReceipt>;
    /// Request every listed instance to transition toward `SHUTOFF`.
    async fn batch_stop(&self, ids: &[String], mode: ShutdownMode) -> Result<BatchReceipt>;
    /// Current status of a single instance.
    async fn describe_status(&self, id: &str) -> Result<InstanceStatus>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
