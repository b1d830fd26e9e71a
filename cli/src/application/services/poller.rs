//! Status poller: block until one instance reports a target status.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::time::Duration;

use tracing::{debug, warn};

use crate::application::ports::{ComputeControl, ProgressReporter};
use crate::domain::{InstanceStatus, PollConfig};

/// Polling budget for a single instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Stop polling once the accumulated interval reaches this value.
    pub timeout: Duration,
    /// Sleep between two status checks.
    pub interval: Duration,
}

impl From<PollConfig> for PollPolicy {
    fn from(cfg: PollConfig) -> Self {
        Self {
            timeout: cfg.timeout(),
            interval: cfg.interval(),
        }
    }
}

/// Poll `id` until it reports `target` or the budget is spent.
///
/// Elapsed time is the sum of completed sleep intervals; the latency of the
/// describe call itself is not counted. A failed describe call counts as a
/// non-matching status. Returns `false` on timeout.
pub async fn wait_for_status(
    compute: &impl ComputeControl,
    reporter: &impl ProgressReporter,
    id: &str,
    target: &InstanceStatus,
    policy: PollPolicy,
) -> bool {
    let mut elapsed = Duration::ZERO;
    let mut attempts = 0u32;

    while elapsed < policy.timeout {
        attempts += 1;
        let status = observe(compute, reporter, id).await;
        if status.as_ref() == Some(target) {
            debug!(instance = %id, %target, attempts, "target status reached");
            reporter.success(&format!("Instance {id} reached target status: {target}"));
            return true;
        }

        let current = status.as_ref().map_or("unknown", InstanceStatus::as_str);
        reporter.step(&format!(
            "Waiting for instance {id} to reach status: {target} (current: {current})"
        ));
        tokio::time::sleep(policy.interval).await;
        elapsed += policy.interval;
    }

    warn!(instance = %id, %target, attempts, timeout = ?policy.timeout, "timed out waiting for status");
    reporter.warn(&format!(
        "Timeout waiting for instance {id} to reach status: {target}"
    ));
    false
}

/// Single status check; provider errors are logged and reported as `None`.
pub(crate) async fn observe(
    compute: &impl ComputeControl,
    reporter: &impl ProgressReporter,
    id: &str,
) -> Option<InstanceStatus> {
    match compute.describe_status(id).await {
        Ok(status) => {
            debug!(instance = %id, %status, "status observed");
            Some(status)
        }
        Err(e) => {
            warn!(instance = %id, error = %format!("{e:#}"), "status query failed");
            reporter.warn(&format!("Error retrieving status of instance {id}: {e:#}"));
            None
        }
    }
}
