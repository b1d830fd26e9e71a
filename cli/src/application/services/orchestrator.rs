//! Tiered lifecycle orchestration.
//!
//! Drives one action across both tiers in dependency order:
//!
//! ```text
//! IDLE → TIER1_COMMANDING → TIER1_POLLING → TIER1_DONE
//!                                              │ success
//!                                              ▼
//!        TIER2_COMMANDING → TIER2_POLLING → TIER2_DONE
//! ```
//!
//! A failed tier is terminal: the next tier receives no calls at all and the
//! tiers already processed are left as they are.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use tracing::{info, info_span, warn, Instrument as _};

use crate::application::ports::{ComputeControl, ProgressReporter};
use crate::application::services::poller::{PollPolicy, wait_for_status};
use crate::domain::{Action, Fleet, ShutdownMode, Tier};

/// Result of driving one tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierReport {
    pub tier: Tier,
    /// Instance IDs in polling order.
    pub ids: Vec<String>,
    /// Instances that did not reach the target status in time.
    pub failed: Vec<String>,
}

impl TierReport {
    /// Every instance reached the target status.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.failed.is_empty()
    }

    /// The tier had no instances configured and was not commanded.
    #[must_use]
    pub fn skipped(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Terminal state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every tier reached its target status.
    Completed,
    /// This tier failed and tier progression stopped here.
    TierFailed(Tier),
}

/// Per-tier results of a run, in the order tiers were attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub action: Action,
    pub tiers: Vec<TierReport>,
}

impl RunReport {
    #[must_use]
    pub fn outcome(&self) -> RunOutcome {
        self.tiers
            .iter()
            .find(|t| !t.succeeded())
            .map_or(RunOutcome::Completed, |t| RunOutcome::TierFailed(t.tier))
    }

    /// Whether `tier` was commanded and polled during this run.
    #[must_use]
    pub fn attempted(&self, tier: Tier) -> bool {
        self.tiers.iter().any(|t| t.tier == tier)
    }

    /// Tiers the action would have reached had no tier failed.
    #[must_use]
    pub fn not_attempted(&self) -> Vec<Tier> {
        self.action
            .tier_order()
            .into_iter()
            .filter(|t| !self.attempted(*t))
            .collect()
    }
}

/// Run `action` against `fleet`, one tier at a time.
///
/// Within a tier a single batch command is issued, then every instance is
/// polled in group order. Instances later in the group are still polled when
/// an earlier one times out; the following tier is not.
pub async fn run_action(
    compute: &impl ComputeControl,
    reporter: &impl ProgressReporter,
    fleet: &Fleet,
    action: Action,
    policy: PollPolicy,
) -> RunReport {
    let mut report = RunReport {
        action,
        tiers: Vec::with_capacity(2),
    };

    for tier in action.tier_order() {
        let span = info_span!("tier", %action, %tier);
        let tier_report = run_tier(compute, reporter, fleet, action, tier, policy)
            .instrument(span)
            .await;
        let succeeded = tier_report.succeeded();
        report.tiers.push(tier_report);
        if !succeeded {
            warn!(%action, %tier, "tier failed; later tiers not attempted");
            break;
        }
    }

    report
}

async fn run_tier(
    compute: &impl ComputeControl,
    reporter: &impl ProgressReporter,
    fleet: &Fleet,
    action: Action,
    tier: Tier,
    policy: PollPolicy,
) -> TierReport {
    let ids = fleet.group(tier).to_vec();
    if ids.is_empty() {
        reporter.warn(&format!("No {tier} servers configured, skipping."));
        return TierReport {
            tier,
            ids,
            failed: Vec::new(),
        };
    }

    reporter.step(&format!("{} {tier} servers.", action.progressive()));
    issue_batch(compute, reporter, action, &ids).await;

    let target = action.target_status();
    let mut failed = Vec::new();
    for id in &ids {
        if !wait_for_status(compute, reporter, id, &target, policy).await {
            failed.push(id.clone());
        }
    }

    if failed.is_empty() {
        info!(count = ids.len(), "all instances reached {target}");
        reporter.success(&format!(
            "All {tier} servers {} successfully.",
            action.past()
        ));
    } else {
        reporter.warn(&format!("Some {tier} servers failed to {action}."));
    }

    TierReport { tier, ids, failed }
}

/// Fire the batch command; failures are logged and otherwise ignored so that
/// polling decides the tier outcome.
async fn issue_batch(
    compute: &impl ComputeControl,
    reporter: &impl ProgressReporter,
    action: Action,
    ids: &[String],
) {
    let result = match action {
        Action::Start => compute.batch_start(ids).await,
        Action::Stop => compute.batch_stop(ids, ShutdownMode::Soft).await,
    };
    match result {
        Ok(receipt) => {
            info!(count = ids.len(), job_id = ?receipt.job_id, "batch {action} accepted");
            if let Some(job_id) = receipt.job_id {
                reporter.step(&format!("{action} request accepted (job {job_id})"));
            }
        }
        Err(e) => {
            warn!(count = ids.len(), error = %format!("{e:#}"), "batch {action} failed");
            reporter.warn(&format!(
                "Error {} instances: {e:#}",
                action.progressive().to_lowercase()
            ));
        }
    }
}
