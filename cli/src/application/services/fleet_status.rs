//! Fleet status snapshot: one status query per configured instance.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use crate::application::ports::{ComputeControl, ProgressReporter};
use crate::application::services::poller::observe;
use crate::domain::{Fleet, InstanceStatus, Tier};

/// Observed status of one instance. `None` means the query failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceStatusRow {
    pub tier: Tier,
    pub id: String,
    pub status: Option<InstanceStatus>,
}

/// Query every instance, backend first, in configured order.
pub async fn describe_fleet(
    compute: &impl ComputeControl,
    reporter: &impl ProgressReporter,
    fleet: &Fleet,
) -> Vec<InstanceStatusRow> {
    let mut rows = Vec::with_capacity(fleet.len());
    for tier in Tier::ALL {
        for id in fleet.group(tier) {
            let status = observe(compute, reporter, id).await;
            rows.push(InstanceStatusRow {
                tier,
                id: id.clone(),
                status,
            });
        }
    }
    rows
}
