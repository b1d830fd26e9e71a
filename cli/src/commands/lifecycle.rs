//! `ecs-tier start` / `ecs-tier stop`: drive both tiers in dependency order.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::orchestrator::{self, RunOutcome, RunReport};
use crate::domain::Action;
use crate::output::OutputContext;

/// Run `action` against the configured fleet.
///
/// Tier failures are reported, not returned: the process still exits zero.
///
/// # Errors
///
/// This function currently never fails; the `Result` keeps command handlers uniform.
pub async fn run(app: &AppContext, action: Action) -> Result<()> {
    if app.config.fleet.is_empty() {
        app.output
            .warn("No servers configured. Add backend and frontend IDs to the config file.");
        return Ok(());
    }

    let reporter = app.terminal_reporter();
    let report = orchestrator::run_action(
        &app.compute,
        &reporter,
        &app.config.fleet,
        action,
        app.poll_policy(),
    )
    .await;

    print_summary(&report, &app.output);
    Ok(())
}

/// Print the final verdict of a run.
pub fn print_summary(report: &RunReport, ctx: &OutputContext) {
    match report.outcome() {
        RunOutcome::Completed => {
            ctx.success(&format!("All servers {}.", report.action.past()));
        }
        RunOutcome::TierFailed(tier) => {
            let failed = report
                .tiers
                .iter()
                .find(|t| t.tier == tier)
                .map(|t| t.failed.join(", "))
                .unwrap_or_default();
            ctx.error(&format!(
                "{tier} servers did not reach {}: {failed}",
                report.action.target_status()
            ));
            for untouched in report.not_attempted() {
                ctx.info(&format!(
                    "{untouched} servers were not {}.",
                    report.action.past()
                ));
            }
        }
    }
}
