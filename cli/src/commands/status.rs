//! `ecs-tier status`: show the current status of every configured instance.

use anyhow::Result;
use owo_colors::OwoColorize as _;

use crate::app::AppContext;
use crate::application::services::fleet_status::{InstanceStatusRow, describe_fleet};
use crate::domain::InstanceStatus;
use crate::output::Styles;

/// Run `ecs-tier status`.
///
/// # Errors
///
/// This function currently never fails; unreachable instances are listed as such.
pub async fn run(app: &AppContext) -> Result<()> {
    let ctx = &app.output;
    if app.config.fleet.is_empty() {
        ctx.info("No servers configured.");
        return Ok(());
    }

    let reporter = app.terminal_reporter();
    let rows = describe_fleet(&app.compute, &reporter, &app.config.fleet).await;

    ctx.header(&format!("Fleet status ({})", app.config.region));
    for row in &rows {
        ctx.line(&format_row(row, &ctx.styles));
    }
    Ok(())
}

/// Label shown for a status; `None` means the instance could not be queried.
#[must_use]
pub fn status_label(status: Option<&InstanceStatus>) -> &str {
    status.map_or("unreachable", InstanceStatus::as_str)
}

fn format_row(row: &InstanceStatusRow, styles: &Styles) -> String {
    let status = row.status.as_ref();
    format!(
        "  {}  {}  {}",
        format!("{:<8}", row.tier.label()).style(styles.tier),
        row.id,
        status_label(status).style(styles.for_status(status))
    )
}
