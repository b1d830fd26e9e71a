//! Console palette for progress messages and instance status labels.

use owo_colors::Style;

use crate::domain::InstanceStatus;

/// Styles for every kind of console message. `Default` is the plain palette.
#[derive(Default, Clone, Copy)]
pub struct Styles {
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    pub info: Style,
    /// Progress steps and poll waits.
    pub step: Style,
    pub header: Style,
    /// Tier column of the status table.
    pub tier: Style,
    /// Stopped instances; neither good nor bad.
    pub idle: Style,
}

impl Styles {
    /// ANSI palette for a color-capable terminal.
    #[must_use]
    pub fn colored() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red(),
            info: Style::new().blue(),
            step: Style::new().cyan(),
            header: Style::new().bold().cyan(),
            tier: Style::new().bold(),
            idle: Style::new().dimmed(),
        }
    }

    /// Style for a status label; `None` is an instance that could not be queried.
    #[must_use]
    pub fn for_status(&self, status: Option<&InstanceStatus>) -> Style {
        match status {
            Some(InstanceStatus::Active) => self.success,
            Some(InstanceStatus::Shutoff) => self.idle,
            Some(s) if s.is_transient() => self.warning,
            _ => self.error,
        }
    }
}
