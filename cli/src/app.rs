//! Application context: unified state passed to every command handler.
//!
//! Built once per run from CLI flags, the environment, and the config file,
//! then borrowed read-only by every command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::services::poller::PollPolicy;
use crate::domain::FleetConfig;
use crate::infra::config::YamlConfigStore;
use crate::infra::credentials::Credentials;
use crate::infra::otc::OtcEcsClient;
use crate::output::{OutputContext, TerminalReporter};

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Explicit config file path, if any.
    pub config: Option<PathBuf>,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Fleet definition, region, and poll budget.
    pub config: FleetConfig,
    /// ECS client shared by every provider call.
    pub compute: OtcEcsClient,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are missing from the environment, the
    /// config file cannot be loaded, or the ECS client cannot be built. All of
    /// these happen before any network call.
    pub fn new(flags: &AppFlags) -> Result<Self> {
        let credentials = Credentials::from_env()?;
        let config = YamlConfigStore::new(flags.config.clone())
            .load()
            .context("loading fleet config")?;
        let compute =
            OtcEcsClient::new(&config, credentials).context("initializing ECS client")?;
        tracing::info!(region = %config.region, endpoint = %config.endpoint, "ECS client ready");

        Ok(Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            config,
            compute,
        })
    }

    /// Progress reporter that writes to this context's terminal.
    #[must_use]
    pub fn terminal_reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }

    /// Per-instance polling budget from the config file.
    #[must_use]
    pub fn poll_policy(&self) -> PollPolicy {
        PollPolicy::from(self.config.poll)
    }
}
