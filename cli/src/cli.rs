//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::app::{AppContext, AppFlags, OutputFlags};
use crate::commands;
use crate::domain::Action;

/// Start and stop ECS server tiers in dependency order
#[derive(Parser)]
#[command(name = "ecs-tier", version, propagate_version = true)]
pub struct Cli {
    /// Fleet config file [default: ~/.ecs-tier/config.yaml]
    #[arg(long, global = true, env = "ECS_TIER_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Action to run; prompts for one when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start backend servers, then frontend servers
    Start,

    /// Stop frontend servers, then backend servers
    Stop,

    /// Show the current status of every configured server
    Status,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error on fatal startup conditions: missing credentials or an
    /// unusable config file. Lifecycle failures are reported, not returned.
    pub async fn run(self) -> Result<()> {
        let Cli {
            config,
            quiet,
            no_color,
            command,
            ..
        } = self;
        let app = AppContext::new(&AppFlags {
            output: OutputFlags { no_color, quiet },
            config,
        })?;

        match command {
            Some(Command::Start) => commands::lifecycle::run(&app, Action::Start).await,
            Some(Command::Stop) => commands::lifecycle::run(&app, Action::Stop).await,
            Some(Command::Status) => commands::status::run(&app).await,
            None => commands::prompt::run(&app).await,
        }
    }
}
