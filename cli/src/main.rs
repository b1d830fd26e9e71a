//! ecs-tier - Tiered start/stop orchestration for ECS fleets

use clap::Parser;

use ecs_tier::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    ecs_tier::logging::init(cli.verbose, cli.no_color);
    if let Err(e) = cli.run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
