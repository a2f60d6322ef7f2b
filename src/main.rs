//! Entry point: parse CLI, set up logging and run the leaderboard.

use clap::Parser;
use sleeper_points::{
    cli::SleeperPoints,
    commands::season_points::{handle_season_points, SeasonPointsParams},
};
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = SleeperPoints::parse();
    init_tracing(app.verbose);

    handle_season_points(SeasonPointsParams {
        options: app.season_options(),
        league_id: app.league_id,
        as_json: app.json,
        verbose: app.verbose,
    })
    .await?;

    Ok(())
}
