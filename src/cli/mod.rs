//! CLI argument definitions and parsing.

pub mod types;

use clap::Parser;
use types::NullPointsPolicy;

use crate::{sleeper::compute::SeasonOptions, LEAGUE_ID_ENV_VAR};

/// Rank every owner in a Sleeper league by regular-season fantasy points.
///
/// Without `--league-id` the league ID is read interactively, re-prompting
/// until a valid league is entered.
#[derive(Debug, Parser)]
#[clap(name = "sleeper-points", about = "Sleeper regular-season points leaderboard")]
pub struct SleeperPoints {
    /// League ID (or set `SLEEPER_LEAGUE_ID` env var). Skips the first prompt;
    /// a malformed value falls back to prompting.
    #[clap(long, short, env = LEAGUE_ID_ENV_VAR)]
    pub league_id: Option<String>,

    /// Leave players on a roster's taxi squad out of that roster's weekly sums.
    #[clap(long)]
    pub exclude_taxi: bool,

    /// How to treat players whose weekly points are reported as null.
    #[clap(long, value_enum, default_value_t = NullPointsPolicy::default())]
    pub null_points: NullPointsPolicy,

    /// Output results as JSON instead of the tuple listing.
    #[clap(long)]
    pub json: bool,

    /// Print per-week progress to stderr.
    #[clap(long, short)]
    pub verbose: bool,
}

impl SleeperPoints {
    pub fn season_options(&self) -> SeasonOptions {
        SeasonOptions {
            exclude_taxi: self.exclude_taxi,
            null_points: self.null_points,
        }
    }
}
