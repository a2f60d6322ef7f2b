//! Sleeper Fantasy Football Points Library
//!
//! Ranks every owner in a Sleeper league by the fantasy points their roster
//! scored across the regular season.
//!
//! ## Features
//!
//! - **League Lookups**: Roster owners, display names, weekly matchups and
//!   league size / playoff start week from the Sleeper API
//! - **Season Aggregation**: Per-week rounded matchup totals summed over every
//!   week before the playoffs
//! - **Leaderboard**: Owners sorted by total points, highest first
//! - **Pluggable Provider**: Everything runs against the [`LeagueService`]
//!   trait, with an in-memory implementation for offline use
//!
//! ## Quick Start
//!
//! ```rust
//! use sleeper_points::{
//!     commands::season_points::run_for_league,
//!     sleeper::{compute::SeasonOptions, memory::InMemoryLeague},
//!     LeagueId, Week,
//! };
//!
//! # async fn example() -> sleeper_points::Result<()> {
//! let league = InMemoryLeague::new(LeagueId::new("1")?, 2, Week::new(3))
//!     .with_owner(1, "u1", "Alice")
//!     .with_owner(2, "u2", "Bob")
//!     .with_scores(1, 1, &[("A", 50.0)])
//!     .with_scores(1, 2, &[("B", 40.0)]);
//!
//! let ranked = run_for_league(&league, "1", SeasonOptions::default()).await?;
//! assert_eq!(ranked[0].display_name, "Alice");
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your league ID to skip the prompt:
//! ```bash
//! export SLEEPER_LEAGUE_ID=784444797430657024
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod sleeper;

// Re-export commonly used types
pub use cli::types::{LeagueId, NullPointsPolicy, OwnerId, RosterId, Week};
pub use error::{Result, SleeperError};
pub use sleeper::service::LeagueService;
pub use sleeper::types::RankedEntry;

pub const LEAGUE_ID_ENV_VAR: &str = "SLEEPER_LEAGUE_ID";
