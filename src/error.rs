//! Error types for the Sleeper points CLI

use thiserror::Error;

use crate::cli::types::{OwnerId, RosterId, Week};

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, SleeperError>;

#[derive(Error, Debug)]
pub enum SleeperError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not round points: {0}")]
    PointsFormat(#[from] std::num::ParseFloatError),

    #[error("Invalid Sleeper league ID: {league_id:?}")]
    InvalidLeagueId { league_id: String },

    #[error("Roster {roster_id} is outside the league's {league_size} rosters")]
    UnknownRoster { roster_id: RosterId, league_size: u32 },

    #[error("Owner {owner_id} has no display name in this league")]
    UnknownOwner { owner_id: OwnerId },

    #[error("Roster {roster_id} has no owner")]
    UnownedRoster { roster_id: RosterId },

    #[error("Player {player_id} on roster {roster_id} has null points in week {week}")]
    NullPlayerPoints {
        roster_id: RosterId,
        week: Week,
        player_id: String,
    },
}

impl SleeperError {
    /// Build an invalid league error from whatever the user typed.
    pub fn invalid_league(league_id: impl Into<String>) -> Self {
        SleeperError::InvalidLeagueId {
            league_id: league_id.into(),
        }
    }

    /// True only for the error the prompt loop recovers from.
    pub fn is_invalid_league(&self) -> bool {
        matches!(self, SleeperError::InvalidLeagueId { .. })
    }

    /// True for the join failures: a key missing from one of the league mappings.
    pub fn is_missing_key(&self) -> bool {
        matches!(
            self,
            SleeperError::UnknownRoster { .. }
                | SleeperError::UnknownOwner { .. }
                | SleeperError::UnownedRoster { .. }
        )
    }
}
