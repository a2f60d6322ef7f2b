//! The four read operations the points pipeline needs from a league provider.

use async_trait::async_trait;

use crate::{
    sleeper::types::{League, Matchup, Roster, User},
    LeagueId, Result, Week,
};

/// Read access to one league provider.
///
/// [`SleeperClient`](crate::sleeper::http::SleeperClient) talks to the live
/// API; [`InMemoryLeague`](crate::sleeper::memory::InMemoryLeague) serves
/// canned data.
#[async_trait]
pub trait LeagueService: Send + Sync {
    /// League record, or `None` when the provider does not know the ID.
    async fn get_league(&self, league_id: &LeagueId) -> Result<Option<League>>;

    async fn get_rosters(&self, league_id: &LeagueId) -> Result<Vec<Roster>>;

    async fn get_users(&self, league_id: &LeagueId) -> Result<Vec<User>>;

    /// Matchups for one week. Weeks outside the season are passed through
    /// unchecked; whatever the provider returns comes back.
    async fn get_matchups(&self, league_id: &LeagueId, week: Week) -> Result<Vec<Matchup>>;
}
