//! In-memory league provider.
//!
//! Serves a fixed league, roster list, user list and per-week matchups without
//! any network access, and records which weeks were requested so callers can
//! check what the aggregation actually fetched.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    cli::types::{OwnerId, RosterId},
    sleeper::{
        service::LeagueService,
        types::{League, LeagueSettings, Matchup, Roster, User},
    },
    LeagueId, Result, Week,
};

#[derive(Debug, Default)]
pub struct InMemoryLeague {
    league_id: Option<LeagueId>,
    league: Option<League>,
    rosters: Vec<Roster>,
    users: Vec<User>,
    matchups: BTreeMap<Week, Vec<Matchup>>,
    fetched_weeks: Mutex<Vec<Week>>,
}

impl InMemoryLeague {
    /// League answering to `league_id` with the given size and playoff start.
    pub fn new(league_id: LeagueId, total_rosters: u32, playoff_week_start: Week) -> Self {
        Self {
            league: Some(League {
                league_id: Some(league_id.to_string()),
                name: None,
                season: None,
                total_rosters,
                settings: LeagueSettings { playoff_week_start },
            }),
            league_id: Some(league_id),
            ..Self::default()
        }
    }

    /// Add a roster and its owner's user record.
    pub fn with_owner(mut self, roster_id: u32, owner_id: &str, display_name: &str) -> Self {
        self.rosters.push(Roster {
            roster_id: RosterId::new(roster_id),
            owner_id: Some(OwnerId::new(owner_id)),
            taxi: None,
        });
        self.users.push(User {
            user_id: OwnerId::new(owner_id),
            display_name: display_name.to_string(),
        });
        self
    }

    pub fn with_roster(mut self, roster: Roster) -> Self {
        self.rosters.push(roster);
        self
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.users.push(user);
        self
    }

    pub fn with_matchup(mut self, week: Week, matchup: Matchup) -> Self {
        self.matchups.entry(week).or_default().push(matchup);
        self
    }

    /// Add a matchup whose players all have known points.
    pub fn with_scores(self, week: u16, roster_id: u32, players_points: &[(&str, f64)]) -> Self {
        let matchup = Matchup {
            roster_id: RosterId::new(roster_id),
            matchup_id: None,
            players_points: players_points
                .iter()
                .map(|(player, points)| (player.to_string(), Some(*points)))
                .collect(),
        };
        self.with_matchup(Week::new(week), matchup)
    }

    /// Weeks passed to `get_matchups`, in call order.
    pub fn fetched_weeks(&self) -> Vec<Week> {
        self.fetched_weeks
            .lock()
            .map(|weeks| weeks.clone())
            .unwrap_or_default()
    }

    fn knows(&self, league_id: &LeagueId) -> bool {
        self.league_id.as_ref() == Some(league_id)
    }
}

#[async_trait]
impl LeagueService for InMemoryLeague {
    async fn get_league(&self, league_id: &LeagueId) -> Result<Option<League>> {
        Ok(self.league.clone().filter(|_| self.knows(league_id)))
    }

    async fn get_rosters(&self, league_id: &LeagueId) -> Result<Vec<Roster>> {
        Ok(if self.knows(league_id) {
            self.rosters.clone()
        } else {
            Vec::new()
        })
    }

    async fn get_users(&self, league_id: &LeagueId) -> Result<Vec<User>> {
        Ok(if self.knows(league_id) {
            self.users.clone()
        } else {
            Vec::new()
        })
    }

    async fn get_matchups(&self, league_id: &LeagueId, week: Week) -> Result<Vec<Matchup>> {
        if let Ok(mut weeks) = self.fetched_weeks.lock() {
            weeks.push(week);
        }
        if !self.knows(league_id) {
            return Ok(Vec::new());
        }
        Ok(self.matchups.get(&week).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn league_id() -> LeagueId {
        LeagueId::new("42").unwrap()
    }

    #[tokio::test]
    async fn test_unknown_league_is_none() {
        let league = InMemoryLeague::new(league_id(), 2, Week::new(3));
        let other = LeagueId::new("43").unwrap();

        assert!(league.get_league(&other).await.unwrap().is_none());
        assert!(league.get_league(&league_id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_records_fetched_weeks() {
        let league = InMemoryLeague::new(league_id(), 1, Week::new(3))
            .with_owner(1, "u1", "Alice")
            .with_scores(2, 1, &[("A", 10.0)]);

        let week_one = league.get_matchups(&league_id(), Week::new(1)).await.unwrap();
        let week_two = league.get_matchups(&league_id(), Week::new(2)).await.unwrap();

        assert!(week_one.is_empty());
        assert_eq!(week_two.len(), 1);
        assert_eq!(league.fetched_weeks(), vec![Week::new(1), Week::new(2)]);
    }
}
