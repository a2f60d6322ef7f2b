//! League handle and the four leaf lookups the points pipeline is built from.

use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    cli::types::{OwnerId, RosterId},
    sleeper::{service::LeagueService, types::Matchup},
    LeagueId, Result, SleeperError, Week,
};

/// Roster ID -> owner ID (`None` for orphaned rosters), in the order the
/// provider listed the rosters.
pub type RosterOwners = Vec<(RosterId, Option<OwnerId>)>;

/// Owner ID -> display name.
pub type DisplayNames = BTreeMap<OwnerId, String>;

/// Size and regular-season bound of a league.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeagueMeta {
    pub league_size: u32,
    pub playoff_start_week: Week,
}

/// A validated league ID bound to the service that knows about it.
///
/// Opening a handle is the only step that can fail with
/// [`SleeperError::InvalidLeagueId`]: either the text is not a league ID at
/// all, or the service has no such league.
#[derive(Debug)]
pub struct LeagueHandle<'a, S: LeagueService + ?Sized> {
    service: &'a S,
    league_id: LeagueId,
}

impl<'a, S: LeagueService + ?Sized> LeagueHandle<'a, S> {
    pub async fn open(service: &'a S, raw_league_id: &str) -> Result<Self> {
        let league_id: LeagueId = raw_league_id.parse()?;
        if service.get_league(&league_id).await?.is_none() {
            return Err(SleeperError::invalid_league(league_id.as_str()));
        }
        debug!(%league_id, "opened league");
        Ok(Self { service, league_id })
    }

    pub fn league_id(&self) -> &LeagueId {
        &self.league_id
    }

    pub fn service(&self) -> &'a S {
        self.service
    }
}

/// Fetch the league record and read its roster count and playoff start week.
pub async fn get_league_meta<S: LeagueService + ?Sized>(
    league: &LeagueHandle<'_, S>,
) -> Result<LeagueMeta> {
    let record = league
        .service
        .get_league(&league.league_id)
        .await?
        .ok_or_else(|| SleeperError::invalid_league(league.league_id.as_str()))?;

    Ok(LeagueMeta {
        league_size: record.total_rosters,
        playoff_start_week: record.settings.playoff_week_start,
    })
}

pub async fn get_roster_owners<S: LeagueService + ?Sized>(
    league: &LeagueHandle<'_, S>,
) -> Result<RosterOwners> {
    let rosters = league.service.get_rosters(&league.league_id).await?;
    Ok(rosters
        .into_iter()
        .map(|roster| (roster.roster_id, roster.owner_id))
        .collect())
}

pub async fn get_display_names<S: LeagueService + ?Sized>(
    league: &LeagueHandle<'_, S>,
) -> Result<DisplayNames> {
    let users = league.service.get_users(&league.league_id).await?;
    Ok(users
        .into_iter()
        .map(|user| (user.user_id, user.display_name))
        .collect())
}

/// Matchups for `week`, exactly as the service returned them.
pub async fn get_weekly_matchups<S: LeagueService + ?Sized>(
    league: &LeagueHandle<'_, S>,
    week: Week,
) -> Result<Vec<Matchup>> {
    league.service.get_matchups(&league.league_id, week).await
}
