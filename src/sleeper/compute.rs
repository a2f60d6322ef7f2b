use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info};

use crate::{
    cli::types::{NullPointsPolicy, RosterId},
    sleeper::{
        league::{get_league_meta, get_weekly_matchups, DisplayNames, LeagueHandle, RosterOwners},
        service::LeagueService,
        types::{Matchup, RankedEntry},
    },
    Result, SleeperError, Week,
};


/// Roster ID -> regular-season points, one entry per roster slot.
pub type SeasonTotals = BTreeMap<RosterId, f64>;

/// Roster ID -> player IDs currently on that roster's taxi squad.
pub type TaxiSquads = BTreeMap<RosterId, BTreeSet<String>>;

/// Knobs for how weekly player points are summed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeasonOptions {
    /// Skip players on the roster's taxi squad. Off by default: every entry
    /// in `players_points` counts.
    pub exclude_taxi: bool,
    pub null_points: NullPointsPolicy,
}

/// Sum every player's points in one matchup.
///
/// Players listed in `taxi` are skipped. Null points follow `null_points`:
/// coerced to 0.0, or reported as [`SleeperError::NullPlayerPoints`].
pub fn sum_player_points(
    matchup: &Matchup,
    week: Week,
    null_points: NullPointsPolicy,
    taxi: Option<&BTreeSet<String>>,
) -> Result<f64> {
    let mut total = 0.0;
    for (player_id, points) in &matchup.players_points {
        if taxi.is_some_and(|squad| squad.contains(player_id)) {
            continue;
        }
        total += match (points, null_points) {
            (Some(points), _) => *points,
            (None, NullPointsPolicy::Zero) => 0.0,
            (None, NullPointsPolicy::Error) => {
                return Err(SleeperError::NullPlayerPoints {
                    roster_id: matchup.roster_id,
                    week,
                    player_id: player_id.clone(),
                })
            }
        };
    }
    Ok(total)
}

/// Round to 2 decimal places, ties to even.
///
/// Rounds the exact stored value through decimal formatting, so `1.005`
/// (stored just below the tie) gives `1.0` and `0.005` (just above) gives
/// `0.01`.
pub fn round_points(points: f64) -> Result<f64> {
    Ok(format!("{:.2}", points).parse::<f64>()?)
}

/// Zeroed totals for rosters `1..=league_size`.
pub fn new_season_totals(league_size: u32) -> SeasonTotals {
    (1..=league_size).map(|id| (RosterId::new(id), 0.0)).collect()
}

/// Add one week's rounded matchup scores into `totals`.
///
/// A matchup for a roster with no slot in `totals` is an error; the map is
/// never grown.
pub fn accumulate_week(
    totals: &mut SeasonTotals,
    week: Week,
    matchups: &[Matchup],
    options: SeasonOptions,
    taxi_squads: &TaxiSquads,
) -> Result<()> {
    let league_size = totals.len() as u32;
    for matchup in matchups {
        let taxi = if options.exclude_taxi {
            taxi_squads.get(&matchup.roster_id)
        } else {
            None
        };
        let total = totals
            .get_mut(&matchup.roster_id)
            .ok_or(SleeperError::UnknownRoster {
                roster_id: matchup.roster_id,
                league_size,
            })?;
        *total += round_points(sum_player_points(matchup, week, options.null_points, taxi)?)?;
    }
    Ok(())
}

/// Current taxi squads for every roster that has one.
pub async fn get_taxi_squads<S: LeagueService + ?Sized>(
    league: &LeagueHandle<'_, S>,
) -> Result<TaxiSquads> {
    let rosters = league.service().get_rosters(league.league_id()).await?;
    Ok(rosters
        .into_iter()
        .filter_map(|roster| {
            roster
                .taxi
                .map(|squad| (roster.roster_id, squad.into_iter().collect()))
        })
        .collect())
}

/// Total regular-season points for every roster in the league.
///
/// Fetches weeks `1..playoff_start_week` one at a time; the playoff start
/// week and everything after it is never requested.
pub async fn season_totals<S: LeagueService + ?Sized>(
    league: &LeagueHandle<'_, S>,
    options: SeasonOptions,
) -> Result<SeasonTotals> {
    let meta = get_league_meta(league).await?;
    debug!(
        league_size = meta.league_size,
        playoff_start_week = %meta.playoff_start_week,
        "league meta"
    );

    let taxi_squads = if options.exclude_taxi {
        get_taxi_squads(league).await?
    } else {
        TaxiSquads::new()
    };

    let mut totals = new_season_totals(meta.league_size);
    for week in Week::regular_season(meta.playoff_start_week) {
        let matchups = get_weekly_matchups(league, week).await?;
        info!(%week, matchups = matchups.len(), "week fetched");
        accumulate_week(&mut totals, week, &matchups, options, &taxi_squads)?;
    }

    Ok(totals)
}

/// Join owners, display names and totals into a leaderboard, highest first.
///
/// Rosters are visited in the order the provider listed them and the sort is
/// stable, so owners with equal totals keep that order.
pub fn rank_owners(
    owners: &RosterOwners,
    display_names: &DisplayNames,
    totals: &SeasonTotals,
) -> Result<Vec<RankedEntry>> {
    let mut ranked = Vec::with_capacity(owners.len());
    for (roster_id, owner_id) in owners {
        let owner_id = owner_id.as_ref().ok_or(SleeperError::UnownedRoster {
            roster_id: *roster_id,
        })?;
        let display_name = display_names
            .get(owner_id)
            .ok_or_else(|| SleeperError::UnknownOwner {
                owner_id: owner_id.clone(),
            })?;
        let total_points = totals.get(roster_id).ok_or(SleeperError::UnknownRoster {
            roster_id: *roster_id,
            league_size: totals.len() as u32,
        })?;
        ranked.push(RankedEntry::new(display_name.as_str(), *total_points));
    }

    ranked.sort_by(|a, b| b.total_points.total_cmp(&a.total_points));
    Ok(ranked)
}
