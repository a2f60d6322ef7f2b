use crate::cli::types::{OwnerId, RosterId, Week};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;


fn de_null_as_empty_map<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Option<f64>>> = Deserialize::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default())
}

/// League settings we read out of `GET /league/{id}`
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LeagueSettings {
    /// First week of the playoffs; every earlier week is regular season.
    pub playoff_week_start: Week,
}

/// League record. Sleeper answers with `null` for unknown IDs, so callers
/// receive this as `Option<League>`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct League {
    #[serde(default)]
    pub league_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    pub total_rosters: u32,
    pub settings: LeagueSettings,
}

/// One team slot from `GET /league/{id}/rosters`
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Roster {
    pub roster_id: RosterId,
    /// `null` for orphaned rosters nobody currently manages
    #[serde(default)]
    pub owner_id: Option<OwnerId>,
    /// Player IDs currently on the taxi squad
    #[serde(default)]
    pub taxi: Option<Vec<String>>,
}

/// League member from `GET /league/{id}/users`
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct User {
    pub user_id: OwnerId,
    pub display_name: String,
}

/// One roster's scoring record for a week, from `GET /league/{id}/matchups/{week}`
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Matchup {
    pub roster_id: RosterId,
    /// Pairs two rosters as opponents; `null` on bye weeks
    #[serde(default)]
    pub matchup_id: Option<u32>,
    /// Player ID -> points scored that week; `null` reads as no players
    #[serde(default, deserialize_with = "de_null_as_empty_map")]
    pub players_points: BTreeMap<String, Option<f64>>,
}

/// Owner display name and regular-season total, as printed
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankedEntry {
    pub display_name: String,
    pub total_points: f64,
}

impl RankedEntry {
    pub fn new(display_name: impl Into<String>, total_points: f64) -> Self {
        Self {
            display_name: display_name.into(),
            total_points,
        }
    }
}
