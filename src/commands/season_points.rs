//! Regular-season points leaderboard command

use std::io::{self, Write};

use crate::{
    sleeper::{
        compute::{rank_owners, season_totals, SeasonOptions},
        http::SleeperClient,
        league::{get_display_names, get_roster_owners, LeagueHandle},
        service::LeagueService,
        types::RankedEntry,
    },
    Result,
};

use super::prompt::prompt_until_ranked;

/// Parameters for [`handle_season_points`]
#[derive(Debug, Clone, Default)]
pub struct SeasonPointsParams {
    /// League ID to try before prompting, from `--league-id` or the environment
    pub league_id: Option<String>,
    pub options: SeasonOptions,
    pub as_json: bool,
    pub verbose: bool,
}

/// Total every roster's regular season and rank the owners.
pub async fn league_points_ranking<S: LeagueService + ?Sized>(
    league: &LeagueHandle<'_, S>,
    options: SeasonOptions,
) -> Result<Vec<RankedEntry>> {
    let totals = season_totals(league, options).await?;
    let owners = get_roster_owners(league).await?;
    let display_names = get_display_names(league).await?;
    rank_owners(&owners, &display_names, &totals)
}

/// Open `raw_league_id` against `service` and rank its owners.
///
/// Fails with [`SleeperError::InvalidLeagueId`](crate::SleeperError::InvalidLeagueId)
/// when the ID is malformed or unknown; every other error comes from the
/// service or from a join.
pub async fn run_for_league<S: LeagueService + ?Sized>(
    service: &S,
    raw_league_id: &str,
    options: SeasonOptions,
) -> Result<Vec<RankedEntry>> {
    let league = LeagueHandle::open(service, raw_league_id).await?;
    league_points_ranking(&league, options).await
}

/// Quote a display name the way a tuple listing shows strings.
fn quote_name(name: &str) -> String {
    let escaped = name.replace('\\', "\\\\");
    if escaped.contains('\'') && !escaped.contains('"') {
        format!("\"{}\"", escaped)
    } else {
        format!("'{}'", escaped.replace('\'', "\\'"))
    }
}

/// `[('Alice', 110.0), ('Bob', 85.0)]`
pub fn render_tuple_listing(ranked: &[RankedEntry]) -> String {
    let entries: Vec<String> = ranked
        .iter()
        .map(|entry| format!("({}, {:?})", quote_name(&entry.display_name), entry.total_points))
        .collect();
    format!("[{}]", entries.join(", "))
}

/// Write the leaderboard either as the tuple listing or as pretty JSON.
pub fn print_ranking<W: Write>(out: &mut W, ranked: &[RankedEntry], as_json: bool) -> Result<()> {
    if as_json {
        writeln!(out, "{}", serde_json::to_string_pretty(ranked)?)?;
    } else {
        writeln!(out, "\nSorted list of all points scored: ")?;
        writeln!(out, " {}", render_tuple_listing(ranked))?;
    }
    Ok(())
}

/// Handle the season points command against the live Sleeper API
pub async fn handle_season_points(params: SeasonPointsParams) -> Result<()> {
    let client = SleeperClient::new();
    if params.verbose {
        eprintln!("Using Sleeper API at {}", client.base_url());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    let ranked = prompt_until_ranked(
        &client,
        params.options,
        params.league_id,
        &mut input,
        &mut stdout,
    )
    .await?;

    if params.verbose {
        eprintln!("✓ Ranked {} owners", ranked.len());
    }
    print_ranking(&mut stdout, &ranked, params.as_json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{sleeper::memory::InMemoryLeague, LeagueId, Week};

    fn alice_and_bob() -> InMemoryLeague {
        InMemoryLeague::new(LeagueId::new("777").unwrap(), 2, Week::new(3))
            .with_owner(1, "u1", "Alice")
            .with_owner(2, "u2", "Bob")
            .with_scores(1, 1, &[("A", 50.0)])
            .with_scores(1, 2, &[("B", 40.0)])
            .with_scores(2, 1, &[("A", 60.0)])
            .with_scores(2, 2, &[("B", 45.0)])
    }

    #[tokio::test]
    async fn test_run_for_league_end_to_end() {
        let service = alice_and_bob();

        let ranked = run_for_league(&service, "777", SeasonOptions::default())
            .await
            .unwrap();

        assert_eq!(
            ranked,
            vec![RankedEntry::new("Alice", 110.0), RankedEntry::new("Bob", 85.0)]
        );
    }

    #[tokio::test]
    async fn test_run_for_league_invalid_id() {
        let service = alice_and_bob();

        let err = run_for_league(&service, "abc", SeasonOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_invalid_league());
    }

    #[test]
    fn test_render_tuple_listing() {
        let ranked = vec![RankedEntry::new("Alice", 110.0), RankedEntry::new("Bob", 85.5)];
        assert_eq!(
            render_tuple_listing(&ranked),
            "[('Alice', 110.0), ('Bob', 85.5)]"
        );
    }

    #[test]
    fn test_render_tuple_listing_empty() {
        assert_eq!(render_tuple_listing(&[]), "[]");
    }

    #[test]
    fn test_quote_name_with_apostrophe() {
        assert_eq!(quote_name("O'Brien"), "\"O'Brien\"");
        assert_eq!(quote_name("say \"hi\" it's"), "'say \"hi\" it\\'s'");
    }

    #[test]
    fn test_print_ranking_text() {
        let mut out = Vec::new();
        print_ranking(&mut out, &[RankedEntry::new("Alice", 16.67)], false).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nSorted list of all points scored: \n [('Alice', 16.67)]\n"
        );
    }

    #[test]
    fn test_print_ranking_json() {
        let mut out = Vec::new();
        print_ranking(&mut out, &[RankedEntry::new("Alice", 110.0)], true).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed[0]["display_name"], "Alice");
        assert_eq!(parsed[0]["total_points"], 110.0);
    }
}
