use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    sleeper::{
        service::LeagueService,
        types::{League, Matchup, Roster, User},
    },
    LeagueId, Result, Week,
};


/// Base path for the Sleeper v1 API.
pub const SLEEPER_BASE_URL: &str = "https://api.sleeper.app/v1";

/// Environment variable overriding [`SLEEPER_BASE_URL`].
pub const BASE_URL_ENV_VAR: &str = "SLEEPER_API_BASE_URL";

/// HTTP client for the read-only Sleeper league endpoints.
#[derive(Debug, Clone)]
pub struct SleeperClient {
    client: Client,
    base_url: String,
}

impl SleeperClient {
    /// Client pointed at `SLEEPER_API_BASE_URL` if set, else the public API.
    pub fn new() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV_VAR).unwrap_or_else(|_| SLEEPER_BASE_URL.to_string());
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn league_url(&self, league_id: &LeagueId, path: &str) -> String {
        format!("{}/league/{}{}", self.base_url, league_id, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(%url, "GET");
        let res = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;
        Ok(res)
    }
}

impl Default for SleeperClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LeagueService for SleeperClient {
    async fn get_league(&self, league_id: &LeagueId) -> Result<Option<League>> {
        let url = self.league_url(league_id, "");
        debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        // Unknown leagues come back as 200 with a literal `null` body
        let league = response.error_for_status()?.json::<Option<League>>().await?;
        Ok(league)
    }

    async fn get_rosters(&self, league_id: &LeagueId) -> Result<Vec<Roster>> {
        self.get_json(&self.league_url(league_id, "/rosters")).await
    }

    async fn get_users(&self, league_id: &LeagueId) -> Result<Vec<User>> {
        self.get_json(&self.league_url(league_id, "/users")).await
    }

    async fn get_matchups(&self, league_id: &LeagueId, week: Week) -> Result<Vec<Matchup>> {
        let path = format!("/matchups/{}", week);
        self.get_json(&self.league_url(league_id, &path)).await
    }
}
