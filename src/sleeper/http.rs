use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::{
    core::default_headers,
    sleeper::types::{League, LeagueData, PlayerDirectory, Roster, TradedPick, User},
    LeagueId, Result,
};

#[cfg(test)]
mod tests;

/// Base path for the Sleeper v1 API.
pub const SLEEPER_BASE_URL: &str = "https://api.sleeper.app/v1";

/// Read-only client for the league endpoints the exporter needs.
#[derive(Debug, Clone)]
pub struct SleeperClient {
    client: Client,
    base_url: String,
}

impl SleeperClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(SLEEPER_BASE_URL)
    }

    /// Point the client at another host (used by tests against a mock server).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .default_headers(default_headers()?)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        let res = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;
        Ok(res)
    }

    /// Sleeper answers `null` instead of `[]` for leagues with nothing to list.
    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        Ok(self
            .get_json::<Option<Vec<T>>>(path)
            .await?
            .unwrap_or_default())
    }

    pub async fn get_league(&self, league_id: &LeagueId) -> Result<League> {
        self.get_json(&format!("/league/{}", league_id)).await
    }

    pub async fn get_users(&self, league_id: &LeagueId) -> Result<Vec<User>> {
        self.get_list(&format!("/league/{}/users", league_id)).await
    }

    pub async fn get_rosters(&self, league_id: &LeagueId) -> Result<Vec<Roster>> {
        self.get_list(&format!("/league/{}/rosters", league_id))
            .await
    }

    pub async fn get_traded_picks(&self, league_id: &LeagueId) -> Result<Vec<TradedPick>> {
        self.get_list(&format!("/league/{}/traded_picks", league_id))
            .await
    }

    /// Full NFL player directory. This is a multi-megabyte payload.
    pub async fn get_players(&self) -> Result<PlayerDirectory> {
        self.get_json("/players/nfl").await
    }

    /// Fetch everything one export needs, one request after another.
    pub async fn fetch_league_data(&self, league_id: &LeagueId) -> Result<LeagueData> {
        let users = self.get_users(league_id).await?;
        info!(count = users.len(), "Fetched league users");

        let rosters = self.get_rosters(league_id).await?;
        info!(count = rosters.len(), "Fetched league rosters");

        let players = self.get_players().await?;
        info!(count = players.len(), "Fetched player directory");

        let league = self.get_league(league_id).await?;
        info!(name = %league.name, "Fetched league metadata");

        let traded_picks = self.get_traded_picks(league_id).await?;
        info!(count = traded_picks.len(), "Fetched traded picks");

        Ok(LeagueData {
            league,
            users,
            rosters,
            traded_picks,
            players,
        })
    }
}
