use crate::cli::types::{LeagueId, PlayerId, RosterId, Season, UserId};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

#[cfg(test)]
mod tests;

/// Null and missing lists both come back as empty.
fn de_null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Ages come in as integers, occasionally as numeric strings; anything else,
/// fractional ages included, is unknown.
fn de_lenient_age<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0 && f.fract() == 0.0).map(|f| f as u64))
            .and_then(|v| u16::try_from(v).ok()),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// League member from `/league/{id}/users`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    pub user_id: UserId,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Team from `/league/{id}/rosters`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Roster {
    pub roster_id: RosterId,
    /// `None` for orphaned teams with no manager
    #[serde(default)]
    pub owner_id: Option<UserId>,
    #[serde(default, deserialize_with = "de_null_as_empty")]
    pub players: Vec<PlayerId>,
}

/// Future pick from `/league/{id}/traded_picks`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TradedPick {
    pub season: Season,
    pub round: u8,
    /// Roster whose draft slot this pick is
    pub roster_id: RosterId,
    /// Roster that owns the pick now
    pub owner_id: RosterId,
    #[serde(default)]
    pub previous_owner_id: Option<RosterId>,
}

/// League metadata from `/league/{id}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct League {
    pub league_id: LeagueId,
    pub name: String,
    #[serde(default)]
    pub season: Option<Season>,
}

/// One entry of the `/players/nfl` directory.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Player {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_age")]
    pub age: Option<u16>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Player {
    /// `"first last"`, trimmed; missing parts count as empty.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }
}

/// Global player directory keyed by player ID; iterates in ID order.
pub type PlayerDirectory = BTreeMap<PlayerId, Player>;

/// Everything fetched for one run, held read-only.
#[derive(Debug, Clone)]
pub struct LeagueData {
    pub league: League,
    pub users: Vec<User>,
    pub rosters: Vec<Roster>,
    pub traded_picks: Vec<TradedPick>,
    pub players: PlayerDirectory,
}
