//! Output models used for JSON serialization.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::{sleeper::types::Player, Season};

/// Name used when a player ID or an owner cannot be resolved.
pub const UNKNOWN: &str = "Unknown";

/// Reduced player record written to both output files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinimalPlayer {
    pub name: String,
    pub team: Option<String>,
    pub position: Option<String>,
    pub age: Option<u16>,
    pub status: Option<String>,
}

impl MinimalPlayer {
    /// Stand-in for a rostered ID missing from the player directory.
    pub fn placeholder() -> Self {
        Self {
            name: UNKNOWN.to_string(),
            team: None,
            position: None,
            age: None,
            status: None,
        }
    }
}

impl From<&Player> for MinimalPlayer {
    fn from(p: &Player) -> Self {
        Self {
            name: p.full_name(),
            team: p.team.clone(),
            position: p.position.clone(),
            age: p.age,
            status: p.status.clone(),
        }
    }
}

/// Future pick held by an owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftPick {
    pub season: Season,
    pub round: u8,
    /// Display name of the owner whose draft slot this is.
    pub original_owner: String,
}

/// Point-in-time view of every roster and future pick in the league.
///
/// Other owners' rosters are flattened into the top-level object, so the JSON
/// reads `{"export_date", "league_name", "my_team", "<owner>": [...], ..., "draft_picks"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueSnapshot {
    pub export_date: String,
    pub league_name: String,
    pub my_team: Vec<MinimalPlayer>,
    #[serde(flatten)]
    pub teams: BTreeMap<String, Vec<MinimalPlayer>>,
    pub draft_picks: BTreeMap<String, Vec<DraftPick>>,
}
