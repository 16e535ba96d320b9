//! League snapshot assembly: reduced rosters per owner plus resolved
//! ownership of traded future picks.

use chrono::Local;
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

use crate::{
    error::SleeperError,
    models::{DraftPick, LeagueSnapshot, MinimalPlayer, UNKNOWN},
    sleeper::types::{LeagueData, PlayerDirectory, Roster, TradedPick, User},
    PlayerId, Result, RosterId, Season, UserId,
};


/// `export_date` format inside the snapshot: `2026-10-19 18:45:02`
pub const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Top-level snapshot fields an opponent's team key must not shadow.
pub const RESERVED_TEAM_KEYS: [&str; 4] = ["export_date", "league_name", "my_team", "draft_picks"];

/// Knobs for a single snapshot build.
#[derive(Debug, Clone)]
pub struct SnapshotOptions {
    /// Drop picks for `current_year`, whose draft may be in progress.
    pub omit_current_year_picks: bool,
    pub current_year: Season,
    /// Fail on a pick whose roster is not in the league instead of skipping it.
    pub strict_picks: bool,
    pub export_date: String,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            omit_current_year_picks: true,
            current_year: Season::current(),
            strict_picks: false,
            export_date: Local::now().format(EXPORT_DATE_FORMAT).to_string(),
        }
    }
}

/// Reduce a directory entry to the output shape; unknown IDs get the placeholder.
pub fn reduce_player(directory: &PlayerDirectory, id: &PlayerId) -> MinimalPlayer {
    directory
        .get(id)
        .map(MinimalPlayer::from)
        .unwrap_or_else(MinimalPlayer::placeholder)
}

/// Roster → owner → display name lookups.
pub struct OwnerIndex<'a> {
    names: HashMap<&'a UserId, &'a str>,
    rosters: HashMap<RosterId, &'a Roster>,
}

impl<'a> OwnerIndex<'a> {
    pub fn new(users: &'a [User], rosters: &'a [Roster]) -> Self {
        let names = users
            .iter()
            .filter_map(|u| u.display_name.as_deref().map(|name| (&u.user_id, name)))
            .collect();
        let rosters = rosters.iter().map(|r| (r.roster_id, r)).collect();
        Self { names, rosters }
    }

    /// Display name of a roster's owner, or `"Unknown"` for orphaned teams.
    pub fn owner_name(&self, roster: &Roster) -> String {
        roster
            .owner_id
            .as_ref()
            .and_then(|id| self.names.get(id))
            .copied()
            .unwrap_or(UNKNOWN)
            .to_string()
    }

    /// Owner display name for a roster ID; the roster itself must exist.
    pub fn roster_owner_name(&self, roster_id: RosterId) -> Result<String> {
        self.rosters
            .get(&roster_id)
            .map(|r| self.owner_name(r))
            .ok_or(SleeperError::UnknownRoster { roster_id })
    }
}

/// Key for an opponent's team in the flattened snapshot. Names that collide
/// with a top-level field get a `_team` suffix.
pub fn team_key(owner_name: String) -> String {
    if RESERVED_TEAM_KEYS.contains(&owner_name.as_str()) {
        let key = format!("{}_team", owner_name);
        warn!(owner = %owner_name, key = %key, "Owner name shadows a snapshot field, renaming");
        key
    } else {
        owner_name
    }
}

/// Group traded picks under their current owner's display name.
///
/// Every roster's owner gets an entry, even with no picks. Lists are sorted by
/// `(season, round)`; the sort is stable so duplicates keep input order.
pub fn resolve_draft_picks(
    users: &[User],
    rosters: &[Roster],
    picks: &[TradedPick],
    options: &SnapshotOptions,
) -> Result<BTreeMap<String, Vec<DraftPick>>> {
    let index = OwnerIndex::new(users, rosters);
    let mut by_owner: BTreeMap<String, Vec<DraftPick>> = rosters
        .iter()
        .map(|r| (index.owner_name(r), Vec::new()))
        .collect();

    for pick in picks {
        if options.omit_current_year_picks && pick.season == options.current_year {
            continue;
        }

        let resolved = index
            .roster_owner_name(pick.owner_id)
            .and_then(|owner| {
                index
                    .roster_owner_name(pick.roster_id)
                    .map(|original| (owner, original))
            });

        let (owner, original_owner) = match resolved {
            Ok(names) => names,
            Err(e) if !options.strict_picks => {
                warn!(
                    season = %pick.season,
                    round = pick.round,
                    error = %e,
                    "Skipping traded pick"
                );
                continue;
            }
            Err(e) => return Err(e),
        };

        by_owner.entry(owner).or_default().push(DraftPick {
            season: pick.season,
            round: pick.round,
            original_owner,
        });
    }

    for list in by_owner.values_mut() {
        list.sort_by_key(|p| (p.season, p.round));
    }

    Ok(by_owner)
}

/// Build the league snapshot as seen by `user_id`.
///
/// Fails with `OwnerNotFound` when `user_id` owns no roster.
pub fn build_snapshot(
    data: &LeagueData,
    user_id: &UserId,
    options: &SnapshotOptions,
) -> Result<LeagueSnapshot> {
    let is_mine = |r: &&Roster| r.owner_id.as_ref() == Some(user_id);

    if !data.rosters.iter().any(|r| is_mine(&r)) {
        return Err(SleeperError::OwnerNotFound {
            user_id: user_id.to_string(),
        });
    }

    let reduce_all = |r: &Roster| -> Vec<MinimalPlayer> {
        r.players
            .iter()
            .map(|id| reduce_player(&data.players, id))
            .collect()
    };

    let my_team = data
        .rosters
        .iter()
        .filter(is_mine)
        .flat_map(reduce_all)
        .collect();

    let index = OwnerIndex::new(&data.users, &data.rosters);
    let mut teams: BTreeMap<String, Vec<MinimalPlayer>> = BTreeMap::new();
    for roster in data.rosters.iter().filter(|r| !is_mine(r)) {
        // Orphaned teams all land under "Unknown"; keep every player.
        teams
            .entry(team_key(index.owner_name(roster)))
            .or_default()
            .extend(reduce_all(roster));
    }

    let draft_picks =
        resolve_draft_picks(&data.users, &data.rosters, &data.traded_picks, options)?;

    Ok(LeagueSnapshot {
        export_date: options.export_date.clone(),
        league_name: data.league.name.clone(),
        my_team,
        teams,
        draft_picks,
    })
}
