//! Waiver-wire ranking of players no roster owns.

use std::collections::HashSet;

use crate::{
    models::MinimalPlayer,
    sleeper::types::{Player, PlayerDirectory, Roster},
    PlayerId, Position,
};


/// Default number of recommendations written.
pub const WAIVER_LIMIT: usize = 30;

/// Status string that earns the active bonus. Compared exactly.
pub const ACTIVE_STATUS: &str = "active";

/// Everything rostered anywhere in the league, by ID and by resolved name.
#[derive(Debug, Default, Clone)]
pub struct OwnedPlayers {
    ids: HashSet<PlayerId>,
    names: HashSet<String>,
}

impl OwnedPlayers {
    /// Collect owned players from every roster, the requesting user's included.
    ///
    /// Names are resolved the same way as in the snapshot, so IDs missing from
    /// the directory contribute `"Unknown"`.
    pub fn from_rosters(rosters: &[Roster], directory: &PlayerDirectory) -> Self {
        let mut owned = Self::default();
        for id in rosters.iter().flat_map(|r| &r.players) {
            let name = directory
                .get(id)
                .map(Player::full_name)
                .unwrap_or_else(|| MinimalPlayer::placeholder().name);
            owned.ids.insert(id.clone());
            owned.names.insert(name);
        }
        owned
    }

    /// A player counts as owned if their ID is rostered or another rostered
    /// player shares their full name.
    pub fn is_owned(&self, id: &PlayerId, player: &Player) -> bool {
        self.ids.contains(id) || self.names.contains(&player.full_name())
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// A ranked free agent; the score is never written out.
#[derive(Debug, Clone, PartialEq)]
pub struct WaiverCandidate {
    pub id: PlayerId,
    pub player: MinimalPlayer,
    pub score: u32,
}

/// Positions that never show up as candidates: empty, K, DEF and LS.
/// Positions the enum doesn't know (OL, P, ...) are still rankable.
pub fn is_rankable(player: &Player) -> bool {
    match player.position.as_deref() {
        None | Some("") => false,
        Some(pos) => !pos
            .parse::<Position>()
            .map(|p| p.is_waiver_excluded())
            .unwrap_or(false),
    }
}

pub fn age_weight(age: Option<u16>) -> u32 {
    match age {
        None => 0,
        Some(a) if a < 25 => 2,
        Some(a) if a <= 28 => 1,
        Some(_) => 0,
    }
}

/// `position*10 + active*5 + age*3`
pub fn waiver_score(player: &Player) -> u32 {
    let position = player
        .position
        .as_deref()
        .and_then(|p| p.parse::<Position>().ok())
        .map(|p| p.waiver_weight())
        .unwrap_or(0);
    let status = u32::from(player.status.as_deref() == Some(ACTIVE_STATUS));

    position * 10 + status * 5 + age_weight(player.age) * 3
}

/// All unowned, rankable players, best first. Ties keep directory order.
pub fn waiver_candidates(directory: &PlayerDirectory, owned: &OwnedPlayers) -> Vec<WaiverCandidate> {
    let mut candidates: Vec<WaiverCandidate> = directory
        .iter()
        .filter(|(id, p)| !owned.is_owned(id, p) && is_rankable(p))
        .map(|(id, p)| WaiverCandidate {
            id: id.clone(),
            player: MinimalPlayer::from(p),
            score: waiver_score(p),
        })
        .collect();

    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates
}

/// Top `limit` waiver targets reduced to the output shape.
pub fn rank_waivers(
    directory: &PlayerDirectory,
    owned: &OwnedPlayers,
    limit: usize,
) -> Vec<MinimalPlayer> {
    waiver_candidates(directory, owned)
        .into_iter()
        .take(limit)
        .map(|c| c.player)
        .collect()
}
