//! Fantasy football position types and utilities.

use crate::error::SleeperError;
use std::fmt;
use std::str::FromStr;

/// Player positions as reported by the Sleeper player directory.
///
/// Sleeper also lists offensive linemen, punters and a handful of other
/// positions that are never rostered in fantasy leagues; those do not parse
/// into a `Position` and are handled by callers as "other".
///
/// # Examples
///
/// ```rust
/// use sleeper_ffl::Position;
///
/// let rb: Position = "RB".parse().unwrap();
/// assert_eq!(rb, Position::RB);
/// assert_eq!(rb.waiver_weight(), 2);
/// assert!(Position::K.is_waiver_excluded());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DEF,
    /// Long snapper.
    LS,
    DL,
    LB,
    DB,
}

impl Position {
    /// Weight used by the waiver ranker: skill positions first, then QB.
    pub fn waiver_weight(&self) -> u32 {
        match self {
            Position::RB | Position::WR | Position::TE => 2,
            Position::QB => 1,
            _ => 0,
        }
    }

    /// Kickers, team defenses and long snappers are never waiver candidates.
    pub fn is_waiver_excluded(&self) -> bool {
        matches!(self, Position::K | Position::DEF | Position::LS)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DEF => "DEF",
            Position::LS => "LS",
            Position::DL => "DL",
            Position::LB => "LB",
            Position::DB => "DB",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = SleeperError;

    /// Parsing is exact: Sleeper always sends upper-case abbreviations, and
    /// `"k"` is not treated as a kicker.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" => Ok(Position::K),
            "DEF" => Ok(Position::DEF),
            "LS" => Ok(Position::LS),
            "DL" => Ok(Position::DL),
            "LB" => Ok(Position::LB),
            "DB" => Ok(Position::DB),
            _ => Err(SleeperError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
