//! Season type for Sleeper draft picks.

use crate::error::SleeperError;
use chrono::{Datelike, Local};
use serde::{de::Error, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Season years.
///
/// Sleeper sends seasons as strings (`"2026"`) on some endpoints and as numbers
/// on others; both deserialize into the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Calendar year of `date`.
    pub fn of<D: Datelike>(date: &D) -> Self {
        Self(u16::try_from(date.year()).unwrap_or(u16::MAX))
    }

    /// The local calendar year.
    pub fn current() -> Self {
        Self::of(&Local::now())
    }
}

impl Default for Season {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = SleeperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|e: std::num::ParseIntError| SleeperError::InvalidSeason {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl<'de> Deserialize<'de> for Season {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(u16),
            Str(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Num(n) => Ok(Self(n)),
            Raw::Str(s) => s.parse().map_err(D::Error::custom),
        }
    }
}
