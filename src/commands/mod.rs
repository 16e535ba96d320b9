//! Command implementations for the Sleeper league exporter

pub mod export;

use std::{fmt::Display, str::FromStr};

use crate::{error::SleeperError, LeagueId, Result, UserId, LEAGUE_ID_ENV_VAR, USER_ID_ENV_VAR};


/// CLI value first, then the environment variable. Blank values count as unset.
fn value_or_env<T: FromStr + Display>(value: Option<T>, env_var: &str) -> Option<T> {
    value
        .filter(|v| !v.to_string().trim().is_empty())
        .or_else(|| {
            std::env::var(env_var)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .and_then(|s| s.parse::<T>().ok())
        })
}

/// Resolve league ID from option or `SLEEPER_LEAGUE_ID`
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    value_or_env(league_id, LEAGUE_ID_ENV_VAR).ok_or_else(|| SleeperError::MissingLeagueId {
        env_var: LEAGUE_ID_ENV_VAR.to_string(),
    })
}

/// Resolve user ID from option or `SLEEPER_USER_ID`
pub fn resolve_user_id(user_id: Option<UserId>) -> Result<UserId> {
    value_or_env(user_id, USER_ID_ENV_VAR).ok_or_else(|| SleeperError::MissingUserId {
        env_var: USER_ID_ENV_VAR.to_string(),
    })
}
