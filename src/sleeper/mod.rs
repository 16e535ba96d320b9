//! Sleeper league API: HTTP client and payload types.

pub mod http;
pub mod types;

pub use http::{SleeperClient, SLEEPER_BASE_URL};
pub use types::{League, LeagueData, Player, PlayerDirectory, Roster, TradedPick, User};
