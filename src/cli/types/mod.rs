//! Type-safe wrappers and enums for Sleeper league data.

pub mod ids;
pub mod position;
pub mod time;

pub use ids::{LeagueId, PlayerId, RosterId, UserId};
pub use position::Position;
pub use time::Season;
