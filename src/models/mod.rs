//! Serializable output shapes.

pub mod output;

pub use output::{DraftPick, LeagueSnapshot, MinimalPlayer, UNKNOWN};
