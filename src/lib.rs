//! Sleeper Fantasy Football league exporter
//!
//! Fetches a Sleeper league's users, rosters, traded picks and the NFL player
//! directory, then writes two compact JSON files:
//!
//! - **League snapshot**: every roster reduced to `{name, team, position, age, status}`,
//!   plus who owns which future draft picks
//! - **Waiver targets**: the best unowned players by a simple position/status/age score
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sleeper_ffl::{commands::export::{handle_export, ExportParams}, LeagueId, UserId};
//!
//! # async fn example() -> sleeper_ffl::Result<()> {
//! let params = ExportParams::new(LeagueId::new("1048290537318342656"), UserId::new("73012"));
//! let summary = handle_export(params).await?;
//! println!("{}", summary.paths.snapshot.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your league and user IDs (or put them in a `.env` file) to avoid passing
//! them in every command:
//! ```bash
//! export SLEEPER_LEAGUE_ID=1048290537318342656
//! export SLEEPER_USER_ID=73012
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod models;
pub mod sleeper;
pub mod snapshot;
pub mod waivers;

// Re-export commonly used types
pub use cli::types::{LeagueId, PlayerId, Position, RosterId, Season, UserId};
pub use error::{Result, SleeperError};
pub use models::{DraftPick, LeagueSnapshot, MinimalPlayer};

pub const LEAGUE_ID_ENV_VAR: &str = "SLEEPER_LEAGUE_ID";
pub const USER_ID_ENV_VAR: &str = "SLEEPER_USER_ID";
