//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{LeagueId, UserId};

use crate::{core::DEFAULT_OUTPUT_DIR, sleeper::SLEEPER_BASE_URL, waivers::WAIVER_LIMIT};

/// Arguments for `export`
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// League ID (or set `SLEEPER_LEAGUE_ID` env var).
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,

    /// Your Sleeper user ID (or set `SLEEPER_USER_ID` env var).
    #[clap(long, short)]
    pub user_id: Option<UserId>,

    /// Directory the timestamped JSON files are written to (created if missing).
    #[clap(long, short, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Keep traded picks for the current season (omitted by default while the
    /// draft may be in progress).
    #[clap(long)]
    pub include_current_year_picks: bool,

    /// Abort if a traded pick references a roster that is not in the league,
    /// instead of skipping it with a warning.
    #[clap(long)]
    pub strict_picks: bool,

    /// Number of waiver targets to write.
    #[clap(long, default_value_t = WAIVER_LIMIT)]
    pub limit: usize,

    /// Sleeper API base URL.
    #[clap(long, hide = true, default_value = SLEEPER_BASE_URL)]
    pub base_url: String,
}

#[derive(Debug, Parser)]
#[clap(name = "sleeper-ffl", about = "Sleeper Fantasy Football league exporter")]
pub struct Sleeper {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write a league snapshot and the top waiver targets as timestamped JSON.
    ///
    /// Fetches users, rosters, traded picks, league metadata and the full NFL
    /// player directory from Sleeper on every run.
    Export(ExportArgs),
}
