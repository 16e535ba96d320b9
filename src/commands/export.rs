//! Export command: fetch the league, write the snapshot, then the waiver list.

use chrono::{Local, NaiveDateTime};
use std::path::PathBuf;
use tracing::info;

use crate::{
    core::{write_compact_json, OutputPaths, DEFAULT_OUTPUT_DIR},
    sleeper::{types::LeagueData, SleeperClient, SLEEPER_BASE_URL},
    snapshot::{build_snapshot, SnapshotOptions, EXPORT_DATE_FORMAT},
    waivers::{rank_waivers, OwnedPlayers, WAIVER_LIMIT},
    LeagueId, Result, Season, UserId,
};

/// Parameters for the export command
#[derive(Debug, Clone)]
pub struct ExportParams {
    pub league_id: LeagueId,
    pub user_id: UserId,
    pub output_dir: PathBuf,
    pub include_current_year_picks: bool,
    pub strict_picks: bool,
    pub limit: usize,
    pub base_url: String,
}

impl ExportParams {
    pub fn new(league_id: LeagueId, user_id: UserId) -> Self {
        Self {
            league_id,
            user_id,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            include_current_year_picks: false,
            strict_picks: false,
            limit: WAIVER_LIMIT,
            base_url: SLEEPER_BASE_URL.to_string(),
        }
    }
}

/// What one export produced.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub paths: OutputPaths,
    pub teams: usize,
    pub waiver_count: usize,
}

/// Handle the export command
pub async fn handle_export(params: ExportParams) -> Result<ExportSummary> {
    let now = Local::now().naive_local();
    let client = SleeperClient::with_base_url(params.base_url.as_str())?;

    info!(league_id = %params.league_id, "Fetching league data from Sleeper...");
    // tarpaulin::skip - HTTP API calls, covered by the mock-server integration test
    let data = client.fetch_league_data(&params.league_id).await?;

    let summary = export_league_data(&data, &params, now)?;

    println!("League snapshot saved to {}", summary.paths.snapshot.display()); // tarpaulin::skip
    println!("Top waiver targets saved to {}", summary.paths.waivers.display()); // tarpaulin::skip

    Ok(summary)
}

/// Transform already-fetched league data and write both files.
///
/// The snapshot is written before ranking starts, so it stays on disk if the
/// waiver step fails.
pub fn export_league_data(
    data: &LeagueData,
    params: &ExportParams,
    now: NaiveDateTime,
) -> Result<ExportSummary> {
    let options = SnapshotOptions {
        omit_current_year_picks: !params.include_current_year_picks,
        current_year: Season::of(&now),
        strict_picks: params.strict_picks,
        export_date: now.format(EXPORT_DATE_FORMAT).to_string(),
    };
    let paths = OutputPaths::new(&params.output_dir, now);

    let snapshot = build_snapshot(data, &params.user_id, &options)?;
    write_compact_json(&paths.snapshot, &snapshot)?;
    info!(
        path = %paths.snapshot.display(),
        my_team = snapshot.my_team.len(),
        other_teams = snapshot.teams.len(),
        "✓ League snapshot written"
    );

    let owned = OwnedPlayers::from_rosters(&data.rosters, &data.players);
    let waivers = rank_waivers(&data.players, &owned, params.limit);
    write_compact_json(&paths.waivers, &waivers)?;
    info!(
        path = %paths.waivers.display(),
        owned = owned.len(),
        candidates = waivers.len(),
        "✓ Waiver targets written"
    );

    Ok(ExportSummary {
        teams: snapshot.teams.len() + 1,
        waiver_count: waivers.len(),
        paths,
    })
}
