//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use sleeper_ffl::{
    cli::{Commands, Sleeper},
    commands::{
        export::{handle_export, ExportParams},
        resolve_league_id, resolve_user_id,
    },
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let app = Sleeper::parse();

    match app.command {
        Commands::Export(args) => {
            // Both IDs are required before any request goes out.
            let league_id = resolve_league_id(args.league_id).context("configuration")?;
            let user_id = resolve_user_id(args.user_id).context("configuration")?;

            handle_export(ExportParams {
                league_id,
                user_id,
                output_dir: args.output_dir,
                include_current_year_picks: args.include_current_year_picks,
                strict_picks: args.strict_picks,
                limit: args.limit,
                base_url: args.base_url,
            })
            .await
            .context("export failed")?;
        }
    }

    Ok(())
}
