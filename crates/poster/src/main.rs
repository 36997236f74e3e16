mod run;
mod sentence;
mod social;

use std::path::PathBuf;

use clap::Parser;
use lakefeed_core::infra::{
    config::ConfigLoader,
    database::create_repo,
    logging::{init_logging, BootError},
    random::seeded_rng,
};
use tracing::{error, info};

use run::{post_once, Outcome};
use social::{StatusPublisher, TwitterClient};

/// Workspace-root-relative, matching the server's `SERVER_CONFIG_PATH` default.
const DEFAULT_CONFIG_PATH: &str = "crates/poster/res/config.toml";

#[derive(Parser)]
#[command(author, version, about = "Post a random lake fact as a status update")]
struct Args {
    /// Path to config.toml, relative to the workspace root.
    #[arg(long, env = "POSTER_CONFIG_PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Compose and print the status without publishing it.
    #[arg(long)]
    dry_run: bool,
    /// Seed for lake and attribute selection; overrides `[poster] seed`.
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), BootError> {
    let args = Args::parse();

    let cfg = ConfigLoader::load(&args.config)
        .await
        .map_err(|e| BootError::Fatal(e.to_string()))?;
    init_logging(&cfg.log_level, "lakefeed_poster");
    info!(app = %cfg.name, dialect = ?cfg.dialect, dry_run = args.dry_run, "poster starting");

    let repo = create_repo(&cfg)
        .await
        .map_err(|e| BootError::Fatal(e.to_string()))?;

    let publisher = if args.dry_run {
        None
    } else {
        Some(TwitterClient::new(&cfg.social).map_err(|e| BootError::Fatal(e.to_string()))?)
    };

    let mut rng = seeded_rng(args.seed.or(cfg.seed));

    let outcome = post_once(
        repo.as_ref(),
        publisher.as_ref().map(|p| p as &dyn StatusPublisher),
        &mut rng,
    )
    .await;

    match outcome {
        Ok(Outcome::DryRun(status)) => {
            println!("{status}");
            Ok(())
        }
        Ok(Outcome::Published(_)) => Ok(()),
        Err(e) => {
            error!(error = %e, "poster failed");
            Err(BootError::Fatal(e.to_string()))
        }
    }
}
