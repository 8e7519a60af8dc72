mod commands;
mod config;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use appcat::{SyncOutcome, TrackedFile};
use appcat_github::GitHubArtifactClient;
use appcat_store::CatalogStore;
use appcat_tui::{SyncFn, SyncReport};
use clap::{Parser, Subcommand};

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "appcat")]
#[command(about = "Browse and sync a catalog of installable software")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Refresh the local catalog database from its remote source
    Sync,
    /// List catalog packages
    List {
        /// Filter by category
        #[arg(long)]
        category: Option<String>,
    },
    /// Search packages by name or category
    Search {
        /// Search query
        query: String,
    },
    /// Show local catalog state (paths, revision, package count)
    Status,
    /// Launch the interactive catalog browser
    Tui,
}

fn data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("could not determine data directory")?;
    let dir = base.join("appcat");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create data directory: {}", dir.display()))?;
    Ok(dir)
}

/// Local landing spot for the synced database: the tracked path's file name
/// under the data directory.
fn artifact_path(config: &AppConfig) -> Result<PathBuf> {
    let file_name = Path::new(&config.catalog.path)
        .file_name()
        .map(|n| n.to_owned())
        .unwrap_or_else(|| "catalog.db".into());
    Ok(data_dir()?.join(file_name))
}

fn tracked_file(config: &AppConfig) -> TrackedFile {
    TrackedFile::new(
        &config.catalog.owner,
        &config.catalog.repo,
        &config.catalog.path,
    )
}

fn github_token() -> Option<String> {
    std::env::var("GITHUB_TOKEN").ok()
}

fn build_client() -> GitHubArtifactClient {
    GitHubArtifactClient::new(github_token(), None)
}

/// Open the local catalog, running an initial sync when none exists yet.
async fn ensure_catalog(config: &AppConfig) -> Result<CatalogStore> {
    let artifact = artifact_path(config)?;

    if !artifact.exists() {
        eprintln!("No local catalog. Running initial sync...");
        commands::sync::run(&build_client(), &tracked_file(config), &artifact).await?;
    }

    CatalogStore::open_read_only(&artifact).map_err(|e| anyhow::anyhow!("{e}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config::load_config()?;

    match cli.command {
        Command::Sync => {
            let artifact = artifact_path(&config)?;
            commands::sync::run(&build_client(), &tracked_file(&config), &artifact).await
        }
        Command::List { category } => {
            let store = ensure_catalog(&config).await?;
            commands::list::run(&store, category.as_deref())
        }
        Command::Search { query } => {
            let store = ensure_catalog(&config).await?;
            commands::search::run(&store, &query)
        }
        Command::Status => {
            let artifact = artifact_path(&config)?;
            commands::status::run(&tracked_file(&config), &artifact)
        }
        Command::Tui => {
            // Make sure a catalog exists before entering the browser.
            ensure_catalog(&config).await?;

            let artifact = artifact_path(&config)?;
            let tracked = tracked_file(&config);
            let client = Arc::new(build_client());

            let sync_artifact = artifact.clone();
            let on_sync: SyncFn = Box::new(move || {
                let client = Arc::clone(&client);
                let tracked = tracked.clone();
                let artifact = sync_artifact.clone();
                Box::pin(async move {
                    let sidecar = TrackedFile::default_sidecar_path(&artifact);
                    let outcome =
                        appcat::sync_catalog(client.as_ref(), &tracked, &artifact, &sidecar)
                            .await
                            .map_err(|e| anyhow::anyhow!("{e}"))?;

                    Ok(match outcome {
                        SyncOutcome::Updated { revision } => SyncReport {
                            message: format!("Catalog updated to revision {revision}"),
                            updated: true,
                        },
                        SyncOutcome::UpToDate => SyncReport {
                            message: "Catalog is already up to date".into(),
                            updated: false,
                        },
                    })
                })
            });

            appcat_tui::run(artifact, on_sync).await
        }
    }
}
