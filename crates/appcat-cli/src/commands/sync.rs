use std::path::Path;

use anyhow::Result;
use appcat::{ArtifactFetcher, SyncOutcome, TrackedFile};

/// Run a sync and print the outcome.
pub async fn run(
    fetcher: &dyn ArtifactFetcher,
    tracked: &TrackedFile,
    artifact_path: &Path,
) -> Result<()> {
    println!("Checking {tracked} for updates...");

    let sidecar = TrackedFile::default_sidecar_path(artifact_path);
    let outcome = appcat::sync_catalog(fetcher, tracked, artifact_path, &sidecar)
        .await
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    match outcome {
        SyncOutcome::Updated { revision } => {
            println!("Catalog updated to revision {revision}.");
        }
        SyncOutcome::UpToDate => {
            println!("Catalog is already up to date.");
        }
    }

    Ok(())
}
