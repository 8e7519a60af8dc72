use std::path::Path;

use anyhow::Result;
use appcat::TrackedFile;
use appcat_store::CatalogStore;

/// Print the local catalog state: remote coordinates, file locations, the
/// last-synced revision, and the package count when the database opens.
pub fn run(tracked: &TrackedFile, artifact_path: &Path) -> Result<()> {
    let sidecar = TrackedFile::default_sidecar_path(artifact_path);

    println!("Remote:   {tracked}");
    println!("Local:    {}", artifact_path.display());

    match appcat::read_revision(&sidecar)? {
        Some(revision) => println!("Revision: {revision}"),
        None => println!("Revision: <never synced>"),
    }

    match CatalogStore::open_read_only(artifact_path) {
        Ok(store) => {
            let count = store.item_count().map_err(|e| anyhow::anyhow!("{e}"))?;
            println!("Packages: {count}");
        }
        Err(e) => println!("Packages: unavailable ({e})"),
    }

    Ok(())
}
