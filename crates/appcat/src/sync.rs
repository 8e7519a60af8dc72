use std::path::Path;

use tracing::{debug, info};

use crate::revision;
use crate::tracked::TrackedFile;

/// Malformed shapes a commit-metadata response can take. Each variant is
/// reported with its own message so logs pinpoint what the remote sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetadataError {
    #[error("commit metadata is not valid JSON: {0}")]
    Json(String),

    #[error("commit metadata is not a JSON array")]
    NotAnArray,

    #[error("commit metadata array is empty")]
    Empty,

    #[error("first commit entry is not an object")]
    EntryNotAnObject,

    #[error("first commit entry has no `sha` field")]
    MissingSha,
}

/// Errors from fetching remote metadata or payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    #[error("metadata error: {0}")]
    Metadata(#[from] MetadataError),
}

/// Fetches commit metadata and raw content for a tracked file.
#[async_trait::async_trait]
pub trait ArtifactFetcher: Send + Sync {
    /// Human-readable label identifying the remote, for logs and UI.
    fn label(&self) -> &str;

    /// Revision identifier of the most recent change to the tracked file.
    /// The identifier is opaque; it is only ever compared for equality.
    async fn latest_revision(&self, file: &TrackedFile) -> Result<String, FetchError>;

    /// Raw bytes of the tracked file's current content.
    async fn payload(&self, file: &TrackedFile) -> Result<Vec<u8>, FetchError>;
}

#[async_trait::async_trait]
impl<T: ArtifactFetcher + ?Sized> ArtifactFetcher for std::sync::Arc<T> {
    fn label(&self) -> &str {
        (**self).label()
    }

    async fn latest_revision(&self, file: &TrackedFile) -> Result<String, FetchError> {
        (**self).latest_revision(file).await
    }

    async fn payload(&self, file: &TrackedFile) -> Result<Vec<u8>, FetchError> {
        (**self).payload(file).await
    }
}

/// Terminal state of a successful sync attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Local and remote revisions match; nothing was touched.
    UpToDate,
    /// A new payload and its revision were persisted.
    Updated { revision: String },
}

/// Errors that abort a sync attempt. Unless the payload write itself
/// failed, the local artifact and sidecar are left exactly as they were.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl SyncError {
    fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Compare the stored revision against the remote and download the payload
/// when they differ.
///
/// The remote revision fetched for the comparison is reused when persisting
/// the sidecar, so an up-to-date check costs exactly one round trip and an
/// update costs two. A missing or empty sidecar is treated as a first run:
/// the payload is downloaded unconditionally.
///
/// The artifact and sidecar are only written after a payload is fully in
/// hand; a failed fetch leaves both files untouched. Once the artifact is
/// written the sidecar write is always attempted, so the pair never ends up
/// with a fresh revision over stale bytes.
pub async fn sync_catalog(
    fetcher: &dyn ArtifactFetcher,
    tracked: &TrackedFile,
    artifact_path: &Path,
    sidecar_path: &Path,
) -> Result<SyncOutcome, SyncError> {
    let local = revision::read_revision(sidecar_path)
        .map_err(|e| SyncError::io(format!("reading {}", sidecar_path.display()), e))?;

    debug!(
        source = fetcher.label(),
        tracked = %tracked,
        local = local.as_deref().unwrap_or("<none>"),
        "checking for catalog update"
    );

    let remote = fetcher.latest_revision(tracked).await?;

    if local.as_deref() == Some(remote.as_str()) {
        info!(tracked = %tracked, revision = %remote, "catalog up to date");
        return Ok(SyncOutcome::UpToDate);
    }

    let payload = fetcher.payload(tracked).await?;

    std::fs::write(artifact_path, &payload)
        .map_err(|e| SyncError::io(format!("writing {}", artifact_path.display()), e))?;
    revision::write_revision(sidecar_path, &remote)
        .map_err(|e| SyncError::io(format!("writing {}", sidecar_path.display()), e))?;

    info!(
        tracked = %tracked,
        revision = %remote,
        bytes = payload.len(),
        "catalog updated"
    );

    Ok(SyncOutcome::Updated { revision: remote })
}
