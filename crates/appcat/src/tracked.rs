use std::fmt;
use std::path::{Path, PathBuf};

/// A single remote artifact kept in sync with its hosted counterpart,
/// identified by owner/repo/path. Immutable for the lifetime of a sync
/// operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedFile {
    pub owner: String,
    pub repo: String,
    pub path: String,
}

impl TrackedFile {
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            path: path.into(),
        }
    }

    /// Default sidecar location for an artifact: the artifact path with an
    /// extra `.sha` extension appended (`sql.db` -> `sql.db.sha`).
    pub fn default_sidecar_path(artifact_path: &Path) -> PathBuf {
        let mut os = artifact_path.as_os_str().to_owned();
        os.push(".sha");
        PathBuf::from(os)
    }
}

impl fmt::Display for TrackedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.owner, self.repo, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidecar_path_appends_sha_extension() {
        let sidecar = TrackedFile::default_sidecar_path(Path::new("/data/sql.db"));
        assert_eq!(sidecar, PathBuf::from("/data/sql.db.sha"));
    }

    #[test]
    fn display_joins_segments() {
        let tracked = TrackedFile::new("acme", "data", "sql.db");
        assert_eq!(tracked.to_string(), "acme/data/sql.db");
    }
}
