use std::fs;
use std::io;
use std::path::Path;

/// Read the last-known revision identifier from a sidecar file.
///
/// A missing sidecar or an empty first line means "no prior revision" and
/// is reported as `None`, not an error. Only the first line is consulted.
pub fn read_revision(path: &Path) -> io::Result<Option<String>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };

    let first_line = contents.lines().next().unwrap_or("").trim();
    if first_line.is_empty() {
        Ok(None)
    } else {
        Ok(Some(first_line.to_owned()))
    }
}

/// Overwrite the sidecar with the identifier as its entire content.
pub fn write_revision(path: &Path, revision: &str) -> io::Result<()> {
    fs::write(path, revision)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sidecar_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sql.db.sha");

        assert_eq!(read_revision(&path).unwrap(), None);
    }

    #[test]
    fn empty_sidecar_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sql.db.sha");
        fs::write(&path, "").unwrap();

        assert_eq!(read_revision(&path).unwrap(), None);
    }

    #[test]
    fn blank_first_line_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sql.db.sha");
        fs::write(&path, "\nabc123").unwrap();

        assert_eq!(read_revision(&path).unwrap(), None);
    }

    #[test]
    fn reads_first_line_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sql.db.sha");
        fs::write(&path, "abc123\ntrailing junk").unwrap();

        assert_eq!(read_revision(&path).unwrap(), Some("abc123".to_owned()));
    }

    #[test]
    fn write_replaces_entire_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sql.db.sha");

        write_revision(&path, "abc123").unwrap();
        write_revision(&path, "def456").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "def456");
    }

    #[test]
    fn roundtrip_has_no_trailing_structure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sql.db.sha");

        write_revision(&path, "abc123").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "abc123");
        assert_eq!(read_revision(&path).unwrap(), Some("abc123".to_owned()));
    }
}
