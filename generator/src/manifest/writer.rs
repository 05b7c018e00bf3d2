//! Atomic replacement of the output manifest.

use std::fs::{File, Permissions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The destination could not be written.
#[derive(Debug, Error)]
#[error("failed to write manifest to {}: {source}", path.display())]
pub struct OutputError {
    /// Destination path.
    pub path: PathBuf,
    /// The underlying I/O error.
    #[source]
    pub source: std::io::Error,
}

/// Mode given to a manifest that did not exist before.
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// Replace the file at `path` with `contents`.
///
/// The bytes go to a temporary file beside `path` which is then renamed over
/// it, so readers see either the old file or the complete new one. The
/// parent directory must already exist. An existing destination keeps its
/// permissions; a read-only one is refused rather than replaced.
///
/// # Errors
///
/// Returns [`OutputError`] if the destination is read-only, or if the
/// temporary file cannot be created, written, or moved into place.
pub fn write_atomically(path: &Path, contents: &str) -> Result<(), OutputError> {
    let wrap = |source: std::io::Error| OutputError {
        path: path.to_owned(),
        source,
    };
    let existing = existing_permissions(path).map_err(wrap)?;
    if existing.as_ref().is_some_and(Permissions::readonly) {
        return Err(wrap(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "destination is read-only",
        )));
    }
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut staged = tempfile::NamedTempFile::new_in(parent).map_err(wrap)?;
    staged.write_all(contents.as_bytes()).map_err(wrap)?;
    let file = staged.as_file();
    existing
        .map_or_else(
            || set_new_file_mode(file),
            |permissions| file.set_permissions(permissions),
        )
        .map_err(wrap)?;
    file.sync_all().map_err(wrap)?;
    staged.persist(path).map_err(|e| wrap(e.error))?;
    Ok(())
}

/// Permissions of the current destination, or `None` if it does not exist.
fn existing_permissions(path: &Path) -> io::Result<Option<Permissions>> {
    match std::fs::metadata(path) {
        Ok(metadata) => Ok(Some(metadata.permissions())),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

#[cfg(unix)]
fn set_new_file_mode(file: &File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(Permissions::from_mode(NEW_FILE_MODE))
}

#[cfg(not(unix))]
fn set_new_file_mode(_file: &File) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_new_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("module.yml");
        write_atomically(&path, "blobs: []\n").expect("write succeeds");
        assert_eq!(
            std::fs::read_to_string(&path).expect("read back"),
            "blobs: []\n"
        );
    }

    #[test]
    fn replaces_existing_content_entirely() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("module.yml");
        std::fs::write(&path, "a much longer previous manifest body\n").expect("seed");
        write_atomically(&path, "short\n").expect("write succeeds");
        assert_eq!(std::fs::read_to_string(&path).expect("read back"), "short\n");
    }

    #[test]
    fn missing_parent_directory_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("zephyr").join("module.yml");
        let err = write_atomically(&path, "x").expect_err("parent is absent");
        assert_eq!(err.path, path);
        assert!(!path.exists());
    }

    #[test]
    fn leaves_no_stray_files_behind() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("module.yml");
        write_atomically(&path, "x").expect("write succeeds");
        let entries = std::fs::read_dir(dir.path()).expect("list dir").count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn read_only_destination_is_refused_and_kept() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("module.yml");
        std::fs::write(&path, "previous\n").expect("seed");
        let mut permissions = std::fs::metadata(&path).expect("metadata").permissions();
        permissions.set_readonly(true);
        std::fs::set_permissions(&path, permissions).expect("make read-only");

        let err = write_atomically(&path, "new\n").expect_err("read-only destination");
        assert_eq!(err.path, path);
        assert_eq!(err.source.kind(), io::ErrorKind::PermissionDenied);
        assert_eq!(std::fs::read_to_string(&path).expect("read back"), "previous\n");
        let entries = std::fs::read_dir(dir.path()).expect("list dir").count();
        assert_eq!(entries, 1);
    }

    #[cfg(unix)]
    fn mode_of(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        std::fs::metadata(path).expect("metadata").permissions().mode() & 0o777
    }

    #[cfg(unix)]
    #[test]
    fn existing_destination_keeps_its_mode() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("module.yml");
        std::fs::write(&path, "previous\n").expect("seed");
        std::fs::set_permissions(&path, Permissions::from_mode(0o664)).expect("chmod");

        write_atomically(&path, "new\n").expect("write succeeds");
        assert_eq!(mode_of(&path), 0o664);
    }

    #[cfg(unix)]
    #[test]
    fn new_destination_is_world_readable() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("module.yml");
        write_atomically(&path, "new\n").expect("write succeeds");
        assert_eq!(mode_of(&path), NEW_FILE_MODE);
    }
}
