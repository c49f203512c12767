//! Unix implementations of platform helpers.

use std::fs::{self, DirBuilder, File, OpenOptions};
use std::io;
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt, PermissionsExt};
use std::path::Path;

/// Mode for directories created while mirroring (owner rwx).
const MIRROR_DIR_MODE: u32 = 0o700;
/// Mode for files created while mirroring (rw for all, umask applies).
const MIRROR_FILE_MODE: u32 = 0o666;

/// Open log file for appending; set 0600 only when creating a new file.
/// Existing files keep whatever mode an administrator gave them.
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let existed = path.exists();
    let f = OpenOptions::new()
        .create(true)
        .append(true)
        .mode(0o600)
        .open(path)?;
    if !existed {
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }
    Ok(f)
}

/// `mkdir -p` with owner-only mode on every component it creates.
/// Components that already exist are left alone.
pub fn create_dir_all_private(path: &Path) -> io::Result<()> {
    DirBuilder::new()
        .recursive(true)
        .mode(MIRROR_DIR_MODE)
        .create(path)
}

/// Create or truncate a mirrored file for writing.
pub fn open_copy_destination(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(MIRROR_FILE_MODE)
        .open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn preserve_existing_log_file_mode() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.txt");
        fs::write(&path, b"hello").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();
        let _f = open_log_file_secure_append(&path).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640, "existing permissions should be preserved");
    }

    #[test]
    fn new_log_file_gets_0600() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("new_log.txt");
        let _f = open_log_file_secure_append(&path).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600, "newly created log file should be 0600");
    }

    #[test]
    fn private_dirs_are_owner_only_and_idempotent() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        create_dir_all_private(&nested).unwrap();
        create_dir_all_private(&nested).unwrap();
        for p in [dir.path().join("a"), dir.path().join("a/b"), nested] {
            let mode = fs::metadata(&p).unwrap().permissions().mode() & 0o777;
            // umask can only remove bits, never add group/other ones.
            assert_eq!(mode & 0o077, 0, "{} has mode {:o}", p.display(), mode);
        }
    }

    #[test]
    fn copy_destination_truncates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("f");
        fs::write(&path, b"0123456789").unwrap();
        drop(open_copy_destination(&path).unwrap());
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    }
}
