//! Precondition checks run before any traversal starts.

use anyhow::Result;
use std::path::Path;
use tracing::{debug, error};

use crate::errors::TreeError;

/// The source of every operation must exist and be a directory.
pub fn validate_source(path: &Path) -> Result<()> {
    if !path.is_dir() {
        error!(path = %path.display(), exists = path.exists(), "source is not a usable directory");
        return Err(TreeError::SourceInvalid(path.to_path_buf()).into());
    }
    debug!("source directory ok: {}", path.display());
    Ok(())
}

/// Copy and move destinations must already exist as directories; the mirrored
/// tree is created beneath them.
pub fn validate_destination(path: &Path) -> Result<()> {
    if !path.is_dir() {
        error!(path = %path.display(), exists = path.exists(), "destination is not a usable directory");
        return Err(TreeError::DestinationInvalid(path.to_path_buf()).into());
    }
    debug!("destination directory ok: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_source_is_rejected() {
        let td = tempdir().unwrap();
        let err = validate_source(&td.path().join("missing")).unwrap_err();
        assert!(matches!(err.downcast_ref::<TreeError>(), Some(TreeError::SourceInvalid(_))));
    }

    #[test]
    fn file_destination_is_rejected() {
        let td = tempdir().unwrap();
        let f = td.path().join("plain.txt");
        fs::write(&f, b"x").unwrap();
        let err = validate_destination(&f).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TreeError>(),
            Some(TreeError::DestinationInvalid(_))
        ));
    }

    #[test]
    fn existing_directories_pass() {
        let td = tempdir().unwrap();
        validate_source(td.path()).unwrap();
        validate_destination(td.path()).unwrap();
    }
}
