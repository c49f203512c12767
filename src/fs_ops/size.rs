//! Size accumulator: sum of regular file lengths under a root.

use anyhow::Result;
use std::path::Path;
use tracing::info;

use crate::config::Config;
use crate::walk::{COUNT_MAX_OPEN, Entry, EntryKind, Visitor, walk};

#[derive(Debug, Default)]
pub struct SizeAccumulator {
    pub total: u64,
}

impl Visitor for SizeAccumulator {
    fn visit(&mut self, entry: &Entry<'_>) -> Result<()> {
        if entry.kind() == EntryKind::File {
            self.total += entry.file_len();
        }
        Ok(())
    }
}

/// Total bytes of every regular file under `root`. Directories, symlinks and
/// special files contribute nothing.
pub fn total_size(config: &Config, root: &Path) -> Result<u64> {
    let mut acc = SizeAccumulator::default();
    walk(root, &config.walk_options(COUNT_MAX_OPEN), &mut acc)?;
    info!(root = %root.display(), bytes = acc.total, "Summed file sizes");
    Ok(acc.total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn sums_nested_files() {
        let td = tempdir().unwrap();
        fs::create_dir_all(td.path().join("x/y")).unwrap();
        fs::write(td.path().join("a"), vec![0u8; 100]).unwrap();
        fs::write(td.path().join("x/y/b"), vec![0u8; 23]).unwrap();
        assert_eq!(total_size(&Config::default(), td.path()).unwrap(), 123);
    }

    #[test]
    fn only_empty_dirs_sum_to_zero() {
        let td = tempdir().unwrap();
        fs::create_dir_all(td.path().join("x/y")).unwrap();
        assert_eq!(total_size(&Config::default(), td.path()).unwrap(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn symlink_targets_are_not_counted() {
        let td = tempdir().unwrap();
        let outside = tempdir().unwrap();
        let big = outside.path().join("big");
        fs::write(&big, vec![0u8; 4096]).unwrap();
        std::os::unix::fs::symlink(&big, td.path().join("link")).unwrap();
        fs::write(td.path().join("small"), b"abc").unwrap();
        assert_eq!(total_size(&Config::default(), td.path()).unwrap(), 3);
    }
}
