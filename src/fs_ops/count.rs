//! Counting visitors: regular files and directories below the root.

use anyhow::Result;
use std::path::Path;
use tracing::info;

use crate::config::Config;
use crate::walk::{COUNT_MAX_OPEN, Entry, EntryKind, Visitor, walk};

/// Tallies regular files. Symlinks and special files are not counted.
#[derive(Debug, Default)]
pub struct FileCounter {
    pub count: u64,
}

impl Visitor for FileCounter {
    fn visit(&mut self, entry: &Entry<'_>) -> Result<()> {
        if entry.kind() == EntryKind::File {
            self.count += 1;
        }
        Ok(())
    }
}

/// Tallies directories strictly beneath the walk root.
#[derive(Debug, Default)]
pub struct DirCounter {
    pub count: u64,
}

impl Visitor for DirCounter {
    fn visit(&mut self, entry: &Entry<'_>) -> Result<()> {
        if entry.kind() == EntryKind::Dir && !entry.is_root() {
            self.count += 1;
        }
        Ok(())
    }
}

/// Number of regular files under `root`, recursively.
pub fn count_files(config: &Config, root: &Path) -> Result<u64> {
    let mut counter = FileCounter::default();
    walk(root, &config.walk_options(COUNT_MAX_OPEN), &mut counter)?;
    info!(root = %root.display(), files = counter.count, "Counted files");
    Ok(counter.count)
}

/// Number of directories under `root`, recursively, not counting `root`.
pub fn count_dirs(config: &Config, root: &Path) -> Result<u64> {
    let mut counter = DirCounter::default();
    walk(root, &config.walk_options(COUNT_MAX_OPEN), &mut counter)?;
    info!(root = %root.display(), dirs = counter.count, "Counted directories");
    Ok(counter.count)
}
