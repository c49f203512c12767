//! Recursive delete: post-order, physical, abort on first failure.

use anyhow::Result;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::config::Config;
use crate::errors::TreeError;
use crate::walk::{Entry, EntryKind, TREE_MAX_OPEN, Visitor, walk};

use super::helpers::describe_io_error;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveReport {
    pub files_removed: u64,
    pub dirs_removed: u64,
}

struct Remover {
    dry_run: bool,
    report: RemoveReport,
}

impl Visitor for Remover {
    fn visit(&mut self, entry: &Entry<'_>) -> Result<()> {
        let path = entry.path();
        let is_dir = entry.kind() == EntryKind::Dir;
        if self.dry_run {
            info!(action = if is_dir { "rmdir" } else { "rm" }, path = %path.display(), "dry-run");
        } else {
            // Symlinks are unlinked, never followed: remove_file on the link itself.
            let res = if is_dir {
                fs::remove_dir(path)
            } else {
                fs::remove_file(path)
            };
            res.map_err(|e| TreeError::RemoveFailed {
                path: path.to_path_buf(),
                context: describe_io_error("remove", path, &e),
            })?;
            debug!(path = %path.display(), "Removed");
        }
        if is_dir {
            self.report.dirs_removed += 1;
        } else {
            self.report.files_removed += 1;
        }
        Ok(())
    }
}

/// Delete `root` and everything beneath it, children before parents.
/// Stops at the first entry that cannot be removed; earlier removals stand.
pub fn remove_tree(config: &Config, root: &Path) -> Result<RemoveReport> {
    let mut remover = Remover {
        dry_run: config.dry_run,
        report: RemoveReport::default(),
    };
    let opts = config.walk_options(TREE_MAX_OPEN).post_order();
    walk(root, &opts, &mut remover)?;
    info!(
        root = %root.display(),
        files = remover.report.files_removed,
        dirs = remover.report.dirs_removed,
        dry_run = config.dry_run,
        "Removed directory tree"
    );
    Ok(remover.report)
}
