//! Move = mirror, then delete the source only if the mirror fully succeeded.
//! Never renames, even on the same filesystem.

use anyhow::Result;
use std::path::Path;
use tracing::info;

use crate::config::Config;

use super::mirror::{MirrorReport, mirror};
use super::remove::remove_tree;

/// Move `source_root` to `destination_root/basename(source_root)`.
///
/// If the copy fails the source is left untouched. If the copy succeeds but
/// the delete fails, both trees exist (possibly with the source partially
/// removed).
pub fn move_tree(config: &Config, source_root: &Path, destination_root: &Path) -> Result<MirrorReport> {
    let report = mirror(config, source_root, destination_root, None)?;

    if config.dry_run {
        info!(src = %source_root.display(), "dry-run: would remove source after copy");
        return Ok(report);
    }

    remove_tree(config, source_root)?;
    info!(
        src = %source_root.display(),
        dest = %report.destination.display(),
        "Moved directory tree"
    );
    Ok(report)
}
