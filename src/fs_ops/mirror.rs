//! Mirror a directory tree under a destination.
//!
//! `mirror(cfg, "/data/photos", "/backup", ext)` recreates `/data/photos` as
//! `/backup/photos`: every directory is created (owner-only mode) and every
//! regular file copied byte for byte, except files matched by the optional
//! exclusion. Symlinks and special files are skipped, and a source root that
//! is itself a symlink is refused. The first failure aborts the walk and
//! whatever was already written stays on disk.

use anyhow::{Result, anyhow};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::Config;
use crate::errors::TreeError;
use crate::platform::create_dir_all_private;
use crate::walk::{Entry, EntryKind, TREE_MAX_OPEN, Visitor, walk};

use super::helpers::{describe_io_error, io_error_with_help};
use super::io_copy::copy_truncating;

/// The only extensions an exclusion may name.
pub const EXCLUDABLE_EXTENSIONS: [&str; 3] = [".pdf", ".txt", ".c"];

/// How an excluded extension is compared to a file path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Matching {
    /// The extension may appear anywhere in the full path (`a.txt.bak`,
    /// `notes.txtfiles/x` both match `.txt`).
    #[default]
    Substring,
    /// The file name must end with the extension.
    Suffix,
}

/// A single excluded extension. Only validated when the first regular file
/// is reached, so an unsupported value still lets the directories visited
/// before it be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclusion {
    extension: String,
    matching: Matching,
}

impl Exclusion {
    pub fn new(extension: impl Into<String>, matching: Matching) -> Self {
        Self {
            extension: extension.into(),
            matching,
        }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn is_supported(&self) -> bool {
        EXCLUDABLE_EXTENSIONS.contains(&self.extension.as_str())
    }

    pub fn check(&self) -> Result<(), TreeError> {
        if self.is_supported() {
            Ok(())
        } else {
            Err(TreeError::UnsupportedExclusion(self.extension.clone()))
        }
    }

    /// True when `path` should not be copied.
    pub fn excludes(&self, path: &Path) -> bool {
        match self.matching {
            Matching::Substring => path.to_string_lossy().contains(self.extension.as_str()),
            Matching::Suffix => path
                .file_name()
                .is_some_and(|n| n.to_string_lossy().ends_with(self.extension.as_str())),
        }
    }
}

/// What a mirror did (or, on a dry run, would have done).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MirrorReport {
    /// `destination_root/basename(source_root)`
    pub destination: PathBuf,
    /// Directories that did not exist before (already present ones are reused).
    pub dirs_created: u64,
    pub files_copied: u64,
    pub files_skipped: u64,
    pub bytes_copied: u64,
}

struct Mirror<'a> {
    source_root: &'a Path,
    exclusion: Option<&'a Exclusion>,
    dry_run: bool,
    report: MirrorReport,
}

impl Mirror<'_> {
    fn destination_for(&self, path: &Path) -> Result<PathBuf> {
        let rel = path.strip_prefix(self.source_root).map_err(|_| {
            anyhow!(
                "walked path '{}' is outside source '{}'",
                path.display(),
                self.source_root.display()
            )
        })?;
        if rel.as_os_str().is_empty() {
            Ok(self.report.destination.clone())
        } else {
            Ok(self.report.destination.join(rel))
        }
    }

    fn mirror_dir(&mut self, src: &Path) -> Result<()> {
        let dst = self.destination_for(src)?;
        let existed = dst.is_dir();
        if self.dry_run {
            info!(action = "mkdir -p", path = %dst.display(), "dry-run");
        } else if !existed {
            create_dir_all_private(&dst).map_err(|e| TreeError::CopyFailed {
                src: src.to_path_buf(),
                dest: dst.clone(),
                context: describe_io_error("create directory", &dst, &e),
            })?;
            debug!(src = %src.display(), dest = %dst.display(), "Created directory");
        }
        if !existed {
            self.report.dirs_created += 1;
        }
        Ok(())
    }

    fn mirror_file(&mut self, entry: &Entry<'_>) -> Result<()> {
        let src = entry.path();
        if let Some(exclusion) = self.exclusion {
            exclusion.check()?;
            if exclusion.excludes(src) {
                debug!(path = %src.display(), ext = exclusion.extension(), "Skipping excluded file");
                self.report.files_skipped += 1;
                return Ok(());
            }
        }

        let dst = self.destination_for(src)?;
        if self.dry_run {
            info!(action = "copy", src = %src.display(), dest = %dst.display(), "dry-run");
            self.report.files_copied += 1;
            self.report.bytes_copied += entry.file_len();
            return Ok(());
        }

        // Parent directories are normally already there from the directory
        // entries; recreate them anyway so a file never lands in a missing dir.
        if let Some(parent) = dst.parent() {
            create_dir_all_private(parent).map_err(|e| TreeError::CopyFailed {
                src: src.to_path_buf(),
                dest: dst.clone(),
                context: describe_io_error("create directory", parent, &e),
            })?;
        }

        let bytes = copy_truncating(src, &dst).map_err(|e| TreeError::CopyFailed {
            src: src.to_path_buf(),
            dest: dst.clone(),
            context: e.to_string(),
        })?;
        debug!(src = %src.display(), dest = %dst.display(), bytes, "Copied file");
        self.report.files_copied += 1;
        self.report.bytes_copied += bytes;
        Ok(())
    }
}

impl Visitor for Mirror<'_> {
    fn visit(&mut self, entry: &Entry<'_>) -> Result<()> {
        match entry.kind() {
            EntryKind::Dir => self.mirror_dir(entry.path()),
            EntryKind::File => self.mirror_file(entry),
            EntryKind::Symlink | EntryKind::Other => {
                debug!(path = %entry.path().display(), kind = ?entry.kind(), "Skipping non-regular entry");
                Ok(())
            }
        }
    }
}

/// Final path component of `source_root`, resolving `.`/`..` style roots.
fn source_name(source_root: &Path) -> Result<OsString> {
    if let Some(name) = source_root.file_name() {
        return Ok(name.to_owned());
    }
    let real = fs::canonicalize(source_root).map_err(io_error_with_help("resolve", source_root))?;
    real.file_name()
        .map(|n| n.to_owned())
        .ok_or_else(|| anyhow!("Source directory has no name: {}", source_root.display()))
}

/// Where `mirror` will place the copy of `source_root`.
pub fn mirror_target(source_root: &Path, destination_root: &Path) -> Result<PathBuf> {
    Ok(destination_root.join(source_name(source_root)?))
}

/// The walk never dereferences its root; a symlinked source root is refused.
fn ensure_physical_root(source_root: &Path) -> Result<()> {
    let meta = fs::symlink_metadata(source_root).map_err(io_error_with_help("inspect", source_root))?;
    if meta.file_type().is_symlink() {
        return Err(TreeError::SourceIsSymlink(source_root.to_path_buf()).into());
    }
    Ok(())
}

/// Refuse targets inside the source tree; the walk would copy its own output.
fn ensure_outside_source(source_root: &Path, destination_root: &Path, target: &Path) -> Result<()> {
    let src_real = fs::canonicalize(source_root).unwrap_or_else(|_| source_root.to_path_buf());
    let dest_real =
        fs::canonicalize(destination_root).unwrap_or_else(|_| destination_root.to_path_buf());
    let target_real = match target.file_name() {
        Some(name) => dest_real.join(name),
        None => dest_real,
    };
    if target_real.starts_with(&src_real) {
        return Err(TreeError::DestinationInsideSource {
            src: source_root.to_path_buf(),
            dest: target.to_path_buf(),
        }
        .into());
    }
    Ok(())
}

/// Copy `source_root` to `destination_root/basename(source_root)`.
///
/// `exclude` names one extension (`.pdf`, `.txt` or `.c`) whose files are not
/// copied; it is matched per `config.matching`.
pub fn mirror(
    config: &Config,
    source_root: &Path,
    destination_root: &Path,
    exclude: Option<&str>,
) -> Result<MirrorReport> {
    ensure_physical_root(source_root)?;
    let target = mirror_target(source_root, destination_root)?;
    ensure_outside_source(source_root, destination_root, &target)?;

    let exclusion = exclude.map(|ext| Exclusion::new(ext, config.matching));
    let mut visitor = Mirror {
        source_root,
        exclusion: exclusion.as_ref(),
        dry_run: config.dry_run,
        report: MirrorReport {
            destination: target,
            ..Default::default()
        },
    };

    walk(source_root, &config.walk_options(TREE_MAX_OPEN), &mut visitor)?;

    let report = visitor.report;
    info!(
        src = %source_root.display(),
        dest = %report.destination.display(),
        dirs = report.dirs_created,
        files = report.files_copied,
        skipped = report.files_skipped,
        bytes = report.bytes_copied,
        dry_run = config.dry_run,
        "Mirrored directory tree"
    );
    Ok(report)
}
