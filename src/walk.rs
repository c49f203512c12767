//! Physical depth-first tree walk.
//!
//! One walk drives every operation: the caller picks a [`Visitor`] and the
//! walker feeds it each entry under the root exactly once (root included, at
//! depth 0). Symlinks are reported as [`EntryKind::Symlink`] and never
//! followed, the root included. The walk stops at the first visitor error, traversal error, or
//! interrupt; nothing already done is undone.

use anyhow::Result;
use std::fs::{FileType, Metadata};
use std::path::Path;
use tracing::trace;
use walkdir::WalkDir;

use crate::errors::TreeError;
use crate::fs_ops::describe_io_error;
use crate::shutdown;

/// Open-directory bound used by the counting and sizing walks.
pub const COUNT_MAX_OPEN: usize = 20;
/// Open-directory bound used by the mirror and remove walks.
pub const TREE_MAX_OPEN: usize = 64;

/// Type tag of a visited entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    /// Sockets, fifos, device nodes.
    Other,
}

impl EntryKind {
    fn from_file_type(ft: FileType) -> Self {
        if ft.is_symlink() {
            EntryKind::Symlink
        } else if ft.is_dir() {
            EntryKind::Dir
        } else if ft.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

/// One filesystem entry as seen by a visitor.
#[derive(Debug)]
pub struct Entry<'a> {
    path: &'a Path,
    depth: usize,
    kind: EntryKind,
    metadata: Option<Metadata>,
}

impl<'a> Entry<'a> {
    pub fn path(&self) -> &'a Path {
        self.path
    }

    /// 0 for the walk root, 1 for its children, and so on.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_root(&self) -> bool {
        self.depth == 0
    }

    /// Present for files and directories only.
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// Size in bytes for regular files, 0 for everything else.
    pub fn file_len(&self) -> u64 {
        match (self.kind, &self.metadata) {
            (EntryKind::File, Some(m)) => m.len(),
            _ => 0,
        }
    }
}

/// Order in which a directory is reported relative to its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Directory first, then its contents.
    #[default]
    PreOrder,
    /// Contents first, then the directory.
    PostOrder,
}

/// Knobs for a single walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkOptions {
    /// Maximum number of directory handles held open at once. Deeper trees
    /// still walk correctly; walkdir buffers the remaining entries in memory.
    pub max_open: usize,
    pub order: Order,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            max_open: TREE_MAX_OPEN,
            order: Order::PreOrder,
        }
    }
}

impl WalkOptions {
    pub fn new(max_open: usize) -> Self {
        Self {
            max_open,
            ..Default::default()
        }
    }

    pub fn post_order(mut self) -> Self {
        self.order = Order::PostOrder;
        self
    }
}

/// Per-entry callback. Returning an error aborts the walk.
pub trait Visitor {
    fn visit(&mut self, entry: &Entry<'_>) -> Result<()>;
}

impl<F> Visitor for F
where
    F: FnMut(&Entry<'_>) -> Result<()>,
{
    fn visit(&mut self, entry: &Entry<'_>) -> Result<()> {
        self(entry)
    }
}

/// Pins a closure to the visitor signature so its entry lifetime is
/// inferred as higher-ranked.
pub fn visit_fn<F>(f: F) -> F
where
    F: FnMut(&Entry<'_>) -> Result<()>,
{
    f
}

/// Walk `root` and hand every entry to `visitor`.
pub fn walk<V>(root: &Path, opts: &WalkOptions, visitor: &mut V) -> Result<()>
where
    V: Visitor + ?Sized,
{
    let walker = WalkDir::new(root)
        .follow_links(false)
        .follow_root_links(false)
        .max_open(opts.max_open)
        .contents_first(opts.order == Order::PostOrder);

    for item in walker {
        if shutdown::is_requested() {
            return Err(TreeError::Interrupted.into());
        }

        let dent = item.map_err(|e| traversal_error(root, &e))?;
        let kind = EntryKind::from_file_type(dent.file_type());
        let metadata = match kind {
            EntryKind::File | EntryKind::Dir => {
                Some(dent.metadata().map_err(|e| traversal_error(root, &e))?)
            }
            EntryKind::Symlink | EntryKind::Other => None,
        };

        let entry = Entry {
            path: dent.path(),
            depth: dent.depth(),
            kind,
            metadata,
        };
        trace!(path = %entry.path.display(), depth = entry.depth, kind = ?entry.kind, "visit");
        visitor.visit(&entry)?;
    }
    Ok(())
}

fn traversal_error(root: &Path, e: &walkdir::Error) -> anyhow::Error {
    let path = e.path().unwrap_or(root).to_path_buf();
    let message = match e.io_error() {
        Some(io) => describe_io_error("read", &path, io),
        None => e.to_string(),
    };
    TreeError::Traversal { path, message }.into()
}
