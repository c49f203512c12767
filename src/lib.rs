//! Core library for `treewalk`.
//!
//! Every operation is one physical depth-first walk (`walk`) with a visitor:
//! counting files or directories, summing sizes, mirroring a tree under a
//! destination, or removing it. Results come back as values; nothing is kept
//! in process-wide state apart from the interrupt flag.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod platform;
pub mod shutdown;
pub mod walk;

pub use config::{Config, LogLevel, path_has_symlink_ancestor};
pub use errors::TreeError;
pub use fs_ops::{
    Exclusion, Matching, MirrorReport, RemoveReport, count_dirs, count_files, mirror, move_tree,
    remove_tree, total_size,
};
pub use walk::{Entry, EntryKind, Order, Visitor, WalkOptions, visit_fn, walk};
