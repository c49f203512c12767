//! Filesystem operations built on the tree walker.

mod count;
mod helpers;
mod io_copy;
mod mirror;
mod remove;
mod size;
mod tree_move;

pub use count::{DirCounter, FileCounter, count_dirs, count_files};
pub use helpers::{describe_io_error, io_error_with_help, io_error_with_help_io};
pub use mirror::{EXCLUDABLE_EXTENSIONS, Exclusion, Matching, MirrorReport, mirror, mirror_target};
pub use remove::{RemoveReport, remove_tree};
pub use size::{SizeAccumulator, total_size};
pub use tree_move::move_tree;
