//! Platform-specific helpers.
//! Hides the Unix/Windows split for file and directory creation modes so the
//! visitors stay platform-agnostic.

#[cfg(unix)]
mod unix;
#[cfg(not(unix))]
mod windows;

#[cfg(unix)]
pub use unix::{create_dir_all_private, open_copy_destination, open_log_file_secure_append};

#[cfg(not(unix))]
pub use windows::{create_dir_all_private, open_copy_destination, open_log_file_secure_append};
