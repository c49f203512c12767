//! Non-Unix implementations of platform helpers.
//! Windows has no mode bits, so creation falls back to the OS defaults.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    OpenOptions::new().create(true).append(true).open(path)
}

pub fn create_dir_all_private(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}

pub fn open_copy_destination(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}
