//! Whole-file copy for the mirror visitor.
//!
//! The destination is created or truncated (never appended to) with the
//! permissive create mode from `platform::open_copy_destination`. Only bytes
//! are copied: ownership, timestamps and xattrs are left to the OS defaults.
//! `io::copy` between two `File`s uses copy_file_range/sendfile on Linux and
//! falls back to a userspace buffer elsewhere.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::platform::open_copy_destination;

use super::helpers::io_error_with_help_io;

/// Copy `src` over `dst`, returning the number of bytes written.
pub(crate) fn copy_truncating(src: &Path, dst: &Path) -> io::Result<u64> {
    let mut input = File::open(src).map_err(io_error_with_help_io("open source", src))?;
    let mut output =
        open_copy_destination(dst).map_err(io_error_with_help_io("open destination", dst))?;
    let bytes = io::copy(&mut input, &mut output).map_err(io_error_with_help_io("write", dst))?;
    output.flush()?;
    Ok(bytes)
}
