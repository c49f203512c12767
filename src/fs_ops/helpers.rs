//! I/O error context.
//!
//! Turns a bare `io::Error` into "<op> '<path>': <error> — <hint> [os code: N]"
//! so a failed walk tells the user which entry broke and what to check.
//!
//!   fs::remove_file(p).map_err(io_error_with_help("remove file", p))?;

use anyhow::anyhow;
use std::io;
use std::path::Path;

#[cfg(unix)]
fn os_hint(code: i32) -> Option<&'static str> {
    match code {
        libc::EACCES | libc::EPERM => Some("permission denied; check ownership and directory permissions"),
        libc::ENOENT => Some("path not found; it may have been removed during the walk"),
        libc::ENOTEMPTY => Some("directory not empty; something was added during the walk"),
        libc::ENOSPC => Some("insufficient space on device"),
        libc::EROFS => Some("read-only filesystem"),
        libc::ELOOP => Some("too many symbolic link levels"),
        libc::ENAMETOOLONG => Some("filename or path too long"),
        libc::EMFILE => Some("process file descriptor limit reached; lower --max-open"),
        libc::ENFILE => Some("system-wide file table overflow"),
        libc::EISDIR => Some("is a directory"),
        libc::ENOTDIR => Some("a path component is not a directory"),
        _ => None,
    }
}

#[cfg(windows)]
fn os_hint(code: i32) -> Option<&'static str> {
    match code {
        5 => Some("access denied; check permissions"),
        2 | 3 => Some("path not found"),
        32 => Some("sharing violation; file is in use"),
        112 => Some("insufficient disk space"),
        145 => Some("directory not empty"),
        206 => Some("filename or path too long"),
        _ => None,
    }
}

#[cfg(not(any(unix, windows)))]
fn os_hint(_code: i32) -> Option<&'static str> {
    None
}

fn kind_hint(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and directory permissions"),
        io::ErrorKind::NotFound => Some("path not found"),
        io::ErrorKind::AlreadyExists => Some("already exists"),
        io::ErrorKind::WriteZero => Some("short write; destination may be full"),
        io::ErrorKind::UnexpectedEof => Some("source shrank while being copied"),
        _ => None,
    }
}

/// Human-readable message for an I/O failure on `path`.
pub fn describe_io_error(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    match e.raw_os_error() {
        Some(code) => {
            if let Some(h) = os_hint(code) {
                msg.push_str(" — ");
                msg.push_str(h);
            }
            msg.push_str(&format!(" [os code: {}]", code));
        }
        None => {
            if let Some(h) = kind_hint(e.kind()) {
                msg.push_str(" — ");
                msg.push_str(h);
            }
        }
    }
    msg
}

/// `.map_err` adapter for anyhow code paths.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(describe_io_error(op, path, &e))
}

/// `.map_err` adapter for io::Result code paths; keeps the original ErrorKind.
pub fn io_error_with_help_io<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> io::Error + 'a {
    move |e: io::Error| io::Error::new(e.kind(), describe_io_error(op, path, &e))
}
