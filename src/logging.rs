//! Tracing initialization.
//! Builds a subscriber with EnvFilter, compact or JSON formatting on stderr,
//! and an optional non-blocking file layer.
//!
//! Behavior:
//! - Log level is driven by LogLevel (no RUST_LOG override here).
//! - Logs never go to stdout; stdout is reserved for operation results.
//! - File logging is refused if any ancestor of the file path is a symlink.

use anyhow::Result;
use chrono::Local;
use std::fmt as stdfmt;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt as tsfmt;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;
use tracing_subscriber::util::SubscriberInitExt;

use treewalk::output as out;
use treewalk::platform::open_log_file_secure_append;
use treewalk::{LogLevel, path_has_symlink_ancestor};

/// Human-friendly timestamp formatter (DD/MM/YY HH:MM:SS)
struct LocalHumanTime;
impl FormatTime for LocalHumanTime {
    fn format_time(&self, w: &mut tsfmt::format::Writer<'_>) -> stdfmt::Result {
        write!(w, "{}", Local::now().format("%d/%m/%y %H:%M:%S"))
    }
}

#[inline]
fn to_level_filter(lvl: LogLevel) -> LevelFilter {
    match lvl {
        LogLevel::Quiet => LevelFilter::ERROR,
        LogLevel::Normal => LevelFilter::INFO,
        LogLevel::Info => LevelFilter::DEBUG,
        LogLevel::Debug => LevelFilter::TRACE,
    }
}

/// Open a non-blocking appender for `path`, or explain on stderr why not.
fn maybe_open_non_blocking_writer(path: &Path) -> Option<(NonBlocking, WorkerGuard)> {
    match path_has_symlink_ancestor(path) {
        Ok(false) => {}
        Ok(true) => {
            out::print_warn(&format!(
                "Refusing to log to {}: an ancestor directory is a symlink",
                path.display()
            ));
            return None;
        }
        Err(e) => {
            out::print_warn(&format!(
                "Could not check log path {} for symlinks: {}",
                path.display(),
                e
            ));
            return None;
        }
    }

    match open_log_file_secure_append(path) {
        Ok(file) => Some(tracing_appender::non_blocking(file)),
        Err(e) => {
            out::print_warn(&format!("Failed to open log file {}: {}", path.display(), e));
            None
        }
    }
}

/// Install the global subscriber. The returned guard (present when a log file
/// is active) must be held until exit so buffered lines are flushed.
pub fn init_tracing(lvl: LogLevel, log_file: Option<&Path>, json: bool) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::default().add_directive(to_level_filter(lvl).into());

    let (file_writer, guard) = match log_file.and_then(maybe_open_non_blocking_writer) {
        Some((writer, guard)) => (Some(writer), Some(guard)),
        None => (None, None),
    };

    // Option<Layer> is itself a Layer, so each format/sink pair is present or not.
    let stderr_json = json.then(|| {
        tsfmt::layer()
            .json()
            .with_timer(LocalHumanTime)
            .with_target(true)
            .with_writer(io::stderr)
    });
    let stderr_compact = (!json).then(|| {
        tsfmt::layer()
            .compact()
            .with_timer(LocalHumanTime)
            .with_target(false)
            .with_writer(io::stderr)
    });
    let file_json = file_writer.clone().filter(|_| json).map(|w| {
        tsfmt::layer()
            .json()
            .with_timer(LocalHumanTime)
            .with_ansi(false)
            .with_writer(w)
    });
    let file_compact = file_writer.filter(|_| !json).map(|w| {
        tsfmt::layer()
            .compact()
            .with_timer(LocalHumanTime)
            .with_ansi(false)
            .with_writer(w)
    });

    registry()
        .with(env_filter)
        .with(stderr_json)
        .with(stderr_compact)
        .with(file_json)
        .with(file_compact)
        .try_init()?;
    Ok(guard)
}
